//! Application state and screen management
//!
//! Fixed set of screens; exactly one is active. The app owns the
//! session and the tick schedule, and routes input so gameplay keys
//! only ever reach an active run.

use crate::game::GameSession;
use crate::input::InputEvent;
use crate::ticker::Ticker;
use crate::viewport::Viewport;

/// The three screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Game,
    GameOver,
}

impl Screen {
    /// Display label for this screen
    #[allow(dead_code)]
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Game => "Game",
            Screen::GameOver => "Game Over",
        }
    }
}

/// Numbers shown on the game-over screen, frozen at the tick the run
/// ended
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalStanding {
    pub score: u32,
    pub high_score: u32,
}

/// What one frame of simulation produced, for the shell to react to
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameEvents {
    /// Coins grabbed this frame (one sound cue each)
    pub coins_collected: u32,
}

/// Main application state
pub struct App {
    screen: Screen,
    pub session: GameSession,
    ticker: Ticker,
    standing: FinalStanding,
    should_quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            screen: Screen::Menu,
            session,
            ticker: Ticker::new(),
            standing: FinalStanding::default(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Final score and record of the run that just ended
    pub fn standing(&self) -> FinalStanding {
        self.standing
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request application shutdown at the end of the frame
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Begin a fresh run and switch to the game screen. Also serves as
    /// restart: the schedule is replaced, never doubled.
    pub fn start_game(&mut self) {
        self.session.start();
        self.ticker.start();
        self.screen = Screen::Game;
    }

    /// Route a gameplay input. Ignored entirely outside the game screen.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.screen != Screen::Game {
            return;
        }
        match event {
            InputEvent::JumpPressed => self.session.explorer.jump(),
            InputEvent::MoveLeftDown => self.session.explorer.moving_left = true,
            InputEvent::MoveLeftUp => self.session.explorer.moving_left = false,
            InputEvent::MoveRightDown => self.session.explorer.moving_right = true,
            InputEvent::MoveRightUp => self.session.explorer.moving_right = false,
        }
    }

    /// Forward a window size change. The session re-anchors regardless
    /// of the active screen, so the layout is right when play resumes.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.session.handle_resize(viewport);
    }

    /// Drive the simulation with one frame's worth of wall-clock time.
    pub fn advance(&mut self, dt: f32) -> FrameEvents {
        let mut events = FrameEvents::default();

        for _ in 0..self.ticker.advance(dt) {
            let outcome = self.session.tick();
            if outcome.coin_collected {
                events.coins_collected += 1;
            }
            if outcome.hit_monkey {
                self.end_run();
                break;
            }
        }
        events
    }

    /// Stop the schedule and freeze the numbers for the game-over
    /// screen. The session has already persisted the record.
    fn end_run(&mut self) {
        self.ticker.stop();
        self.standing = FinalStanding {
            score: self.session.score,
            high_score: self.session.high_score,
        };
        self.screen = Screen::GameOver;
    }
}
