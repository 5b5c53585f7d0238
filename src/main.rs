//! Jungle Escape: a tiny side-scrolling arcade game
//!
//! Jump the patrolling monkey, grab coins, outlive your record.
//! The simulation runs at a fixed 60 ticks per second regardless of
//! what the display gives us; the high score survives restarts in a
//! plain text file in the working directory.

mod app;
mod audio;
mod game;
mod input;
mod render;
mod score;
mod ticker;
mod ui;
mod viewport;

use macroquad::prelude::*;

use app::{App, Screen};
use audio::SoundBank;
use game::GameSession;
use render::{GameOverAction, MenuAction, Sprites};
use score::HighScoreStore;
use ui::MouseState;
use viewport::Viewport;

fn window_conf() -> Conf {
    Conf {
        window_title: "Jungle Escape".to_string(),
        window_width: viewport::INITIAL_WIDTH as i32,
        window_height: viewport::INITIAL_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let sprites = Sprites::load().await;
    let sounds = SoundBank::load().await;

    let viewport = Viewport::new(screen_width(), screen_height());
    // The browser build has no filesystem; its record lasts the page session
    #[cfg(not(target_arch = "wasm32"))]
    let store: Box<dyn HighScoreStore> =
        Box::new(score::FileHighScores::new(score::HIGH_SCORE_FILE));
    #[cfg(target_arch = "wasm32")]
    let store: Box<dyn HighScoreStore> = Box::new(score::MemoryHighScores::new(0));
    let mut app = App::new(GameSession::new(viewport, store));

    println!("=== JUNGLE ESCAPE ===");

    loop {
        // Resize is polled, not evented: react whenever the window
        // dimensions move
        let current = Viewport::new(screen_width(), screen_height());
        if current != app.session.viewport() {
            app.handle_resize(current);
        }

        for event in input::poll_events() {
            app.handle_input(event);
        }

        let events = app.advance(get_frame_time());
        for _ in 0..events.coins_collected {
            sounds.play_coin();
        }

        let mouse = MouseState::poll();
        match app.screen() {
            Screen::Menu => match render::draw_menu(&sprites, &mouse) {
                MenuAction::Start => {
                    sounds.play_click();
                    app.start_game();
                }
                MenuAction::Quit => app.quit(),
                MenuAction::None => {}
            },
            Screen::Game => render::draw_game(&app.session, &sprites),
            Screen::GameOver => match render::draw_game_over(app.standing(), &sprites, &mouse) {
                GameOverAction::Restart => app.start_game(),
                GameOverAction::Quit => app.quit(),
                GameOverAction::None => {}
            },
        }

        if app.should_quit() {
            break;
        }
        next_frame().await
    }
}
