//! Rendering
//!
//! Draws the three screens. World coordinates are y-up with the origin
//! at the bottom-left; this is the only place that converts to the
//! renderer's y-down screen space. All art is optional: a missing
//! texture falls back to flat shapes, so the game runs from a bare
//! checkout.

use macroquad::prelude::*;

use crate::app::FinalStanding;
use crate::game::GameSession;
use crate::ui::{draw_text_centered, text_button, MouseState, Rect};
use crate::viewport::Viewport;

// Button palette, shared by the menu and game-over screens
const START_COLOR: Color = Color::new(0.0, 0.5, 0.0, 1.0);
const QUIT_COLOR: Color = Color::new(0.6, 0.0, 0.0, 1.0);
const GAME_OVER_RED: Color = Color::new(1.0, 0.2, 0.2, 1.0);

/// What the player clicked on the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start,
    Quit,
}

/// What the player clicked on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    None,
    Restart,
    Quit,
}

/// The game's textures, each absent if its file didn't load
pub struct Sprites {
    player: Option<Texture2D>,
    monkey: Option<Texture2D>,
    coin: Option<Texture2D>,
    background: Option<Texture2D>,
    menu_background: Option<Texture2D>,
}

impl Sprites {
    pub async fn load() -> Self {
        Self {
            player: load_optional("assets/player.png").await,
            monkey: load_optional("assets/monkey.png").await,
            coin: load_optional("assets/coin.png").await,
            background: load_optional("assets/background.png").await,
            menu_background: load_optional("assets/menu_background.png").await,
        }
    }
}

/// Best-effort texture load with smooth scaling
async fn load_optional(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Some(tex)
        }
        Err(e) => {
            println!("Failed to load {}: {}, using flat colors", path, e);
            None
        }
    }
}

/// World (y-up, bottom-left anchored box) to the screen y of its top edge
fn to_screen_y(viewport: Viewport, y: f32, h: f32) -> f32 {
    viewport.height - y - h
}

/// Stretch a texture over the whole window, or leave the clear color
fn draw_backdrop(texture: &Option<Texture2D>) {
    clear_background(SKYBLUE);
    if let Some(tex) = texture {
        draw_texture_ex(
            tex,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}

fn draw_sprite(texture: &Option<Texture2D>, x: f32, y: f32, w: f32, h: f32, fallback: Color) {
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, fallback),
    }
}

/// Draw the playfield: backdrop, the three entities, and the score
pub fn draw_game(session: &GameSession, sprites: &Sprites) {
    let vp = session.viewport();

    draw_backdrop(&sprites.background);
    if sprites.background.is_none() {
        // Ground strip from the ground line down
        let ground_top = vp.height - vp.ground_y();
        draw_rectangle(0.0, ground_top, screen_width(), screen_height() - ground_top, DARKGREEN);
    }

    let explorer = &session.explorer;
    draw_sprite(
        &sprites.player,
        explorer.x,
        to_screen_y(vp, explorer.y, explorer.height),
        explorer.width,
        explorer.height,
        ORANGE,
    );

    let monkey = &session.monkey;
    draw_sprite(
        &sprites.monkey,
        monkey.x,
        to_screen_y(vp, monkey.y, monkey.height),
        monkey.width,
        monkey.height,
        BROWN,
    );

    let coin = &session.coin;
    match &sprites.coin {
        Some(tex) => draw_texture_ex(
            tex,
            coin.x,
            to_screen_y(vp, coin.y, coin.height),
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(coin.width, coin.height)),
                ..Default::default()
            },
        ),
        None => draw_circle(
            coin.x + coin.width * 0.5,
            to_screen_y(vp, coin.y, coin.height) + coin.height * 0.5,
            coin.width * 0.5,
            GOLD,
        ),
    }

    // Score in the top-right corner
    let text = format!("Score: {}", session.score);
    let dims = measure_text(&text, None, 20, 1.0);
    draw_text(&text, screen_width() - dims.width - 16.0, 28.0, 20.0, WHITE);
}

/// Draw the title screen, reporting the clicked button if any
pub fn draw_menu(sprites: &Sprites, mouse: &MouseState) -> MenuAction {
    let sw = screen_width();
    let sh = screen_height();

    draw_backdrop(&sprites.menu_background);
    draw_text_centered("JUNGLE ESCAPE", sw * 0.5, sh * 0.22, 70.0, BLACK);

    let mut action = MenuAction::None;
    let start = Rect::centered(sw * 0.5, sh * 0.5, sw * 0.3, sh * 0.15);
    if text_button(start, "Start Game", 20.0, START_COLOR, mouse) {
        action = MenuAction::Start;
    }
    let quit = Rect::centered(sw * 0.5, sh * 0.7, sw * 0.3, sh * 0.15);
    if text_button(quit, "Quit", 20.0, QUIT_COLOR, mouse) {
        action = MenuAction::Quit;
    }
    action
}

/// Draw the game-over screen with the frozen final numbers
pub fn draw_game_over(
    standing: FinalStanding,
    sprites: &Sprites,
    mouse: &MouseState,
) -> GameOverAction {
    let sw = screen_width();
    let sh = screen_height();

    draw_backdrop(&sprites.background);
    draw_text_centered("GAME OVER!", sw * 0.5, sh * 0.2, 50.0, GAME_OVER_RED);
    draw_text_centered(
        &format!("Your Score: {}", standing.score),
        sw * 0.5,
        sh * 0.35,
        25.0,
        WHITE,
    );
    draw_text_centered(
        &format!("High Score: {}", standing.high_score),
        sw * 0.5,
        sh * 0.42,
        22.0,
        WHITE,
    );

    let mut action = GameOverAction::None;
    let restart = Rect::centered(sw * 0.5, sh * 0.55, sw * 0.3, sh * 0.15);
    if text_button(restart, "Restart", 20.0, START_COLOR, mouse) {
        action = GameOverAction::Restart;
    }
    let quit = Rect::centered(sw * 0.5, sh * 0.7, sw * 0.3, sh * 0.15);
    if text_button(quit, "Quit", 20.0, QUIT_COLOR, mouse) {
        action = GameOverAction::Quit;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_screen_flip() {
        let vp = Viewport::new(800.0, 480.0);
        // A grounded 100-unit sprite: top edge at 480 - 48 - 100
        assert_eq!(to_screen_y(vp, 48.0, 100.0), 332.0);
        // Higher in the world means closer to the top of the screen
        assert!(to_screen_y(vp, 148.0, 100.0) < to_screen_y(vp, 48.0, 100.0));
    }
}
