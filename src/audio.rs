//! Sound Cues
//!
//! Two one-shot cues: a coin grab and a button click. Loading is best
//! effort; a missing or broken file mutes that cue and the game plays
//! on. Nothing here can fail at play time.

use macroquad::audio::{load_sound, play_sound_once, Sound};

/// The game's sound effects, each absent if its file didn't load
pub struct SoundBank {
    coin: Option<Sound>,
    click: Option<Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        Self {
            coin: load_optional(&["assets/coin.ogg", "assets/coin.wav"]).await,
            click: load_optional(&["assets/click.ogg", "assets/click.wav"]).await,
        }
    }

    pub fn play_coin(&self) {
        if let Some(sound) = &self.coin {
            play_sound_once(sound);
        }
    }

    pub fn play_click(&self) {
        if let Some(sound) = &self.click {
            play_sound_once(sound);
        }
    }
}

/// Try each candidate path in order, keeping the first that decodes
async fn load_optional(paths: &[&str]) -> Option<Sound> {
    for path in paths {
        match load_sound(path).await {
            Ok(sound) => return Some(sound),
            Err(e) => {
                eprintln!("Failed to load sound {}: {}", path, e);
            }
        }
    }
    None
}
