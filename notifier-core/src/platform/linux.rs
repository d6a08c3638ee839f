//! Linux presenter: notify-send, PulseAudio/ALSA players over freedesktop sounds

use super::command::run_tool;
use super::Presenter;
use crate::error::ChannelError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

const FREEDESKTOP_SOUNDS_DIR: &str = "/usr/share/sounds/freedesktop/stereo";
const TOOL_TIMEOUT: Duration = Duration::from_secs(5);

/// Players tried in order
const PLAYERS: [&str; 2] = ["paplay", "aplay"];

/// Generic fallbacks after the level's preferred sound
const FALLBACK_SOUNDS: [&str; 3] = ["complete.oga", "message.oga", "dialog-information.oga"];

pub struct LinuxPresenter {
    sound_dir: PathBuf,
}

impl LinuxPresenter {
    pub fn new() -> Self {
        Self::with_sound_dir(FREEDESKTOP_SOUNDS_DIR)
    }

    pub fn with_sound_dir(sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            sound_dir: sound_dir.into(),
        }
    }

    /// Existing sound files for a cue, preferred file first
    pub(crate) fn sound_candidates(&self, sound: &str) -> Vec<PathBuf> {
        let mut names = vec![preferred_sound(sound)];
        for name in FALLBACK_SOUNDS {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
            .into_iter()
            .map(|name| self.sound_dir.join(name))
            .filter(|path| path.exists())
            .collect()
    }
}

impl Default for LinuxPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Freedesktop sound theme file for a macOS-style sound name
fn preferred_sound(sound: &str) -> &'static str {
    match sound {
        "Glass" => "complete.oga",
        "Basso" => "dialog-error.oga",
        _ => "message.oga",
    }
}

#[async_trait]
impl Presenter for LinuxPresenter {
    fn name(&self) -> &str {
        "Linux"
    }

    async fn show(&self, title: &str, message: &str) -> Result<(), ChannelError> {
        let args = vec![title.to_string(), message.to_string()];
        run_tool(
            "notify-send",
            &args,
            TOOL_TIMEOUT,
            Some("install: sudo apt install libnotify-bin"),
        )
        .await
    }

    async fn play(&self, sound: &str) -> Result<(), ChannelError> {
        let candidates = self.sound_candidates(sound);
        if candidates.is_empty() {
            return Err(ChannelError::SoundNotFound(format!(
                "no sound files in {} (install: sudo apt install sound-theme-freedesktop)",
                self.sound_dir.display()
            )));
        }

        let mut last_error = None;
        for player in PLAYERS {
            for path in &candidates {
                let args = vec![path.display().to_string()];
                match run_tool(player, &args, TOOL_TIMEOUT, None).await {
                    Ok(()) => {
                        tracing::debug!(player, sound = %path.display(), "sound played");
                        return Ok(());
                    }
                    Err(e @ ChannelError::ToolMissing { .. }) => {
                        last_error = Some(e);
                        break;
                    }
                    Err(e) => last_error = Some(e),
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ChannelError::ToolMissing {
            tool: PLAYERS.join("/"),
            hint: None,
        }))
    }
}
