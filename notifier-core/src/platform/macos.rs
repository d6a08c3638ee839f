//! macOS presenter: osascript notifications, afplay system sounds

use super::command::run_tool;
use super::Presenter;
use crate::error::ChannelError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

const SYSTEM_SOUNDS_DIR: &str = "/System/Library/Sounds";
const TOOL_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MacPresenter {
    sound_dir: PathBuf,
}

impl MacPresenter {
    pub fn new() -> Self {
        Self::with_sound_dir(SYSTEM_SOUNDS_DIR)
    }

    pub fn with_sound_dir(sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            sound_dir: sound_dir.into(),
        }
    }

    fn sound_path(&self, sound: &str) -> PathBuf {
        self.sound_dir.join(format!("{}.aiff", sound))
    }
}

impl Default for MacPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for an AppleScript string literal
fn escape_applescript(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// AppleScript passed to `osascript -e`
pub(crate) fn notification_script(title: &str, message: &str) -> String {
    format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(message),
        escape_applescript(title)
    )
}

#[async_trait]
impl Presenter for MacPresenter {
    fn name(&self) -> &str {
        "macOS"
    }

    async fn show(&self, title: &str, message: &str) -> Result<(), ChannelError> {
        let args = vec!["-e".to_string(), notification_script(title, message)];
        run_tool("osascript", &args, TOOL_TIMEOUT, None).await
    }

    async fn play(&self, sound: &str) -> Result<(), ChannelError> {
        let path = self.sound_path(sound);
        if !path.exists() {
            return Err(ChannelError::SoundNotFound(path.display().to_string()));
        }
        let args = vec![path.display().to_string()];
        run_tool("afplay", &args, TOOL_TIMEOUT, None).await
    }
}
