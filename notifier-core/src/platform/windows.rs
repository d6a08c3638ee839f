//! Windows presenter: PowerShell toast notifications and system sounds

use super::command::run_tool;
use super::Presenter;
use crate::error::ChannelError;
use async_trait::async_trait;
use std::time::Duration;

const TOAST_TIMEOUT: Duration = Duration::from_secs(10);
const SOUND_TIMEOUT: Duration = Duration::from_secs(5);
const APP_ID: &str = "Task Notifier";

pub struct WindowsPresenter;

impl WindowsPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape for a PowerShell double-quoted here-string
fn escape_powershell(value: &str) -> String {
    value.replace('`', "``").replace('$', "`$")
}

pub(crate) fn toast_script(title: &str, message: &str) -> String {
    let title = escape_powershell(&escape_xml(title));
    let message = escape_powershell(&escape_xml(message));
    format!(
        r#"[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom, ContentType = WindowsRuntime] | Out-Null
$template = @"
<toast>
    <visual>
        <binding template="ToastGeneric">
            <text>{title}</text>
            <text>{message}</text>
        </binding>
    </visual>
</toast>
"@
$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = New-Object Windows.UI.Notifications.ToastNotification $xml
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier("{app}").Show($toast)"#,
        title = title,
        message = message,
        app = APP_ID,
    )
}

/// `System.Media.SystemSounds` member for a macOS-style sound name
fn system_sound(sound: &str) -> &'static str {
    match sound {
        "Glass" => "Asterisk",
        "Basso" => "Hand",
        _ => "Beep",
    }
}

pub(crate) fn sound_script(sound: &str) -> String {
    format!(
        "[System.Media.SystemSounds]::{}.Play(); Start-Sleep -Milliseconds 600",
        system_sound(sound)
    )
}

fn powershell_args(script: String) -> Vec<String> {
    vec!["-NoProfile".to_string(), "-Command".to_string(), script]
}

#[async_trait]
impl Presenter for WindowsPresenter {
    fn name(&self) -> &str {
        "Windows"
    }

    async fn show(&self, title: &str, message: &str) -> Result<(), ChannelError> {
        let args = powershell_args(toast_script(title, message));
        run_tool("powershell", &args, TOAST_TIMEOUT, None).await
    }

    async fn play(&self, sound: &str) -> Result<(), ChannelError> {
        let args = powershell_args(sound_script(sound));
        run_tool("powershell", &args, SOUND_TIMEOUT, None).await
    }
}
