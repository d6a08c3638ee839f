//! Bounded execution of host notification tools

use crate::error::ChannelError;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run `program` with `args`, capturing output, killed after `limit`.
///
/// A missing binary becomes `ToolMissing` (with `hint` when given), a non-zero
/// exit becomes `CommandFailed` carrying the trimmed stderr.
pub(crate) async fn run_tool(
    program: &str,
    args: &[String],
    limit: Duration,
    hint: Option<&str>,
) -> Result<(), ChannelError> {
    tracing::debug!(tool = program, "running notification tool");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ChannelError::ToolMissing {
                tool: program.to_string(),
                hint: hint.map(str::to_string),
            },
            _ => ChannelError::Io(e),
        })?;

    let output = timeout(limit, child.wait_with_output())
        .await
        .map_err(|_| ChannelError::Timeout(limit))??;

    if output.status.success() {
        Ok(())
    } else {
        Err(ChannelError::CommandFailed {
            tool: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
