//! Human-readable dispatch summary

use notifier_core::models::{ChannelOutcome, ChannelStatus, DispatchReport};

fn outcome_line(outcome: &ChannelOutcome) -> String {
    match outcome.status {
        ChannelStatus::Succeeded => format!("[OK]    {}", outcome.channel),
        ChannelStatus::Failed => format!(
            "[FAIL]  {}: {}",
            outcome.channel,
            outcome.error.as_deref().unwrap_or("unknown error")
        ),
        ChannelStatus::NotAttempted => format!("[SKIP]  {} (disabled)", outcome.channel),
    }
}

/// One line per channel followed by the summary line
pub fn summary_lines(report: &DispatchReport) -> Vec<String> {
    let mut lines: Vec<String> = report.outcomes.iter().map(outcome_line).collect();
    if report.is_noop() {
        lines.push("[SUMMARY] All channels disabled, nothing sent".to_string());
    } else {
        lines.push(format!(
            "[SUMMARY] Notification complete: {}/{} channels succeeded",
            report.succeeded_count(),
            report.attempted_count()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier_core::models::{ChannelKind, Level};

    #[test]
    fn test_summary_lines() {
        let report = DispatchReport::new(
            Level::Error,
            vec![
                ChannelOutcome::not_attempted(ChannelKind::Push),
                ChannelOutcome::failed(ChannelKind::Desktop, "notify-send not found"),
                ChannelOutcome::succeeded(ChannelKind::Sound),
            ],
        );

        assert_eq!(
            summary_lines(&report),
            vec![
                "[SKIP]  push (disabled)",
                "[FAIL]  desktop: notify-send not found",
                "[OK]    sound",
                "[SUMMARY] Notification complete: 1/2 channels succeeded",
            ]
        );
    }

    #[test]
    fn test_noop_summary() {
        let report = DispatchReport::new(
            Level::Info,
            ChannelKind::ALL
                .iter()
                .map(|c| ChannelOutcome::not_attempted(*c))
                .collect(),
        );
        let lines = summary_lines(&report);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "[SUMMARY] All channels disabled, nothing sent");
    }
}
