//! Terminal view layer
//!
//! Pure state-to-text rendering for banners, toasts, the schedule panel, and
//! the execution log list, with color applied only at the print boundary.
//! User-facing strings are Korean, matching what the service itself emits.

use std::time::Duration;

use colored::Colorize;
use overseer_client::Outcome;
use overseer_core::domain::execution::ExecutionRecord;
use overseer_core::domain::schedule::ScheduleStatus;
use overseer_core::dto::logs::LogsPage;

/// Visual class of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Running,
    Success,
    Error,
}

/// The status banner for one run
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn running() -> Self {
        Self {
            kind: BannerKind::Running,
            text: "실행 중...".to_string(),
        }
    }

    pub fn started() -> Self {
        Self {
            kind: BannerKind::Running,
            text: "실행이 시작되었습니다. 상태를 확인하는 중...".to_string(),
        }
    }

    pub fn success(record: &ExecutionRecord) -> Self {
        let text = match &record.results {
            Some(results) => format!(
                "실행 성공! {}개 주차, {}명 처리",
                results.weeks_processed,
                results.participants.len()
            ),
            None => "실행 성공!".to_string(),
        };
        Self {
            kind: BannerKind::Success,
            text,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: BannerKind::Error,
            text: format!("실행 실패: {message}"),
        }
    }

    pub fn timeout() -> Self {
        Self::error("실행 시간이 초과되었습니다.")
    }

    /// Renders the terminal banner for a poll outcome
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Succeeded(record) => Self::success(record),
            Outcome::Failed { message } => match message {
                Some(message) => Self::error(message),
                None => Self {
                    kind: BannerKind::Error,
                    text: "실행 실패".to_string(),
                },
            },
            Outcome::TimedOut => Self::timeout(),
        }
    }

    /// How long the banner stays up before auto-hiding
    pub fn dismiss_after(&self) -> Option<Duration> {
        match self.kind {
            BannerKind::Running => None,
            BannerKind::Success => Some(Duration::from_secs(3)),
            BannerKind::Error => Some(Duration::from_secs(5)),
        }
    }
}

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient, self-dismissing notification
///
/// Each toast is an independent value; any number can be shown at once.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// How long a toast stays fully visible
    pub const VISIBLE_FOR: Duration = Duration::from_secs(3);
    /// Exit transition before the toast is gone for good
    pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Renders the schedule status panel
pub fn schedule_panel(status: &ScheduleStatus) -> String {
    if !status.active {
        return "자동 실행이 설정되지 않았습니다".to_string();
    }

    let mut panel = format!("활성: {}", status.schedule.as_deref().unwrap_or("-"));
    if let Some(next_run) = status.next_run {
        panel.push_str(&format!("\n다음 실행: {}", format_datetime(next_run)));
    }
    panel
}

/// Toast announcing a newly configured daily trigger
pub fn schedule_set_toast(hour: u32, minute: u32) -> Toast {
    Toast::success(format!(
        "자동 실행이 매일 {hour:02}:{minute:02}에 설정되었습니다"
    ))
}

/// Toast announcing the daily trigger was removed
pub fn schedule_removed_toast() -> Toast {
    Toast::success("자동 실행 스케줄이 제거되었습니다")
}

pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

// =============================================================================
// Print boundary
// =============================================================================

pub fn print_banner(banner: &Banner) {
    match banner.kind {
        BannerKind::Running => println!("{}", banner.text.cyan()),
        BannerKind::Success => println!("{} {}", "✓".green(), banner.text.green()),
        BannerKind::Error => println!("{} {}", "✗".red(), banner.text.red()),
    }
}

pub fn print_toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Info => println!("{} {}", "ℹ".cyan(), toast.message),
        ToastKind::Success => println!("{} {}", "✓".green(), toast.message),
        ToastKind::Error => eprintln!("{} {}", "✗".red(), toast.message),
    }
}

pub fn print_logs(page: &LogsPage) {
    if page.logs.is_empty() {
        println!("{}", "실행 기록이 없습니다.".yellow());
        return;
    }

    println!(
        "{}",
        format!("최근 실행 기록 (전체 {}건):", page.total_count).bold()
    );
    println!();
    for record in &page.logs {
        print_record(record);
    }
}

/// Print a one-record summary of the execution log
pub fn print_record(record: &ExecutionRecord) {
    let status = if !record.is_completed() {
        "실행 중".cyan()
    } else if record.success {
        "성공".green()
    } else {
        "실패".red()
    };

    println!("  {} {}", "▸".cyan(), record.execution_id.dimmed());
    println!("    상태:  {}", status);
    println!(
        "    시작:  {}",
        format_datetime(record.started_at).dimmed()
    );
    if let Some(completed) = record.completed_at {
        println!("    완료:  {}", format_datetime(completed).dimmed());
    }
    if let Some(results) = &record.results {
        println!(
            "    결과:  {}개 주차, {}명 처리",
            results.weeks_processed,
            results.participants.len()
        );
    }
    if let Some(error) = &record.error_message {
        println!("    오류:  {}", error.red());
    }
    println!();
}

pub fn print_schedule_panel(status: &ScheduleStatus) {
    if status.active {
        println!("{}", schedule_panel(status).green());
    } else {
        println!("{}", schedule_panel(status).yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overseer_core::domain::execution::ExecutionResults;

    fn completed_record(success: bool) -> ExecutionRecord {
        ExecutionRecord {
            execution_id: "abc123".to_string(),
            started_at: chrono::Utc::now(),
            completed_at: Some(chrono::Utc::now()),
            success,
            message: String::new(),
            results: None,
            error_message: None,
        }
    }

    #[test]
    fn success_banner_counts_weeks_and_participants() {
        let mut record = completed_record(true);
        record.results = Some(ExecutionResults {
            weeks_processed: 4,
            participants: vec![1.into(), 2.into(), 3.into()],
        });

        let banner = Banner::success(&record);
        assert_eq!(banner.text, "실행 성공! 4개 주차, 3명 처리");
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.dismiss_after(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn success_banner_without_results_omits_counts() {
        let banner = Banner::success(&completed_record(true));
        assert_eq!(banner.text, "실행 성공!");
    }

    #[test]
    fn error_banner_carries_message_and_longer_dismiss() {
        let banner = Banner::error("db error");
        assert_eq!(banner.text, "실행 실패: db error");
        assert_eq!(banner.dismiss_after(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn timeout_outcome_renders_timeout_message() {
        let banner = Banner::from_outcome(&Outcome::TimedOut);
        assert_eq!(banner.text, "실행 실패: 실행 시간이 초과되었습니다.");
        assert_eq!(banner.kind, BannerKind::Error);
    }

    #[test]
    fn failed_outcome_without_message_falls_back() {
        let banner = Banner::from_outcome(&Outcome::Failed { message: None });
        assert_eq!(banner.text, "실행 실패");
    }

    #[test]
    fn schedule_set_toast_zero_pads_the_time() {
        let toast = schedule_set_toast(6, 30);
        assert!(toast.message.contains("06:30"));
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn schedule_panel_renders_active_state_with_next_run() {
        let status = ScheduleStatus {
            active: true,
            schedule: Some("매일 06:30".to_string()),
            next_run: Some(
                chrono::DateTime::parse_from_rfc3339("2025-01-11T06:30:00Z")
                    .unwrap()
                    .with_timezone(&chrono::Utc),
            ),
        };

        let panel = schedule_panel(&status);
        assert!(panel.contains("활성: 매일 06:30"));
        assert!(panel.contains("다음 실행: 2025-01-11 06:30:00"));
    }

    #[test]
    fn schedule_panel_renders_inactive_state() {
        let status = ScheduleStatus {
            active: false,
            schedule: None,
            next_run: None,
        };
        assert_eq!(schedule_panel(&status), "자동 실행이 설정되지 않았습니다");
    }

    #[test]
    fn toast_timing_constants() {
        assert_eq!(Toast::VISIBLE_FOR, Duration::from_secs(3));
        assert_eq!(Toast::EXIT_TRANSITION, Duration::from_millis(300));
    }
}
