//! Handing a calculation to the platform share facility, with the clipboard
//! as fallback.

use log::debug;
use std::io::Write;
use thiserror::Error;

use crate::model::CalculationRecord;

pub const SHARE_TITLE: &str = "First third of the night";

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("sharing is not available on this platform")]
    Unavailable,
    #[error("sharing failed: {0}")]
    Failed(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Platform capabilities for passing text on to the user.
pub trait Notifier {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError>;
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

pub fn summary_text(record: &CalculationRecord) -> String {
    format!(
        "{}\n\nMaghreb: {}\nFajr: {}\nFirst third: {}",
        SHARE_TITLE,
        record.sunset(),
        record.dawn(),
        record.first_third()
    )
}

/// Shares the summary of `record`, copying it to the clipboard if sharing fails.
/// Only the clipboard error is returned when both fail.
pub fn share_result<N: Notifier + ?Sized>(
    notifier: &mut N,
    record: &CalculationRecord,
) -> Result<ShareOutcome, ShareError> {
    let text = summary_text(record);
    match notifier.share(SHARE_TITLE, &text) {
        Ok(()) => Ok(ShareOutcome::Shared),
        Err(e) => {
            debug!("share failed ({}), copying to clipboard instead", e);
            notifier.copy_to_clipboard(&text)?;
            Ok(ShareOutcome::Copied)
        }
    }
}

/// Terminal notifier: shared text is written out, there is no clipboard.
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn share(&mut self, _title: &str, text: &str) -> Result<(), ShareError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn copy_to_clipboard(&mut self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeOfDay;
    use chrono::NaiveDate;

    fn record() -> CalculationRecord {
        CalculationRecord::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            TimeOfDay::new(18, 0).unwrap(),
            TimeOfDay::new(5, 0).unwrap(),
            TimeOfDay::new(21, 40).unwrap(),
        )
    }

    #[derive(Default)]
    struct RecordingNotifier {
        share_fails: bool,
        clipboard_fails: bool,
        shared: Vec<(String, String)>,
        copied: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError> {
            if self.share_fails {
                return Err(ShareError::Unavailable);
            }
            self.shared.push((title.to_string(), text.to_string()));
            Ok(())
        }

        fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ShareError> {
            if self.clipboard_fails {
                return Err(ShareError::Failed("clipboard denied".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(
            summary_text(&record()),
            "First third of the night\n\nMaghreb: 18:00\nFajr: 05:00\nFirst third: 21:40"
        );
    }

    #[test]
    fn test_share_first() {
        let mut notifier = RecordingNotifier::default();
        let outcome = share_result(&mut notifier, &record()).unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(notifier.shared[0].0, SHARE_TITLE);
        assert!(notifier.copied.is_empty());
    }

    #[test]
    fn test_falls_back_to_clipboard() {
        let mut notifier = RecordingNotifier {
            share_fails: true,
            ..Default::default()
        };
        let outcome = share_result(&mut notifier, &record()).unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(notifier.copied, vec![summary_text(&record())]);
    }

    #[test]
    fn test_both_paths_fail() {
        let mut notifier = RecordingNotifier {
            share_fails: true,
            clipboard_fails: true,
            ..Default::default()
        };
        let err = share_result(&mut notifier, &record()).unwrap_err();
        assert!(matches!(err, ShareError::Failed(_)));
    }

    #[test]
    fn test_console_notifier_writes_summary() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        let outcome = share_result(&mut notifier, &record()).unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(out.ends_with("First third: 21:40\n"));
        assert!(matches!(
            ConsoleNotifier::new(Vec::new()).copy_to_clipboard("x"),
            Err(ShareError::Unavailable)
        ));
    }
}
