//! Error reports and page-load timing
//!
//! Uncaught errors and unhandled promise rejections are logged, never shown to
//! the visitor. Remote reporting can be plugged in through [`Reporter`].

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    UncaughtError,
    UnhandledRejection,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::UncaughtError => "JavaScript Error",
            ReportKind::UnhandledRejection => "Unhandled Promise Rejection",
        }
    }
}

/// One captured failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ReportKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl ErrorReport {
    pub fn uncaught(message: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::UncaughtError,
            message: message.into(),
            source: None,
            line: None,
            column: None,
        }
    }

    pub fn rejection(reason: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::UnhandledRejection,
            message: reason.into(),
            source: None,
            line: None,
            column: None,
        }
    }

    /// Attach script location; empty file names and zero positions are dropped
    pub fn at(mut self, source: &str, line: u32, column: u32) -> Self {
        self.source = (!source.is_empty()).then(|| source.to_string());
        self.line = (line > 0).then_some(line);
        self.column = (column > 0).then_some(column);
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)?;
        if let Some(source) = &self.source {
            write!(f, " ({}", source)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
                if let Some(column) = self.column {
                    write!(f, ":{}", column)?;
                }
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Destination for error reports
pub trait Reporter {
    fn report(&self, report: &ErrorReport);
}

/// Default reporter: the `log` facade (browser console on wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, report: &ErrorReport) {
        log::error!("{}", report);
    }
}

/// Page load time from navigation timing (ms).
/// `None` until `loadEventEnd` is recorded.
pub fn page_load_ms(fetch_start: f64, load_event_end: f64) -> Option<f64> {
    if load_event_end <= 0.0 || load_event_end < fetch_start {
        return None;
    }
    Some(load_event_end - fetch_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_display_with_location() {
        let report = ErrorReport::uncaught("x is not defined").at("main.js", 12, 4);
        assert_eq!(
            report.to_string(),
            "JavaScript Error: x is not defined (main.js:12:4)"
        );
    }

    #[test]
    fn test_location_drops_unknowns() {
        let report = ErrorReport::uncaught("boom").at("", 0, 0);
        assert_eq!(report.source, None);
        assert_eq!(report.line, None);
        assert_eq!(report.to_string(), "JavaScript Error: boom");
    }

    #[test]
    fn test_rejection_json() {
        let json = ErrorReport::rejection("network down").to_json();
        assert_eq!(
            json,
            r#"{"kind":"unhandled_rejection","message":"network down"}"#
        );
    }

    #[test]
    fn test_page_load_ms() {
        assert_eq!(page_load_ms(12.0, 842.5), Some(830.5));
        assert_eq!(page_load_ms(12.0, 0.0), None);
        assert_eq!(page_load_ms(50.0, 20.0), None);
    }

    #[test]
    fn test_custom_reporter() {
        struct Collect(RefCell<Vec<String>>);
        impl Reporter for Collect {
            fn report(&self, report: &ErrorReport) {
                self.0.borrow_mut().push(report.message.clone());
            }
        }

        let sink = Collect(RefCell::new(Vec::new()));
        sink.report(&ErrorReport::uncaught("a"));
        sink.report(&ErrorReport::rejection("b"));
        assert_eq!(*sink.0.borrow(), vec!["a".to_string(), "b".to_string()]);
    }
}
