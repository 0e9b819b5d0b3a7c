//! Ordered, fault-isolated initialization
//!
//! Every handler installs independently. A failing step is logged and recorded,
//! and the remaining steps still run.

use crate::error::EnhanceError;

/// What a successful step did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Installed,
    /// Nothing to attach to on this page
    Skipped(String),
}

pub type StepResult = Result<Outcome, EnhanceError>;

/// A named initializer
pub struct Initializer<'a> {
    pub name: &'static str,
    run: Box<dyn FnOnce() -> StepResult + 'a>,
}

impl<'a> Initializer<'a> {
    pub fn new(name: &'static str, run: impl FnOnce() -> StepResult + 'a) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }
}

/// Result of one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub name: &'static str,
    pub result: StepResult,
}

/// Results of a full run, in execution order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InitReport {
    pub steps: Vec<StepReport>,
}

impl InitReport {
    pub fn installed(&self) -> Vec<&'static str> {
        self.names_where(|r| matches!(r, Ok(Outcome::Installed)))
    }

    pub fn skipped(&self) -> Vec<&'static str> {
        self.names_where(|r| matches!(r, Ok(Outcome::Skipped(_))))
    }

    pub fn failed(&self) -> Vec<&'static str> {
        self.names_where(|r| r.is_err())
    }

    fn names_where(&self, pred: impl Fn(&StepResult) -> bool) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|s| pred(&s.result))
            .map(|s| s.name)
            .collect()
    }
}

/// Run every step in order
pub fn run_all<'a>(steps: impl IntoIterator<Item = Initializer<'a>>) -> InitReport {
    let mut report = InitReport::default();
    for step in steps {
        let result = (step.run)();
        match &result {
            Ok(Outcome::Installed) => log::debug!("{}: installed", step.name),
            Ok(Outcome::Skipped(reason)) => log::debug!("{}: skipped ({})", step.name, reason),
            Err(e) if e.is_degradation() => log::info!("{}: {}", step.name, e),
            Err(e) => log::warn!("{} failed: {}", step.name, e),
        }
        report.steps.push(StepReport {
            name: step.name,
            result,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_failure_does_not_block_later_steps() {
        let ran = RefCell::new(Vec::new());
        let report = run_all([
            Initializer::new("menu", || {
                ran.borrow_mut().push("menu");
                Ok(Outcome::Installed)
            }),
            Initializer::new("header", || {
                ran.borrow_mut().push("header");
                Err(EnhanceError::Js("TypeError".into()))
            }),
            Initializer::new("faq", || {
                ran.borrow_mut().push("faq");
                Ok(Outcome::Skipped("no questions".into()))
            }),
            Initializer::new("fade_in", || {
                ran.borrow_mut().push("fade_in");
                Err(EnhanceError::MissingCapability("IntersectionObserver"))
            }),
        ]);

        assert_eq!(*ran.borrow(), vec!["menu", "header", "faq", "fade_in"]);
        assert_eq!(report.installed(), vec!["menu"]);
        assert_eq!(report.skipped(), vec!["faq"]);
        assert_eq!(report.failed(), vec!["header", "fade_in"]);
    }

    #[test]
    fn test_empty_run() {
        let report = run_all(Vec::<Initializer>::new());
        assert!(report.steps.is_empty());
        assert!(report.failed().is_empty());
    }
}
