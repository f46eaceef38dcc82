use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the rendered graph on
/// stdout. Progress is only shown when verbose; errors are always shown.
/// Uses an indicatif spinner while a package query is running.
pub struct StderrProgressReporter {
    verbose: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: RefCell::new(None),
        }
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn begin_step(&self, message: &str) {
        if !self.verbose {
            return;
        }
        self.clear_spinner();
        *self.spinner.borrow_mut() = Some(Self::create_spinner(message));
    }

    fn finish_step(&self, message: &str) {
        self.clear_spinner();
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_verbose() {
        let reporter = StderrProgressReporter::new(true);
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.begin_step("Querying");
        assert!(reporter.spinner.borrow().is_some());
        reporter.finish_step("Done");
        assert!(reporter.spinner.borrow().is_none());
        reporter.report_error("Test error");
    }

    #[test]
    fn test_progress_reporter_quiet_has_no_spinner() {
        let reporter = StderrProgressReporter::default();
        reporter.begin_step("Querying");
        assert!(reporter.spinner.borrow().is_none());
        reporter.finish_step("Done");
    }
}
