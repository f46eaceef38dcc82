/// ProgressReporter port for reporting progress during a run
///
/// Progress goes to a side channel (e.g., stderr) so it never mixes with
/// the rendered output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a step whose length is unknown (a package query)
    fn begin_step(&self, message: &str);

    /// Marks the end of the step started by `begin_step`
    fn finish_step(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn begin_step(&self, message: &str) {
        (**self).begin_step(message)
    }

    fn finish_step(&self, message: &str) {
        (**self).finish_step(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }
}
