use crate::adapters::outbound::formatters::{DotFormatter, RootListFormatter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output mode
    ///
    /// # Examples
    /// ```
    /// use pkg_depgraph::application::dto::OutputMode;
    /// use pkg_depgraph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputMode::Roots);
    /// ```
    pub fn create(mode: OutputMode) -> Box<dyn GraphFormatter> {
        match mode {
            OutputMode::Graph => Box::new(DotFormatter::new()),
            OutputMode::Roots => Box::new(RootListFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output mode
    ///
    /// # Examples
    /// ```
    /// use pkg_depgraph::application::dto::OutputMode;
    /// use pkg_depgraph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputMode::Graph);
    /// assert_eq!(message, "📝 Generating Graphviz dot output...");
    /// ```
    pub fn progress_message(mode: OutputMode) -> &'static str {
        match mode {
            OutputMode::Graph => "📝 Generating Graphviz dot output...",
            OutputMode::Roots => "📝 Listing root packages...",
        }
    }
}
