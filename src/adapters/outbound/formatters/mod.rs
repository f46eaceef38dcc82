/// Formatters for rendering a dependency relation
mod dot_formatter;
mod root_list_formatter;

pub use dot_formatter::DotFormatter;
pub use root_list_formatter::RootListFormatter;
