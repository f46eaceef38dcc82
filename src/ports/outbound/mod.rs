/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (pkg(8), file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod package_source;
pub mod progress_reporter;

pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use package_source::PackageSource;
pub use progress_reporter::ProgressReporter;
