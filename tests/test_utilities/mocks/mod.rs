/// Mock implementations for testing
mod mock_package_source;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_package_source::MockPackageSource;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
