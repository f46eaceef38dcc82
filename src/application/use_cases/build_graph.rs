use crate::application::dto::{GraphRequest, GraphResponse};
use crate::dependency_graph::domain::DependencyRelation;
use crate::dependency_graph::services::DependencyNormalizer;
use crate::ports::outbound::{PackageSource, ProgressReporter};
use crate::shared::Result;

/// BuildGraphUseCase - Core use case turning pkg's closure into a renderable relation
///
/// This use case orchestrates the two package queries, builds the raw
/// relation and optionally normalizes it, using generic dependency injection
/// for all infrastructure dependencies.
///
/// # Type Parameters
/// * `PS` - PackageSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<PS, PR> {
    package_source: PS,
    progress_reporter: PR,
}

impl<PS, PR> BuildGraphUseCase<PS, PR>
where
    PS: PackageSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(package_source: PS, progress_reporter: PR) -> Self {
        Self {
            package_source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails on the first error from either query, on an Unknown Package
    /// reference, or on an invalid package name. Nothing is retried.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: the universe must be known before any pair is accepted
        self.progress_reporter
            .begin_step("🔍 Querying installed packages...");
        let universe = self
            .package_source
            .list_packages()
            .map_err(|e| self.step_failed("Querying installed packages", e))?;
        self.progress_reporter
            .finish_step(&format!("✅ Detected {} package(s)", universe.len()));

        // Step 2: transitive closure pairs
        self.progress_reporter
            .begin_step("🔗 Querying dependency closure...");
        let pairs = self
            .package_source
            .list_dependency_pairs()
            .map_err(|e| self.step_failed("Querying dependency closure", e))?;
        self.progress_reporter
            .finish_step(&format!("✅ Read {} dependency pair(s)", pairs.len()));

        // Step 3: raw relation
        let raw = DependencyRelation::from_query(universe, pairs)?;
        let closure_edge_count = raw.edge_count();

        if !request.normalize {
            self.progress_reporter
                .report("⏭️  Skipping normalization, rendering the full closure");
            return Ok(GraphResponse::new(raw, closure_edge_count, false));
        }

        // Step 4: prune implied edges
        let normalized = DependencyNormalizer::normalize(&raw)?;
        self.progress_reporter.report(&format!(
            "🧮 Reduced {} closure edge(s) to {} direct edge(s)",
            closure_edge_count,
            normalized.edge_count()
        ));

        Ok(GraphResponse::new(normalized, closure_edge_count, true))
    }

    /// Ends the running step before the error propagates
    fn step_failed(&self, step: &str, error: anyhow::Error) -> anyhow::Error {
        self.progress_reporter
            .report_error(&format!("❌ {} failed", step));
        error
    }
}
