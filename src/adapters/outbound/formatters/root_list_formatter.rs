use crate::dependency_graph::domain::DependencyRelation;
use crate::dependency_graph::services::RootFinder;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// RootListFormatter adapter rendering only the roots of the package forest
///
/// Plain text, one package per line, sorted, no header.
pub struct RootListFormatter;

impl RootListFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RootListFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for RootListFormatter {
    fn format(&self, relation: &DependencyRelation) -> Result<String> {
        let roots = RootFinder::roots(relation)?;

        let mut output = String::new();
        for root in roots {
            output.push_str(root.as_str());
            output.push('\n');
        }
        Ok(output)
    }
}
