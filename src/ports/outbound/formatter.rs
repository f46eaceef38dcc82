use crate::dependency_graph::domain::DependencyRelation;
use crate::shared::Result;

/// GraphFormatter port for rendering a dependency relation
///
/// Implementations must be deterministic: the same relation always renders
/// to byte-identical output.
pub trait GraphFormatter {
    /// Renders the relation
    ///
    /// # Errors
    /// Returns an error if the relation is not total over its universe
    fn format(&self, relation: &DependencyRelation) -> Result<String>;
}
