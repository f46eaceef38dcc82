use crate::dependency_graph::domain::DependencyRelation;

/// GraphResponse - Internal response DTO from the graph building use case
///
/// Formatters render `relation`; the counts are for progress reporting.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The relation to render (normalized unless the request opted out)
    pub relation: DependencyRelation,
    /// Number of `(package, dependency)` edges in the closure pkg reported
    pub closure_edge_count: usize,
    /// Whether `relation` holds direct dependencies only
    pub normalized: bool,
}

impl GraphResponse {
    pub fn new(relation: DependencyRelation, closure_edge_count: usize, normalized: bool) -> Self {
        Self {
            relation,
            closure_edge_count,
            normalized,
        }
    }
}
