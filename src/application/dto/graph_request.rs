/// GraphRequest - Internal request DTO for the graph building use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphRequest {
    /// Whether to reduce the transitive closure to direct dependencies.
    /// When false the relation is returned exactly as pkg reported it.
    pub normalize: bool,
}

impl GraphRequest {
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self::new(true)
    }
}
