/// Output mode enumeration
///
/// The two renderings are mutually exclusive per invocation. This enum lives
/// in the application layer because the CLI, the config file and the
/// formatter factory all need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Graphviz digraph of the whole relation (default)
    #[default]
    Graph,
    /// Root package names only, one per line
    Roots,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graph" | "dot" => Ok(OutputMode::Graph),
            "roots" | "root" => Ok(OutputMode::Roots),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'graph' or 'roots'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Graph => write!(f, "graph"),
            OutputMode::Roots => write!(f, "roots"),
        }
    }
}
