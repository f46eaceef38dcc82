use crate::dependency_graph::domain::{DependencyRelation, PackageName};
use crate::dependency_graph::services::RootFinder;
use crate::ports::outbound::GraphFormatter;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::HashMap;
use std::fmt::Write;

/// Comment block opening every document, followed by one line per root
const ROOTS_HEADER: &str = "### Root nodes:\n###\n#\n";

/// DotFormatter adapter rendering the relation as a Graphviz digraph
///
/// Node identifiers are `p<index>`, where the index is the package's position
/// in the name-sorted package list. They are only meaningful within one
/// rendered document.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes characters that would terminate or corrupt a quoted dot label
    fn escape_label(name: &str) -> String {
        name.replace('\\', "\\\\").replace('"', "\\\"")
    }

    fn node_index(
        indices: &HashMap<&PackageName, usize>,
        package: &PackageName,
        referenced_by: &PackageName,
    ) -> Result<usize> {
        indices.get(package).copied().ok_or_else(|| {
            GraphError::UnknownPackage {
                name: package.to_string(),
                referenced_by: referenced_by.to_string(),
            }
            .into()
        })
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, relation: &DependencyRelation) -> Result<String> {
        let indices: HashMap<&PackageName, usize> = relation
            .packages()
            .enumerate()
            .map(|(index, package)| (package, index))
            .collect();
        let counts = RootFinder::reverse_count(relation)?;

        let mut output = String::from(ROOTS_HEADER);

        // Writing to a String cannot fail
        for (index, package) in relation.packages().enumerate() {
            if counts.get(package).copied() == Some(0) {
                let _ = writeln!(output, "#  p{} {}", index, package);
            }
        }

        output.push_str("digraph {\n");
        for (index, package) in relation.packages().enumerate() {
            let _ = writeln!(
                output,
                "  p{} [label=\"{}\"];",
                index,
                Self::escape_label(package.as_str())
            );
        }

        for (package, deps) in relation.iter() {
            let from = Self::node_index(&indices, package, package)?;
            for dep in deps {
                let to = Self::node_index(&indices, dep, package)?;
                let _ = writeln!(output, "  p{} -> p{};", from, to);
            }
        }
        output.push_str("}\n");

        Ok(output)
    }
}
