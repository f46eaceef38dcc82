use crate::dependency_graph::domain::{DependencyRelation, PackageName};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// RootFinder service locating the roots of the installed package forest
///
/// Works on either a raw or a normalized relation; a package is a root when
/// nothing in the relation depends on it.
pub struct RootFinder;

impl RootFinder {
    /// Counts, for every package, how many dependency sets contain it
    ///
    /// A package listing itself as a dependency counts toward its own total.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownPackage` if a dependency is not a key of `relation`
    pub fn reverse_count(relation: &DependencyRelation) -> Result<BTreeMap<PackageName, usize>> {
        let mut counts: BTreeMap<PackageName, usize> =
            relation.packages().map(|p| (p.clone(), 0)).collect();

        for (package, deps) in relation.iter() {
            for dep in deps {
                let Some(count) = counts.get_mut(dep.as_str()) else {
                    return Err(GraphError::UnknownPackage {
                        name: dep.to_string(),
                        referenced_by: package.to_string(),
                    }
                    .into());
                };
                *count += 1;
            }
        }

        Ok(counts)
    }

    /// Returns the packages nothing depends on, sorted by name
    pub fn roots(relation: &DependencyRelation) -> Result<Vec<PackageName>> {
        let counts = Self::reverse_count(relation)?;
        Ok(counts
            .into_iter()
            .filter(|(_, count)| *count == 0)
            .map(|(package, _)| package)
            .collect())
    }
}
