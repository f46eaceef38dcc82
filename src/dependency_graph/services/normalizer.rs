use crate::dependency_graph::domain::{DependencyRelation, PackageName};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// DependencyNormalizer service reducing a transitive closure to direct dependencies
///
/// This service contains pure business logic with no I/O dependencies.
pub struct DependencyNormalizer;

impl DependencyNormalizer {
    /// Prunes every package's dependency set down to its first-level dependencies
    ///
    /// The input sets must already be full transitive closures. For a package
    /// `p` with closure `D(p)`, anything in `D(d)` for some `d` in `D(p)` is
    /// reachable through `d` and is dropped, leaving `D(p) - U D(d)`.
    ///
    /// # Arguments
    /// * `raw` - Relation holding the transitive closure of every package
    ///
    /// # Returns
    /// A relation over the same universe holding only direct dependencies
    ///
    /// # Errors
    /// Returns `GraphError::UnknownPackage` if a dependency is not a key of `raw`
    pub fn normalize(raw: &DependencyRelation) -> Result<DependencyRelation> {
        let mut normalized = BTreeMap::new();

        for (package, all_deps) in raw.iter() {
            let mut second_deps: BTreeSet<&PackageName> = BTreeSet::new();
            for dep in all_deps {
                second_deps.extend(raw.require(dep.as_str(), package)?);
            }

            let direct: BTreeSet<PackageName> = all_deps
                .iter()
                .filter(|dep| !second_deps.contains(dep))
                .cloned()
                .collect();

            normalized.insert(package.clone(), direct);
        }

        Ok(DependencyRelation::from_map(normalized))
    }
}
