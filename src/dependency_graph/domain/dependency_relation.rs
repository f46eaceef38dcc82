use super::PackageName;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// DependencyRelation aggregate mapping every installed package to the set of
/// packages it depends on
///
/// The relation is total over its universe: every dependency is itself a key.
/// Ordered collections keep every traversal sorted by package name, so
/// anything rendered from a relation is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyRelation {
    dependencies: BTreeMap<PackageName, BTreeSet<PackageName>>,
}

impl DependencyRelation {
    /// Builds the raw relation from the two package queries
    ///
    /// # Arguments
    /// * `universe` - Every installed package name
    /// * `pairs` - `(package, dependency)` pairs of the transitive closure
    ///
    /// # Errors
    /// Returns `GraphError::UnknownPackage` if a pair names a package that is
    /// not part of `universe`, and `GraphError::InvalidPackageName` for names
    /// that fail validation.
    pub fn from_query(universe: Vec<String>, pairs: Vec<(String, String)>) -> Result<Self> {
        let mut dependencies = BTreeMap::new();
        for name in universe {
            dependencies.insert(PackageName::new(name)?, BTreeSet::new());
        }

        for (package, dependency) in pairs {
            if !dependencies.contains_key(dependency.as_str()) {
                return Err(GraphError::UnknownPackage {
                    name: dependency,
                    referenced_by: package,
                }
                .into());
            }
            let dependency = PackageName::new(dependency)?;

            let Some(deps) = dependencies.get_mut(package.as_str()) else {
                return Err(GraphError::UnknownPackage {
                    referenced_by: format!("the dependency pair {}::{}", package, dependency),
                    name: package,
                }
                .into());
            };
            deps.insert(dependency);
        }

        Ok(Self { dependencies })
    }

    /// Wraps a map whose totality the caller has already established
    pub(crate) fn from_map(dependencies: BTreeMap<PackageName, BTreeSet<PackageName>>) -> Self {
        Self { dependencies }
    }

    /// Dependencies of `package`, or `None` if it is not part of the universe
    pub fn dependencies_of(&self, package: &str) -> Option<&BTreeSet<PackageName>> {
        self.dependencies.get(package)
    }

    /// Like `dependencies_of`, but a missing package is an Unknown Package error
    pub fn require(&self, package: &str, referenced_by: &PackageName) -> Result<&BTreeSet<PackageName>> {
        self.dependencies.get(package).ok_or_else(|| {
            GraphError::UnknownPackage {
                name: package.to_string(),
                referenced_by: referenced_by.to_string(),
            }
            .into()
        })
    }

    /// All packages, sorted by name
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.dependencies.keys()
    }

    /// `(package, dependencies)` entries, sorted by package name
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &BTreeSet<PackageName>)> {
        self.dependencies.iter()
    }

    pub fn package_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(|deps| deps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
