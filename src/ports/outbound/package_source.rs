use crate::shared::Result;

/// PackageSource port for querying the installed package database
///
/// Both queries are issued once per run, strictly in order: the universe
/// first, then the dependency closure.
pub trait PackageSource {
    /// Lists the name of every installed package
    ///
    /// # Errors
    /// Returns an error if the package manager cannot be queried or its
    /// output cannot be decoded
    fn list_packages(&self) -> Result<Vec<String>>;

    /// Lists every `(package, dependency)` pair of the transitive closure
    ///
    /// For each installed package there is one pair per package it depends
    /// on directly or indirectly.
    ///
    /// # Errors
    /// Returns an error if the package manager cannot be queried, its output
    /// cannot be decoded, or a line is not a well-formed pair
    fn list_dependency_pairs(&self) -> Result<Vec<(String, String)>>;
}
