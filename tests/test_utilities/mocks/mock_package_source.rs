use pkg_depgraph::prelude::*;

/// Mock PackageSource serving canned `pkg query` results
pub struct MockPackageSource {
    pub packages: Vec<String>,
    pub pairs: Vec<(String, String)>,
    pub should_fail: bool,
}

impl MockPackageSource {
    pub fn new(packages: &[&str], pairs: &[(&str, &str)]) -> Self {
        Self {
            packages: packages.iter().map(|p| p.to_string()).collect(),
            pairs: pairs
                .iter()
                .map(|(p, d)| (p.to_string(), d.to_string()))
                .collect(),
            should_fail: false,
        }
    }

    /// Builds the source from a per-package transitive closure listing
    pub fn from_closure(entries: &[(&str, &[&str])]) -> Self {
        let packages: Vec<&str> = entries.iter().map(|(p, _)| *p).collect();
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .flat_map(|(p, deps)| deps.iter().map(move |d| (*p, *d)))
            .collect();
        Self::new(&packages, &pairs)
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            pairs: Vec::new(),
            should_fail: true,
        }
    }
}

impl PackageSource for MockPackageSource {
    fn list_packages(&self) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock pkg query failure");
        }
        Ok(self.packages.clone())
    }

    fn list_dependency_pairs(&self) -> Result<Vec<(String, String)>> {
        if self.should_fail {
            anyhow::bail!("Mock pkg query failure");
        }
        Ok(self.pairs.clone())
    }
}
