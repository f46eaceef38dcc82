use crate::ports::outbound::PackageSource;
use crate::shared::error::GraphError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Location of pkg(8) on a stock FreeBSD install
pub const DEFAULT_PKG_PATH: &str = "/usr/sbin/pkg";

/// Query format listing every installed package origin
const PACKAGES_QUERY: &str = "%o";

/// Query format listing `origin::dependency-origin` for the full closure
const PAIRS_QUERY: &str = "%o::%do";

const PAIR_SEPARATOR: &str = "::";

/// PkgQuerySource adapter running `pkg query` as a subprocess
///
/// This adapter implements the PackageSource port for FreeBSD's pkg(8).
pub struct PkgQuerySource {
    pkg_path: PathBuf,
}

impl PkgQuerySource {
    pub fn new(pkg_path: PathBuf) -> Self {
        Self { pkg_path }
    }

    /// Checks that the pkg binary exists and is runnable
    ///
    /// Meant to run once at startup, before any query is issued.
    pub fn validate(&self) -> Result<()> {
        let metadata = fs::metadata(&self.pkg_path).map_err(|e| GraphError::PkgNotFound {
            path: self.pkg_path.clone(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

        if !metadata.is_file() {
            return Err(GraphError::PkgNotFound {
                path: self.pkg_path.clone(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(GraphError::PkgNotFound {
                    path: self.pkg_path.clone(),
                    reason: "File is not executable".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    fn command_line(&self, format: &str) -> String {
        format!("{} query {}", self.pkg_path.display(), format)
    }

    /// Runs `pkg query <format>` and returns its decoded stdout
    fn run_query(&self, format: &str) -> Result<String> {
        let output = Command::new(&self.pkg_path)
            .args(["query", format])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to spawn {}", self.command_line(format)))?;

        if !output.status.success() {
            return Err(GraphError::QueryFailed {
                command: self.command_line(format),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            GraphError::QueryOutputDecode {
                command: self.command_line(format),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl PackageSource for PkgQuerySource {
    fn list_packages(&self) -> Result<Vec<String>> {
        let output = self.run_query(PACKAGES_QUERY)?;
        Ok(parse_package_lines(&output))
    }

    fn list_dependency_pairs(&self) -> Result<Vec<(String, String)>> {
        let output = self.run_query(PAIRS_QUERY)?;
        parse_pair_lines(&output)
    }
}

/// One package per non-empty line
fn parse_package_lines(output: &str) -> Vec<String> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One `package::dependency` pair per non-empty line
fn parse_pair_lines(output: &str) -> Result<Vec<(String, String)>> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.split(PAIR_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(package), Some(dependency), None) => {
                    Ok((package.to_string(), dependency.to_string()))
                }
                _ => Err(anyhow::Error::from(GraphError::MalformedQueryLine {
                    line: line.to_string(),
                })),
            }
        })
        .collect()
}
