use crate::shared::error::GraphError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 512;

/// NewType wrapper for an installed package identifier (a pkg origin such as `www/nginx`)
///
/// Ordering is plain byte-wise string ordering, which is what every sorted
/// output of the tool relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid(name, "Package name cannot be empty"));
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            let reason = format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
            return Err(invalid(name, &reason));
        }

        // Whitespace would corrupt the line-oriented root list
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid(
                name,
                "Package name contains whitespace or control characters",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(name: String, reason: &str) -> anyhow::Error {
    GraphError::InvalidPackageName {
        name,
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("www/nginx".to_string()).unwrap();
        assert_eq!(name.as_str(), "www/nginx");
        assert_eq!(name.to_string(), "www/nginx");
    }

    #[test]
    fn test_package_name_new_empty() {
        let result = PackageName::new("".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_package_name_rejects_whitespace() {
        assert!(PackageName::new("www/nginx devel".to_string()).is_err());
        assert!(PackageName::new("www/nginx\n".to_string()).is_err());
        assert!(PackageName::new("\tdevel/gmake".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let long_name = "a".repeat(MAX_PACKAGE_NAME_LENGTH + 1);
        let result = PackageName::new(long_name);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_package_name_max_length_accepted() {
        let name = "a".repeat(MAX_PACKAGE_NAME_LENGTH);
        assert!(PackageName::new(name).is_ok());
    }

    #[test]
    fn test_package_name_ordering_is_bytewise() {
        let upper = PackageName::new("Zeta".to_string()).unwrap();
        let lower = PackageName::new("alpha".to_string()).unwrap();
        assert!(upper < lower);
    }
}
