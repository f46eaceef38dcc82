//! Dependency graph domain: package identifiers, the dependency relation
//! aggregate, and the pure services that normalize it and find its roots.

pub mod domain;
pub mod services;
