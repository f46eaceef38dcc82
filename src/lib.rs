//! pkg-depgraph - dependency graph tool for pkg(8)
//!
//! This library turns the transitive dependency closure reported by FreeBSD's
//! package manager into a direct-dependency graph, finds the roots of the
//! installed package forest, and renders either as Graphviz dot or as a plain
//! root list. It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Package names, the dependency relation,
//!   normalization and root finding
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): pkg(8), console, file system and formatter implementations
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use pkg_depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let package_source = PkgQuerySource::new(PathBuf::from(DEFAULT_PKG_PATH));
//! package_source.validate()?;
//!
//! let use_case = BuildGraphUseCase::new(package_source, StderrProgressReporter::new(false));
//! let response = use_case.execute(GraphRequest::default())?;
//!
//! let output = DotFormatter::new().format(&response.relation)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{DotFormatter, RootListFormatter};
    pub use crate::adapters::outbound::pkg::{PkgQuerySource, DEFAULT_PKG_PATH};
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputMode};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::dependency_graph::domain::{DependencyRelation, PackageName};
    pub use crate::dependency_graph::services::{DependencyNormalizer, RootFinder};
    pub use crate::ports::outbound::{
        GraphFormatter, OutputPresenter, PackageSource, ProgressReporter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
