/// pkg(8) adapter for querying the installed package database
mod pkg_query_source;

pub use pkg_query_source::{PkgQuerySource, DEFAULT_PKG_PATH};
