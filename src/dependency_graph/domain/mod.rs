mod dependency_relation;
mod package;

pub use dependency_relation::DependencyRelation;
pub use package::PackageName;
