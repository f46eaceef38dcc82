mod normalizer;
mod root_finder;

pub use normalizer::DependencyNormalizer;
pub use root_finder::RootFinder;
