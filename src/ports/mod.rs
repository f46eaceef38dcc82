/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the only seam the graph core needs:
/// the package database, the renderers, and the output destination.
pub mod outbound;
