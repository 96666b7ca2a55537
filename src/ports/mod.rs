/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the use case is invoked directly by
/// the CLI, so no inbound port indirection is needed here.
pub mod outbound;
