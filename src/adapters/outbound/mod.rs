/// Outbound adapters - concrete implementations of the driven ports
pub mod archive;
pub mod console;
pub mod filesystem;
pub mod formatters;
