/// Domain layer for the manifest audit
///
/// Pure value objects and domain services with no infrastructure
/// dependencies. Everything touching the file system or archives goes
/// through the outbound ports instead.
pub mod domain;
pub mod services;
