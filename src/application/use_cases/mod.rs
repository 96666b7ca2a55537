pub mod check_manifests;

pub use check_manifests::CheckManifestsUseCase;
