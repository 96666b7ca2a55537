pub mod artifact_filter;

pub use artifact_filter::ArtifactFilter;
