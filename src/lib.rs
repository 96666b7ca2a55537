//! manifest-audit - duplicate MANIFEST.MF detection for resolved dependency sets
//!
//! This library inspects the resolved artifacts of a build's dependency
//! configurations, opens every jar-shaped artifact as a zip archive, and
//! warns when more than one `META-INF/MANIFEST.MF` entry exists across all
//! of them. The check is advisory and follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit`): Pure value objects and domain services
//! - **Application Layer** (`application`): The audit use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use manifest_audit::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let provider = FileConfigurationProvider::load(Path::new("."))?;
//! let archive_reader = ZipArchiveReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CheckManifestsUseCase::new(provider, archive_reader, progress_reporter);
//!
//! // Execute
//! let request = AuditRequest::new(PathBuf::from("."), vec![]);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = AuditReadModel::build(response);
//! let formatter = TextFormatter::new();
//! print!("{}", formatter.format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ZipArchiveReader;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryConfigurationProvider, FileConfigurationProvider, FileSystemWriter,
        StdoutPresenter, DESCRIPTOR_FILENAME,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::read_models::AuditReadModel;
    pub use crate::application::use_cases::CheckManifestsUseCase;
    pub use crate::audit::domain::{
        is_jar, AuditFindings, AuditMetadata, Configuration, ManifestLabel, MANIFEST_ENTRY,
    };
    pub use crate::audit::services::ArtifactFilter;
    pub use crate::ports::outbound::{
        ArchiveReader, ConfigurationProvider, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::ResolutionError;
    pub use crate::shared::Result;
}
