/// Mock implementations for testing
mod mock_archive_reader;
mod mock_configuration_provider;
mod mock_progress_reporter;

pub use mock_archive_reader::MockArchiveReader;
pub use mock_configuration_provider::MockConfigurationProvider;
pub use mock_progress_reporter::MockProgressReporter;
