/// Filesystem adapters for configuration registries and report output
mod configuration_file_provider;
mod directory_provider;
mod file_writer;

pub use configuration_file_provider::{FileConfigurationProvider, DESCRIPTOR_FILENAME};
pub use directory_provider::DirectoryConfigurationProvider;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
