/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (configuration registry, archives,
/// file system, console).
pub mod archive_reader;
pub mod configuration_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use archive_reader::ArchiveReader;
pub use configuration_provider::ConfigurationProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
