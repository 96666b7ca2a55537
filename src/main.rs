mod adapters;
mod application;
mod audit;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::archive::ZipArchiveReader;
use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    DirectoryConfigurationProvider, FileConfigurationProvider, FileSystemWriter, StdoutPresenter,
};
use application::dto::AuditRequest;
use application::read_models::AuditReadModel;
use application::use_cases::CheckManifestsUseCase;
use cli::{Args, OutputFormat};
use config::ConfigFile;
use ports::outbound::{ConfigurationProvider, OutputPresenter};
use shared::error::{AuditError, ExitCode};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    if let Some(scan_dir) = args.scan_dir.as_deref() {
        let root = PathBuf::from(scan_dir);
        validate_project_path(&root)?;
        let file_config = config::discover_config(&root)?;
        let provider = DirectoryConfigurationProvider::new(root.clone());
        run_audit(provider, root, args, file_config)
    } else {
        let project_dir = args.path.as_deref().unwrap_or(".");
        let project_path = PathBuf::from(project_dir);
        validate_project_path(&project_path)?;
        let file_config = config::discover_config(&project_path)?;
        let provider = FileConfigurationProvider::load(&project_path)?;
        run_audit(provider, project_path, args, file_config)
    }
}

/// Wires the use case with the chosen provider and renders the report.
fn run_audit<CP: ConfigurationProvider>(
    provider: CP,
    project_path: PathBuf,
    args: Args,
    file_config: Option<ConfigFile>,
) -> Result<ExitCode> {
    let file_config = file_config.unwrap_or_default();

    // Command-line flags win over config file values
    let format = match args.format {
        Some(format) => format,
        None => match file_config.format.as_deref() {
            Some(raw) => OutputFormat::from_str(raw).map_err(|e| anyhow::anyhow!(e))?,
            None => OutputFormat::Text,
        },
    };
    let exclude_patterns = if args.exclude.is_empty() {
        file_config.exclude_artifacts.unwrap_or_default()
    } else {
        args.exclude
    };
    let deny_duplicates = args.deny_duplicates || file_config.deny_duplicates.unwrap_or(false);

    let archive_reader = ZipArchiveReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CheckManifestsUseCase::new(provider, archive_reader, progress_reporter);
    let request = AuditRequest::new(project_path, exclude_patterns);
    let response = use_case.execute(request)?;

    let duplicates_found = response.has_duplicates();

    let model = AuditReadModel::build(response);
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&model)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&formatted_output)?;

    if duplicates_found && deny_duplicates {
        Ok(ExitCode::DuplicatesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| AuditError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
