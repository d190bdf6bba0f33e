mod cli;

use cli::Args;
use osgi_mavenize::adapters::outbound::console::StderrProgressReporter;
use osgi_mavenize::adapters::outbound::filesystem::{
    DirectoryWorkspace, FileSystemArchiveReader, TomlBundleGraph,
};
use osgi_mavenize::application::dto::{MavenizeRequest, OutputFormat};
use osgi_mavenize::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use osgi_mavenize::application::use_cases::MavenizeBundlesUseCase;
use osgi_mavenize::config::{self, ConfigFile};
use osgi_mavenize::mavenization::domain::OptionSet;
use osgi_mavenize::shared::error::{ExitCode, MavenizeError};
use osgi_mavenize::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration; an explicit --config must exist
    let graph_dir = args
        .graph
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(graph_dir)?.unwrap_or_default(),
    };

    // Create adapters (Dependency Injection)
    let graph = TomlBundleGraph::load(&args.graph)?;
    let workspace = match args.work_dir.clone().or_else(|| config.work_dir.clone()) {
        Some(dir) => DirectoryWorkspace::new(prepare_work_dir(dir)?),
        None => DirectoryWorkspace::temporary()?,
    };
    let use_case = MavenizeBundlesUseCase::new(
        graph,
        FileSystemArchiveReader::new(),
        workspace,
        StderrProgressReporter::new(),
    );

    // Command-line options take precedence over configured ones
    let request = MavenizeRequest::new(
        merge_options(&args.options, &config)?,
        config.coordinate_policy()?,
        match args.target {
            Some(target) => target,
            None => config.target()?.unwrap_or_default(),
        },
    );

    // Execute use case
    let response = use_case.execute(request)?;

    // Format and present output
    let format = match args.format {
        Some(format) => format,
        None => config
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default(),
    };
    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response.result)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    if args.strict && response.has_problems() {
        return Ok(ExitCode::DiagnosticsReported);
    }
    Ok(ExitCode::Success)
}

fn merge_options(cli_options: &[(String, String)], config: &ConfigFile) -> Result<OptionSet> {
    let mut options = OptionSet::new();
    for (key, value) in cli_options {
        options.insert(key.clone(), value.clone());
    }
    for (key, value) in config.option_set()?.iter() {
        if options.get(key).is_none() {
            options.insert(key, value);
        }
    }
    Ok(options)
}

/// Creates the work directory if needed and refuses anything but a real directory
fn prepare_work_dir(dir: PathBuf) -> Result<PathBuf> {
    if let Ok(metadata) = std::fs::symlink_metadata(&dir) {
        if metadata.is_symlink() {
            return Err(MavenizeError::SecurityError {
                path: dir,
                reason: "work directory is a symbolic link".to_string(),
                hint: "Pass a regular directory with --work-dir".to_string(),
            }
            .into());
        }
        if !metadata.is_dir() {
            anyhow::bail!("Work directory is not a directory: {}", dir.display());
        }
        return Ok(dir);
    }
    std::fs::create_dir_all(&dir).map_err(|e| MavenizeError::FileWriteError {
        path: dir.clone(),
        details: e.to_string(),
    })?;
    Ok(dir)
}
