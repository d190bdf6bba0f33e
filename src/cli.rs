use clap::Parser;
use std::path::PathBuf;

use osgi_mavenize::application::dto::OutputFormat;
use osgi_mavenize::mavenization::domain::TargetType;

/// Convert a resolved graph of OSGi bundles into Maven artifacts and POMs
#[derive(Parser, Debug)]
#[command(name = "osgi-mavenize")]
#[command(version)]
#[command(about = "Convert a resolved graph of OSGi bundles into Maven artifacts and POMs", long_about = None)]
pub struct Args {
    /// Path to the resolved bundle graph (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub graph: PathBuf,

    /// Configuration file (defaults to mavenize.config.yml next to the graph file)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory receiving extracted embedded libraries (defaults to a temporary directory)
    #[arg(short, long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Build target: java unwraps embedded libraries, osgi keeps bundles as they are
    #[arg(short, long)]
    pub target: Option<TargetType>,

    /// Option applied before those of the configuration file.
    /// Can be specified multiple times: -D "org.example.**@directive=omit"
    #[arg(short = 'D', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Exit with code 1 when embedded libraries are missing, unrecognized or rejected
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid option: {}. Please specify it as KEY=VALUE",
            raw
        )),
    }
}
