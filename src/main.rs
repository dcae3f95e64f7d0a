mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::coordinate::{LibraryCoordinate, TargetId};
pub use domain::graph::{NodeIdentity, ResolvedGraph};
pub use domain::models::*;
pub use error::CheckError;
pub use services::catalog::NativeCatalog;
pub use services::compat::ExclusionPolicy;
pub use services::config::{resolve_config, validate_config};
pub use services::descriptors::{default_cache_dir, parse_descriptor, DescriptorSource, Repository};
pub use services::output::{print_json, print_one, print_out};
pub use services::pipeline::analyze;
pub use services::report::{render, report_path, write_atomically};
pub use services::targets::extract_targets;
pub use services::walker::{format_trace, walk};

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config, config_path) = resolve_config(cli.config.as_deref())?;
    if let Some(path) = &config_path {
        tracing::info!(path = %path.display(), "loaded config");
    }

    if handle_check(&cli, &config)? {
        return Ok(());
    }
    if handle_inspect_commands(&cli, &config)? {
        return Ok(());
    }
    Ok(())
}
