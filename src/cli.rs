use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kmpmt",
    version,
    about = "Report Kotlin Multiplatform targets supported by all dependencies but not configured"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to $KMPMT_CONFIG, then ./kmpmt.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare configured targets with what every dependency supports
    Check {
        #[arg(long, help = "Resolved dependency graph exported by the build")]
        graph: PathBuf,
        #[arg(long = "target", help = "Configured target (repeatable)")]
        targets: Vec<String>,
        #[arg(long = "repository", help = "Maven repository dir or URL (repeatable)")]
        repositories: Vec<String>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        source_set: Option<String>,
        #[arg(long = "exclude", help = "group:artifact to leave out (repeatable)")]
        excludes: Vec<String>,
    },
    /// List the library coordinates reachable from the graph root
    Deps {
        #[arg(long)]
        graph: PathBuf,
    },
    /// Show the targets declared by a single module metadata file
    Targets {
        module_file: PathBuf,
        #[arg(long, help = "group:artifact:version of the file's library")]
        coordinate: Option<String>,
    },
    /// List the Kotlin/Native target catalog
    Catalog {
        #[arg(long, default_value_t = false)]
        include_deprecated: bool,
    },
}
