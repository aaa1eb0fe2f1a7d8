use crate::core::aggregator;
use crate::domain::models::AggregateConfig;
use crate::infra::logger::setup_logger;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "glee_full_codebase.txt";

const DEFAULT_EXTENSIONS: &str =
    ".rs,.toml,.sql,.ts,.tsx,.js,.css,.html,.json,.md,.sh,.ps1,.yaml";

const DEFAULT_IGNORE_DIRS: &str = "node_modules,target,.git,.vscode,.idea,\
dist,build,coverage,release,__pycache__,icons,resources";

const DEFAULT_IGNORE_FILES: &str = "package-lock.json,pnpm-lock.yaml,yarn.lock,\
Cargo.lock,glee_file_structure.txt,project_tree.txt";

#[derive(Parser)]
#[command(name = "glee-aggregate")]
#[command(about = "Flatten a source tree into one annotated snapshot file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    Run {
        #[arg(long)]
        path: PathBuf,

        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        #[arg(long, default_value = DEFAULT_IGNORE_DIRS)]
        ignore_dirs: String,

        #[arg(long, default_value = DEFAULT_IGNORE_FILES)]
        ignore_files: String,

        #[arg(long, default_value = DEFAULT_EXTENSIONS)]
        ext: String,
    },
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Run {
            path,
            output,
            ignore_dirs,
            ignore_files,
            ext,
        } => {
            info!("Starting run command");
            debug!(
                "Command parameters: path={}, output={}, ignore_dirs={}, ignore_files={}, ext={}",
                path.display(),
                output.display(),
                ignore_dirs,
                ignore_files,
                ext
            );

            let config = AggregateConfig {
                root_path: path,
                output_path: output,
                ignore_dirs: split_list(&ignore_dirs).collect::<HashSet<_>>(),
                ignore_files: split_list(&ignore_files).collect::<HashSet<_>>(),
                allowed_extensions: split_list(&ext).collect(),
            };

            aggregator::run(&config)?;
        }
    }
    Ok(())
}
