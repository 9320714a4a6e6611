use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Buckingham Pi nondimensionalization
#[derive(Parser)]
#[command(name = "dimless")]
#[command(version, about = "Derives nondimensional groups from quantity declarations", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the nondimensional relation of a declaration file
    Resolve {
        /// Path to the declaration file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Build one model for every valid choice of scaling quantities
        #[arg(long)]
        all: bool,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Print the dimensional matrix of a declaration file
    Matrix {
        /// Path to the declaration file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Development tools for debugging and testing
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Print the parsed declarations of a file
    PrintDecls {
        /// Path to the declaration file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
}
