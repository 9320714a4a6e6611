//! Command line tool for Buckingham Pi nondimensionalization

use std::{path::Path, process::ExitCode};

use clap::Parser;
use dimless_model::{Model, ModelError, ModelSet, Warning};
use dimless_shared::error::DimlessError;

use crate::command::{CliCommand, Commands, DevCommands};

mod command;
mod file_loader;
mod print_decls;
mod print_diagnostic;
mod print_matrix;
mod print_model;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    // warnings are printed by the tool itself, so the log shows errors only
    // unless `RUST_LOG` asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    match cli.command {
        Commands::Resolve {
            file,
            all,
            print_debug,
            no_colors,
        } => {
            set_colors(no_colors);
            resolve(&file, all, print_debug)
        }
        Commands::Matrix { file, no_colors } => {
            set_colors(no_colors);
            match file_loader::load_quantities(&file) {
                Ok(quantities) => {
                    print_matrix::print(&quantities);
                    ExitCode::SUCCESS
                }
                Err(errors) => fail(&errors, false),
            }
        }
        Commands::Dev { command } => match command {
            DevCommands::PrintDecls {
                file,
                print_debug,
                no_colors,
            } => {
                set_colors(no_colors);
                match file_loader::parse_file(&file) {
                    Ok(loaded) => {
                        print_decls::print(&loaded.declarations, print_debug);
                        ExitCode::SUCCESS
                    }
                    Err(errors) => fail(&errors, print_debug),
                }
            }
        },
    }
}

fn set_colors(no_colors: bool) {
    if no_colors {
        anstream::ColorChoice::Never.write_global();
    }
}

fn fail(errors: &[DimlessError], print_debug: bool) -> ExitCode {
    print_diagnostic::print_errors(errors, print_debug);
    ExitCode::FAILURE
}

/// Resolves a single model, or every choice of scaling quantities with
/// `--all`.
///
/// When the marked scaling quantities do not match the rank, every choice is
/// tried instead. The mismatch is reported if no choice works.
fn resolve(path: &Path, all: bool, print_debug: bool) -> ExitCode {
    let quantities = match file_loader::load_quantities(path) {
        Ok(quantities) => quantities,
        Err(errors) => return fail(&errors, print_debug),
    };

    if all {
        return match ModelSet::new(&quantities) {
            Ok(model_set) => print_model_set(path, &model_set, print_debug),
            Err(error) => fail_with_model_error(path, &error, print_debug),
        };
    }

    match Model::new(&quantities) {
        Ok(model) => {
            print_warnings(path, model.warnings());
            print_model::print_model(&model, print_debug);
            ExitCode::SUCCESS
        }
        Err(error @ ModelError::ScalingCardinalityMismatch { .. }) => {
            match ModelSet::new(&quantities) {
                Ok(model_set) => {
                    log::info!("{error}, trying every choice of scaling quantities");
                    print_model_set(path, &model_set, print_debug)
                }
                Err(set_error) => {
                    log::debug!("no choice of scaling quantities works: {set_error}");
                    fail_with_model_error(path, &error, print_debug)
                }
            }
        }
        Err(error) => fail_with_model_error(path, &error, print_debug),
    }
}

fn print_model_set(path: &Path, model_set: &ModelSet, print_debug: bool) -> ExitCode {
    print_warnings(path, model_set.warnings());
    print_model::print_model_set(model_set, print_debug);
    ExitCode::SUCCESS
}

fn fail_with_model_error(path: &Path, error: &ModelError, print_debug: bool) -> ExitCode {
    fail(
        &[DimlessError::from_error(error, path.to_path_buf())],
        print_debug,
    )
}

fn print_warnings(path: &Path, warnings: &[Warning]) {
    for warning in warnings {
        print_diagnostic::print_warning(path, warning);
    }
}
