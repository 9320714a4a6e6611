//! Rendering of errors and warnings
//!
//! ```text
//! error: expected dimension after `:`
//!  --> pendulum.dl:3:4
//!   |
//! 3 | m :
//!   |    ^
//!
//! warning: dropped irrelevant quantities (m) and dimensions (mass)
//!  --> pendulum.dl
//! ```

use std::path::Path;

use anstream::eprintln;
use dimless_model::Warning;
use dimless_shared::error::{Context, DimlessError, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints every error, each followed by a blank line
pub fn print_errors(errors: &[DimlessError], print_debug: bool) {
    for error in errors {
        print_error(error, print_debug);
    }
}

/// Prints one error to stderr
#[expect(clippy::use_debug, reason = "debug output is requested with `--print-debug`")]
pub fn print_error(error: &DimlessError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
        return;
    }

    eprintln!("{}", render_error(error));
}

/// Prints a model warning to stderr
pub fn print_warning(path: &Path, warning: &Warning) {
    let heading = heading("warning", stylesheet::WARNING_COLOR, &warning.to_string());
    let arrow = arrow_line(path, None);
    eprintln!("{heading}\n{arrow}\n");
}

fn render_error(error: &DimlessError) -> String {
    let mut lines = vec![
        heading("error", stylesheet::ERROR_COLOR, error.message()),
        arrow_line(error.path(), error.location()),
    ];

    match error.location() {
        Some(location) => {
            let margin = margin_for(location);
            lines.extend(excerpt(location, &margin, stylesheet::ERROR_COLOR));
            lines.extend(error.context().iter().map(|context| context_line(&margin, context)));
        }
        None => {
            lines.extend(error.context().iter().map(|context| context_line(" ", context)));
        }
    }
    lines.push(String::new());

    for (context, location) in error.context_with_source() {
        let (label, color) = context_style(context);
        let margin = margin_for(location);

        lines.push(heading(label, color, context.message()));
        lines.push(arrow_line(error.path(), Some(location)));
        lines.extend(excerpt(location, &margin, color));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `<kind>: <message>` in bold, with the kind colored
fn heading(kind: &str, color: Style, message: &str) -> String {
    format!("{}: {message}", color.style(kind)).bold().to_string()
}

/// ` --> <path>` or ` --> <path>:<line>:<column>`
fn arrow_line(path: &Path, location: Option<&ErrorLocation>) -> String {
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    let path = path.display();

    location.map_or_else(
        || format!(" {arrow} {path}"),
        |location| format!(" {arrow} {path}:{}:{}", location.line(), location.column()),
    )
}

/// Blank space as wide as the line number of `location`
fn margin_for(location: &ErrorLocation) -> String {
    let digits = location.line().max(1).ilog10() + 1;
    " ".repeat(digits as usize)
}

fn excerpt(location: &ErrorLocation, margin: &str, color: Style) -> [String; 3] {
    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_number = stylesheet::SOURCE_ANNOTATION.style(location.line().to_string());

    let indent = " ".repeat(location.column().saturating_sub(1));
    let marker = format!("^{}", "-".repeat(location.length().saturating_sub(1)));
    let marker = color.bold().style(marker);

    [
        format!("{margin} {bar}"),
        format!("{line_number} {bar} {}", location.line_source()),
        format!("{margin} {bar} {indent}{marker}"),
    ]
}

fn context_line(margin: &str, context: &Context) -> String {
    let (label, color) = context_style(context);
    let equals = color.bold().style("=");
    format!("{margin} {equals} {}", heading(label, color, context.message()))
}

const fn context_style(context: &Context) -> (&'static str, Style) {
    match context {
        Context::Note(_) => ("note", stylesheet::NOTE_COLOR),
        Context::Help(_) => ("help", stylesheet::HELP_COLOR),
    }
}
