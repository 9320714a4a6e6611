//! Declaration printing for the `dev print-decls` command

use anstream::println;
use dimless_parser::ast::{DeclFile, Declaration};

use crate::stylesheet;

/// Prints the declarations of a file as a tree
#[expect(clippy::use_debug, reason = "debug output is requested with `--print-debug`")]
pub fn print(file: &DeclFile, print_debug: bool) {
    if print_debug {
        println!("Declarations: {file:?}");
        return;
    }

    println!("Declarations");

    let count = file.declarations().len();
    for (index, declaration) in file.declarations().iter().enumerate() {
        let prefix = if index + 1 == count { "└──" } else { "├──" };
        let start = *declaration.span().start();
        let location = stylesheet::DIMMED.style(format!("[{}:{}]", start.line, start.column));

        println!("{prefix} {} {location}", declaration_line(declaration));
    }
}

fn declaration_line(declaration: &Declaration) -> String {
    let mut line = stylesheet::QUANTITY_NAME
        .style(declaration.name().as_str())
        .to_string();

    if let Some(dimension) = declaration.dimension() {
        line.push_str(&format!(" : {}", &**dimension));
    }

    for flag in declaration.flags() {
        line.push_str(&format!(" {}", stylesheet::FLAG.style(**flag)));
    }

    line
}
