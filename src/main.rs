#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! dirtree — print a directory's contents as an indented tree.

mod cli;
mod commands;
mod tree;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.on_error);

    match commands::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_tree_error(&err);
            write_error(&error_output, ctx.format);
            std::process::exit(err.exit_code());
        }
    }
}
