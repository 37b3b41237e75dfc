/// Command entry: resolves the root path and runs the render command.
pub mod prompt;
pub mod render;

use std::ffi::OsString;
use std::io;

use crate::cli::{Cli, OutputCtx, OutputFormat};
use crate::tree::TreeError;

/// Run the parsed command line against the real stdin/stdout.
///
/// The prompt goes to stdout in text mode and to stderr otherwise, so
/// structured output stays parseable.
///
/// # Errors
///
/// Returns `TreeError` on input, traversal or output failure.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), TreeError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let raw: OsString = match &cli.path {
        Some(path) => path.clone().into_os_string(),
        None => {
            let mut input = io::stdin().lock();
            if ctx.format == OutputFormat::Text {
                prompt::ask_root(&mut input, &mut out)?.into()
            } else {
                prompt::ask_root(&mut input, &mut io::stderr().lock())?.into()
            }
        }
    };

    render::run(&raw, ctx, &mut out)
}
