#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! webfinger — look up accounts with the WebFinger protocol (RFC 7033).

mod cli;
mod lookup;
mod types;
mod webfinger;

use clap::Parser;

use cli::args::parse_error_exit_code;
use cli::{Cli, OutputCtx, write_error};
use webfinger::HttpTransport;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = parse_error_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let ctx = OutputCtx::new(cli.json, cli.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = lookup::run(&cli, HttpTransport::new, &mut out, &ctx) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
