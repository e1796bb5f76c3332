/// CLI argument definitions via clap derive.
use clap::Parser;

/// webfinger — look up an account with WebFinger (RFC 7033).
#[derive(Debug, Parser)]
#[command(
    name = "webfinger",
    about = "Look up WebFinger (RFC 7033) accounts from the CLI",
    version
)]
pub struct Cli {
    /// Account to look up: `user@host`, `@user@host`, or `user` with `--hostname`.
    ///
    /// Optional here so a missing account is reported as a usage error.
    #[arg(value_name = "ACCT")]
    pub acct: Option<String>,

    /// Extra positionals are accepted and ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Host to query. Completes a bare `user` account and overrides the host
    /// taken from the account for the request.
    #[arg(long, value_name = "HOST")]
    pub hostname: Option<String>,

    /// Print the response document as compact JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

/// Exit code for a rejected command line.
///
/// `--help` and `--version` exit 0; every other parse error exits 1, the same
/// as a lookup failure.
#[must_use]
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}
