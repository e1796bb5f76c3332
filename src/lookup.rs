/// The lookup pipeline: resolve → fetch → format → write.
use std::io::Write;

use crate::cli::{Cli, OutputCtx};
use crate::cli::output::write_result;
use crate::webfinger::{Transport, WebfingerError, query, resolve};

/// Run one lookup for the parsed CLI arguments.
///
/// `connect` builds the transport and is only called once the account has
/// resolved. A 404 from the server is a normal outcome and is written as a
/// not-found message, not returned as an error.
///
/// # Errors
///
/// Returns `WebfingerError` on usage errors, a missing host, transport setup
/// or HTTP failures, malformed JSON, or a failed write to `out`.
pub fn run<T, F>(
    cli: &Cli,
    connect: F,
    out: &mut dyn Write,
    ctx: &OutputCtx,
) -> Result<(), WebfingerError>
where
    T: Transport,
    F: FnOnce() -> Result<T, WebfingerError>,
{
    let _t_resolve = ctx.timer("resolve");
    let target = resolve(cli.acct.as_deref(), cli.hostname.as_deref())?;
    drop(_t_resolve);

    let _t_query = ctx.timer("query");
    let transport = connect()?;
    let jrd = query(&transport, &target)?;
    drop(_t_query);

    write_result(out, jrd.as_ref(), &target, ctx)
}
