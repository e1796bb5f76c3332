/// Output writers: text, compact JSON, not-found message, errors. Debug timers.
use std::io::Write;

use crate::types::Jrd;
use crate::webfinger::{Target, WebfingerError, format_jrd};

/// Output context passed to the lookup pipeline.
pub struct OutputCtx {
    /// Emit the raw document as compact JSON.
    pub json: bool,
    /// When true, print stage timing to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write the lookup result to `out`.
///
/// Exactly one of: compact JSON (`null` when not found, no trailing newline),
/// the text layout, or the not-found message.
///
/// # Errors
///
/// Returns `WebfingerError::Io` or `WebfingerError::Parse` if writing or
/// serialization fails.
pub fn write_result(
    out: &mut dyn Write,
    result: Option<&Jrd>,
    target: &Target,
    ctx: &OutputCtx,
) -> Result<(), WebfingerError> {
    match (ctx.json, result) {
        (true, Some(jrd)) => write!(out, "{}", jrd.to_compact_json()?)?,
        (true, None) => write!(out, "null")?,
        (false, Some(jrd)) => {
            let text = {
                let _t = ctx.timer("format");
                format_jrd(jrd)
            };
            write!(out, "{text}")?;
        }
        (false, None) => writeln!(
            out,
            "User {} not found on {}",
            target.account, target.hostname
        )?,
    }
    out.flush()?;
    Ok(())
}

/// Write an error to stderr.
pub fn write_error(err: &WebfingerError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
