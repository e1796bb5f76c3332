/// Account resolution: turn the raw CLI account and `--hostname` flag into
/// the `(account, hostname)` pair used for the lookup.
///
/// Rules:
///
/// 1. A single leading `@` is stripped (`@alice@example.com` → `alice@example.com`).
/// 2. The **last** `@` separates the local part from the host, so local parts
///    may themselves contain `@`.
/// 3. An account without `@` borrows the `--hostname` value as its host.
/// 4. When `--hostname` is given it is always the lookup host, even if the
///    account already names a different one.
use super::errors::WebfingerError;

/// A resolved account and the host to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Normalized `user@host` account, without the `acct:` scheme.
    pub account: String,
    /// Host the WebFinger request is sent to.
    pub hostname: String,
}

/// Resolve the positional account and optional hostname flag.
///
/// # Errors
///
/// - `WebfingerError::Usage` — no account (or an empty one) was given
/// - `WebfingerError::MissingHost` — no (or an empty) host in the account and no flag
pub fn resolve(account: Option<&str>, hostname: Option<&str>) -> Result<Target, WebfingerError> {
    let raw = account.filter(|a| !a.is_empty()).ok_or(WebfingerError::Usage)?;
    let mut account = raw.strip_prefix('@').unwrap_or(raw).to_owned();
    let hostname = hostname.filter(|h| !h.is_empty());

    let derived = match account.rfind('@') {
        Some(idx) => account[idx + 1..].to_owned(),
        None => {
            let host = hostname.ok_or(WebfingerError::MissingHost)?;
            account.push('@');
            account.push_str(host);
            host.to_owned()
        }
    };

    let hostname = match hostname {
        Some(host) => host.to_owned(),
        None if derived.is_empty() => return Err(WebfingerError::MissingHost),
        None => derived,
    };

    Ok(Target { account, hostname })
}
