/// WebFinger request: URL construction, the HTTP transport seam, and response
/// handling.
use url::Url;

use super::account::Target;
use super::errors::WebfingerError;
use crate::types::Jrd;

/// Well-known path every WebFinger server answers on.
pub const WELL_KNOWN_PATH: &str = "/.well-known/webfinger";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty if unknown. A custom
    /// phrase sent by the server is not preserved.
    pub reason: String,
    pub body: String,
}

/// A blocking HTTP GET capability.
pub trait Transport {
    /// Fetch `url` and return whatever the server answered, including
    /// non-success statuses.
    ///
    /// # Errors
    ///
    /// Returns `WebfingerError::Request` when no response was received.
    fn get(&self, url: &Url) -> Result<HttpResponse, WebfingerError>;
}

/// `reqwest` blocking client with library defaults for TLS, redirects and
/// timeouts.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `WebfingerError::Request` if the TLS backend fails to initialize.
    pub fn new() -> Result<Self, WebfingerError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("webfinger/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<HttpResponse, WebfingerError> {
        (**self).get(url)
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, WebfingerError> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        Ok(HttpResponse {
            status: status.as_u16(),
            reason: reason_phrase(status),
            body: response.text()?,
        })
    }
}

/// Reason phrase reported for `status`.
///
/// reqwest does not expose the phrase from the status line, so this is the
/// canonical IANA phrase, or empty for unregistered codes.
fn reason_phrase(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_owned()
}

/// Build `https://<hostname>/.well-known/webfinger?resource=acct:<account>`.
///
/// The resource parameter is form-encoded (`acct%3Aalice%40example.com`).
///
/// # Errors
///
/// Returns `WebfingerError::InvalidHost` if `hostname` is not a valid authority.
pub fn webfinger_url(target: &Target) -> Result<Url, WebfingerError> {
    let mut url =
        Url::parse(&format!("https://{}", target.hostname)).map_err(|source| {
            WebfingerError::InvalidHost {
                hostname: target.hostname.clone(),
                source,
            }
        })?;
    url.set_path(WELL_KNOWN_PATH);
    url.query_pairs_mut()
        .clear()
        .append_pair("resource", &format!("acct:{}", target.account));
    Ok(url)
}

/// Look up `target` and decode the descriptor.
///
/// Returns `Ok(None)` when the server answers 404 (unknown resource).
///
/// # Errors
///
/// - `WebfingerError::InvalidHost` — the hostname does not form a URL
/// - `WebfingerError::Request` — no response from the server
/// - `WebfingerError::Transport` — any other non-2xx status
/// - `WebfingerError::Parse` — the body is not valid JSON
pub fn query(transport: &dyn Transport, target: &Target) -> Result<Option<Jrd>, WebfingerError> {
    let url = webfinger_url(target)?;
    let response = transport.get(&url)?;

    if response.status == 404 {
        return Ok(None);
    }
    if !(200..300).contains(&response.status) {
        return Err(WebfingerError::Transport {
            status: response.status,
            reason: response.reason,
        });
    }

    Ok(Some(Jrd::from_json(&response.body)?))
}

/// In-memory transport returning a canned response and recording requests.
#[cfg(test)]
pub struct StubTransport {
    pub status: u16,
    pub body: String,
    pub requested: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            requested: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Transport for StubTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, WebfingerError> {
        self.requested.borrow_mut().push(url.to_string());
        let reason = match self.status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "",
        };
        Ok(HttpResponse {
            status: self.status,
            reason: reason.to_owned(),
            body: self.body.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(account: &str, hostname: &str) -> Target {
        Target {
            account: account.to_owned(),
            hostname: hostname.to_owned(),
        }
    }

    #[test]
    fn test_url_encoding() {
        let url = webfinger_url(&target("alice@example.com", "example.com")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/.well-known/webfinger?resource=acct%3Aalice%40example.com"
        );
    }

    #[test]
    fn test_url_with_port() {
        let url = webfinger_url(&target("bob@example.org", "localhost:8443")).unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), WELL_KNOWN_PATH);
    }

    #[test]
    fn test_invalid_host() {
        let result = webfinger_url(&target("a@b", "exa mple.com"));
        assert!(matches!(result, Err(WebfingerError::InvalidHost { .. })));
    }

    #[test]
    fn test_query_found() {
        let stub = StubTransport::new(200, r#"{"subject":"acct:alice@example.com"}"#);
        let jrd = query(&stub, &target("alice@example.com", "example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(jrd.subject, "acct:alice@example.com");
        assert_eq!(
            stub.requested.borrow().as_slice(),
            ["https://example.com/.well-known/webfinger?resource=acct%3Aalice%40example.com"]
        );
    }

    #[test]
    fn test_reason_phrase_is_canonical() {
        use reqwest::StatusCode;

        assert_eq!(
            reason_phrase(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        assert_eq!(reason_phrase(StatusCode::from_u16(599).unwrap()), "");
    }

    #[test]
    fn test_query_not_found() {
        let stub = StubTransport::new(404, "not here");
        let result = query(&stub, &target("bob@example.org", "example.org")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_query_server_error() {
        let stub = StubTransport::new(500, "");
        let err = query(&stub, &target("carol@example.com", "example.com")).unwrap_err();
        assert!(matches!(err, WebfingerError::Transport { status: 500, .. }));
        assert_eq!(
            err.to_string(),
            "Request failed with status: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_query_redirect_status_is_error() {
        let stub = StubTransport::new(302, "");
        let err = query(&stub, &target("a@example.com", "example.com")).unwrap_err();
        assert!(matches!(err, WebfingerError::Transport { status: 302, .. }));
    }

    #[test]
    fn test_query_malformed_body() {
        let stub = StubTransport::new(200, "<html>oops</html>");
        let err = query(&stub, &target("a@example.com", "example.com")).unwrap_err();
        assert!(matches!(err, WebfingerError::Parse(_)));
    }
}
