use salvo::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn header_str<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        // Proxies may append several comma-separated values; the first is the client-facing one.
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn forwarded_header<'a>(req: &'a Request, server: &ServerConfig, name: &str) -> Option<&'a str> {
    if server.trust_forwarded_headers {
        header_str(req, name)
    } else {
        None
    }
}

/// ## Summary
/// Parses the request payload as JSON whatever its declared content type.
/// An empty payload yields `T::default()`.
///
/// ## Errors
/// Returns `AppError::InvalidBody` if the payload cannot be read or is not JSON of shape `T`.
pub async fn parse_json_body<T>(req: &mut Request) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let payload = req
        .payload()
        .await
        .map_err(|e| AppError::InvalidBody(e.to_string()))?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(payload).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// ## Summary
/// Returns the `scheme://host` the client used to reach this server.
///
/// A configured public origin wins. Otherwise, when `trust_forwarded_headers`
/// is set, the forwarded headers of a reverse proxy are honored, then the
/// `Host` header and request URI.
#[must_use]
pub fn request_origin(req: &Request, server: &ServerConfig) -> String {
    if let Some(origin) = server.public_origin() {
        return origin.to_string();
    }

    let scheme = forwarded_header(req, server, "x-forwarded-proto")
        .or_else(|| req.uri().scheme_str())
        .unwrap_or("http");

    let host = forwarded_header(req, server, "x-forwarded-host")
        .or_else(|| header_str(req, "host"))
        .or_else(|| req.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}
