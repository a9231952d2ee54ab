//! Generic HTTP request helpers
//!
//! Shared by every endpoint of [`FrappeClient`](crate::FrappeClient):
//! sending, logging, status classification and JSON parsing live here so the
//! endpoint methods only build requests.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Maximum number of characters of a body that end up in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// Transport failures become [`ClientError::Timeout`] or
    /// [`ClientError::NetworkError`]; any HTTP status is returned as-is so the
    /// caller can decide (see [`HttpUtils::ensure_success`]).
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend: &str,
        method: &Method,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[{backend}] {method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    backend: backend.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    backend: backend.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                backend: backend.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{backend}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Map a non-2xx status to an error, keeping the raw body.
    pub fn ensure_success(
        status_code: u16,
        body: String,
        backend: &str,
        resource: &str,
    ) -> Result<String, ClientError> {
        match status_code {
            200..=299 => Ok(body),
            404 => Err(ClientError::NotFound {
                backend: backend.to_string(),
                resource: resource.to_string(),
                raw_message: (!body.is_empty()).then_some(body),
            }),
            status => Err(ClientError::HttpStatus {
                backend: backend.to_string(),
                status,
                body,
            }),
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, backend: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{backend}] JSON parse failed: {e}");
            log::error!("[{backend}] Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                backend: backend.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with up to `max_retries` extra attempts.
    ///
    /// Only transport errors and gateway statuses (502/503/504) are retried,
    /// with exponential backoff. `max_retries == 0` sends exactly once.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        backend: &str,
        method: &Method,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ClientError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, backend, method, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{backend}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, backend, method, url).await;
            };

            let outcome = Self::execute_request(req, backend, method, url)
                .await
                .and_then(|(status, body)| {
                    if matches!(status, 502..=504) {
                        Err(ClientError::HttpStatus {
                            backend: backend.to_string(),
                            status,
                            body,
                        })
                    } else {
                        Ok((status, body))
                    }
                });

            match outcome {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        backend,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::NetworkError {
            backend: backend.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Methods that never need the CSRF header.
pub fn is_csrf_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

/// Shorten a body for logging without splitting a UTF-8 character.
pub(crate) fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_methods_skip_csrf() {
        assert!(is_csrf_safe_method(&Method::GET));
        assert!(is_csrf_safe_method(&Method::HEAD));
        assert!(is_csrf_safe_method(&Method::OPTIONS));
        assert!(is_csrf_safe_method(&Method::TRACE));
        assert!(!is_csrf_safe_method(&Method::POST));
        assert!(!is_csrf_safe_method(&Method::DELETE));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    #[test]
    fn ensure_success_passes_2xx() {
        let body = HttpUtils::ensure_success(201, "{}".into(), "b", "/x/").unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn ensure_success_maps_404() {
        let err = HttpUtils::ensure_success(404, String::new(), "b", "/user-items/9/").unwrap_err();
        assert!(matches!(
            err,
            ClientError::NotFound { ref resource, raw_message: None, .. } if resource == "/user-items/9/"
        ));
    }

    #[test]
    fn ensure_success_keeps_raw_body() {
        let err = HttpUtils::ensure_success(500, "<h1>boom</h1>".into(), "b", "/x/").unwrap_err();
        assert_eq!(err.raw_body(), Some("<h1>boom</h1>"));
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<u32>, ClientError> = HttpUtils::parse_json("not json", "test");
        assert!(matches!(result, Err(ClientError::ParseError { .. })));
    }

    #[test]
    fn truncate_short_and_long() {
        assert_eq!(truncate_for_log("hello"), "hello");
        let long = "é".repeat(TRUNCATE_LIMIT + 10);
        let cut = truncate_for_log(&long);
        assert!(cut.contains("... [truncated, total"));
        assert!(cut.len() < long.len());
    }
}
