//! Request plumbing of [`FrappeClient`]

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::{HttpUtils, is_csrf_safe_method};

use super::FrappeClient;

/// Header the Django backend reads the CSRF token from.
const CSRF_HEADER: &str = "X-CSRFToken";

impl FrappeClient {
    /// Label used in logs and errors.
    pub(crate) fn backend(&self) -> &str {
        self.base.as_str()
    }

    /// Build `<base>/<segments...>/` (trailing slash, as the backend routes expect).
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.base.to_string(),
                detail: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Start a request, attaching the CSRF header to unsafe methods.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .client
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.csrf_token {
            Some(token) if !is_csrf_safe_method(&method) => builder.header(CSRF_HEADER, token),
            _ => builder,
        }
    }

    /// Send a request and return the body of a 2xx response.
    pub(crate) async fn send(&self, method: Method, url: Url, builder: RequestBuilder) -> Result<String> {
        let (status, body) = HttpUtils::execute_request_with_retry(
            builder,
            self.backend(),
            &method,
            url.as_str(),
            self.max_retries,
        )
        .await?;
        HttpUtils::ensure_success(status, body, self.backend(), url.path())
    }

    /// GET `url` and parse the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let builder = self.request(Method::GET, url.clone());
        let body = self.send(Method::GET, url, builder).await?;
        HttpUtils::parse_json(&body, self.backend())
    }

    /// Send a form-encoded body with `method`; returns the raw response text.
    pub(crate) async fn send_form(
        &self,
        method: Method,
        url: Url,
        form: &[(&'static str, &str)],
    ) -> Result<String> {
        log::debug!("[{}] Form body: {form:?}", self.backend());
        let builder = self.request(method.clone(), url.clone()).form(form);
        self.send(method, url, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientOptions;

    fn client(base: &str) -> FrappeClient {
        FrappeClient::new(ClientOptions::new(base)).unwrap()
    }

    #[test]
    fn endpoint_appends_trailing_slash() {
        let c = client("http://localhost:8000/api/v2");
        let url = c.endpoint(&["user-items", "42"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v2/user-items/42/");
    }

    #[test]
    fn endpoint_handles_base_with_slash() {
        let c = client("http://localhost:8000/api/v2/");
        let url = c.endpoint(&["users"], &[("users", "5".into())]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v2/users/?users=5");
    }

    #[test]
    fn endpoint_escapes_segments() {
        let c = client("http://localhost/");
        let url = c.endpoint(&["user-items", "a b/c"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/user-items/a%20b%2Fc/");
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(
            FrappeClient::new(ClientOptions::new("not a url")),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            FrappeClient::new(ClientOptions::new("mailto:someone@example.com")),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn csrf_header_only_on_unsafe_methods() {
        let mut options = ClientOptions::new("http://localhost/");
        options.csrf_token = Some("tok".to_string());
        let c = FrappeClient::new(options).unwrap();
        let url = c.endpoint(&["user-items", "1"], &[]).unwrap();

        let post = c.request(Method::POST, url.clone()).build().unwrap();
        assert_eq!(post.headers()[CSRF_HEADER], "tok");

        let get = c.request(Method::GET, url).build().unwrap();
        assert!(get.headers().get(CSRF_HEADER).is_none());
    }
}
