//! # uniportal-client
//!
//! Typed REST client for the university portal backend.
//!
//! One [`PortalClient`] method per backend route, grouped by area:
//! - `auth`: login
//! - `admin`: students, faculty, courses, academic years
//! - `announcements`
//! - `approval`: fee transactions awaiting review
//! - `calendar`: academic calendar entries and their PDF export
//! - `applications`: registrations assigned to a faculty advisor
//! - `student`: profile, editable fields, offerings and the registration calls
//!
//! Each method declares the [`AuthScheme`] its route expects.

pub mod admin;
pub mod announcements;
pub mod applications;
pub mod approval;
pub mod auth;
pub mod calendar;
pub mod student;

mod error;
mod http;

pub use auth::AuthScheme;
pub use error::{CONNECT_FAILED, ClientError};
pub use http::{Ack, Envelope, Listing, check_response};

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uniportal_config::ApiConfig;
use uniportal_core::entities::Session;

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Client with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] if the base URL is not http(s) or the
    /// TLS backend cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] on an invalid base URL or builder failure.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config
            .normalized_base_url()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn respond<B: Serialize + ?Sized>(
        &self,
        call: Call<'_>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, call.path);
        let mut builder = self.http.request(call.method.clone(), &url);
        builder = call.scheme.apply(builder, call.session, call.student_id);
        if let Some(key) = call.idempotency_key {
            builder = builder.header(auth::IDEMPOTENCY_HEADER, key);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.inspect_err(|e| {
            tracing::debug!(method = %call.method, path = %call.path, %e, "portal request failed");
        })?;
        tracing::debug!(
            method = %call.method,
            path = %call.path,
            status = resp.status().as_u16(),
            "portal request"
        );
        check_response(resp).await
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        call: Call<'_>,
        body: Option<&B>,
    ) -> Result<Vec<u8>, ClientError> {
        let resp = self.respond(call, body).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(&self, call: Call<'_>) -> Result<T, ClientError> {
        let path = call.path.clone();
        let bytes = self.execute::<()>(call, None).await?;
        http::decode::<Envelope<T>>(&path, &bytes).map(Envelope::into_inner)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, call: Call<'_>) -> Result<Vec<T>, ClientError> {
        let path = call.path.clone();
        let bytes = self.execute::<()>(call, None).await?;
        http::decode::<Listing<T>>(&path, &bytes).map(Listing::into_vec)
    }

    /// Send a mutation and read its acknowledgement without judging it.
    async fn send<B: Serialize + ?Sized>(
        &self,
        call: Call<'_>,
        body: Option<&B>,
    ) -> Result<Ack, ClientError> {
        let path = call.path.clone();
        let bytes = self.execute(call, body).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Ack::default());
        }
        http::decode::<Ack>(&path, &bytes)
    }

    /// Send a mutation; `success: false` becomes [`ClientError::Rejected`].
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        call: Call<'_>,
        body: Option<&B>,
    ) -> Result<Ack, ClientError> {
        self.send(call, body).await?.ensure()
    }
}

/// One request before it is sent.
struct Call<'a> {
    method: Method,
    path: String,
    scheme: AuthScheme,
    session: Option<&'a Session>,
    student_id: Option<&'a str>,
    idempotency_key: Option<&'a str>,
}

impl<'a> Call<'a> {
    fn new(method: Method, path: impl Into<String>, scheme: AuthScheme) -> Self {
        Self {
            method,
            path: path.into(),
            scheme,
            session: None,
            student_id: None,
            idempotency_key: None,
        }
    }

    fn get(path: impl Into<String>, scheme: AuthScheme) -> Self {
        Self::new(Method::GET, path, scheme)
    }

    fn post(path: impl Into<String>, scheme: AuthScheme) -> Self {
        Self::new(Method::POST, path, scheme)
    }

    fn put(path: impl Into<String>, scheme: AuthScheme) -> Self {
        Self::new(Method::PUT, path, scheme)
    }

    fn delete(path: impl Into<String>, scheme: AuthScheme) -> Self {
        Self::new(Method::DELETE, path, scheme)
    }

    fn by(mut self, session: &'a Session) -> Self {
        self.session = Some(session);
        self
    }

    fn student(mut self, student_id: &'a str) -> Self {
        self.student_id = Some(student_id);
        self
    }

    fn idempotent(mut self, key: Option<&'a str>) -> Self {
        self.idempotency_key = key;
        self
    }
}

/// Percent-encode one path segment.
fn seg(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
