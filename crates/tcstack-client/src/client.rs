//! The signed caller: builds and sends authenticated TC3 requests.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use tcstack_auth::{Action, Credentials, tc3};

use crate::error::{ClientError, ClientResult};
use crate::response;

/// Bound on the whole request, connect through body. The signing contract
/// itself imposes no deadline; this only keeps a dead network from hanging
/// the caller forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for authenticated Tencent Cloud API calls.
///
/// Stateless apart from the credential pair and the underlying connection
/// pool: every call signs independently with a fresh timestamp, so a client
/// may be shared freely across tasks. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct TcClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl TcClient {
    /// Create a client from an explicit credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(credentials: Credentials) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { http, credentials })
    }

    /// Create a client with credentials from `TENCENT_CLOUD_SECRET_ID` and
    /// `TENCENT_CLOUD_SECRET_KEY`.
    ///
    /// Unset variables yield empty credentials; the first call then fails
    /// with a remote authentication error rather than a local one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(Credentials::from_env())
    }

    /// Build the signed HTTP request for an action without sending it.
    ///
    /// The payload is serialized exactly once; the same bytes are hashed into
    /// the signature and installed as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Json`] if the payload does not serialize,
    /// [`ClientError::InvalidEndpoint`] or [`ClientError::InvalidHeader`] if
    /// the descriptor cannot be represented on the wire.
    pub fn build_request<P>(&self, action: &Action, payload: &P) -> ClientResult<reqwest::Request>
    where
        P: Serialize + ?Sized,
    {
        let body = Bytes::from(serde_json::to_vec(payload)?);
        self.build_signed_request(action, body)
    }

    /// Issue a signed call and return the raw transport response.
    ///
    /// No status or body interpretation happens here; the remote service
    /// reports most failures, including authentication rejections, inside a
    /// 200 envelope that [`Self::call_api`] knows how to unwrap.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure, plus the
    /// request-building errors of [`Self::build_request`].
    pub async fn call<P>(&self, action: &Action, payload: &P) -> ClientResult<reqwest::Response>
    where
        P: Serialize + ?Sized,
    {
        let request = self.build_request(action, payload)?;

        debug!(
            endpoint = action.endpoint(),
            action = action.name(),
            "sending signed request"
        );

        Ok(self.http.execute(request).await?)
    }

    /// Issue a signed call and unwrap the response envelope into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the envelope carries an error
    /// member, [`ClientError::Json`] when the body is not valid JSON or not
    /// the expected shape, and the errors of [`Self::call`]. Reading the
    /// body off the wire is still a transport concern; only decoding the
    /// received bytes maps to [`ClientError::Json`].
    pub async fn call_api<P, T>(&self, action: &Action, payload: &P) -> ClientResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.call(action, payload).await?.bytes().await?;
        let envelope: Value = serde_json::from_slice(&body)?;
        response::parse_envelope(envelope)
    }

    fn build_signed_request(&self, action: &Action, body: Bytes) -> ClientResult<reqwest::Request> {
        let signed = tc3::sign(&self.credentials, action, &body);

        let url = reqwest::Url::parse(&format!("https://{}", action.endpoint()))
            .map_err(|_| ClientError::InvalidEndpoint(action.endpoint().to_owned()))?;

        let mut request = reqwest::Request::new(Method::POST, url);
        let headers = request.headers_mut();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(tcstack_auth::CONTENT_TYPE),
        );
        headers.insert(
            HeaderName::from_static("x-tc-version"),
            header_value("X-TC-Version", action.version())?,
        );
        headers.insert(
            HeaderName::from_static("x-tc-action"),
            header_value("X-TC-Action", action.name())?,
        );
        headers.insert(
            HeaderName::from_static("x-tc-timestamp"),
            header_value("X-TC-Timestamp", &signed.timestamp)?,
        );
        headers.insert(
            AUTHORIZATION,
            header_value("Authorization", &signed.authorization)?,
        );
        if let Some(region) = action.region() {
            headers.insert(
                HeaderName::from_static("x-tc-region"),
                header_value("X-TC-Region", region)?,
            );
        }

        *request.body_mut() = Some(reqwest::Body::from(body));
        Ok(request)
    }
}

fn header_value(name: &str, value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.to_owned()))
}
