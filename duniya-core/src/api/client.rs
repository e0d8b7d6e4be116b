//! HTTP client for the marketplace REST API.

use reqwest::{header, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::session::SessionHandle;

use super::models::{
    Artist, AuthResponse, ContactQuery, Event, NewContact, NewEvent, NewReview, Review,
    SavedArtistRecord, SignupRequest, UploadTicket,
};

/// Client for the marketplace REST API.
///
/// One instance per app; clones share the underlying connection pool and the
/// session handle. The bearer token is attached to every request for which a
/// live session exists; header handling lives here and nowhere else.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionHandle,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
    #[error("unexpected response format")]
    Parse,
    #[error("operation not supported by the API")]
    Unsupported,
}

impl ApiError {
    pub(crate) fn unexpected_status(status: StatusCode) -> Self {
        ApiError::Server {
            status,
            message: status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        }
    }
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionHandle) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a full URL with percent-encoded query parameters.
    pub(crate) fn url_with_query(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = self.url(path);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// GET a JSON payload. Non-success statuses are errors; the payload is
    /// handed back unparsed for the caller to shape.
    pub(crate) async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        debug!(%url, "GET");
        let mut request = self.http.get(url);
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::unexpected_status(status));
        }
        Ok(response.json().await?)
    }

    /// POST a JSON body and return the response once the status is known to
    /// be a success, extracting the server's error message otherwise.
    async fn post_json(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(%url, "POST");
        let mut request = self.http.post(url).json(body);
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        error_for_status(response).await
    }

    /// POST a JSON body and report the raw status. Only transport failures
    /// are errors; the caller owns the success contract. Used by the
    /// relation toggle, where one endpoint's success status is non-standard.
    pub(crate) async fn post_status(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<StatusCode, ApiError> {
        debug!(%url, "POST");
        let mut request = self.http.post(url).json(body);
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Ok(response.status())
    }

    // -- Artists --

    /// All artists in the directory.
    pub async fn list_artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.fetch_collection("/api/artist/list", &[]).await
    }

    /// One artist's full profile.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist, ApiError> {
        let url = self.url(&format!("/api/artist/{artist_id}"));
        let value = self.get_json(&url).await?;
        serde_json::from_value(value).map_err(|_| ApiError::Parse)
    }

    /// Reviews left for an artist.
    pub async fn list_reviews(&self, artist_id: &str) -> Result<Vec<Review>, ApiError> {
        self.fetch_collection("/api/review", &[("artistId", artist_id)])
            .await
    }

    // -- Events --

    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.fetch_collection("/api/events/", &[]).await
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<(), ApiError> {
        let url = self.url("/api/events");
        self.post_json(&url, event).await?;
        Ok(())
    }

    // -- Relations: saved artists --

    /// The user's saved-artist relation records.
    pub async fn saved_artists(&self, user_id: &str) -> Result<Vec<SavedArtistRecord>, ApiError> {
        self.fetch_collection("/api/savedartist", &[("userId", user_id)])
            .await
    }

    pub async fn create_saved_artist(
        &self,
        user_id: &str,
        artist_id: &str,
    ) -> Result<StatusCode, ApiError> {
        let url = self.url("/api/savedartist/create");
        self.post_status(&url, &json!({ "userId": user_id, "artistId": artist_id }))
            .await
    }

    /// Delete routes its identifiers through the query string, with an empty
    /// JSON body, exactly as the live API expects.
    pub async fn delete_saved_artist(
        &self,
        user_id: &str,
        artist_id: &str,
    ) -> Result<StatusCode, ApiError> {
        let url = self.url_with_query(
            "/api/savedartist/delete",
            &[("userId", user_id), ("artistId", artist_id)],
        );
        self.post_status(&url, &json!({})).await
    }

    // -- Relations: bookings --

    /// IDs of the events the user holds tickets for. The response wraps the
    /// array as `{"eventIds": [...]}`.
    pub async fn booked_event_ids(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        let url = self.url("/api/user/events");
        let response = self.post_json(&url, &json!({ "userId": user_id })).await?;
        let value: Value = response.json().await?;
        Ok(crate::fetcher::normalize_collection("/api/user/events", value)
            .into_iter()
            .filter_map(|id| id.as_str().map(str::to_string))
            .collect())
    }

    pub async fn book_ticket(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<StatusCode, ApiError> {
        let url = self.url(&format!("/api/bookticket/{event_id}"));
        self.post_status(&url, &json!({ "userId": user_id, "eventId": event_id }))
            .await
    }

    // -- Auth --

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.url("/api/auth/login");
        let response = self
            .post_json(&url, &json!({ "username": username, "password": password }))
            .await?;
        Ok(response.json().await?)
    }

    /// Exchange a Google Identity credential for a session.
    pub async fn login_with_google(&self, credential: &str) -> Result<AuthResponse, ApiError> {
        let url = self.url("/api/auth/google");
        let response = self
            .post_json(&url, &json!({ "credential": credential }))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let url = self.url("/api/auth/signup");
        let response = self.post_json(&url, request).await?;
        Ok(response.json().await?)
    }

    // -- Contact / reviews --

    pub async fn submit_contact(&self, contact: &NewContact) -> Result<(), ApiError> {
        let url = self.url("/api/contact");
        self.post_json(&url, contact).await?;
        Ok(())
    }

    pub async fn submit_review(&self, review: &NewReview) -> Result<(), ApiError> {
        let url = self.url("/api/review");
        self.post_json(&url, review).await?;
        Ok(())
    }

    /// Queries sent to an artist via the contact form.
    pub async fn artist_queries(&self, artist_id: &str) -> Result<Vec<ContactQuery>, ApiError> {
        self.fetch_collection("/api/contact", &[("artistId", artist_id)])
            .await
    }

    // -- Images --

    /// Ask the backend to presign an upload slot for an image.
    pub async fn request_image_upload(
        &self,
        image_name: &str,
        image_type: &str,
    ) -> Result<UploadTicket, ApiError> {
        let url = self.url("/api/image/upload");
        let response = self
            .post_json(
                &url,
                &json!({ "imageName": image_name, "imageType": image_type }),
            )
            .await?;
        let value: Value = response.json().await?;
        // A 2xx without an uploadUrl is how the backend signals refusal.
        serde_json::from_value(value).map_err(|_| ApiError::Parse)
    }

    /// PUT the image bytes to the presigned URL. No bearer here: the URL
    /// itself is the credential.
    pub async fn upload_image(
        &self,
        ticket: &UploadTicket,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        debug!(url = %ticket.upload_url, "PUT");
        let response = self
            .http
            .put(&ticket.upload_url)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::unexpected_status(status));
        }
        Ok(())
    }
}

/// Turn a non-success response into `ApiError::Server`, extracting the
/// backend's message when the body carries one (`{"error": {"message"}}` or
/// a flat `{"message"}`).
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| extract_message(&body))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    Err(ApiError::Server { status, message })
}

fn extract_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
