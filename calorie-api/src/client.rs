use crate::error::ApiError;
use crate::models::{
    AuthResponse, FoodLog, FoodLogUpdate, FoodRecognitionResponse, HealthStatus, NewFoodLog,
    ProfileUpdate, UserProfile,
};
use crate::store::{StoredSession, TokenStore};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

const USER_AGENT: &str = "CalorieTracker/0.1.0";

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AnalyzeFoodRequest<'a> {
    food_description: &'a str,
}

/// FastAPI error body; `detail` is a string for HTTP errors and a list for validation errors
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Client for the CalorieTracker REST backend
///
/// Holds the bearer token in memory and mirrors it into a [`TokenStore`] so a
/// session survives restarts.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: RwLock<StoredSession>,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client with the default request timeout (30 s)
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, store, Duration::from_secs(30))
    }

    /// Create a client; a token persisted by an earlier session is restored
    pub fn with_timeout(
        base_url: impl Into<String>,
        store: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .tcp_keepalive(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Fetch(format!("Client build failed: {}", e)))?;

        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Could not restore session: {}", e);
                StoredSession::default()
            }
        };

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session: RwLock::new(session),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Email of the last successful login or signup
    pub fn user_email(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .email
            .clone()
    }

    fn replace_session(&self, session: StoredSession) {
        if let Err(e) = self.store.store(&session) {
            log::warn!("Could not persist session: {}", e);
        }
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Attach the bearer token when one is held; without a token the header is omitted
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, what: &str) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            log::warn!("{}: request failed: {}", what, e);
            ApiError::Fetch(format!("{}: {}", what, e))
        })
    }

    async fn expect_json<T: DeserializeOwned>(
        response: Response,
        failure: &str,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            log::warn!("{} (status {})", failure, response.status());
            return Err(ApiError::Fetch(failure.to_string()));
        }
        response.json::<T>().await.map_err(|e| {
            log::warn!("{}: invalid response body: {}", failure, e);
            ApiError::Fetch(format!("{}: {}", failure, e))
        })
    }

    async fn authenticate<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        generic_failure: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = self
            .send(self.http.post(&url).json(body), generic_failure)
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .and_then(|detail| detail.as_str().map(str::to_string))
                .unwrap_or_else(|| generic_failure.to_string());
            log::info!("{} (status {}): {}", generic_failure, status, message);
            return Err(ApiError::Auth(message));
        }

        let auth = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Auth(format!("{}: {}", generic_failure, e)))?;

        self.replace_session(StoredSession {
            token: Some(auth.access_token.clone()),
            email: Some(auth.user.email.clone()),
        });

        Ok(auth)
    }

    /// Register a new account and start a session
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.authenticate(
            "/api/auth/signup",
            &SignupRequest {
                name,
                email,
                password,
            },
            "Signup failed",
        )
        .await
    }

    /// Log in with email and password and start a session
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate(
            "/api/auth/login",
            &LoginRequest { email, password },
            "Login failed",
        )
        .await
    }

    /// Forget the token and the persisted email; no network call
    pub fn logout(&self) {
        log::info!("Logging out");
        self.replace_session(StoredSession::default());
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Fetch the profile; a 401 clears the session before `Unauthorized` is returned
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.url("/api/profile");
        log::debug!("GET {}", url);

        let response = self
            .send(
                self.authorized(self.http.get(&url).header(CONTENT_TYPE, "application/json")),
                "Failed to fetch profile",
            )
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            log::info!("Profile request unauthorized, clearing session");
            self.replace_session(StoredSession::default());
            return Err(ApiError::Unauthorized);
        }

        Self::expect_json(response, "Failed to fetch profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let url = self.url("/api/profile");
        log::debug!("PUT {}", url);

        let response = self
            .send(
                self.authorized(self.http.put(&url).json(update)),
                "Failed to update profile",
            )
            .await?;

        Self::expect_json(response, "Failed to update profile").await
    }

    pub async fn get_food_logs(&self) -> Result<Vec<FoodLog>, ApiError> {
        let url = self.url("/api/food/logs");
        log::debug!("GET {}", url);

        let response = self
            .send(
                self.authorized(self.http.get(&url).header(CONTENT_TYPE, "application/json")),
                "Failed to fetch food logs",
            )
            .await?;

        Self::expect_json(response, "Failed to fetch food logs").await
    }

    /// Create a log entry; the server assigns id and timestamp
    pub async fn add_food_log(&self, log: &NewFoodLog) -> Result<FoodLog, ApiError> {
        let url = self.url("/api/food/log");
        log::debug!("POST {}", url);

        let response = self
            .send(
                self.authorized(self.http.post(&url).json(log)),
                "Failed to add food log",
            )
            .await?;

        Self::expect_json(response, "Failed to add food log").await
    }

    pub async fn delete_food_log(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/food/log/{}", id));
        log::debug!("DELETE {}", url);

        let response = self
            .send(
                self.authorized(
                    self.http
                        .delete(&url)
                        .header(CONTENT_TYPE, "application/json"),
                ),
                "Failed to delete food log",
            )
            .await?;

        if !response.status().is_success() {
            log::warn!("Failed to delete food log {} (status {})", id, response.status());
            return Err(ApiError::Fetch("Failed to delete food log".to_string()));
        }

        Ok(())
    }

    pub async fn update_food_log(
        &self,
        id: i64,
        update: &FoodLogUpdate,
    ) -> Result<FoodLog, ApiError> {
        let url = self.url(&format!("/api/food/log/{}", id));
        log::debug!("PUT {}", url);

        let response = self
            .send(
                self.authorized(self.http.put(&url).json(update)),
                "Failed to update food log",
            )
            .await?;

        Self::expect_json(response, "Failed to update food log").await
    }

    /// Estimate nutrition from a free-text description
    pub async fn analyze_food_description(
        &self,
        description: &str,
    ) -> Result<FoodRecognitionResponse, ApiError> {
        let url = self.url("/api/ai/analyze-food");
        log::debug!("POST {}", url);

        let response = self
            .send(
                self.authorized(self.http.post(&url).json(&AnalyzeFoodRequest {
                    food_description: description,
                })),
                "Failed to analyze food",
            )
            .await?;

        Self::expect_json(response, "Failed to analyze food").await
    }

    /// Estimate nutrition from a photo, sent as multipart part `image`
    pub async fn analyze_food_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<FoodRecognitionResponse, ApiError> {
        let url = self.url("/api/ai/analyze-food-image");
        log::debug!("POST {} ({} bytes)", url, image.len());

        let part = reqwest::multipart::Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(mime_for_file_name(file_name))
            .map_err(|e| ApiError::Fetch(format!("Failed to analyze food image: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .send(
                self.authorized(self.http.post(&url).multipart(form)),
                "Failed to analyze food image",
            )
            .await?;

        Self::expect_json(response, "Failed to analyze food image").await
    }

    /// Never fails: an unreachable backend reports status `offline`
    pub async fn check_health(&self) -> HealthStatus {
        let url = self.url("/health");
        log::debug!("GET {}", url);

        match self.http.get(&url).send().await {
            Ok(response) => response.json::<HealthStatus>().await.unwrap_or_else(|e| {
                log::debug!("Health response not readable: {}", e);
                HealthStatus::offline()
            }),
            Err(e) => {
                log::debug!("Backend unreachable: {}", e);
                HealthStatus::offline()
            }
        }
    }
}

fn mime_for_file_name(file_name: &str) -> &'static str {
    match file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}
