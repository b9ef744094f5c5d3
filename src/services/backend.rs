use async_trait::async_trait;
use calorie_api::{
    ApiClient, ApiError, AuthResponse, FoodLog, FoodLogUpdate, HealthStatus, NewFoodLog,
    ProfileUpdate, UserProfile,
};
use std::sync::Arc;

/// Operations the session controller needs from the server
#[async_trait]
pub trait Backend: Send + Sync {
    async fn signup(&self, name: &str, email: &str, password: &str)
        -> Result<AuthResponse, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    fn logout(&self);
    fn is_authenticated(&self) -> bool;
    async fn get_profile(&self) -> Result<UserProfile, ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError>;
    async fn get_food_logs(&self) -> Result<Vec<FoodLog>, ApiError>;
    async fn add_food_log(&self, log: &NewFoodLog) -> Result<FoodLog, ApiError>;
    async fn delete_food_log(&self, id: i64) -> Result<(), ApiError>;
    async fn update_food_log(&self, id: i64, update: &FoodLogUpdate)
        -> Result<FoodLog, ApiError>;
    async fn check_health(&self) -> HealthStatus;
}

#[async_trait]
impl Backend for ApiClient {
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        ApiClient::signup(self, name, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        ApiClient::login(self, email, password).await
    }

    fn logout(&self) {
        ApiClient::logout(self)
    }

    fn is_authenticated(&self) -> bool {
        ApiClient::is_authenticated(self)
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        ApiClient::get_profile(self).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        ApiClient::update_profile(self, update).await
    }

    async fn get_food_logs(&self) -> Result<Vec<FoodLog>, ApiError> {
        ApiClient::get_food_logs(self).await
    }

    async fn add_food_log(&self, log: &NewFoodLog) -> Result<FoodLog, ApiError> {
        ApiClient::add_food_log(self, log).await
    }

    async fn delete_food_log(&self, id: i64) -> Result<(), ApiError> {
        ApiClient::delete_food_log(self, id).await
    }

    async fn update_food_log(
        &self,
        id: i64,
        update: &FoodLogUpdate,
    ) -> Result<FoodLog, ApiError> {
        ApiClient::update_food_log(self, id, update).await
    }

    async fn check_health(&self) -> HealthStatus {
        ApiClient::check_health(self).await
    }
}

/// Backend handle that can be passed as a component prop
#[derive(Clone)]
pub struct BackendHandle(Arc<dyn Backend>);

impl BackendHandle {
    pub fn new(inner: Arc<dyn Backend>) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.0)
    }

    pub async fn check_health(&self) -> HealthStatus {
        self.0.check_health().await
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_api::MemoryTokenStore;

    fn client() -> Arc<dyn Backend> {
        Arc::new(ApiClient::new("http://127.0.0.1:9", Arc::new(MemoryTokenStore::default())).unwrap())
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = BackendHandle::new(client());
        let b = a.clone();
        let c = BackendHandle::new(client());
        assert!(a == b);
        assert!(a != c);
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_offline() {
        let handle = BackendHandle::new(client());
        assert!(!handle.check_health().await.is_online());
    }
}
