use crate::config::RecognizerKind;
use crate::error::AppError;
use crate::models::FoodRecognitionResponse;
use async_trait::async_trait;
use calorie_api::ApiClient;
use std::sync::Arc;
use std::time::Duration;

/// A dish the recognizer thinks is on the photo, per standard portion
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSuggestion {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Confidence in 0..=1 when the recognizer reports one
    pub confidence: Option<f64>,
}

impl From<FoodRecognitionResponse> for FoodSuggestion {
    fn from(r: FoodRecognitionResponse) -> Self {
        Self {
            name: r.food_name,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            confidence: Some(r.confidence.clamp(0.0, 1.0)),
        }
    }
}

/// What the user gave the recognizer
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionInput {
    Photo { bytes: Vec<u8>, file_name: String },
    Description(String),
    /// No photo could be taken on this device
    Nothing,
}

#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    async fn recognize(&self, input: RecognitionInput) -> Result<Vec<FoodSuggestion>, AppError>;
}

/// Always suggests the same three rice dishes after a short pause
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    pub delay: Duration,
}

impl Default for MockRecognizer {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }
}

impl MockRecognizer {
    pub fn suggestions() -> Vec<FoodSuggestion> {
        [
            ("Cơm gà", 450, 35.0, 52.0, 12.0),
            ("Cơm sườn", 520, 32.0, 58.0, 18.0),
            ("Cơm chiên", 380, 12.0, 55.0, 14.0),
        ]
        .into_iter()
        .map(|(name, calories, protein, carbs, fat)| FoodSuggestion {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            confidence: None,
        })
        .collect()
    }
}

#[async_trait]
impl FoodRecognizer for MockRecognizer {
    async fn recognize(&self, _input: RecognitionInput) -> Result<Vec<FoodSuggestion>, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::suggestions())
    }
}

/// Asks the backend's analyze-food endpoints; yields one suggestion
pub struct RemoteRecognizer {
    client: Arc<ApiClient>,
}

impl RemoteRecognizer {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FoodRecognizer for RemoteRecognizer {
    async fn recognize(&self, input: RecognitionInput) -> Result<Vec<FoodSuggestion>, AppError> {
        let response = match input {
            RecognitionInput::Photo { bytes, file_name } => {
                self.client.analyze_food_image(bytes, &file_name).await?
            }
            RecognitionInput::Description(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(AppError::Validation(
                        "Describe the food or take a photo".to_string(),
                    ));
                }
                self.client.analyze_food_description(text).await?
            }
            RecognitionInput::Nothing => {
                return Err(AppError::Validation(
                    "Describe the food or take a photo".to_string(),
                ))
            }
        };
        log::info!(
            "Recognized {} (confidence {:.2})",
            response.food_name,
            response.confidence
        );
        Ok(vec![response.into()])
    }
}

/// Shared recognizer handle passed to the quick log screen
#[derive(Clone)]
pub struct Recognizer(Arc<dyn FoodRecognizer>);

impl Recognizer {
    pub fn new(inner: Arc<dyn FoodRecognizer>) -> Self {
        Self(inner)
    }

    pub fn from_config(kind: RecognizerKind, client: Arc<ApiClient>) -> Self {
        match kind {
            RecognizerKind::Mock => Self::new(Arc::new(MockRecognizer::default())),
            RecognizerKind::Remote => Self::new(Arc::new(RemoteRecognizer::new(client))),
        }
    }

    pub async fn recognize(&self, input: RecognitionInput) -> Result<Vec<FoodSuggestion>, AppError> {
        self.0.recognize(input).await
    }
}

impl PartialEq for Recognizer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_three_suggestions() {
        let recognizer = MockRecognizer {
            delay: Duration::ZERO,
        };
        let suggestions = recognizer
            .recognize(RecognitionInput::Nothing)
            .await
            .unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].name, "Cơm gà");
        assert_eq!(suggestions[1].calories, 520);
        assert_eq!(suggestions[2].fat, 14.0);
    }

    #[test]
    fn test_suggestion_from_response_clamps_confidence() {
        let suggestion: FoodSuggestion = FoodRecognitionResponse {
            food_name: "Phở".to_string(),
            calories: 500,
            protein: 25.0,
            carbs: 60.0,
            fat: 12.0,
            portion: "1 tô".to_string(),
            confidence: 1.7,
            message: String::new(),
        }
        .into();
        assert_eq!(suggestion.confidence, Some(1.0));
        assert_eq!(suggestion.name, "Phở");
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = Recognizer::new(Arc::new(MockRecognizer::default()));
        let b = a.clone();
        let c = Recognizer::new(Arc::new(MockRecognizer::default()));
        assert!(a == b);
        assert!(a != c);
    }

    #[tokio::test]
    async fn test_remote_rejects_empty_description() {
        let client = Arc::new(
            ApiClient::new(
                "http://127.0.0.1:9",
                Arc::new(calorie_api::MemoryTokenStore::default()),
            )
            .unwrap(),
        );
        let err = RemoteRecognizer::new(client)
            .recognize(RecognitionInput::Description("   ".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
