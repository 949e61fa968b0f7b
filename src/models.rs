//! Serde types for the backend's request and response bodies.
//!
//! The convenience methods on [`Client`](crate::Client) return raw
//! `serde_json::Value`s. These types are for callers who want to decode the
//! shapes the backend currently sends through [`Client::call`](crate::Client::call).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /process` call made by the processing shortcuts.
///
/// Serializes as a single-key object: `{"numbers": [...]}`, `{"text": "..."}`
/// or `{"dataset": ...}`. Values are carried as given, so integers stay
/// integers on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessPayload {
    /// Numeric series to summarize.
    Numbers(Value),
    /// Free text to analyze.
    Text(String),
    /// Tabular data, typically an array of row objects.
    Dataset(Value),
}

/// Body of a `POST /predict` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Feature vector for the classifier.
    pub features: Value,
}

/// Body of a `POST /users` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"healthy"` when the backend is up.
    pub status: String,
    /// Free-form detail from the backend.
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Returns `true` if the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// A user record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    /// All known users.
    pub users: Vec<User>,
}

/// `POST /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Whether the backend accepted the user.
    pub success: bool,
    /// Confirmation text, e.g. `"User created"`.
    #[serde(default)]
    pub message: Option<String>,
    /// The user data echoed back.
    pub user: Value,
}

/// `POST /process`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Whether processing succeeded.
    pub success: bool,
    /// Analysis result. Its shape depends on the payload kind.
    pub result: Value,
}

/// `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Whether the prediction succeeded.
    pub success: bool,
    /// The classifier output.
    pub prediction: Prediction,
}

/// The linear classifier's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Score before the sigmoid.
    pub raw_prediction: f64,
    /// Sigmoid of the raw score.
    pub probability: f64,
    /// `"positive"` or `"negative"`.
    pub classification: String,
    /// Distance from the decision boundary, scaled to 0..=1.
    pub confidence: f64,
    /// Features after padding or truncation to the model's width.
    #[serde(default)]
    pub features_used: Vec<f64>,
}
