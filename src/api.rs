//! Fixed backend calls.
//!
//! Each method binds one endpoint, method and body shape and forwards to
//! [`Client::request`]. None of them add behavior of their own.

use crate::{
    models::{PredictionRequest, ProcessPayload},
    Client, Error, RequestOptions, Result,
};
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// `GET /health`
    pub async fn check_health(&self) -> Result<Value> {
        self.request("/health", RequestOptions::new()).await
    }

    /// `GET /users`
    pub async fn get_users(&self) -> Result<Value> {
        self.request("/users", RequestOptions::new()).await
    }

    /// `POST /users` with `user` as the body.
    pub async fn create_user<U>(&self, user: &U) -> Result<Value>
    where
        U: Serialize + ?Sized,
    {
        self.request("/users", RequestOptions::post_json(user)?).await
    }

    /// `POST /process` with `data` as the body.
    pub async fn process_data<D>(&self, data: &D) -> Result<Value>
    where
        D: Serialize + ?Sized,
    {
        self.request("/process", RequestOptions::post_json(data)?).await
    }

    /// `POST /predict` with `{"features": [...]}`.
    pub async fn get_prediction<F>(&self, features: &F) -> Result<Value>
    where
        F: Serialize + ?Sized,
    {
        let body = PredictionRequest {
            features: to_json(features)?,
        };
        self.request("/predict", RequestOptions::post_json(&body)?).await
    }

    /// [`process_data`](Self::process_data) with `{"numbers": [...]}`.
    pub async fn process_numbers<N>(&self, numbers: &N) -> Result<Value>
    where
        N: Serialize + ?Sized,
    {
        let payload = ProcessPayload::Numbers(to_json(numbers)?);
        self.process_data(&payload).await
    }

    /// [`process_data`](Self::process_data) with `{"text": "..."}`.
    pub async fn process_text(&self, text: &str) -> Result<Value> {
        self.process_data(&ProcessPayload::Text(text.to_string())).await
    }

    /// [`process_data`](Self::process_data) with `{"dataset": ...}`.
    pub async fn process_dataset<D>(&self, dataset: &D) -> Result<Value>
    where
        D: Serialize + ?Sized,
    {
        let payload = ProcessPayload::Dataset(to_json(dataset)?);
        self.process_data(&payload).await
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::SerializationFailed(e.to_string()))
}
