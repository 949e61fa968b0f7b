//! Walks through every backend call against a running backend.
//!
//! Start the backend locally, then run with:
//! `cargo run --example basic_calls`
//!
//! Set `MLBRIDGE_ENV=production` to talk to the deployed backend instead.

use mlbridge::models::{HealthStatus, NewUser};
use mlbridge::{ApiConfig, Client, Error, RequestOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("mlbridge=debug,basic_calls=info")
        .init();

    let config = ApiConfig::from_env()?;
    println!("Using backend at {}", config.base_url);
    let client = Client::new(&config)?;

    println!("=== Health ===");
    let health = client
        .call::<HealthStatus>("/health", RequestOptions::new())
        .await?;
    println!("Healthy: {} ({:?})", health.is_healthy(), health.latency);
    println!();

    println!("=== Users ===");
    println!("{}", client.get_users().await?);
    let created = client
        .create_user(&NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;
    println!("Created: {}", created);
    println!();

    println!("=== Processing ===");
    let numbers = client.process_numbers(&[1.0, 2.0, 3.0, 4.0, 5.0]).await?;
    println!("Numbers: {}", numbers["result"]);
    let text = client.process_text("Hello from Rust").await?;
    println!("Text: {}", text["result"]);
    let dataset = client
        .process_dataset(&json!([
            {"name": "a", "value": 1},
            {"name": "b", "value": 2}
        ]))
        .await?;
    println!("Dataset: {}", dataset["result"]);
    println!();

    println!("=== Prediction ===");
    let prediction = client.get_prediction(&[0.5, 1.2, -0.3, 0.8]).await?;
    println!("Prediction: {}", prediction["prediction"]);
    println!();

    println!("=== Error Handling ===");
    match client.request("/predict", RequestOptions::post_json(&json!({}))?).await {
        Ok(value) => println!("Unexpected success: {}", value),
        Err(e) => println!("Backend rejected empty prediction: {}", e),
    }

    Ok(())
}
