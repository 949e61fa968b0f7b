//! # mlbridge - async client for the data/ML backend
//!
//! `mlbridge` is a thin JSON client built on top of `reqwest`. It exposes the
//! backend's REST calls (health check, users, data processing, predictions)
//! and normalizes every outcome into either parsed JSON or a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use mlbridge::{ApiConfig, Client};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct CreateUser {
//!     name: String,
//!     email: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mlbridge::Error> {
//!     // Pick the backend once at startup and pass the client around
//!     let client = Client::new(&ApiConfig::from_env()?)?;
//!
//!     let health = client.check_health().await?;
//!     println!("Backend status: {}", health["status"]);
//!
//!     let stats = client.process_numbers(&[1.0, 2.0, 3.0]).await?;
//!     println!("Mean: {}", stats["result"]["mean"]);
//!
//!     let created = client
//!         .create_user(&CreateUser {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     println!("Created: {}", created["user"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Nothing is retried or swallowed. A failed call is logged through `tracing`
//! and returned to the caller:
//!
//! - [`Error::Network`] - no response arrived; the `reqwest` error is passed through
//! - [`Error::Http`] - non-2xx status; displays as the backend's `error` field,
//!   or `HTTP <status>: <reason>`
//! - [`Error::DeserializationFailed`] - a 2xx body was not valid JSON
//!
//! ```no_run
//! use mlbridge::{ApiConfig, Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new(&ApiConfig::default())?;
//! match client.get_prediction(&[0.5, 1.2, -0.3, 0.8]).await {
//!     Ok(prediction) => println!("Prediction: {}", prediction["prediction"]),
//!     Err(Error::Http { status, message, .. }) => {
//!         eprintln!("Backend error {}: {}", status, message);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod config;
mod error;
pub mod models;
mod options;
mod response;

pub use client::{Client, ClientBuilder};
pub use config::{ApiConfig, Environment};
pub use error::{Error, Result};
pub use options::{Body, RequestOptions};
pub use response::Response;
