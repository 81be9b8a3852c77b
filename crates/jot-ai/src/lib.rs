pub mod client;
pub mod error;
pub mod prompt;
pub mod schema;

pub use client::GeminiClient;
pub use error::{AiError, Result};

use jot_core::OrganizeResult;

use async_trait::async_trait;

/// The structured-extraction capability: free text in, schema-constrained
/// classification out. Behind a trait so tests can script results without
/// a network.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<OrganizeResult>;
}
