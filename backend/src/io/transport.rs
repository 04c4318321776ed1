use async_trait::async_trait;
use shared::{GenerateContentRequest, GenerateContentResponse};

use super::error::GenerationError;

/// A single request/response exchange with the generation service.
///
/// The browser implementation issues an HTTP call; tests script the
/// responses. Futures are not `Send`: everything runs on the one UI thread.
#[async_trait(?Send)]
pub trait GenerationTransport {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}
