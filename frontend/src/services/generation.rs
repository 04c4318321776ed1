use std::rc::Rc;

use async_trait::async_trait;
use backend::{GenerationClient, GenerationError, GenerationTransport};
use gloo::net::http::Request;
use shared::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Generation client used by the views
pub type StudyClient = GenerationClient<HttpTransport>;

/// Calls the hosted model over `fetch`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: Rc<GenerationConfig>,
}

impl HttpTransport {
    pub fn new(config: Rc<GenerationConfig>) -> Self {
        Self { config }
    }
}

pub fn study_client(config: Rc<GenerationConfig>) -> StudyClient {
    let transport = HttpTransport::new(config.clone());
    GenerationClient::new(transport, &config)
}

#[async_trait(?Send)]
impl GenerationTransport for HttpTransport {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let api_key = self.config.api_key().ok_or(GenerationError::MissingApiKey)?;
        let url = self.config.generate_content_url();
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .map_err(|e| GenerationError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(GenerationError::Service {
                status: response.status(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
