use thiserror::Error;

/// The generation service failed, or returned something that does not fit
/// the expected shape
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key is configured for the generation service")]
    MissingApiKey,

    /// The request never produced an HTTP response
    #[error("request to the generation service failed: {0}")]
    Transport(String),

    #[error("generation service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("generation service returned no content")]
    EmptyResponse,

    #[error("could not parse generated content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The exam request succeeded but yielded zero usable questions
    #[error("no exam questions were generated")]
    NoQuestions,
}
