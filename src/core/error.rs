//! Error types for the formatting and routing pipeline

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Pattern compilation error with the offending token
    #[error("Pattern error at offset {position} ('{token}'): {message}")]
    PatternError {
        token: String,
        position: usize,
        message: String,
    },

    /// Converter failed to render an event
    #[error("Render error in converter '{converter}': {message}")]
    RenderError { converter: String, message: String },

    /// Sink write/flush/close failure with target
    #[error("Sink error on '{target}': {message}")]
    SinkError { target: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl PipelineError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a pattern compilation error
    pub fn pattern(
        token: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        PipelineError::PatternError {
            token: token.into(),
            position,
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render(converter: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::RenderError {
            converter: converter.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(target: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::SinkError {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PipelineError::Other(msg.into())
    }
}
