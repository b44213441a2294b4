use thiserror::Error;

/// Failure to read one field out of a protocol message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing token for {field}")]
    MissingToken { field: &'static str },

    #[error("invalid number {token:?} for {field}")]
    InvalidNumber { field: &'static str, token: String },
}

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No message received within {millis}ms")]
    Timeout { millis: u64 },

    #[error("Server rejected the agent: {reason}")]
    Rejected { reason: String },

    #[error("Expected an init reply, got: {message}")]
    UnexpectedReply { message: String },

    #[error("Malformed init message: {0}")]
    Init(#[from] ParseError),
}

impl AgentError {
    /// Fatal errors end the agent; the rest only cost the current cycle.
    pub fn is_fatal(&self) -> bool {
        match self {
            AgentError::Io(_) => false,
            AgentError::Timeout { .. } => false,
            _ => true,
        }
    }
}

pub type AgentResult<T> = Result<T, AgentError>;
