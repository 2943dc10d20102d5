use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChallengeError {
    #[error("Invalid layout parameter: {name} = {value}")]
    InvalidLayoutParameter { name: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChallengeError {
    pub fn invalid_layout(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidLayoutParameter {
            name,
            value: value.to_string(),
        }
    }
}
