pub type SlidecastResult<T> = Result<T, SlidecastError>;

#[derive(thiserror::Error, Debug)]
pub enum SlidecastError {
    #[error("invalid preference: {0}")]
    InvalidPreference(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidecastError {
    pub fn invalid_preference(msg: impl Into<String>) -> Self {
        Self::InvalidPreference(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors caused by the caller's preferences rather than a collaborator failure.
    pub fn is_invalid_preference(&self) -> bool {
        matches!(self, Self::InvalidPreference(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
