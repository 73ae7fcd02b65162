use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed with {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing video.
    pub fn video_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "Video",
            id: id.to_string(),
        }
    }
}
