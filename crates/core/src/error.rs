#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Duplicate route: {field} '{value}' appears more than once")]
    DuplicateRoute { field: &'static str, value: String },

    #[error("Invalid route '{path}': {reason}")]
    InvalidRoute { path: String, reason: &'static str },
}
