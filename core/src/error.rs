use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("Invalid {field}: {value:?} is not a valid number")]
    InvalidInput { field: &'static str, value: String },

    #[error("Division by zero: {field} cannot be zero")]
    DivisionByZero { field: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoanError {
    /// True for errors caused by what the user typed. These are recovered
    /// locally; anything else aborts the calculation attempt.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LoanError::InvalidInput { .. } | LoanError::DivisionByZero { .. })
    }

    /// Text for the error dialog.
    pub fn user_message(&self) -> String {
        match self {
            LoanError::InvalidInput { .. } => "Please enter valid numeric values.".into(),
            LoanError::DivisionByZero { field: "principal" } => {
                "The principal cannot be zero.".into()
            }
            LoanError::DivisionByZero { .. } => "The number of days cannot be zero.".into(),
            other => format!("Unexpected error: {other}"),
        }
    }
}

pub type LoanResult<T> = Result<T, LoanError>;
