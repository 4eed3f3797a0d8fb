use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown query operation: {0}")]
    UnknownOperation(String),

    #[error("Unsupported database dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Placeholder mismatch in {key}: declared {expected} parameters, template uses {found}")]
    PlaceholderMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
