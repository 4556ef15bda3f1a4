use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// Blank logical text where a real identifier was expected. Schema
    /// derivation cannot proceed without a name, so this is a hard failure.
    #[error("invalid identifier for {context}: logical name is empty or blank")]
    InvalidIdentifier { context: String },

    /// Configuration selected a strategy id that no implementation claims.
    #[error("unknown naming strategy '{name}' (known: quote-preserving, quote-agnostic)")]
    UnknownStrategy { name: String },
}

pub type Result<T> = std::result::Result<T, NamingError>;
