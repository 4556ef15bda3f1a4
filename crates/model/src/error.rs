use snakeql_core::NamingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// A many-to-one field references an entity that is not declared.
    #[error("entity '{entity}' field '{field}' references unknown entity '{target}'")]
    UnknownTarget {
        entity: String,
        field: String,
        target: String,
    },
}

pub type Result<T> = std::result::Result<T, DeriveError>;
