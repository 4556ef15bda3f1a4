mod case;
mod error;
mod ident;
mod reserved;
mod strategy;

pub use case::to_delimited_lowercase;
pub use error::{NamingError, Result};
pub use ident::{LogicalName, PhysicalName};
pub use reserved::{RESERVED_WORDS, is_reserved_word};
pub use strategy::{
    NamingStrategy, QuoteAgnosticStrategy, QuotePreservingStrategy, StrategyKind,
};
