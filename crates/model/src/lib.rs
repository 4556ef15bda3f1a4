mod derive;
mod entity;
mod error;
mod schema;

pub use derive::{DeriveOptions, derive_schema};
pub use entity::{EntityDef, FieldDef, TableSpec};
pub use error::{DeriveError, Result};
pub use schema::{ColumnOrigin, DerivedColumn, DerivedSchema, DerivedTable};
