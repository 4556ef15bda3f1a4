use std::str::FromStr;

use crate::{
    LogicalName, NamingError, PhysicalName, Result, case::to_delimited_lowercase,
    reserved::is_reserved_word,
};

/// A physical naming policy applied during schema derivation.
///
/// The hosting metadata layer calls each operation once per distinct
/// storage-level identifier and uses the returned name verbatim in generated
/// statements. Implementations are stateless and pure: identical input must
/// yield identical output on every call.
pub trait NamingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolves the physical name for a table-level identifier, including
    /// auxiliary collection tables.
    fn resolve_table_name(&self, logical: &LogicalName) -> Result<PhysicalName>;

    /// Resolves the physical name for a column-level identifier, including
    /// synthesized foreign-key columns.
    fn resolve_column_name(&self, logical: &LogicalName) -> Result<PhysicalName>;
}

/// Converts every identifier to delimited lowercase regardless of quoting
/// provenance.
///
/// `explicitly_quoted` on the input is discarded before conversion, so a
/// quoted source name can never leak mixed-case text into the physical
/// schema. Output quoting is a separate decision over the converted text:
/// columns are never quoted, tables only when the converted text is a
/// reserved word.
pub struct QuoteAgnosticStrategy;

impl NamingStrategy for QuoteAgnosticStrategy {
    fn name(&self) -> &'static str {
        "quote-agnostic"
    }

    fn resolve_table_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        let converted = convert_checked(&logical.text, "table")?;
        let requires_quoting = is_reserved_word(&converted);
        Ok(PhysicalName {
            text: converted,
            requires_quoting,
        })
    }

    fn resolve_column_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        let converted = convert_checked(&logical.text, "column")?;
        Ok(PhysicalName::bare(converted))
    }
}

/// Mirrors the upstream default behavior this repository diagnoses: an
/// explicitly quoted logical name bypasses conversion and keeps its quoting.
///
/// Because dependent identifiers inherit quoting provenance from the table
/// they reference, this strategy emits mixed-case foreign-key columns
/// (`"createdBy_id"`) and collection tables (`"User_userRoles"`) whenever the
/// referenced table name was quoted.
pub struct QuotePreservingStrategy;

impl NamingStrategy for QuotePreservingStrategy {
    fn name(&self) -> &'static str {
        "quote-preserving"
    }

    fn resolve_table_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        resolve_preserving(logical, "table")
    }

    fn resolve_column_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        resolve_preserving(logical, "column")
    }
}

fn resolve_preserving(logical: &LogicalName, context: &str) -> Result<PhysicalName> {
    if logical.text.trim().is_empty() {
        return Err(NamingError::InvalidIdentifier {
            context: context.to_string(),
        });
    }

    if logical.explicitly_quoted {
        return Ok(PhysicalName::quoted(logical.text.clone()));
    }

    Ok(PhysicalName::bare(to_delimited_lowercase(&logical.text)))
}

fn convert_checked(text: &str, context: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(NamingError::InvalidIdentifier {
            context: context.to_string(),
        });
    }

    Ok(to_delimited_lowercase(text))
}

/// Strategy selector consumed from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Upstream default: quoting provenance suppresses conversion.
    #[default]
    QuotePreserving,
    /// Corrective policy: conversion is unconditional.
    QuoteAgnostic,
}

impl StrategyKind {
    #[must_use]
    pub fn strategy(self) -> &'static dyn NamingStrategy {
        match self {
            Self::QuotePreserving => &QuotePreservingStrategy,
            Self::QuoteAgnostic => &QuoteAgnosticStrategy,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = NamingError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "quote-preserving" => Ok(Self::QuotePreserving),
            "quote-agnostic" => Ok(Self::QuoteAgnostic),
            other => Err(NamingError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}
