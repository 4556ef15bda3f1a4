/// A name as authored in entity metadata, before any storage-layer
/// normalization.
///
/// `explicitly_quoted` records quoting provenance only: whether the author
/// wrapped the source name in quote delimiters. It is metadata about the
/// input, never an instruction to the naming policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalName {
    pub text: String,
    pub explicitly_quoted: bool,
}

impl LogicalName {
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            explicitly_quoted: true,
        }
    }

    pub fn unquoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            explicitly_quoted: false,
        }
    }
}

/// The name emitted in storage-layer statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalName {
    pub text: String,
    pub requires_quoting: bool,
}

impl PhysicalName {
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requires_quoting: false,
        }
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requires_quoting: true,
        }
    }

    /// Renders the identifier as it appears in a generated statement:
    /// bare text, or wrapped in double quotes with embedded quotes doubled
    /// when `requires_quoting` is set.
    #[must_use]
    pub fn to_sql(&self) -> String {
        if self.requires_quoting {
            format!("\"{}\"", self.text.replace('"', "\"\""))
        } else {
            self.text.clone()
        }
    }
}
