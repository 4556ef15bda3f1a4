use snakeql_core::{LogicalName, is_reserved_word};

/// An entity declaration, the unit the metadata layer derives tables from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDef {
    pub class_name: String,
    pub table: Option<TableSpec>,
    pub fields: Vec<FieldDef>,
}

/// An explicit storage table name, optionally quoted by the author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    pub quoted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDef {
    /// Scalar field mapped to a single column.
    Basic { name: String },
    /// Reference to another entity, mapped to an implicit foreign-key column.
    ManyToOne { name: String, target: String },
    /// Multi-valued scalar field, mapped to an auxiliary collection table.
    ElementCollection { name: String },
}

impl EntityDef {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            table: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, quoted: bool) -> Self {
        self.table = Some(TableSpec {
            name: name.into(),
            quoted,
        });
        self
    }

    #[must_use]
    pub fn basic(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDef::Basic { name: name.into() });
        self
    }

    #[must_use]
    pub fn many_to_one(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(FieldDef::ManyToOne {
            name: name.into(),
            target: target.into(),
        });
        self
    }

    #[must_use]
    pub fn element_collection(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDef::ElementCollection { name: name.into() });
        self
    }

    /// Logical table name as the metadata layer sees it: an explicit spec
    /// wins; otherwise the class name. With `auto_quote_keywords` a
    /// class-name-derived name that collides with the reserved vocabulary is
    /// treated as if the author had quoted it.
    pub(crate) fn table_logical_name(&self, auto_quote_keywords: bool) -> LogicalName {
        match &self.table {
            Some(spec) => LogicalName {
                text: spec.name.clone(),
                explicitly_quoted: spec.quoted,
            },
            None => LogicalName {
                text: self.class_name.clone(),
                explicitly_quoted: auto_quote_keywords && is_reserved_word(&self.class_name),
            },
        }
    }
}
