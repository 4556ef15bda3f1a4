use snakeql_core::PhysicalName;

/// Output of one schema-derivation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedSchema {
    pub tables: Vec<DerivedTable>,
}

impl DerivedSchema {
    pub fn table(&self, physical_text: &str) -> Option<&DerivedTable> {
        self.tables.iter().find(|table| table.name.text == physical_text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTable {
    pub name: PhysicalName,
    pub columns: Vec<DerivedColumn>,
}

impl DerivedTable {
    pub fn column(&self, physical_text: &str) -> Option<&DerivedColumn> {
        self.columns.iter().find(|column| column.name.text == physical_text)
    }

    /// Rendered column identifiers in declaration order, as statement
    /// generation would emit them.
    pub fn column_sql(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.to_sql()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedColumn {
    pub name: PhysicalName,
    pub origin: ColumnOrigin,
}

/// Which declaration a derived column came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOrigin {
    PrimaryKey,
    Basic { field: String },
    ForeignKey { field: String, target: String },
    CollectionOwner { entity: String },
    CollectionElement { field: String },
}
