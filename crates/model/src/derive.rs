use snakeql_core::{LogicalName, NamingStrategy};

use crate::{
    ColumnOrigin, DeriveError, DerivedColumn, DerivedSchema, DerivedTable, EntityDef, FieldDef,
    Result,
};

const PRIMARY_KEY_COLUMN: &str = "id";
const FOREIGN_KEY_SUFFIX: &str = "_id";

/// Switches mirroring the persistence layer's identifier-related settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeriveOptions {
    /// Quote class-name-derived table names that collide with reserved
    /// words, as if the author had quoted them explicitly.
    pub auto_quote_keywords: bool,
}

/// Derives the physical schema for a set of entity declarations.
///
/// The strategy is invoked once per distinct table and once per distinct
/// column. Dependent names (foreign-key columns, collection tables) are
/// synthesized by concatenating logical fragments first and resolving the
/// whole name in one call; resolving fragments separately and joining the
/// converted results is exactly the inconsistency this crate exists to
/// diagnose. Derivation is fail-fast: the first error aborts the pass and no
/// partial schema is returned.
pub fn derive_schema(
    entities: &[EntityDef],
    strategy: &dyn NamingStrategy,
    options: DeriveOptions,
) -> Result<DerivedSchema> {
    let mut schema = DerivedSchema::default();

    for entity in entities {
        let table_logical = entity.table_logical_name(options.auto_quote_keywords);
        let table_name = strategy.resolve_table_name(&table_logical)?;

        let mut columns = vec![DerivedColumn {
            name: strategy.resolve_column_name(&LogicalName::unquoted(PRIMARY_KEY_COLUMN))?,
            origin: ColumnOrigin::PrimaryKey,
        }];
        let mut collection_tables = Vec::new();

        for field in &entity.fields {
            match field {
                FieldDef::Basic { name } => {
                    columns.push(DerivedColumn {
                        name: strategy.resolve_column_name(&LogicalName::unquoted(name))?,
                        origin: ColumnOrigin::Basic { field: name.clone() },
                    });
                }
                FieldDef::ManyToOne { name, target } => {
                    let target_logical =
                        referenced_table_logical(entities, entity, name, target, options)?;
                    // Field name and key suffix are joined before resolution.
                    // Quoting provenance of the referenced table rides along
                    // on the synthesized logical name; whether it matters is
                    // the strategy's decision.
                    let fk_logical = LogicalName {
                        text: format!("{name}{FOREIGN_KEY_SUFFIX}"),
                        explicitly_quoted: target_logical.explicitly_quoted,
                    };
                    columns.push(DerivedColumn {
                        name: strategy.resolve_column_name(&fk_logical)?,
                        origin: ColumnOrigin::ForeignKey {
                            field: name.clone(),
                            target: target.clone(),
                        },
                    });
                }
                FieldDef::ElementCollection { name } => {
                    collection_tables.push(derive_collection_table(
                        entity,
                        &table_logical,
                        name,
                        strategy,
                    )?);
                }
            }
        }

        schema.tables.push(DerivedTable {
            name: table_name,
            columns,
        });
        schema.tables.append(&mut collection_tables);
    }

    Ok(schema)
}

fn referenced_table_logical(
    entities: &[EntityDef],
    referencing: &EntityDef,
    field: &str,
    target: &str,
    options: DeriveOptions,
) -> Result<LogicalName> {
    entities
        .iter()
        .find(|candidate| candidate.class_name == target)
        .map(|candidate| candidate.table_logical_name(options.auto_quote_keywords))
        .ok_or_else(|| DeriveError::UnknownTarget {
            entity: referencing.class_name.clone(),
            field: field.to_string(),
            target: target.to_string(),
        })
}

fn derive_collection_table(
    owner: &EntityDef,
    owner_table: &LogicalName,
    field: &str,
    strategy: &dyn NamingStrategy,
) -> Result<DerivedTable> {
    let table_logical = LogicalName {
        text: format!("{}_{}", owner_table.text, field),
        explicitly_quoted: owner_table.explicitly_quoted,
    };
    let owner_key_logical = LogicalName {
        text: format!("{}{FOREIGN_KEY_SUFFIX}", owner.class_name),
        explicitly_quoted: owner_table.explicitly_quoted,
    };

    Ok(DerivedTable {
        name: strategy.resolve_table_name(&table_logical)?,
        columns: vec![
            DerivedColumn {
                name: strategy.resolve_column_name(&owner_key_logical)?,
                origin: ColumnOrigin::CollectionOwner {
                    entity: owner.class_name.clone(),
                },
            },
            DerivedColumn {
                name: strategy.resolve_column_name(&LogicalName::unquoted(field))?,
                origin: ColumnOrigin::CollectionElement {
                    field: field.to_string(),
                },
            },
        ],
    })
}
