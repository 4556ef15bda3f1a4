use snakeql_core::{NamingError, QuoteAgnosticStrategy};
use snakeql_model::{DeriveError, DeriveOptions, EntityDef, derive_schema};

#[test]
fn unknown_many_to_one_target_aborts_derivation() {
    let entities = vec![
        EntityDef::new("Post").many_to_one("createdBy", "User"),
    ];

    let error = derive_schema(&entities, &QuoteAgnosticStrategy, DeriveOptions::default())
        .expect_err("derivation must fail");
    assert_eq!(
        error,
        DeriveError::UnknownTarget {
            entity: "Post".to_string(),
            field: "createdBy".to_string(),
            target: "User".to_string(),
        },
    );
}

#[test]
fn blank_field_name_surfaces_as_invalid_identifier() {
    let entities = vec![EntityDef::new("Post").basic("  ")];

    let error = derive_schema(&entities, &QuoteAgnosticStrategy, DeriveOptions::default())
        .expect_err("derivation must fail");
    assert_eq!(
        error,
        DeriveError::Naming(NamingError::InvalidIdentifier {
            context: "column".to_string(),
        }),
    );
}

#[test]
fn failed_derivation_returns_no_partial_schema() {
    let entities = vec![
        EntityDef::new("Account").basic("displayName"),
        EntityDef::new("Post").many_to_one("createdBy", "Missing"),
    ];

    let result = derive_schema(&entities, &QuoteAgnosticStrategy, DeriveOptions::default());
    assert!(result.is_err(), "derivation must fail as a whole");
}
