use snakeql_model::EntityDef;

/// The reproduction model: `User` carries an explicitly quoted storage name
/// and an element collection; `Post` references it through implicit
/// foreign-key columns, one of them inherited from a shared base
/// declaration.
pub fn quoted_table_entities() -> Vec<EntityDef> {
    vec![
        EntityDef::new("User")
            .with_table("user", true)
            .basic("firstName")
            .basic("lastName")
            .element_collection("userRoles"),
        EntityDef::new("Post")
            .basic("postTitle")
            .basic("postContent")
            .many_to_one("createdBy", "User")
            .many_to_one("lastModifiedBy", "User")
            .many_to_one("lastModifier", "User"),
    ]
}

/// Same model without an explicit table name: the reserved class name only
/// becomes quoted when keyword auto-quoting is enabled.
pub fn keyword_named_entities() -> Vec<EntityDef> {
    vec![
        EntityDef::new("User")
            .basic("firstName")
            .basic("lastName")
            .element_collection("userRoles"),
        EntityDef::new("Post")
            .basic("postTitle")
            .basic("postContent")
            .many_to_one("createdBy", "User")
            .many_to_one("lastModifiedBy", "User"),
    ]
}
