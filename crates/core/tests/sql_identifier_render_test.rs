use snakeql_core::PhysicalName;

#[test]
fn bare_identifiers_render_without_delimiters() {
    assert_eq!(PhysicalName::bare("post").to_sql(), "post");
    assert_eq!(PhysicalName::bare("created_by_id").to_sql(), "created_by_id");
}

#[test]
fn quoted_identifiers_render_in_double_quotes() {
    assert_eq!(PhysicalName::quoted("user").to_sql(), "\"user\"");
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(PhysicalName::quoted("odd\"name").to_sql(), "\"odd\"\"name\"");
}
