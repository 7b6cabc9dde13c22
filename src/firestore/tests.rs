use serde_json::json;

use super::database::Database;

#[test]
fn database_deserializes_from_listing_entry() {
    let database: Database = serde_json::from_value(json!({
        "name": "projects/test-project/databases/(default)"
    }))
    .unwrap();
    assert_eq!(database.name, "projects/test-project/databases/(default)");
}
