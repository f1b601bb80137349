use routedoc_core::registry::{self, Endpoint, RouteRegistry};

const USERS: &str = include_str!("fixtures/users.yaml");
const SHOP: &str = include_str!("fixtures/shop.json");

#[test]
fn load_users_yaml() {
    let table = registry::from_yaml(USERS).expect("should load users.yaml");
    let endpoints = table.endpoints();
    assert_eq!(endpoints.len(), 4);

    let by_id = endpoints[1];
    assert_eq!(by_id.path_mask(), "/users/{id}");
    assert_eq!(by_id.methods(), ["GET", "PUT", "DELETE"]);
    assert_eq!(by_id.parameters().len(), 2);
    assert_eq!(
        by_id.parameters()[0].description.as_deref(),
        Some("User identifier")
    );
    assert_eq!(by_id.parameters()[1].param_type.as_deref(), Some("string"));
    assert_eq!(
        by_id.tags().keys().collect::<Vec<_>>(),
        vec!["users", "admin"]
    );

    assert!(endpoints[2].methods().is_empty());
}

#[test]
fn load_shop_json() {
    let table = registry::from_json(SHOP).expect("should load shop.json");
    let endpoints = table.endpoints();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].parameters()[1].name, "offset");
    assert!(endpoints[0].parameters()[1].description.is_none());
    assert!(endpoints[1].tags().is_empty());
}

#[test]
fn reject_malformed_yaml() {
    assert!(registry::from_yaml("endpoints: [[").is_err());
}

#[test]
fn reject_missing_mask() {
    assert!(registry::from_yaml("endpoints:\n  - methods: [GET]\n").is_err());
}
