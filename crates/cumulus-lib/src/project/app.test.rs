use super::*;

#[test]
fn test_route_methods_default_to_get() {
    let app: ApplicationModule = toml::from_str(
        r#"
name = "helloworld"

[[routes]]
path = "/"
handler = "index"
"#,
    )
    .unwrap();

    assert_eq!(app.routes[0].methods, vec!["GET".to_string()]);
    assert!(app.has_routes());
    assert!(app.functions.is_empty());
}

#[test]
fn test_handler_names_lists_routes_before_functions() {
    let mut app = ApplicationModule::new("demo");
    app.functions.push(LambdaFunction {
        name: "nightly".to_string(),
        handler: "cleanup".to_string(),
    });
    app.routes.push(Route {
        path: "/users".to_string(),
        methods: vec!["POST".to_string()],
        handler: "create_user".to_string(),
    });

    assert_eq!(app.handler_names(), vec!["create_user", "cleanup"]);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result: Result<ApplicationModule, _> = toml::from_str("name = \"demo\"\nroutez = []\n");
    assert!(result.is_err());
}
