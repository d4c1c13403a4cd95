use crud_swagger::routes::CustomRoutes;
use crud_swagger::schema::{Domains, FieldDescriptor, FieldSchema};
use crud_swagger::writer::SCRIPT_PREFIX;
use crud_swagger::{Generator, config::Config, generate_docs};
use serde_json::{Map, Value, json};
use tempfile::tempdir;

fn object(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_generate_docs_writes_both_artifacts() {
    let dir = tempdir().unwrap();
    let domains = Domains::new().with(
        "widget",
        FieldSchema::new()
            .field("name", FieldDescriptor::new("string"))
            .field("owner", FieldDescriptor::new("uuid"))
            .field("parts", FieldDescriptor::array_of("number")),
    );
    let routes = CustomRoutes::new().with(object(json!({
        "/widget/search": { "get": { "summary": "Search widgets" } }
    })));

    let doc = generate_docs(dir.path(), &domains, &routes, &Map::new()).unwrap();

    let json_text = std::fs::read_to_string(dir.path().join("swagger.json")).unwrap();
    let script_text = std::fs::read_to_string(dir.path().join("spec.js")).unwrap();
    assert_eq!(script_text, format!("{}{}", SCRIPT_PREFIX, json_text));

    let written: Value = serde_json::from_str(&json_text).unwrap();
    assert_eq!(written, doc);

    let paths: Vec<&String> = written["paths"].as_object().unwrap().keys().collect();
    assert_eq!(paths, vec!["/widget", "/widget/{id}", "/widget/search"]);

    let properties = &written["definitions"]["Widget"]["properties"];
    assert_eq!(properties["owner"], json!({ "type": "string" }));
    assert_eq!(
        properties["parts"],
        json!({ "type": "array", "items": { "type": "integer" } })
    );
    assert_eq!(properties["widgetid"], json!({ "type": "string" }));
}

#[test]
fn test_generator_from_files() {
    let dir = tempdir().unwrap();
    let domains_dir = dir.path().join("domains");
    std::fs::create_dir(&domains_dir).unwrap();
    std::fs::write(
        domains_dir.join("user.yaml"),
        r#"
email:
  type: email
age:
  type: number
nickname:
  required: true
"#,
    )
    .unwrap();

    let routes_file = dir.path().join("routes.yaml");
    std::fs::write(
        &routes_file,
        r#"
- /user:
    get:
      summary: first
- /user:
    post:
      summary: second
"#,
    )
    .unwrap();

    let options_file = dir.path().join("options.json");
    std::fs::write(
        &options_file,
        r#"{"info": {"title": "Users", "version": "2.0.0"}, "host": "file.example.com"}"#,
    )
    .unwrap();

    let out = dir.path().join("out");
    let config = Config {
        input: Some(vec![domains_dir]),
        routes: Some(vec![routes_file]),
        options: Some(options_file),
        host: Some("cli.example.com".to_string()),
        output: Some(out.clone()),
        ..Default::default()
    };

    let doc = Generator::new().with_config(config).generate().unwrap();
    assert!(out.join("swagger.json").exists());
    assert!(out.join("spec.js").exists());

    assert_eq!(doc["info"]["title"], "Users");
    assert_eq!(doc["host"], "cli.example.com");
    assert_eq!(doc["basePath"], "/");
    assert_eq!(doc["paths"]["/user"], json!({ "post": { "summary": "second" } }));
    assert!(doc["paths"]["/user/{id}"].get("delete").is_some());

    let properties = &doc["definitions"]["User"]["properties"];
    assert_eq!(properties["email"], json!({ "type": "string" }));
    assert_eq!(properties["age"], json!({ "type": "integer" }));
    assert_eq!(properties["nickname"], json!({}));
    assert_eq!(properties["active"], json!({ "type": "boolean" }));
}

#[test]
fn test_in_memory_registrations_layer_over_files() {
    let dir = tempdir().unwrap();
    let include = dir.path().join("domains.json");
    std::fs::write(
        &include,
        r#"{"widget": {"name": {"type": "string"}}, "gadget": {}}"#,
    )
    .unwrap();

    let doc = Generator::new()
        .include(&include)
        .domain(
            "widget",
            FieldSchema::new().field("label", FieldDescriptor::new("string")),
        )
        .domain("order", FieldSchema::new)
        .custom_route(object(json!({ "/gadget": { "get": {} } })))
        .option("basePath", json!("/v2"))
        .build()
        .unwrap();

    let definitions: Vec<&String> = doc["definitions"].as_object().unwrap().keys().collect();
    assert_eq!(definitions, vec!["Widget", "Gadget", "Order"]);
    assert!(doc["definitions"]["Widget"]["properties"].get("label").is_some());
    assert!(doc["definitions"]["Widget"]["properties"].get("name").is_none());
    assert_eq!(doc["paths"]["/gadget"], json!({ "get": {} }));
    assert_eq!(doc["basePath"], "/v2");
}

#[test]
fn test_paths_option_discards_generated_paths() {
    let doc = Generator::new()
        .domain("widget", FieldSchema::new())
        .option("paths", json!({}))
        .build()
        .unwrap();
    assert_eq!(doc["paths"], json!({}));
    assert!(doc["definitions"].get("Widget").is_some());
}

#[test]
fn test_missing_input_directory_fails() {
    let dir = tempdir().unwrap();
    let res = Generator::new()
        .input(dir.path().join("nope"))
        .build();
    assert!(res.is_err());
}
