//! Assembly of the final swagger envelope.

use crate::definitions::generate_definitions;
use crate::paths::generate_paths;
use crate::routes::CustomRoutes;
use crate::schema::Domains;
use serde_json::{Map, Value, json};

/// The fixed Swagger 2.0 skeleton wrapped around `paths` and `definitions`.
pub fn default_envelope(paths: Map<String, Value>, definitions: Map<String, Value>) -> Map<String, Value> {
    let mut envelope = Map::new();
    envelope.insert("swagger".to_string(), json!("2.0"));
    envelope.insert(
        "info".to_string(),
        json!({
            "title": "title",
            "description": "description",
            "version": "1.0.0",
        }),
    );
    envelope.insert("host".to_string(), json!("localhost"));
    envelope.insert("schemes".to_string(), json!(["https"]));
    envelope.insert("basePath".to_string(), json!("/"));
    envelope.insert("produces".to_string(), json!(["application/json"]));
    envelope.insert("paths".to_string(), Value::Object(paths));
    envelope.insert("definitions".to_string(), Value::Object(definitions));
    envelope
}

/// Overwrites top-level keys of `envelope` with those of `options`.
/// Values are replaced wholesale, never merged.
pub fn apply_options(envelope: &mut Map<String, Value>, options: &Map<String, Value>) {
    for (key, value) in options {
        if key == "paths" || key == "definitions" {
            log::warn!("Option '{}' replaces the generated {}", key, key);
        }
        envelope.insert(key.clone(), value.clone());
    }
}

/// Generates paths and definitions for `domains`, folds in the custom routes
/// and wraps everything in the envelope, with `options` applied last.
pub fn build_document(domains: &Domains, routes: &CustomRoutes, options: &Map<String, Value>) -> Value {
    let mut paths = generate_paths(&domains.names());
    routes.apply(&mut paths);
    let definitions = generate_definitions(domains);
    log::info!(
        "Generated {} paths and {} definitions",
        paths.len(),
        definitions.len()
    );

    let mut envelope = default_envelope(paths, definitions);
    apply_options(&mut envelope, options);
    Value::Object(envelope)
}
