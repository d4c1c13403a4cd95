//! Definition generation: one object-type definition per domain.

use crate::schema::{Domains, FieldDescriptor, FieldSchema, TypeToken, upper_first};
use serde_json::{Map, Value, json};

impl TypeToken {
    /// Swagger type emitted for this token.
    pub fn swagger_type(&self) -> &str {
        match self {
            TypeToken::Number => "integer",
            TypeToken::Uuid | TypeToken::Email => "string",
            other => other.as_str(),
        }
    }
}

/// Coerces a raw type token to its swagger type.
pub fn convert_type(token: &str) -> String {
    TypeToken::from(token).swagger_type().to_string()
}

/// Property object for a single field. Only the type survives; a field
/// without a type becomes `{}`.
pub fn property_for(descriptor: &FieldDescriptor) -> Value {
    let mut property = Map::new();
    if let Some(kind) = &descriptor.kind {
        property.insert("type".to_string(), json!(kind.swagger_type()));

        if *kind == TypeToken::Array {
            let mut items = Map::new();
            if let Some(of) = &descriptor.of {
                items.insert("type".to_string(), json!(of.swagger_type()));
            }
            property.insert("items".to_string(), Value::Object(items));
        }
    }
    Value::Object(property)
}

/// Fields injected into every definition, after the schema's own fields.
fn metadata_fields(domain: &str) -> [(String, &'static str); 6] {
    [
        (format!("{}id", domain), "string"),
        ("createdby".to_string(), "string"),
        ("updatedby".to_string(), "string"),
        ("createddate".to_string(), "date"),
        ("updateddate".to_string(), "date"),
        ("active".to_string(), "boolean"),
    ]
}

pub fn definition_for(domain: &str, schema: &FieldSchema) -> Value {
    let mut properties = Map::new();
    for (name, descriptor) in schema.iter() {
        properties.insert(name.to_string(), property_for(descriptor));
    }

    for (name, kind) in metadata_fields(domain) {
        if properties.contains_key(&name) {
            log::debug!("Field '{}' of domain '{}' is overridden by metadata", name, domain);
        }
        properties.insert(name, json!({ "type": kind }));
    }

    json!({
        "type": "object",
        "properties": properties,
    })
}

/// Builds the definitions map, keyed by the capitalized domain name.
/// Each domain's schema source is consulted exactly once.
pub fn generate_definitions(domains: &Domains) -> Map<String, Value> {
    let mut definitions = Map::new();
    for (domain, source) in domains.iter() {
        let schema = source.field_schema();
        log::debug!(
            "Generating definition for domain '{}' ({} fields)",
            domain,
            schema.len()
        );
        definitions.insert(upper_first(domain), definition_for(domain, &schema));
    }
    definitions
}
