//! CRUD path generation.
//!
//! Every domain `d` gets two path templates:
//! - `/d`: `get` (paged list) and `post` (create)
//! - `/d/{id}`: `get` (fetch one), `delete` and `put` (update)

use crate::schema::upper_first;
use serde_json::{Map, Value, json};

/// Builds the path map for the given domain names, in order.
pub fn generate_paths<S: AsRef<str>>(domains: &[S]) -> Map<String, Value> {
    let mut paths = Map::new();
    for domain in domains {
        let domain = domain.as_ref();
        log::debug!("Generating paths for domain '{}'", domain);

        paths.insert(
            format!("/{}", domain),
            json!({
                "get": list_operation(domain),
                "post": create_operation(domain),
            }),
        );
        paths.insert(
            format!("/{}/{{id}}", domain),
            json!({
                "get": get_operation(domain),
                "delete": delete_operation(domain),
                "put": update_operation(domain),
            }),
        );
    }
    paths
}

fn definition_ref(display: &str) -> Value {
    json!({ "$ref": format!("#/definitions/{}", display) })
}

/// `{ result: { type: object, schema: <ref> } }`
fn single_result(display: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "result": {
                "type": "object",
                "schema": definition_ref(display),
            }
        }
    })
}

fn id_parameter(domain: &str, action: &str) -> Value {
    json!({
        "name": "id",
        "in": "path",
        "description": format!("ID of the {} to {}", domain, action),
        "required": true,
        "type": "integer",
    })
}

fn not_found(display: &str) -> Value {
    json!({ "description": format!("{} not found", display) })
}

fn unprocessable() -> Value {
    json!({ "description": "Unprocessable Entity" })
}

fn unexpected() -> Value {
    json!({ "description": "Unexpected error" })
}

pub fn list_operation(domain: &str) -> Value {
    let display = upper_first(domain);
    json!({
        "summary": format!("Get a list of {}s", display),
        "description": format!("The {}s endpoint returns information about {}s", display, display),
        "parameters": [
            {
                "name": "page",
                "in": "query",
                "description": "The current page to get",
                "type": "integer",
            },
            {
                "name": "limit",
                "in": "query",
                "description": "The number of records to get",
                "type": "integer",
            }
        ],
        "tags": [display],
        "responses": {
            "200": {
                "description": format!("An array of {}", domain),
                "schema": {
                    "type": "object",
                    "properties": {
                        "result": {
                            "type": "object",
                            "properties": {
                                "records": {
                                    "type": "array",
                                    "items": definition_ref(&display),
                                },
                                "total": { "type": "number" },
                            }
                        }
                    }
                }
            },
            "default": unexpected(),
        }
    })
}

pub fn get_operation(domain: &str) -> Value {
    let display = upper_first(domain);
    json!({
        "summary": format!("Get a {}", display),
        "description": format!("The {} endpoint returns information about a {}", display, display),
        "parameters": [id_parameter(domain, "fetch")],
        "tags": [display],
        "responses": {
            "200": {
                "description": format!("A single {}", domain),
                "schema": single_result(&display),
            },
            "404": not_found(&display),
            "default": unexpected(),
        }
    })
}

pub fn create_operation(domain: &str) -> Value {
    let display = upper_first(domain);
    json!({
        "summary": format!("Create a {}", display),
        "description": format!("Adds a new {} to the list", display),
        "parameters": [
            {
                "name": "body",
                "in": "body",
                "description": format!("The {} to create", domain),
                "required": true,
                "schema": definition_ref(&display),
            }
        ],
        "tags": [display],
        "responses": {
            "201": {
                "description": format!("Successfully created {}", domain),
                "schema": single_result(&display),
            },
            "422": unprocessable(),
            "default": unexpected(),
        }
    })
}

pub fn update_operation(domain: &str) -> Value {
    let display = upper_first(domain);
    json!({
        "summary": format!("Update {}", display),
        "description": format!("Update an existing {}", display),
        "parameters": [
            id_parameter(domain, "update"),
            {
                "name": "body",
                "in": "body",
                "description": format!("The {} to update", domain),
                "schema": definition_ref(&display),
            }
        ],
        "tags": [display],
        "responses": {
            "200": {
                "description": format!("Successfully updated {}", domain),
                "schema": single_result(&display),
            },
            "404": not_found(&display),
            "422": unprocessable(),
            "default": unexpected(),
        }
    })
}

pub fn delete_operation(domain: &str) -> Value {
    let display = upper_first(domain);
    json!({
        "summary": format!("Deletes {}", display),
        "description": format!("Deletes an existing {}", display),
        "parameters": [id_parameter(domain, "delete")],
        "tags": [display],
        "responses": {
            "204": {
                "description": format!("Successfully deleted {}", domain),
            },
            "404": not_found(&display),
            "default": unexpected(),
        }
    })
}
