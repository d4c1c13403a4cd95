//! Reads domain descriptors, custom route fragments and envelope options
//! from JSON / YAML files.

use crate::error::{Error, Result};
use crate::routes::CustomRoutes;
use crate::schema::{Domains, FieldSchema};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_document(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

/// Parses a JSON or YAML file into a JSON value. YAML goes through
/// `serde_yaml::Value` so non-string keys (`200:`) become strings.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
            Ok(serde_json::to_value(yaml)?)
        }
    }
}

fn expect_object(value: Value, file: &Path) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidDocument {
            file: file.to_path_buf(),
            expected: "a mapping",
        }),
    }
}

/// Loads domains from two kinds of sources:
/// - `roots`: directories where every `*.json|*.yaml|*.yml` file is one
///   domain named after its file stem, holding that domain's field schema.
/// - `includes`: files holding a mapping of domain name to field schema.
pub fn load_domains(roots: &[PathBuf], includes: &[PathBuf]) -> Result<Domains> {
    let mut domains = Domains::new();

    let mut files = Vec::new();
    for root in roots {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_document(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    if files.is_empty() && !roots.is_empty() {
        return Err(Error::NoFilesFound);
    }

    for path in files {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("Skipping {:?}: file name is not valid UTF-8", path);
            continue;
        };
        let fields = expect_object(read_document(&path)?, &path)?;
        log::debug!("Loaded domain '{}' from {:?}", name, path);
        domains.insert(name, FieldSchema::from_map(&fields));
    }

    for path in includes {
        let mapping = expect_object(read_document(path)?, path)?;
        for (name, fields) in mapping {
            let fields = expect_object(fields, path)?;
            log::debug!("Loaded domain '{}' from {:?}", name, path);
            domains.insert(name, FieldSchema::from_map(&fields));
        }
    }

    Ok(domains)
}

/// Loads custom route fragments. A file holds either one fragment or an
/// array of fragments; registration follows file order, then array order.
pub fn load_routes(files: &[PathBuf]) -> Result<CustomRoutes> {
    let mut routes = CustomRoutes::new();
    for path in files {
        match read_document(path)? {
            Value::Array(fragments) => {
                for fragment in fragments {
                    routes.add(expect_object(fragment, path)?);
                }
            }
            other => routes.add(expect_object(other, path)?),
        }
        log::debug!("Loaded custom routes from {:?}", path);
    }
    Ok(routes)
}

/// Loads envelope overrides from a single file.
pub fn load_options(path: &Path) -> Result<Map<String, Value>> {
    expect_object(read_document(path)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;
    use tempfile::tempdir;

    #[test]
    fn test_load_domain_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("widget.yaml"), "name:\n  type: string\ntags:\n  type: array\n  of: uuid\n").unwrap();
        std::fs::write(dir.path().join("gadget.json"), r#"{"price": {"type": "number"}}"#).unwrap();
        std::fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let domains = load_domains(&[dir.path().to_path_buf()], &[]).unwrap();
        assert_eq!(domains.names(), vec!["gadget", "widget"]);

        let (_, widget) = domains.iter().nth(1).unwrap();
        assert_eq!(
            widget.field_schema().get("tags"),
            Some(&FieldDescriptor::array_of("uuid"))
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let res = load_domains(&[dir.path().to_path_buf()], &[]);
        assert!(matches!(res, Err(Error::NoFilesFound)));
    }

    #[test]
    fn test_load_include_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("domains.yaml");
        std::fs::write(&file, "widget:\n  name:\n    type: string\nuser:\n  email:\n    type: email\n").unwrap();

        let domains = load_domains(&[], &[file]).unwrap();
        assert_eq!(domains.names(), vec!["widget", "user"]);
    }

    #[test]
    fn test_invalid_domain_document() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("widget.json"), "[1, 2]").unwrap();
        let res = load_domains(&[dir.path().to_path_buf()], &[]);
        assert!(matches!(res, Err(Error::InvalidDocument { .. })));
    }

    #[test]
    fn test_load_routes_object_and_array() {
        let dir = tempdir().unwrap();
        let single = dir.path().join("health.yaml");
        std::fs::write(&single, "/health:\n  get:\n    responses:\n      200:\n        description: ok\n").unwrap();
        let many = dir.path().join("auth.json");
        std::fs::write(&many, r#"[{"/login": {"post": {}}}, {"/logout": {"post": {}}}]"#).unwrap();

        let routes = load_routes(&[single, many]).unwrap();
        assert_eq!(routes.len(), 3);

        let mut paths = Map::new();
        routes.apply(&mut paths);
        assert_eq!(paths["/health"]["get"]["responses"]["200"]["description"], "ok");
        assert!(paths.contains_key("/logout"));
    }

    #[test]
    fn test_load_options() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("options.yaml");
        std::fs::write(&file, "basePath: /v2\nhost: api.example.com\n").unwrap();
        let options = load_options(&file).unwrap();
        assert_eq!(options["basePath"], "/v2");
        assert_eq!(options["host"], "api.example.com");
    }
}
