#![allow(clippy::collapsible_if)]
pub mod config;
pub mod definitions;
pub mod document;
pub mod error;
pub mod loader;
pub mod paths;
pub mod routes;
pub mod schema;
pub mod writer;

use config::Config;
use error::Result;
use routes::CustomRoutes;
use schema::{Domains, SchemaSource};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Builds the document for `domains` and writes `swagger.json` and
/// `spec.js` into the directory `path`.
pub fn generate_docs(
    path: &Path,
    domains: &Domains,
    routes: &CustomRoutes,
    options: &Map<String, Value>,
) -> Result<Value> {
    let document = document::build_document(domains, routes, options);
    writer::write_docs(path, &document)?;
    Ok(document)
}

/// Main entry point for generating swagger documents from files and
/// in-memory registrations.
#[derive(Default)]
pub struct Generator {
    inputs: Vec<PathBuf>,
    includes: Vec<PathBuf>,
    route_files: Vec<PathBuf>,
    options_file: Option<PathBuf>,
    domains: Domains,
    routes: CustomRoutes,
    options: Map<String, Value>,
    output_path: Option<PathBuf>,
}

impl Generator {
    /// Creates a new Generator instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the generator from a Config object.
    pub fn with_config(mut self, config: Config) -> Self {
        if let Some(inputs) = config.input {
            self.inputs.extend(inputs);
        }
        if let Some(includes) = config.include {
            self.includes.extend(includes);
        }
        if let Some(routes) = config.routes {
            self.route_files.extend(routes);
        }
        if let Some(options) = config.options {
            self.options_file = Some(options);
        }
        if let Some(host) = config.host {
            self.options.insert("host".to_string(), Value::String(host));
        }
        if let Some(base_path) = config.base_path {
            self.options
                .insert("basePath".to_string(), Value::String(base_path));
        }
        if let Some(output) = config.output {
            self.output_path = Some(output);
        }
        self
    }

    /// Adds a directory of per-domain descriptor files.
    pub fn input<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Adds a file mapping domain names to field schemas.
    pub fn include<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Adds a custom route file.
    pub fn route_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.route_files.push(path.into());
        self
    }

    /// Sets the envelope options file.
    pub fn options_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options_file = Some(path.into());
        self
    }

    /// Registers a domain in memory.
    pub fn domain(mut self, name: impl Into<String>, source: impl SchemaSource + 'static) -> Self {
        self.domains.insert(name, source);
        self
    }

    /// Registers a custom route fragment in memory.
    pub fn custom_route(mut self, route: Map<String, Value>) -> Self {
        self.routes.add(route);
        self
    }

    /// Sets a single envelope override. Wins over the options file.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Sets the output directory.
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Loads every source and assembles the document without writing it.
    pub fn build(self) -> Result<Value> {
        let sources = self.load()?;
        Ok(document::build_document(
            &sources.domains,
            &sources.routes,
            &sources.options,
        ))
    }

    /// Executes the generation process.
    pub fn generate(self) -> Result<Value> {
        let output = self
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let sources = self.load()?;

        log::info!("Generating docs for {} domains", sources.domains.len());
        generate_docs(&output, &sources.domains, &sources.routes, &sources.options)
    }

    /// File sources first, in-memory registrations on top.
    fn load(self) -> Result<Sources> {
        let mut domains = Domains::new();
        if !self.inputs.is_empty() || !self.includes.is_empty() {
            log::info!(
                "Loading domains from directories: {:?} and includes: {:?}",
                self.inputs,
                self.includes
            );
            domains = loader::load_domains(&self.inputs, &self.includes)?;
        }
        domains.extend(self.domains);

        let mut routes = loader::load_routes(&self.route_files)?;
        routes.extend(self.routes);

        let mut options = match &self.options_file {
            Some(path) => loader::load_options(path)?,
            None => Map::new(),
        };
        for (key, value) in self.options {
            options.insert(key, value);
        }

        Ok(Sources {
            domains,
            routes,
            options,
        })
    }
}

struct Sources {
    domains: Domains,
    routes: CustomRoutes,
    options: Map<String, Value>,
}
