use serde_json::{Map, Value};

/// Caller-supplied route fragments (path template -> verb map), kept in
/// registration order and applied on top of the generated paths.
#[derive(Debug, Clone, Default)]
pub struct CustomRoutes {
    routes: Vec<Map<String, Value>>,
}

impl CustomRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment. The fragment's shape is not checked.
    pub fn add(&mut self, route: Map<String, Value>) {
        self.routes.push(route);
    }

    pub fn with(mut self, route: Map<String, Value>) -> Self {
        self.add(route);
        self
    }

    pub fn extend(&mut self, other: CustomRoutes) {
        self.routes.extend(other.routes);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Folds every fragment into `paths`. A fragment path replaces the whole
    /// verb map already stored under that path; verbs are never merged.
    pub fn apply(&self, paths: &mut Map<String, Value>) {
        for route in &self.routes {
            for (path, verbs) in route {
                if paths.contains_key(path) {
                    log::warn!("Custom route replaces existing path '{}'", path);
                } else {
                    log::debug!("Adding custom route '{}'", path);
                }
                paths.insert(path.clone(), verbs.clone());
            }
        }
    }
}
