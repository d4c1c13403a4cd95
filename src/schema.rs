use serde_json::{Map, Value};
use std::fmt;

/// Semantic type token of a domain field (`"number"`, `"uuid"`, `"array"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    Number,
    Uuid,
    Email,
    Array,
    /// Any token without special handling, passed through as-is.
    Other(String),
}

impl TypeToken {
    pub fn as_str(&self) -> &str {
        match self {
            TypeToken::Number => "number",
            TypeToken::Uuid => "uuid",
            TypeToken::Email => "email",
            TypeToken::Array => "array",
            TypeToken::Other(token) => token,
        }
    }
}

impl From<&str> for TypeToken {
    fn from(token: &str) -> Self {
        match token {
            "number" => TypeToken::Number,
            "uuid" => TypeToken::Uuid,
            "email" => TypeToken::Email,
            "array" => TypeToken::Array,
            other => TypeToken::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field of a domain schema.
///
/// `kind` is `None` when the source descriptor carried no usable `type`;
/// such fields still show up in the definition, as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: Option<TypeToken>,
    /// Element type, only meaningful when `kind` is `Array`.
    pub of: Option<TypeToken>,
}

impl FieldDescriptor {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: Some(TypeToken::from(kind)),
            of: None,
        }
    }

    pub fn array_of(element: &str) -> Self {
        Self {
            kind: Some(TypeToken::Array),
            of: Some(TypeToken::from(element)),
        }
    }

    pub fn untyped() -> Self {
        Self::default()
    }

    /// Reads a descriptor out of a loosely shaped JSON value. Only string
    /// `type` and `of` members are picked up; everything else is ignored.
    pub fn from_value(value: &Value) -> Self {
        let token = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(TypeToken::from)
        };
        Self {
            kind: token("type"),
            of: token("of"),
        }
    }
}

/// Ordered mapping of field name to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<(String, FieldDescriptor)>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Inserts a field. Re-inserting a name replaces the descriptor in place.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = descriptor,
            None => self.fields.push((name, descriptor)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        map.iter()
            .map(|(name, value)| (name.clone(), FieldDescriptor::from_value(value)))
            .collect()
    }
}

impl FromIterator<(String, FieldDescriptor)> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = (String, FieldDescriptor)>>(iter: I) -> Self {
        let mut schema = FieldSchema::new();
        for (name, descriptor) in iter {
            schema.insert(name, descriptor);
        }
        schema
    }
}

/// Anything that can hand out the field schema of a domain.
pub trait SchemaSource {
    fn field_schema(&self) -> FieldSchema;
}

impl SchemaSource for FieldSchema {
    fn field_schema(&self) -> FieldSchema {
        self.clone()
    }
}

impl<F> SchemaSource for F
where
    F: Fn() -> FieldSchema,
{
    fn field_schema(&self) -> FieldSchema {
        self()
    }
}

/// Domain name -> schema source, in registration order.
#[derive(Default)]
pub struct Domains {
    entries: Vec<(String, Box<dyn SchemaSource>)>,
}

impl Domains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a domain. Registering an existing name swaps its source
    /// but keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, source: impl SchemaSource + 'static) {
        self.put(name.into(), Box::new(source));
    }

    fn put(&mut self, name: String, source: Box<dyn SchemaSource>) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = source,
            None => self.entries.push((name, source)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, source: impl SchemaSource + 'static) -> Self {
        self.insert(name, source);
        self
    }

    /// Moves every entry of `other` into `self`, with `insert` semantics.
    pub fn extend(&mut self, other: Domains) {
        for (name, source) in other.entries {
            self.put(name, source);
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn SchemaSource)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Domains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Domains")
            .field("names", &self.names())
            .finish()
    }
}

/// Uppercases the first character and leaves the rest untouched
/// (`"orderItem"` -> `"OrderItem"`).
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
