//! Tolerant lookups into nested JSON-like value trees.
//!
//! Unlike the strict navigation used for typed configuration, nothing in this
//! module fails: a path that cannot be followed resolves to "no value" and the
//! caller's default is used instead. An explicit `null` met along the way is
//! different from a missing value and is handed back as-is.


use serde_json::{Map, Value};

/// A dot-separated path into a value tree.
///
/// Built from a string (`"nested.foo"`, `"items.0.name"`) or from an integer,
/// which addresses a single sequence element. Negative integers never match a
/// sequence element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr(String);

impl PathExpr {
    /// Individual segments of the path, in walking order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The path as written
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PathExpr {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for PathExpr {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&String> for PathExpr {
    fn from(path: &String) -> Self {
        Self(path.clone())
    }
}

impl From<usize> for PathExpr {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl From<u32> for PathExpr {
    fn from(index: u32) -> Self {
        Self(index.to_string())
    }
}

impl From<i32> for PathExpr {
    fn from(index: i32) -> Self {
        Self(index.to_string())
    }
}

impl From<i64> for PathExpr {
    fn from(index: i64) -> Self {
        Self(index.to_string())
    }
}

/// What a node allows the walker to do next.
enum Node<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Scalar,
    Null,
}

impl<'a> Node<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(map),
            Value::Array(items) => Node::Sequence(items),
            Value::Null => Node::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Node::Scalar,
        }
    }
}

/// Steps into a mapping or sequence by one segment.
///
/// Returns `None` when the segment is absent or the node cannot be addressed.
fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match Node::of(current) {
        Node::Mapping(map) => map.get(segment),
        Node::Sequence(items) => items.get(segment.parse::<usize>().ok()?),
        Node::Scalar | Node::Null => None,
    }
}

/// Follows `path` from `container` without failing.
///
/// # Returns
/// * `None` if the container is absent or null, a key or index is missing, or
///   a scalar is reached while segments remain
/// * `Some(Value::Null)` if a null is reached after at least one step; the
///   remaining segments are ignored
/// * `Some(value)` for a fully resolved path
pub fn resolve<'a>(container: Option<&'a Value>, path: impl Into<PathExpr>) -> Option<&'a Value> {
    let path = path.into();
    let mut current = container.filter(|value| !value.is_null())?;

    for segment in path.segments() {
        if let Node::Null = Node::of(current) {
            return Some(current);
        }

        current = step(current, segment)?;
    }

    Some(current)
}

/// Reads the value at `path`, falling back to `default` when nothing is there.
///
/// An explicit `null` on the path is returned instead of the default.
///
/// # Examples
/// ```
/// use devaudio::path_ops::get;
/// use serde_json::json;
///
/// let config = json!({ "nested": { "foo": "bar" } });
/// let fallback = json!("none");
///
/// assert_eq!(get(Some(&config), "nested.foo", &fallback), &json!("bar"));
/// assert_eq!(get(Some(&config), "nested.baz", &fallback), &json!("none"));
/// ```
pub fn get<'a>(
    container: Option<&'a Value>,
    path: impl Into<PathExpr>,
    default: &'a Value,
) -> &'a Value {
    resolve(container, path).unwrap_or(default)
}

/// Copies the listed top-level keys of `container` into a new mapping.
///
/// An absent or null container is handed back unchanged. Keys that are not
/// present are left out. Sequences are addressed by index, scalars yield an
/// empty mapping.
pub fn pick(container: Option<&Value>, keys: &[&str]) -> Option<Value> {
    let source = container?;

    if source.is_null() {
        return Some(Value::Null);
    }

    let picked = keys
        .iter()
        .filter_map(|key| step(source, key).map(|value| (key.to_string(), value.clone())))
        .collect::<Map<String, Value>>();

    Some(Value::Object(picked))
}

/// Short name of a value's type, for messages
pub fn type_str(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks whether `value` is a string beginning with `prefix`.
///
/// Anything that is not a string, including null and mappings, is `false`.
pub fn starts_with(value: Option<&Value>, prefix: &str) -> bool {
    match value {
        Some(Value::String(text)) => text.starts_with(prefix),
        _ => false,
    }
}
