//! Ordered nested document tree with dotted-path access
//!
//! The document is a `serde_yaml::Mapping`, which keeps both the key lookup
//! and the insertion order of keys in sync, so load, mutate, and save all
//! preserve the order keys first appeared in.

use serde_yaml::{Mapping, Value};

/// Look up the value at a dotted path.
///
/// Walks segment by segment and returns `None` as soon as an intermediate
/// node is not a mapping containing the next segment. Never creates nodes.
pub fn get<'a>(doc: &'a Mapping, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut node = doc.get(segments.next()?)?;
    for segment in segments {
        node = node.as_mapping()?.get(segment)?;
    }
    Some(node)
}

/// Set the value at a dotted path, creating empty mappings at missing
/// intermediate segments.
///
/// A non-mapping intermediate is replaced by an empty mapping without a
/// separate check; only the merge engine's leaf-level conflict policy guards
/// existing values. New keys are appended at the end of their parent's order;
/// re-assigning an existing key keeps its original position.
pub fn set(doc: &mut Mapping, path: &str, value: Value) {
    let mut current = doc;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let key = Value::String(segment.to_string());
        if segments.peek().is_none() {
            current.insert(key, value);
            return;
        }
        let child = current.entry(key).or_insert_with(|| Value::Mapping(Mapping::new()));
        if !child.is_mapping() {
            *child = Value::Mapping(Mapping::new());
        }
        current = match child {
            Value::Mapping(map) => map,
            _ => unreachable!("intermediate was just made a mapping"),
        };
    }
}
