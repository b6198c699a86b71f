//! Environment variable name <-> dotted configuration key codec

/// Default prefix selecting configuration variables from the environment.
pub const DEFAULT_PREFIX: &str = "STORM_";

/// Decode an environment variable name into a dotted configuration key.
///
/// Strips `prefix`, lowercases the remainder, and turns each double
/// underscore into a dot. A lone underscore is part of the segment name, not
/// a separator: `STORM_NIMBUS_SEEDS` decodes to `nimbus_seeds`, while
/// `STORM_SUPERVISOR__SLOTS__PORTS` decodes to `supervisor.slots.ports`.
///
/// Returns `None` for names outside the prefix or with nothing after it.
pub fn decode(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_lowercase().replace("__", "."))
}

/// Inverse of [`decode`]: the variable name a dotted key came from.
#[allow(dead_code)]
pub fn encode(path: &str, prefix: &str) -> String {
    format!("{}{}", prefix, path.replace('.', "__").to_uppercase())
}
