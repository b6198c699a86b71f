//! Merge engine: overlay environment overrides onto the document

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::document;
use crate::keypath;
use crate::value;

/// One override rejected by the conflict policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOverride {
    /// Dotted key the variable decoded to.
    pub path: String,
    /// Type tag of the existing value that blocked the override.
    pub existing: &'static str,
    /// Type tag of the rejected replacement value.
    pub rejected: &'static str,
}

/// Outcome of one merge run, returned to the caller for logging.
///
/// Rebuilt from scratch on every call; nothing carries over between runs.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Number of candidate variables found under the prefix.
    pub candidates: usize,
    /// Accepted dotted keys, sorted ascending.
    pub accepted: Vec<String>,
    /// Overrides rejected by the conflict policy, in application order.
    pub skipped: Vec<SkippedOverride>,
}

/// Overlay every prefixed environment variable onto `doc`.
///
/// Variables are applied in ascending name order so the result is
/// reproducible for identical environment contents. An existing list is never
/// replaced by a non-list and an existing mapping is never replaced by a
/// non-mapping; every other override wins, including a scalar replaced by a
/// list.
pub fn apply_overrides<I>(doc: &mut Mapping, vars: I, prefix: &str) -> MergeReport
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut selected: Vec<(String, String)> =
        vars.into_iter().filter(|(name, _)| name.starts_with(prefix)).collect();
    selected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut report = MergeReport::default();

    for (name, raw) in selected {
        // Names that are nothing but the prefix are not candidates.
        let Some(path) = keypath::decode(&name, prefix) else {
            continue;
        };
        report.candidates += 1;

        let parsed = value::parse_value(&raw);

        if let Some(existing) = document::get(doc, &path) {
            let clash = match existing {
                Value::Sequence(_) => !matches!(parsed, Value::Sequence(_)),
                Value::Mapping(_) => !matches!(parsed, Value::Mapping(_)),
                _ => false,
            };
            if clash {
                report.skipped.push(SkippedOverride {
                    path,
                    existing: value::type_name(existing),
                    rejected: value::type_name(&parsed),
                });
                continue;
            }
        }

        debug!(variable = %name, key = %path, "applying override");
        document::set(doc, &path, parsed);
        report.accepted.push(path);
    }

    report.accepted.sort();
    report
}
