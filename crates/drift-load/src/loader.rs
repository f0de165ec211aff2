use std::fs;
use std::path::Path;

use drift_types::{Mapping, Node, Scalar};
use serde_yaml::Value;
use tracing::debug;

use crate::error::LoadError;

/// Load a snapshot from a YAML file.
///
/// The top-level value must be a mapping; anything else, including an empty
/// document, is a [`LoadError::NotAMapping`].
pub fn load_document(path: &Path) -> Result<Mapping, LoadError> {
    let text = fs::read_to_string(path)?;
    let doc = parse_document(&text)?;
    debug!(path = %path.display(), keys = doc.len(), "loaded document");
    Ok(doc)
}

/// Parse a snapshot from YAML text already in memory.
pub fn parse_document(text: &str) -> Result<Mapping, LoadError> {
    let value: Value = serde_yaml::from_str(text)?;
    match convert(value)? {
        Node::Mapping(map) => Ok(map),
        other => Err(LoadError::NotAMapping(other.kind())),
    }
}

fn convert(value: Value) -> Result<Node, LoadError> {
    Ok(match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(convert_number(&n)),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(entries) => {
            let mut map = Mapping::with_capacity(entries.len());
            for (key, val) in entries {
                let Value::String(key) = key else {
                    return Err(LoadError::NonStringKey(format!("{key:?}")));
                };
                map.insert(key, convert(val)?);
            }
            Node::Mapping(map)
        }
        // Tags carry no meaning for comparison; keep the underlying value.
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

fn convert_number(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        // u64 beyond i64::MAX, or a float.
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
