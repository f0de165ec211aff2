//! Mapping and sequence comparison.
//!
//! Mappings are compared key by key, recursing into nested mappings.
//! Sequences are treated as keyed collections of records: every element must
//! be a non-empty mapping, and the value of its first key identifies it when
//! matching elements across the two sides. Callers must ensure that first
//! key is a stable unique identifier (a `name` field declared first, say)
//! for the matching to be meaningful.

use drift_types::{Mapping, Node};
use indexmap::IndexMap;

use crate::error::{DiffError, DiffOutcome};
use crate::result::{DocumentDiff, Modification};

/// Compare two mappings, qualifying every reported path with `prefix`.
///
/// Pass an empty prefix at the document root. Keys present on only one side
/// become additions or removals. Keys present on both sides are compared
/// recursively when both values are mappings, as keyed records when both are
/// sequences, and by plain equality otherwise. Mismatched kinds (a mapping
/// on one side, a sequence or scalar on the other) are never recursed; they
/// are compared verbatim and reported as a modification when unequal.
pub fn diff_mappings(left: &Mapping, right: &Mapping, prefix: &str) -> DiffOutcome<DocumentDiff> {
    let mut diff = DocumentDiff::new();

    for (key, left_value) in left {
        let path = join(prefix, key);
        match right.get(key) {
            None => {
                diff.removed.insert(path, left_value.clone());
            }
            Some(right_value) => match (left_value, right_value) {
                (Node::Mapping(l), Node::Mapping(r)) => {
                    diff.merge(diff_mappings(l, r, &path)?);
                }
                (Node::Sequence(l), Node::Sequence(r)) => {
                    diff.merge(diff_sequences(l, r, &path)?);
                }
                (l, r) => {
                    if l != r {
                        diff.modified.insert(
                            path,
                            Modification {
                                old: l.clone(),
                                new: r.clone(),
                            },
                        );
                    }
                }
            },
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            diff.added.insert(join(prefix, key), right_value.clone());
        }
    }

    Ok(diff)
}

/// Compare two sequences of keyed records, qualifying paths with `prefix`.
///
/// Each element's identity is the value of its first key; elements with the
/// same identity on both sides are compared as mappings under the path
/// `prefix[identity]`, the rest become additions or removals. Shape
/// violations (a non-mapping element, a mapping with no keys, a container as
/// the identity value) fail the whole comparison with a [`DiffError`].
pub fn diff_sequences(left: &[Node], right: &[Node], prefix: &str) -> DiffOutcome<DocumentDiff> {
    let left_records = index_by_identity(left, prefix)?;
    let right_records = index_by_identity(right, prefix)?;

    let mut diff = DocumentDiff::new();

    for (identity, &left_node) in &left_records {
        let path = format!("{prefix}[{identity}]");
        match right_records.get(identity) {
            None => {
                diff.removed.insert(path, left_node.clone());
            }
            Some(&right_node) => match (left_node, right_node) {
                (Node::Mapping(l), Node::Mapping(r)) => {
                    diff.merge(diff_mappings(l, r, &path)?);
                }
                // index_by_identity only admits mappings, so this arm sees
                // nothing today; kept as the plain-equality fallback.
                (l, r) => {
                    if l != r {
                        diff.modified.insert(
                            path,
                            Modification {
                                old: l.clone(),
                                new: r.clone(),
                            },
                        );
                    }
                }
            },
        }
    }

    for (identity, &right_node) in &right_records {
        if !left_records.contains_key(identity) {
            let path = format!("{prefix}[{identity}]");
            diff.added.insert(path, right_node.clone());
        }
    }

    Ok(diff)
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Index sequence elements by the rendered value of their first key.
///
/// A later element with the same identity replaces an earlier one.
fn index_by_identity<'a>(
    elements: &'a [Node],
    prefix: &str,
) -> DiffOutcome<IndexMap<String, &'a Node>> {
    let mut records = IndexMap::with_capacity(elements.len());

    for element in elements {
        let Node::Mapping(fields) = element else {
            return Err(DiffError::NotARecord {
                path: prefix.to_string(),
                kind: element.kind(),
            });
        };
        let Some((_, identity)) = fields.first() else {
            return Err(DiffError::UnkeyedRecord {
                path: prefix.to_string(),
            });
        };
        let Node::Scalar(identity) = identity else {
            return Err(DiffError::CompositeIdentity {
                path: prefix.to_string(),
            });
        };
        records.insert(identity.to_string(), element);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_types::Scalar;

    fn mapping(pairs: &[(&str, Node)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn container(name: &str, image: &str) -> Node {
        Node::Mapping(mapping(&[("name", name.into()), ("image", image.into())]))
    }

    #[test]
    fn identical_documents_produce_no_diff() {
        let doc = mapping(&[
            ("version", 2.into()),
            (
                "spec",
                Node::Mapping(mapping(&[("replicas", 3.into()), ("paused", false.into())])),
            ),
            (
                "containers",
                Node::Sequence(vec![container("web", "nginx:1.25"), container("sidecar", "envoy")]),
            ),
        ]);

        let diff = diff_mappings(&doc, &doc, "").unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn top_level_keys_use_bare_paths() {
        let left = mapping(&[("kept", 1.into()), ("dropped", 2.into())]);
        let right = mapping(&[("kept", 1.into()), ("introduced", 3.into())]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.removed.get("dropped"), Some(&Node::from(2)));
        assert_eq!(diff.added.get("introduced"), Some(&Node::from(3)));
        assert!(diff.modified.is_empty());
    }

    #[test]
    fn nested_keys_get_dotted_paths() {
        let left = mapping(&[(
            "server",
            Node::Mapping(mapping(&[("port", 80.into()), ("host", "a".into())])),
        )]);
        let right = mapping(&[(
            "server",
            Node::Mapping(mapping(&[("port", 443.into()), ("host", "a".into())])),
        )]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.len(), 1);
        let change = &diff.modified["server.port"];
        assert_eq!(change.old, Node::from(80));
        assert_eq!(change.new, Node::from(443));
    }

    #[test]
    fn equal_scalars_appear_nowhere() {
        let doc = mapping(&[("a", "same".into())]);
        let diff = diff_mappings(&doc, &doc.clone(), "").unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn mismatched_kinds_compared_verbatim_not_recursed() {
        let left = mapping(&[(
            "env",
            Node::Mapping(mapping(&[("name", "PATH".into())])),
        )]);
        let right = mapping(&[("env", Node::Sequence(vec![container("PATH", "x")]))]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        // One entry at `env` itself, no descent into either side.
        assert_eq!(diff.len(), 1);
        assert!(diff.modified.contains_key("env"));
    }

    #[test]
    fn mapping_vs_scalar_is_modified() {
        let left = mapping(&[("limits", Node::Mapping(mapping(&[("cpu", "1".into())])))]);
        let right = mapping(&[("limits", "unlimited".into())]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.modifications(), 1);
        assert!(diff.modified.contains_key("limits"));
    }

    #[test]
    fn int_and_float_are_not_coerced() {
        let left = mapping(&[("timeout", 1.into())]);
        let right = mapping(&[("timeout", 1.0.into())]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.modifications(), 1);
    }

    #[test]
    fn keyed_sequence_field_modification() {
        let left = mapping(&[(
            "containers",
            Node::Sequence(vec![container("container1", "image1")]),
        )]);
        let right = mapping(&[(
            "containers",
            Node::Sequence(vec![container("container1", "image1_updated")]),
        )]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.len(), 1);
        let change = &diff.modified["containers[container1].image"];
        assert_eq!(change.old, Node::from("image1"));
        assert_eq!(change.new, Node::from("image1_updated"));
    }

    #[test]
    fn keyed_sequence_add_and_remove() {
        let left = mapping(&[(
            "containers",
            Node::Sequence(vec![
                container("container1", "image1"),
                container("container2", "image2"),
            ]),
        )]);
        let right = mapping(&[(
            "containers",
            Node::Sequence(vec![
                container("container1", "image1"),
                container("container3", "image3"),
            ]),
        )]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(
            diff.added.get("containers[container3]"),
            Some(&container("container3", "image3"))
        );
        assert_eq!(
            diff.removed.get("containers[container2]"),
            Some(&container("container2", "image2"))
        );
        assert!(diff.modified.is_empty());
    }

    #[test]
    fn sequence_elements_match_by_identity_not_position() {
        let left = mapping(&[(
            "containers",
            Node::Sequence(vec![container("a", "x"), container("b", "y")]),
        )]);
        let right = mapping(&[(
            "containers",
            Node::Sequence(vec![container("b", "y"), container("a", "x")]),
        )]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn numeric_identity_renders_into_path() {
        let port = |number: i64, protocol: &str| {
            Node::Mapping(mapping(&[
                ("port", number.into()),
                ("protocol", protocol.into()),
            ]))
        };
        let left = vec![port(8080, "tcp")];
        let right = vec![port(8080, "udp")];

        let diff = diff_sequences(&left, &right, "ports").unwrap();
        assert!(diff.modified.contains_key("ports[8080].protocol"));
    }

    #[test]
    fn duplicate_identity_last_element_wins() {
        let left = vec![container("dup", "first"), container("dup", "second")];
        let right = vec![container("dup", "second")];

        let diff = diff_sequences(&left, &right, "items").unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn whole_sequence_added_as_one_entry() {
        let left = mapping(&[("name", "app".into())]);
        let right = mapping(&[
            ("name", "app".into()),
            ("volumes", Node::Sequence(vec![container("data", "pvc")])),
        ]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.len(), 1);
        assert!(diff.added.contains_key("volumes"));
    }

    #[test]
    fn deep_paths_accumulate_through_sequences() {
        let resources = |cpu: &str| {
            Node::Mapping(mapping(&[(
                "resources",
                Node::Mapping(mapping(&[(
                    "limits",
                    Node::Mapping(mapping(&[("cpu", cpu.into())])),
                )])),
            )]))
        };
        let pod = |cpu: &str| {
            Node::Mapping(mapping(&[(
                "template",
                Node::Mapping(mapping(&[(
                    "containers",
                    Node::Sequence(vec![Node::Mapping(mapping(&[
                        ("name", "web".into()),
                        ("spec", resources(cpu)),
                    ]))]),
                )])),
            )]))
        };

        let left = mapping(&[("deployment", pod("500m"))]);
        let right = mapping(&[("deployment", pod("750m"))]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        assert_eq!(diff.len(), 1);
        assert!(diff
            .modified
            .contains_key("deployment.template.containers[web].spec.resources.limits.cpu"));
    }

    #[test]
    fn empty_record_is_fatal() {
        let left = vec![Node::Mapping(Mapping::new())];
        let right = vec![container("a", "x")];

        let err = diff_sequences(&left, &right, "containers").unwrap_err();
        assert_eq!(
            err,
            DiffError::UnkeyedRecord {
                path: "containers".into()
            }
        );
    }

    #[test]
    fn non_mapping_element_is_fatal() {
        let left = vec![container("a", "x")];
        let right = vec![Node::from("bare string")];

        let err = diff_sequences(&left, &right, "containers").unwrap_err();
        assert_eq!(
            err,
            DiffError::NotARecord {
                path: "containers".into(),
                kind: "scalar"
            }
        );
    }

    #[test]
    fn composite_identity_is_fatal() {
        let element = Node::Mapping(mapping(&[(
            "selector",
            Node::Mapping(mapping(&[("app", "web".into())])),
        )]));

        let err = diff_sequences(&[element], &[], "rules").unwrap_err();
        assert_eq!(
            err,
            DiffError::CompositeIdentity {
                path: "rules".into()
            }
        );
    }

    #[test]
    fn shape_violation_propagates_from_nested_sequence() {
        let left = mapping(&[(
            "spec",
            Node::Mapping(mapping(&[(
                "containers",
                Node::Sequence(vec![Node::from(42)]),
            )])),
        )]);

        let err = diff_mappings(&left, &left.clone(), "").unwrap_err();
        assert_eq!(
            err,
            DiffError::NotARecord {
                path: "spec.containers".into(),
                kind: "scalar"
            }
        );
    }

    #[test]
    fn null_leaves_compare_by_equality() {
        let left = mapping(&[("owner", Scalar::Null.into())]);
        let right = mapping(&[("owner", "team-a".into())]);

        let diff = diff_mappings(&left, &right, "").unwrap();
        let change = &diff.modified["owner"];
        assert_eq!(change.old, Node::Scalar(Scalar::Null));
        assert_eq!(change.new, Node::from("team-a"));
    }
}
