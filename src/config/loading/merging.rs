use serde_yaml::{Mapping, Value};

/// Folds documents left to right, later documents taking precedence
pub fn merge_documents(documents: impl IntoIterator<Item = Mapping>) -> Mapping {
    documents
        .into_iter()
        .fold(Mapping::new(), |mut accumulated, document| {
            merge(&mut accumulated, document);
            accumulated
        })
}

/// Deep merges `overlay` into `base` and returns `base`
///
/// Nested mappings present on both sides are merged key by key. Any other
/// overlay value (scalar, sequence, or a mapping replacing a scalar)
/// replaces the base value outright. Sequences are never concatenated.
pub fn merge(base: &mut Mapping, overlay: Mapping) -> &mut Mapping {
    for (key, overlay_value) in overlay {
        match overlay_value {
            Value::Mapping(overlay_table) => match base.get_mut(&key) {
                Some(Value::Mapping(base_table)) => {
                    merge(base_table, overlay_table);
                }
                _ => {
                    base.insert(key, Value::Mapping(overlay_table));
                }
            },
            overlay_value => {
                base.insert(key, overlay_value);
            }
        }
    }

    base
}

/// Value-level form of [`merge`]
///
/// Two mappings merge recursively; otherwise the overlay wins.
pub fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_table), Value::Mapping(overlay_table)) => {
            merge(&mut base_table, overlay_table);
            Value::Mapping(base_table)
        }
        (_, overlay) => overlay,
    }
}
