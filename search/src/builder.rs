use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::fields::SearchField;
use crate::types::{FieldValue, Ops, Scalar};

/// Compiles ordered `(field, value)` pairs into the backend filter grammar.
///
/// Field names must already be in the backend's wire format; entity modules
/// go through [`Criteria`] and their field enums for the mapping. Returns
/// `None` when no pair produced a clause, in which case the caller must
/// omit the `q` parameter rather than send an empty filter.
pub fn build_search_query<'a, I>(entries: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
{
    let mut clauses = Vec::new();
    for (field, value) in entries {
        push_clauses(&mut clauses, field, value);
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

fn push_clauses(out: &mut Vec<String>, field: &str, value: &FieldValue) {
    match value {
        FieldValue::Scalar(scalar) => {
            out.push(format!("{} eq {}", field, format_scalar(scalar)));
        }
        FieldValue::List(values) => {
            if let Some(clause) = or_group(field, values) {
                out.push(clause);
            }
        }
        FieldValue::Ops(ops) => push_op_clauses(out, field, ops),
    }
}

/// Operator emit order is fixed: eq, like, gte, lte, in.
fn push_op_clauses(out: &mut Vec<String>, field: &str, ops: &Ops) {
    if let Some(value) = &ops.eq {
        out.push(format!("{} eq {}", field, format_scalar(value)));
    }
    if let Some(pattern) = &ops.like {
        // The caller's pattern is passed through verbatim, wildcards
        // included; the compiler never invents wildcards.
        out.push(format!("{} like {}", field, quote(pattern)));
    }
    if let Some(value) = &ops.gte {
        out.push(format!("{} gte {}", field, format_scalar(value)));
    }
    if let Some(value) = &ops.lte {
        out.push(format!("{} lte {}", field, format_scalar(value)));
    }
    if let Some(values) = &ops.one_of {
        if let Some(clause) = or_group(field, values) {
            out.push(clause);
        }
    }
}

fn or_group(field: &str, values: &[Scalar]) -> Option<String> {
    match values {
        [] => None,
        [single] => Some(format!("{} eq {}", field, format_scalar(single))),
        _ => {
            let parts: Vec<String> = values
                .iter()
                .map(|value| format!("{} eq {}", field, format_scalar(value)))
                .collect();
            Some(format!("({})", parts.join(" or ")))
        }
    }
}

fn format_scalar(value: &Scalar) -> String {
    match value {
        Scalar::Str(s) => quote(s),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }
}

/// Single-quotes a string, doubling embedded quotes (OData convention).
fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

/// Insertion-ordered search criteria keyed by wire field name.
///
/// Setting a field that is already present replaces its value but keeps
/// its original position, so the compiled clause order only depends on
/// first insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    entries: IndexMap<String, FieldValue>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field through the typed [`SearchField`] seam.
    pub fn set(&mut self, field: impl SearchField, value: impl Into<FieldValue>) {
        self.set_raw(field.wire_name(), value);
    }

    /// Sets a field by raw wire name, for callers outside the generated
    /// field enums.
    pub fn set_raw(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(field.into(), value.into());
    }

    /// Sets a field only when a value is present; `None` contributes no
    /// clause and leaves the criteria untouched.
    pub fn set_opt(&mut self, field: impl SearchField, value: Option<impl Into<FieldValue>>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Compiles the criteria into a filter string, or `None` when no field
    /// produced a clause.
    pub fn to_query(&self) -> Option<String> {
        build_search_query(self.entries.iter().map(|(name, value)| (name.as_str(), value)))
    }
}

// Dynamic criteria come in as a plain JSON object; explicit nulls mean the
// field was left unset and are skipped rather than rejected.
impl<'de> Deserialize<'de> for Criteria {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Option<FieldValue>>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect();
        Ok(Self { entries })
    }
}
