//! Examination tri-state filtering.
//!
//! Each selected label resolves to a set of examination code prefixes. The
//! catalog stores codes such as `TEN1` or `LAB2`, so `TEN` matches both
//! `TEN1` and `TENA`. The check runs in memory because stores only see
//! the compiled [`catalog::StorePredicate`].

use std::collections::BTreeMap;

use catalog::normalizer::fold_case;
use catalog::Course;
use serde_json::Value;
use tracing::warn;

use super::ResidualFilter;

/// Label -> code prefixes.
pub const EXAMINATION_CODES: &[(&str, &[&str])] = &[
    ("Skriftlig tentamen", &["TEN", "TENA"]),
    ("Laborationsarbete", &["LAB", "LABA"]),
    ("Muntlig examination", &["MUN"]),
    ("Projektarbete", &["PRA", "PROJ"]),
    ("Inlämningsuppgift", &["UPG", "UPPG"]),
    ("Kontrollskrivning", &["KTR"]),
    ("Datortentamen", &["DAT"]),
    ("Hemtentamen", &["HEM"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Unchecked,
    /// Must include.
    Checked,
    /// Must exclude.
    Indeterminate,
}

impl TriState {
    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Null | Value::Bool(false) => Some(TriState::Unchecked),
            Value::Bool(true) => Some(TriState::Checked),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "unchecked" | "" => Some(TriState::Unchecked),
                "checked" => Some(TriState::Checked),
                "indeterminate" => Some(TriState::Indeterminate),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Raw examination selection keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamSelection(pub BTreeMap<String, TriState>);

impl ExamSelection {
    /// Malformed input is logged and yields an empty selection.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        let obj = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(obj)) => obj,
            Ok(other) => {
                warn!(kind = %json_kind(&other), "examinations filter is not an object, ignoring");
                return Self::default();
            }
            Err(err) => {
                warn!(error = %err, "malformed examinations filter, ignoring");
                return Self::default();
            }
        };

        let mut out = BTreeMap::new();
        for (label, state) in obj {
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            match TriState::from_value(&state) {
                Some(s) => {
                    out.insert(label.to_string(), s);
                }
                None => warn!(%label, value = %state, "unknown examination state, ignoring"),
            }
        }
        Self(out)
    }

    pub fn compile(&self) -> ExamFilter {
        let mut filter = ExamFilter::default();
        for (label, state) in &self.0 {
            let target = match state {
                TriState::Unchecked => continue,
                TriState::Checked => &mut filter.include,
                TriState::Indeterminate => &mut filter.exclude,
            };
            target.extend(resolve_label(label));
        }
        filter
    }
}

/// Code prefixes for `label`. Unknown labels pass through as their own code.
pub fn resolve_label(label: &str) -> Vec<String> {
    let folded = fold_case(label);
    EXAMINATION_CODES
        .iter()
        .find(|(known, _)| fold_case(known) == folded)
        .map(|(_, codes)| codes.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| vec![label.to_ascii_uppercase()])
}

/// Compiled tri-state examination predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl ExamFilter {
    fn any_code_matches(course: &Course, prefixes: &[String]) -> bool {
        course.examination.iter().any(|e| {
            let code = e.code.trim().to_ascii_uppercase();
            prefixes.iter().any(|p| code.starts_with(p.as_str()))
        })
    }
}

impl ResidualFilter for ExamFilter {
    fn keep(&self, course: &Course) -> bool {
        if Self::any_code_matches(course, &self.exclude) {
            return false;
        }
        self.include.is_empty() || Self::any_code_matches(course, &self.include)
    }

    fn is_open(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
