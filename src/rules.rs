//! Operation and rule parameter trees.
//!
//! Callers describe cleaning steps as JSON; deserialization turns that tree
//! into closed enums so the engine can dispatch and combine rules with
//! exhaustive matches instead of probing for field presence.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::value::Cell;

/// One cleaning step, dispatched by its `operation` name.
///
/// An unrecognized name fails deserialization with a descriptive error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", content = "param")]
pub enum Operation {
    /// Drop every row matching at least one rule.
    #[serde(rename = "ignoreRowIf")]
    IgnoreRowIf(Vec<Rule>),
    /// Drop every column matching at least one rule.
    #[serde(rename = "ignoreColIf")]
    IgnoreColIf(Vec<Rule>),
    /// Pattern-replace cell text within row/column scopes.
    #[serde(rename = "replace")]
    Replace(Vec<ReplaceRule>),
    /// Convert text cells to numbers, booleans, or dates within a scope.
    #[serde(rename = "interpretStr")]
    InterpretStr(Interpret),
    /// Swap rows and columns.
    #[serde(rename = "transpose")]
    Transpose,
}

impl Operation {
    /// The wire name of this operation, for error context.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::IgnoreRowIf(_) => "ignoreRowIf",
            Operation::IgnoreColIf(_) => "ignoreColIf",
            Operation::Replace(_) => "replace",
            Operation::InterpretStr(_) => "interpretStr",
            Operation::Transpose => "transpose",
        }
    }
}

/// One match clause in an `ignoreRowIf`/`ignoreColIf` rule list.
///
/// A top-level rule list combines with OR (any match removes the line);
/// an `allOf` group combines its members with AND.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    /// Nested group whose members must all match.
    AllOf {
        #[serde(rename = "allOf")]
        rules: Vec<Rule>,
    },
    /// Match lines by their own index: a literal, a list, or an
    /// inequality expression string such as `">=3"`.
    Index { index: IndexSpec },
    /// Match lines containing `val` at the selected positions.
    /// Row rules select with `col`, column rules with `row`; an absent
    /// selector means "any position".
    Value {
        #[serde(default)]
        col: Option<ScopeSpec>,
        #[serde(default)]
        row: Option<ScopeSpec>,
        val: Cell,
    },
}

/// The `index` field of an index rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IndexSpec {
    One(usize),
    Many(Vec<usize>),
    /// An inequality expression like `"<5"` or `"!=2"`. Malformed
    /// expressions never match; they are not an error.
    Expr(String),
}

/// A raw row/column scope: a single index, an index list, or the literal
/// string `"any"`. Normalized into a `Selector` before matching.
#[derive(Debug, Clone)]
pub enum ScopeSpec {
    Any,
    One(usize),
    Many(Vec<usize>),
}

impl<'de> Deserialize<'de> for ScopeSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScopeVisitor;

        impl<'de> Visitor<'de> for ScopeVisitor {
            type Value = ScopeSpec;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an index, a list of indices, or the string \"any\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ScopeSpec, E> {
                Ok(ScopeSpec::One(v as usize))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ScopeSpec, E> {
                usize::try_from(v)
                    .map(ScopeSpec::One)
                    .map_err(|_| E::custom(format!("negative index {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScopeSpec, E> {
                if v == "any" {
                    Ok(ScopeSpec::Any)
                } else {
                    Err(E::custom(format!(
                        "expected \"any\", got \"{}\"",
                        v
                    )))
                }
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ScopeSpec, A::Error> {
                let mut indices = Vec::new();
                while let Some(idx) = seq.next_element::<usize>()? {
                    indices.push(idx);
                }
                Ok(ScopeSpec::Many(indices))
            }
        }

        deserializer.deserialize_any(ScopeVisitor)
    }
}

/// Parameters for one `replace` rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRule {
    /// Pattern to look for in text cells. Compiled as a regex; a pattern
    /// that fails to compile matches nothing.
    pub orig: String,
    /// Replacement text.
    pub new: String,
    #[serde(default)]
    pub row: Option<ScopeSpec>,
    #[serde(default)]
    pub col: Option<ScopeSpec>,
}

/// Parameters for the `interpretStr` operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Interpret {
    /// Parse text cells as floating-point numbers.
    pub numbers: bool,
    /// Map two exact strings to `true`/`false`.
    pub bools: Option<BoolSpec>,
    /// Parse text cells as dates with this chrono format string,
    /// e.g. `"%Y-%m-%d"`.
    pub dates: Option<String>,
    pub row: Option<ScopeSpec>,
    pub col: Option<ScopeSpec>,
}

/// The string spellings of `true` and `false` for boolean interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct BoolSpec {
    #[serde(rename = "trueVal")]
    pub true_val: String,
    #[serde(rename = "falseVal")]
    pub false_val: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_with_rule_list() {
        let op: Operation = serde_json::from_str(
            r#"{"operation": "ignoreRowIf", "param": [{"col": 0, "val": "A"}, {"index": [1, 2]}]}"#,
        )
        .unwrap();

        match op {
            Operation::IgnoreRowIf(rules) => {
                assert_eq!(rules.len(), 2);
                assert!(matches!(rules[0], Rule::Value { .. }));
                assert!(matches!(rules[1], Rule::Index { .. }));
            }
            other => panic!("expected ignoreRowIf, got {:?}", other),
        }
    }

    #[test]
    fn transpose_takes_no_param() {
        let op: Operation = serde_json::from_str(r#"{"operation": "transpose"}"#).unwrap();
        assert!(matches!(op, Operation::Transpose));
        assert_eq!(op.name(), "transpose");
    }

    #[test]
    fn unknown_operation_is_an_error() {
        let result: Result<Operation, _> =
            serde_json::from_str(r#"{"operation": "frobnicate", "param": []}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("frobnicate"), "got: {}", message);
    }

    #[test]
    fn all_of_rule_nests() {
        let rule: Rule = serde_json::from_str(
            r#"{"allOf": [{"col": 0, "val": "x"}, {"allOf": [{"index": ">=3"}]}]}"#,
        )
        .unwrap();

        match rule {
            Rule::AllOf { rules } => {
                assert_eq!(rules.len(), 2);
                assert!(matches!(rules[1], Rule::AllOf { .. }));
            }
            other => panic!("expected allOf, got {:?}", other),
        }
    }

    #[test]
    fn index_spec_forms() {
        let one: Rule = serde_json::from_str(r#"{"index": 3}"#).unwrap();
        let many: Rule = serde_json::from_str(r#"{"index": [0, 4]}"#).unwrap();
        let expr: Rule = serde_json::from_str(r#"{"index": "!=2"}"#).unwrap();

        assert!(matches!(one, Rule::Index { index: IndexSpec::One(3) }));
        assert!(matches!(many, Rule::Index { index: IndexSpec::Many(_) }));
        assert!(matches!(expr, Rule::Index { index: IndexSpec::Expr(_) }));
    }

    #[test]
    fn value_rule_scopes() {
        let rule: Rule = serde_json::from_str(r#"{"col": "any", "val": 7}"#).unwrap();
        match rule {
            Rule::Value { col, row, val } => {
                assert!(matches!(col, Some(ScopeSpec::Any)));
                assert!(row.is_none());
                assert_eq!(val, Cell::Number(7.0));
            }
            other => panic!("expected value rule, got {:?}", other),
        }
    }

    #[test]
    fn scope_spec_rejects_other_strings() {
        let result: Result<ScopeSpec, _> = serde_json::from_str(r#""some""#);
        assert!(result.is_err());
    }

    #[test]
    fn interpret_params() {
        let interpret: Interpret = serde_json::from_str(
            r#"{"numbers": true, "bools": {"trueVal": "yes", "falseVal": "no"}, "dates": "%d.%m.%Y", "row": 1}"#,
        )
        .unwrap();

        assert!(interpret.numbers);
        assert_eq!(interpret.bools.as_ref().unwrap().true_val, "yes");
        assert_eq!(interpret.dates.as_deref(), Some("%d.%m.%Y"));
        assert!(matches!(interpret.row, Some(ScopeSpec::One(1))));
        assert!(interpret.col.is_none());
    }

    #[test]
    fn replace_rule_fields() {
        let rule: ReplaceRule =
            serde_json::from_str(r#"{"orig": "N/A", "new": "", "col": [0, 2]}"#).unwrap();
        assert_eq!(rule.orig, "N/A");
        assert_eq!(rule.new, "");
        assert!(matches!(rule.col, Some(ScopeSpec::Many(_))));
        assert!(rule.row.is_none());
    }
}
