//! Parser for index inequality expressions.
//!
//! An expression is a comparison operator followed by a non-negative
//! integer, e.g. `">=3"` or `"!=0"`. Six operators are supported:
//! `==`, `!=`, `>`, `>=`, `<`, `<=`.

use winnow::ModalResult;
use winnow::ascii::digit1;
use winnow::combinator::alt;
use winnow::prelude::*;

/// A comparison operator in an index expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

/// A compiled index expression.
///
/// `Never` is the degraded form of a malformed expression string: it
/// matches no index, per the engine's leniency rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexExpr {
    Cmp { op: CmpOp, operand: u64 },
    Never,
}

impl IndexExpr {
    /// Compile an expression string. Anything unparseable (unknown
    /// operator, missing or non-numeric operand, trailing characters)
    /// yields `Never` rather than an error.
    pub fn compile(input: &str) -> Self {
        expression.parse(input).unwrap_or(IndexExpr::Never)
    }

    /// Does the given index satisfy this expression?
    pub fn matches(&self, index: usize) -> bool {
        match self {
            IndexExpr::Never => false,
            IndexExpr::Cmp { op, operand } => {
                let index = index as u64;
                match op {
                    CmpOp::Eq => index == *operand,
                    CmpOp::Ne => index != *operand,
                    CmpOp::Gt => index > *operand,
                    CmpOp::Ge => index >= *operand,
                    CmpOp::Lt => index < *operand,
                    CmpOp::Le => index <= *operand,
                }
            }
        }
    }
}

/// Parser for a full expression: operator then integer operand.
fn expression(input: &mut &str) -> ModalResult<IndexExpr> {
    let op = operator.parse_next(input)?;
    let operand = digit1.parse_to::<u64>().parse_next(input)?;
    Ok(IndexExpr::Cmp { op, operand })
}

/// Parser for the comparison operator. Two-character tokens are tried
/// first so `">="` is not read as `">"` followed by `"="`.
fn operator(input: &mut &str) -> ModalResult<CmpOp> {
    alt((
        "==".value(CmpOp::Eq),
        "!=".value(CmpOp::Ne),
        ">=".value(CmpOp::Ge),
        "<=".value(CmpOp::Le),
        ">".value(CmpOp::Gt),
        "<".value(CmpOp::Lt),
    ))
    .parse_next(input)
}
