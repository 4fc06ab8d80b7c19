//! Type interpretation of text cells.

use chrono::NaiveDate;

use crate::rules::Interpret;
use crate::selector::Selector;
use crate::value::{Cell, Table};

/// Convert text cells within the scope into numbers, booleans, or dates.
///
/// Interpretations are tried in that order and the first success wins;
/// a cell no interpretation accepts stays text. Non-text cells pass
/// through unchanged.
pub fn apply_interpret(table: &Table, spec: &Interpret) -> Table {
    let row_scope = Selector::normalize(spec.row.as_ref());
    let col_scope = Selector::normalize(spec.col.as_ref());

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(col_index, cell)| {
                    if row_scope.contains(row_index) && col_scope.contains(col_index) {
                        interpret_cell(cell, spec)
                    } else {
                        cell.clone()
                    }
                })
                .collect()
        })
        .collect();

    Table::from_rows(rows)
}

fn interpret_cell(cell: &Cell, spec: &Interpret) -> Cell {
    let Cell::Text(s) = cell else {
        return cell.clone();
    };

    if spec.numbers && let Ok(n) = s.parse::<f64>() {
        return Cell::Number(n);
    }
    if let Some(bools) = &spec.bools {
        if *s == bools.true_val {
            return Cell::Bool(true);
        }
        if *s == bools.false_val {
            return Cell::Bool(false);
        }
    }
    if let Some(format) = &spec.dates
        && let Ok(date) = NaiveDate::parse_from_str(s, format)
    {
        return Cell::Date(date);
    }

    cell.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn interpret(json: &str) -> Interpret {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_parse_and_others_stay() {
        let table = Table::from_rows(vec![vec![text("3.5"), text("abc"), text("-2")]]);
        let result = apply_interpret(&table, &interpret(r#"{"numbers": true}"#));
        assert_eq!(
            result.rows[0],
            vec![Cell::Number(3.5), text("abc"), Cell::Number(-2.0)]
        );
    }

    #[test]
    fn bools_match_exact_spellings() {
        let table = Table::from_rows(vec![vec![text("yes"), text("no"), text("maybe")]]);
        let result = apply_interpret(
            &table,
            &interpret(r#"{"bools": {"trueVal": "yes", "falseVal": "no"}}"#),
        );
        assert_eq!(
            result.rows[0],
            vec![Cell::Bool(true), Cell::Bool(false), text("maybe")]
        );
    }

    #[test]
    fn dates_use_the_configured_format() {
        let table = Table::from_rows(vec![vec![text("31.12.1999"), text("1999-12-31")]]);
        let result = apply_interpret(&table, &interpret(r#"{"dates": "%d.%m.%Y"}"#));
        assert_eq!(
            result.rows[0],
            vec![
                Cell::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
                text("1999-12-31")
            ]
        );
    }

    #[test]
    fn scope_limits_interpretation() {
        let table = Table::from_rows(vec![
            vec![text("1"), text("2")],
            vec![text("3"), text("4")],
        ]);
        let result = apply_interpret(&table, &interpret(r#"{"numbers": true, "row": 1}"#));
        assert_eq!(result.rows[0], vec![text("1"), text("2")]);
        assert_eq!(result.rows[1], vec![Cell::Number(3.0), Cell::Number(4.0)]);
    }

    #[test]
    fn column_scope() {
        let table = Table::from_rows(vec![vec![text("1"), text("2")]]);
        let result = apply_interpret(&table, &interpret(r#"{"numbers": true, "col": [1]}"#));
        assert_eq!(result.rows[0], vec![text("1"), Cell::Number(2.0)]);
    }

    #[test]
    fn numbers_win_over_dates() {
        // "20201231" parses as a number first.
        let table = Table::from_rows(vec![vec![text("20201231")]]);
        let result = apply_interpret(
            &table,
            &interpret(r#"{"numbers": true, "dates": "%Y%m%d"}"#),
        );
        assert_eq!(result.rows[0], vec![Cell::Number(20201231.0)]);
    }

    #[test]
    fn non_text_cells_pass_through() {
        let table = Table::from_rows(vec![vec![Cell::Bool(true), Cell::Number(1.0)]]);
        let result = apply_interpret(&table, &interpret(r#"{"numbers": true}"#));
        assert_eq!(result, table);
    }

    #[test]
    fn empty_spec_is_identity() {
        let table = Table::from_rows(vec![vec![text("1"), text("yes")]]);
        let result = apply_interpret(&table, &interpret(r#"{}"#));
        assert_eq!(result, table);
    }
}
