//! Compiles a set of optional filters into a parameterized SQL query.

use rusqlite::types::Value;
use serde::Deserialize;

/// The maximum number of rows a single query may return.
///
/// There is no pagination; the cap bounds the response size and query cost.
pub const ROW_LIMIT: usize = 5000;

/// The filter value that means "no constraint", as sent by the console's
/// drop-downs.
const NO_CONSTRAINT_SENTINEL: &str = "ALL";

/// The optional constraints narrowing the rows returned by a query.
///
/// Each request produces a fresh instance from its query string; unknown
/// query keys are ignored by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterSet {
    /// Match rows whose transaction type equals this value, ignoring case
    /// and surrounding whitespace.
    pub transaction_type: Option<String>,
    /// Match rows from this transaction year exactly.
    pub year: Option<String>,
    /// Match rows in this submarket, ignoring case and surrounding whitespace.
    pub submarket: Option<String>,
    /// Match rows with this property type, ignoring case and surrounding whitespace.
    pub property_type: Option<String>,
    /// Match rows with this ticker, ignoring case and surrounding whitespace.
    pub ticker: Option<String>,
}

/// A ready-to-execute SQL statement with its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompiledQuery {
    /// The SQL text. User values only ever appear as `?N` placeholders.
    pub statement: String,
    /// The parameter values, in placeholder order.
    pub parameters: Vec<Value>,
}

impl FilterSet {
    /// Compile the filters into a single SELECT statement.
    ///
    /// Each active filter contributes one equality condition; the conditions
    /// are folded with AND. String filters compare `LOWER(TRIM(column))`
    /// against the trimmed, lower-cased value so the match is insensitive to
    /// case and surrounding whitespace. The year filter is bound verbatim
    /// and compared against the numeric year column; the store resolves
    /// malformed values at execution time.
    ///
    /// The ordering and row cap are always appended so that repeated calls
    /// with the same filters return the same rows in the same order.
    pub(crate) fn compile(&self) -> CompiledQuery {
        let mut where_clause_parts = Vec::new();
        let mut query_parameters = Vec::new();

        let string_filters = [
            ("transaction_type", &self.transaction_type),
            ("submarket", &self.submarket),
            ("property_type", &self.property_type),
            ("ticker", &self.ticker),
        ];

        for (column, filter_value) in string_filters {
            if let Some(value) = active_value(filter_value) {
                where_clause_parts.push(format!(
                    "LOWER(TRIM({column})) = ?{}",
                    query_parameters.len() + 1
                ));
                query_parameters.push(Value::Text(value.trim().to_lowercase()));
            }
        }

        if let Some(year) = active_value(&self.year) {
            where_clause_parts.push(format!(
                "transaction_year = ?{}",
                query_parameters.len() + 1
            ));
            query_parameters.push(Value::Text(year.to_owned()));
        }

        let mut query_string_parts = vec!["SELECT * FROM fact_transactions".to_owned()];

        if !where_clause_parts.is_empty() {
            query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
        }

        query_string_parts
            .push("ORDER BY transaction_year DESC, transaction_quarter DESC".to_owned());
        query_string_parts.push(format!("LIMIT {ROW_LIMIT}"));

        CompiledQuery {
            statement: query_string_parts.join(" "),
            parameters: query_parameters,
        }
    }
}

/// Returns the filter value if it constrains the query, or `None` for
/// absent, empty/whitespace-only, and sentinel values.
fn active_value(filter_value: &Option<String>) -> Option<&str> {
    match filter_value.as_deref() {
        None => None,
        Some(NO_CONSTRAINT_SENTINEL) => None,
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value),
    }
}

#[cfg(test)]
mod filter_compiler_tests {
    use rusqlite::types::Value;

    use super::{FilterSet, ROW_LIMIT};

    #[test]
    fn no_filters_compiles_to_full_table_scan() {
        let compiled = FilterSet::default().compile();

        assert_eq!(
            compiled.statement,
            format!(
                "SELECT * FROM fact_transactions \
                 ORDER BY transaction_year DESC, transaction_quarter DESC \
                 LIMIT {ROW_LIMIT}"
            )
        );
        assert!(compiled.parameters.is_empty());
    }

    #[test]
    fn single_string_filter_compiles_to_normalized_equality() {
        let filter = FilterSet {
            transaction_type: Some("ACQUISITION".to_owned()),
            ..Default::default()
        };

        let compiled = filter.compile();

        assert_eq!(
            compiled.statement,
            format!(
                "SELECT * FROM fact_transactions \
                 WHERE LOWER(TRIM(transaction_type)) = ?1 \
                 ORDER BY transaction_year DESC, transaction_quarter DESC \
                 LIMIT {ROW_LIMIT}"
            )
        );
        assert_eq!(
            compiled.parameters,
            vec![Value::Text("acquisition".to_owned())]
        );
    }

    #[test]
    fn multiple_filters_are_folded_with_and() {
        let filter = FilterSet {
            transaction_type: Some("ACQUISITION".to_owned()),
            year: Some("2023".to_owned()),
            ticker: Some("SLG".to_owned()),
            ..Default::default()
        };

        let compiled = filter.compile();

        assert_eq!(
            compiled.statement,
            format!(
                "SELECT * FROM fact_transactions \
                 WHERE LOWER(TRIM(transaction_type)) = ?1 \
                 AND LOWER(TRIM(ticker)) = ?2 \
                 AND transaction_year = ?3 \
                 ORDER BY transaction_year DESC, transaction_quarter DESC \
                 LIMIT {ROW_LIMIT}"
            )
        );
        assert_eq!(
            compiled.parameters,
            vec![
                Value::Text("acquisition".to_owned()),
                Value::Text("slg".to_owned()),
                Value::Text("2023".to_owned()),
            ]
        );
    }

    #[test]
    fn values_differing_in_case_and_whitespace_compile_identically() {
        let lowercase = FilterSet {
            property_type: Some("office".to_owned()),
            ..Default::default()
        };
        let shouty_with_whitespace = FilterSet {
            property_type: Some("  OFFICE ".to_owned()),
            ..Default::default()
        };

        assert_eq!(lowercase.compile(), shouty_with_whitespace.compile());
    }

    #[test]
    fn sentinel_value_is_treated_as_absent() {
        let filter = FilterSet {
            property_type: Some("ALL".to_owned()),
            ..Default::default()
        };

        assert_eq!(filter.compile(), FilterSet::default().compile());
    }

    #[test]
    fn empty_and_whitespace_values_are_treated_as_absent() {
        let empty = FilterSet {
            ticker: Some("".to_owned()),
            submarket: Some("   ".to_owned()),
            ..Default::default()
        };

        assert_eq!(empty.compile(), FilterSet::default().compile());
    }

    #[test]
    fn year_value_is_bound_verbatim() {
        let filter = FilterSet {
            year: Some("not-a-year".to_owned()),
            ..Default::default()
        };

        let compiled = filter.compile();

        assert_eq!(
            compiled.parameters,
            vec![Value::Text("not-a-year".to_owned())]
        );
    }

    #[test]
    fn user_values_never_appear_in_the_statement_text() {
        let filter = FilterSet {
            submarket: Some("midtown'; DROP TABLE fact_transactions; --".to_owned()),
            ..Default::default()
        };

        let compiled = filter.compile();

        assert!(!compiled.statement.contains("DROP TABLE"));
        assert_eq!(
            compiled.parameters,
            vec![Value::Text(
                "midtown'; drop table fact_transactions; --".to_owned()
            )]
        );
    }
}
