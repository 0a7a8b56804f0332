//! The server-rendered console page for browsing transactions.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, ERROR_MESSAGE_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
};

use super::{FilterSet, Row, ScalarValue, TransactionQueryState, query_transactions};

/// The transaction types offered by the filter drop-down.
const TRANSACTION_TYPES: [&str; 2] = ["ACQUISITION", "DISPOSITION"];
/// The property types offered by the filter drop-down.
const PROPERTY_TYPES: [&str; 2] = ["OFFICE", "RETAIL"];
/// The year range offered by the filter drop-down.
const YEARS: std::ops::RangeInclusive<i32> = 2000..=2025;

/// Render the console page: the filter form plus the current query result.
///
/// The page runs the same filter query as the JSON endpoint and renders the
/// rows as a table. A store error is shown inline as the raw error string.
pub async fn get_console_page(
    State(state): State<TransactionQueryState>,
    Query(filter): Query<FilterSet>,
) -> Response {
    let query_result = match state.db_connection.lock() {
        Ok(connection) => query_transactions(&filter, &connection),
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            Err(Error::DatabaseLockError)
        }
    };

    if let Err(error) = &query_result {
        tracing::error!("transactions query failed: {error}");
    }

    console_view(&filter, &query_result).into_response()
}

fn console_view(filter: &FilterSet, query_result: &Result<Vec<Row>, Error>) -> Markup {
    let content = html! {
        h1 class="text-2xl font-semibold text-gray-800 mb-5" { "Transactions Query Console" }

        (filter_form_view(filter))

        @match query_result {
            Ok(rows) => { (results_view(rows)) }
            Err(error) => { p class=(ERROR_MESSAGE_STYLE) { "Error: " (error) } }
        }
    };

    base("Transactions", &content)
}

fn filter_form_view(filter: &FilterSet) -> Markup {
    html! {
        form method="get" action=(endpoints::CONSOLE_VIEW) class="mb-5"
        {
            div class="grid grid-cols-1 md:grid-cols-5 gap-3 mb-4"
            {
                div
                {
                    label for="transaction_type" class=(FORM_LABEL_STYLE) { "Transaction Type" }
                    select id="transaction_type" name="transaction_type" class=(FORM_INPUT_STYLE)
                    {
                        option value="" { "All" }
                        @for transaction_type in TRANSACTION_TYPES {
                            option
                                value=(transaction_type)
                                selected[filter.transaction_type.as_deref() == Some(transaction_type)]
                            {
                                (transaction_type)
                            }
                        }
                    }
                }

                div
                {
                    label for="year" class=(FORM_LABEL_STYLE) { "Year" }
                    select id="year" name="year" class=(FORM_INPUT_STYLE)
                    {
                        option value="ALL" { "All Years" }
                        @for year in YEARS {
                            option
                                value=(year)
                                selected[filter.year.as_deref() == Some(year.to_string().as_str())]
                            {
                                (year)
                            }
                        }
                    }
                }

                div
                {
                    label for="submarket" class=(FORM_LABEL_STYLE) { "Submarket" }
                    input
                        id="submarket"
                        type="text"
                        name="submarket"
                        placeholder="Submarket"
                        value=(filter.submarket.as_deref().unwrap_or(""))
                        class=(FORM_INPUT_STYLE);
                }

                div
                {
                    label for="property_type" class=(FORM_LABEL_STYLE) { "Property Type" }
                    select id="property_type" name="property_type" class=(FORM_INPUT_STYLE)
                    {
                        option value="ALL" { "All" }
                        @for property_type in PROPERTY_TYPES {
                            option
                                value=(property_type)
                                selected[filter.property_type.as_deref() == Some(property_type)]
                            {
                                (property_type)
                            }
                        }
                    }
                }

                div
                {
                    label for="ticker" class=(FORM_LABEL_STYLE) { "Ticker" }
                    input
                        id="ticker"
                        type="text"
                        name="ticker"
                        placeholder="Ticker"
                        value=(filter.ticker.as_deref().unwrap_or(""))
                        class=(FORM_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Run Query" }
        }
    }
}

fn results_view(rows: &[Row]) -> Markup {
    html! {
        div class="flex justify-between items-center mb-2"
        {
            p class="text-xs text-gray-600"
            {
                "Showing " (rows.len()) " result" @if rows.len() != 1 { "s" }
            }
            p class="text-[10px] text-gray-400 italic" { "Data sourced live from fact_transactions" }
        }

        @if let Some(first_row) = rows.first() {
            div class="overflow-x-auto max-h-[70vh] border border-gray-200 rounded-lg shadow-sm"
            {
                table class="table-auto min-w-full text-[12px] border-collapse"
                {
                    thead class="bg-gray-100 text-gray-700 sticky top-0 z-10"
                    {
                        tr
                        {
                            @for column_name in first_row.columns() {
                                th class=(TABLE_HEADER_STYLE) { (column_name.replace('_', " ")) }
                            }
                        }
                    }
                    tbody
                    {
                        @for row in rows {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                @for (_, value) in row.cells() {
                                    td class=(TABLE_CELL_STYLE) { (format_cell(value)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_cell(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Null => "—".to_owned(),
        ScalarValue::Integer(value) => value.to_string(),
        ScalarValue::Real(value) => value.to_string(),
        ScalarValue::Text(value) => value.clone(),
    }
}

#[cfg(test)]
mod console_page_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> (AppState, TestServer) {
        let conn = Connection::open_in_memory().expect("Could not open in-memory database");
        let state = AppState::new(conn).expect("Could not create app state");
        let server = TestServer::new(build_router(state.clone()));

        (state, server)
    }

    fn select_all<'a>(html: &'a Html, css_selector: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css_selector).expect("Invalid selector");
        html.select(&selector).collect()
    }

    #[tokio::test]
    async fn renders_filter_form_with_all_filter_controls() {
        let (_state, server) = get_test_server();

        let response = server.get(endpoints::CONSOLE_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());

        let forms = select_all(&html, &format!("form[action=\"{}\"]", endpoints::CONSOLE_VIEW));
        assert_eq!(forms.len(), 1, "the page should contain the filter form");

        for control in [
            "select[name=\"transaction_type\"]",
            "select[name=\"year\"]",
            "input[name=\"submarket\"]",
            "select[name=\"property_type\"]",
            "input[name=\"ticker\"]",
        ] {
            assert_eq!(
                select_all(&html, control).len(),
                1,
                "the form should contain {control}"
            );
        }
    }

    #[tokio::test]
    async fn renders_result_rows_as_table() {
        let (state, server) = get_test_server();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO fact_transactions
                 (transaction_type, transaction_year, transaction_quarter, ticker)
                 VALUES ('ACQUISITION', 2023, 4, 'SLG'), ('DISPOSITION', 2022, 1, NULL)",
                (),
            )
            .unwrap();

        let response = server.get(endpoints::CONSOLE_VIEW).await;

        response.assert_status_ok();
        let text = response.text();
        let html = Html::parse_document(&text);

        assert_eq!(select_all(&html, "tbody tr").len(), 2);
        assert!(text.contains("Showing 2 results"));
        // NULL cells render as a placeholder.
        assert!(text.contains("—"));
    }

    #[tokio::test]
    async fn filters_are_applied_and_preserved_in_the_form() {
        let (state, server) = get_test_server();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO fact_transactions
                 (transaction_type, transaction_year, transaction_quarter, ticker)
                 VALUES ('ACQUISITION', 2023, 4, 'SLG'), ('DISPOSITION', 2022, 1, 'VNO')",
                (),
            )
            .unwrap();

        let response = server
            .get(endpoints::CONSOLE_VIEW)
            .add_query_param("transaction_type", "ACQUISITION")
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());

        assert_eq!(select_all(&html, "tbody tr").len(), 1);

        let selected = select_all(
            &html,
            "select[name=\"transaction_type\"] option[selected]",
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("value"), Some("ACQUISITION"));
    }

    #[tokio::test]
    async fn store_error_is_shown_inline() {
        let (state, server) = get_test_server();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE fact_transactions", ())
            .unwrap();

        let response = server.get(endpoints::CONSOLE_VIEW).await;

        response.assert_status_ok();
        let text = response.text();
        assert!(
            text.contains("Error: an unexpected SQL error occurred"),
            "the page should surface the raw error string"
        );
    }
}
