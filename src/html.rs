//! Shared HTML rendering for the console page.

use maud::{DOCTYPE, Markup, html};

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-xs font-medium text-gray-600";
pub const FORM_INPUT_STYLE: &str = "w-full border border-gray-300 rounded-md p-2 text-sm";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str =
    "bg-blue-600 text-white px-5 py-2 rounded-md hover:bg-blue-700 text-sm";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "px-2 py-2 border-b border-gray-300 text-left \
    font-semibold uppercase tracking-wide whitespace-nowrap";
pub const TABLE_ROW_STYLE: &str = "odd:bg-white even:bg-gray-50 hover:bg-blue-50";
pub const TABLE_CELL_STYLE: &str = "px-2 py-1 border-b border-gray-200 text-gray-800 \
    whitespace-nowrap overflow-hidden text-ellipsis max-w-[180px]";

// Error banner
pub const ERROR_MESSAGE_STYLE: &str =
    "text-red-600 bg-red-50 border border-red-200 p-2 rounded-md text-sm";

/// Render `content` inside the shared page shell.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Iceberg Console" }

                script src="https://cdn.tailwindcss.com" {}
            }

            body class="min-h-screen bg-gray-50 p-6"
            {
                div class="max-w-6xl mx-auto bg-white shadow-sm rounded-xl p-6 border border-gray-200"
                {
                    (content)
                }
            }
        }
    }
}
