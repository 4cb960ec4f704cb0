use tokio_postgres::{SimpleQueryMessage, SimpleQueryRow};

/// Text shown for SQL `NULL`.
pub const NULL_TEXT: &str = "None";

/// Renders a result set as the cached string form: values joined by `", "`,
/// one line per row.
pub fn render_rows<R, V>(rows: R) -> String
where
    R: IntoIterator<Item = V>,
    V: AsRef<[Option<String>]>,
{
    rows.into_iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|v| v.as_deref().unwrap_or(NULL_TEXT))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts text-format rows from a simple-query response.
pub fn collect_rows(messages: Vec<SimpleQueryMessage>) -> Vec<Vec<Option<String>>> {
    messages
        .into_iter()
        .filter_map(|msg| match msg {
            SimpleQueryMessage::Row(row) => Some(row_values(&row)),
            _ => None,
        })
        .collect()
}

fn row_values(row: &SimpleQueryRow) -> Vec<Option<String>> {
    (0..row.len())
        .map(|i| row.get(i).map(str::to_string))
        .collect()
}
