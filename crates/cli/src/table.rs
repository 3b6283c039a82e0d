//! Column-aligned table rendering via `tabled`.

use console::measure_text_width;
use owo_colors::Style;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style as TableStyle;

use crate::theme;

/// Pad or truncate each row to exactly `columns` cells.
fn normalize_rows(columns: usize, rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            row.resize(columns, String::new());
            row
        })
        .collect()
}

/// Render a rounded-border table with cyan bold headers and a centered
/// bold title above it. No headers means nothing to draw.
pub fn render(
    out: &mut dyn Write,
    headers: &[String],
    rows: &[Vec<String>],
    title: &str,
) -> io::Result<()> {
    if headers.is_empty() {
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(
        headers
            .iter()
            .map(|h| theme::paint(h, Style::new().cyan().bold())),
    );
    for row in normalize_rows(headers.len(), rows) {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(TableStyle::rounded());
    let table = table.to_string();

    if !title.is_empty() {
        let table_width = table
            .lines()
            .next()
            .map(measure_text_width)
            .unwrap_or_default();
        let indent = table_width.saturating_sub(measure_text_width(title)) / 2;
        writeln!(
            out,
            "{}{}",
            " ".repeat(indent),
            theme::paint(title, Style::new().bold())
        )?;
    }
    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn render_to_string(headers: &[&str], rows: &[Vec<String>], title: &str) -> String {
        let headers: Vec<String> = headers.iter().map(ToString::to_string).collect();
        let mut buf = Vec::new();
        render(&mut buf, &headers, rows, title).unwrap();
        let raw = String::from_utf8(buf).unwrap();
        strip_ansi_codes(&raw).to_string()
    }

    #[test]
    fn test_rows_padded_and_truncated_to_header_width() {
        let rows = vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "2".to_string(), "extra".to_string()],
        ];
        let normalized = normalize_rows(2, &rows);
        assert_eq!(normalized[0], vec!["a".to_string(), String::new()]);
        assert_eq!(normalized[1], vec!["b".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_rounded_borders() {
        let rendered = render_to_string(&["Name"], &[vec!["pi-hole".to_string()]], "");
        assert!(rendered.starts_with('╭'));
        assert!(rendered.contains("pi-hole"));
    }

    #[test]
    fn test_title_centered_above_table() {
        let rendered = render_to_string(
            &["Name", "Status"],
            &[vec!["dns".to_string(), "up".to_string()]],
            "Stats",
        );
        let first = rendered.lines().next().unwrap();
        assert_eq!(first.trim(), "Stats");
        assert!(first.starts_with(' '));
    }

    #[test]
    fn test_no_headers_renders_nothing() {
        let mut buf = Vec::new();
        render(&mut buf, &[], &[vec!["orphan".to_string()]], "Stats").unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ragged_rows_render_rectangular() {
        let rendered = render_to_string(
            &["A", "B"],
            &[
                vec!["1".to_string()],
                vec!["2".to_string(), "2".to_string(), "3".to_string()],
            ],
            "",
        );
        let widths: Vec<usize> = rendered.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(!rendered.contains('3'));
    }
}
