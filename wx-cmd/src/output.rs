//! Plain-text rendering of search results and CSV export.

use std::fmt::Write as _;
use std::io;
use wx_core::display::{ResultsView, COLUMN_HEADERS};
use wx_core::explorer::StatusLine;
use wx_core::{SearchView, WeatherRecord};

/// Render a search view as an aligned text table followed by the status
/// line and, when there is more than one page, the page label.
pub fn render_view(view: &SearchView) -> String {
    let mut out = String::new();

    match &view.results {
        ResultsView::Table(rows) => {
            let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(row.iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }
            let _ = writeln!(out, "{}", pad_line(COLUMN_HEADERS.into_iter(), &widths));
            for row in rows {
                let _ = writeln!(out, "{}", pad_line(row.iter().map(String::as_str), &widths));
            }
        }
        other => {
            if let Some(message) = other.message() {
                let _ = writeln!(out, "{}", message);
            }
        }
    }

    match &view.status {
        StatusLine::Empty => {}
        StatusLine::Range(text) => {
            let _ = writeln!(out, "\n{}", text);
        }
        StatusLine::Concurrent(summary) => {
            let _ = writeln!(
                out,
                "\n{}\n{}\n{}",
                summary.title, summary.processed, summary.total_records
            );
        }
    }

    if let Some(controls) = view.pagination {
        let _ = writeln!(out, "{}", controls.label());
    }
    out
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Write full records (every backend field) as CSV with a header row.
pub fn write_csv<W: io::Write>(writer: W, records: &[WeatherRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wx_core::display::render_results;
    use wx_core::pagination::PageControls;

    fn albury() -> WeatherRecord {
        WeatherRecord {
            location: Some("Albury".to_string()),
            min_temp: Some(0.0),
            max_temp: Some(22.9),
            rain_today: Some("No".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_table_with_status_and_pages() {
        let view = SearchView {
            results: render_results(&[albury()]),
            pagination: Some(PageControls {
                current_page: 1,
                total_pages: 3,
            }),
            status: StatusLine::Range("Showing 1-25 of 57 results".to_string()),
        };
        let text = render_view(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Location  Min Temp (°C)"));
        assert!(lines[1].starts_with("Albury    0 "));
        assert!(lines[1].contains("N/A"));
        assert!(lines[1].ends_with("No"));
        assert!(text.contains("Showing 1-25 of 57 results"));
        assert!(text.ends_with("Page 1 of 3\n"));
    }

    #[test]
    fn test_render_placeholder() {
        assert_eq!(
            render_view(&SearchView::initial()),
            "Use the search form above to find weather data.\n"
        );
        let empty = SearchView {
            results: render_results(&[]),
            pagination: None,
            status: StatusLine::Empty,
        };
        assert_eq!(
            render_view(&empty),
            "No results found. Try adjusting your filters.\n"
        );
    }

    #[test]
    fn test_write_csv_includes_all_fields() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[albury()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,date,location,min_temp,max_temp"));
        assert!(header.ends_with("rain_today,rain_tomorrow"));
        assert!(lines.next().unwrap().starts_with(",,Albury,0.0,22.9"));
    }
}
