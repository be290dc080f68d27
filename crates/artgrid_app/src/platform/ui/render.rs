use artgrid_core::{Artwork, GridViewModel, HeaderCheckbox};
use owo_colors::OwoColorize;

use super::constants::*;

/// Renders one frame of the grid as plain lines; `color` enables ANSI styling.
pub fn render(view: &GridViewModel, color: bool) -> String {
    let mut lines = Vec::new();

    lines.push(header_line(view));
    lines.push(status_line(view));
    lines.push(String::new());

    let header_mark = match view.header {
        HeaderCheckbox::Checked => "[x]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Unchecked => "[ ]",
    };
    lines.push(format!(
        "{header_mark} {:>3}  {:<title$}  {:<origin$}  {:<artist$}  {:>5}  {:>5}",
        "#",
        "Title",
        "Origin",
        "Artist",
        "Start",
        "End",
        title = COL_TITLE,
        origin = COL_ORIGIN,
        artist = COL_ARTIST,
    ));

    if view.records.is_empty() {
        lines.push(if view.loading {
            "      Loading...".to_string()
        } else {
            "      No results".to_string()
        });
    }
    for (index, artwork) in view.records.iter().enumerate() {
        let selected = view.is_row_selected(artwork);
        let row = format_row(index + 1, artwork, selected);
        lines.push(if color && selected {
            row.green().bold().to_string()
        } else {
            row
        });
    }

    lines.push(String::new());
    if let Some((consumed, target)) = view.progressive {
        lines.push(format!("Selecting... {consumed}/{target}"));
    }
    if let Some(error) = &view.last_error {
        let text = format!("Last fetch failed: {error}");
        lines.push(if color { text.red().to_string() } else { text });
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn header_line(view: &GridViewModel) -> String {
    let results = match view.showing {
        Some((first, last)) => format!(
            "Showing {}–{} of {} results",
            format_with_commas(first),
            format_with_commas(last),
            format_with_commas(view.total_records)
        ),
        None => format!("{} results", format_with_commas(view.total_records)),
    };
    if view.total_selected > 0 {
        format!("The Collection | {results} | {} selected", view.total_selected)
    } else {
        format!("The Collection | {results}")
    }
}

fn status_line(view: &GridViewModel) -> String {
    let page = if view.total_pages > 0 {
        format!(
            "Page {} of {}",
            view.page_number,
            format_with_commas(u64::from(view.total_pages))
        )
    } else {
        format!("Page {}", view.page_number)
    };
    if view.loading {
        format!("{page} | loading page {}...", view.requested_page)
    } else {
        page
    }
}

fn format_row(position: usize, artwork: &Artwork, selected: bool) -> String {
    let mark = if selected { "[x]" } else { "[ ]" };
    format!(
        "{mark} {position:>3}  {:<title$}  {:<origin$}  {:<artist$}  {:>5}  {:>5}",
        fit(&artwork.title, COL_TITLE),
        fit(artwork.place_of_origin.as_deref().unwrap_or("-"), COL_ORIGIN),
        fit(first_line(artwork.artist_display.as_deref()), COL_ARTIST),
        year(artwork.date_start),
        year(artwork.date_end),
        title = COL_TITLE,
        origin = COL_ORIGIN,
        artist = COL_ARTIST,
    )
}

fn first_line(text: Option<&str>) -> &str {
    text.and_then(|text| text.lines().next()).unwrap_or("-")
}

fn year(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |year| year.to_string())
}

/// Truncates to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
