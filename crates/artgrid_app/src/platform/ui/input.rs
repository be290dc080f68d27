//! Line commands typed at the grid prompt.

use std::collections::HashSet;

use artgrid_core::{ArtworkId, GridViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    First,
    Last,
    Goto(u32),
    /// Flip the listed 1-based rows of the current page.
    Toggle(Vec<usize>),
    /// Make the listed rows the exact selection of the current page.
    Set(Vec<usize>),
    HeaderClick,
    /// Raw custom-count text; validated by the core.
    SelectCount(String),
    Clear,
    Cancel,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  n, next            next page
  p, prev            previous page
  first, last        first / last page
  g, page <n>        go to page n
  t, toggle <rows>   flip rows on this page (e.g. t 1 3 5-7)
  set <rows>         select exactly these rows on this page (empty clears the page)
  a, all             click the select-all checkbox for this page
  select <N>         select the first N rows across pages, starting at page 1
  clear              clear every selection
  cancel             stop an in-progress 'select <N>'
  ?, help            show this help
  q, quit            exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "n" | "next" => Ok(Command::Next),
        "p" | "prev" => Ok(Command::Prev),
        "first" => Ok(Command::First),
        "last" => Ok(Command::Last),
        "g" | "page" => rest
            .parse::<u32>()
            .map(Command::Goto)
            .map_err(|_| format!("not a page number: {rest:?}")),
        "t" | "toggle" => match parse_rows(rest)? {
            rows if rows.is_empty() => Err("toggle needs at least one row".to_string()),
            rows => Ok(Command::Toggle(rows)),
        },
        "set" => Ok(Command::Set(parse_rows(rest)?)),
        "a" | "all" => Ok(Command::HeaderClick),
        "select" => Ok(Command::SelectCount(rest.to_string())),
        "clear" => Ok(Command::Clear),
        "cancel" => Ok(Command::Cancel),
        "?" | "help" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command {other:?}; type ? for help")),
    }
}

/// Row lists like `1 3 5-7` or `2,4`.
fn parse_rows(raw: &str) -> Result<Vec<usize>, String> {
    let mut rows = Vec::new();
    for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let bad = || format!("not a row number: {token:?}");
        match token.split_once('-') {
            Some((start, end)) => {
                let start: usize = start.parse().map_err(|_| bad())?;
                let end: usize = end.parse().map_err(|_| bad())?;
                if start > end {
                    return Err(bad());
                }
                rows.extend(start..=end);
            }
            None => rows.push(token.parse().map_err(|_| bad())?),
        }
    }
    Ok(rows)
}

/// Translates a command into core messages against what is on screen.
///
/// Navigation past either end and out-of-range rows produce nothing.
pub fn to_msgs(command: &Command, view: &GridViewModel) -> Vec<Msg> {
    match command {
        Command::Next if view.page_number == 0 => vec![Msg::PageRequested(1)],
        Command::Next => vec![Msg::PageRequested(view.page_number.saturating_add(1))],
        Command::Prev if view.page_number > 1 => vec![Msg::PageRequested(view.page_number - 1)],
        Command::Prev => Vec::new(),
        Command::First => vec![Msg::PageRequested(1)],
        Command::Last if view.total_pages > 0 => vec![Msg::PageRequested(view.total_pages)],
        Command::Last => Vec::new(),
        Command::Goto(page) => vec![Msg::PageRequested(*page)],
        Command::Toggle(rows) => {
            let mut selected: HashSet<ArtworkId> =
                view.selected_records.iter().map(|artwork| artwork.id).collect();
            for id in row_ids(view, rows) {
                if !selected.remove(&id) {
                    selected.insert(id);
                }
            }
            vec![Msg::SelectionChanged(selected)]
        }
        Command::Set(rows) => vec![Msg::SelectionChanged(row_ids(view, rows).collect())],
        Command::HeaderClick => vec![Msg::SelectAllClicked],
        Command::SelectCount(text) => {
            vec![Msg::CountInputChanged(text.clone()), Msg::CountSubmitted]
        }
        Command::Clear => vec![Msg::ClearClicked],
        Command::Cancel => vec![Msg::CancelProgressive],
        Command::Help | Command::Quit => Vec::new(),
    }
}

fn row_ids<'a>(view: &'a GridViewModel, rows: &'a [usize]) -> impl Iterator<Item = ArtworkId> + 'a {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(move |&&row| seen.insert(row))
        .filter_map(move |&row| row.checked_sub(1).and_then(|index| view.records.get(index)))
        .map(|artwork| artwork.id)
}
