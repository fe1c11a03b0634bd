//! Frame rendering for the picker.
//!
//! Frames are plain strings plus a style tag per line, so they can be
//! snapshot-tested and painted by the interactive loop without either side
//! knowing about the other.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::picker::{match_range, Pane, SearchState, SelectionState, SessionState, TreeNode};

use super::theme::Icons;

/// How a line should be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Header,
    Cursor,
    Normal,
    Dim,
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
    /// Byte range of `text` matching the search query
    pub highlight: Option<Range<usize>>,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            highlight: None,
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), LineStyle::Normal)
    }
}

/// A full screen of lines, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Terminal geometry and icon choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    pub unicode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            unicode: true,
        }
    }
}

/// Lines that are always present outside the two lists: title, blank,
/// selected header, blank, available header, blank, two help lines.
const FIXED_LINES: usize = 8;
/// Search bar plus its trailing blank line
const SEARCH_BAR_LINES: usize = 2;

/// Render the whole picker screen
pub fn render_frame(state: &SessionState, options: &RenderOptions) -> Frame {
    let icons = Icons::new(options.unicode);
    let search = state.search();
    let mut lines = Vec::new();

    lines.push(Line::new(
        format!("{} tzpick - pick your timezones", icons.title),
        LineStyle::Title,
    ));
    lines.push(Line::blank());

    let mut fixed = FIXED_LINES;
    if let Some(search) = search {
        lines.push(render_search_bar(search));
        lines.push(Line::blank());
        fixed += SEARCH_BAR_LINES;
    }

    // Selected pane gets up to a third of the free space, the rest goes to
    // the tree or the match list.
    let remaining = options.height.saturating_sub(fixed);
    let selected_len = state.selection().len();
    let selected_cap = selected_len.max(1).min((remaining / 3).max(1));
    let selected_overflow = selected_len > selected_cap;
    let available_space = remaining
        .saturating_sub(selected_cap)
        .saturating_sub(usize::from(selected_overflow));

    render_selected_pane(state, &icons, selected_cap, &mut lines);
    lines.push(Line::blank());

    match search {
        Some(search) => render_matches(search, &icons, available_space, &mut lines),
        None => render_tree(state, &icons, available_space, &mut lines),
    }
    lines.push(Line::blank());

    for help in help_lines(state, &icons) {
        lines.push(Line::new(help, LineStyle::Dim));
    }

    for line in &mut lines {
        fit_line(line, options.width, icons.ellipsis);
    }
    Frame { lines }
}

fn render_search_bar(search: &SearchState) -> Line {
    let status = if search.query.is_empty() {
        "(type to search)".to_string()
    } else if search.matches.is_empty() {
        "(no matches)".to_string()
    } else if search.matches.len() == 1 {
        "(1 match)".to_string()
    } else {
        format!("({} matches)", search.matches.len())
    };
    Line::new(format!("/{}  {}", search.query, status), LineStyle::Header)
}

fn pane_header(title: &str, focused: bool, icons: &Icons) -> Line {
    let mark = if focused { icons.focus } else { " " };
    Line::new(format!("{} {}", mark, title), LineStyle::Header)
}

fn render_selected_pane(state: &SessionState, icons: &Icons, capacity: usize, out: &mut Vec<Line>) {
    let focused = state.focus() == Pane::Selected && !state.is_searching();
    let selection = state.selection();
    out.push(pane_header(
        &format!("Selected ({})", selection.len()),
        focused,
        icons,
    ));

    if selection.is_empty() {
        out.push(Line::new("  (none selected)", LineStyle::Dim));
        return;
    }

    let range = viewport(state.selected_cursor(), selection.len(), capacity);
    for (i, path) in selection.iter().enumerate().skip(range.start).take(range.len()) {
        let active = focused && i == state.selected_cursor();
        out.push(cursor_line(
            format!("{} {}. {}", cursor(active, icons), i + 1, path),
            active,
        ));
    }
    if let Some(indicator) = scroll_indicator(&range, selection.len(), icons) {
        out.push(indicator);
    }
}

fn render_tree(state: &SessionState, icons: &Icons, space: usize, out: &mut Vec<Line>) {
    let focused = state.focus() == Pane::Available;
    out.push(pane_header("Available", focused, icons));

    let rows = state.rows();
    let capacity = list_capacity(rows.len(), space);
    let range = viewport(state.tree_cursor(), rows.len(), capacity);
    let indent = " ".repeat(icons.expand.width() + 3);

    for (i, row) in rows.iter().enumerate().skip(range.start).take(range.len()) {
        let Some(node) = state.tree().node_at_row(*row) else {
            continue;
        };
        let active = focused && i == state.tree_cursor();
        let text = match node {
            TreeNode::Area(area) => {
                let expand = if area.expanded {
                    icons.expand
                } else {
                    icons.collapse
                };
                let (icon, indicator) = match area.selection_state() {
                    SelectionState::Selected => (icons.selected, " (all)".to_string()),
                    SelectionState::Partial => (
                        icons.partial,
                        format!(" ({}/{})", area.selected_count(), area.children.len()),
                    ),
                    SelectionState::Unselected => (icons.unselected, String::new()),
                };
                format!(
                    "{} {} {} {}{}",
                    cursor(active, icons),
                    expand,
                    icon,
                    area.name,
                    indicator
                )
            }
            TreeNode::Location(location) => format!(
                "{} {}{} {}",
                cursor(active, icons),
                indent,
                icons.check(location.is_selected),
                location.name
            ),
        };
        out.push(cursor_line(text, active));
    }
    if let Some(indicator) = scroll_indicator(&range, rows.len(), icons) {
        out.push(indicator);
    }
}

fn render_matches(search: &SearchState, icons: &Icons, space: usize, out: &mut Vec<Line>) {
    out.push(pane_header("Matches", true, icons));

    let matches = &search.matches;
    let capacity = list_capacity(matches.len(), space);
    let range = viewport(search.cursor, matches.len(), capacity);

    for (i, found) in matches.iter().enumerate().skip(range.start).take(range.len()) {
        let active = i == search.cursor;
        let prefix = format!("{} {} ", cursor(active, icons), icons.check(found.is_selected));
        let highlight = match_range(&found.full_path, &search.query)
            .map(|r| r.start + prefix.len()..r.end + prefix.len());
        let mut line = cursor_line(format!("{}{}", prefix, found.full_path), active);
        line.highlight = highlight;
        out.push(line);
    }
    if let Some(indicator) = scroll_indicator(&range, matches.len(), icons) {
        out.push(indicator);
    }
}

fn help_lines(state: &SessionState, icons: &Icons) -> [String; 2] {
    let ud = icons.up_down;
    if state.is_searching() {
        return [
            format!("[{ud}] Move  [Space] Toggle  [Enter] Jump to match  [Esc] Back"),
            "[Ctrl+C] Cancel".to_string(),
        ];
    }
    let first = match state.focus() {
        Pane::Available => {
            format!("[{ud}] Move  [Space] Toggle  [Enter] Expand  [Tab] Switch pane")
        }
        Pane::Selected => {
            format!("[{ud}] Move  [Shift+{ud}] Reorder  [Del] Remove  [Tab] Switch pane")
        }
    };
    [
        first,
        "[/] Search  [q] Save & quit  [Ctrl+C] Cancel".to_string(),
    ]
}

fn cursor(active: bool, icons: &Icons) -> &'static str {
    if active {
        icons.cursor
    } else {
        " "
    }
}

fn cursor_line(text: String, active: bool) -> Line {
    let style = if active {
        LineStyle::Cursor
    } else {
        LineStyle::Normal
    };
    Line::new(text, style)
}

/// Rows available to a list of `len` entries when `space` lines are free.
/// One line is reserved for the scroll indicator when the list overflows.
fn list_capacity(len: usize, space: usize) -> usize {
    if len <= space {
        len
    } else {
        space.saturating_sub(1).max(1)
    }
}

fn scroll_indicator(range: &Range<usize>, total: usize, icons: &Icons) -> Option<Line> {
    if range.len() >= total {
        return None;
    }
    Some(Line::new(
        format!(
            "  {} {}-{} of {}",
            icons.up_down,
            range.start + 1,
            range.end,
            total
        ),
        LineStyle::Dim,
    ))
}

/// Window of `capacity` entries out of `len` that contains `cursor`
pub fn viewport(cursor: usize, len: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || len == 0 {
        return 0..0;
    }
    if len <= capacity {
        return 0..len;
    }
    let cursor = cursor.min(len - 1);
    let start = if cursor >= capacity {
        cursor + 1 - capacity
    } else {
        0
    };
    start..(start + capacity).min(len)
}

/// Cut `text` to at most `width` display columns, marking the cut with
/// `ellipsis`. Returns the byte length of `text` that was kept.
pub fn truncate_to_width(text: &str, width: usize, ellipsis: &str) -> (String, usize) {
    if text.width() <= width {
        return (text.to_string(), text.len());
    }
    let budget = width.saturating_sub(ellipsis.width());
    let mut used = 0;
    let mut kept = 0;
    for (i, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept = i + ch.len_utf8();
    }
    let mut out = text[..kept].to_string();
    if ellipsis.width() <= width {
        out.push_str(ellipsis);
    }
    (out, kept)
}

fn fit_line(line: &mut Line, width: usize, ellipsis: &str) {
    let (text, kept) = truncate_to_width(&line.text, width, ellipsis);
    if kept < line.text.len() {
        line.highlight = line
            .highlight
            .take()
            .filter(|r| r.start < kept)
            .map(|r| r.start..r.end.min(kept));
    }
    line.text = text;
}
