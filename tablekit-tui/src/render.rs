//! Draws the table screen into a cell buffer.
//!
//! Layout, top to bottom: search box, header row, rule, one line per row of
//! the current page, pager, key help. The body reserves `page_size` lines so
//! the pager does not move while paging, shrinking to keep the pager on a
//! short screen.

use tablekit_lib::{Column, Record, Row, SortDirection, TableView};

use crate::hit::{HitMap, Target};
use crate::input::SearchInput;
use crate::screen::text::{display_width, tail_to_width, truncate_to_width};
use crate::screen::{Buffer, Rect, Theme};

const SEARCH_LABEL: &str = "Search: ";
const SEARCH_WIDTH: u16 = 32;
const SEARCHING: &str = "searching…";
const SEPARATOR: &str = " │ ";
const SEPARATOR_WIDTH: u16 = 3;
const PREV: &str = "[ Prev ]";
const NEXT: &str = "[ Next ]";
const HELP: &str = "Type to search · F1-F12 or click a header to sort · PgUp/PgDn to page · Esc to quit";
const MAX_COLUMN_WIDTH: usize = 30;
const MIN_COLUMN_WIDTH: usize = 3;

const LEFT: u16 = 1;
const SEARCH_Y: u16 = 0;
const HEADER_Y: u16 = 2;
const BODY_Y: u16 = 4;

/// A rendered screen plus what is needed to route input back to it.
#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: Buffer,
    pub hits: HitMap,
    /// Where the terminal cursor should blink, if anywhere.
    pub cursor: Option<(u16, u16)>,
}

/// Per-frame inputs besides the table itself.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub theme: &'a Theme,
    /// Column widths from [`column_widths`].
    pub widths: &'a [u16],
    /// A search edit is waiting on the debouncer.
    pub searching: bool,
}

/// Width of each column: the widest of its label and every cell, capped.
///
/// Measured over all records so widths stay put while searching and paging.
pub fn column_widths<R: Row>(columns: &[Column], records: &[R]) -> Vec<u16> {
    columns
        .iter()
        .map(|column| {
            // Room for the sort marker
            let label = display_width(&column.label) + 2;
            let cells = records
                .iter()
                .filter_map(|r| r.field(&column.key))
                .map(|v| display_width(&v.to_string()))
                .max()
                .unwrap_or(0);
            label.max(cells).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) as u16
        })
        .collect()
}

pub fn render(
    view: &mut TableView<Record>,
    input: &SearchInput,
    screen: Screen<'_>,
    width: u16,
    height: u16,
) -> Frame {
    let theme = screen.theme;
    let mut buffer = Buffer::new(width, height);
    buffer.fill(Rect::new(0, 0, width, height), theme.text());
    let mut hits = HitMap::new();

    let cursor = render_search(&mut buffer, input, screen);

    let spans = column_spans(screen.widths, width);
    let table_right = spans.last().map(|&(x, w)| x + w).unwrap_or(LEFT);
    render_header(&mut buffer, &mut hits, view, &spans, theme);

    for x in LEFT..table_right.min(width) {
        buffer.print(x, HEADER_Y + 1, "─", 1, theme.border());
    }

    // Leave room for the blank line and pager below the body
    let body_rows = view
        .state()
        .page_size()
        .get()
        .min(usize::from(height.saturating_sub(BODY_Y + 2))) as u16;

    let page = view.page();
    for (line, &index) in page.indices().iter().take(usize::from(body_rows)).enumerate() {
        let y = BODY_Y + line as u16;
        let paint = theme.row(line % 2 == 1);
        buffer.fill(Rect::new(LEFT, y, table_right.saturating_sub(LEFT), 1), paint);

        let Some(record) = view.record(index) else {
            continue;
        };
        for (i, (column, &(x, w))) in view.columns().iter().zip(&spans).enumerate() {
            let text = record
                .field(&column.key)
                .map(|v| v.to_string())
                .unwrap_or_default();
            buffer.print(x, y, &truncate_to_width(&text, w as usize), w, paint);
            if i + 1 < spans.len() {
                buffer.print(x + w, y, SEPARATOR, SEPARATOR_WIDTH, theme.border());
            }
        }
    }

    let pager_y = (BODY_Y + body_rows + 1).min(height.saturating_sub(1));
    let mut x = LEFT;

    let prev = theme.button(page.has_prev());
    let written = buffer.print(x, pager_y, PREV, width.saturating_sub(x), prev);
    if page.has_prev() {
        hits.push(Rect::new(x, pager_y, written, 1), Target::PrevPage);
    }
    x = x.saturating_add(written + 2);

    x = x.saturating_add(buffer.print(x, pager_y, &page.label(), width.saturating_sub(x), theme.text()) + 2);

    let next = theme.button(page.has_next());
    let written = buffer.print(x, pager_y, NEXT, width.saturating_sub(x), next);
    if page.has_next() {
        hits.push(Rect::new(x, pager_y, written, 1), Target::NextPage);
    }
    x = x.saturating_add(written + 3);

    let count = format!("{} of {} records", page.total_rows(), view.records().len());
    buffer.print(x, pager_y, &count, width.saturating_sub(x), theme.muted());

    if height > pager_y.saturating_add(2) {
        buffer.print(LEFT, height - 1, HELP, width.saturating_sub(LEFT), theme.muted());
    }

    Frame {
        buffer,
        hits,
        cursor,
    }
}

/// Draw the search box; returns the cursor position inside it.
fn render_search(buffer: &mut Buffer, input: &SearchInput, screen: Screen<'_>) -> Option<(u16, u16)> {
    let theme = screen.theme;
    let width = buffer.width();

    let x = LEFT + buffer.print(LEFT, SEARCH_Y, SEARCH_LABEL, width.saturating_sub(LEFT), theme.muted());
    let box_width = SEARCH_WIDTH.min(width.saturating_sub(x).saturating_sub(1));
    if box_width == 0 {
        return None;
    }
    buffer.fill(Rect::new(x, SEARCH_Y, box_width, 1), theme.input());

    // Scroll so the cursor stays visible, keeping one column for it
    let before = input.before_cursor();
    let shown_before = tail_to_width(before, box_width as usize - 1);
    let hidden = before.len() - shown_before.len();
    buffer.print(x, SEARCH_Y, &input.text()[hidden..], box_width, theme.input());

    if screen.searching {
        let hint_x = x + box_width + 1;
        buffer.print(hint_x, SEARCH_Y, SEARCHING, width.saturating_sub(hint_x), theme.muted());
    }

    Some((x + display_width(shown_before) as u16, SEARCH_Y))
}

fn render_header(
    buffer: &mut Buffer,
    hits: &mut HitMap,
    view: &TableView<Record>,
    spans: &[(u16, u16)],
    theme: &Theme,
) {
    let sort = view.state().sort();
    for (i, (column, &(x, w))) in view.columns().iter().zip(spans).enumerate() {
        let marker = match (sort.is_active(&column.key), sort.direction) {
            (false, _) => "",
            (true, SortDirection::Ascending) => " ▲",
            (true, SortDirection::Descending) => " ▼",
        };
        let label_width = (w as usize).saturating_sub(display_width(marker));
        let text = format!("{}{}", truncate_to_width(&column.label, label_width), marker);

        buffer.fill(Rect::new(x, HEADER_Y, w, 1), theme.header());
        buffer.print(x, HEADER_Y, &text, w, theme.header());
        hits.push(Rect::new(x, HEADER_Y, w, 1), Target::Header(column.key.clone()));

        if i + 1 < spans.len() {
            buffer.print(x + w, HEADER_Y, SEPARATOR, SEPARATOR_WIDTH, theme.border());
        }
    }
}

/// `(x, width)` of each column that starts on screen, clipped to `screen_width`.
fn column_spans(widths: &[u16], screen_width: u16) -> Vec<(u16, u16)> {
    let mut spans = Vec::with_capacity(widths.len());
    let mut x = LEFT;
    for &w in widths {
        if x >= screen_width {
            break;
        }
        spans.push((x, w.min(screen_width - x)));
        x = x.saturating_add(w).saturating_add(SEPARATOR_WIDTH);
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablekit_lib::{TableConfig, TableEvent};

    fn users(count: i32) -> Vec<Record> {
        (1..=count)
            .map(|id| {
                Record::new()
                    .set("id", id)
                    .set("name", format!("User {}", id))
                    .set("age", 20 + id)
            })
            .collect()
    }

    fn draw(view: &mut TableView<Record>, input: &SearchInput, searching: bool) -> Frame {
        let theme = Theme::default();
        let widths = column_widths(view.columns(), view.records());
        let screen = Screen {
            theme: &theme,
            widths: &widths,
            searching,
        };
        render(view, input, screen, 80, 20)
    }

    fn find_row(frame: &Frame, needle: &str) -> Option<u16> {
        (0..frame.buffer.height()).find(|&y| frame.buffer.row_text(y).contains(needle))
    }

    #[test]
    fn test_column_widths() {
        let records = users(3);
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
        // "ID" + marker room = 4; "Name" + 2 = 6 < "User 1" = 6
        assert_eq!(column_widths(&columns, &records), [4, 6]);
    }

    #[test]
    fn test_column_spans_clip_to_screen() {
        assert_eq!(column_spans(&[4, 6], 80), [(1, 4), (8, 6)]);
        assert_eq!(column_spans(&[4, 6], 10), [(1, 4), (8, 2)]);
        assert_eq!(column_spans(&[4, 6], 5), [(1, 4)]);
    }

    #[test]
    fn test_first_page_shows_page_size_rows() {
        let mut view = TableView::new(users(10), &TableConfig::default());
        let frame = draw(&mut view, &SearchInput::new(), false);

        assert!(find_row(&frame, "User 4").is_some());
        assert!(find_row(&frame, "User 5").is_none());
        assert!(find_row(&frame, "1 of 3").is_some());
        assert!(find_row(&frame, "10 of 10 records").is_some());
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let mut view = TableView::new(users(10), &TableConfig::default());
        let frame = draw(&mut view, &SearchInput::new(), false);

        assert_eq!(frame.hits.rect_of(&Target::PrevPage), None);
        assert!(frame.hits.rect_of(&Target::NextPage).is_some());
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let mut view = TableView::new(users(10), &TableConfig::default());
        view.apply(TableEvent::NextPage).unwrap();
        view.apply(TableEvent::NextPage).unwrap();
        let frame = draw(&mut view, &SearchInput::new(), false);

        assert!(frame.hits.rect_of(&Target::PrevPage).is_some());
        assert_eq!(frame.hits.rect_of(&Target::NextPage), None);
        assert!(find_row(&frame, "User 10").is_some());
        assert!(find_row(&frame, "3 of 3").is_some());
    }

    #[test]
    fn test_empty_table_disables_both_buttons() {
        let mut view = TableView::new(users(3), &TableConfig::default());
        view.apply(TableEvent::Query("nobody".into())).unwrap();
        let frame = draw(&mut view, &SearchInput::new(), false);

        assert!(find_row(&frame, "1 of 1").is_some());
        assert!(find_row(&frame, "User").is_none());
        assert_eq!(frame.hits.rect_of(&Target::PrevPage), None);
        assert_eq!(frame.hits.rect_of(&Target::NextPage), None);
    }

    #[test]
    fn test_pager_stays_on_short_screen() {
        let config = TableConfig::new().page_size(30).unwrap();
        let mut view = TableView::new(users(100), &config);
        let theme = Theme::default();
        let widths = column_widths(view.columns(), view.records());
        let screen = Screen {
            theme: &theme,
            widths: &widths,
            searching: false,
        };
        let frame = render(&mut view, &SearchInput::new(), screen, 80, 24);

        assert_eq!(find_row(&frame, "1 of 4"), Some(23));
        let next = frame.hits.rect_of(&Target::NextPage).unwrap();
        assert_eq!(next.y, 23);
        // 24 rows less search, header, rule, gap and pager
        assert!(find_row(&frame, "User 18 ").is_some());
        assert!(find_row(&frame, "User 19 ").is_none());
    }

    #[test]
    fn test_huge_page_size_renders() {
        let config = TableConfig::new().page_size(usize::MAX).unwrap();
        let mut view = TableView::new(users(10), &config);
        let frame = draw(&mut view, &SearchInput::new(), false);
        assert!(find_row(&frame, "1 of 1").is_some());
        assert!(find_row(&frame, "User 10").is_some());
    }

    #[test]
    fn test_header_marks_sort_column() {
        let mut view = TableView::new(users(3), &TableConfig::default());
        view.apply(TableEvent::SortBy("age".into())).unwrap();
        let frame = draw(&mut view, &SearchInput::new(), false);
        assert!(frame.buffer.row_text(HEADER_Y).contains("age ▲"));

        view.apply(TableEvent::SortBy("age".into())).unwrap();
        let frame = draw(&mut view, &SearchInput::new(), false);
        assert!(frame.buffer.row_text(HEADER_Y).contains("age ▼"));
    }

    #[test]
    fn test_headers_are_clickable() {
        let mut view = TableView::new(users(3), &TableConfig::default());
        let frame = draw(&mut view, &SearchInput::new(), false);

        let rect = frame.hits.rect_of(&Target::Header("name".into())).unwrap();
        assert_eq!(rect.y, HEADER_Y);
        assert_eq!(
            frame.hits.target_at(rect.x, rect.y),
            Some(&Target::Header("name".into()))
        );
    }

    #[test]
    fn test_search_box_and_hint() {
        let mut view = TableView::new(users(3), &TableConfig::default());
        let mut input = SearchInput::new();
        for c in "user".chars() {
            input.handle_key(crate::keys::Key::Char(c), crate::keys::Modifiers::new());
        }

        let frame = draw(&mut view, &input, true);
        let line = frame.buffer.row_text(SEARCH_Y);
        assert!(line.contains("Search: user"));
        assert!(line.contains(SEARCHING));

        let label_end = LEFT + SEARCH_LABEL.len() as u16;
        assert_eq!(frame.cursor, Some((label_end + 4, SEARCH_Y)));
    }
}
