//! The event loop: owns the table, routes input, redraws.

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::StreamExt;
use log::{debug, info, trace, warn};
use tablekit_lib::{Debouncer, Record, TableConfig, TableEvent, TableView};
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::hit::{HitMap, Target};
use crate::input::{EditResult, SearchInput};
use crate::keys::{Action, action_for};
use crate::render::{self, Frame, Screen};
use crate::screen::{Terminal, Theme};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Something the loop woke up for.
enum Wakeup {
    Terminal(CrosstermEvent),
    /// A debounced search query is due.
    Query(String),
}

pub struct App {
    view: TableView<Record>,
    input: SearchInput,
    debouncer: Debouncer<String>,
    queries: mpsc::UnboundedReceiver<String>,
    widths: Vec<u16>,
    hits: HitMap,
    theme: Theme,
}

impl App {
    pub fn new(records: Vec<Record>, config: &TableConfig) -> Self {
        let view = TableView::new(records, config);
        let widths = render::column_widths(view.columns(), view.records());

        // The timer task only talks back through the channel
        let (tx, queries) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(config.debounce, move |query: String| {
            let _ = tx.send(query);
        });

        Self {
            view,
            input: SearchInput::new(),
            debouncer,
            queries,
            widths,
            hits: HitMap::new(),
            theme: Theme::default(),
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        info!(
            "Showing {} records in {} columns",
            self.view.records().len(),
            self.view.columns().len()
        );

        let mut events = EventStream::new();
        self.draw(terminal)?;

        loop {
            let wakeup = tokio::select! {
                Some(event) = events.next() => Wakeup::Terminal(event?),
                Some(query) = self.queries.recv() => Wakeup::Query(query),
                else => break,
            };

            match wakeup {
                Wakeup::Terminal(event) => {
                    trace!("Terminal event: {:?}", event);
                    let Some(action) = action_for(event) else {
                        continue;
                    };
                    if self.handle_action(action) == Control::Quit {
                        break;
                    }
                }
                Wakeup::Query(query) => self.handle_query(query),
            }

            self.draw(terminal)?;
        }

        info!("Shutting down");
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) -> Control {
        debug!("Action: {:?}", action);
        match action {
            Action::Quit => return Control::Quit,
            Action::PrevPage => self.apply(TableEvent::PrevPage),
            Action::NextPage => self.apply(TableEvent::NextPage),
            Action::SortColumn(n) => match self.view.columns().get(n) {
                Some(column) => {
                    let key = column.key.clone();
                    self.apply(TableEvent::SortBy(key));
                }
                None => debug!("No column {} to sort by", n + 1),
            },
            Action::Click { x, y } => match self.hits.target_at(x, y).cloned() {
                Some(Target::Header(key)) => self.apply(TableEvent::SortBy(key)),
                Some(Target::PrevPage) => self.apply(TableEvent::PrevPage),
                Some(Target::NextPage) => self.apply(TableEvent::NextPage),
                None => {}
            },
            Action::Edit(key, modifiers) => {
                if self.input.handle_key(key, modifiers) == EditResult::Changed {
                    self.debouncer.call(self.input.text().to_string());
                }
            }
            Action::Redraw => {}
        }
        Control::Continue
    }

    /// Apply a search query delivered by the debouncer.
    pub fn handle_query(&mut self, query: String) {
        self.apply(TableEvent::Query(query));
    }

    /// Render a frame and remember its clickable regions.
    pub fn render(&mut self, width: u16, height: u16) -> Frame {
        let screen = Screen {
            theme: &self.theme,
            widths: &self.widths,
            searching: self.debouncer.is_pending(),
        };
        let frame = render::render(&mut self.view, &self.input, screen, width, height);
        self.hits = frame.hits.clone();
        frame
    }

    fn draw(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        let (width, height) = terminal.size()?;
        let frame = self.render(width, height);
        terminal.draw(&frame.buffer, frame.cursor)?;
        Ok(())
    }

    fn apply(&mut self, event: TableEvent) {
        match self.view.apply(event) {
            Ok(true) => debug!("Table state: {:?}", self.view.state()),
            Ok(false) => {}
            Err(e) => warn!("Ignored table event: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Key, Modifiers};
    use std::time::Duration;

    fn users(count: i32) -> Vec<Record> {
        (1..=count)
            .map(|id| {
                Record::new()
                    .set("id", id)
                    .set("name", format!("User {}", id))
                    .set("age", 50 - id)
            })
            .collect()
    }

    fn app(count: i32) -> App {
        let config = TableConfig::new().debounce(Duration::from_millis(500));
        App::new(users(count), &config)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Edit(Key::Char(c), Modifiers::new()));
        }
    }

    fn first_id(app: &mut App) -> Option<usize> {
        app.view.page().indices().first().copied()
    }

    #[test]
    fn test_quit() {
        let mut app = app(3);
        assert_eq!(app.handle_action(Action::Quit), Control::Quit);
        assert_eq!(app.handle_action(Action::Redraw), Control::Continue);
    }

    #[test]
    fn test_paging_keys() {
        let mut app = app(10);
        app.handle_action(Action::NextPage);
        app.handle_action(Action::NextPage);
        app.handle_action(Action::NextPage);
        assert_eq!(app.view.state().page(), 3);

        app.handle_action(Action::PrevPage);
        assert_eq!(app.view.state().page(), 2);
    }

    #[test]
    fn test_sort_by_function_key() {
        let mut app = app(5);
        app.handle_action(Action::SortColumn(2));
        // Ages descend with id, so ascending age puts the last user first
        assert_eq!(first_id(&mut app), Some(4));

        app.handle_action(Action::SortColumn(2));
        assert_eq!(first_id(&mut app), Some(0));

        // Out of range is ignored
        app.handle_action(Action::SortColumn(11));
        assert_eq!(app.view.state().sort().key.as_deref(), Some("age"));
    }

    #[test]
    fn test_clicks_follow_rendered_regions() {
        let mut app = app(10);
        let frame = app.render(80, 20);

        let next = frame.hits.rect_of(&Target::NextPage).unwrap();
        app.handle_action(Action::Click { x: next.x, y: next.y });
        assert_eq!(app.view.state().page(), 2);

        let header = frame.hits.rect_of(&Target::Header("age".into())).unwrap();
        app.handle_action(Action::Click {
            x: header.x,
            y: header.y,
        });
        assert!(app.view.state().sort().is_active("age"));

        // Clicking empty space does nothing
        app.handle_action(Action::Click { x: 79, y: 19 });
        assert!(app.view.state().sort().is_active("age"));
    }

    #[test]
    fn test_disabled_prev_ignores_clicks() {
        let mut app = app(10);
        let frame = app.render(80, 20);
        assert_eq!(frame.hits.rect_of(&Target::PrevPage), None);

        // Where the button is drawn
        app.handle_action(Action::Click { x: 2, y: 9 });
        assert_eq!(app.view.state().page(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_is_debounced() {
        let mut app = app(10);
        app.handle_action(Action::NextPage);
        type_str(&mut app, "user 1");

        assert_eq!(app.input.text(), "user 1");
        assert_eq!(app.view.state().query(), "");
        assert!(app.debouncer.is_pending());

        let query = app.queries.recv().await.unwrap();
        assert_eq!(query, "user 1");
        assert!(app.queries.try_recv().is_err());

        app.handle_query(query);
        assert_eq!(app.view.state().query(), "user 1");
        assert_eq!(app.view.state().page(), 1);
        // "User 1" and "User 10"
        assert_eq!(app.view.page().total_rows(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cursor_moves_do_not_search() {
        let mut app = app(3);
        app.handle_action(Action::Edit(Key::Left, Modifiers::new()));
        assert!(!app.debouncer.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(app.queries.try_recv().is_err());
    }
}
