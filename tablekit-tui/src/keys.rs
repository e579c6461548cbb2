//! Terminal input mapped to table actions.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// What the app should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevPage,
    NextPage,
    /// Sort by the n-th visible column (0-based).
    SortColumn(usize),
    /// Left click at a screen position.
    Click { x: u16, y: u16 },
    /// Anything else goes to the search box.
    Edit(Key, Modifiers),
    /// Terminal resized; redraw.
    Redraw,
}

/// Translate a crossterm event. Returns `None` for events the table ignores.
pub fn action_for(event: CrosstermEvent) -> Option<Action> {
    match event {
        CrosstermEvent::Key(key) => key_action(key),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                x: mouse.column,
                y: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Action::PrevPage),
            MouseEventKind::ScrollDown => Some(Action::NextPage),
            _ => None,
        },
        CrosstermEvent::Resize(_, _) => Some(Action::Redraw),
        _ => None,
    }
}

fn key_action(event: KeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = Key::from(event.code);
    let modifiers = Modifiers::from(event.modifiers);

    let action = match key {
        Key::Escape => Action::Quit,
        Key::Char('c') if modifiers.ctrl => Action::Quit,
        Key::PageUp => Action::PrevPage,
        Key::PageDown => Action::NextPage,
        Key::F(n @ 1..=12) => Action::SortColumn(usize::from(n - 1)),
        Key::Other => return None,
        _ => Action::Edit(key, modifiers),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(
            action_for(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_paging_and_sorting_keys() {
        assert_eq!(
            action_for(press(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(Action::NextPage)
        );
        assert_eq!(
            action_for(press(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(Action::PrevPage)
        );
        assert_eq!(
            action_for(press(KeyCode::F(3), KeyModifiers::NONE)),
            Some(Action::SortColumn(2))
        );
    }

    #[test]
    fn test_typing_goes_to_search() {
        assert_eq!(
            action_for(press(KeyCode::Char('b'), KeyModifiers::NONE)),
            Some(Action::Edit(Key::Char('b'), Modifiers::new()))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(action_for(release), None);
    }

    #[test]
    fn test_left_click() {
        let click = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(action_for(click), Some(Action::Click { x: 7, y: 3 }));
    }
}
