use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Message;

/// A declarative keybinding map that can be composed and extended.
#[derive(Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Message)>,
}

impl Keymap {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding with no modifiers.
    pub fn bind(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::NONE, message));
        self
    }

    /// Add a key binding with Ctrl modifier.
    pub fn bind_ctrl(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::CONTROL, message));
        self
    }

    /// Look up a message for a key event.
    /// Later bindings take precedence over earlier ones.
    pub fn get(&self, event: &KeyEvent) -> Option<Message> {
        self.bindings
            .iter()
            .rev()
            .find(|(code, mods, _)| *code == event.code && event.modifiers.contains(*mods))
            .map(|(_, _, msg)| msg.clone())
    }

    /// Extend this keymap with another. The other keymap's bindings take precedence.
    pub fn extend(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

pub fn global_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('q'), Message::Quit)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
        .bind(KeyCode::Char('`'), Message::ToggleDebug)
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
}

pub fn stories_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::SelectNext)
        .bind(KeyCode::Down, Message::SelectNext)
        .bind(KeyCode::Char('k'), Message::SelectPrev)
        .bind(KeyCode::Up, Message::SelectPrev)
        .bind(KeyCode::Char('g'), Message::SelectFirst)
        .bind(KeyCode::Home, Message::SelectFirst)
        .bind(KeyCode::Char('G'), Message::SelectLast)
        .bind(KeyCode::End, Message::SelectLast)
        .bind_ctrl(KeyCode::Char('d'), Message::PageDown)
        .bind(KeyCode::PageDown, Message::PageDown)
        .bind_ctrl(KeyCode::Char('u'), Message::PageUp)
        .bind(KeyCode::PageUp, Message::PageUp)
        .bind(KeyCode::Char('o'), Message::OpenUrl)
        .bind(KeyCode::Enter, Message::OpenUrl)
        .bind(KeyCode::Char('m'), Message::LoadMore)
        .bind(KeyCode::Char(' '), Message::LoadMore)
}

pub fn handle_key(key: KeyEvent) -> Option<Message> {
    global_keymap().extend(stories_keymap()).get(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_key(make_key(KeyCode::Char('q'))),
            Some(Message::Quit)
        );
        assert_eq!(
            handle_key(make_key_with_mods(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_load_more_keys() {
        assert_eq!(
            handle_key(make_key(KeyCode::Char('m'))),
            Some(Message::LoadMore)
        );
        assert_eq!(
            handle_key(make_key(KeyCode::Char(' '))),
            Some(Message::LoadMore)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            handle_key(make_key(KeyCode::Char('j'))),
            Some(Message::SelectNext)
        );
        assert_eq!(
            handle_key(make_key(KeyCode::Up)),
            Some(Message::SelectPrev)
        );
        assert_eq!(
            handle_key(make_key(KeyCode::Char('G'))),
            Some(Message::SelectLast)
        );
        assert_eq!(
            handle_key(make_key_with_mods(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL
            )),
            Some(Message::PageDown)
        );
    }

    #[test]
    fn test_open_keys() {
        assert_eq!(
            handle_key(make_key(KeyCode::Enter)),
            Some(Message::OpenUrl)
        );
        assert_eq!(
            handle_key(make_key(KeyCode::Char('o'))),
            Some(Message::OpenUrl)
        );
    }

    #[test]
    fn test_keymap_extend_precedence() {
        let base = Keymap::new().bind(KeyCode::Char('x'), Message::Quit);
        let extended = base.extend(Keymap::new().bind(KeyCode::Char('x'), Message::LoadMore));

        let event = make_key(KeyCode::Char('x'));
        assert_eq!(extended.get(&event), Some(Message::LoadMore));
    }

    #[test]
    fn test_unknown_key_returns_none() {
        assert!(handle_key(make_key(KeyCode::F(12))).is_none());
    }
}
