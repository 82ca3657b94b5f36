#![forbid(unsafe_code)]

//! Input events delivered to the page.
//!
//! Terminal input is normalized into [`Event`] before it reaches a model, so
//! tests can feed synthetic events without a terminal.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the terminal cannot tell.
//! - `Modifiers` use bitflags for easy combination.
//! - `Event::Tick` is produced by the host loop, never by the terminal.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Text from bracketed paste.
    Paste(String),

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),

    /// A scheduled frame is due.
    Tick,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a press event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Replace the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes the page reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Any key without a dedicated variant.
    Other,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is held.
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Event {
    /// Convert a crossterm event. Mouse input is not used and maps to `None`.
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event as ct;
        match event {
            ct::Event::Key(key) => Some(Self::Key(KeyEvent {
                code: map_key_code(key.code),
                modifiers: map_modifiers(key.modifiers),
                kind: match key.kind {
                    ct::KeyEventKind::Press => KeyEventKind::Press,
                    ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                    ct::KeyEventKind::Release => KeyEventKind::Release,
                },
            })),
            ct::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            ct::Event::Paste(text) => Some(Self::Paste(text)),
            ct::Event::FocusGained => Some(Self::Focus(true)),
            ct::Event::FocusLost => Some(Self::Focus(false)),
            _ => None,
        }
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    use crossterm::event::KeyCode as Ct;
    match code {
        Ct::Char(c) => KeyCode::Char(c),
        Ct::Enter => KeyCode::Enter,
        Ct::Esc => KeyCode::Escape,
        Ct::Backspace => KeyCode::Backspace,
        Ct::Tab => KeyCode::Tab,
        Ct::BackTab => KeyCode::BackTab,
        Ct::Home => KeyCode::Home,
        Ct::End => KeyCode::End,
        Ct::PageUp => KeyCode::PageUp,
        Ct::PageDown => KeyCode::PageDown,
        Ct::Up => KeyCode::Up,
        Ct::Down => KeyCode::Down,
        Ct::Left => KeyCode::Left,
        Ct::Right => KeyCode::Right,
        _ => KeyCode::Other,
    }
}

fn map_modifiers(modifiers: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers as Ct;
    let mut out = Modifiers::NONE;
    if modifiers.contains(Ct::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(Ct::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(Ct::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if modifiers.contains(Ct::SUPER) || modifiers.contains(Ct::META) {
        out |= Modifiers::SUPER;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event as ct;

    fn ct_key(code: ct::KeyCode, modifiers: ct::KeyModifiers) -> ct::Event {
        ct::Event::Key(ct::KeyEvent::new(code, modifiers))
    }

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn key_event_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
        assert!(!event.alt());
        assert!(!event.shift());
    }

    #[test]
    fn maps_arrows_and_escape() {
        let left = Event::from_crossterm(ct_key(ct::KeyCode::Left, ct::KeyModifiers::NONE));
        assert_eq!(left, Some(Event::Key(KeyEvent::new(KeyCode::Left))));
        let esc = Event::from_crossterm(ct_key(ct::KeyCode::Esc, ct::KeyModifiers::NONE));
        assert_eq!(esc, Some(Event::Key(KeyEvent::new(KeyCode::Escape))));
    }

    #[test]
    fn maps_ctrl_c() {
        let event = Event::from_crossterm(ct_key(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL));
        let Some(Event::Key(key)) = event else {
            panic!("expected key event");
        };
        assert!(key.is_char('c'));
        assert!(key.ctrl());
    }

    #[test]
    fn maps_combined_modifiers() {
        let mods = map_modifiers(ct::KeyModifiers::SHIFT | ct::KeyModifiers::ALT);
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::ALT);
    }

    #[test]
    fn unmapped_keys_become_other() {
        assert_eq!(map_key_code(ct::KeyCode::F(5)), KeyCode::Other);
        assert_eq!(map_key_code(ct::KeyCode::Insert), KeyCode::Other);
    }

    #[test]
    fn maps_resize_paste_focus() {
        assert_eq!(
            Event::from_crossterm(ct::Event::Resize(100, 30)),
            Some(Event::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(
            Event::from_crossterm(ct::Event::Paste("abc".into())),
            Some(Event::Paste("abc".into()))
        );
        assert_eq!(Event::from_crossterm(ct::Event::FocusLost), Some(Event::Focus(false)));
    }

    #[test]
    fn release_kind_is_preserved() {
        let mut key = ct::KeyEvent::new(ct::KeyCode::Enter, ct::KeyModifiers::NONE);
        key.kind = ct::KeyEventKind::Release;
        let Some(Event::Key(mapped)) = Event::from_crossterm(ct::Event::Key(key)) else {
            panic!("expected key event");
        };
        assert_eq!(mapped.kind, KeyEventKind::Release);
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert_eq!(KeyEventKind::default(), KeyEventKind::Press);
    }
}
