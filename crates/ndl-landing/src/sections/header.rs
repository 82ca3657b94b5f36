#![forbid(unsafe_code)]

//! Site header: logo, navigation, language selector, mobile menu, sign-in.

use ndl_i18n::{Locale, Translator};
use tracing::debug;

use crate::frame::{Frame, Line, Span, Style, display_width};
use crate::theme;

use super::{button, rule};

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    /// About the institution.
    About,
    /// Collections (the default active item).
    Collections,
    /// Themes.
    Themes,
    /// Exhibitions.
    Exhibitions,
    /// Resources.
    Resources,
}

impl NavItem {
    /// Display order.
    pub const ALL: [NavItem; 5] = [
        NavItem::About,
        NavItem::Collections,
        NavItem::Themes,
        NavItem::Exhibitions,
        NavItem::Resources,
    ];

    /// Catalog key of the label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::About => "header.about",
            Self::Collections => "header.collections",
            Self::Themes => "header.themes",
            Self::Exhibitions => "header.exhibitions",
            Self::Resources => "header.resources",
        }
    }

    /// In-page anchor.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "#about",
            Self::Collections => "#collections",
            Self::Themes => "#themes",
            Self::Exhibitions => "#exhibitions",
            Self::Resources => "#resources",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|n| *n == self).unwrap_or(0)
    }
}

/// Interactive header state.
#[derive(Debug, Clone)]
pub struct HeaderState {
    active: NavItem,
    mobile_menu_open: bool,
    language_cursor: Option<usize>,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderState {
    /// Collections active, all menus closed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: NavItem::Collections,
            mobile_menu_open: false,
            language_cursor: None,
        }
    }

    /// Make `item` active and close the mobile menu.
    pub fn select(&mut self, item: NavItem) {
        self.active = item;
        self.mobile_menu_open = false;
        debug!(item = item.anchor(), "nav item selected");
    }

    /// Activate the next (or previous) nav item, wrapping.
    pub fn cycle(&mut self, forward: bool) -> NavItem {
        let n = NavItem::ALL.len();
        let idx = self.active.index();
        let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
        self.select(NavItem::ALL[next]);
        self.active
    }

    /// Currently active item.
    #[inline]
    #[must_use]
    pub fn active(&self) -> NavItem {
        self.active
    }

    /// Open or close the mobile menu. Returns the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Whether the mobile menu is open.
    #[inline]
    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Open the language dropdown with the cursor on `current`.
    pub fn open_language_menu(&mut self, current: Locale) {
        let idx = Locale::ALL.iter().position(|l| *l == current).unwrap_or(0);
        self.language_cursor = Some(idx);
    }

    /// Close the language dropdown.
    pub fn close_language_menu(&mut self) {
        self.language_cursor = None;
    }

    /// Whether the language dropdown is open.
    #[inline]
    #[must_use]
    pub fn is_language_menu_open(&self) -> bool {
        self.language_cursor.is_some()
    }

    /// Move the dropdown cursor by `delta`, wrapping. No-op when closed.
    pub fn move_language_cursor(&mut self, delta: isize) {
        if let Some(cursor) = self.language_cursor.as_mut() {
            let n = Locale::ALL.len() as isize;
            *cursor = (*cursor as isize + delta).rem_euclid(n) as usize;
        }
    }

    /// Locale under the dropdown cursor.
    #[must_use]
    pub fn highlighted_language(&self) -> Option<Locale> {
        self.language_cursor.map(|i| Locale::ALL[i])
    }

    /// Confirm the highlighted language and close the dropdown.
    pub fn choose_language(&mut self) -> Option<Locale> {
        let chosen = self.highlighted_language();
        self.language_cursor = None;
        chosen
    }
}

/// Render the header.
pub fn render(state: &HeaderState, tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    let current = tr.locale();

    let mut top = Line::from_spans(vec![
        Span::styled("\u{25c6} ", theme::label()),
        Span::styled(tr.t("footer.institution"), theme::title()),
    ]);
    let right = Line::from_spans(vec![
        Span::styled(format!("{}: ", tr.t("header.language")), theme::muted()),
        Span::styled(format!("{} \u{25be}", current.native_label()), theme::body()),
        Span::raw("  "),
        button(tr.t("header.signIn")),
    ]);
    let gap = width.saturating_sub(top.width() + right.width()).max(2);
    top.push(Span::raw(" ".repeat(gap)));
    for span in right.spans() {
        top.push(span.clone());
    }
    frame.push(top);

    if let Some(cursor) = state.language_cursor {
        for (i, locale) in Locale::ALL.iter().enumerate() {
            let marker = if i == cursor { "\u{203a} " } else { "  " };
            let style = if *locale == current { theme::active() } else { theme::body() };
            let entry_width = display_width(marker) + display_width(locale.native_label());
            let pad = width.saturating_sub(entry_width + 2);
            frame.push(
                Line::raw(" ".repeat(pad))
                    .with(Span::raw(marker))
                    .with(Span::styled(locale.native_label(), style)),
            );
        }
    }

    let mut nav = Line::new();
    for (i, item) in NavItem::ALL.iter().enumerate() {
        if i > 0 {
            nav.push(Span::raw("   "));
        }
        let style: Style = if *item == state.active { theme::active() } else { theme::body() };
        nav.push(Span::styled(tr.t(item.key()), style));
    }
    frame.push(nav.centered(width));

    if state.mobile_menu_open {
        for item in NavItem::ALL {
            let marker = if item == state.active { "\u{25b8} " } else { "  " };
            frame.push(Line::from_spans(vec![
                Span::raw(format!("  {marker}")),
                Span::styled(tr.t(item.key()), theme::body()),
            ]));
        }
    }
    rule(frame);
}
