#![forbid(unsafe_code)]

//! Hero: title, search box, featured document card.

use ndl_i18n::Translator;
use tracing::info;

use crate::data::FeaturedDocument;
use crate::frame::{Frame, Line, Span, truncate_with_ellipsis, wrap};
use crate::theme;

use super::button;

/// Rows of description shown on the featured card.
const CARD_DESCRIPTION_ROWS: usize = 3;

/// Search input state.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
    focused: bool,
    last_submitted: Option<String>,
}

impl SearchBox {
    /// Empty, unfocused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Release keyboard focus. The typed text is kept.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Whether the box has focus.
    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Append a character. Control characters are ignored.
    pub fn insert(&mut self, ch: char) {
        if !ch.is_control() {
            self.query.push(ch);
        }
    }

    /// Append pasted text, dropping control characters.
    pub fn insert_str(&mut self, text: &str) {
        self.query.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Clear the typed text.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Current text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Submit the current text, trimmed. Empty queries are submitted too.
    pub fn submit(&mut self) -> String {
        let query = self.query.trim().to_string();
        info!(query = %query, "search submitted");
        self.last_submitted = Some(query.clone());
        query
    }

    /// The most recently submitted query.
    #[must_use]
    pub fn last_submitted(&self) -> Option<&str> {
        self.last_submitted.as_deref()
    }
}

/// Render the hero.
pub fn render(search: &SearchBox, featured: &FeaturedDocument, tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    frame.blank();
    for row in wrap(tr.t("hero.title"), width.saturating_sub(4)) {
        frame.push(Line::styled(row, theme::title()).centered(width));
    }
    for row in wrap(tr.t("hero.subtitle"), width.saturating_sub(8)) {
        frame.push(Line::styled(row, theme::muted()).centered(width));
    }
    frame.blank();

    let search_label = button(tr.t("hero.searchButton"));
    let field_width = width
        .saturating_sub(search_label.width() + 6)
        .clamp(8, 60);
    let (text, style) = if search.query.is_empty() && !search.focused {
        (tr.t("hero.searchPlaceholder").to_string(), theme::muted())
    } else {
        let cursor = if search.focused { "\u{2588}" } else { "" };
        (format!("{}{cursor}", search.query), theme::body())
    };
    let shown = truncate_with_ellipsis(&text, field_width, "\u{2026}");
    let pad = field_width.saturating_sub(crate::frame::display_width(&shown));
    let field_style = if search.focused { theme::active() } else { theme::rule() };
    let field = Line::from_spans(vec![
        Span::styled("\u{2502} ", field_style),
        Span::styled(shown, style),
        Span::raw(" ".repeat(pad)),
        Span::styled(" \u{2502} ", field_style),
        search_label,
    ]);
    frame.push(field.centered(width));
    frame.blank();

    let card_width = width.saturating_sub(8).min(72);
    let indent = width.saturating_sub(card_width) / 2;
    let pad = " ".repeat(indent);
    frame.push(
        Line::raw(pad.clone()).with(Span::styled(tr.t("hero.featuredLabel").to_uppercase(), theme::label())),
    );
    frame.push(Line::from_spans(vec![
        Span::raw(pad.clone()),
        Span::styled(featured.title, theme::title()),
        Span::styled(format!("  {}", featured.year), theme::muted()),
    ]));
    frame.push(Line::from_spans(vec![
        Span::raw(pad.clone()),
        Span::styled(format!(" {} ", featured.category), theme::badge()),
    ]));
    let rows = wrap(featured.description, card_width);
    let truncated = rows.len() > CARD_DESCRIPTION_ROWS;
    for (i, row) in rows.into_iter().take(CARD_DESCRIPTION_ROWS).enumerate() {
        let row = if truncated && i + 1 == CARD_DESCRIPTION_ROWS {
            truncate_with_ellipsis(&format!("{row} \u{2026}"), card_width, "\u{2026}")
        } else {
            row
        };
        frame.push(Line::raw(pad.clone()).with(Span::styled(row, theme::body())));
    }
    super::rule(frame);
}
