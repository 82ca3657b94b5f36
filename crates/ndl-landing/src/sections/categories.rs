#![forbid(unsafe_code)]

//! Category grid, two per row.

use ndl_i18n::Translator;

use crate::data::{Category, group_thousands};
use crate::frame::{Frame, Line, Span, truncate_to_width};
use crate::theme;

const COLUMNS: usize = 2;

/// Render the grid.
pub fn render(categories: &[Category], tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    super::translated_heading(
        frame,
        tr,
        None,
        "exploreCategories.title",
        Some("exploreCategories.description"),
    );

    let cell = (width.saturating_sub(4) / COLUMNS).max(1);
    for row in categories.chunks(COLUMNS) {
        let mut line = Line::raw("  ");
        for category in row {
            let count = group_thousands(u64::from(category.count));
            let title = truncate_to_width(category.title, cell.saturating_sub(count.len() + 4));
            let used = crate::frame::display_width(&title) + count.len() + 2;
            line.push(Span::styled(format!("\u{25a0} {title}"), theme::body()));
            line.push(Span::raw(" ".repeat(cell.saturating_sub(used + 2).max(1))));
            line.push(Span::styled(count, theme::muted()));
            line.push(Span::raw("  "));
        }
        frame.push(line);
    }
    frame.blank();
    frame.push(Line::new().with(super::button(tr.t("exploreCategories.viewAllButton"))).centered(width));
    super::rule(frame);
}
