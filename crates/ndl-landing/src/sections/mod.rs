#![forbid(unsafe_code)]

//! Page sections, top to bottom.
//!
//! Each section renders into the shared [`Frame`] with a [`Translator`]
//! bound to the current language. Sections with interactive state keep it
//! in their own struct; the page routes input to them.

pub mod categories;
pub mod exhibition;
pub mod footer;
pub mod header;
pub mod hero;
pub mod latest;
pub mod partners;
pub mod statistics;

use ndl_i18n::Translator;

use crate::frame::{Frame, Line, Span};
use crate::theme;

/// Full-width horizontal rule.
pub(crate) fn rule(frame: &mut Frame) {
    let width = usize::from(frame.width());
    frame.push(Line::styled("\u{2500}".repeat(width), theme::rule()));
}

/// Centered section heading: optional eyebrow label, title, optional blurb.
pub(crate) fn heading(frame: &mut Frame, label: Option<&str>, title: &str, blurb: Option<&str>) {
    let width = usize::from(frame.width());
    frame.blank();
    if let Some(label) = label {
        frame.push(Line::styled(label.to_uppercase(), theme::label()).centered(width));
    }
    frame.push(Line::styled(title, theme::title()).centered(width));
    if let Some(blurb) = blurb {
        for row in crate::frame::wrap(blurb, width.saturating_sub(4)) {
            frame.push(Line::styled(row, theme::muted()).centered(width));
        }
    }
    frame.blank();
}

/// `[ label ]` styled as a button.
pub(crate) fn button(label: &str) -> Span {
    Span::styled(format!("[ {label} ]"), theme::button())
}

/// Section heading resolved through the catalog.
pub(crate) fn translated_heading(
    frame: &mut Frame,
    tr: &Translator<'_>,
    label_key: Option<&str>,
    title_key: &str,
    blurb_key: Option<&str>,
) {
    let label = label_key.map(|k| tr.t(k));
    let blurb = blurb_key.map(|k| tr.t(k));
    heading(frame, label, tr.t(title_key), blurb);
}
