#![forbid(unsafe_code)]

//! Immersive exhibition promo.

use ndl_i18n::Translator;

use crate::frame::{Frame, Line};
use crate::theme;

/// Render the promo.
pub fn render(tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    super::translated_heading(
        frame,
        tr,
        Some("immersiveExhibition.label"),
        "immersiveExhibition.title",
        Some("immersiveExhibition.description"),
    );
    frame.push_wrapped(tr.t("immersiveExhibition.narrative"), theme::body(), 4);
    frame.blank();
    frame.push(Line::new().with(super::button(tr.t("immersiveExhibition.cta"))).centered(width));
    super::rule(frame);
}
