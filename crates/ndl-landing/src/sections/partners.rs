#![forbid(unsafe_code)]

//! Partner resources.

use ndl_i18n::Translator;

use crate::data::Partner;
use crate::frame::{Frame, Line, Span};
use crate::theme;

/// Render the partner list and the closing call to action.
pub fn render(partners: &[Partner], tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    super::translated_heading(
        frame,
        tr,
        None,
        "partnerResources.title",
        Some("partnerResources.description"),
    );
    let cta = tr.t("partnerResources.cta");
    for partner in partners {
        frame.push(Line::from_spans(vec![
            Span::raw("  "),
            Span::styled(partner.name, theme::title()),
            Span::raw("  "),
            Span::styled(format!(" {} ", partner.category), theme::badge()),
            Span::raw("  "),
            Span::styled(format!("{cta} \u{2192}"), theme::label()),
        ]));
        frame.push_wrapped(partner.description, theme::muted(), 4);
    }
    frame.blank();
    frame.push(Line::styled(tr.t("partnerResources.footerText"), theme::body()).centered(width));
    frame.push(Line::new().with(super::button(tr.t("partnerResources.footerCta"))).centered(width));
    super::rule(frame);
}
