#![forbid(unsafe_code)]

//! Footer: institution blurb, link columns, copyright line.

use chrono::{DateTime, Datelike, Local, TimeZone};
use ndl_i18n::Translator;

use crate::frame::{Frame, Line, Span, truncate_to_width};
use crate::theme;

const COLUMNS: [(&str, &[&str]); 4] = [
    (
        "footer.collections",
        &["footer.browseCollections", "footer.recentAdditions", "footer.themes", "footer.exhibitions"],
    ),
    (
        "footer.aboutInstitution",
        &["footer.about", "footer.mission", "footer.news", "footer.careers", "footer.partnerships"],
    ),
    (
        "footer.legal",
        &["footer.researchers", "footer.terms", "footer.privacy", "footer.accessibility"],
    ),
    (
        "footer.contact",
        &["footer.address", "footer.city", "footer.phone", "footer.email"],
    ),
];

const BOTTOM_LINKS: [&str; 4] = [
    "footer.sitemap",
    "footer.status",
    "footer.feedback",
    "footer.reportIssue",
];

/// Calendar year of `at` in its own time zone.
#[must_use]
pub fn year_of<Tz: TimeZone>(at: &DateTime<Tz>) -> i32 {
    at.year()
}

/// The current year on the local clock.
#[must_use]
pub fn current_year() -> i32 {
    year_of(&Local::now())
}

/// Render the footer for `year`.
pub fn render(year: i32, tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    frame.blank();
    frame.push(Line::from_spans(vec![
        Span::styled("  \u{25c6} ", theme::label()),
        Span::styled(tr.t("footer.institution"), theme::title()),
    ]));
    frame.push_wrapped(tr.t("footer.institutionDescription"), theme::muted(), 4);
    frame.blank();

    let cell = (width.saturating_sub(2) / COLUMNS.len()).max(1);
    let rows = COLUMNS.iter().map(|(_, links)| links.len()).max().unwrap_or(0);
    let mut heads = Line::raw("  ");
    for (title, _) in COLUMNS {
        heads.push(Span::styled(pad_to(&tr.t(title).to_uppercase(), cell), theme::label()));
    }
    frame.push(heads);
    for row in 0..rows {
        let mut line = Line::raw("  ");
        for (_, links) in COLUMNS {
            let text = links.get(row).map(|k| tr.t(*k)).unwrap_or("");
            line.push(Span::styled(pad_to(text, cell), theme::body()));
        }
        frame.push(line);
    }
    frame.blank();
    super::rule(frame);

    let year = year.to_string();
    let notice = tr.format("footer.copyrightNotice", &[("year", &year)]);
    frame.push(Line::from_spans(vec![
        Span::styled(format!("  {notice} {}", tr.t("footer.institution")), theme::muted()),
        Span::raw(". "),
        Span::styled(tr.t("footer.allRights"), theme::muted()),
    ]));
    let mut links = Line::raw("  ");
    for (i, key) in BOTTOM_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled(" \u{b7} ", theme::rule()));
        }
        links.push(Span::styled(tr.t(*key), theme::body()));
    }
    frame.push(links);
}

fn pad_to(text: &str, cell: usize) -> String {
    let text = truncate_to_width(text, cell.saturating_sub(1));
    let used = crate::frame::display_width(&text);
    format!("{text}{}", " ".repeat(cell.saturating_sub(used)))
}
