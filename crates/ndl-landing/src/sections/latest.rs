#![forbid(unsafe_code)]

//! "Latest additions" carousel.

use ndl_core::{Carousel, CarouselItem};
use ndl_i18n::Translator;
use web_time::{Duration, Instant};

use crate::frame::{Frame, Line, Span, Style, truncate_with_ellipsis};
use crate::theme;

/// The carousel section.
#[derive(Debug, Clone)]
pub struct LatestAdditions {
    carousel: Carousel,
}

impl LatestAdditions {
    /// Page 0 of `items`, `page_size` cards per page.
    #[must_use]
    pub fn new(items: Vec<CarouselItem>, page_size: usize, transition: Duration) -> Self {
        Self {
            carousel: Carousel::new(items, page_size).with_transition_delay(transition),
        }
    }

    /// Next page (wraps).
    pub fn next(&mut self, now: Instant) {
        self.carousel.go_to_next(now);
    }

    /// Previous page (wraps).
    pub fn previous(&mut self, now: Instant) {
        self.carousel.go_to_previous(now);
    }

    /// Jump to a page by dot index.
    pub fn go_to(&mut self, page: usize, now: Instant) -> bool {
        self.carousel.go_to_page(page, now)
    }

    /// Settle the transition when due. Returns `true` when it settled.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel.tick(now)
    }

    /// Drop the pending reset.
    pub fn cancel(&mut self) {
        self.carousel.cancel();
    }

    /// Back to page 0 with nothing pending.
    pub fn reset(&mut self) {
        self.carousel.reset();
    }

    /// When the transition flag drops.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousel.next_deadline()
    }

    /// The controller.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }
}

/// Render the section.
pub fn render(section: &LatestAdditions, tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    let carousel = &section.carousel;
    super::translated_heading(
        frame,
        tr,
        None,
        "latestAdditions.title",
        Some("latestAdditions.description"),
    );

    let dim = |style: Style| {
        if carousel.is_transitioning() {
            theme::dimmed(style)
        } else {
            style
        }
    };

    let card_width = width.saturating_sub(6);
    for item in carousel.visible() {
        frame.push(Line::from_spans(vec![
            Span::raw("   "),
            Span::styled(format!(" {} ", item.category), dim(theme::badge())),
            Span::styled(format!("  {}", item.date), dim(theme::muted())),
        ]));
        frame.push(Line::from_spans(vec![
            Span::raw("   "),
            Span::styled(truncate_with_ellipsis(&item.title, card_width, "\u{2026}"), dim(theme::title())),
        ]));
        frame.push(Line::from_spans(vec![
            Span::raw("   "),
            Span::styled(
                truncate_with_ellipsis(&item.description, card_width, "\u{2026}"),
                dim(theme::body()),
            ),
        ]));
        frame.push(Line::from_spans(vec![
            Span::raw("   "),
            Span::styled(format!("{} \u{2192}", tr.t("latestAdditions.viewDocument")), dim(theme::label())),
        ]));
        frame.blank();
    }

    if carousel.page_count() > 0 {
        let mut nav = Line::from_spans(vec![Span::styled("\u{2039}  ", theme::button())]);
        for page in 0..carousel.page_count() {
            if page > 0 {
                nav.push(Span::raw(" "));
            }
            if page == carousel.current_page() {
                nav.push(Span::styled("\u{25cf}", theme::active()));
            } else {
                nav.push(Span::styled("\u{25cb}", theme::muted()));
            }
        }
        nav.push(Span::styled("  \u{203a}", theme::button()));
        frame.push(nav.centered(width));
    }
    super::rule(frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::latest_additions;
    use ndl_i18n::{Locale, landing_catalog};

    fn section() -> LatestAdditions {
        LatestAdditions::new(latest_additions(), 4, Duration::from_millis(300))
    }

    #[test]
    fn two_pages_of_six() {
        let s = section();
        assert_eq!(s.carousel().page_count(), 2);
        assert_eq!(s.carousel().visible().len(), 4);
    }

    #[test]
    fn next_then_settle() {
        let t0 = Instant::now();
        let mut s = section();
        s.next(t0);
        assert_eq!(s.carousel().current_page(), 1);
        assert!(s.carousel().is_transitioning());
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(300)));
        assert!(!s.tick(t0 + Duration::from_millis(299)));
        assert!(s.tick(t0 + Duration::from_millis(300)));
        assert!(!s.carousel().is_transitioning());
    }

    #[test]
    fn reset_returns_to_first_page() {
        let t0 = Instant::now();
        let mut s = section();
        s.previous(t0);
        assert_eq!(s.carousel().current_page(), 1);
        s.reset();
        assert_eq!(s.carousel().current_page(), 0);
        assert!(!s.carousel().is_transitioning());
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn render_shows_current_page_and_dots() {
        let catalog = landing_catalog().unwrap();
        let t0 = Instant::now();
        let mut s = section();
        s.go_to(1, t0);
        let mut frame = Frame::new(100, 40);
        render(&s, &Translator::new(&catalog, Locale::En), &mut frame);
        let text = frame.plain_text();
        assert!(text.contains("Moroccan Folk Art Collection"));
        assert!(text.contains("Moroccan Architecture Collection"));
        assert!(!text.contains("Royal Morocco Archives Collection"));
        assert!(text.contains("\u{25cb} \u{25cf}"));
    }

    #[test]
    fn cards_dim_while_transitioning() {
        let catalog = landing_catalog().unwrap();
        let t0 = Instant::now();
        let mut s = section();
        s.next(t0);
        let mut frame = Frame::new(100, 40);
        render(&s, &Translator::new(&catalog, Locale::En), &mut frame);
        let dimmed = frame
            .lines()
            .iter()
            .flat_map(|l| l.spans())
            .any(|span| span.text.contains("Moroccan Folk Art") && span.style.has(crate::frame::StyleFlags::DIM));
        assert!(dimmed);
    }

    #[test]
    fn empty_carousel_has_no_dots() {
        let catalog = landing_catalog().unwrap();
        let s = LatestAdditions::new(Vec::new(), 4, Duration::from_millis(300));
        let mut frame = Frame::new(80, 20);
        render(&s, &Translator::new(&catalog, Locale::En), &mut frame);
        assert!(!frame.plain_text().contains('\u{25cf}'));
    }
}
