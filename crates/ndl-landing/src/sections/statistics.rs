#![forbid(unsafe_code)]

//! Headline statistics with the count-up animation.

use ndl_core::{CountUp, FrameRequest, format_compact};
use ndl_i18n::Translator;
use web_time::{Duration, Instant};

use crate::data::StatDefinition;
use crate::frame::{Frame, Line, Span};
use crate::theme;

const LABEL_FALLBACK: &str = "Our Scale";
const TITLE_FALLBACK: &str = "Trusted Institutional Authority";
const TRUST_FALLBACK: &str = "Representing the diverse heritage and knowledge of our nation, \
    curated and preserved for future generations.";

/// The statistics section and its animator.
#[derive(Debug, Clone)]
pub struct Statistics {
    defs: Vec<StatDefinition>,
    count_up: CountUp,
}

impl Statistics {
    /// Idle section over `defs`, animating for `duration`.
    #[must_use]
    pub fn new(defs: Vec<StatDefinition>, duration: Duration) -> Self {
        let count_up = CountUp::new(defs.iter().map(|d| d.metric.clone()).collect(), duration);
        Self { defs, count_up }
    }

    /// Begin counting up from 0.
    pub fn start(&mut self, now: Instant) -> FrameRequest {
        self.count_up.start(now)
    }

    /// Advance one frame.
    pub fn tick(&mut self, now: Instant) -> FrameRequest {
        self.count_up.tick(now)
    }

    /// Stop requesting frames.
    pub fn cancel(&mut self) {
        self.count_up.cancel();
    }

    /// Discard animation state; every value goes back to 0.
    pub fn reset(&mut self) {
        self.count_up = CountUp::new(self.count_up.metrics().to_vec(), self.count_up.duration());
    }

    /// Whether frames are still wanted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.count_up.is_running()
    }

    /// The underlying animator.
    #[must_use]
    pub fn count_up(&self) -> &CountUp {
        &self.count_up
    }

    /// Displayed value of `id`.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<u64> {
        self.count_up.value(id)
    }
}

/// Render the section.
pub fn render(stats: &Statistics, tr: &Translator<'_>, frame: &mut Frame) {
    let width = usize::from(frame.width());
    super::heading(
        frame,
        Some(tr.t_or("statistics.byTheNumbers", LABEL_FALLBACK)),
        tr.t_or("statistics.title", TITLE_FALLBACK),
        Some(tr.t_or("statistics.trust", TRUST_FALLBACK)),
    );

    let columns = stats.defs.len().max(1);
    let cell = (width / columns).max(1);
    let mut figures = Line::new();
    let mut labels = Line::new();
    for (def, (metric, value)) in stats.defs.iter().zip(stats.count_up.iter()) {
        let figure = format!("{}{}", format_compact(value), metric.suffix);
        let label = tr.t_or(def.label_key, def.label_fallback);
        figures.push(Span::styled(center_in(&figure, cell), theme::figure()));
        labels.push(Span::styled(center_in(label, cell), theme::muted()));
    }
    frame.push(figures);
    frame.push(labels);
    frame.blank();
    super::rule(frame);
}

fn center_in(text: &str, cell: usize) -> String {
    let text = crate::frame::truncate_to_width(text, cell);
    let used = crate::frame::display_width(&text);
    let left = cell.saturating_sub(used) / 2;
    let right = cell.saturating_sub(used + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::statistics;
    use ndl_i18n::{Locale, landing_catalog};

    fn section() -> Statistics {
        Statistics::new(statistics(), Duration::from_millis(2000))
    }

    #[test]
    fn values_start_at_zero() {
        let s = section();
        assert_eq!(s.value("documents"), Some(0));
        assert!(!s.is_running());
    }

    #[test]
    fn halfway_and_done() {
        let t0 = Instant::now();
        let mut s = section();
        assert_eq!(s.start(t0), FrameRequest::Continue);
        s.tick(t0 + Duration::from_millis(1000));
        assert_eq!(s.value("collections"), Some(225));
        assert_eq!(s.tick(t0 + Duration::from_millis(2000)), FrameRequest::Done);
        assert_eq!(s.value("documents"), Some(2_500_000));
        assert!(!s.is_running());
    }

    #[test]
    fn reset_returns_to_zero_and_allows_restart() {
        let t0 = Instant::now();
        let mut s = section();
        s.start(t0);
        s.tick(t0 + Duration::from_millis(2500));
        s.reset();
        assert_eq!(s.value("countries"), Some(0));
        assert_eq!(s.start(t0 + Duration::from_secs(5)), FrameRequest::Continue);
    }

    #[test]
    fn render_uses_fallbacks_in_english() {
        let catalog = landing_catalog().unwrap();
        let t0 = Instant::now();
        let mut s = section();
        s.start(t0);
        s.tick(t0 + Duration::from_secs(3));
        let mut frame = Frame::new(100, 30);
        render(&s, &Translator::new(&catalog, Locale::En), &mut frame);
        let text = frame.plain_text();
        assert!(text.contains("BY THE NUMBERS"));
        assert!(text.contains(TITLE_FALLBACK));
        assert!(text.contains("2.5M+"));
        assert!(text.contains("180K+"));
        assert!(text.contains("142"));
        assert!(text.contains("Active Users"));
    }

    #[test]
    fn render_in_french() {
        let catalog = landing_catalog().unwrap();
        let mut frame = Frame::new(120, 30);
        render(&section(), &Translator::new(&catalog, Locale::Fr), &mut frame);
        let text = frame.plain_text();
        assert!(text.contains(TITLE_FALLBACK));
        assert!(!text.contains("statistics.title"));
        assert!(text.contains("Pays"));
        assert!(text.contains("0+"));
    }
}
