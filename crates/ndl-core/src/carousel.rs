#![forbid(unsafe_code)]

//! Paginated carousel with circular navigation.
//!
//! A [`Carousel`] shows a fixed list in fixed-size pages. Navigation wraps
//! in both directions and raises a short-lived transitioning flag that the
//! view uses to dim the grid while the page changes.
//!
//! # Invariants
//!
//! 1. `page_count() == ceil(len / page_size)`, and `0` when the list is
//!    empty or `page_size == 0`.
//! 2. `current_page() < page_count()` whenever `page_count() > 0`, and `0`
//!    otherwise.
//! 3. `visible()` never pads and never exceeds `page_size` items.
//! 4. Every navigation call re-arms the transition reset; an earlier reset
//!    never clears the flag raised by a later navigation.
//!
//! # Failure Modes
//!
//! - Empty list or zero page size: every navigation call is a no-op.
//! - `go_to_page` with an out-of-range index: ignored.

use web_time::{Duration, Instant};

use crate::deferred::Deferred;

/// How long the transitioning flag stays raised after a navigation.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// One card of the "latest additions" carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Category tag shown as a badge.
    pub category: String,
    /// Image reference, carried but never loaded.
    pub image: String,
    /// Human-readable date label ("Added 2 days ago").
    pub date: String,
}

impl CarouselItem {
    /// Build an item from string-like parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            image: image.into(),
            date: date.into(),
        }
    }
}

/// Page-at-a-time view over a fixed item list.
#[derive(Debug, Clone)]
pub struct Carousel<T = CarouselItem> {
    items: Vec<T>,
    page_size: usize,
    total_pages: usize,
    current_page: usize,
    transitioning: bool,
    transition_delay: Duration,
    reset: Deferred,
}

impl<T> Carousel<T> {
    /// Create a carousel at page 0 with the default transition delay.
    #[must_use]
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            items.len().div_ceil(page_size)
        };
        Self {
            items,
            page_size,
            total_pages,
            current_page: 0,
            transitioning: false,
            transition_delay: TRANSITION_DELAY,
            reset: Deferred::new(),
        }
    }

    /// Override how long the transitioning flag stays raised (builder pattern).
    #[must_use]
    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    /// Items on the current page, clipped to the list bounds.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        if self.total_pages == 0 {
            return &[];
        }
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Items on an arbitrary page; empty when `page` is out of range.
    #[must_use]
    pub fn page(&self, page: usize) -> &[T] {
        if page >= self.total_pages {
            return &[];
        }
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Advance one page, wrapping from the last page to the first.
    pub fn go_to_next(&mut self, now: Instant) {
        if self.total_pages == 0 {
            return;
        }
        self.current_page = (self.current_page + 1) % self.total_pages;
        self.begin_transition(now);
    }

    /// Go back one page, wrapping from the first page to the last.
    pub fn go_to_previous(&mut self, now: Instant) {
        if self.total_pages == 0 {
            return;
        }
        self.current_page = (self.current_page + self.total_pages - 1) % self.total_pages;
        self.begin_transition(now);
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the index was accepted.
    pub fn go_to_page(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.total_pages {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                index,
                total_pages = self.total_pages,
                "carousel page request out of range"
            );
            return false;
        }
        self.current_page = index;
        self.begin_transition(now);
        true
    }

    /// Clear the transitioning flag if the armed reset is due.
    ///
    /// Returns `true` when the flag was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.poll(now) {
            self.transitioning = false;
            #[cfg(feature = "tracing")]
            tracing::debug!(page = self.current_page, "carousel transition settled");
            return true;
        }
        false
    }

    /// Drop any pending transition reset and lower the flag.
    ///
    /// Called when the owning view is torn down.
    pub fn cancel(&mut self) {
        self.reset.cancel();
        self.transitioning = false;
    }

    /// Return to page 0 with nothing pending, as on a fresh mount.
    pub fn reset(&mut self) {
        self.cancel();
        self.current_page = 0;
    }

    fn begin_transition(&mut self, now: Instant) {
        self.transitioning = true;
        self.reset.arm(now, self.transition_delay);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            page = self.current_page,
            total_pages = self.total_pages,
            generation = self.reset.generation(),
            "carousel navigated"
        );
    }

    /// Number of pages (one navigation dot each).
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total_pages
    }

    /// Zero-based index of the page on screen.
    #[inline]
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a page change is still settling.
    #[inline]
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// When the transitioning flag will drop, if it is raised.
    #[inline]
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reset.deadline()
    }

    /// How long the flag stays raised after a navigation.
    #[inline]
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    /// All items, in order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn six_items_make_two_pages() {
        let c = Carousel::new(numbered(6), 4);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.visible(), &[1, 2, 3, 4]);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn last_page_is_not_padded() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        c.go_to_next(t0);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.visible(), &[5, 6]);
    }

    #[test]
    fn next_from_last_page_wraps_to_first() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        c.go_to_next(t0);
        c.go_to_next(t0);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn previous_from_first_page_wraps_to_last() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(9), 4);
        c.go_to_previous(t0);
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.visible(), &[9]);
    }

    #[test]
    fn go_to_page_out_of_range_is_ignored() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        assert!(!c.go_to_page(2, t0));
        assert!(!c.go_to_page(usize::MAX, t0));
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
        assert!(c.go_to_page(1, t0));
        assert_eq!(c.current_page(), 1);
        assert!(c.is_transitioning());
    }

    #[test]
    fn empty_list_has_no_pages() {
        let t0 = Instant::now();
        let mut c: Carousel<usize> = Carousel::new(Vec::new(), 4);
        assert_eq!(c.page_count(), 0);
        assert!(c.visible().is_empty());
        c.go_to_next(t0);
        c.go_to_previous(t0);
        assert!(!c.go_to_page(0, t0));
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn zero_page_size_has_no_pages() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 0);
        assert_eq!(c.page_count(), 0);
        assert!(c.visible().is_empty());
        c.go_to_next(t0);
        c.go_to_previous(t0);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn transition_clears_after_delay() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        c.go_to_next(t0);
        assert!(c.is_transitioning());
        assert!(!c.tick(t0 + Duration::from_millis(299)));
        assert!(c.is_transitioning());
        assert!(c.tick(t0 + TRANSITION_DELAY));
        assert!(!c.is_transitioning());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn rapid_navigation_keeps_latest_delay() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(12), 4);
        c.go_to_next(t0);
        c.go_to_next(t0 + Duration::from_millis(200));
        assert_eq!(c.current_page(), 2);
        // The first reset would have been due at 300ms; it was superseded.
        assert!(!c.tick(t0 + Duration::from_millis(300)));
        assert!(c.is_transitioning());
        assert!(c.tick(t0 + Duration::from_millis(500)));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn custom_transition_delay() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4).with_transition_delay(Duration::from_millis(50));
        c.go_to_next(t0);
        assert_eq!(c.next_deadline(), Some(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn cancel_drops_pending_reset() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        c.go_to_next(t0);
        c.cancel();
        assert!(!c.is_transitioning());
        assert_eq!(c.next_deadline(), None);
        assert!(!c.tick(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn reset_returns_to_first_page() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(6), 4);
        c.go_to_previous(t0);
        assert_eq!(c.current_page(), 1);
        c.reset();
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn page_accessor_matches_visible() {
        let t0 = Instant::now();
        let mut c = Carousel::new(numbered(10), 3);
        for p in 0..c.page_count() {
            c.go_to_page(p, t0);
            assert_eq!(c.page(p), c.visible());
        }
        assert!(c.page(c.page_count()).is_empty());
    }
}
