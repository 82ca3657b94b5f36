#![forbid(unsafe_code)]

//! The landing page model.
//!
//! [`LandingPage`] owns every section's state, routes keys to them, and asks
//! the runtime for frames only while something is moving: the statistics
//! count-up, or a pending carousel transition reset. Once both settle the
//! page stops returning `Cmd::Tick` and the frame chain ends.
//!
//! Time comes from a [`Clock`], so tests drive the page with a
//! [`ManualClock`](ndl_core::ManualClock) and synthetic keys.

use std::cell::Cell;
use std::collections::VecDeque;

use ndl_core::{COUNT_UP_DURATION, Clock, SystemClock, TRANSITION_DELAY};
use ndl_i18n::{Locale, LocaleSetting, StringCatalog, Translator};
use tracing::{debug, info};
use web_time::{Duration, Instant};

use crate::config::LandingConfig;
use crate::data::{self, Category, FeaturedDocument, Partner};
use crate::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use crate::frame::Frame;
use crate::program::{Cmd, Model};
use crate::sections::header::{HeaderState, NavItem};
use crate::sections::hero::SearchBox;
use crate::sections::latest::LatestAdditions;
use crate::sections::statistics::Statistics;
use crate::sections::{categories, exhibition, footer, header, hero, latest, partners, statistics};

/// Most recent activities kept for inspection.
const ACTIVITY_CAP: usize = 32;

/// Page construction parameters.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Cards per carousel page.
    pub page_size: usize,
    /// How long the carousel stays dimmed after a page change.
    pub transition: Duration,
    /// Length of the statistics count-up.
    pub count_up_duration: Duration,
    /// Frame cadence while the count-up runs.
    pub frame_interval: Duration,
    /// Starting language.
    pub locale: Locale,
    /// Year shown in the copyright line.
    pub year: i32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_size: 4,
            transition: TRANSITION_DELAY,
            count_up_duration: COUNT_UP_DURATION,
            frame_interval: Duration::from_millis(16),
            locale: Locale::default(),
            year: footer::current_year(),
        }
    }
}

impl PageOptions {
    /// Options taken from a validated configuration.
    #[must_use]
    pub fn from_config(config: &LandingConfig, year: i32) -> Self {
        Self {
            page_size: config.carousel.page_size,
            transition: config.transition_delay(),
            count_up_duration: config.count_up_duration(),
            frame_interval: config.frame_interval(),
            locale: config.locale(),
            year,
        }
    }
}

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page-level shortcuts.
    #[default]
    Page,
    /// Typing into the search box.
    Search,
    /// Moving through the language dropdown.
    LanguageMenu,
}

/// Something the visitor did that would leave the page in a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    /// Sign-in button.
    SignIn,
    /// Search submitted with this (trimmed) query.
    Search(String),
    /// Exhibition call to action.
    ExhibitionCta,
    /// Partner call to action.
    PartnerCta,
    /// Language switched.
    LanguageChanged(Locale),
    /// Nav item activated.
    NavSelected(NavItem),
}

/// Page messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key event.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },
    /// Pasted text.
    Paste(String),
    /// Terminal focus changed.
    Focus(bool),
    /// Frame callback.
    Tick,
    /// Tear down and restart both controllers.
    Remount,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Resize { width, height } => Msg::Resize { width, height },
            Event::Paste(text) => Msg::Paste(text),
            Event::Focus(gained) => Msg::Focus(gained),
            Event::Tick => Msg::Tick,
        }
    }
}

/// The whole landing page.
#[derive(Debug)]
pub struct LandingPage<C: Clock = SystemClock> {
    catalog: StringCatalog,
    locale: LocaleSetting,
    header: HeaderState,
    search: SearchBox,
    featured: FeaturedDocument,
    statistics: Statistics,
    latest: LatestAdditions,
    categories: Vec<Category>,
    partners: Vec<Partner>,
    year: i32,
    frame_interval: Duration,
    focus: Focus,
    scroll: usize,
    viewport: (u16, u16),
    // Scroll limit at `viewport`, filled by the last full render.
    scroll_limit: Cell<Option<usize>>,
    mounted: bool,
    activity: VecDeque<Activity>,
    clock: C,
}

impl<C: Clock> LandingPage<C> {
    /// Build an unmounted page with the bundled content.
    #[must_use]
    pub fn new(catalog: StringCatalog, options: PageOptions, clock: C) -> Self {
        Self {
            catalog,
            locale: LocaleSetting::new(options.locale),
            header: HeaderState::new(),
            search: SearchBox::new(),
            featured: data::featured_document(),
            statistics: Statistics::new(data::statistics(), options.count_up_duration),
            latest: LatestAdditions::new(data::latest_additions(), options.page_size, options.transition),
            categories: data::categories(),
            partners: data::partners(),
            year: options.year,
            frame_interval: options.frame_interval,
            focus: Focus::Page,
            scroll: 0,
            viewport: (80, 24),
            scroll_limit: Cell::new(None),
            mounted: false,
            activity: VecDeque::with_capacity(ACTIVITY_CAP),
            clock,
        }
    }

    /// Activate the page: start the count-up and begin requesting frames.
    pub fn mount(&mut self) -> Cmd<Msg> {
        let now = self.clock.now();
        self.mounted = true;
        self.statistics.start(now);
        info!(locale = %self.locale.get(), "landing page mounted");
        self.schedule(now)
    }

    /// Deactivate: cancel the count-up and any pending carousel reset.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.statistics.cancel();
        self.latest.cancel();
        self.mounted = false;
        info!("landing page unmounted");
    }

    /// Unmount, discard controller state, and mount again.
    pub fn remount(&mut self) -> Cmd<Msg> {
        self.scroll_limit.set(None);
        self.unmount();
        self.statistics.reset();
        self.latest.reset();
        self.scroll = 0;
        self.mount()
    }

    /// The frame request for the current state at `now`.
    ///
    /// `Cmd::Tick` at the frame interval while the count-up runs, else until
    /// the carousel reset is due, else nothing.
    #[must_use]
    pub fn schedule(&self, now: Instant) -> Cmd<Msg> {
        if !self.mounted {
            return Cmd::none();
        }
        let frame = self.statistics.is_running().then_some(self.frame_interval);
        let reset = self
            .latest
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now));
        match (frame, reset) {
            (Some(a), Some(b)) => Cmd::tick(a.min(b)),
            (Some(d), None) | (None, Some(d)) => Cmd::tick(d),
            (None, None) => Cmd::none(),
        }
    }

    /// Advance both controllers to the clock's current instant.
    pub fn on_tick(&mut self) -> Cmd<Msg> {
        self.scroll_limit.set(None);
        let now = self.clock.now();
        if self.mounted {
            self.statistics.tick(now);
            self.latest.tick(now);
        }
        self.schedule(now)
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.kind == KeyEventKind::Release {
            return Cmd::none();
        }
        // Scrolling moves the window over the content without changing it.
        if !self.is_scroll_key(&key) {
            self.scroll_limit.set(None);
        }
        if key.ctrl() && key.is_char('c') {
            return self.quit();
        }
        let cmd = match self.focus {
            Focus::Search => self.search_key(key),
            Focus::LanguageMenu => self.language_key(key),
            Focus::Page => self.page_key(key),
        };
        match cmd {
            Cmd::Quit | Cmd::Tick(_) => cmd,
            other => Cmd::batch(vec![other, self.schedule(self.clock.now())]),
        }
    }

    fn quit(&mut self) -> Cmd<Msg> {
        self.unmount();
        Cmd::quit()
    }

    fn search_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        match key.code {
            KeyCode::Enter => {
                let query = self.search.submit();
                self.search.blur();
                self.focus = Focus::Page;
                self.record(Activity::Search(query));
            }
            KeyCode::Escape => {
                self.search.blur();
                self.focus = Focus::Page;
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Char(ch) if !key.ctrl() && !key.alt() => self.search.insert(ch),
            _ => {}
        }
        Cmd::none()
    }

    fn language_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        match key.code {
            KeyCode::Up => self.header.move_language_cursor(-1),
            KeyCode::Down => self.header.move_language_cursor(1),
            KeyCode::Enter => {
                if let Some(locale) = self.header.choose_language() {
                    self.set_locale(locale);
                }
                self.focus = Focus::Page;
            }
            KeyCode::Escape | KeyCode::Char('g') => {
                self.header.close_language_menu();
                self.focus = Focus::Page;
            }
            _ => {}
        }
        Cmd::none()
    }

    fn page_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        let now = self.clock.now();
        let page = usize::from(self.viewport.1.saturating_sub(1).max(1));
        match key.code {
            KeyCode::Char('q') => return self.quit(),
            KeyCode::Left => self.latest.previous(now),
            KeyCode::Right => self.latest.next(now),
            KeyCode::Char(d @ '1'..='9') => {
                let index = d as usize - '1' as usize;
                if !self.latest.go_to(index, now) {
                    debug!(index, "no such carousel page");
                }
            }
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(page as isize)),
            KeyCode::PageDown => self.scroll_by(page as isize),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Char('/') => {
                self.search.focus();
                self.focus = Focus::Search;
            }
            KeyCode::Char('g') => {
                self.header.open_language_menu(self.locale.get());
                self.focus = Focus::LanguageMenu;
            }
            KeyCode::Char('t') => {
                let next = self.locale.get().toggled();
                self.set_locale(next);
            }
            KeyCode::Tab => {
                let item = self.header.cycle(true);
                self.record(Activity::NavSelected(item));
            }
            KeyCode::BackTab => {
                let item = self.header.cycle(false);
                self.record(Activity::NavSelected(item));
            }
            KeyCode::Char('m') => {
                self.header.toggle_mobile_menu();
            }
            KeyCode::Char('s') => {
                self.record(Activity::SignIn);
                return Cmd::log("sign-in requested");
            }
            KeyCode::Char('x') => {
                self.record(Activity::ExhibitionCta);
                return Cmd::log("exhibition call to action");
            }
            KeyCode::Char('p') => {
                self.record(Activity::PartnerCta);
                return Cmd::log("partner call to action");
            }
            KeyCode::Char('r') => return self.remount(),
            _ => {}
        }
        Cmd::none()
    }

    fn set_locale(&mut self, locale: Locale) {
        if self.locale.set(locale) {
            info!(locale = %locale, "language changed");
            self.record(Activity::LanguageChanged(locale));
        }
    }

    fn record(&mut self, activity: Activity) {
        debug!(?activity, "activity");
        if self.activity.len() == ACTIVITY_CAP {
            self.activity.pop_front();
        }
        self.activity.push_back(activity);
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll = self.scroll.min(max).saturating_add_signed(delta).min(max);
    }

    fn is_scroll_key(&self, key: &KeyEvent) -> bool {
        self.focus == Focus::Page
            && !key.ctrl()
            && matches!(
                key.code,
                KeyCode::Up
                    | KeyCode::Down
                    | KeyCode::PageUp
                    | KeyCode::PageDown
                    | KeyCode::Home
                    | KeyCode::End
            )
    }

    /// Largest scroll offset for the current viewport and content.
    ///
    /// Reuses the limit recorded by the last render at the viewport size and
    /// only lays the page out again when content or size changed since.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        if let Some(limit) = self.scroll_limit.get() {
            return limit;
        }
        let (width, height) = self.viewport;
        let mut frame = Frame::new(width, height);
        self.render(&mut frame);
        frame.max_scroll()
    }

    /// Translator for the current language.
    #[must_use]
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.catalog, self.locale.get())
    }

    /// Draw every section into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let tr = self.translator();
        header::render(&self.header, &tr, frame);
        hero::render(&self.search, &self.featured, &tr, frame);
        statistics::render(&self.statistics, &tr, frame);
        latest::render(&self.latest, &tr, frame);
        exhibition::render(&tr, frame);
        categories::render(&self.categories, &tr, frame);
        partners::render(&self.partners, &tr, frame);
        footer::render(self.year, &tr, frame);
        frame.set_scroll(self.scroll);
        if (frame.width(), frame.height()) == self.viewport {
            self.scroll_limit.set(Some(frame.max_scroll()));
        }
    }

    /// The full page as plain text.
    #[must_use]
    pub fn render_text(&self, width: u16, height: u16) -> String {
        let mut frame = Frame::new(width, height);
        self.render(&mut frame);
        frame.plain_text()
    }

    /// Current language.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Number of effective language changes.
    #[must_use]
    pub fn locale_changes(&self) -> u64 {
        self.locale.changes()
    }

    /// Where keys go.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Header state.
    #[must_use]
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Search box state.
    #[must_use]
    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    /// Statistics section.
    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Carousel section.
    #[must_use]
    pub fn latest(&self) -> &LatestAdditions {
        &self.latest
    }

    /// Recorded activities, oldest first.
    pub fn activity(&self) -> impl Iterator<Item = &Activity> {
        self.activity.iter()
    }

    /// Scroll offset, clamped to the current content.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll.min(self.max_scroll())
    }

    /// Whether the page is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl<C: Clock> Model for LandingPage<C> {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        self.mount()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        if matches!(msg, Msg::Resize { .. } | Msg::Paste(_)) {
            self.scroll_limit.set(None);
        }
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Resize { width, height } => {
                self.viewport = (width.max(1), height.max(1));
                Cmd::none()
            }
            Msg::Paste(text) => {
                if self.focus == Focus::Search {
                    self.search.insert_str(&text);
                }
                Cmd::none()
            }
            Msg::Focus(gained) => {
                debug!(gained, "terminal focus changed");
                Cmd::none()
            }
            Msg::Tick => self.on_tick(),
            Msg::Remount => self.remount(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        self.render(frame);
    }
}
