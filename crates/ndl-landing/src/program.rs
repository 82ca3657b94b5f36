#![forbid(unsafe_code)]

//! Elm-style runtime for the landing page.
//!
//! The runtime owns the update/view loop. State lives in a [`Model`];
//! side effects are requested by returning [`Cmd`] values from `init()` and
//! `update()`.
//!
//! # Frame scheduling
//!
//! `Cmd::Tick(d)` asks for one `Event::Tick` after `d`. A newer tick request
//! replaces a pending one, so a model that re-requests on every update keeps
//! at most one frame in flight and stops the chain simply by not asking.
//!
//! # Example
//!
//! ```ignore
//! use ndl_landing::program::{Cmd, Model, Program, ProgramConfig};
//!
//! let mut program = Program::with_config(page, ProgramConfig::fullscreen())?;
//! program.run()?;
//! ```

use std::io::{self, Stdout, Write};

use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use tracing::{debug, info};
use web_time::{Duration, Instant};

use crate::event::Event;
use crate::frame::{Color, Frame, Style, StyleFlags};

/// Application state and behavior.
pub trait Model: Sized {
    /// Messages that drive state transitions. Must be convertible from
    /// terminal events.
    type Message: From<Event> + Send + 'static;

    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// The core state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by a model.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands.
    Batch(Vec<Cmd<M>>),
    /// Execute commands in order.
    Sequence(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Deliver `Event::Tick` after a duration, replacing any pending tick.
    Tick(Duration),
    /// Emit a log line. The terminal owns stdout, so this goes to the
    /// tracing subscriber.
    Log(String),
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Create a sequence, collapsing trivial cases.
    pub fn sequence(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Sequence(cmds),
        }
    }

    /// Create a tick command.
    #[inline]
    pub fn tick(duration: Duration) -> Self {
        Self::Tick(duration)
    }

    /// Whether this is `Cmd::None`.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Runtime state shared by the terminal loop and headless drivers.
///
/// Interprets commands against a model without touching the terminal.
#[derive(Debug, Clone)]
pub struct Scheduler {
    running: bool,
    next_tick: Option<Instant>,
    dirty: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Running, dirty, no tick pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: true,
            next_tick: None,
            dirty: true,
        }
    }

    /// Tell the model its screen size, then run its `init` command.
    pub fn start<M: Model>(&mut self, model: &mut M, size: (u16, u16), now: Instant) {
        let (width, height) = size;
        self.dispatch(model, Event::Resize { width, height }, now);
        let cmd = model.init();
        self.execute(model, cmd, now);
    }

    /// Execute `cmd` (and anything it produces) at `now`.
    pub fn execute<M: Model>(&mut self, model: &mut M, cmd: Cmd<M::Message>, now: Instant) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            Cmd::Msg(m) => {
                let next = model.update(m);
                self.dirty = true;
                self.execute(model, next, now);
            }
            Cmd::Batch(cmds) | Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute(model, c, now);
                }
            }
            Cmd::Tick(delay) => {
                self.next_tick = Some(now + delay);
            }
            Cmd::Log(text) => {
                info!(target: "ndl_landing::log", "{}", text.trim_end());
            }
        }
    }

    /// Feed an event to the model.
    pub fn dispatch<M: Model>(&mut self, model: &mut M, event: Event, now: Instant) {
        let cmd = model.update(M::Message::from(event));
        self.dirty = true;
        self.execute(model, cmd, now);
    }

    /// If the pending tick is due, consume it and deliver `Event::Tick`.
    ///
    /// Returns `true` when a tick was delivered.
    pub fn fire_due<M: Model>(&mut self, model: &mut M, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if deadline <= now => {
                self.next_tick = None;
                self.dispatch(model, Event::Tick, now);
                true
            }
            _ => false,
        }
    }

    /// How long to wait for input: until the pending tick, capped by `max`.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_tick {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Instant of the pending tick, if any.
    #[inline]
    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Whether the loop should continue.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a redraw is needed.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current state as drawn.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Force a redraw.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Upper bound on one input poll.
    pub poll_timeout: Duration,
    /// Enable bracketed paste.
    pub bracketed_paste: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alt_screen: false,
            poll_timeout: Duration::from_millis(100),
            bracketed_paste: true,
        }
    }
}

impl ProgramConfig {
    /// Config for fullscreen applications.
    #[must_use]
    pub fn fullscreen() -> Self {
        Self {
            alt_screen: true,
            ..Default::default()
        }
    }

    /// Set the poll timeout.
    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }
}

/// Raw mode and screen state, restored on drop.
///
/// Tracks what was enabled so cleanup only undoes what happened.
#[derive(Debug)]
pub struct TerminalSession {
    alt_screen_enabled: bool,
    bracketed_paste_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode and optionally the alternate screen.
    pub fn new(config: &ProgramConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        info!("terminal raw mode enabled");
        let mut session = Self {
            alt_screen_enabled: false,
            bracketed_paste_enabled: false,
        };
        let mut stdout = io::stdout();
        if config.alt_screen {
            crossterm::execute!(
                stdout,
                terminal::EnterAlternateScreen,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            session.alt_screen_enabled = true;
            info!("alternate screen enabled");
        }
        if config.bracketed_paste {
            crossterm::execute!(stdout, crossterm::event::EnableBracketedPaste)?;
            session.bracketed_paste_enabled = true;
        }
        crossterm::execute!(stdout, cursor::Hide)?;
        Ok(session)
    }

    /// Current terminal size (columns, rows), never smaller than 1x1.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (w, h) = terminal::size()?;
        Ok((w.max(1), h.max(1)))
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        if self.bracketed_paste_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableBracketedPaste);
            self.bracketed_paste_enabled = false;
        }
        let _ = crossterm::execute!(stdout, cursor::Show);
        if self.alt_screen_enabled {
            let _ = crossterm::execute!(stdout, terminal::LeaveAlternateScreen);
            self.alt_screen_enabled = false;
            info!("alternate screen disabled");
        }
        let _ = terminal::disable_raw_mode();
        info!("terminal raw mode disabled");
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// The terminal event loop.
pub struct Program<M: Model, W: Write = Stdout> {
    model: M,
    scheduler: Scheduler,
    config: ProgramConfig,
    size: (u16, u16),
    out: W,
    // Declared last so the screen is restored after everything else drops.
    session: TerminalSession,
}

impl<M: Model> Program<M, Stdout> {
    /// Take over the terminal with `config`.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(&config)?;
        let size = session.size()?;
        Ok(Self {
            model,
            scheduler: Scheduler::new(),
            config,
            size,
            out: io::stdout(),
            session,
        })
    }
}

impl<M: Model, W: Write> Program<M, W> {
    /// Run until the model quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.scheduler.start(&mut self.model, self.size, Instant::now());

        while self.scheduler.is_running() {
            if self.scheduler.is_dirty() {
                self.render_frame()?;
            }

            let timeout = self
                .scheduler
                .poll_timeout(Instant::now(), self.config.poll_timeout);
            if crossterm::event::poll(timeout)? {
                let raw = crossterm::event::read()?;
                if let Some(event) = Event::from_crossterm(raw) {
                    if let Event::Resize { width, height } = event {
                        self.size = (width.max(1), height.max(1));
                    }
                    self.scheduler.dispatch(&mut self.model, event, Instant::now());
                }
            }

            self.scheduler.fire_due(&mut self.model, Instant::now());
        }
        Ok(())
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        present(&mut self.out, &frame)?;
        self.scheduler.mark_clean();
        Ok(())
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The terminal session.
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }
}

/// Draw the visible window of `frame` from the top-left corner.
pub fn present<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
    for (row, line) in frame.visible().iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row))?;
        for span in line.spans() {
            apply_style(out, span.style)?;
            queue!(out, Print(&span.text))?;
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_crossterm(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
    }
    let attributes = [
        (StyleFlags::BOLD, Attribute::Bold),
        (StyleFlags::DIM, Attribute::Dim),
        (StyleFlags::ITALIC, Attribute::Italic),
        (StyleFlags::UNDERLINE, Attribute::Underlined),
        (StyleFlags::REVERSE, Attribute::Reverse),
    ];
    for (flag, attribute) in attributes {
        if style.has(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn to_crossterm(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Ct;
    match color {
        Color::Reset => Ct::Reset,
        Color::Black => Ct::Black,
        Color::White => Ct::White,
        Color::Grey => Ct::Grey,
        Color::Yellow => Ct::Yellow,
        Color::Cyan => Ct::Cyan,
        Color::Rgb(r, g, b) => Ct::Rgb { r, g, b },
    }
}
