#![forbid(unsafe_code)]

//! Terminal rendition of the National Digital Library landing page.
//!
//! # Role in the workspace
//! `ndl-landing` is the host: it owns the terminal, the frame scheduler,
//! configuration and logging, and the page model that draws every section.
//! The carousel and count-up state machines live in `ndl-core`; strings come
//! from `ndl-i18n`.
//!
//! # Layout
//! - [`program`]: Elm-style `Model`/`Cmd` runtime with a crossterm backend.
//! - [`page`]: the [`LandingPage`] model and its key map.
//! - [`sections`]: one module per page section.
//! - [`frame`], [`theme`]: styled lines and the palette.
//! - [`config`], [`logging`], [`error`]: the ambient stack.

pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod frame;
pub mod logging;
pub mod page;
pub mod program;
pub mod sections;
pub mod theme;

pub use config::{ConfigError, LandingConfig};
pub use error::LandingError;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use frame::Frame;
pub use page::{Activity, Focus, LandingPage, Msg, PageOptions};
pub use program::{Cmd, Model, Program, ProgramConfig, Scheduler};
