#![forbid(unsafe_code)]

//! State machines behind the National Digital Library landing page.
//!
//! # Role in the workspace
//! `ndl-core` holds the page's only stateful logic: the paginated carousel
//! of latest additions and the statistics count-up. Both are pure state
//! machines advanced with explicit [`Instant`](web_time::Instant) values, so
//! any scheduler (a terminal loop, a browser frame callback, or a test with
//! synthetic time) can drive them.
//!
//! # How it fits in the system
//! `ndl-landing` owns one [`Carousel`] and one [`CountUp`] per mounted page
//! and forwards its frame ticks to them. Neither controller knows about
//! rendering, localization, or the other controller.

pub mod carousel;
pub mod clock;
pub mod count_up;
pub mod deferred;
pub mod format;

pub use carousel::{Carousel, CarouselItem, TRANSITION_DELAY};
pub use clock::{Clock, ManualClock, SystemClock};
pub use count_up::{AnimationPhase, CountUp, FrameRequest, Metric, COUNT_UP_DURATION};
pub use deferred::Deferred;
pub use format::format_compact;
