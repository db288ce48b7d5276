//! The presentation boundary: commands out, events in.
//!
//! The engine owns game state; the adapter owns pixels, timing, and input
//! devices. They meet here, and only here.

pub mod command;
pub mod event;

pub use command::{CommandLog, NullSink, PresentationSink, RenderCommand};
pub use event::SessionEvent;
