//! ALGOSCOPE Playback Transport
//!
//! The playback cursor state machine and the async driver that auto-advances
//! it. The transport owns the single cursor into the current step log and
//! clamps every movement, so reconstructors downstream never see an
//! out-of-range position.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod transport;

pub use driver::PlaybackDriver;
pub use transport::Playback;
