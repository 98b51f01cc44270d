//! Turning detector predictions into moves.
//!
//! - [`Settings`]: every tunable, with canonical defaults and JSON loading
//! - [`Phase`]: cold start, loss guard, or detecting
//! - [`Pipeline`]: the ordered detector battery and its random fallback
mod phase;
mod pipeline;
mod settings;

pub use phase::*;
pub use pipeline::*;
pub use settings::*;
