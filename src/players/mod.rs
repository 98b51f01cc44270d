//! Bots and the contract the harness drives them through.
//!
//! [`Robot`] is the predicting bot. The rest are simple, fully
//! predictable opponents useful for exercising it.
mod bot;
mod cycler;
mod fish;
mod fixed;
mod mirror;
mod robot;
mod roster;

pub use bot::*;
pub use cycler::*;
pub use fish::*;
pub use fixed::*;
pub use mirror::*;
pub use robot::*;
pub use roster::*;
