#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::{Stopwatch, TICK_MS};
