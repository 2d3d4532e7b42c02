// Static unit tables for the time and speed modes

pub mod speed;
pub mod time;

pub use speed::{SpeedGroup, SpeedUnit};
pub use time::TimeUnit;
