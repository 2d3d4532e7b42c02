// Rendering of calculator state into display lines

pub mod formatter;
pub mod frame;

pub use formatter::{format_plain, format_result, format_speed, DisplayFormatter};
pub use frame::{DisplayFrame, ResultView};
