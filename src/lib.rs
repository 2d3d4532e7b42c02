pub mod calculator;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod normal;
pub mod speed;
pub mod time;
pub mod types;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calculator::{Calculator, CalculatorEngine, Intent, Renderer};
pub use config::Config;
pub use display::DisplayFrame;
pub use error::CalcError;
pub use types::{Bracket, Mode, Operator};
