// Calculator state and intent dispatch across the three modes

pub mod engine;
pub mod intent;


pub use engine::CalculatorEngine;
pub use intent::Intent;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::display::{DisplayFormatter, DisplayFrame};
use crate::error::CalcError;
use crate::normal::NormalEngine;
use crate::speed::SpeedEngine;
use crate::time::TimeEngine;
use crate::types::Mode;
use tracing::{debug, warn};

/// Output side of the calculator: shows frames and user-facing messages.
/// Implementations only display; they never change calculator state.
pub trait Renderer {
    fn render(&mut self, frame: &DisplayFrame);

    fn notify(&mut self, message: &str);
}

/// Engine of the active mode
#[derive(Debug, Clone)]
pub enum ModeEngine {
    Normal(NormalEngine),
    Time(TimeEngine),
    Speed(SpeedEngine),
}

impl ModeEngine {
    pub fn new(mode: Mode, config: &Config) -> Self {
        match mode {
            Mode::Normal => ModeEngine::Normal(NormalEngine::new(&config.display)),
            Mode::Time => ModeEngine::Time(TimeEngine::new(DisplayFormatter::from_config(
                &config.display,
            ))),
            Mode::Speed => ModeEngine::Speed(SpeedEngine::new(&config.display)),
        }
    }

    pub fn as_engine(&self) -> &dyn CalculatorEngine {
        match self {
            ModeEngine::Normal(engine) => engine,
            ModeEngine::Time(engine) => engine,
            ModeEngine::Speed(engine) => engine,
        }
    }

    pub fn as_engine_mut(&mut self) -> &mut dyn CalculatorEngine {
        match self {
            ModeEngine::Normal(engine) => engine,
            ModeEngine::Time(engine) => engine,
            ModeEngine::Speed(engine) => engine,
        }
    }
}

/// The whole calculator: configuration, clock and the active mode engine
pub struct Calculator {
    config: Config,
    engine: ModeEngine,
    clock: Box<dyn Clock>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::empty())
    }
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        let engine = ModeEngine::new(Mode::Normal, &config);
        Self {
            config,
            engine,
            clock: Box::new(clock),
        }
    }

    pub fn mode(&self) -> Mode {
        self.engine.as_engine().mode()
    }

    pub fn engine(&self) -> &ModeEngine {
        &self.engine
    }

    /// Activate a mode with fresh state
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode(), to = %mode, "switching mode");
        self.engine = ModeEngine::new(mode, &self.config);
    }

    pub fn frame(&self) -> DisplayFrame {
        self.engine.as_engine().frame()
    }

    /// Apply one intent. On error the state is unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<(), CalcError> {
        if let Intent::SwitchMode(mode) = intent {
            self.switch_mode(mode);
            return Ok(());
        }

        match (intent, &mut self.engine) {
            (Intent::Digit(ch), engine) => engine.as_engine_mut().append_digit(ch),
            (Intent::Operator(op), engine) => engine.as_engine_mut().append_operator(op),
            (Intent::Evaluate, engine) => engine.as_engine_mut().evaluate(),
            (Intent::ClearAll, engine) => {
                engine.as_engine_mut().clear();
                Ok(())
            }
            (Intent::ClearEntry, engine) => {
                engine.as_engine_mut().clear_entry();
                Ok(())
            }
            (Intent::Backspace, engine) => {
                engine.as_engine_mut().backspace();
                Ok(())
            }
            (Intent::Bracket(bracket), ModeEngine::Normal(engine)) => {
                engine.append_bracket(bracket);
                Ok(())
            }
            (Intent::Percent, ModeEngine::Normal(engine)) => {
                engine.calculate_percent();
                Ok(())
            }
            (Intent::SelectTimeUnit(unit), ModeEngine::Time(engine)) => engine.select_unit(unit),
            (Intent::ShowNow, ModeEngine::Time(engine)) => {
                engine.show_now_at(self.clock.seconds_since_midnight());
                Ok(())
            }
            (Intent::CalculateTime, ModeEngine::Time(engine)) => engine.calculate_time(),
            (Intent::ConvertTime, ModeEngine::Time(engine)) => engine.convert_time(),
            (Intent::SelectSpeedUnit(unit), ModeEngine::Speed(engine)) => engine.select_unit(unit),
            (Intent::ShowAllSpeeds, ModeEngine::Speed(engine)) => engine.show_all(),
            (intent, engine) => {
                debug!(
                    ?intent,
                    mode = %engine.as_engine().mode(),
                    "intent not available in this mode"
                );
                Ok(())
            }
        }
    }

    /// Apply an intent, report a failure to the renderer, then render.
    pub fn dispatch<R: Renderer + ?Sized>(
        &mut self,
        intent: Intent,
        renderer: &mut R,
    ) -> Result<(), CalcError> {
        let result = self.apply(intent);
        if let Err(ref e) = result {
            warn!(?intent, error = ?e, "intent rejected");
            renderer.notify(&e.to_string());
        }
        renderer.render(&self.frame());
        result
    }
}
