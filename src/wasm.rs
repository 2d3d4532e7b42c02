// WebAssembly bindings for the calculator widget
use crate::calculator::{Calculator, Intent, Renderer};
use crate::config::Config;
use crate::display::DisplayFrame;
use crate::types::{Bracket, Mode, Operator};
use crate::units::{SpeedUnit, TimeUnit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// What the page script receives after every call
#[derive(Serialize)]
struct Update<'a> {
    mode: Mode,
    frame: &'a DisplayFrame,
    /// User-facing message when the intent was rejected
    error: Option<String>,
}

/// Keeps the last frame and message for the JSON response
#[derive(Default)]
struct CollectingRenderer {
    frame: Option<DisplayFrame>,
    message: Option<String>,
}

impl Renderer for CollectingRenderer {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frame = Some(frame.clone());
    }

    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

#[wasm_bindgen]
pub struct CalculatorWasm {
    calculator: Calculator,
}

impl Default for CalculatorWasm {
    fn default() -> Self {
        Self {
            calculator: Calculator::new(Config::empty()),
        }
    }
}

impl CalculatorWasm {
    fn dispatch(&mut self, intent: Intent) -> Result<String, JsValue> {
        let mut renderer = CollectingRenderer::default();
        // Rejections are part of the response, not an exception
        let _ = self.calculator.dispatch(intent, &mut renderer);

        let frame = renderer.frame.unwrap_or_else(|| self.calculator.frame());
        let update = Update {
            mode: self.calculator.mode(),
            frame: &frame,
            error: renderer.message,
        };

        serde_json::to_string(&update)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize update: {}", e)))
    }
}

#[wasm_bindgen]
impl CalculatorWasm {
    /// Create a calculator, optionally configured from TOML text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<CalculatorWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };
        Ok(Self {
            calculator: Calculator::new(config),
        })
    }

    /// Current display as JSON
    #[wasm_bindgen]
    pub fn frame(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.calculator.frame())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize frame: {}", e)))
    }

    /// Switch to "normal", "time" or "speed"; clears all state
    #[wasm_bindgen]
    pub fn switch_mode(&mut self, mode: &str) -> Result<String, JsValue> {
        let mode = mode.parse::<Mode>().map_err(|e| JsValue::from_str(&e))?;
        self.dispatch(Intent::SwitchMode(mode))
    }

    /// Handle a keyboard key (KeyboardEvent.key). Unmapped keys only re-render.
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str) -> Result<String, JsValue> {
        match Intent::from_key(key, self.calculator.mode()) {
            Some(intent) => self.dispatch(intent),
            None => self.frame(),
        }
    }

    /// Dispatch an intent given as JSON, e.g. {"intent":"digit","arg":"5"}
    #[wasm_bindgen]
    pub fn intent(&mut self, intent_json: &str) -> Result<String, JsValue> {
        let intent: Intent = serde_json::from_str(intent_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse intent: {}", e)))?;
        self.dispatch(intent)
    }

    #[wasm_bindgen]
    pub fn digit(&mut self, digit: char) -> Result<String, JsValue> {
        self.dispatch(Intent::Digit(digit))
    }

    /// Operator given as ASCII or display glyph
    #[wasm_bindgen]
    pub fn operator(&mut self, op: char) -> Result<String, JsValue> {
        let op = Operator::from_char(op)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown operator: {}", op)))?;
        self.dispatch(Intent::Operator(op))
    }

    #[wasm_bindgen]
    pub fn bracket(&mut self, bracket: char) -> Result<String, JsValue> {
        let bracket = Bracket::from_char(bracket)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown bracket: {}", bracket)))?;
        self.dispatch(Intent::Bracket(bracket))
    }

    #[wasm_bindgen]
    pub fn percent(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::Percent)
    }

    #[wasm_bindgen]
    pub fn evaluate(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::Evaluate)
    }

    #[wasm_bindgen]
    pub fn clear_all(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::ClearAll)
    }

    #[wasm_bindgen]
    pub fn clear_entry(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::ClearEntry)
    }

    #[wasm_bindgen]
    pub fn backspace(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::Backspace)
    }

    /// Unit name: sec, min, hour, day or year
    #[wasm_bindgen]
    pub fn select_time_unit(&mut self, unit: &str) -> Result<String, JsValue> {
        let unit = unit.parse::<TimeUnit>().map_err(|e| JsValue::from_str(&e))?;
        self.dispatch(Intent::SelectTimeUnit(unit))
    }

    #[wasm_bindgen]
    pub fn show_now(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::ShowNow)
    }

    #[wasm_bindgen]
    pub fn calculate_time(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::CalculateTime)
    }

    #[wasm_bindgen]
    pub fn convert_time(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::ConvertTime)
    }

    /// Unit name such as "km/h" or "rpm"
    #[wasm_bindgen]
    pub fn select_speed_unit(&mut self, unit: &str) -> Result<String, JsValue> {
        let unit = unit.parse::<SpeedUnit>().map_err(|e| JsValue::from_str(&e))?;
        self.dispatch(Intent::SelectSpeedUnit(unit))
    }

    #[wasm_bindgen]
    pub fn show_all_speeds(&mut self) -> Result<String, JsValue> {
        self.dispatch(Intent::ShowAllSpeeds)
    }
}
