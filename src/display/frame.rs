use serde::Serialize;

/// What the renderer shows after an intent: an expression line on top
/// and a result below
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFrame {
    pub expression: String,
    pub result: ResultView,
}

/// Result area content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResultView {
    /// Single line (normal and time modes)
    Line(String),
    /// One line per converted unit (speed conversions)
    Lines(Vec<String>),
}

impl DisplayFrame {
    pub fn line(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: ResultView::Line(result.into()),
        }
    }

    pub fn lines(expression: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            expression: expression.into(),
            result: ResultView::Lines(lines),
        }
    }

    /// Result area as plain text, one entry per line
    pub fn result_text(&self) -> String {
        match &self.result {
            ResultView::Line(line) => line.clone(),
            ResultView::Lines(lines) => lines.join("\n"),
        }
    }
}
