//! Data model for the terminal calculator
//!
//! The Model holds the pure application state: the pending expression buffer,
//! the last shown result, and the memory accumulator. The expression buffer
//! stores display glyphs (`×`, `÷`, `−`); they are substituted for the
//! canonical operator characters immediately before the buffer is handed to
//! `calculate`, so the core only ever sees the canonical alphabet.
//!
//! This separation keeps all calculator behavior testable without a terminal:
//! the model knows nothing about rendering or key events beyond the abstract
//! [Button] presses it receives.

use calc_parser::calculate;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(u8),
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    OpenParen,
    CloseParen,
    /// Clear the expression and result
    Clear,
    /// Delete the last character of the expression
    Backspace,
    /// Wrap the pending expression in a negation, or unwrap it again
    ToggleSign,
    Equals,
    MemClear,
    MemRecall,
    MemAdd,
    MemSubtract,
}

impl Button {
    /// Display label, using the display glyphs for operators
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Add => "+".to_string(),
            Button::Sub => "−".to_string(),
            Button::Mul => "×".to_string(),
            Button::Div => "÷".to_string(),
            Button::Mod => "%".to_string(),
            Button::OpenParen => "(".to_string(),
            Button::CloseParen => ")".to_string(),
            Button::Clear => "AC".to_string(),
            Button::Backspace => "⌫".to_string(),
            Button::ToggleSign => "+/−".to_string(),
            Button::Equals => "=".to_string(),
            Button::MemClear => "MC".to_string(),
            Button::MemRecall => "MR".to_string(),
            Button::MemAdd => "M+".to_string(),
            Button::MemSubtract => "M−".to_string(),
        }
    }
}

/// The button grid as rendered, row by row
pub const BUTTON_GRID: [[Button; 4]; 6] = [
    [
        Button::MemClear,
        Button::MemRecall,
        Button::MemAdd,
        Button::MemSubtract,
    ],
    [Button::Clear, Button::ToggleSign, Button::Mod, Button::Div],
    [
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Mul,
    ],
    [
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Sub,
    ],
    [
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Add,
    ],
    [
        Button::OpenParen,
        Button::Digit(0),
        Button::CloseParen,
        Button::Equals,
    ],
];

/// Map a typed character to the button it presses, if any
pub fn button_for_char(c: char) -> Option<Button> {
    match c {
        '0'..='9' => Some(Button::Digit(c as u8 - b'0')),
        '+' => Some(Button::Add),
        '-' => Some(Button::Sub),
        '*' => Some(Button::Mul),
        '/' => Some(Button::Div),
        '%' => Some(Button::Mod),
        '(' => Some(Button::OpenParen),
        ')' => Some(Button::CloseParen),
        '=' => Some(Button::Equals),
        _ => None,
    }
}

/// The core data model
#[derive(Debug, Clone)]
pub struct Model {
    /// Pending expression, stored with display glyphs
    expression: String,
    /// Last shown result, or the error indicator
    result: String,
    /// Whether the result line currently shows the error indicator
    error: bool,
    /// Memory accumulator
    memory: i64,
    /// Value of the last successful evaluation, fed to M+ / M−
    last_result: i64,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            expression: String::new(),
            result: "0".to_string(),
            error: false,
            memory: 0,
            last_result: 0,
        }
    }
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    /// The pending expression as displayed (with glyphs)
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The result line content
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether the result line shows the error indicator
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Whether the memory indicator should light up
    pub fn memory_active(&self) -> bool {
        self.memory != 0
    }

    /// Apply one button press to the state
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Digit(d) => self.expression.push((b'0' + d) as char),
            Button::Add => self.expression.push('+'),
            Button::Sub => self.expression.push('−'),
            Button::Mul => self.expression.push('×'),
            Button::Div => self.expression.push('÷'),
            Button::Mod => self.expression.push('%'),
            Button::OpenParen => self.expression.push('('),
            Button::CloseParen => self.expression.push(')'),
            Button::Clear => {
                self.expression.clear();
                self.result = "0".to_string();
                self.error = false;
            }
            Button::Backspace => {
                self.expression.pop();
            }
            Button::ToggleSign => self.toggle_sign(),
            Button::Equals => self.evaluate(),
            Button::MemClear => self.memory = 0,
            Button::MemRecall => {
                // The buffer stores display glyphs, so the sign is `−` not `-`
                let value = self.memory.to_string().replace('-', "−");
                self.expression.push_str(&value);
            }
            Button::MemAdd => self.memory = self.memory.wrapping_add(self.last_result),
            Button::MemSubtract => self.memory = self.memory.wrapping_sub(self.last_result),
        }
    }

    /// Substitute display glyphs for the canonical operator characters
    fn canonical_expression(&self) -> String {
        self.expression
            .chars()
            .map(|c| match c {
                '×' => '*',
                '÷' => '/',
                '−' => '-',
                other => other,
            })
            .collect()
    }

    fn evaluate(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        match calculate(&self.canonical_expression()) {
            Ok(value) => {
                self.result = value.to_string();
                self.last_result = value;
                self.error = false;
                self.expression.clear();
            }
            Err(_) => {
                // Generic indicator only; the expression stays editable
                self.result = "Error".to_string();
                self.error = true;
            }
        }
    }

    fn toggle_sign(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        match negation_body(&self.expression) {
            Some(inner) => self.expression = inner.to_string(),
            None => self.expression = format!("−({})", self.expression),
        }
    }
}

/// If the whole expression is one negation wrapper `−(...)`, return its body.
///
/// The trailing `)` must be the one closing the leading `−(`; in something
/// like `−(2)×(3)` the leading group closes early and stripping the ends
/// would leave unbalanced parentheses, so that is not a wrapper.
fn negation_body(expression: &str) -> Option<&str> {
    let inner = expression.strip_prefix("−(")?.strip_suffix(')')?;
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(model: &mut Model, buttons: &[Button]) {
        for button in buttons {
            model.press(*button);
        }
    }

    #[test]
    fn test_digits_and_operators_build_expression() {
        let mut model = Model::new();
        press_all(
            &mut model,
            &[
                Button::Digit(1),
                Button::Digit(2),
                Button::Mul,
                Button::Digit(3),
            ],
        );
        // Operators show as glyphs
        assert_eq!(model.expression(), "12×3");
    }

    #[test]
    fn test_glyphs_substituted_before_calculate() {
        let mut model = Model::new();
        press_all(
            &mut model,
            &[
                Button::Digit(8),
                Button::Div,
                Button::Digit(2),
                Button::Sub,
                Button::Digit(1),
                Button::Equals,
            ],
        );
        assert_eq!(model.result(), "3");
        assert!(!model.has_error());
        assert_eq!(model.expression(), "");
    }

    #[test]
    fn test_error_indicator_is_generic() {
        let mut model = Model::new();
        press_all(
            &mut model,
            &[
                Button::Digit(5),
                Button::Div,
                Button::Digit(0),
                Button::Equals,
            ],
        );
        assert_eq!(model.result(), "Error");
        assert!(model.has_error());
        // The expression survives for editing
        assert_eq!(model.expression(), "5÷0");
    }

    #[test]
    fn test_clear_resets_display() {
        let mut model = Model::new();
        press_all(&mut model, &[Button::Digit(5), Button::Div, Button::Digit(0)]);
        model.press(Button::Equals);
        model.press(Button::Clear);
        assert_eq!(model.expression(), "");
        assert_eq!(model.result(), "0");
        assert!(!model.has_error());
    }

    #[test]
    fn test_backspace() {
        let mut model = Model::new();
        press_all(&mut model, &[Button::Digit(1), Button::Digit(2)]);
        model.press(Button::Backspace);
        assert_eq!(model.expression(), "1");
        // Backspace on empty input is a no-op
        model.press(Button::Backspace);
        model.press(Button::Backspace);
        assert_eq!(model.expression(), "");
    }

    #[test]
    fn test_toggle_sign_round_trip() {
        let mut model = Model::new();
        press_all(&mut model, &[Button::Digit(4), Button::Digit(2)]);
        model.press(Button::ToggleSign);
        assert_eq!(model.expression(), "−(42)");
        model.press(Button::Equals);
        assert_eq!(model.result(), "-42");

        let mut model = Model::new();
        model.press(Button::Digit(7));
        model.press(Button::ToggleSign);
        model.press(Button::ToggleSign);
        assert_eq!(model.expression(), "7");
    }

    #[test]
    fn test_toggle_sign_only_unwraps_a_whole_negation() {
        // Build "−(2)×(3)": looks wrapped at both ends, but the leading
        // group closes early, so toggling must wrap instead of stripping
        let mut model = Model::new();
        model.press(Button::Digit(2));
        model.press(Button::ToggleSign);
        press_all(
            &mut model,
            &[
                Button::Mul,
                Button::OpenParen,
                Button::Digit(3),
                Button::CloseParen,
            ],
        );
        assert_eq!(model.expression(), "−(2)×(3)");

        model.press(Button::ToggleSign);
        assert_eq!(model.expression(), "−(−(2)×(3))");
        model.press(Button::Equals);
        assert_eq!(model.result(), "6");

        // And the wrapper unwraps cleanly again
        let mut model = Model::new();
        model.press(Button::Digit(2));
        model.press(Button::ToggleSign);
        press_all(&mut model, &[Button::Mul, Button::Digit(3)]);
        model.press(Button::ToggleSign);
        model.press(Button::ToggleSign);
        assert_eq!(model.expression(), "−(2)×3");
    }

    #[test]
    fn test_memory_accumulator() {
        let mut model = Model::new();
        assert!(!model.memory_active());

        press_all(&mut model, &[Button::Digit(6), Button::Equals]);
        model.press(Button::MemAdd);
        assert!(model.memory_active());

        // MR appends the memory value to the expression
        press_all(&mut model, &[Button::Digit(2), Button::Add]);
        model.press(Button::MemRecall);
        assert_eq!(model.expression(), "2+6");
        model.press(Button::Equals);
        assert_eq!(model.result(), "8");

        // M− subtracts the last result
        model.press(Button::MemSubtract);
        // memory = 6 - 8, recalled with the display glyph for the sign
        model.press(Button::MemRecall);
        assert_eq!(model.expression(), "−2");
        model.press(Button::Equals);
        assert_eq!(model.result(), "-2");

        model.press(Button::MemClear);
        assert!(!model.memory_active());
    }

    #[test]
    fn test_equals_on_empty_expression_is_noop() {
        let mut model = Model::new();
        model.press(Button::Equals);
        assert_eq!(model.result(), "0");
        assert!(!model.has_error());
    }

    #[test]
    fn test_button_for_char_mapping() {
        assert_eq!(button_for_char('7'), Some(Button::Digit(7)));
        assert_eq!(button_for_char('*'), Some(Button::Mul));
        assert_eq!(button_for_char('='), Some(Button::Equals));
        assert_eq!(button_for_char('x'), None);
    }

    #[test]
    fn test_grid_covers_all_digits() {
        let mut digits: Vec<u8> = BUTTON_GRID
            .iter()
            .flatten()
            .filter_map(|b| match b {
                Button::Digit(d) => Some(*d),
                _ => None,
            })
            .collect();
        digits.sort_unstable();
        assert_eq!(digits, (0..=9).collect::<Vec<u8>>());
    }
}
