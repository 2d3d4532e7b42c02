#[cfg(test)]
mod tests {
    use super::super::NormalEngine;
    use crate::calculator::CalculatorEngine;
    use crate::config::DisplayConfig;
    use crate::error::CalcError;
    use crate::types::{Bracket, Operator};

    fn engine() -> NormalEngine {
        NormalEngine::new(&DisplayConfig::default())
    }

    fn type_digits(engine: &mut NormalEngine, digits: &str) {
        for ch in digits.chars() {
            engine.append_digit(ch).unwrap();
        }
    }

    #[test]
    fn test_digits_evaluate_to_themselves() {
        for digits in ["7", "42", "12345", "9876543210", "3.25"] {
            let mut engine = engine();
            type_digits(&mut engine, digits);
            engine.evaluate().unwrap();
            assert_eq!(engine.buffer().current_input(), digits);
        }
    }

    #[test]
    fn test_percent_of_sum_scenario() {
        let mut engine = engine();
        type_digits(&mut engine, "200");
        engine.append_operator(Operator::Add).unwrap();
        type_digits(&mut engine, "10");
        engine.calculate_percent();
        assert_eq!(engine.buffer().full_expression(), "200+20");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "220");
    }

    #[test]
    fn test_percent_of_product_scenario() {
        let mut engine = engine();
        type_digits(&mut engine, "200");
        engine.append_operator(Operator::Multiply).unwrap();
        type_digits(&mut engine, "10");
        engine.calculate_percent();
        assert_eq!(engine.buffer().full_expression(), "200*0.1");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "20");
    }

    #[test]
    fn test_percent_of_difference_scenario() {
        let mut engine = engine();
        type_digits(&mut engine, "200");
        engine.append_operator(Operator::Subtract).unwrap();
        type_digits(&mut engine, "10");
        engine.calculate_percent();
        assert_eq!(engine.buffer().full_expression(), "200-20");
        assert_eq!(engine.buffer().current_input(), "20");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "180");
    }

    #[test]
    fn test_percent_of_decimal_base_scenario() {
        let mut engine = engine();
        type_digits(&mut engine, "1.5");
        engine.append_operator(Operator::Add).unwrap();
        type_digits(&mut engine, "10");
        engine.calculate_percent();
        assert_eq!(engine.buffer().full_expression(), "1.5+0.15");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "1.65");
    }

    #[test]
    fn test_operator_after_trimmed_negative_result() {
        let mut engine = engine();
        type_digits(&mut engine, "2");
        engine.append_operator(Operator::Subtract).unwrap();
        type_digits(&mut engine, "5");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "-3");

        engine.backspace();
        engine.append_operator(Operator::Add).unwrap();
        type_digits(&mut engine, "4");

        let buffer = engine.buffer();
        assert!(buffer.full_expression().ends_with(buffer.current_input()));
        assert_eq!(buffer.full_expression(), "4");
        assert_eq!(engine.frame().result_text(), "4");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "4");
    }

    #[test]
    fn test_unclosed_bracket_scenario() {
        let mut engine = engine();
        engine.append_bracket(Bracket::Open);
        type_digits(&mut engine, "2");
        engine.append_operator(Operator::Add).unwrap();
        type_digits(&mut engine, "3");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "5");
    }

    #[test]
    fn test_division_by_zero_scenario() {
        let mut engine = engine();
        type_digits(&mut engine, "5");
        engine.append_operator(Operator::Divide).unwrap();
        type_digits(&mut engine, "0");
        assert_eq!(engine.evaluate(), Err(CalcError::Computation));
        assert_eq!(engine.buffer().full_expression(), "5/0");
        assert_eq!(engine.buffer().current_input(), "0");
    }

    #[test]
    fn test_frame_while_typing() {
        let mut engine = engine();
        assert_eq!(engine.frame().result_text(), "0");

        type_digits(&mut engine, "12000");
        engine.append_operator(Operator::Subtract).unwrap();
        let frame = engine.frame();
        assert_eq!(frame.expression, "12 000−");
        assert_eq!(frame.result_text(), "12 000−");

        type_digits(&mut engine, "1500");
        let frame = engine.frame();
        assert_eq!(frame.expression, "12 000−1 500");
        assert_eq!(frame.result_text(), "1 500");
    }

    #[test]
    fn test_long_division_result() {
        let mut engine = engine();
        type_digits(&mut engine, "10");
        engine.append_operator(Operator::Divide).unwrap();
        type_digits(&mut engine, "3");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "3.3333333333");
    }

    #[test]
    fn test_configured_precision() {
        let config = DisplayConfig {
            result_precision: 3,
            ..DisplayConfig::default()
        };
        let mut engine = NormalEngine::new(&config);
        type_digits(&mut engine, "2");
        engine.append_operator(Operator::Divide).unwrap();
        type_digits(&mut engine, "3");
        engine.evaluate().unwrap();
        assert_eq!(engine.buffer().current_input(), "0.667");
    }
}
