#[cfg(test)]
mod tests {
    use super::super::TimeEngine;
    use crate::calculator::CalculatorEngine;
    use crate::error::CalcError;
    use crate::types::Operator;
    use crate::units::TimeUnit;

    fn enter(engine: &mut TimeEngine, digits: &str, unit: TimeUnit) {
        for ch in digits.chars() {
            engine.append_digit(ch).unwrap();
        }
        engine.select_unit(unit).unwrap();
    }

    #[test]
    fn test_hours_plus_minutes() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "2", TimeUnit::Hour);
        engine.append_operator(Operator::Add).unwrap();
        enter(&mut engine, "30", TimeUnit::Min);

        assert_eq!(engine.frame().expression, "2 ч + 30 мин");

        engine.calculate_time().unwrap();
        let frame = engine.frame();
        assert_eq!(frame.result_text(), "2 ч 30 мин");
        assert_eq!(frame.expression, "");
        assert!(engine.expression().is_empty());
    }

    #[test]
    fn test_running_total_in_live_frame() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "2", TimeUnit::Hour);
        engine.append_operator(Operator::Add).unwrap();
        assert_eq!(engine.frame().result_text(), "2 ч");
        enter(&mut engine, "5", TimeUnit::Min);
        // pending quantity is not part of the total yet
        assert_eq!(engine.frame().result_text(), "2 ч");
        assert_eq!(engine.frame().expression, "2 ч + 5 мин");
    }

    #[test]
    fn test_subtraction_to_negative() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "1", TimeUnit::Min);
        engine.append_operator(Operator::Subtract).unwrap();
        enter(&mut engine, "2", TimeUnit::Min);
        engine.calculate_time().unwrap();
        assert_eq!(engine.frame().result_text(), "−1 мин");
    }

    #[test]
    fn test_now_plus_one_hour() {
        let mut engine = TimeEngine::default();
        engine.show_now_at(36_000);
        let frame = engine.frame();
        assert_eq!(frame.expression, "Сейчас:");
        assert_eq!(frame.result_text(), "10:00:00");

        engine.append_operator(Operator::Add).unwrap();
        enter(&mut engine, "1", TimeUnit::Hour);
        assert_eq!(engine.expression().reduce(), Some(36_000));

        engine.calculate_time().unwrap();
        assert_eq!(engine.frame().result_text(), "11:00:00");
    }

    #[test]
    fn test_now_crossing_midnight() {
        let mut engine = TimeEngine::default();
        engine.show_now_at(23 * 3600);
        engine.append_operator(Operator::Add).unwrap();
        enter(&mut engine, "2", TimeUnit::Hour);
        engine.calculate_time().unwrap();
        assert_eq!(engine.frame().result_text(), "1 дн 1 ч");
    }

    #[test]
    fn test_unit_requires_number() {
        let mut engine = TimeEngine::default();
        assert!(matches!(
            engine.select_unit(TimeUnit::Day),
            Err(CalcError::MissingOperand(_))
        ));
        assert_eq!(engine.unit(), None);
    }

    #[test]
    fn test_operator_requires_unit() {
        let mut engine = TimeEngine::default();
        engine.append_digit('5').unwrap();
        assert_eq!(
            engine.append_operator(Operator::Add),
            Err(CalcError::missing_time_unit())
        );
        assert_eq!(engine.input(), "5");
        assert!(engine.expression().is_empty());
    }

    #[test]
    fn test_operator_on_empty_is_noop() {
        let mut engine = TimeEngine::default();
        engine.append_operator(Operator::Add).unwrap();
        assert!(engine.expression().is_empty());
    }

    #[test]
    fn test_multiplicative_operators_ignored() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "3", TimeUnit::Sec);
        engine.append_operator(Operator::Multiply).unwrap();
        assert!(engine.expression().is_empty());
        assert_eq!(engine.input(), "3");
    }

    #[test]
    fn test_calculate_with_nothing_is_noop() {
        let mut engine = TimeEngine::default();
        engine.calculate_time().unwrap();
        assert_eq!(engine.frame().result_text(), "0");
    }

    #[test]
    fn test_convert_pending_quantity() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "90", TimeUnit::Min);
        engine.convert_time().unwrap();
        let frame = engine.frame();
        assert_eq!(frame.expression, "Полное разложение времени:");
        assert_eq!(frame.result_text(), "0 лет 0 дн 1 ч 30 мин 0 сек");
        assert_eq!(engine.input(), "");
    }

    #[test]
    fn test_convert_expression() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "400", TimeUnit::Day);
        engine.append_operator(Operator::Add).unwrap();
        engine.convert_time().unwrap();
        assert_eq!(engine.frame().result_text(), "1 лет 35 дн 0 ч 0 мин 0 сек");
    }

    #[test]
    fn test_convert_requires_input() {
        let mut engine = TimeEngine::default();
        assert!(matches!(
            engine.convert_time(),
            Err(CalcError::MissingOperand(_))
        ));
    }

    #[test]
    fn test_clear_entry_drops_pending_only() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "1", TimeUnit::Hour);
        engine.append_operator(Operator::Add).unwrap();
        enter(&mut engine, "7", TimeUnit::Sec);
        engine.clear_entry();
        assert_eq!(engine.input(), "");
        assert_eq!(engine.unit(), None);
        assert_eq!(engine.expression().tokens().len(), 2);
    }

    #[test]
    fn test_digit_after_result_unpins_display() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "1", TimeUnit::Hour);
        engine.calculate_time().unwrap();
        engine.append_digit('4').unwrap();
        let frame = engine.frame();
        assert_eq!(frame.expression, "4");
        assert_eq!(frame.result_text(), "4");
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "99999999999999999999", TimeUnit::Year);

        assert_eq!(
            engine.append_operator(Operator::Add),
            Err(CalcError::Computation)
        );
        assert!(engine.expression().is_empty());
        assert_eq!(engine.input(), "99999999999999999999");
        assert_eq!(engine.unit(), Some(TimeUnit::Year));

        assert_eq!(engine.calculate_time(), Err(CalcError::Computation));
        assert_eq!(engine.convert_time(), Err(CalcError::Computation));
        assert_eq!(engine.input(), "99999999999999999999");
        assert_eq!(engine.frame().result_text(), "99999999999999999999 лет");
    }

    #[test]
    fn test_overflowing_sum_leaves_state_unchanged() {
        let mut engine = TimeEngine::default();
        enter(&mut engine, "200000000000", TimeUnit::Year);
        engine.append_operator(Operator::Add).unwrap();
        enter(&mut engine, "200000000000", TimeUnit::Year);

        assert_eq!(
            engine.append_operator(Operator::Add),
            Err(CalcError::Computation)
        );
        assert_eq!(engine.expression().tokens().len(), 2);
        assert_eq!(engine.input(), "200000000000");

        assert_eq!(engine.calculate_time(), Err(CalcError::Computation));
        assert_eq!(engine.expression().tokens().len(), 2);
        assert_eq!(engine.frame().result_text(), "200000000000 лет");
    }
}
