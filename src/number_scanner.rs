use crate::classify::is_digit;
use crate::cursor::Cursor;
use crate::policy::ParsePolicy;

/// The three numeric kinds the recognizer can emit from a single number
/// token, per the type-selection rule in the grammar: integers prefer
/// signed when the token carried a `-`, otherwise unsigned, falling back
/// to `Real` whenever a fraction/exponent was present or the integer
/// conversion overflowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    UInteger(u64),
    Real(f64),
}

/// Consumes `number = [sign] int [frac] [exp]`.
///
/// Returns `None` without advancing `cursor` if the input at the cursor
/// does not form a valid number (including a lone `+`/`-` or a bare `.`).
pub fn advance_number(cursor: &mut Cursor, policy: ParsePolicy) -> Option<Number> {
    let mut probe = *cursor;
    let start = probe;

    let negative = match probe.peek() {
        Some('-') => {
            probe.bump();
            true
        }
        Some('+') if policy.contains(ParsePolicy::ALLOW_POSITIVE_SIGNED_NUMBER) => {
            probe.bump();
            false
        }
        _ => false,
    };

    if probe.peek() == Some('0') {
        probe.bump();
    } else {
        let mut any = false;
        while probe.peek().is_some_and(is_digit) {
            probe.bump();
            any = true;
        }
        if !any {
            return None;
        }
    }

    let mut is_real = false;

    if probe.peek() == Some('.') {
        let mut frac = probe;
        frac.bump();
        if !frac.peek().is_some_and(is_digit) {
            return None;
        }
        while frac.peek().is_some_and(is_digit) {
            frac.bump();
        }
        probe = frac;
        is_real = true;
    }

    if matches!(probe.peek(), Some('e') | Some('E')) {
        let mut exp = probe;
        exp.bump();
        if matches!(exp.peek(), Some('+') | Some('-')) {
            exp.bump();
        }
        if !exp.peek().is_some_and(is_digit) {
            return None;
        }
        while exp.peek().is_some_and(is_digit) {
            exp.bump();
        }
        probe = exp;
        is_real = true;
    }

    let token = &start.remaining()[..probe.pos() - start.pos()];

    let number = if is_real {
        Number::Real(token.parse::<f64>().ok()?)
    } else if negative {
        match token.parse::<i64>() {
            Ok(n) => Number::Integer(n),
            Err(_) => Number::Real(token.parse::<f64>().ok()?),
        }
    } else {
        match token.parse::<u64>() {
            Ok(n) => Number::UInteger(n),
            Err(_) => Number::Real(token.parse::<f64>().ok()?),
        }
    };

    *cursor = probe;
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(input: &str, policy: ParsePolicy) -> Option<Number> {
        advance_number(&mut Cursor::new(input), policy)
    }

    #[test]
    fn zero_and_signed_integers() {
        assert_eq!(num("0", ParsePolicy::STRICT), Some(Number::UInteger(0)));
        assert_eq!(num("-1", ParsePolicy::STRICT), Some(Number::Integer(-1)));
        assert_eq!(num("256", ParsePolicy::STRICT), Some(Number::UInteger(256)));
        assert_eq!(num("-256", ParsePolicy::STRICT), Some(Number::Integer(-256)));
    }

    #[test]
    fn positive_sign_requires_policy() {
        assert_eq!(num("+1", ParsePolicy::STRICT), None);
        assert_eq!(
            num("+1", ParsePolicy::RELAXED),
            Some(Number::UInteger(1))
        );
    }

    #[test]
    fn int_min_and_max_round_trip() {
        assert_eq!(
            num(&i64::MAX.to_string(), ParsePolicy::STRICT),
            Some(Number::UInteger(i64::MAX as u64))
        );
        assert_eq!(
            num(&i64::MIN.to_string(), ParsePolicy::STRICT),
            Some(Number::Integer(i64::MIN))
        );
    }

    #[test]
    fn fraction_or_exponent_forces_real() {
        assert_eq!(num("1.5", ParsePolicy::STRICT), Some(Number::Real(1.5)));
        assert_eq!(num("1e3", ParsePolicy::STRICT), Some(Number::Real(1000.0)));
        assert_eq!(num("-1.5e-2", ParsePolicy::STRICT), Some(Number::Real(-0.015)));
    }

    #[test]
    fn sign_prefers_unsigned_then_real_without_sign_signed_only_with_minus() {
        // Token has no '-': try unsigned, which succeeds here.
        assert_eq!(num("18446744073709551615", ParsePolicy::STRICT), Some(Number::UInteger(u64::MAX)));
        // A '-' sign means only the signed path is tried; overflow falls to real.
        assert_eq!(
            num("-99999999999999999999", ParsePolicy::STRICT),
            Some(Number::Real(-99999999999999999999.0))
        );
    }

    #[test]
    fn overflowing_unsigned_falls_back_to_real() {
        assert_eq!(
            num("99999999999999999999", ParsePolicy::STRICT),
            Some(Number::Real(99999999999999999999.0))
        );
    }

    #[test]
    fn lone_sign_or_bare_dot_is_not_a_number() {
        assert_eq!(num("-", ParsePolicy::STRICT), None);
        assert_eq!(num("+", ParsePolicy::RELAXED), None);
        assert_eq!(num(".", ParsePolicy::STRICT), None);
        assert_eq!(num(".5", ParsePolicy::STRICT), None);
    }

    #[test]
    fn leading_zero_does_not_absorb_further_digits() {
        let mut cursor = Cursor::new("012");
        let n = advance_number(&mut cursor, ParsePolicy::STRICT);
        assert_eq!(n, Some(Number::UInteger(0)));
        assert_eq!(cursor.remaining(), "12");
    }

    #[test]
    fn failure_does_not_advance_cursor() {
        let mut cursor = Cursor::new("-");
        advance_number(&mut cursor, ParsePolicy::STRICT);
        assert_eq!(cursor.pos(), 0);
    }
}
