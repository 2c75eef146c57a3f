use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;

/// Проверка рейза. Порядок фиксирован:
/// 1) сумма рейза > 0;
/// 2) to_call + amount не меньше анте;
/// 3) хватает фишек на to_call + amount.
///
/// Возвращает, сколько всего фишек уходит в банк.
pub fn validate_raise(
    balance: Chips,
    to_call: Chips,
    amount: Chips,
    ante: Chips,
) -> Result<Chips, EngineError> {
    if amount.is_zero() {
        return Err(EngineError::InvalidRaiseAmount);
    }

    let commitment = to_call + amount;
    if commitment < ante {
        return Err(EngineError::BelowAnteFloor { commitment, ante });
    }

    if balance < commitment {
        return Err(EngineError::InsufficientChips {
            needed: commitment,
            available: balance,
        });
    }

    Ok(commitment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_checked_before_balance() {
        let err = validate_raise(Chips(0), Chips(0), Chips(1), Chips(5)).unwrap_err();
        assert!(matches!(err, EngineError::BelowAnteFloor { .. }));
    }

    #[test]
    fn to_call_counts_towards_the_floor() {
        assert_eq!(validate_raise(Chips(50), Chips(4), Chips(1), Chips(5)), Ok(Chips(5)));
    }
}
