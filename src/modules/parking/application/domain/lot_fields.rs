pub const MAX_LOCATION_NAME_LEN: usize = 150;
pub const MAX_ADDRESS_LEN: usize = 255;
pub const MAX_PIN_CODE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LotFieldError {
    #[error("Location name must be at most {} characters", MAX_LOCATION_NAME_LEN)]
    LocationNameTooLong,

    #[error("Address must be at most {} characters", MAX_ADDRESS_LEN)]
    AddressTooLong,

    #[error("Pin code must be at most {} characters", MAX_PIN_CODE_LEN)]
    PinCodeTooLong,
}

/// Column length limits of `parking_lots`, counted in characters.
pub fn check_lot_fields(
    prime_location_name: &str,
    address: &str,
    pin_code: &str,
) -> Result<(), LotFieldError> {
    if prime_location_name.chars().count() > MAX_LOCATION_NAME_LEN {
        return Err(LotFieldError::LocationNameTooLong);
    }
    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(LotFieldError::AddressTooLong);
    }
    if pin_code.chars().count() > MAX_PIN_CODE_LEN {
        return Err(LotFieldError::PinCodeTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_inclusive() {
        let name = "é".repeat(MAX_LOCATION_NAME_LEN);
        let address = "a".repeat(MAX_ADDRESS_LEN);
        let pin = "1".repeat(MAX_PIN_CODE_LEN);
        assert_eq!(check_lot_fields(&name, &address, &pin), Ok(()));
        assert_eq!(check_lot_fields("", "", ""), Ok(()));
    }

    #[test]
    fn each_field_over_its_limit_is_reported() {
        assert_eq!(
            check_lot_fields(&"n".repeat(MAX_LOCATION_NAME_LEN + 1), "", ""),
            Err(LotFieldError::LocationNameTooLong)
        );
        assert_eq!(
            check_lot_fields("Central Mall", &"a".repeat(MAX_ADDRESS_LEN + 1), ""),
            Err(LotFieldError::AddressTooLong)
        );
        assert_eq!(
            check_lot_fields("Central Mall", "1 Main Road", "12345678901"),
            Err(LotFieldError::PinCodeTooLong)
        );
    }
}
