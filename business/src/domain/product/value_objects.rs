use super::errors::ProductError;

/// Unit price of a product. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ProductError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProductError::InvalidPrice);
        }
        // `-0.0` passes the check above; store it as plain zero.
        Ok(Self(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_zero_price() {
        let price = Price::new(0.0).unwrap();
        assert_eq!(price.value(), 0.0);
    }

    #[test]
    fn should_normalize_negative_zero() {
        let price = Price::new(-0.0).unwrap();

        assert!(price.value().is_sign_positive());
        assert_eq!(price.value().to_string(), "0");
    }

    #[test]
    fn should_reject_negative_price() {
        assert!(matches!(Price::new(-0.01), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }
}
