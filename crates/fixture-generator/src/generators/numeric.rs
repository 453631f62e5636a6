//! Numeric value generators.

use fixture_core::ColumnType;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Generate a random MONEY amount in the given range (inclusive),
/// rounded to the MONEY scale.
pub fn money_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Decimal {
    let value = rng.random_range(min..=max);
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(ColumnType::MONEY_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_money_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = Decimal::new(5, 0);
        let max = Decimal::new(2000, 0);

        for _ in 0..100 {
            let v = money_range(&mut rng, 5.0, 2000.0);
            assert!(v >= min && v <= max, "{v} out of range");
            assert!(v.scale() <= ColumnType::MONEY_SCALE);
        }
    }
}
