// src/domain/estimator.rs

/// Estimated rental income range derived from a purchase price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeEstimate {
    pub monthly_min: f64,
    pub monthly_max: f64,
    pub annual_min: f64,
    pub annual_max: f64,
}

// Amortization assumptions: 25% down, 30-year term, rates bracketing the
// range we consider plausible. Monthly figures round to the nearest $100.
const DOWN_PAYMENT_SHARE: f64 = 0.25;
const TERM_MONTHS: i32 = 360;
const RATE_LOW: f64 = 0.065;
const RATE_HIGH: f64 = 0.075;

/// Pure function of price: the monthly payment on a 75% loan at the low and
/// high rate, each rounded to the nearest 100, with annual = monthly * 12.
pub fn estimate_income(price: f64) -> IncomeEstimate {
    let monthly_min = round_to_hundred(monthly_payment(price, RATE_LOW));
    let monthly_max = round_to_hundred(monthly_payment(price, RATE_HIGH));
    IncomeEstimate {
        monthly_min,
        monthly_max,
        annual_min: monthly_min * 12.0,
        annual_max: monthly_max * 12.0,
    }
}

fn monthly_payment(price: f64, annual_rate: f64) -> f64 {
    let loan = price * (1.0 - DOWN_PAYMENT_SHARE);
    let r = annual_rate / 12.0;
    (loan * r) / (1.0 - (1.0 + r).powi(-TERM_MONTHS))
}

fn round_to_hundred(n: f64) -> f64 {
    (n / 100.0).round() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered_and_annualized() {
        for price in [150_000.0, 500_000.0, 1_299_000.0, 6_550_000.0] {
            let est = estimate_income(price);
            assert!(est.monthly_min > 0.0, "price {price}");
            assert!(est.monthly_min <= est.monthly_max, "price {price}");
            assert_eq!(est.annual_min, est.monthly_min * 12.0);
            assert_eq!(est.annual_max, est.monthly_max * 12.0);
        }
    }

    #[test]
    fn monthly_bounds_round_to_hundreds() {
        let est = estimate_income(1_299_000.0);
        assert_eq!(est.monthly_min % 100.0, 0.0);
        assert_eq!(est.monthly_max % 100.0, 0.0);
    }

    #[test]
    fn estimate_is_deterministic_and_monotone() {
        assert_eq!(estimate_income(750_000.0), estimate_income(750_000.0));

        let small = estimate_income(400_000.0);
        let large = estimate_income(4_000_000.0);
        assert!(small.monthly_max < large.monthly_min);
    }

    #[test]
    fn million_dollar_home_lands_in_expected_band() {
        // 75% loan at 6.5%-7.5% over 30 years sits near $4.7k-$5.2k/month.
        let est = estimate_income(1_000_000.0);
        assert!(est.monthly_min >= 4_000.0 && est.monthly_min <= 5_000.0);
        assert!(est.monthly_max >= 4_800.0 && est.monthly_max <= 5_600.0);
    }
}
