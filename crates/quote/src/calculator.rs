use crate::factors::Term;

/// Down-payment amount for a percentage of the base price.
///
/// The percentage is not clamped; callers keep it within `0..=100`.
pub fn amount_from_percentage(base_price: f64, percentage: f64) -> f64 {
    base_price * percentage / 100.0
}

/// Down-payment percentage for an amount. Zero when the base price is not
/// positive.
pub fn percentage_from_amount(base_price: f64, amount: f64) -> f64 {
    if base_price <= 0.0 {
        return 0.0;
    }
    amount / base_price * 100.0
}

/// Financed balance, floored at zero.
pub fn balance(base_price: f64, amount: f64) -> f64 {
    (base_price - amount).max(0.0)
}

/// Monthly installment for a financed balance over `term`.
pub fn monthly_payment(balance: f64, term: Term) -> f64 {
    balance * term.factor()
}
