use crate::calculator::{amount_from_percentage, balance, monthly_payment, percentage_from_amount};
use crate::error::QuoteError;
use crate::factors::Term;
use serde::{Deserialize, Serialize};

/// The down payment as the buyer entered it. Only the entered
/// representation is stored; the other one is derived against the base
/// price when the quote is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "camelCase")]
pub enum DownPayment {
    /// Percentage of the base price, `0..=100`.
    Percentage(f64),
    /// Absolute amount in the quote currency, `0..=base_price`.
    Amount(f64),
}

impl DownPayment {
    pub const DEFAULT_PERCENTAGE: f64 = 7.0;

    /// Starting amount offered in amount mode: the default percentage of
    /// the base price, never above the price itself.
    pub fn default_amount(base_price: f64) -> Self {
        let base_price = base_price.max(0.0);
        DownPayment::Amount((Self::DEFAULT_PERCENTAGE / 100.0 * base_price).min(base_price))
    }

    /// Resolves to `(amount, percentage)` against `base_price`, clamping the
    /// entered value into its valid range first.
    pub fn resolve(self, base_price: f64) -> (f64, f64) {
        match self {
            DownPayment::Percentage(pct) => {
                let pct = pct.clamp(0.0, 100.0);
                (amount_from_percentage(base_price, pct), if base_price > 0.0 { pct } else { 0.0 })
            }
            DownPayment::Amount(amount) => {
                let amount = amount.clamp(0.0, base_price);
                (amount, percentage_from_amount(base_price, amount))
            }
        }
    }
}

impl Default for DownPayment {
    fn default() -> Self {
        DownPayment::Percentage(Self::DEFAULT_PERCENTAGE)
    }
}

/// Everything needed to price and print one lot for one client.
///
/// In JSON every field is optional. A down payment given only by its mode
/// starts from that mode's default: 7 % in percentage mode, or
/// [`DownPayment::default_amount`] of the base price in amount mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "QuoteInputFields")]
pub struct QuoteInput {
    pub lot: String,
    pub client: String,
    pub advisor: String,
    pub area_m2: f64,
    pub base_price: f64,
    pub term: Term,
    pub down_payment: DownPayment,
}

impl Default for QuoteInput {
    fn default() -> Self {
        Self {
            lot: "2-7-29".to_string(),
            client: String::new(),
            advisor: String::new(),
            area_m2: 189.0,
            base_price: 90_587.41,
            term: Term::default(),
            down_payment: DownPayment::default(),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
enum DownPaymentMode {
    #[default]
    Percentage,
    Amount,
}

#[derive(Deserialize, Default)]
struct DownPaymentFields {
    #[serde(default)]
    mode: DownPaymentMode,
    value: Option<f64>,
}

/// Wire shape of [`QuoteInput`]; the down payment may omit its value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct QuoteInputFields {
    lot: String,
    client: String,
    advisor: String,
    area_m2: f64,
    base_price: f64,
    term: Term,
    down_payment: DownPaymentFields,
}

impl Default for QuoteInputFields {
    fn default() -> Self {
        let defaults = QuoteInput::default();
        Self {
            lot: defaults.lot,
            client: defaults.client,
            advisor: defaults.advisor,
            area_m2: defaults.area_m2,
            base_price: defaults.base_price,
            term: defaults.term,
            down_payment: DownPaymentFields::default(),
        }
    }
}

impl From<QuoteInputFields> for QuoteInput {
    fn from(fields: QuoteInputFields) -> Self {
        let down_payment = match (fields.down_payment.mode, fields.down_payment.value) {
            (DownPaymentMode::Percentage, Some(pct)) => DownPayment::Percentage(pct),
            (DownPaymentMode::Percentage, None) => DownPayment::default(),
            (DownPaymentMode::Amount, Some(amount)) => DownPayment::Amount(amount),
            (DownPaymentMode::Amount, None) => DownPayment::default_amount(fields.base_price),
        };
        Self {
            lot: fields.lot,
            client: fields.client,
            advisor: fields.advisor,
            area_m2: fields.area_m2,
            base_price: fields.base_price,
            term: fields.term,
            down_payment,
        }
    }
}

impl QuoteInput {
    /// Copy with surrounding whitespace removed from the identifying strings.
    pub fn trimmed(&self) -> Self {
        Self {
            lot: self.lot.trim().to_string(),
            client: self.client.trim().to_string(),
            advisor: self.advisor.trim().to_string(),
            ..self.clone()
        }
    }

    /// Rejects figures that cannot be priced: negative or non-finite area
    /// and price, non-finite down payment.
    pub fn check_figures(&self) -> Result<(), QuoteError> {
        if !self.area_m2.is_finite() || self.area_m2 < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "area must be a non-negative number, got {}",
                self.area_m2
            )));
        }
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "base price must be a non-negative number, got {}",
                self.base_price
            )));
        }
        let raw = match self.down_payment {
            DownPayment::Percentage(v) | DownPayment::Amount(v) => v,
        };
        if !raw.is_finite() {
            return Err(QuoteError::InvalidInput(format!(
                "down payment must be a finite number, got {}",
                raw
            )));
        }
        Ok(())
    }

    pub fn quote(&self) -> QuoteResult {
        QuoteResult::calculate(self.base_price, self.down_payment, self.term)
    }
}

/// Derived figures for one quote. Unrounded; rounding happens when the
/// figures are printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub base_price: f64,
    pub down_payment_amount: f64,
    pub down_payment_percentage: f64,
    pub balance: f64,
    pub term: Term,
    pub monthly_payment: f64,
}

impl QuoteResult {
    pub fn calculate(base_price: f64, down_payment: DownPayment, term: Term) -> Self {
        let base_price = base_price.max(0.0);
        let (amount, percentage) = down_payment.resolve(base_price);
        let balance = balance(base_price, amount);
        Self {
            base_price,
            down_payment_amount: amount,
            down_payment_percentage: percentage,
            balance,
            term,
            monthly_payment: monthly_payment(balance, term),
        }
    }

    pub fn months(&self) -> u32 {
        self.term.months()
    }

    /// Sum of all installments over the term.
    pub fn total_of_installments(&self) -> f64 {
        self.monthly_payment * f64::from(self.months())
    }
}
