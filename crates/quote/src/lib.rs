//! Quote calculation for lot sales.
//!
//! Derives the down payment, financed balance and monthly installment for a
//! lot from its base price, a down-payment choice and a financing term. The
//! monthly figure is the balance times a fixed per-term factor; there is no
//! amortization schedule.

mod calculator;
mod error;
mod factors;
mod model;

pub use calculator::{amount_from_percentage, balance, monthly_payment, percentage_from_amount};
pub use error::QuoteError;
pub use factors::{FACTOR_TABLE, Term, factor_for};
pub use model::{DownPayment, QuoteInput, QuoteResult};
