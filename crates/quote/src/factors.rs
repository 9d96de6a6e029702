use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monthly payment factor per financing term in years.
///
/// Multiplying the financed balance by the factor gives the installment of
/// the reference schedule exactly, without re-deriving an amortization
/// formula.
pub const FACTOR_TABLE: [(u32, f64); 7] = [
    (4, 0.03205147),
    (5, 0.02761891),
    (6, 0.02512613),
    (7, 0.02281223),
    (8, 0.02158101),
    (9, 0.02067487),
    (10, 0.01999317),
];

/// Looks up the factor for a term, `None` if the term is not offered.
pub fn factor_for(years: u32) -> Option<f64> {
    FACTOR_TABLE
        .iter()
        .find(|(term, _)| *term == years)
        .map(|(_, factor)| *factor)
}

/// A financing term that is guaranteed to have a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Term(u32);

impl Term {
    pub const SHORTEST: Term = Term(4);

    pub fn new(years: u32) -> Result<Self, QuoteError> {
        if factor_for(years).is_some() {
            Ok(Term(years))
        } else {
            Err(QuoteError::UnsupportedTerm(years))
        }
    }

    /// Every term offered, shortest first.
    pub fn all() -> impl Iterator<Item = Term> {
        FACTOR_TABLE.iter().map(|(years, _)| Term(*years))
    }

    pub fn years(self) -> u32 {
        self.0
    }

    pub fn months(self) -> u32 {
        self.0 * 12
    }

    pub fn factor(self) -> f64 {
        // Construction goes through `new`, so the lookup always hits.
        factor_for(self.0).unwrap_or_default()
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::SHORTEST
    }
}

impl TryFrom<u32> for Term {
    type Error = QuoteError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Term::new(years)
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} años", self.0)
    }
}
