use serde::{Deserialize, Serialize};

/// Display settings used when amounts are embedded in messages.
///
/// Not part of the persisted store; the host passes them to the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol printed before every amount (e.g., "R$", "$", "€")
    pub currency_symbol: String,

    /// Separator between groups of three integer digits
    pub thousands_separator: char,

    /// Separator before the decimals
    pub decimal_separator: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}
