//! Supported currencies and their symbols.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// A currency from the closed set of supported codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Parses an ISO 4217 code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

lazy_static! {
    /// Currency code to symbol for every supported currency.
    pub static ref CURRENCY_SYMBOLS: FxHashMap<&'static str, &'static str> = Currency::ALL
        .iter()
        .map(|currency| (currency.code(), currency.symbol()))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::Eur));
        assert_eq!(Currency::from_code("GBP"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code("usd"), None);
        assert_eq!(Currency::from_code("ABC"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_symbol_table_matches_enum() {
        assert_eq!(CURRENCY_SYMBOLS.len(), Currency::ALL.len());
        for currency in Currency::ALL {
            assert_eq!(CURRENCY_SYMBOLS.get(currency.code()), Some(&currency.symbol()));
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(CURRENCY_SYMBOLS["EUR"], "€");
        assert_eq!(CURRENCY_SYMBOLS["GBP"], "£");
        assert!(!CURRENCY_SYMBOLS.contains_key("JPY"));
    }
}
