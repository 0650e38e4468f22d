//! Target-market locale rules: spelling variant, currency, index reference.

use serde::{Deserialize, Serialize};

/// Markets the portal publishes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    Australia,
    UnitedKingdom,
    Canada,
    UnitedStates,
}

impl Market {
    /// All markets, in selector order.
    pub const ALL: [Market; 4] = [
        Market::Australia,
        Market::UnitedKingdom,
        Market::Canada,
        Market::UnitedStates,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Market::Australia => "Australia",
            Market::UnitedKingdom => "United Kingdom",
            Market::Canada => "Canada",
            Market::UnitedStates => "United States",
        }
    }

    /// The locale directive injected into the system prompt.
    pub fn directive(&self) -> &'static str {
        match self {
            Market::Australia => "Use Australian English, prices in AUD, reference the ASX.",
            Market::UnitedKingdom => "Use British English, prices in GBP, reference the FTSE.",
            Market::Canada => "Use Canadian English, prices in CAD, reference the TSX.",
            Market::UnitedStates => "Use American English, prices in USD, reference the S&P 500.",
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_market_names_currency_and_index() {
        for market in Market::ALL {
            let directive = market.directive();
            assert!(directive.contains("English"));
            assert!(directive.contains("prices in"));
            assert!(directive.contains("reference the"));
        }
    }

    #[test]
    fn test_australia_directive() {
        assert_eq!(
            Market::Australia.directive(),
            "Use Australian English, prices in AUD, reference the ASX."
        );
    }
}
