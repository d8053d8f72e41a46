use super::country;

use std::fmt;

/// How a company-name search matches against registered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    MatchBeginning,
    MatchBlock,
    ExactValue,
    MatchWords,
    ExactBlock,
    ClosestKeywords,
    MatchBlockOrWords,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::MatchBeginning => "MatchBeginning",
            MatchType::MatchBlock => "MatchBlock",
            MatchType::ExactValue => "ExactValue",
            MatchType::MatchWords => "MatchWords",
            MatchType::ExactBlock => "ExactBlock",
            MatchType::ClosestKeywords => "ClosestKeywords",
            MatchType::MatchBlockOrWords => "MatchBlockOrWords",
        }
    }

    /// Match types the service accepts for `country_code`, preferred first.
    /// Empty when the country has no restriction.
    pub fn allowed_for(country_code: &str) -> &'static [MatchType] {
        match country_code.to_ascii_uppercase().as_str() {
            country::FRANCE => &[
                MatchType::MatchBeginning,
                MatchType::MatchBlock,
                MatchType::ExactValue,
            ],
            _ => &[],
        }
    }

    /// The match type sent for a name search in `country_code`.
    pub fn for_country(country_code: &str) -> MatchType {
        Self::allowed_for(country_code)
            .first()
            .copied()
            .unwrap_or(MatchType::MatchBlock)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
