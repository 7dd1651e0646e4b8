use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Season of birth as it appears in arrival descriptions ("born in spring").
///
/// Tokens are matched exactly and case-sensitively; anything else is left to
/// the caller, which falls back to [`Season::Spring`] so that an unrecognized
/// season never fails a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Fixed birth month and day used to synthesize a calendar date from an
    /// age-plus-season description. Every season maps to the 15th.
    pub fn month_day(self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 15),
            Season::Summer => (6, 15),
            Season::Fall => (9, 15),
            Season::Winter => (12, 15),
        }
    }

    /// Returns the lowercase token used in arrival descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(ModelError::UnknownSeason(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_tokens() {
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("fall".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
    }

    #[test]
    fn rejects_case_variants_and_unknown_tokens() {
        assert!("Spring".parse::<Season>().is_err());
        assert!("autumn".parse::<Season>().is_err());
        assert!("".parse::<Season>().is_err());
    }

    #[test]
    fn unknown_tokens_default_to_spring_at_the_call_site() {
        let season = "monsoon".parse::<Season>().unwrap_or_default();
        assert_eq!(season, Season::Spring);
        assert_eq!(season.month_day(), (3, 15));
    }

    #[test]
    fn display_round_trips() {
        for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            assert_eq!(season.to_string().parse::<Season>().unwrap(), season);
        }
    }
}
