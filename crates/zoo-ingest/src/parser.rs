//! Free-text arrival record parser.
//!
//! Arrival lines follow a fixed clause grammar:
//!
//! ```text
//! <N> year old <sex> <species>, born in <season>, <color> color, <weight> pounds, from <origin>
//! ```
//!
//! Clauses are comma-delimited and trimmed; words inside a clause are matched
//! by position, never by keyword. Clauses past the fifth are ignored, so a
//! comma inside the origin truncates it ("from Friguia Park, Tunisia" keeps
//! only "Friguia Park").

use zoo_model::{ArrivalRecord, Season};

use crate::error::ParseError;

/// Minimum number of comma-separated clauses in a well-formed line.
const MIN_CLAUSES: usize = 5;

/// Parses one non-blank arrival line into an [`ArrivalRecord`].
pub fn parse_arrival(line: &str) -> Result<ArrivalRecord, ParseError> {
    let clauses: Vec<&str> = line.split(',').map(str::trim).collect();
    if clauses.len() < MIN_CLAUSES {
        return Err(ParseError::IncompleteLine {
            found: clauses.len(),
        });
    }

    // "<age> year old <sex> <species>"
    let mut words = clauses[0].split_whitespace();
    let age_token = words.next().ok_or_else(|| malformed(clauses[0]))?;
    let age: u32 = age_token.parse().map_err(|_| ParseError::BadAge {
        token: age_token.to_string(),
    })?;
    let mut words = words.skip(2); // "year" and "old", skipped by position
    let sex = words.next().ok_or_else(|| malformed(clauses[0]))?;
    let species = words.next().ok_or_else(|| malformed(clauses[0]))?;

    // "born in <season>"; an unrecognized season falls back to spring.
    let season_token = clauses[1]
        .split_whitespace()
        .nth(2)
        .ok_or_else(|| malformed(clauses[1]))?;
    let season = season_token.parse::<Season>().unwrap_or_default();

    // "<color> color"
    let color = clauses[2]
        .split_whitespace()
        .next()
        .ok_or_else(|| malformed(clauses[2]))?;

    // "<weight> pounds"
    let weight_token = clauses[3]
        .split_whitespace()
        .next()
        .ok_or_else(|| malformed(clauses[3]))?;
    let weight: u32 = weight_token.parse().map_err(|_| ParseError::BadWeight {
        token: weight_token.to_string(),
    })?;

    // "from <origin>"
    let origin = clauses[4].strip_prefix("from ").unwrap_or(clauses[4]);

    Ok(ArrivalRecord {
        age,
        sex: sex.to_string(),
        species: species.to_string(),
        season,
        color: color.to_string(),
        weight,
        origin: origin.to_string(),
    })
}

fn malformed(clause: &str) -> ParseError {
    ParseError::MalformedClause {
        clause: clause.to_string(),
    }
}
