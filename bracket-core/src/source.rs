//! Parsing entrants from `"<name> <rank>"` text lines

use std::num::ParseIntError;

use crate::entrant::Entrant;

/// Malformed entrant input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected \"<name> <rank>\", got {content:?}")]
    MissingRank { line: usize, content: String },

    #[error("line {line}: rank {value:?} is not an integer")]
    InvalidRank {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("entrant count {value:?} is not a non-negative integer")]
    InvalidCount { value: String },
}

/// Parse one `"<name> <rank>"` line (1-based `line` for error reports)
pub fn parse_entrant_line(line: usize, content: &str) -> Result<Entrant, ParseError> {
    let trimmed = content.trim();
    let (name, rank) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| ParseError::MissingRank {
            line,
            content: content.to_string(),
        })?;

    Ok(Entrant::new(name, parse_rank(line, rank)?))
}

/// Parse a rank field (1-based `line` for error reports)
pub fn parse_rank(line: usize, value: &str) -> Result<i32, ParseError> {
    let value = value.trim();
    value.parse().map_err(|source| ParseError::InvalidRank {
        line,
        value: value.to_string(),
        source,
    })
}

/// Parse a whole entrant list. Blank lines and `#` comments are skipped;
/// the first malformed line aborts.
pub fn parse_entrants(text: &str) -> Result<Vec<Entrant>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with('#')
        })
        .map(|(i, l)| parse_entrant_line(i + 1, l))
        .collect()
}

/// Parse the entrant count typed at an interactive prompt
pub fn parse_count(value: &str) -> Result<usize, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidCount {
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entrants() {
        let text = "alice 3\nbob 1\n\n# seeded later\ncarol   2\n";
        let entrants = parse_entrants(text).unwrap();
        assert_eq!(
            entrants,
            vec![
                Entrant::new("alice", 3),
                Entrant::new("bob", 1),
                Entrant::new("carol", 2)
            ]
        );
    }

    #[test]
    fn test_negative_rank() {
        assert_eq!(parse_entrant_line(1, "x -4").unwrap().rank, -4);
    }

    #[test]
    fn test_missing_rank() {
        let err = parse_entrants("alice 1\nbob\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingRank {
                line: 2,
                content: "bob".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_rank() {
        let err = parse_entrants("alice 1\n\nbob first\n").unwrap_err();
        match err {
            ParseError::InvalidRank { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "first");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rank_with_extra_field_is_invalid() {
        assert!(matches!(
            parse_entrant_line(1, "alice 1 2"),
            Err(ParseError::InvalidRank { .. })
        ));
    }

    #[test]
    fn test_parse_rank() {
        assert_eq!(parse_rank(1, " 12 "), Ok(12));
        assert!(matches!(
            parse_rank(4, "1.5"),
            Err(ParseError::InvalidRank { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 4\n"), Ok(4));
        assert_eq!(
            parse_count("four"),
            Err(ParseError::InvalidCount {
                value: "four".to_string()
            })
        );
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_entrants("\n\n"), Ok(vec![]));
    }
}
