//! Parsing of user-supplied quiz ids
//!
//! Ids come straight from the REPL argument, so parsing is lenient in the
//! same way as a classic `parseInt`: leading whitespace is skipped, an
//! optional sign is accepted, the leading run of digits is taken and any
//! trailing characters are ignored (`"12abc"` is `12`).

use thiserror::Error;

use super::entities::QuizId;

/// Why a raw id could not be turned into a [`QuizId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Falta el parámetro <id>.")]
    Missing,

    #[error("El valor del parámetro <id> no es un número.")]
    NotANumber,
}

/// Parse an optional raw argument into a quiz id.
pub fn parse_id(raw: Option<&str>) -> Result<QuizId, IdError> {
    let raw = raw.ok_or(IdError::Missing)?;
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Err(IdError::Missing);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(IdError::NotANumber);
    }

    let magnitude: i64 = unsigned[..digits_len]
        .parse()
        .map_err(|_| IdError::NotANumber)?;

    Ok(QuizId::new(if negative { -magnitude } else { magnitude }))
}
