//! User-facing entry positions.
//!
//! The CLI numbers entries from 1 in journal order; the library indexes them
//! from 0. Positions can be given one by one ("3") or as inclusive ranges
//! ("3-5"). Every position is checked against the journal length before a
//! range is expanded, so a huge range fails instead of allocating.

use crate::error::{DreamzError, Result};

/// Parses one position or range into 0-based indexes of a journal holding
/// `len` entries.
pub fn parse_position_or_range(s: &str, len: usize) -> Result<Vec<usize>> {
    let s = s.trim();
    if let Some((start, end)) = s.split_once('-') {
        let start = parse_position(start)?;
        let end = parse_position(end)?;
        if start > end {
            return Err(DreamzError::Api(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start + 1,
                end + 1
            )));
        }
        ensure_in_range(end, len)?;
        return Ok((start..=end).collect());
    }
    let index = parse_position(s)?;
    ensure_in_range(index, len)?;
    Ok(vec![index])
}

/// Parses every input, expanding ranges. Duplicates are kept; order follows
/// the input.
pub fn parse_positions<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<usize>> {
    let mut indexes = Vec::new();
    for input in inputs {
        indexes.extend(parse_position_or_range(input.as_ref(), len)?);
    }
    Ok(indexes)
}

fn ensure_in_range(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(DreamzError::Api(format!(
            "Entry {} not found (the journal has {} entries)",
            index.saturating_add(1),
            len
        )))
    }
}

fn parse_position(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(DreamzError::Api("Positions start at 1".to_string())),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(DreamzError::Api(format!("Invalid position: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positions_become_zero_based() {
        assert_eq!(parse_position_or_range("1", 20).unwrap(), vec![0]);
        assert_eq!(parse_position_or_range(" 12 ", 20).unwrap(), vec![11]);
    }

    #[test]
    fn ranges_expand_inclusively() {
        assert_eq!(parse_position_or_range("2-4", 5).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_position_or_range("3-3", 5).unwrap(), vec![2]);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse_position_or_range("0", 5).is_err());
        assert!(parse_position_or_range("abc", 5).is_err());
        assert!(parse_position_or_range("5-2", 5).is_err());
        assert!(parse_position_or_range("-2", 5).is_err());
        assert!(parse_position_or_range("2-", 5).is_err());
    }

    #[test]
    fn parse_positions_flattens_inputs() {
        assert_eq!(parse_positions(&["5", "1-2"], 5).unwrap(), vec![4, 0, 1]);
    }

    #[test]
    fn missing_position_is_named() {
        let err = parse_positions(&["1", "4"], 3).unwrap_err();
        assert!(err.to_string().contains("Entry 4 not found"));
    }

    #[test]
    fn huge_ranges_fail_before_expanding() {
        let err = parse_position_or_range("1-18446744073709551615", 3).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(parse_position_or_range("1-1000000000", 3).is_err());
        assert!(parse_position_or_range("18446744073709551615", 3).is_err());
    }

    #[test]
    fn range_past_the_end_is_rejected() {
        let err = parse_position_or_range("2-4", 3).unwrap_err();
        assert!(err.to_string().contains("Entry 4 not found"));
    }
}
