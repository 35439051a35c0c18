//! Text form of an interval list.
//!
//! Three shapes are accepted, with all whitespace ignored:
//!
//! - nested brackets: `[[1,3],[2,6],[8,10]]`
//! - semicolon separated pairs: `1,3;2,6;8,10`
//! - a single pair: `1,3`

use crate::interval::Interval;

use super::error::ParseError;

/// Parses an interval list.
///
/// # Errors
///
/// Fails on an empty list, an unknown shape, a pair without exactly two
/// numbers, an unparsable number or a non-finite endpoint.
///
/// # Example
///
/// ```
/// use mergetrace::input::parse_intervals;
///
/// let a = parse_intervals("[[1,3], [2,6]]").unwrap();
/// let b = parse_intervals("1,3; 2,6").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_intervals(input: &str) -> Result<Vec<Interval>, ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }

    let pairs: Vec<&str> = if let Some(inner) = compact
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        bracket_pairs(inner, &compact)?
    } else if compact.contains(';') {
        compact.split(';').filter(|pair| !pair.is_empty()).collect()
    } else if compact.contains(',') {
        vec![compact.as_str()]
    } else {
        return Err(ParseError::UnrecognizedFormat(input.trim().to_string()));
    };

    if pairs.is_empty() {
        return Err(ParseError::Empty);
    }

    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| parse_pair(index, pair))
        .collect()
}

/// Splits the inside of `[...]` into the bodies of its `[a,b]` groups.
fn bracket_pairs<'a>(inner: &'a str, whole: &str) -> Result<Vec<&'a str>, ParseError> {
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    let body = inner
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ParseError::UnrecognizedFormat(whole.to_string()))?;
    Ok(body.split("],[").collect())
}

fn parse_pair(index: usize, pair: &str) -> Result<Interval, ParseError> {
    let tokens: Vec<&str> = if pair.is_empty() {
        Vec::new()
    } else {
        pair.split(',').collect()
    };
    let [start, end] = tokens.as_slice() else {
        return Err(ParseError::WrongArity {
            index,
            found: tokens.len(),
        });
    };
    let start = parse_number(index, start)?;
    let end = parse_number(index, end)?;
    Interval::new(start, end).map_err(|source| ParseError::InvalidInterval { index, source })
}

fn parse_number(index: usize, token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        index,
        token: token.to_string(),
    })
}

/// Formats intervals in the nested bracket form, e.g. `[[1,3],[2,6]]`.
///
/// An empty list formats as `[]`. Output parses back with [`parse_intervals`]
/// whenever the list is non-empty.
pub fn format_intervals(intervals: &[Interval]) -> String {
    let body: Vec<String> = intervals
        .iter()
        .map(|i| format!("[{},{}]", i.start(), i.end()))
        .collect();
    format!("[{}]", body.join(","))
}
