//! Constraint expression parsing
//!
//! Handles:
//! - Single comparators: `= 1.2.3`, `!= 1.2.3`, `>= 1.2`, `< 2.0.0`
//! - Bare version literals (implicit `=`): `1.2.3`
//! - Pessimistic constraints: `~> 3.7`, `~> 3.7.1`
//! - Compound constraints: `>= 1.0.0, < 2.0.0`
//!
//! The pessimistic form expands here, at parse time, into its concrete
//! `>=`/`<` pair; nothing downstream ever sees a `~>` operator.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Comparator, ComparatorOp, Constraint, Version};
use crate::error::ParseError;

// Comparator symbol followed by the rest of the fragment. Two-character
// symbols come first so `>=` is not read as `>` then `=`.
static COMPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(~>|>=|<=|!=|=|>|<)\s*(.*)$").unwrap());

// Pre-release and build suffixes: dot-separated alphanumeric identifiers
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z][0-9A-Za-z.-]*$").unwrap());

/// Parse a constraint expression into its comparator conjunction.
///
/// The expression is split on commas; every fragment must parse. Pure
/// function of its input.
pub fn parse(text: &str) -> Result<Constraint, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut comparators = Vec::new();
    for fragment in trimmed.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(ParseError::empty_fragment(trimmed));
        }
        parse_fragment(fragment, &mut comparators)?;
    }
    Ok(Constraint::new(comparators))
}

/// Parse one comparator fragment, appending its comparator(s)
fn parse_fragment(fragment: &str, out: &mut Vec<Comparator>) -> Result<(), ParseError> {
    if let Some(caps) = COMPARATOR_RE.captures(fragment) {
        let symbol = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let literal = caps.get(2).map(|m| m.as_str()).unwrap_or_default().trim();
        if literal.is_empty() {
            return Err(ParseError::missing_version(fragment));
        }
        let version = parse_version(literal)?;

        if symbol == "~>" {
            // `~> v` means `>= v` and `<` the next boundary version
            let upper = version.pessimistic_upper();
            out.push(Comparator::new(ComparatorOp::GreaterOrEqual, version));
            out.push(Comparator::new(ComparatorOp::Less, upper));
        } else {
            let op = match symbol {
                "=" => ComparatorOp::Exact,
                "!=" => ComparatorOp::NotEqual,
                ">" => ComparatorOp::Greater,
                ">=" => ComparatorOp::GreaterOrEqual,
                "<" => ComparatorOp::Less,
                "<=" => ComparatorOp::LessOrEqual,
                _ => unreachable!(),
            };
            out.push(Comparator::new(op, version));
        }
        return Ok(());
    }

    // No comparator symbol: a bare version literal is an implicit `=`
    let starts_like_version = fragment
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == 'v');
    if starts_like_version {
        out.push(Comparator::new(ComparatorOp::Exact, parse_version(fragment)?));
        return Ok(());
    }

    Err(ParseError::unknown_comparator(fragment))
}

/// Parse a version literal: `["v"]major["."minor["."patch]]["-"pre]["+"build]`.
///
/// Candidate lists in the wild carry a leading `v`; it is tolerated on
/// input and never reproduced on output.
pub fn parse_version(literal: &str) -> Result<Version, ParseError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(ParseError::malformed_version(literal));
    }
    let rest = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let (rest, build) = match rest.split_once('+') {
        Some((head, build)) => {
            if !SUFFIX_RE.is_match(build) {
                return Err(ParseError::malformed_version(literal));
            }
            (head, Some(build.to_string()))
        }
        None => (rest, None),
    };

    let (numeric, prerelease) = match rest.split_once('-') {
        Some((head, prerelease)) => {
            if !SUFFIX_RE.is_match(prerelease) {
                return Err(ParseError::malformed_version(literal));
            }
            (head, Some(prerelease.to_string()))
        }
        None => (rest, None),
    };

    if numeric.is_empty() {
        return Err(ParseError::malformed_version(literal));
    }
    let segments: Vec<&str> = numeric.split('.').collect();
    if segments.len() > 3 {
        return Err(ParseError::malformed_version(literal));
    }

    let mut numbers = Vec::with_capacity(segments.len());
    for segment in &segments {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::non_numeric_segment(literal, *segment));
        }
        let value: u64 = segment
            .parse()
            .map_err(|_| ParseError::non_numeric_segment(literal, *segment))?;
        numbers.push(value);
    }

    Ok(Version {
        major: numbers[0],
        minor: numbers.get(1).copied(),
        patch: numbers.get(2).copied(),
        prerelease,
        build,
    })
}
