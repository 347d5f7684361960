//! Map input: a point count followed by that many coordinate pairs.

use std::io::Read;

use log::warn;

use crate::distance::Geometry;
use crate::error::{Error, Result};

/// Reads a map from any reader. See [`parse_map`] for the format.
pub fn read_map<R: Read>(mut reader: R) -> Result<Geometry> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_map(&input)
}

/// Parses whitespace-separated map text: `N` followed by `N` pairs of
/// floating-point coordinates. Point ids follow input order.
///
/// Tokens after the last pair are ignored.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_map;
///
/// let geometry = parse_map("3\n0 0\n1.5 2\n-3 4e1\n").unwrap();
/// assert_eq!(geometry.size(), 3);
/// assert_eq!(geometry.point_at(2).y(), 40.0);
/// ```
pub fn parse_map(input: &str) -> Result<Geometry> {
    let mut tokens = input.split_whitespace().enumerate();

    let (_, count_tok) = tokens
        .next()
        .ok_or_else(|| Error::invalid_input("empty input: expected a point count"))?;
    let n: usize = count_tok.parse().map_err(|_| {
        Error::invalid_input(format!("Token 1: invalid point count: {count_tok}"))
    })?;
    if n == 0 {
        return Err(Error::invalid_input("point count must be at least 1"));
    }

    // `n` is untrusted; each pair needs at least two bytes of input.
    let mut coords = Vec::with_capacity(n.min(input.len() / 2));
    for point in 0..n {
        let x = next_coordinate(&mut tokens, point, "x")?;
        let y = next_coordinate(&mut tokens, point, "y")?;
        coords.push((x, y));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("ignoring {trailing} trailing token(s) after {n} points");
    }

    Geometry::from_coords(&coords)
}

fn next_coordinate<'a, I>(tokens: &mut I, point: usize, axis: &str) -> Result<f64>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let (idx, tok) = tokens.next().ok_or_else(|| {
        Error::invalid_input(format!("point {point}: missing {axis} coordinate"))
    })?;
    let value: f64 = tok.parse().map_err(|_| {
        Error::invalid_input(format!(
            "Token {}: invalid {axis} coordinate for point {point}: {tok}",
            idx + 1
        ))
    })?;
    if !value.is_finite() {
        return Err(Error::invalid_input(format!(
            "Token {}: non-finite {axis} coordinate for point {point}: {tok}",
            idx + 1
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        let g = parse_map("4\n0 0\n1 0\n1 1\n0 1\n").expect("valid");
        assert_eq!(g.size(), 4);
        assert_eq!(g.point_at(2).x(), 1.0);
        assert_eq!(g.point_at(3).id(), 3);
    }

    #[test]
    fn test_parse_single_point() {
        let g = parse_map("1\n  -2.5   7\n").expect("valid");
        assert_eq!(g.size(), 1);
        assert_eq!(g.point_at(0).x(), -2.5);
    }

    #[test]
    fn test_parse_rejects_zero_count() {
        assert!(matches!(parse_map("0\n"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_bad_count() {
        assert!(parse_map("").is_err());
        assert!(parse_map("-3\n0 0").is_err());
        assert!(parse_map("two\n0 0\n1 1").is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_input() {
        let err = parse_map("3\n0 0\n1 1\n").expect_err("truncated");
        assert!(err.to_string().contains("point 2"));
        assert!(parse_map("2\n0 0\n1").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_coordinate() {
        let err = parse_map("2\n0 0\n1 abc\n").expect_err("malformed");
        assert!(err.to_string().contains("Token 5"));
        assert!(parse_map("1\nNaN 0\n").is_err());
        assert!(parse_map("1\n0 inf\n").is_err());
    }

    #[test]
    fn test_parse_huge_count_is_invalid_input() {
        let err = parse_map("18446744073709551615\n0 0\n");
        assert!(matches!(err, Err(Error::InvalidInput(_))));
        let err = parse_map("100000000000\n0 0\n1 1\n");
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let g = parse_map("2\n0 0\n3 4\n99 99\n").expect("valid");
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn test_read_map_from_reader() {
        let g = read_map("2 0 0 3 4".as_bytes()).expect("valid");
        assert!((g.distance(0, 1) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_duplicate_points_allowed() {
        let g = parse_map("3\n1 1\n1 1\n1 1\n").expect("valid");
        assert_eq!(g.distance(0, 2), 0.0);
    }
}
