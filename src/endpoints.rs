//! Turns the user's textual endpoints such as `(12, 40)` into grid points. User input is
//! 1-based and runs up to [GRID_SIZE]; the returned points are 0-based.
use crate::GRID_SIZE;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Why a pair of endpoints cannot be searched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointError {
    /// At least one endpoint is not of the form `(x, y)` with both values in `1..=50`.
    Malformed,
    /// The endpoints are identical or one of them lies on a wall.
    Conflicting,
}

impl EndpointError {
    /// Numeric code shown by front ends, 0 being reserved for success.
    pub fn code(&self) -> u8 {
        match self {
            EndpointError::Malformed => 1,
            EndpointError::Conflicting => 2,
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::Malformed => write!(f, "Input endpoints in valid format"),
            EndpointError::Conflicting => write!(f, "Endpoints are the same or in a wall"),
        }
    }
}

impl std::error::Error for EndpointError {}

fn parse_coordinate(field: &str) -> Option<i32> {
    let value = field.replace(['(', ')'], "").trim().parse::<i32>().ok()?;
    (1..=GRID_SIZE as i32).contains(&value).then_some(value - 1)
}

/// Parses a single `(x, y)` endpoint, returning [None] if it is malformed or out of range.
pub fn parse_endpoint(raw: &str) -> Option<Point> {
    // "(1,1)" is the shortest valid input
    if raw.chars().count() < 5 || !raw.starts_with('(') || !raw.ends_with(')') {
        debug!("Endpoint {:?} is not of the form (x, y)", raw);
        return None;
    }
    let point = raw
        .split(',')
        .collect_tuple::<(&str, &str)>()
        .and_then(|(x, y)| Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?)));
    if point.is_none() {
        debug!("Endpoint {:?} has invalid coordinates", raw);
    }
    point
}

/// Parses the start and then the end endpoint. Parsing stops at the first endpoint that fails,
/// so the result holds two points on success, one if only the start was valid and none
/// otherwise.
pub fn parse_endpoints(raw_start: &str, raw_end: &str) -> Vec<Point> {
    [raw_start, raw_end]
        .into_iter()
        .map_while(parse_endpoint)
        .collect()
}

/// Checks a pair of textual endpoints before they are handed to a solver: both must parse,
/// they must differ and neither may be a wall.
pub fn validate_endpoints<S: BuildHasher>(
    raw_start: &str,
    raw_end: &str,
    walls: &HashSet<Point, S>,
) -> Result<(Point, Point), EndpointError> {
    let (start, end) = parse_endpoints(raw_start, raw_end)
        .into_iter()
        .collect_tuple::<(Point, Point)>()
        .ok_or(EndpointError::Malformed)?;
    if start == end || walls.contains(&start) || walls.contains(&end) {
        return Err(EndpointError::Conflicting);
    }
    Ok((start, end))
}
