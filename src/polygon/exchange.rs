// src/polygon/exchange.rs
// Text exchange format: `<n> <x1> <y1> ... <xn> <yn>`.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::polygon::GridPoint;

/// Coordinate frame used when a polygon is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisConvention {
    /// Y up: `y' = max_y - y`, `x' = x - min_x`. The vertex order reads
    /// counter-clockwise in the ordinary Cartesian sense.
    #[default]
    Standard,
    /// Raw grid coordinates, y pointing down.
    Mirrored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordLayout {
    /// The whole record on one line.
    #[default]
    SingleLine,
    /// The count on its own line, then one `x y` pair per line.
    MultiLine,
}

/// Maps grid coordinates into the requested convention.
pub fn apply_convention(points: &[GridPoint], convention: AxisConvention) -> Vec<GridPoint> {
    match convention {
        AxisConvention::Mirrored => points.to_vec(),
        AxisConvention::Standard => {
            let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
            let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);
            points
                .iter()
                .map(|p| GridPoint::new(p.x - min_x, max_y - p.y))
                .collect()
        }
    }
}

/// Formats one newline-terminated record.
pub fn format_record(points: &[GridPoint], layout: RecordLayout) -> String {
    let mut out = String::with_capacity(8 + points.len() * 8);
    match layout {
        RecordLayout::SingleLine => {
            let _ = write!(out, "{}", points.len());
            for p in points {
                let _ = write!(out, " {} {}", p.x, p.y);
            }
            out.push('\n');
        }
        RecordLayout::MultiLine => {
            let _ = writeln!(out, "{}", points.len());
            for p in points {
                let _ = writeln!(out, "{} {}", p.x, p.y);
            }
        }
    }
    out
}

pub fn write_record<W: Write>(
    writer: &mut W,
    points: &[GridPoint],
    layout: RecordLayout,
) -> io::Result<()> {
    writer.write_all(format_record(points, layout).as_bytes())
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, ExchangeError> {
    token.parse().map_err(|_| ExchangeError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Parses one record in either layout. Whitespace, including newlines, only
/// separates tokens.
pub fn parse_record(text: &str) -> Result<Vec<GridPoint>, ExchangeError> {
    let mut tokens = text.split_whitespace();
    let announced: usize = parse_number(tokens.next().ok_or(ExchangeError::Empty)?)?;
    let coords = tokens
        .map(parse_number::<i32>)
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() != announced * 2 {
        return Err(ExchangeError::CoordinateCount {
            announced,
            found: coords.len(),
        });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|pair| GridPoint::new(pair[0], pair[1]))
        .collect())
}

/// Reads the generation request: polygon count, then vertex count.
pub fn parse_request(text: &str) -> Result<(usize, usize), ExchangeError> {
    let mut tokens = text.split_whitespace();
    let count = parse_number(tokens.next().ok_or(ExchangeError::IncompleteRequest)?)?;
    let vertices = parse_number(tokens.next().ok_or(ExchangeError::IncompleteRequest)?)?;
    Ok((count, vertices))
}
