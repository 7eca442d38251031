use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::Scenario;
use crate::grid::{GridDims, Vec2};
use crate::wind::WindField;

/// Malformed input is fatal: the run aborts before simulation starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected {expected} integers, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid integer {token:?}")]
    BadInt { line: usize, token: String },
    #[error("input ends early: expected {expected} lines, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("line {line}: values out of range")]
    OutOfRange { line: usize },
}

pub fn load(path: &Path) -> Result<Scenario, LoadError> {
    parse(&fs::read_to_string(path)?)
}

/// Input format (line-oriented):
///   line 1: rows cols altitudes
///   line 2: target_count radius balloon_count total_ticks
///   line 3: start_row start_col
///   target_count lines: row col
///   altitudes * rows lines: cols "dr dc" pairs, altitude-major then
///   row-major.
pub fn parse(text: &str) -> Result<Scenario, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 3 {
        return Err(LoadError::Truncated {
            expected: 3,
            found: lines.len(),
        });
    }

    let header = ints(lines[0], 0, 3)?;
    let (rows, cols, alts) = (header[0], header[1], header[2]);
    if rows < 1 || cols < 1 || !(1..=255).contains(&alts) {
        return Err(LoadError::OutOfRange { line: 1 });
    }
    let counts = ints(lines[1], 1, 4)?;
    if counts.iter().any(|&v| v < 0) {
        return Err(LoadError::OutOfRange { line: 2 });
    }
    let (target_count, radius, balloon_count, total_ticks) =
        (counts[0] as usize, counts[1], counts[2] as usize, counts[3] as usize);
    let start_line = ints(lines[2], 2, 2)?;
    let start = Vec2::new(start_line[0], start_line[1]);

    let wind_lines = alts as usize * rows as usize;
    let expected = 3 + target_count + wind_lines;
    if lines.len() < expected {
        return Err(LoadError::Truncated {
            expected,
            found: lines.len(),
        });
    }

    let mut targets = Vec::with_capacity(target_count);
    for i in 0..target_count {
        let t = ints(lines[3 + i], 3 + i, 2)?;
        targets.push(Vec2::new(t[0], t[1]));
    }

    let dims = GridDims {
        rows,
        cols,
        alts: alts as u8,
    };
    let mut data = Vec::with_capacity(wind_lines * cols as usize);
    for l in 0..wind_lines {
        let idx = 3 + target_count + l;
        let pairs = ints(lines[idx], idx, 2 * cols as usize)?;
        for pair in pairs.chunks_exact(2) {
            data.push(Vec2::new(pair[0], pair[1]));
        }
    }

    Ok(Scenario {
        dims,
        radius,
        balloon_count,
        total_ticks,
        start,
        targets,
        wind: WindField::new(dims, data),
    })
}

fn ints(line: &str, idx: usize, expected: usize) -> Result<Vec<i32>, LoadError> {
    let mut out = Vec::with_capacity(expected);
    for token in line.split_whitespace() {
        out.push(token.parse::<i32>().map_err(|_| LoadError::BadInt {
            line: idx + 1,
            token: token.to_string(),
        })?);
    }
    if out.len() != expected {
        return Err(LoadError::TokenCount {
            line: idx + 1,
            expected,
            found: out.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> String {
        let mut s = String::new();
        s.push_str("3 4 2\n");
        s.push_str("2 1 5 7\n");
        s.push_str("1 0\n");
        s.push_str("2 3\n");
        s.push_str("3 1\n");
        // 2 tiers * 3 rows, 4 vectors per line
        for tier in 1..=2 {
            for row in 0..3 {
                let mut line = String::new();
                for col in 0..4 {
                    line.push_str(&format!("{} {} ", tier * 10 + row, col));
                }
                s.push_str(line.trim_end());
                s.push('\n');
            }
        }
        s
    }

    #[test]
    fn parses_a_complete_scenario() {
        let sc = parse(&sample()).unwrap();
        assert_eq!(sc.dims.rows, 3);
        assert_eq!(sc.dims.cols, 4);
        assert_eq!(sc.dims.alts, 2);
        assert_eq!(sc.radius, 1);
        assert_eq!(sc.balloon_count, 5);
        assert_eq!(sc.total_ticks, 7);
        assert_eq!(sc.start, Vec2::new(1, 0));
        assert_eq!(sc.targets, vec![Vec2::new(2, 3), Vec2::new(3, 1)]);
        // Altitude-major then row-major ordering
        assert_eq!(sc.wind.at(0, 0, 1), Vec2::new(10, 0));
        assert_eq!(sc.wind.at(2, 3, 1), Vec2::new(12, 3));
        assert_eq!(sc.wind.at(1, 2, 2), Vec2::new(21, 2));
    }

    #[test]
    fn missing_wind_rows_are_fatal() {
        let mut text = sample();
        text = text.lines().take(8).collect::<Vec<_>>().join("\n");
        match parse(&text) {
            Err(LoadError::Truncated { expected: 11, found: 8 }) => {}
            other => panic!("expected Truncated, got {:?}", other.err()),
        }
    }

    #[test]
    fn wrong_token_counts_are_fatal() {
        let text = sample().replace("2 1 5 7", "2 1 5");
        assert!(matches!(
            parse(&text),
            Err(LoadError::TokenCount { line: 2, expected: 4, found: 3 })
        ));
    }

    #[test]
    fn nonpositive_grid_dimensions_are_fatal() {
        let text = sample().replace("3 4 2", "0 4 2");
        assert!(matches!(parse(&text), Err(LoadError::OutOfRange { line: 1 })));
    }

    #[test]
    fn non_integer_tokens_are_fatal() {
        let text = sample().replace("1 0\n2 3", "1 0\nx 3");
        assert!(matches!(parse(&text), Err(LoadError::BadInt { line: 4, .. })));
    }
}
