use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    pub rows: usize,
    pub cols: usize,
    pub seed: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("missing test case count")]
    MissingCount,
    #[error("line {line}: not an integer `{value}`")]
    NotInteger { line: usize, value: String },
    #[error("line {line}: expected test case {case} of {count}")]
    MissingCase { line: usize, case: usize, count: usize },
    #[error("line {line}: expected `rows cols seed`, got {found} fields")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: a {rows}x{cols} maze needs at least two cells")]
    TooSmall { line: usize, rows: usize, cols: usize },
}

/// Parse the count line followed by one `rows cols seed` line per case.
///
/// Lines after the last case are ignored.
pub fn parse_cases(text: &str) -> Result<Vec<CaseSpec>, InputError> {
    let mut lines = text.lines().enumerate().map(|(n, line)| (n + 1, line.trim()));

    let (count_line, count) = lines.next().ok_or(InputError::MissingCount)?;
    if count.is_empty() {
        return Err(InputError::MissingCount);
    }
    let count: usize = parse_int(count_line, count)?;

    let mut cases = Vec::with_capacity(count);
    for case in 1..=count {
        let (line, content) = lines.next().ok_or(InputError::MissingCase {
            line: count_line + case,
            case,
            count,
        })?;
        cases.push(parse_case(line, content)?);
    }

    Ok(cases)
}

fn parse_case(line: usize, content: &str) -> Result<CaseSpec, InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [rows, cols, seed] = fields.as_slice() else {
        return Err(InputError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let rows: usize = parse_int(line, rows)?;
    let cols: usize = parse_int(line, cols)?;
    let seed: i64 = parse_int(line, seed)?;

    if rows.saturating_mul(cols) < 2 {
        return Err(InputError::TooSmall { line, rows, cols });
    }

    Ok(CaseSpec { rows, cols, seed })
}

fn parse_int<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::NotInteger {
        line,
        value: value.to_string(),
    })
}
