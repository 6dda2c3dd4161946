use crate::core::models::ring::RingAtom;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextInputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TextParseErrorKind,
    },
    #[error("Unexpected end of input: expected {expected} {what}, got {found}")]
    UnexpectedEof {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextParseErrorKind {
    #[error("Invalid number '{value}'")]
    InvalidFloat { value: String },
    #[error("Expected {expected} numbers, found {found}")]
    WrongFieldCount { expected: usize, found: usize },
    #[error("Atom line must have the form 'LABEL x y z' (got '{content}')")]
    MalformedAtomLine { content: String },
}

fn parse_float(token: &str) -> Result<f64, TextParseErrorKind> {
    token
        .parse::<f64>()
        .map_err(|_| TextParseErrorKind::InvalidFloat {
            value: token.to_string(),
        })
}

/// Parses one printed row of a shielding tensor: exactly three whitespace-separated numbers.
pub fn parse_tensor_row(line: &str) -> Result<[f64; 3], TextParseErrorKind> {
    let values = line
        .split_whitespace()
        .map(parse_float)
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(TextParseErrorKind::WrongFieldCount {
            expected: 3,
            found: values.len(),
        }),
    }
}

/// Parses an atom line of the form `LABEL x y z`.
pub fn parse_atom_line(line: &str) -> Result<RingAtom, TextParseErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [label, x, y, z] => Ok(RingAtom::new(
            *label,
            Point3::new(parse_float(x)?, parse_float(y)?, parse_float(z)?),
        )),
        _ => Err(TextParseErrorKind::MalformedAtomLine {
            content: line.trim().to_string(),
        }),
    }
}

/// Atoms that must be read before a blank line ends centroid input. Fewer atoms
/// than this can only be ended by EOF.
pub const MIN_ATOMS_BEFORE_BLANK: usize = 4;

/// Line-numbered reader over a [`BufRead`].
///
/// The line counter runs across calls, so when a tensor and then its ring atoms come
/// from one stream, a parse error in the atom block reports its line in that stream.
/// Lines are taken one at a time rather than through `lines()` so that nothing past the
/// last consumed line is pulled from an interactive reader.
pub struct TextReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> TextReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Reads the three rows of a shielding tensor, skipping blank lines.
    pub fn read_tensor(&mut self) -> Result<[[f64; 3]; 3], TextInputError> {
        let mut rows = Vec::with_capacity(3);
        self.for_each_nonblank(3, "tensor rows", |line_num, line| {
            let row = parse_tensor_row(line).map_err(|kind| TextInputError::Parse {
                line: line_num,
                kind,
            })?;
            rows.push(row);
            Ok(())
        })?;
        Ok([rows[0], rows[1], rows[2]])
    }

    /// Reads exactly `count` atom lines, skipping blank lines.
    pub fn read_ring_atoms(&mut self, count: usize) -> Result<Vec<RingAtom>, TextInputError> {
        let mut atoms = Vec::with_capacity(count);
        self.for_each_nonblank(count, "atom lines", |line_num, line| {
            atoms.push(parse_atom_line_at(line_num, line)?);
            Ok(())
        })?;
        Ok(atoms)
    }

    /// Reads atom lines for the ring centroid.
    ///
    /// A blank line ends the list only once at least [`MIN_ATOMS_BEFORE_BLANK`] atoms
    /// are in; earlier blank lines are skipped, so a stray newline partway through a
    /// ring does not truncate it. EOF ends the list at any count.
    pub fn read_ring_atoms_until_blank(&mut self) -> Result<Vec<RingAtom>, TextInputError> {
        let mut atoms = Vec::new();
        let mut buf = String::new();
        while self.next_line(&mut buf)? {
            let line = buf.trim();
            if line.is_empty() {
                if atoms.len() >= MIN_ATOMS_BEFORE_BLANK {
                    break;
                }
                continue;
            }
            atoms.push(parse_atom_line_at(self.line, line)?);
        }
        Ok(atoms)
    }

    fn next_line(&mut self, buf: &mut String) -> Result<bool, TextInputError> {
        buf.clear();
        if self.inner.read_line(buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }

    fn for_each_nonblank<F>(
        &mut self,
        expected: usize,
        what: &'static str,
        mut handle: F,
    ) -> Result<(), TextInputError>
    where
        F: FnMut(usize, &str) -> Result<(), TextInputError>,
    {
        let mut found = 0;
        let mut buf = String::new();
        while found < expected {
            if !self.next_line(&mut buf)? {
                return Err(TextInputError::UnexpectedEof {
                    what,
                    expected,
                    found,
                });
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            handle(self.line, line)?;
            found += 1;
        }
        Ok(())
    }
}

fn parse_atom_line_at(line_num: usize, line: &str) -> Result<RingAtom, TextInputError> {
    parse_atom_line(line).map_err(|kind| TextInputError::Parse {
        line: line_num,
        kind,
    })
}
