use crate::error::{CliError, Result};
use nicszz::RingAtom;
use nicszz::core::io::text::{parse_atom_line, parse_tensor_row};

/// Parses `--tensor-row` values. Returns `None` when no rows were given so the caller
/// can fall back to standard input.
pub fn parse_tensor_args(rows: &[String]) -> Result<Option<[[f64; 3]; 3]>> {
    if rows.is_empty() {
        return Ok(None);
    }
    if rows.len() != 3 {
        return Err(CliError::Argument(format!(
            "--tensor-row must be given exactly 3 times, got {}",
            rows.len()
        )));
    }
    let mut parsed = [[0.0; 3]; 3];
    for (i, row) in rows.iter().enumerate() {
        parsed[i] = parse_tensor_row(row).map_err(|e| {
            CliError::Argument(format!("--tensor-row #{} ('{}'): {}", i + 1, row, e))
        })?;
    }
    Ok(Some(parsed))
}

/// Parses `--atom` values, requiring `expected` of them when one is given.
pub fn parse_atom_args(atoms: &[String], expected: Option<usize>) -> Result<Option<Vec<RingAtom>>> {
    if atoms.is_empty() {
        return Ok(None);
    }
    if let Some(n) = expected {
        if atoms.len() != n {
            return Err(CliError::Argument(format!(
                "--atom must be given exactly {} times, got {}",
                n,
                atoms.len()
            )));
        }
    }
    atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| {
            parse_atom_line(atom).map_err(|e| {
                CliError::Argument(format!("--atom #{} ('{}'): {}", i + 1, atom, e))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
