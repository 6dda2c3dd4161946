use crate::cli::CentroidArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::parser::parse_atom_args;
use nicszz::core::io::text::{MIN_ATOMS_BEFORE_BLANK, TextReader};
use nicszz::workflows::centroid::ring_centroid;
use std::io::{BufRead, Write};
use tracing::info;

const RULE: &str = "========================================================";

pub fn run<R: BufRead, W: Write>(
    args: &CentroidArgs,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
    interactive: bool,
) -> Result<()> {
    let atoms = match parse_atom_args(&args.atoms, None)? {
        Some(atoms) => atoms,
        None => {
            if interactive {
                eprintln!(
                    "\nInput coordinates of heavy atoms in ring (ATOM  x  y  z); after {} or more atoms, finish with an empty line:\n",
                    MIN_ATOMS_BEFORE_BLANK
                );
            }
            TextReader::new(input).read_ring_atoms_until_blank()?
        }
    };

    let centroid = ring_centroid(&atoms)?;
    info!("Averaged {} ring atoms.", centroid.atom_count);

    let label = args
        .label
        .as_deref()
        .unwrap_or(&config.output.ghost_atom_label);
    writeln!(output, "Add the following line to the coordinate block: ")?;
    writeln!(output, "\n{}", RULE)?;
    writeln!(output, "{}", centroid.ghost_atom_line(label))?;
    writeln!(output, "{}\n", RULE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use nicszz::{InputError, NicsError};
    use std::io::Cursor;

    fn run_to_string(args: &CentroidArgs, stdin: &str, set: &[&str]) -> Result<String> {
        let set: Vec<String> = set.iter().map(|s| s.to_string()).collect();
        let config = AppConfig::load(None, &set)?;
        let mut input = Cursor::new(stdin.to_string());
        let mut output = Vec::new();
        run(args, &config, &mut input, &mut output, false)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn no_args() -> CentroidArgs {
        CentroidArgs {
            atoms: Vec::new(),
            label: None,
        }
    }

    #[test]
    fn averages_atoms_from_stdin_until_blank_line() {
        let stdin = "C 0 0 0\nC 2 0 0\nC 2 2 0\nC 0 2 0\n\nignored line\n";
        let out = run_to_string(&no_args(), stdin, &[]).unwrap();
        assert!(out.contains("  DA    1.0000000000    1.0000000000    0.0000000000\n"));
    }

    #[test]
    fn blank_line_inside_a_short_ring_does_not_truncate_it() {
        let stdin = "C 0 0 0\nC 2 0 0\n\nC 2 2 0\nC 0 2 0\n\n";
        let out = run_to_string(&no_args(), stdin, &[]).unwrap();
        assert!(out.contains("  DA    1.0000000000    1.0000000000    0.0000000000\n"));
    }

    #[test]
    fn label_flag_overrides_config() {
        let args = CentroidArgs {
            atoms: vec!["C 1 1 1".to_string()],
            label: Some("Bq".to_string()),
        };
        let out = run_to_string(&args, "", &["output.ghost-atom-label=X"]).unwrap();
        assert!(out.contains("  Bq    1.0000000000"));
    }

    #[test]
    fn label_from_set_value_is_used() {
        let args = CentroidArgs {
            atoms: vec!["C 1 1 1".to_string()],
            label: None,
        };
        let out = run_to_string(&args, "", &["output.ghost-atom-label=X"]).unwrap();
        assert!(out.contains("  X    1.0000000000"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            run_to_string(&no_args(), "\n\n", &[]),
            Err(CliError::Core(NicsError::Input(InputError::EmptyRing)))
        ));
    }
}
