use crate::cli::ZzArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::parser::{parse_atom_args, parse_tensor_args};
use nicszz::core::io::text::TextReader;
use nicszz::workflows::nics_zz::{NicsZzReport, evaluate_ring};
use nicszz::{RingGeometry, ShieldingTensor};
use std::io::{BufRead, Write};
use tracing::info;

pub fn run<R: BufRead, W: Write>(
    args: &ZzArgs,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut reader = TextReader::new(input);
    let rows = match parse_tensor_args(&args.tensor_rows)? {
        Some(rows) => rows,
        None => {
            if interactive {
                eprintln!("\nInput total shielding tensor:\n");
            }
            reader.read_tensor()?
        }
    };
    let tensor = ShieldingTensor::from_array(rows).map_err(nicszz::NicsError::from)?;

    let atoms = match parse_atom_args(&args.atoms, Some(3))? {
        Some(atoms) => atoms,
        None => {
            if interactive {
                eprintln!(
                    "\nInput coordinates of three atoms in the ring (in the format ATOM  xcoord   ycoord   zcoord):\n"
                );
            }
            reader.read_ring_atoms(3)?
        }
    };
    let ring = RingGeometry::from_atoms(&atoms).map_err(nicszz::NicsError::from)?;
    info!(
        "Evaluating NICS_zz for ring atoms {}, {}, {}",
        atoms[0].label, atoms[1].label, atoms[2].label
    );

    let report = evaluate_ring(&tensor, &ring, &config.evaluator)?;
    let precision = args.precision.unwrap_or(config.output.precision);

    if args.show_axes {
        write_axes(output, &report, precision)?;
    }
    writeln!(output, "\n===============================")?;
    writeln!(output, "   NICS_zz value: {:.*}", precision, report.nics_zz)?;
    writeln!(output, "===============================\n")?;
    Ok(())
}

fn write_axes<W: Write>(output: &mut W, report: &NicsZzReport, precision: usize) -> Result<()> {
    let n = report.ring_normal.as_ref();
    writeln!(
        output,
        "\nRing normal: ({:.6}, {:.6}, {:.6})",
        n.x, n.y, n.z
    )?;
    writeln!(output, "Principal axes (* = zz):")?;
    for i in 0..3 {
        let axis = report.principal.axis(i);
        let marker = if i == report.zz_axis { '*' } else { ' ' };
        writeln!(
            output,
            " {} value {:>12.*}   axis ({:>9.6}, {:>9.6}, {:>9.6})   |axis.n| {:.6}",
            marker,
            precision,
            report.principal.value(i),
            axis.x,
            axis.y,
            axis.z,
            report.alignments[i]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use nicszz::core::io::text::TextInputError;
    use nicszz::{InputError, NicsError};
    use std::io::Cursor;

    fn args(tensor_rows: &[&str], atoms: &[&str]) -> ZzArgs {
        ZzArgs {
            tensor_rows: tensor_rows.iter().map(|s| s.to_string()).collect(),
            atoms: atoms.iter().map(|s| s.to_string()).collect(),
            show_axes: false,
            precision: None,
        }
    }

    fn run_to_string(args: &ZzArgs, stdin: &str) -> Result<String> {
        let config = AppConfig::load(None, &[])?;
        let mut input = Cursor::new(stdin.to_string());
        let mut output = Vec::new();
        run(args, &config, &mut input, &mut output, false)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_tensor_and_atoms_from_stdin() {
        let stdin = "100 0 0\n0 100 0\n0 0 -50\n\nC1 1 0 0\nC2 0 1 0\nC3 0 0 0\n";
        let out = run_to_string(&args(&[], &[]), stdin).unwrap();
        assert!(out.contains("NICS_zz value: 50.0000"));
    }

    #[test]
    fn uses_arguments_when_given() {
        let a = args(
            &["100 0 0", "0 100 0", "0 0 -50"],
            &["C1 1 0 0", "C2 0 1 0", "C3 0 0 0"],
        );
        let out = run_to_string(&a, "").unwrap();
        assert!(out.contains("NICS_zz value: 50.0000"));
    }

    #[test]
    fn mixes_argument_tensor_with_stdin_atoms() {
        let a = args(&["100 0 0", "0 100 0", "0 0 -50"], &[]);
        let out = run_to_string(&a, "C1 1 0 0\nC2 0 1 0\nC3 0 0 0\n").unwrap();
        assert!(out.contains("50.0000"));
    }

    #[test]
    fn precision_flag_and_axes_table() {
        let mut a = args(
            &["100 0 0", "0 100 0", "0 0 -50"],
            &["C1 1 0 0", "C2 0 1 0", "C3 0 0 0"],
        );
        a.precision = Some(2);
        a.show_axes = true;
        let out = run_to_string(&a, "").unwrap();
        assert!(out.contains("NICS_zz value: 50.00\n"));
        assert!(out.contains("Ring normal: ("));
        assert!(out.contains("1.000000)"));
        assert_eq!(out.matches('*').count(), 2);
    }

    #[test]
    fn collinear_atoms_surface_geometry_error() {
        let a = args(
            &["1 0 0", "0 1 0", "0 0 1"],
            &["C 0 0 0", "C 1 0 0", "C 2 0 0"],
        );
        assert!(matches!(
            run_to_string(&a, ""),
            Err(CliError::Core(NicsError::Geometry { .. }))
        ));
    }

    #[test]
    fn truncated_stdin_surfaces_input_error() {
        assert!(matches!(
            run_to_string(&args(&[], &[]), "1 0 0\n0 1 0\n"),
            Err(CliError::Core(NicsError::Input(_)))
        ));
    }

    #[test]
    fn bad_atom_line_reports_its_line_in_stdin() {
        let stdin = "100 0 0\n0 100 0\n0 0 -50\n\nC1 1 0 0\nC2 0 one 0\nC3 0 0 0\n";
        match run_to_string(&args(&[], &[]), stdin) {
            Err(CliError::Core(NicsError::Input(InputError::Text(TextInputError::Parse {
                line,
                ..
            })))) => assert_eq!(line, 6),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
