// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use clap::{Parser, ValueEnum};
use log::info;
use miette::{IntoDiagnostic, WrapErr};
use qref_circuits::{
    Program,
    trials::{TrialSummary, run_trials},
};
use qref_sim::{
    Precision,
    compare::{self, BitOrder},
    gate::parse_gates,
};
use serde::Serialize;
use std::{fmt, num::NonZeroUsize, path::PathBuf};

/// Runs a benchmark program on the CPU state-vector reference.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Program to run: `qft<N>`, `grover<N>` or `bell2`.
    #[arg(long)]
    prog: Program,

    /// Number of timed trials, each on a fresh state vector.
    #[arg(long, default_value = "200")]
    repeats: NonZeroUsize,

    /// Floating-point width of the amplitudes.
    #[arg(long, value_enum, default_value_t = PrecisionArg::Single)]
    precision: PrecisionArg,

    /// Basis state the register starts in.
    #[arg(long, default_value_t = 0)]
    basis: usize,

    /// Gate listing to run instead of the program's generated sequence.
    /// Required for `grover<N>` with N > 2.
    #[arg(long)]
    gates: Option<PathBuf>,

    /// Amplitude records (`index,re,im`) to compare the final state against.
    /// Without it the program's ideal state is used when starting from |0…0⟩.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// The reference records number qubit 0 as the most significant bit.
    #[arg(long)]
    msb_first: bool,

    /// Write the final state as amplitude records to this path.
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum PrecisionArg {
    Single,
    Double,
}

#[derive(Debug, Serialize)]
struct Report {
    prog: String,
    precision: PrecisionArg,
    num_qubits: usize,
    #[serde(flatten)]
    summary: TrialSummary,
    fidelity: Option<f64>,
    l2_err: Option<f64>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU_RESULT prog={} gates={} repeats={} mean_ms={:.6} std_ms={:.6}",
            self.prog,
            self.summary.gates,
            self.summary.repeats,
            self.summary.mean_ms,
            self.summary.std_ms
        )?;
        if let Some(fidelity) = self.fidelity {
            write!(f, " fidelity={fidelity:.6}")?;
        }
        if let Some(l2_err) = self.l2_err {
            write!(f, " l2_err={l2_err:.6}")?;
        }
        write!(f, " ok=1")
    }
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let report = match cli.precision {
        PrecisionArg::Single => execute::<f32>(&cli)?,
        PrecisionArg::Double => execute::<f64>(&cli)?,
    };
    if cli.json {
        println!("{}", serde_json::to_string(&report).into_diagnostic()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn execute<T: Precision>(cli: &Cli) -> miette::Result<Report> {
    let num_qubits = cli.prog.num_qubits();
    let gates = match &cli.gates {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read gates from {}", path.display()))?;
            parse_gates(&text)?
        }
        None => cli.prog.gates()?,
    };

    info!("running {} with {} operations, {} times", cli.prog, gates.len(), cli.repeats);
    let (state, summary) = run_trials::<T>(num_qubits, cli.basis, &gates, cli.repeats)?;

    if let Some(path) = &cli.dump {
        std::fs::write(path, compare::format_amplitudes(state.amplitudes()))
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write state to {}", path.display()))?;
    }

    let reference = match &cli.reference {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read reference from {}", path.display()))?;
            let order = if cli.msb_first {
                BitOrder::MsbFirst
            } else {
                BitOrder::LsbFirst
            };
            Some(compare::parse_amplitudes(&text, order, Some(num_qubits))?)
        }
        None if cli.basis == 0 => Some(cli.prog.ideal_state()?),
        None => None,
    };

    let (fidelity, l2_err) = match reference {
        Some(reference) => {
            let computed = state.to_complex64();
            (
                Some(compare::fidelity(&reference, &computed)?),
                Some(compare::l2_error(&reference, &computed)?),
            )
        }
        None => (None, None),
    };

    Ok(Report {
        prog: cli.prog.to_string(),
        precision: cli.precision,
        num_qubits,
        summary,
        fidelity,
        l2_err,
    })
}
