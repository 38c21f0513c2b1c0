use clap::Parser;
use std::time::Instant;

use ampliverse::{ParallelSimulation, SerialSimulation, Simulation};

/// Exact output amplitude ⟨s|U|0…0⟩ of the QuEra-Harvard hypercube
/// circuit on 3·2ᵏ qubits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Boolean cube dimension k; the circuit acts on 3·2ᵏ qubits
    #[arg(long, default_value_t = 4)]
    cube_dimension: u32,

    /// Output basis vector s, as a 64-bit bitstring
    #[arg(long, default_value_t = 123)]
    outcome: u64,

    /// Run the single-threaded driver instead of the partitioned one
    #[arg(long)]
    serial: bool,

    /// Number of rayon worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    let args = Args::parse();

    if args.cube_dimension > 5 {
        let residual = 2u64 << args.cube_dimension;
        eprintln!(
            "amplitude: cube dimension {} needs {residual} residual qubits, \
             the exponential-sum kernel supports at most 64",
            args.cube_dimension
        );
        std::process::exit(1);
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to build Rayon thread pool");
    }

    let begin = Instant::now();
    let simulation: Box<dyn Simulation> = if args.serial {
        Box::new(SerialSimulation::new(args.cube_dimension, args.outcome))
    } else {
        Box::new(ParallelSimulation::new(args.cube_dimension, args.outcome))
    };

    println!("Qubits={}", simulation.qubit_count());
    println!("output string s={}", args.outcome);

    let amplitude = simulation.amplitude();

    println!("Time measured: {:.5} seconds.", begin.elapsed().as_secs_f64());
    println!("output amplitude={amplitude}");
}
