/// sportsball – runs the substitution game from a roster file.
///
///   sportsball roster.txt          → play with default queue sizing
///   sportsball roster.txt 50       → start the queue at 50 slots
///   sportsball roster.txt 50 20    → grow/shrink in steps of 20
///
/// Each roster line is either `name/priority` (queue a player) or the
/// literal token `GO!` (substitute the highest-priority player in).
use std::env;
use std::fs;
use std::io::{self, BufReader};
use std::process::{self, ExitCode};
use std::sync::Arc;
use std::time::Instant;

use pq::game::{self, GameOptions};
use pq::pqueue::{ResizeEvent, DEFAULT_INITIAL_CAPACITY, DEFAULT_STEP_SIZE};

fn usage() {
    eprintln!("sportsball - priority-queue substitution game");
    eprintln!();
    eprintln!("Usage: sportsball [OPTIONS] DATAFILE [INITIAL_CAPACITY] [STEP_SIZE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  DATAFILE           Roster file: `name/priority` lines and GO! tokens");
    eprintln!(
        "  INITIAL_CAPACITY   Queue slots before the first resize (default: {})",
        DEFAULT_INITIAL_CAPACITY
    );
    eprintln!(
        "  STEP_SIZE          Slots added or removed per resize (default: {})",
        DEFAULT_STEP_SIZE
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose      Report queue resizes and totals to stderr");
    eprintln!("  -h, --help         Show this help");
}

#[derive(Debug)]
struct Opts {
    data_file: String,
    initial_capacity: usize,
    step_size: usize,
    verbose: bool,
}

fn parse_args() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut verbose = false;
    let mut positional: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            s if s.starts_with('-') => {
                eprintln!("sportsball: unknown flag '{s}'");
                process::exit(1);
            }
            _ => positional.push(arg.clone()),
        }
    }

    if positional.is_empty() {
        usage();
        process::exit(1);
    }
    if positional.len() > 3 {
        eprintln!("sportsball: invalid arguments");
        usage();
        process::exit(1);
    }

    let parse_size = |name: &str, value: &str| -> usize {
        match value.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("sportsball: invalid {name} '{value}'");
                process::exit(1);
            }
        }
    };

    let initial_capacity = positional
        .get(1)
        .map(|v| parse_size("initial capacity", v))
        .unwrap_or(DEFAULT_INITIAL_CAPACITY);
    let step_size = positional
        .get(2)
        .map(|v| parse_size("step size", v))
        .unwrap_or(DEFAULT_STEP_SIZE);

    Opts {
        data_file: positional.swap_remove(0),
        initial_capacity,
        step_size,
        verbose,
    }
}

fn run(opts: &Opts) -> Result<(), ()> {
    let file = match fs::File::open(&opts.data_file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("sportsball: {}: {e}", opts.data_file);
            return Err(());
        }
    };
    let reader = BufReader::new(file);

    let mut options = GameOptions {
        initial_capacity: opts.initial_capacity,
        step_size: opts.step_size,
        resize_hook: None,
    };
    if opts.verbose {
        options.resize_hook = Some(Arc::new(|event: ResizeEvent| {
            eprintln!(
                "sportsball: resized {} -> {} ({} players held)",
                event.old_capacity, event.new_capacity, event.len
            );
        }));
    }

    let stdout = io::stdout();
    let output = stdout.lock();
    match game::play(reader, output, &options) {
        Ok(summary) => {
            if opts.verbose {
                eprintln!("sportsball: processed {} lines", summary.lines);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("sportsball: {}: {e}", opts.data_file);
            Err(())
        }
    }
}

fn main() -> ExitCode {
    let opts = parse_args();

    let start = Instant::now();
    let result = run(&opts);
    let elapsed = start.elapsed();
    println!("Elapsed {:.3}ms.", elapsed.as_secs_f64() * 1000.0);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}
