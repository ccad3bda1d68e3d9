//! Command-line resolution prover

use std::env;
use std::process;
use std::time::Instant;

use log::LevelFilter;
use resolute::json::{load_problem, outcome_to_json};
use resolute::problems::{builtin, BUILTIN_NAMES};
use resolute::{Problem, ProverConfig, Verdict};

fn usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --problem <name>        Built-in problem (default: john-likes-peanuts)");
    eprintln!("  --file <path>           Load a problem from a JSON file");
    eprintln!("  --max-iterations <n>    Resolution attempt budget (default: 20000)");
    eprintln!("  --trace                 Print the clauses added in each round");
    eprintln!("  --json                  Print the outcome as JSON");
    eprintln!("  --verbose               Log saturation progress");
    eprintln!("  --list                  List built-in problems");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("prove");

    let mut config = ProverConfig::default();
    let mut problem_name = "john-likes-peanuts".to_string();
    let mut file: Option<String> = None;
    let mut json = false;
    let mut verbose = false;

    // Parse command line options
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--problem" | "--file" | "--max-iterations" if i + 1 >= args.len() => {
                eprintln!("Missing value for {}", args[i]);
                process::exit(1);
            }
            "--problem" => {
                problem_name = args[i + 1].clone();
                i += 1;
            }
            "--file" => {
                file = Some(args[i + 1].clone());
                i += 1;
            }
            "--max-iterations" => {
                match args[i + 1].parse::<usize>() {
                    Ok(n) => config.max_iterations = n,
                    Err(_) => {
                        eprintln!("Invalid iteration budget: {}", args[i + 1]);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--trace" => config.record_trace = true,
            "--json" => json = true,
            "--verbose" => verbose = true,
            "--list" => {
                for name in BUILTIN_NAMES {
                    println!("{}", name);
                }
                return;
            }
            "--help" | "-h" => {
                usage(program);
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                usage(program);
                process::exit(1);
            }
        }
        i += 1;
    }

    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let loaded = match &file {
        Some(path) => load_problem(path),
        None => builtin(&problem_name),
    };
    let problem: Problem = match loaded {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if !json {
        println!("Knowledge base clauses:");
        for (i, clause) in problem.knowledge_base.iter().enumerate() {
            println!("  [{}] {}", i, clause);
        }
        println!("\nQuery: {}", problem.query);
        println!("Negated query clause will be added and resolution attempted.\n");
    }

    let start_time = Instant::now();
    let outcome = match problem.prove(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start_time.elapsed();

    if json {
        match outcome_to_json(&outcome) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if let Some(trace) = &outcome.trace {
        for round in &trace.rounds {
            println!("Round {} ({} attempts):", round.round, round.attempts);
            for clause in &round.added {
                println!("  + {}", clause);
            }
        }
        println!();
    }

    match outcome.verdict {
        Verdict::Proved => println!("✓ PROVED in {:.3}s", elapsed.as_secs_f64()),
        Verdict::Disproved => println!("✗ DISPROVED in {:.3}s", elapsed.as_secs_f64()),
        Verdict::Inconclusive(_) => println!("? INCONCLUSIVE in {:.3}s", elapsed.as_secs_f64()),
    }
    println!("  {}", outcome.verdict);
    println!(
        "  {} resolution attempts over {} rounds, {} clauses derived",
        outcome.iterations,
        outcome.rounds,
        outcome.derived_count()
    );

    if let Some(proof) = &outcome.proof {
        println!("\nRefutation ({} resolution steps):", proof.inference_count());
        print!("{}", proof);
    }
}
