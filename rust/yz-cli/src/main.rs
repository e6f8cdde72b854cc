//! yz: command-line caller for the Yatzy scoring engine.
//!
//! Subcommands:
//! - score <category> <dice>
//! - table <dice>
//! - categories

use std::env;
use std::path::PathBuf;
use std::process;

use yz_core::{best_category, score, scores_for_roll, Category, Config, Roll, Score, CAT_NAMES};
use yz_logging::{NdjsonWriter, ScoreEventV1};

/// Options shared by the scoring subcommands.
struct CommonOpts {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
    positional: Vec<String>,
}

/// Parse `--config`/`--log` and collect positionals. Returns None if help was printed.
fn parse_common(args: &[String], cmd: &str, usage: &str) -> Option<CommonOpts> {
    let mut opts = CommonOpts {
        config: None,
        log: None,
        positional: Vec::new(),
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{usage}");
                return None;
            }
            "--config" | "--log" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for {}", args[i]);
                    process::exit(1);
                }
                let p = PathBuf::from(&args[i + 1]);
                if args[i] == "--config" {
                    opts.config = Some(p);
                } else {
                    opts.log = Some(p);
                }
                i += 2;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option for `yz {cmd}`: {other}");
                eprintln!("Run `yz {cmd} --help` for usage.");
                process::exit(1);
            }
            other => {
                opts.positional.push(other.to_string());
                i += 1;
            }
        }
    }
    Some(opts)
}

fn load_config(opts: &CommonOpts) -> Config {
    match &opts.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", path.display());
            process::exit(1);
        }),
        None => Config::default(),
    }
}

/// `--log` wins over `logging.events_path` from the config.
fn open_event_log(opts: &CommonOpts, cfg: &Config) -> Option<NdjsonWriter> {
    let path = opts
        .log
        .clone()
        .or_else(|| cfg.logging.events_path.as_ref().map(PathBuf::from))?;
    match NdjsonWriter::open_append_with_flush(&path, cfg.logging.flush_every_lines) {
        Ok(w) => Some(w),
        Err(e) => {
            eprintln!("Failed to open event log {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn log_events(log: Option<NdjsonWriter>, events: &[(Category, Score)], roll: &Roll) {
    let Some(mut w) = log else { return };
    for &(cat, s) in events {
        if let Err(e) = w.write_event(&ScoreEventV1::new(roll, cat, s)) {
            eprintln!("Failed to write score event: {e}");
            process::exit(1);
        }
    }
    if let Err(e) = w.flush() {
        eprintln!("Failed to flush event log: {e}");
        process::exit(1);
    }
}

fn parse_roll(words: &[String], cfg: &Config) -> Roll {
    let text = words.join(" ");
    Roll::parse_with(&text, cfg.scoring.validation).unwrap_or_else(|e| {
        eprintln!("Invalid roll: {e}");
        process::exit(1);
    })
}

fn cmd_score(args: &[String]) {
    let usage = r#"yz score

USAGE:
    yz score <CATEGORY> <DICE> [--config cfg.yaml] [--log events.ndjson]

ARGS:
    <CATEGORY>   Category name (see `yz categories`)
    <DICE>       Five dice: "3,3,6,3,6", "3 3 6 3 6" or "33636"

OPTIONS:
    --config P   YAML config (validation mode, event log)
    --log P      Append a score event to this NDJSON file
"#;
    let Some(opts) = parse_common(args, "score", usage) else {
        return;
    };
    if opts.positional.len() < 2 {
        eprintln!("Usage: yz score <CATEGORY> <DICE>");
        process::exit(1);
    }
    let cfg = load_config(&opts);

    let category: Category = opts.positional[0].parse().unwrap_or_else(|e| {
        eprintln!("Invalid category: {e}");
        process::exit(1);
    });
    let roll = parse_roll(&opts.positional[1..], &cfg);
    let s = score(category, &roll);

    println!("{s}");
    log_events(open_event_log(&opts, &cfg), &[(category, s)], &roll);
}

fn cmd_table(args: &[String]) {
    let usage = r#"yz table

USAGE:
    yz table <DICE> [--config cfg.yaml] [--log events.ndjson]

Prints the score of every category for one roll, then the best category.
"#;
    let Some(opts) = parse_common(args, "table", usage) else {
        return;
    };
    if opts.positional.is_empty() {
        eprintln!("Usage: yz table <DICE>");
        process::exit(1);
    }
    let cfg = load_config(&opts);
    let roll = parse_roll(&opts.positional, &cfg);

    let scores = scores_for_roll(&roll);
    println!("roll: {roll}");
    for (name, s) in CAT_NAMES.iter().zip(scores.iter()) {
        println!("{name:<16} {s:>3}");
    }
    let (best, best_score) = best_category(&roll);
    println!("best: {best} ({best_score})");

    let events: Vec<(Category, Score)> = Category::ALL.iter().copied().zip(scores).collect();
    log_events(open_event_log(&opts, &cfg), &events, &roll);
}

fn cmd_categories() {
    for name in CAT_NAMES {
        println!("{name}");
    }
}

fn print_help() {
    println!(
        r#"yz - Yatzy roll scoring

USAGE:
    yz <COMMAND> [OPTIONS]

COMMANDS:
    score        Score one roll in one category
    table        Score one roll in every category
    categories   List category names in scoresheet order

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version

Run `yz <COMMAND> --help` for command-specific options.
"#
    );
}

fn print_version() {
    println!("yz {}", yz_core::VERSION);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "table" => {
            cmd_table(&args[2..]);
        }
        "categories" => {
            cmd_categories();
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run `yz --help` for usage.");
            process::exit(1);
        }
    }
}
