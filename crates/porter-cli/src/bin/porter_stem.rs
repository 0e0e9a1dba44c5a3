// porter-stem: Stem words read from stdin.
//
// Reads words from stdin (one per line) and prints each word with its
// stem, separated by a tab.
//
// Usage:
//   porter-stem [OPTIONS]
//
// Options:
//   -l, --lower             Print the lowercase stem (no case restoration)
//   -t, --trace             Print the region after every pipeline step
//   -s, --step NAME|N       Run only one step, in isolation
//   -i, --irregular PATH    Load irregular forms from PATH
//   --no-irregular          Do not use an irregular-form table
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use porter_core::Step;

fn main() {
    porter_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (irregular, args) =
        porter_cli::parse_irregular_args(&args).unwrap_or_else(|e| porter_cli::fatal(&e));
    let (step, args) = porter_cli::parse_value_option(&args, "-s", "--step")
        .unwrap_or_else(|e| porter_cli::fatal(&e));

    if porter_cli::wants_help(&args) {
        println!("porter-stem: Stem words read from stdin.");
        println!();
        println!("Usage: porter-stem [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  word<TAB>stem");
        println!();
        println!("Options:");
        println!("  -l, --lower             Print the lowercase stem (no case restoration)");
        println!("  -t, --trace             Print the region after every pipeline step");
        println!("  -s, --step NAME|N       Run only one step, in isolation");
        println!("  -i, --irregular PATH    Load irregular forms from PATH");
        println!("  --no-irregular          Do not use an irregular-form table");
        println!("  -h, --help              Print this help");
        println!();
        println!("Steps:");
        for step in Step::ALL {
            println!("  {} {}", step.number(), step.name());
        }
        return;
    }

    let step = step.map(|s| {
        s.parse::<Step>()
            .unwrap_or_else(|e| porter_cli::fatal(&e.to_string()))
    });
    let lower = porter_cli::has_flag(&args, &["-l", "--lower"]);
    let trace = porter_cli::has_flag(&args, &["-t", "--trace"]);

    if let Some(unknown) = args
        .iter()
        .find(|a| !matches!(a.as_str(), "-l" | "--lower" | "-t" | "--trace"))
    {
        porter_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let source = porter_cli::resolve_irregular_source(irregular);
    let stemmer = porter_cli::load_stemmer(&source).unwrap_or_else(|e| porter_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if let Some(step) = step {
            let _ = writeln!(out, "{word}\t{}", stemmer.apply_step(word, step));
            continue;
        }

        let _ = write!(out, "{}", porter_cli::stem_report(&stemmer, word, lower, trace));
    }
}
