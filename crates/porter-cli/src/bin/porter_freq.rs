// porter-freq: Convert text to a stem frequency list.
//
// Reads running text from stdin, splits it into runs of alphabetic
// characters, stems each run and counts the stems. Stems that collected
// more than one distinct surface form are listed as conflations.
//
// Usage:
//   porter-freq [OPTIONS]
//
// Options:
//   -i, --irregular PATH    Load irregular forms from PATH
//   --no-irregular          Do not use an irregular-form table
//   -h, --help              Print help

use std::collections::{BTreeSet, HashMap};
use std::io::{self, BufRead, Write};

fn main() {
    porter_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (irregular, args) =
        porter_cli::parse_irregular_args(&args).unwrap_or_else(|e| porter_cli::fatal(&e));

    if porter_cli::wants_help(&args) {
        println!("porter-freq: Convert text to a stem frequency list.");
        println!();
        println!("Usage: porter-freq [OPTIONS]");
        println!();
        println!("Reads text from stdin, stems every alphabetic word and prints");
        println!("stem<TAB>count, most frequent first, followed by the stems that");
        println!("conflate several surface forms.");
        println!();
        println!("Options:");
        println!("  -i, --irregular PATH    Load irregular forms from PATH");
        println!("  --no-irregular          Do not use an irregular-form table");
        println!("  -h, --help              Print this help");
        return;
    }
    if let Some(unknown) = args.first() {
        porter_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let source = porter_cli::resolve_irregular_source(irregular);
    let stemmer = porter_cli::load_stemmer(&source).unwrap_or_else(|e| porter_cli::fatal(&e));

    let stdin = io::stdin();
    let mut freqs: HashMap<String, u64> = HashMap::new();
    let mut forms: HashMap<String, BTreeSet<String>> = HashMap::new();
    let mut total = 0u64;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for word in line.split(|c: char| !c.is_alphabetic()).filter(|w| !w.is_empty()) {
            let stem = stemmer.stem_lower(word);
            *freqs.entry(stem.clone()).or_insert(0) += 1;
            forms
                .entry(stem)
                .or_default()
                .insert(word.to_ascii_lowercase());
            total += 1;
        }
    }
    tracing::debug!(words = total, stems = freqs.len(), "counted stems");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    // Sort by frequency (descending), then alphabetically
    let mut freq_list: Vec<(String, u64)> = freqs.into_iter().collect();
    freq_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let _ = writeln!(out, "=== Stems ===");
    for (stem, count) in &freq_list {
        let _ = writeln!(out, "{stem}\t{count}");
    }

    let mut conflations: Vec<(&String, &BTreeSet<String>)> =
        forms.iter().filter(|(_, f)| f.len() > 1).collect();
    conflations.sort_by(|a, b| a.0.cmp(b.0));

    let _ = writeln!(out, "=== Conflations ===");
    for (stem, surface) in conflations {
        let joined: Vec<&str> = surface.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{stem}\t{}", joined.join(" "));
    }
}
