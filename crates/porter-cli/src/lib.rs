// porter-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use porter_en::{IrregularForms, PorterStemmer, Resolution};
use tracing_subscriber::EnvFilter;

/// Environment variable naming an irregular-form listing file.
pub const IRREGULAR_ENV: &str = "PORTER_IRREGULAR_PATH";

/// Environment variable holding the log filter (`tracing` directives).
pub const LOG_ENV: &str = "PORTER_LOG";

/// Where the irregular-form table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrregularSource {
    /// The table compiled into the stemmer.
    Builtin,
    /// No table at all.
    Disabled,
    /// A listing file (`stem: form form ...` per line).
    Path(PathBuf),
}

/// Install a stderr log subscriber filtered by `PORTER_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse an option that takes a value: `-x VALUE`, `--long VALUE` or
/// `--long=VALUE`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn parse_value_option(
    args: &[String],
    short: &str,
    long: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse `-i/--irregular PATH` and `--no-irregular`.
///
/// Returns `None` for the source when neither option is given, leaving the
/// choice to [`load_stemmer`].
pub fn parse_irregular_args(
    args: &[String],
) -> Result<(Option<IrregularSource>, Vec<String>), String> {
    let (path, args) = parse_value_option(args, "-i", "--irregular")?;
    let disabled = has_flag(&args, &["--no-irregular"]);
    let remaining: Vec<String> = args.into_iter().filter(|a| a != "--no-irregular").collect();

    let source = match (path, disabled) {
        (Some(_), true) => {
            return Err("--irregular and --no-irregular are mutually exclusive".to_string());
        }
        (Some(p), false) => Some(IrregularSource::Path(PathBuf::from(p))),
        (None, true) => Some(IrregularSource::Disabled),
        (None, false) => None,
    };
    Ok((source, remaining))
}

/// Resolve the irregular-form source.
///
/// Order: explicit option, then `PORTER_IRREGULAR_PATH`, then the built-in
/// table.
pub fn resolve_irregular_source(explicit: Option<IrregularSource>) -> IrregularSource {
    if let Some(source) = explicit {
        return source;
    }
    match std::env::var(IRREGULAR_ENV) {
        Ok(path) if !path.is_empty() => IrregularSource::Path(PathBuf::from(path)),
        _ => IrregularSource::Builtin,
    }
}

/// Build a stemmer from an irregular-form source.
pub fn load_stemmer(source: &IrregularSource) -> Result<PorterStemmer, String> {
    let table = match source {
        IrregularSource::Builtin => IrregularForms::default(),
        IrregularSource::Disabled => IrregularForms::empty(),
        IrregularSource::Path(path) => IrregularForms::from_path(path)
            .map_err(|e| format!("failed to load {}: {e}", path.display()))?,
    };
    tracing::info!(?source, entries = table.len(), "irregular forms ready");
    Ok(PorterStemmer::with_irregular_forms(table))
}

/// Output lines for one word: `word<TAB>stem`, preceded by the resolution
/// and the region after every step when `trace` is set.
///
/// The traced run already yields the lowercase stem; the pipeline only runs
/// a second time when the casing has to be restored.
pub fn stem_report(stemmer: &PorterStemmer, word: &str, lower: bool, trace: bool) -> String {
    let mut report = String::new();
    let stem = if trace {
        let t = stemmer.trace(word);
        report.push_str(&format!("{word}\t{}\n", resolution_label(t.resolution)));
        for (step, region) in &t.steps {
            report.push_str(&format!("  {} {}: {region}\n", step.number(), step));
        }
        if lower { t.stem } else { stemmer.stem(word) }
    } else if lower {
        stemmer.stem_lower(word)
    } else {
        stemmer.stem(word)
    };
    report.push_str(&format!("{word}\t{stem}\n"));
    report
}

fn resolution_label(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Irregular => "irregular",
        Resolution::TooShort => "too-short",
        Resolution::Pipeline => "pipeline",
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    has_flag(args, &["--help", "-h"])
}

/// Check if any of `names` is in the args.
pub fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|a| names.contains(&a.as_str()))
}
