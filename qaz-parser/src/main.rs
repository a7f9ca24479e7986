use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qaz_parser_lib::corpus::{build_word_list, word_list_path, write_word_list};
use qaz_parser_lib::output::{describe, summary_lines};
use qaz_parser_lib::records::{read_records, read_utf8, write_reports};
use qaz_parser_lib::{
    AffixTable, AnalyzedRecord, Analyzer, BatchSummary, InputError, ReportConfig, WordRecord,
};
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "qaz_parser=info,qaz_parser_lib=info";

// Exit code for usage problems (missing or unsuitable input path).
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "qaz-parser",
    about = "Morphological analyser for 19th-century Qazaq/Uzbek word lists",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Word list CSV to analyse. Needs a `word` column.
    input: Option<PathBuf>,

    /// Directory for the generated reports (overrides QAZ_OUTPUT_DIR).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Analyse words on all cores.
    #[arg(long)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse individual words. If none are given, reads one word per line
    /// from stdin.
    Word {
        words: Vec<String>,

        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,

        /// Print a readable summary instead of JSON.
        #[arg(long, conflicts_with = "pretty")]
        plain: bool,
    },
    /// Build a word list CSV from a transcription text file.
    List {
        transcript: PathBuf,

        /// Output path. Defaults to the transcript path with a .csv extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let table = AffixTable::new();

    let outcome = match &cli.command {
        Some(Command::Word {
            words,
            pretty,
            plain,
        }) => run_words(words, *pretty, *plain, &table),
        Some(Command::List { transcript, output }) => run_list(transcript, output.as_deref()),
        None => run_report(&cli, &table),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => report_error(&err),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<InputError>() {
        Some(input_err) => {
            eprintln!("ERROR: {input_err}");
            for tip in input_err.tips() {
                eprintln!("TIP: {tip}");
            }
        }
        None => {
            eprintln!("UNEXPECTED ERROR: {err:#}");
            eprintln!("TIP: Please check the file format and try again.");
        }
    }
    ExitCode::FAILURE
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

// Paths that resolve to the same file, or are spelled the same when either
// cannot be resolved.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn run_report(cli: &Cli, table: &AffixTable) -> Result<ExitCode> {
    let Some(input) = cli.input.as_deref() else {
        eprintln!("ERROR: No CSV file specified!");
        eprintln!("USAGE: qaz-parser <FILE.csv>");
        eprintln!("EXAMPLE: qaz-parser QAZ19th-text05-transcription-table.csv");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    if !has_csv_extension(input) {
        eprintln!(
            "WARNING: File '{}' doesn't have a .csv extension.",
            input.display()
        );
        eprintln!("TIP: The analyser expects CSV word lists.");
        eprintln!(
            "TIP: Convert a transcription first: qaz-parser list {}",
            input.display()
        );
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let mut config = ReportConfig::from_env();
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    config.parallel |= cli.parallel;

    let records = read_records(input)?;
    let analyzer = Analyzer::new(table);
    let analyzed = analyzer.analyze_records(&records, config.parallel);

    let summary = BatchSummary::from_records(&analyzed);
    info!(
        total = summary.total,
        recognized = summary.recognized,
        unrecognized = summary.unrecognized,
        "analysed word list"
    );
    for line in summary_lines(&summary) {
        println!("{line}");
    }

    let paths = write_reports(&analyzed, input, &config)?;
    println!("\nAnalysis saved to: {}", paths.analysis.display());
    if let Some(unknown) = paths.unknown {
        println!("Unrecognized words saved to: {}", unknown.display());
        println!("These words need additional analysis or affix definitions.");
    }

    Ok(ExitCode::SUCCESS)
}

fn run_words(words: &[String], pretty: bool, plain: bool, table: &AffixTable) -> Result<ExitCode> {
    let analyzer = Analyzer::new(table);
    let print = |word: &str| -> Result<()> {
        let result = analyzer.analyze(word);
        if plain {
            let analyzed = AnalyzedRecord {
                record: WordRecord::new(word),
                result,
            };
            println!("{}", describe(&analyzed));
        } else if pretty {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", serde_json::to_string(&result)?);
        }
        Ok(())
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read stdin")?;
            for word in line.split_whitespace() {
                print(word)?;
            }
        }
    } else {
        for word in words {
            print(word.as_str())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_list(transcript: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| word_list_path(transcript));
    if same_file(&out_path, transcript) {
        eprintln!(
            "ERROR: Output '{}' would overwrite the transcript.",
            out_path.display()
        );
        eprintln!("TIP: Pass a different path with -o.");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let text = read_utf8(transcript)?;
    let entries = build_word_list(&text);

    let file = File::create(&out_path)
        .with_context(|| format!("cannot create {}", out_path.display()))?;
    write_word_list(file, &entries)?;
    info!(path = %out_path.display(), words = entries.len(), "wrote word list");

    println!("Wrote {} words to {}", entries.len(), out_path.display());
    Ok(ExitCode::SUCCESS)
}
