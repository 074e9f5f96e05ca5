//! Command-line interface for clex
//! Tokenizes a C-like source file, runs the sanity checks and writes the report.
//!
//! Usage:
//!   clex [`<input>`] [-o `<output>`] [-f `<format>`] [-c `<config>`]   - Analyze a file
//!   clex --list-formats                                              - List report formats
//!
//! Settings come from the built-in defaults, then `clex.toml` in the working directory if
//! present, then the file given with `--config`, then the flags.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use clex::clex::analysis::{Analysis, Analyzer};
use clex::clex::formats::{drain, ConsoleEcho, FormatRegistry, RecordSink, ReportWriter};
use clex::clex::loader::SourceLoader;
use clex_config::{ClexConfig, ConfigError, Loader, LOCAL_CONFIG_FILE};
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

fn main() {
    logging::init_tracing();

    let matches = Command::new("clex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lexical analyzer and sanity checker for C-like source files")
        .arg(
            Arg::new("input")
                .help("Path to the source file (default: io.input, codigo-c.c)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the report file (default: io.output, tokens_saida.txt)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format (see --list-formats)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("keywords")
                .long("keywords")
                .help("Keyword table used by the classifier")
                .value_parser(["standard", "extended"]),
        )
        .arg(
            Arg::new("drop-blank-lines")
                .long("drop-blank-lines")
                .help("Skip lines left empty after comment removal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not echo the report to the console")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear")
                .long("clear")
                .help("Clear the terminal before the run")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the report to stdout instead of writing the report file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available report formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    handle_analyze_command(&config, &registry, matches.get_flag("stdout"));
}

/// Defaults, then the local file, then `--config`, then flags.
fn load_config(matches: &ArgMatches) -> Result<ClexConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for (arg, key) in [
        ("input", "io.input"),
        ("output", "io.output"),
        ("format", "report.format"),
        ("keywords", "lexer.keywords"),
    ] {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    if matches.get_flag("drop-blank-lines") {
        loader = loader.set_override("lexer.drop_blank_lines", true)?;
    }
    if matches.get_flag("quiet") {
        loader = loader.set_override("console.echo", false)?;
    }
    if matches.get_flag("clear") {
        loader = loader.set_override("console.clear_screen", true)?;
    }

    loader.build()
}

/// Handle the analyze command
fn handle_analyze_command(config: &ClexConfig, registry: &FormatRegistry, to_stdout: bool) {
    let format = config.report.format.as_str();
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        process::exit(1);
    }

    if config.console.clear_screen {
        if let Err(e) = clear_screen() {
            tracing::warn!(error = %e, "could not clear the terminal");
        }
    }

    let input = &config.io.input;
    let source = SourceLoader::from_path(input).unwrap_or_else(|e| {
        eprintln!("Erro: {}", e);
        process::exit(1);
    });

    let analyzer = Analyzer::new(config.lexer);
    let analysis = source.analyze_with(&analyzer).unwrap_or_else(|e| {
        eprintln!("Erro: {}", e);
        process::exit(1);
    });
    tracing::info!(
        input = %input.display(),
        keywords = config.lexer.keyword_table.name(),
        tokens = analysis.tokens.len(),
        errors = analysis.has_errors(),
        "analyzed"
    );

    if to_stdout {
        let report = registry.serialize(&analysis, format).unwrap_or_else(|e| {
            eprintln!("Error formatting report: {}", e);
            process::exit(1);
        });
        print!("{}", report);
        return;
    }

    let output = &config.io.output;
    let echo = config.console.echo;
    if let Err(e) = write_report(&analysis, registry, format, output, echo) {
        eprintln!("Erro ao gravar '{}': {}", output.display(), e);
        process::exit(1);
    }

    if echo {
        println!(
            "Análise concluída. Tokens e avisos salvos em '{}'.",
            output.display()
        );
    }
}

/// Writes the report file and, when echoing, the console rendering of the same records.
///
/// The text format streams records straight into the file; other formats are serialized
/// whole through the registry.
fn write_report(
    analysis: &Analysis,
    registry: &FormatRegistry,
    format: &str,
    output: &Path,
    echo: bool,
) -> Result<(), Box<dyn Error>> {
    let records = analysis.records();
    let mut console = ConsoleEcho::stdout();

    if format == "text" {
        let mut report = ReportWriter::new(BufWriter::new(File::create(output)?));
        let mut sinks: Vec<&mut dyn RecordSink> = Vec::new();
        sinks.push(&mut report);
        if echo {
            sinks.push(&mut console);
        }
        drain(&records, &mut sinks)?;
    } else {
        fs::write(output, registry.serialize(analysis, format)?)?;
        if echo {
            drain(&records, &mut [&mut console as &mut dyn RecordSink])?;
        }
    }

    Ok(())
}

fn clear_screen() -> io::Result<()> {
    use crossterm::cursor::MoveTo;
    use crossterm::execute;
    use crossterm::terminal::{Clear, ClearType};

    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available report formats:\n");

    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
