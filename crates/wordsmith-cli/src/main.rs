mod config;
mod extract;
mod logging;
mod prompt;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use wordsmith_core::{
    Error as CoreError, GeneratorConfig, ImproveOptions, OptionFlags, ProfileRecord,
};
use wordsmith_generate::{
    CandidateEngine, Generation, GenerationError, read_tokens, write_report, write_wordlist,
};

use config::resolve_config;
use extract::extract_credentials;
use logging::init_logging;
use prompt::Prompter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("input closed while asking for {0}")]
    InputClosed(String),
    #[error("file {} does not exist", .0.display())]
    MissingSource(PathBuf),
}

#[derive(Parser, Debug)]
#[command(
    name = "wordsmith",
    version,
    about = "Profile-based password wordlist generator"
)]
struct Cli {
    /// Configuration file (TOML).
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log debug events to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    /// Do not print the banner.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    /// Also write JSON logs to this file.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask about the target and build a wordlist from the answers.
    Interactive(InteractiveArgs),
    /// Build a wordlist from a TOML profile file.
    Profile(ProfileArgs),
    /// Expand an existing wordlist.
    Improve(ImproveArgs),
    /// Split a default-credentials CSV into username and password lists.
    Extract(ExtractArgs),
    /// Print the default configuration.
    Config,
}

#[derive(Args, Debug, Default)]
struct ExpansionArgs {
    /// Append special-character suffixes.
    #[arg(long, default_value_t = false)]
    special_chars: bool,
    /// Append numeric suffixes.
    #[arg(long, default_value_t = false)]
    numbers: bool,
    /// Add leet-substituted copies.
    #[arg(long, default_value_t = false)]
    leet: bool,
}

impl From<&ExpansionArgs> for OptionFlags {
    fn from(args: &ExpansionArgs) -> Self {
        Self {
            special_chars: args.special_chars,
            numeric_suffixes: args.numbers,
            leet: args.leet,
        }
    }
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Output path for the wordlist.
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Write the generation report as JSON.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InteractiveArgs {
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Profile file (TOML).
    #[arg(long, value_name = "FILE")]
    from: PathBuf,
    #[command(flatten)]
    expansion: ExpansionArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ImproveArgs {
    /// Wordlist to expand.
    #[arg(value_name = "WORDLIST")]
    wordlist: PathBuf,
    /// Concatenate every pair of words.
    #[arg(long, default_value_t = false)]
    concat: bool,
    #[command(flatten)]
    expansion: ExpansionArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Default-credentials CSV.
    #[arg(value_name = "CSV")]
    source: PathBuf,
    /// Directory receiving the extracted lists.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// File name prefix; defaults to the CSV file stem.
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[-] {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    if !cli.quiet {
        print_banner();
    }

    if let Command::Config = cli.command {
        print!("{}", GeneratorConfig::default().to_toml_string()?);
        return Ok(());
    }

    let env_path = std::env::var_os(wordsmith_core::CONFIG_ENV_VAR).map(PathBuf::from);
    let cwd = std::env::current_dir()?;
    let (config, source) = resolve_config(cli.config.as_deref(), env_path, &cwd)?;
    match source.path() {
        Some(path) => tracing::debug!(event = "config_loaded", path = %path.display()),
        None => tracing::debug!(event = "config_loaded", source = "defaults"),
    }
    let engine = CandidateEngine::new(config);

    match cli.command {
        Command::Interactive(args) => run_interactive(&engine, args),
        Command::Profile(args) => run_profile(&engine, args),
        Command::Improve(args) => run_improve(&engine, args),
        Command::Extract(args) => run_extract(args),
        Command::Config => Ok(()),
    }
}

fn run_interactive(engine: &CandidateEngine, args: InteractiveArgs) -> Result<(), CliError> {
    println!("[+] Insert the information about the target to make a dictionary");
    println!("[+] If you don't know all the info, just hit enter when asked! ;)\n");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let (record, flags) = prompter.collect_profile()?;

    println!("\n[+] Now making a dictionary...");
    let generation = engine.profile(&record, flags)?;
    let out = args.output.out.clone().unwrap_or_else(|| default_profile_out(&record));
    save(&generation, &out, args.output.report.as_deref())
}

fn run_profile(engine: &CandidateEngine, args: ProfileArgs) -> Result<(), CliError> {
    let record = ProfileRecord::from_path(&args.from)?;
    tracing::info!(event = "profile_loaded", path = %args.from.display());

    let generation = engine.profile(&record, OptionFlags::from(&args.expansion))?;
    let out = args.output.out.clone().unwrap_or_else(|| default_profile_out(&record));
    save(&generation, &out, args.output.report.as_deref())
}

fn run_improve(engine: &CandidateEngine, args: ImproveArgs) -> Result<(), CliError> {
    let tokens = read_tokens(&args.wordlist)?;
    tracing::info!(
        event = "wordlist_loaded",
        path = %args.wordlist.display(),
        tokens = tokens.len()
    );

    let options = ImproveOptions {
        flags: OptionFlags::from(&args.expansion),
        concatenate: args.concat,
    };
    let generation = engine.improve(&tokens, options)?;
    let out = args
        .output
        .out
        .clone()
        .unwrap_or_else(|| default_improve_out(&args.wordlist));
    save(&generation, &out, args.output.report.as_deref())
}

fn run_extract(args: ExtractArgs) -> Result<(), CliError> {
    if !args.source.is_file() {
        return Err(CliError::MissingSource(args.source));
    }
    let prefix = match args.prefix {
        Some(prefix) => prefix,
        None => args
            .source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "credentials".to_string()),
    };

    let summary = extract_credentials(&args.source, &args.out_dir, &prefix)?;
    println!(
        "[+] Saved {} counting {} usernames.",
        summary.usernames.path.display(),
        summary.usernames.words
    );
    println!(
        "[+] Saved {} counting {} passwords.",
        summary.passwords.path.display(),
        summary.passwords.words
    );
    Ok(())
}

fn save(generation: &Generation, out: &Path, report: Option<&Path>) -> Result<(), CliError> {
    let summary = write_wordlist(out, &generation.words)?;
    tracing::info!(
        event = "wordlist_written",
        path = %summary.path.display(),
        words = summary.words,
        bytes = summary.bytes
    );

    if let Some(path) = report {
        write_report(path, &generation.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    println!(
        "[+] Saved {} counting {} words.",
        summary.path.display(),
        summary.words
    );
    Ok(())
}

fn default_profile_out(record: &ProfileRecord) -> PathBuf {
    PathBuf::from(format!("{}.txt", record.name))
}

fn default_improve_out(wordlist: &Path) -> PathBuf {
    let mut name = OsString::from(wordlist.as_os_str());
    name.push(".wordsmith.txt");
    PathBuf::from(name)
}

fn print_banner() {
    println!(" wordsmith: profile-based wordlist generator");
    println!(" -------------------------------------------");
}
