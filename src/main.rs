//! pwd-policy - checks candidate passwords against the length-tiered policy.
//!
//! Prints `1` for an accepted password and `0` for a rejected one. The exit
//! status is 0 whenever candidates were checked; it is 1 only when input
//! could not be read.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use secrecy::SecretSlice;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwd_policy::{
    InputError, Verdict, read_candidates, read_candidates_from_path, validate_password_bytes,
};

/// Check passwords against the length-tiered complexity policy
#[derive(Parser, Debug)]
#[command(name = "pwd-policy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Password to check. Without it, candidates are read from --file or stdin, one per line
    #[arg(allow_hyphen_values = true)]
    password: Option<OsString>,

    /// Read candidates from a file, one per line
    #[arg(short, long, env = "PWD_POLICY_FILE")]
    file: Option<PathBuf>,

    /// Print rejection reasons after each result
    #[arg(short, long)]
    explain: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to write results: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, stdin.lock(), &mut stdout.lock()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber on stderr so results stay alone on stdout
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

fn run<R: BufRead, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> Result<(), CliError> {
    let candidates = match (&cli.password, &cli.file) {
        (Some(password), _) => vec![password.clone().into_encoded_bytes()],
        (None, Some(path)) => read_candidates_from_path(path)?,
        (None, None) => read_candidates(stdin)?,
    };

    tracing::debug!("Checking {} candidates", candidates.len());

    for candidate in candidates {
        let secret: SecretSlice<u8> = candidate.into();

        #[cfg(feature = "async")]
        let verdict = validate_password_bytes(&secret, None);

        #[cfg(not(feature = "async"))]
        let verdict = validate_password_bytes(&secret);

        write_verdict(out, &verdict, cli.explain)?;
    }

    out.flush()?;
    Ok(())
}

fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict, explain: bool) -> io::Result<()> {
    let digit = if verdict.is_accepted() { '1' } else { '0' };
    if explain && !verdict.reasons.is_empty() {
        writeln!(out, "{}\t{}", digit, verdict.reasons.join("; "))
    } else {
        writeln!(out, "{}", digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["pwd-policy"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("Failed to parse args")
    }

    fn run_cli(cli: &Cli, stdin: &[u8]) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(cli, stdin, &mut out)?;
        Ok(String::from_utf8(out).expect("Output is not UTF-8"))
    }

    fn run_with(args: &[&str], stdin: &[u8]) -> Result<String, CliError> {
        remove_env("PWD_POLICY_FILE");
        run_cli(&parse(args), stdin)
    }

    #[test]
    #[serial]
    fn test_password_argument() {
        assert_eq!(run_with(&["jdfKd&1a"], b"").unwrap(), "1\n");
        assert_eq!(run_with(&["jdfKd&ca"], b"").unwrap(), "0\n");
    }

    #[test]
    #[serial]
    fn test_password_argument_ignores_stdin() {
        assert_eq!(run_with(&["jd#Kd&1"], b"jdfKd&1a\n").unwrap(), "0\n");
    }

    #[test]
    #[serial]
    fn test_stdin_one_result_per_line() {
        let stdin = b"jd#Kd&1\njdfKd&1a\njdfKd31abcde\r\njdfKdabcdebcdefgh\n";
        assert_eq!(run_with(&[], stdin).unwrap(), "0\n1\n1\n1\n");
    }

    #[test]
    #[serial]
    fn test_empty_stdin_prints_nothing() {
        assert_eq!(run_with(&[], b"").unwrap(), "");
    }

    #[test]
    #[serial]
    fn test_explain_prints_reasons() {
        let output = run_with(&["--explain"], b"jdfKd&ca\njdfKd&1a\nshort\n").unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0\tMissing for a 8-character password: numbers");
        assert_eq!(lines[1], "1");
        assert_eq!(lines[2], "0\tPassword must be at least 8 characters");
    }

    #[test]
    #[serial]
    fn test_file_input() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "jdfKd81a").expect("Failed to write");
        writeln!(temp_file, "{}", "a".repeat(50)).expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        assert_eq!(run_with(&["--file", path], b"").unwrap(), "0\n1\n");
    }

    #[test]
    #[serial]
    fn test_missing_file_is_an_error() {
        let result = run_with(&["--file", "/nonexistent/path/candidates.txt"], b"");
        assert!(matches!(
            result,
            Err(CliError::Input(InputError::FileNotFound(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_password_argument_wins_over_file() {
        let output = run_with(&["--file", "/nonexistent/path/candidates.txt", "jdfKd&1a"], b"");
        assert_eq!(output.unwrap(), "1\n");
    }

    #[test]
    #[serial]
    fn test_password_argument_with_file_env_set() {
        set_env("PWD_POLICY_FILE", "/nonexistent/path/candidates.txt");
        let cli = parse(&["jdfKd&1a"]);
        let output = run_cli(&cli, b"");
        remove_env("PWD_POLICY_FILE");

        assert_eq!(output.unwrap(), "1\n");
    }

    #[test]
    #[serial]
    fn test_file_env_used_without_argument() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "jdfKd&ca").expect("Failed to write");
        writeln!(temp_file, "jdfKd&1a").expect("Failed to write");

        set_env("PWD_POLICY_FILE", temp_file.path().to_str().unwrap());
        let cli = parse(&[]);
        let output = run_cli(&cli, b"ignored\n");
        remove_env("PWD_POLICY_FILE");

        assert_eq!(output.unwrap(), "0\n1\n");
    }

    #[test]
    #[serial]
    fn test_password_starting_with_hyphen() {
        assert_eq!(run_with(&["-jdfKd&1a"], b"").unwrap(), "1\n");
        assert_eq!(run_with(&["-jdfKd&ca"], b"").unwrap(), "0\n");
    }

    #[test]
    #[serial]
    fn test_flags_still_parsed_before_hyphen_password() {
        let output = run_with(&["--explain", "-jdfKd&ca"], b"").unwrap();
        assert_eq!(output, "0\tMissing for a 9-character password: numbers\n");
    }
}
