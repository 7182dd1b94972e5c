//! lexlookup - Exact-Match Word List Lookup
//!
//! Loads a sorted full-form word list and looks up words given on the command
//! line, or reads one word per line from stdin.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Builder;
use lexlookup::render::{DetailedRenderer, ResultRenderer, TextRenderer};
use lexlookup::{Application, LookupConfig};
use log::LevelFilter;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    let command = Command::new("lexlookup")
        .version(lexlookup::VERSION)
        .about("Exact-match lookup in a sorted full-form word list")
        .long_about(
            "lexlookup loads a tab-separated word list (variant, headword, homograph, \
             part of speech, id), sorted by variant in byte order, and reports whether \
             each word occurs as a variant. Without WORD arguments it reads one word \
             per line from stdin.",
        )
        .arg(
            Arg::new("wordlist")
                .short('w')
                .long("wordlist")
                .help("Word list (plain, .gz, .bz2, .xz or .zst); defaults to config word_list")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("words")
                .help("Words to look up")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verify-sorted")
                .long("verify-sorted")
                .help("Check that the word list is sorted before searching it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("details")
                .short('d')
                .long("details")
                .help("Show headword, homograph and id of each match")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "config")]
    let command = command.arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file (default: <config dir>/lexlookup/config.toml)")
            .value_parser(clap::value_parser!(PathBuf)),
    );

    command
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        match matches.get_count("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    // RUST_LOG still wins when set
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

#[cfg(feature = "config")]
fn load_config(matches: &ArgMatches) -> Result<LookupConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => LookupConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(LookupConfig::load_default()?),
    }
}

#[cfg(not(feature = "config"))]
fn load_config(_matches: &ArgMatches) -> Result<LookupConfig> {
    Ok(LookupConfig::default())
}

/// Process exit code for a one-shot run: 0 when every word was found, 1 otherwise
fn lookup_exit_code(all_found: bool) -> u8 {
    if all_found {
        0
    } else {
        1
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let matches = cli().get_matches();
    init_logging(&matches);

    let mut config = load_config(&matches)?;
    if matches.get_flag("verify-sorted") {
        config.verify_sorted = true;
    }

    let cli_word_list = matches.get_one::<PathBuf>("wordlist");
    let word_list = config.resolve_word_list(cli_word_list.map(PathBuf::as_path))?;

    let renderer: Box<dyn ResultRenderer> = if matches.get_flag("details") {
        Box::new(DetailedRenderer)
    } else {
        Box::new(TextRenderer)
    };

    let app = Application::load(&word_list, &config, renderer)
        .await
        .with_context(|| format!("Failed to load word list {}", word_list.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.get_many::<String>("words") {
        Some(words) => {
            let all_found = app.run_queries(words, &mut out)?;
            out.flush()?;
            Ok(ExitCode::from(lookup_exit_code(all_found)))
        }
        None => {
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal().then_some("> ");
            app.run_interactive(stdin.lock(), &mut out, prompt)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!lexlookup::VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_parses_words_and_flags() {
        let matches = cli()
            .try_get_matches_from([
                "lexlookup",
                "--verify-sorted",
                "-vv",
                "--wordlist",
                "words.csv",
                "kat",
                "hund",
            ])
            .unwrap();

        assert!(matches.get_flag("verify-sorted"));
        assert_eq!(matches.get_count("verbose"), 2);
        assert_eq!(
            matches.get_one::<PathBuf>("wordlist"),
            Some(&PathBuf::from("words.csv"))
        );
        let words: Vec<&String> = matches.get_many::<String>("words").unwrap().collect();
        assert_eq!(words, vec!["kat", "hund"]);
    }

    #[test]
    fn test_cli_without_words_selects_interactive_mode() {
        let matches = cli()
            .try_get_matches_from(["lexlookup", "-w", "words.csv"])
            .unwrap();
        assert!(matches.get_many::<String>("words").is_none());
    }

    #[test]
    fn test_words_without_wordlist_fall_back_to_config() {
        let matches = cli()
            .try_get_matches_from(["lexlookup", "kat", "hund"])
            .unwrap();

        assert!(matches.get_one::<PathBuf>("wordlist").is_none());
        let words: Vec<&String> = matches.get_many::<String>("words").unwrap().collect();
        assert_eq!(words, vec!["kat", "hund"]);

        let config = LookupConfig {
            word_list: Some(PathBuf::from("/etc/lexlookup/fullforms.csv")),
            ..LookupConfig::default()
        };
        let cli_word_list = matches.get_one::<PathBuf>("wordlist");
        let resolved = config
            .resolve_word_list(cli_word_list.map(PathBuf::as_path))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/lexlookup/fullforms.csv"));
    }

    #[test]
    fn test_exit_code_reflects_missing_words() {
        assert_eq!(lookup_exit_code(true), 0);
        assert_eq!(lookup_exit_code(false), 1);
    }
}
