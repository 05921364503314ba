//! stcard CLI entry point.

use stcard_foundation::CardType;
use stcard_runtime::{Repl, Session, init_tracing, load_cards, summary_line, to_json_array};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    card_type: CardType,
    batch_mode: bool,
    json: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            "-t" | "--type" => {
                i += 1;
                if i >= args.len() {
                    return Err("--type requires a value".into());
                }
                config.card_type = args[i].parse()?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("stcard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.verbose);
    debug!(card_type = %config.card_type, files = config.files.len(), "starting");

    let mut session = Session::new().with_card_type(config.card_type);

    for file in &config.files {
        for card in load_cards(file, config.card_type)? {
            session.add(card);
        }
    }

    if !config.files.is_empty() {
        if config.json {
            println!("{}", to_json_array(session.cards())?);
        } else {
            for (i, card) in session.cards().iter().enumerate() {
                println!("{}", summary_line(i + 1, card));
            }
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    // Files already printed their summaries, so skip the banner
    let mut repl = Repl::new()?.with_session(session);
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mstcard\x1b[0m - Parser for `.st` character cards

\x1b[1mUSAGE:\x1b[0m
    stcard [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Card files to parse before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -t, --type TYPE      Card type: servant (default) or master
    -b, --batch          Parse files and exit (no REPL)
        --json           Print parsed files as a JSON array
    -v, --verbose        Debug logging (overridden by STCARD_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    stcard                           Start interactive REPL
    stcard cards.txt                 Parse cards.txt, then start REPL
    stcard -b --json cards.txt       Print cards.txt as JSON and exit
    stcard -t master -b masters.txt  Parse master cards and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    .st ...              Parse a card
    :servant, :master    Switch card type
    :list, :find TEXT    List or search loaded cards
    :show N, :json [N]   Show a card as text or JSON
    :clear               Forget all loaded cards
    :help                Show command help
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
