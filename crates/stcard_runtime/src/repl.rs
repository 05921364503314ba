//! The main REPL implementation.
//!
//! Lines starting with `.st` are parsed as cards using the session's current
//! card type; lines starting with `:` are commands.

use crate::editor::{LineEditor, ReadResult, RustylineEditor, wants_continuation};
use crate::format::{render_card, summary_line};
use crate::serialize::{to_json_array, to_json_pretty};
use crate::session::Session;
use stcard_foundation::{CardType, Error, ErrorKind, Result};
use std::fmt::Write as _;
use std::io::{self, Write};

/// What the REPL should do after evaluating one input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the loop.
    Quit,
}

const HELP: &str = "\
.st ...        Parse a card with the current card type
:servant       Parse following cards as servant cards
:master        Parse following cards as master cards
:list          List loaded cards
:find <text>   Find cards by code or class
:show <n>      Show card n in full
:json [n]      Print card n (or every card) as JSON
:clear         Forget all loaded cards
:help          Show this help
:quit          Exit (or Ctrl+D)
End a line with \\ to continue a card on the next line.";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (card type, roster).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "st> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the card type for parsed cards.
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.session.set_card_type(card_type);
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false); // EOF
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Output(text)) => println!("{text}"),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if !wants_continuation(&line) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    // Parse what was typed so far.
                    return Ok(Some(input));
                }
            }
        }
    }

    /// Evaluates one input: a card or a command.
    ///
    /// # Errors
    ///
    /// Returns parse errors for card text and usage errors for commands.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let text = join_continuations(input);
        let trimmed = text.trim();

        if let Some(command) = trimmed.strip_prefix(':') {
            return self.eval_command(command);
        }

        let number = self.session.ingest(trimmed)?;
        let card = self.session.get(number)?;
        Ok(Outcome::Output(summary_line(number, card)))
    }

    /// Evaluates a `:command` (without the colon).
    fn eval_command(&mut self, command: &str) -> Result<Outcome> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "servant" | "master" => {
                let card_type: CardType = name.parse()?;
                self.session.set_card_type(card_type);
                Ok(Outcome::Output(format!("card type: {card_type}")))
            }
            "list" => Ok(Outcome::Output(self.list())),
            "find" => {
                if arg.is_empty() {
                    return Err(Error::new(ErrorKind::InvalidArgument(
                        "usage: :find <text>".to_string(),
                    )));
                }
                let hits = self.session.find(arg);
                if hits.is_empty() {
                    return Ok(Outcome::Output(format!("no card matches '{arg}'")));
                }
                let lines: Vec<String> = hits
                    .into_iter()
                    .map(|(n, card)| summary_line(n, card))
                    .collect();
                Ok(Outcome::Output(lines.join("\n")))
            }
            "show" => {
                let number = parse_number(arg, ":show <n>")?;
                Ok(Outcome::Output(
                    render_card(self.session.get(number)?).trim_end().to_string(),
                ))
            }
            "json" => {
                if arg.is_empty() {
                    return Ok(Outcome::Output(to_json_array(self.session.cards())?));
                }
                let number = parse_number(arg, ":json [n]")?;
                Ok(Outcome::Output(to_json_pretty(self.session.get(number)?)?))
            }
            "clear" => {
                self.session.clear();
                Ok(Outcome::Output("cleared".to_string()))
            }
            "help" => Ok(Outcome::Output(HELP.to_string())),
            "quit" | "q" | "exit" => Ok(Outcome::Quit),
            other => Err(Error::new(ErrorKind::UnknownCommand(format!(":{other}")))),
        }
    }

    fn list(&self) -> String {
        if self.session.is_empty() {
            return "no cards loaded".to_string();
        }
        let mut out = String::new();
        for (i, card) in self.session.cards().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{}", summary_line(i + 1, card));
        }
        out
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(ctx) => eprintln!("\x1b[31mError: {error} {ctx}\x1b[0m"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mstcard v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "Paste `.st` card text to parse it as a {} card. Type :help for commands, Ctrl+D to exit.\n",
            self.session.card_type().label()
        );

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// Removes the `\` line continuations, joining lines with a newline.
fn join_continuations(input: &str) -> String {
    input
        .lines()
        .map(|line| {
            let line = line.trim_end_matches([' ', '\t']);
            line.strip_suffix('\\').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_number(arg: &str, usage: &str) -> Result<usize> {
    arg.parse()
        .map_err(|_| Error::new(ErrorKind::InvalidArgument(format!("usage: {usage}"))))
}
