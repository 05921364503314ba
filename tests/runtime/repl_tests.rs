//! REPL evaluation driven through a scripted editor.

use stcard::foundation::{CardType, ErrorKind, Result};
use stcard::runtime::{LineEditor, Outcome, ReadResult, Repl, Session};

struct Script {
    lines: std::vec::IntoIter<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| (*l).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

#[test]
fn scripted_session() {
    let mut repl = Repl::with_editor(Script::new(&[
        ".st 职介 弓 代号 天 \\",
        "合计等级 5",
        ":master",
        ".st 代号 凛 等级 3",
        ":bogus",
        "not a card",
    ]))
    .without_banner();
    repl.run().unwrap();

    let session = repl.session();
    assert_eq!(session.len(), 2);
    assert_eq!(session.get(1).unwrap().total_stats.level, 5);
    assert_eq!(session.get(2).unwrap().card_type, CardType::Master);
}

#[test]
fn preloaded_session_is_visible() {
    let mut session = Session::new();
    session.ingest(".st 代号 天").unwrap();
    let mut repl = Repl::with_editor(Script::new(&[]))
        .without_banner()
        .with_session(session)
        .with_card_type(CardType::Master);

    match repl.eval(":list").unwrap() {
        Outcome::Output(text) => assert_eq!(text, "#1 [SERVANT] 天 () Lv0"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(repl.session().card_type(), CardType::Master);
}

#[test]
fn eval_errors_are_typed() {
    let mut repl = Repl::with_editor(Script::new(&[])).without_banner();
    assert_eq!(
        repl.eval(":frobnicate").unwrap_err().kind,
        ErrorKind::UnknownCommand(":frobnicate".to_string())
    );
    assert_eq!(repl.eval("   ").unwrap_err().kind, ErrorKind::EmptyInput);
}
