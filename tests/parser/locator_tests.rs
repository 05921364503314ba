//! Field lookup over token streams.

use stcard::parser::{CardTokenizer, FieldLocator, LookupMode};

#[test]
fn span_stops_at_boundary_prefix() {
    let tokens = CardTokenizer::tokenize("职介技能1 火球术 职介技能2 冰刺");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.span("职介技能1").as_deref(), Some("火球术"));
    assert_eq!(locator.span("职介技能2").as_deref(), Some("冰刺"));
}

#[test]
fn span_joins_multiple_tokens() {
    let tokens = CardTokenizer::tokenize(".st 保有技能1 黄金 律 B 宝具1 王之财宝");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.span("保有技能1").as_deref(), Some("黄金 律 B"));
}

#[test]
fn scalar_takes_one_token() {
    let tokens = CardTokenizer::tokenize(".st 代号 天 之 锁");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.scalar("代号"), Some("天"));
    assert_eq!(
        locator.lookup("代号", LookupMode::Span).as_deref(),
        Some("天 之 锁")
    );
}

#[test]
fn missing_keyword_or_trailing_keyword_is_none() {
    let tokens = CardTokenizer::tokenize(".st 代号");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.scalar("代号"), None);
    assert_eq!(locator.span("代号"), None);
    assert_eq!(locator.scalar("职介"), None);
}

#[test]
fn keyword_followed_by_boundary_has_empty_span() {
    let tokens = CardTokenizer::tokenize(".st 职介 代号 天");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.span("职介"), None);
}

#[test]
fn first_occurrence_wins() {
    let tokens = CardTokenizer::tokenize(".st 代号 甲 代号 乙");
    let locator = FieldLocator::new(&tokens);
    assert_eq!(locator.scalar("代号"), Some("甲"));
}

#[test]
fn tokenizer_collapses_whitespace() {
    let tokens = CardTokenizer::tokenize("  .st\t职介\n\n弓  ");
    assert_eq!(tokens.as_slice(), [".st", "职介", "弓"]);
    assert_eq!(tokens.joined(), ".st 职介 弓");
}
