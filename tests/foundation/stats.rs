//! Integration tests for StatBlock and Attribute

use stcard::foundation::{Attribute, StatBlock};

#[test]
fn default_block_is_zero() {
    let block = StatBlock::default();
    assert!(block.is_zero());
    assert_eq!(block, StatBlock::ZERO);
    for attribute in Attribute::ALL {
        assert_eq!(block.get(attribute), 0);
    }
}

#[test]
fn attributes_are_in_card_order() {
    let names: Vec<&str> = Attribute::ALL.iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        ["level", "strength", "endurance", "agility", "mana", "luck", "noblePhantasm"]
    );
    for (i, attribute) in Attribute::ALL.iter().enumerate() {
        assert_eq!(attribute.index(), i);
    }
}

#[test]
fn set_and_get_match_fields() {
    let mut block = StatBlock::new();
    block.set(Attribute::Strength, 10);
    block.set(Attribute::NoblePhantasm, -2);
    assert_eq!(block.strength, 10);
    assert_eq!(block.noble_phantasm, -2);
    assert!(!block.is_zero());
}

#[test]
fn iter_yields_every_attribute() {
    let block = StatBlock::new().with(Attribute::Luck, 3);
    let pairs: Vec<(Attribute, i32)> = block.iter().collect();
    assert_eq!(pairs.len(), 7);
    assert_eq!(pairs[5], (Attribute::Luck, 3));
}

#[test]
fn stat_block_json_is_camel_case() {
    let block = StatBlock::new().with(Attribute::NoblePhantasm, 2);
    let json = serde_json::to_value(block).unwrap();
    assert_eq!(json["noblePhantasm"], 2);
    assert_eq!(json["level"], 0);

    let parsed: StatBlock = serde_json::from_str(r#"{"strength": 4}"#).unwrap();
    assert_eq!(parsed, StatBlock::new().with(Attribute::Strength, 4));
}
