//! Master card parsing, end to end.

use stcard::foundation::{Attribute, NamedEntry, StatBlock};
use stcard::parser::{CardType, parse};

const RIN: &str = ".st 代号 远坂 凛 等级 4 合计筋力 2 合计耐久 3 合计敏捷 3 合计魔力 6 合计幸运 1 合计回路 5 \
保有技能1 宝石魔术 工坊1 远坂邸 礼装1 吊坠 礼装2 宝石";

#[test]
fn full_master_card() {
    let card = parse(RIN, CardType::Master).unwrap();

    assert_eq!(card.card_type, CardType::Master);
    assert_eq!(card.code, "远坂 凛");
    assert_eq!(card.class_name, "御主");

    assert_eq!(card.total_stats.level, 4);
    assert_eq!(card.total_stats.mana, 6);
    assert_eq!(card.total_stats.noble_phantasm, 5);
    assert_eq!(card.correction_stats, StatBlock::ZERO);

    assert!(card.class_skills.is_empty());
    assert!(card.noble_phantasms.is_empty());
    assert_eq!(card.personal_skills, vec![NamedEntry::named("宝石魔术")]);
    assert_eq!(card.workshops, Some(vec![NamedEntry::named("远坂邸")]));
    assert_eq!(
        card.craft_essences,
        Some(vec![NamedEntry::named("吊坠"), NamedEntry::named("宝石")])
    );
}

#[test]
fn master_base_aliases_total() {
    let mut card = parse(RIN, CardType::Master).unwrap();
    assert!(card.shares_base_stats());
    assert_eq!(card.base(), &card.total_stats);

    card.total_stats.set(Attribute::Luck, 9);
    assert_eq!(card.base().luck, 9);
}

#[test]
fn master_without_entries_has_empty_lists() {
    let card = parse(".st 代号 士郎", CardType::Master).unwrap();
    assert_eq!(card.workshops, Some(Vec::new()));
    assert_eq!(card.craft_essences, Some(Vec::new()));
    assert_eq!(card.total_stats, StatBlock::ZERO);
}

#[test]
fn master_aggregate_keys_are_fallbacks() {
    let card = parse(".st 代号 樱 合计等级 2 合计宝具 3", CardType::Master).unwrap();
    assert_eq!(card.total_stats.level, 2);
    assert_eq!(card.total_stats.noble_phantasm, 3);
}

#[test]
fn master_key_without_value_falls_through() {
    let card = parse(".st 代号 樱 合计等级 4 等级", CardType::Master).unwrap();
    assert_eq!(card.total_stats.level, 4);
}

#[test]
fn master_without_code_is_unknown() {
    let card = parse(".st 等级 1", CardType::Master).unwrap();
    assert_eq!(card.code, "unknown");
}

#[test]
fn same_text_differs_by_card_type() {
    let text = ".st 职介 弓 代号 天 职介技能1 对魔力 工坊1 神殿";
    let servant = parse(text, CardType::Servant).unwrap();
    let master = parse(text, CardType::Master).unwrap();
    assert_eq!(servant.class_name, "弓");
    assert_eq!(master.class_name, "御主");
    assert_eq!(servant.class_skills.len(), 1);
    assert!(master.class_skills.is_empty());
    assert_eq!(servant.workshops, None);
    assert_eq!(master.workshops.map(|w| w.len()), Some(1));
}
