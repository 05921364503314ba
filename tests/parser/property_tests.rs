//! Property tests: parsing never panics and keeps its structural guarantees.

use proptest::prelude::*;
use stcard::parser::{CardType, ErrorKind, parse};

fn card_type() -> impl Strategy<Value = CardType> {
    prop_oneof![Just(CardType::Servant), Just(CardType::Master)]
}

fn card_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("职介".to_string()),
        Just("代号".to_string()),
        Just("等级".to_string()),
        Just("合计等级".to_string()),
        Just("基础筋力".to_string()),
        Just("补正魔力".to_string()),
        Just("职介技能1".to_string()),
        Just("保有技能2".to_string()),
        Just("宝具3".to_string()),
        Just("工坊1".to_string()),
        Just("礼装2".to_string()),
        (-100i32..100).prop_map(|n| n.to_string()),
        "[a-z\u{4e00}-\u{4e20}]{1,4}",
    ]
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in ".*", ty in card_type()) {
        let _ = parse(&text, ty);
    }

    #[test]
    fn text_without_marker_is_rejected(text in "[a-z\u{4e00}-\u{4e20} ]{1,40}", ty in card_type()) {
        let err = parse(&text, ty).unwrap_err();
        prop_assert!(err.is_format_error());
    }

    #[test]
    fn marked_text_always_parses(tokens in prop::collection::vec(card_token(), 0..30), ty in card_type()) {
        let text = format!(".st {}", tokens.join(" "));
        let card = parse(&text, ty).unwrap();

        prop_assert_eq!(card.card_type, ty);
        prop_assert!(!card.code.is_empty());
        prop_assert!(card.class_skills.len() <= 3);
        prop_assert!(card.personal_skills.len() <= 3);
        prop_assert!(card.noble_phantasms.len() <= 3);
        for entry in card.class_skills.iter().chain(&card.personal_skills) {
            prop_assert!(!entry.name.is_empty());
            prop_assert!(entry.rank.is_empty());
        }

        match ty {
            CardType::Servant => {
                prop_assert!(card.workshops.is_none());
                prop_assert!(card.craft_essences.is_none());
            }
            CardType::Master => {
                prop_assert!(card.shares_base_stats());
                prop_assert!(card.correction_stats.is_zero());
                prop_assert!(card.class_skills.is_empty());
                prop_assert_eq!(card.class_name.as_str(), "御主");
            }
        }
    }

    #[test]
    fn whitespace_layout_does_not_matter(tokens in prop::collection::vec(card_token(), 0..20), ty in card_type()) {
        let spaced = format!(".st {}", tokens.join(" "));
        let ragged = format!("\n .st\t{}\n", tokens.join("\n\t  "));
        let a = parse(&spaced, ty).unwrap();
        let b = parse(&ragged, ty).unwrap();
        prop_assert_eq!(a.total_stats, b.total_stats);
        prop_assert_eq!(a.code, b.code);
        prop_assert_eq!(a.class_skills, b.class_skills);
    }
}

#[test]
fn empty_is_distinct_from_invalid_prefix() {
    assert_eq!(parse("", CardType::Servant).unwrap_err().kind, ErrorKind::EmptyInput);
}
