//! JSON output for downstream collaborators.

use stcard::foundation::CardType;
use stcard::parser::parse;
use stcard::runtime::{from_json, to_json, to_json_array};

#[test]
fn servant_json_shape() {
    let card = parse(".st 职介 弓 代号 天 合计等级 5 职介技能1 单体狂化", CardType::Servant).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&card).unwrap()).unwrap();

    assert_eq!(value["code"], "天");
    assert_eq!(value["className"], "弓");
    assert_eq!(value["cardType"], "SERVANT");
    assert_eq!(value["totalStats"]["level"], 5);
    assert_eq!(
        value["classSkills"],
        serde_json::json!([{"name": "单体狂化", "rank": "", "desc": ""}])
    );
    assert!(value["workshops"].is_null());
    assert!(value["craftEssences"].is_null());
}

#[test]
fn master_json_round_trip_keeps_alias() {
    let card = parse(".st 代号 凛 等级 3 礼装1 吊坠", CardType::Master).unwrap();
    let json = to_json(&card).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["baseStats"], value["totalStats"]);
    assert_eq!(value["workshops"], serde_json::json!([]));

    let back = from_json(&json).unwrap();
    assert!(back.shares_base_stats());
    assert_eq!(back, card);
}

#[test]
fn array_output() {
    let cards = vec![
        parse(".st 代号 天", CardType::Servant).unwrap(),
        parse(".st 代号 凛", CardType::Master).unwrap(),
    ];
    let value: serde_json::Value = serde_json::from_str(&to_json_array(&cards).unwrap()).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["cardType"], "MASTER");
}

#[test]
fn malformed_json_is_serialization_error() {
    let err = from_json("{").unwrap_err();
    assert!(matches!(err.kind, stcard::ErrorKind::Serialization(_)));
}
