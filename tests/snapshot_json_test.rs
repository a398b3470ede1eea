use hanami::core::{GameSession, GameSnapshot, PieceCatalog, ScriptedPieces, SessionConfig};
use hanami::types::{GameAction, GameEvent, PieceKind};
use serde_json::{json, Value};

#[test]
fn snapshot_serializes_phase_and_active_piece() {
    let mut session = GameSession::with_parts(
        SessionConfig::new(1).without_intro(),
        PieceCatalog::standard(),
        Box::new(ScriptedPieces::new([PieceKind::T])),
    );
    session.start();

    let value: Value = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(value["phase"], json!({ "phase": "falling" }));
    assert_eq!(value["level"], json!(1));
    assert_eq!(value["fallIntervalMs"], json!(820));
    assert_eq!(value["active"]["kind"], json!("t"));
    assert_eq!(value["active"]["anchor"], json!([2, 0]));
    assert_eq!(value["grid"].as_array().unwrap().len(), 20);
    assert_eq!(value["grid"][19], json!([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn level_intro_serializes_remaining_time() {
    let mut session = GameSession::new(SessionConfig::new(1));
    session.start();

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(
        value["phase"],
        json!({ "phase": "levelIntro", "level": 1, "remainingMs": 5000 })
    );
    assert_eq!(value["active"], Value::Null);
}

#[test]
fn default_snapshot_is_ready() {
    let value = serde_json::to_value(GameSnapshot::default()).unwrap();
    assert_eq!(value["phase"], json!({ "phase": "ready" }));
}

#[test]
fn events_serialize_with_tag() {
    let mut session = GameSession::with_parts(
        SessionConfig::new(1).without_intro(),
        PieceCatalog::standard(),
        Box::new(ScriptedPieces::new([PieceKind::O])),
    );
    session.start();
    session.apply_action(GameAction::HardDrop);

    let events: Vec<GameEvent> = session.drain_events().collect();
    let value = serde_json::to_value(&events).unwrap();

    assert_eq!(value[0], json!({ "event": "levelChanged", "level": 1 }));
    assert_eq!(
        value[1],
        json!({ "event": "pieceSpawned", "kind": "o", "pieceId": 1 })
    );
    assert_eq!(
        value[2],
        json!({ "event": "pieceLocked", "kind": "o", "pieceId": 1 })
    );
}

fn assert_camel_case_keys(value: &Value, path: &str) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                assert!(!key.contains('_'), "snake_case key {}.{}", path, key);
                assert_camel_case_keys(inner, &format!("{}.{}", path, key));
            }
        }
        Value::Array(items) => {
            for (i, inner) in items.iter().enumerate() {
                assert_camel_case_keys(inner, &format!("{}[{}]", path, i));
            }
        }
        _ => {}
    }
}

#[test]
fn json_keys_share_one_casing() {
    let mut session = GameSession::with_parts(
        SessionConfig::new(1),
        PieceCatalog::standard(),
        Box::new(ScriptedPieces::new([PieceKind::I])),
    );
    session.start();
    assert_camel_case_keys(&serde_json::to_value(session.snapshot()).unwrap(), "intro");

    session.tick(10_000);
    session.apply_action(GameAction::HardDrop);
    assert_camel_case_keys(&serde_json::to_value(session.snapshot()).unwrap(), "falling");

    let events: Vec<GameEvent> = session.drain_events().collect();
    let value = serde_json::to_value(&events).unwrap();
    assert_eq!(value[1]["pieceId"], json!(1));
    assert_camel_case_keys(&value, "events");
}
