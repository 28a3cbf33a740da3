use super::*;

fn parse(raw: &str) -> Result<MoveResponse, serde_json::Error> {
    serde_json::from_str(raw)
}

#[test]
fn move_request_serializes_player_col() {
    let body = serde_json::to_value(MoveRequest { player_col: 4 }).unwrap();
    assert_eq!(body, serde_json::json!({ "player_col": 4 }));
}

#[test]
fn response_with_ai_column_and_no_winner() {
    let resp = parse(r#"{"winner": null, "ai_col": 3}"#).unwrap();
    assert_eq!(resp.winner, None);
    assert_eq!(resp.ai_col, Some(3));
    assert_eq!(resp.player_row, None);
    assert_eq!(resp.ai_row, None);
}

#[test]
fn response_with_winner_and_null_ai_column() {
    let resp = parse(r#"{"winner": "Player", "ai_col": null}"#).unwrap();
    assert_eq!(resp.winner.as_deref(), Some("Player"));
    assert_eq!(resp.ai_col, None);
}

#[test]
fn missing_fields_default_to_none() {
    let resp = parse("{}").unwrap();
    assert_eq!(resp, MoveResponse::default());
}

#[test]
fn float_encoded_column_is_accepted() {
    let resp = parse(r#"{"winner": null, "ai_col": 2.0}"#).unwrap();
    assert_eq!(resp.ai_col, Some(2));
}

#[test]
fn fractional_column_is_rejected() {
    assert!(parse(r#"{"winner": null, "ai_col": 2.5}"#).is_err());
}

#[test]
fn string_column_is_rejected() {
    assert!(parse(r#"{"winner": null, "ai_col": "3"}"#).is_err());
}

#[test]
fn negative_ai_column_survives_decoding() {
    let resp = parse(r#"{"winner": null, "ai_col": -1}"#).unwrap();
    assert_eq!(resp.ai_col, Some(-1));
}

#[test]
fn confirmed_rows_are_decoded() {
    let resp = parse(r#"{"winner": null, "ai_col": 1, "player_row": 5, "ai_row": 4}"#).unwrap();
    assert_eq!(resp.player_row, Some(5));
    assert_eq!(resp.ai_row, Some(4));
}

#[test]
fn negative_confirmed_row_is_rejected() {
    assert!(parse(r#"{"winner": null, "ai_col": 1, "player_row": -1}"#).is_err());
}

#[test]
fn unknown_fields_are_ignored() {
    let resp = parse(r#"{"winner": null, "ai_col": 0, "score": 12}"#).unwrap();
    assert_eq!(resp.ai_col, Some(0));
}

#[test]
fn converts_into_engine_outcome() {
    let resp = MoveResponse { winner: Some("AI".into()), ai_col: Some(6), player_row: Some(5), ai_row: None };
    let outcome = MoveOutcome::from(resp);
    assert_eq!(outcome.winner.as_deref(), Some("AI"));
    assert_eq!(outcome.ai_col, Some(6));
    assert_eq!(outcome.player_row, Some(5));
    assert_eq!(outcome.ai_row, None);
}
