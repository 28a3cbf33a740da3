//! Wire types for the game server's `POST /move` endpoint.
//!
//! DESIGN
//! ======
//! The server is written in a dynamically typed language, so integer fields
//! are accepted in any integer-compatible JSON form (`3` or `3.0`). Unknown
//! fields are ignored. `player_row` / `ai_row` are optional confirmations of
//! where each piece landed; servers that do not send them fall back to the
//! client's own gravity drop.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use board::engine::MoveOutcome;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// 0-based column the local player clicked.
    pub player_col: usize,
}

/// Reply from `POST /move`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Display-ready label of the winning side, if the game just ended.
    #[serde(default)]
    pub winner: Option<String>,
    /// 0-based column the AI dropped into.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub ai_col: Option<i64>,
    /// Row (0 = top) the server placed the player's piece in.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_usize_from_number")]
    pub player_row: Option<usize>,
    /// Row (0 = top) the server placed the AI's piece in.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_usize_from_number")]
    pub ai_row: Option<usize>,
}

impl From<MoveResponse> for MoveOutcome {
    fn from(resp: MoveResponse) -> Self {
        Self { winner: resp.winner, ai_col: resp.ai_col, player_row: resp.player_row, ai_row: resp.ai_row }
    }
}

fn deserialize_opt_usize_from_number<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_opt_i64_from_number(deserializer)? {
        Some(value) => usize::try_from(value)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("row {value} is negative"))),
        None => Ok(None),
    }
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number or null")),
    }
}
