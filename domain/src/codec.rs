//! Value codecs: pure transcoders between runtime numbers and their script text.
//!
//! A codec knows nothing about setting names or domains. Settings validate a
//! value first and only then hand it to their codec, so [`ValueCodec::encode`]
//! is infallible.
//!
//! | Codec | Encodes | Decodes |
//! |-------|---------|---------|
//! | [`IntegerCodec`] | `240` → `240` | `240`, `"240"`, `true` → `240`, `240`, `1` |
//! | [`BooleanCodec`] | `0` → `False`, nonzero → `True` | `"False"`, `false`, `$false`, `0` → `0` |

use crate::core::error::DecodeError;
use crate::core::number::Number;
use serde_json::Value;
use std::fmt;

/// Transcoder between a runtime number and its external textual form.
pub trait ValueCodec: fmt::Debug + Send + Sync {
    /// Render a validated value as it appears in a generated script.
    fn encode(&self, value: Number) -> String;

    /// Read an observed value back into a runtime number.
    ///
    /// `raw` is either a JSON scalar from a structured snapshot or a
    /// [`Value::String`] holding a token scanned from script text.
    fn decode(&self, raw: &Value) -> Result<Number, DecodeError>;

    /// The external form only carries whole numbers.
    fn integral(&self) -> bool {
        false
    }
}

/// Integer ↔ decimal string.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerCodec;

impl ValueCodec for IntegerCodec {
    fn encode(&self, value: Number) -> String {
        match value {
            Number::Int(i) => i.to_string(),
            Number::Float(f) => (f.trunc() as i64).to_string(),
        }
    }

    fn decode(&self, raw: &Value) -> Result<Number, DecodeError> {
        match raw {
            Value::Number(_) => match Number::from_json(raw) {
                Some(Number::Int(i)) => Ok(Number::Int(i)),
                Some(Number::Float(f)) if f.fract() == 0.0 => Ok(Number::Int(f as i64)),
                _ => Err(DecodeError::new(raw, "integer")),
            },
            Value::Bool(b) => Ok(Number::Int(i64::from(*b))),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Number::Int)
                .map_err(|_| DecodeError::new(s, "integer")),
            _ => Err(DecodeError::new(raw, "integer")),
        }
    }

    fn integral(&self) -> bool {
        true
    }
}

/// Integer ↔ boolean keyword (`True` / `False`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl ValueCodec for BooleanCodec {
    fn encode(&self, value: Number) -> String {
        let keyword = if value.is_zero() { "False" } else { "True" };
        keyword.to_string()
    }

    fn decode(&self, raw: &Value) -> Result<Number, DecodeError> {
        match raw {
            Value::Bool(b) => Ok(Number::Int(i64::from(*b))),
            Value::Number(_) => Number::from_json(raw)
                .map(|n| Number::Int(i64::from(!n.is_zero())))
                .ok_or_else(|| DecodeError::new(raw, "boolean")),
            Value::String(s) => {
                let keyword = s.trim().trim_start_matches('$').to_ascii_lowercase();
                match keyword.as_str() {
                    "true" | "1" => Ok(Number::Int(1)),
                    "false" | "0" => Ok(Number::Int(0)),
                    _ => Err(DecodeError::new(s, "boolean")),
                }
            }
            _ => Err(DecodeError::new(raw, "boolean")),
        }
    }

    fn integral(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== IntegerCodec ====================

    #[test]
    fn test_integer_encode() {
        assert_eq!(IntegerCodec.encode(Number::Int(240)), "240");
        assert_eq!(IntegerCodec.encode(Number::Float(15.0)), "15");
    }

    #[test]
    fn test_integer_decode_accepts_json_and_text() {
        assert_eq!(IntegerCodec.decode(&json!(240)).unwrap(), Number::Int(240));
        assert_eq!(IntegerCodec.decode(&json!("240")).unwrap(), Number::Int(240));
        assert_eq!(IntegerCodec.decode(&json!(" 15 ")).unwrap(), Number::Int(15));
        assert_eq!(IntegerCodec.decode(&json!(true)).unwrap(), Number::Int(1));
        assert_eq!(IntegerCodec.decode(&json!(4.0)).unwrap(), Number::Int(4));
    }

    #[test]
    fn test_integer_decode_rejects_garbage() {
        let err = IntegerCodec.decode(&json!("MACHINE/WEBROOT/APPHOST")).unwrap_err();
        assert_eq!(err.expected, "integer");
        assert!(IntegerCodec.decode(&json!(2.5)).is_err());
        assert!(IntegerCodec.decode(&json!(null)).is_err());
        assert!(IntegerCodec.decode(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_integer_round_trip() {
        for v in [0, 1, 10, 120, 4_294_967_295] {
            let text = IntegerCodec.encode(Number::Int(v));
            assert_eq!(IntegerCodec.decode(&Value::String(text)).unwrap(), Number::Int(v));
        }
    }

    // ==================== BooleanCodec ====================

    #[test]
    fn test_boolean_encode() {
        assert_eq!(BooleanCodec.encode(Number::Int(0)), "False");
        assert_eq!(BooleanCodec.encode(Number::Int(1)), "True");
        assert_eq!(BooleanCodec.encode(Number::Int(7)), "True");
    }

    #[test]
    fn test_boolean_decode_keywords() {
        for raw in ["True", "true", "TRUE", "$true", "1"] {
            assert_eq!(BooleanCodec.decode(&json!(raw)).unwrap(), Number::Int(1), "{raw}");
        }
        for raw in ["False", "false", "$False", "0"] {
            assert_eq!(BooleanCodec.decode(&json!(raw)).unwrap(), Number::Int(0), "{raw}");
        }
    }

    #[test]
    fn test_boolean_decode_json() {
        assert_eq!(BooleanCodec.decode(&json!(false)).unwrap(), Number::Int(0));
        assert_eq!(BooleanCodec.decode(&json!(true)).unwrap(), Number::Int(1));
        assert_eq!(BooleanCodec.decode(&json!(0)).unwrap(), Number::Int(0));
        assert_eq!(BooleanCodec.decode(&json!(5)).unwrap(), Number::Int(1));
    }

    #[test]
    fn test_boolean_decode_rejects_garbage() {
        let err = BooleanCodec.decode(&json!("maybe")).unwrap_err();
        assert_eq!(err.raw, "maybe");
        assert_eq!(err.expected, "boolean");
    }
}
