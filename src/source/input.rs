//! Positional telemetry input.
//!
//! The input line is a JSON array of numeric arrays whose meaning is given by
//! position rather than by key:
//!
//! | index | contents                                          |
//! |-------|---------------------------------------------------|
//! | `0`   | elapsed encryption time per package (microseconds) |
//! | `1`   | package numbers the network server failed to decrypt |
//! | `2`   | package numbers the gateway missed (optional)      |

use serde::Serialize;
use serde_json::Value;

use crate::error::TraceError;

/// Minimum number of positional sequences in an input line.
const MIN_SEQUENCES: usize = 2;
/// Maximum number of positional sequences in an input line.
const MAX_SEQUENCES: usize = 3;

/// One parsed telemetry trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawInput {
    /// Elapsed time per package; index `i` is package number `i + 1`.
    pub elapsed: Vec<f64>,
    /// 1-based package numbers that failed to decrypt.
    pub failures: Vec<u64>,
    /// 1-based package numbers the gateway never forwarded, when supplied.
    pub gateway_missed: Option<Vec<u64>>,
}

impl RawInput {
    /// Parse a single JSON line into a trace.
    ///
    /// # Example
    ///
    /// ```
    /// use packet_doctor::RawInput;
    ///
    /// let input = RawInput::from_json("[[10, 12, 9], [1, 3]]").unwrap();
    /// assert_eq!(input.elapsed, vec![10.0, 12.0, 9.0]);
    /// assert_eq!(input.failures, vec![1, 3]);
    /// assert!(input.gateway_missed.is_none());
    /// ```
    pub fn from_json(line: &str) -> Result<Self, TraceError> {
        let value: Value = serde_json::from_str(line)?;
        Self::from_value(&value)
    }

    /// Convert an already-parsed JSON value into a trace.
    pub fn from_value(value: &Value) -> Result<Self, TraceError> {
        let Some(sequences) = value.as_array() else {
            return Err(TraceError::Shape(format!(
                "expected an array of sequences, got {}",
                kind_of(value)
            )));
        };

        if !(MIN_SEQUENCES..=MAX_SEQUENCES).contains(&sequences.len()) {
            return Err(TraceError::Shape(format!(
                "expected {} or {} sequences, got {}",
                MIN_SEQUENCES,
                MAX_SEQUENCES,
                sequences.len()
            )));
        }

        let elapsed = numbers_at(sequences, 0)?;
        let failures = package_numbers_at(sequences, 1)?;
        let gateway_missed = match sequences.get(2) {
            Some(_) => Some(package_numbers_at(sequences, 2)?),
            None => None,
        };

        Ok(Self {
            elapsed,
            failures,
            gateway_missed,
        })
    }
}

fn sequence_at(sequences: &[Value], index: usize) -> Result<&Vec<Value>, TraceError> {
    sequences[index].as_array().ok_or_else(|| {
        TraceError::Shape(format!(
            "sequence {} must be an array, got {}",
            index,
            kind_of(&sequences[index])
        ))
    })
}

fn numbers_at(sequences: &[Value], index: usize) -> Result<Vec<f64>, TraceError> {
    sequence_at(sequences, index)?
        .iter()
        .enumerate()
        .map(|(pos, v)| {
            v.as_f64().ok_or_else(|| {
                TraceError::Shape(format!(
                    "element [{}][{}] must be a number, got {}",
                    index,
                    pos,
                    kind_of(v)
                ))
            })
        })
        .collect()
}

fn package_numbers_at(sequences: &[Value], index: usize) -> Result<Vec<u64>, TraceError> {
    sequence_at(sequences, index)?
        .iter()
        .enumerate()
        .map(|(pos, v)| {
            package_number(v).ok_or_else(|| {
                TraceError::Shape(format!(
                    "element [{}][{}] must be a positive package number, got {}",
                    index, pos, v
                ))
            })
        })
        .collect()
}

/// Accept positive integers, including integral floats like `3.0`.
fn package_number(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f >= 1.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_sequences() {
        let input = RawInput::from_json("[[10, 12, 9], [1, 3], [2]]").unwrap();
        assert_eq!(input.elapsed, vec![10.0, 12.0, 9.0]);
        assert_eq!(input.failures, vec![1, 3]);
        assert_eq!(input.gateway_missed, Some(vec![2]));
    }

    #[test]
    fn test_parse_fractional_elapsed() {
        let input = RawInput::from_json("[[10.5, 0.25], []]").unwrap();
        assert_eq!(input.elapsed, vec![10.5, 0.25]);
        assert!(input.failures.is_empty());
    }

    #[test]
    fn test_integral_float_package_numbers() {
        let input = RawInput::from_json("[[1], [2.0, 4]]").unwrap();
        assert_eq!(input.failures, vec![2, 4]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = RawInput::from_json("not json").unwrap_err();
        assert!(matches!(err, TraceError::Parse(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_wrong_arity_is_shape_error() {
        let err = RawInput::from_json("[[1, 2]]").unwrap_err();
        assert!(matches!(err, TraceError::Shape(_)));
        assert!(err.to_string().contains("got 1"));

        let err = RawInput::from_json("[[1], [], [], []]").unwrap_err();
        assert!(matches!(err, TraceError::Shape(_)));
    }

    #[test]
    fn test_top_level_object_is_shape_error() {
        let err = RawInput::from_json(r#"{"elapsed": [1]}"#).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_non_numeric_elapsed_is_shape_error() {
        let err = RawInput::from_json(r#"[[1, "x"], []]"#).unwrap_err();
        assert!(matches!(err, TraceError::Shape(_)));
        assert!(err.to_string().contains("[0][1]"));
    }

    #[test]
    fn test_non_positive_package_number_is_shape_error() {
        for line in ["[[1], [0]]", "[[1], [-2]]", "[[1], [1.5]]", "[[1], [], [true]]"] {
            let err = RawInput::from_json(line).unwrap_err();
            assert!(matches!(err, TraceError::Shape(_)), "{line}");
        }
    }

    #[test]
    fn test_sequence_not_array_is_shape_error() {
        let err = RawInput::from_json("[[1], 5]").unwrap_err();
        assert!(err.to_string().contains("sequence 1 must be an array"));
    }
}
