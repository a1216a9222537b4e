//! Integer status codes shared by the entity enums.
//!
//! Every entity keeps its lifecycle state as a small closed set of integer
//! codes. Transitions are unguarded: any member of the set may follow any
//! other.

use serde_json::Value;

pub trait EntityStatus: Sized + Copy + 'static {
    /// Every member of the set, in code order
    const ALL: &'static [Self];

    fn code(self) -> i16;

    fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| i64::from(s.code()) == code)
    }

    /// Strict conversion from a JSON body value: only numbers are accepted,
    /// a string such as `"1"` is not coerced.
    fn from_json(value: &Value) -> Option<Self> {
        let code = value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })?;
        Self::from_code(code)
    }

    /// Lenient conversion used by query-string filters: the raw text is
    /// trimmed and parsed as a number.
    fn from_query(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(code) = raw.parse::<i64>() {
            return Self::from_code(code);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .and_then(|f| Self::from_code(f as i64))
    }
}
