//! Inbound trading signal

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Signal as posted by the upstream automation, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub ticker: Option<ScalarInput>,
    pub side: Option<ScalarInput>,
    pub stop_loss: Option<ScalarInput>,
    pub target: Option<ScalarInput>,
}

/// Loosely typed signal field: upstream automations send prices and even
/// tickers either as JSON numbers or as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarInput {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
}

impl ScalarInput {
    /// `0`, `""` and `false` count as "not set".
    pub fn is_set(&self) -> bool {
        match self {
            ScalarInput::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(true),
            ScalarInput::Text(s) => !s.is_empty(),
            ScalarInput::Flag(b) => *b,
        }
    }

    /// String form following JavaScript `String(value)`: integral floats
    /// drop their fractional part (`100.0` -> `"100"`), and magnitudes of
    /// `1e21` and above or below `1e-6` switch to exponent notation
    /// (`2e-7`, `1e+21`).
    pub fn to_js_string(&self) -> String {
        match self {
            ScalarInput::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            ScalarInput::Number(n) => match n.as_f64() {
                Some(v) => js_number_string(v),
                None => n.to_string(),
            },
            ScalarInput::Text(s) => s.clone(),
            ScalarInput::Flag(b) => b.to_string(),
        }
    }
}

fn js_number_string(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return v.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "2e-7" or "1.5e300"
    let scientific = format!("{:e}", v);
    let parsed = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));

    match parsed {
        Some((mantissa, exp)) if !(-7 < exp && exp < 21) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{}", exp.abs())
        }
        _ => v.to_string(),
    }
}

/// Order direction requested by the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Case-insensitive. Only `buy` maps to `Buy`; every other value,
    /// including unrecognized ones, is treated as `Sell`.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("buy") {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    pub fn position_side(self) -> PositionSide {
        match self {
            Side::Buy => PositionSide::Long,
            Side::Sell => PositionSide::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(self) -> &'static str {
        match self {
            PositionSide::Long => "long",
            PositionSide::Short => "short",
        }
    }
}

/// Signal with its required fields checked
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSignal {
    pub ticker: String,
    /// Lower-cased side exactly as it will be sent to the exchange
    pub side: String,
    pub stop_loss: Option<String>,
    pub target: Option<String>,
}

impl ValidSignal {
    pub fn direction(&self) -> Side {
        Side::parse(&self.side)
    }
}

impl Signal {
    pub fn validate(&self) -> Result<ValidSignal, RelayError> {
        let ticker = present(&self.ticker).ok_or(RelayError::MissingSignalFields)?;
        let side = present(&self.side).ok_or(RelayError::MissingSignalFields)?;

        // Tickers are concatenated as-is; side must be text to be lower-cased.
        let side = match side {
            ScalarInput::Text(s) => s.to_lowercase(),
            other => {
                return Err(RelayError::Internal(format!(
                    "signal.side must be a string, got {}",
                    other.to_js_string()
                )))
            }
        };

        Ok(ValidSignal {
            ticker: ticker.to_js_string(),
            side,
            stop_loss: present(&self.stop_loss).map(ScalarInput::to_js_string),
            target: present(&self.target).map(ScalarInput::to_js_string),
        })
    }
}

fn present(value: &Option<ScalarInput>) -> Option<&ScalarInput> {
    value.as_ref().filter(|v| v.is_set())
}
