use std::fmt;

/// 金額。缺值、非數字、NaN 與無限大一律視為 0。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

macro_rules! amount_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount::new(value as f64)
                }
            }
        )*
    };
}

amount_from_primitive!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Amount::ZERO)
    }
}

impl From<&serde_json::Value> for Amount {
    fn from(value: &serde_json::Value) -> Self {
        value.as_f64().map(Amount::new).unwrap_or(Amount::ZERO)
    }
}

impl From<serde_json::Value> for Amount {
    fn from(value: serde_json::Value) -> Self {
        Amount::from(&value)
    }
}

/// `parse_currency` 的輸入：數字原樣返回，字串需要解析
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyValue {
    Number(f64),
    Text(String),
}

impl From<f64> for CurrencyValue {
    fn from(value: f64) -> Self {
        CurrencyValue::Number(value)
    }
}

impl From<i64> for CurrencyValue {
    fn from(value: i64) -> Self {
        CurrencyValue::Number(value as f64)
    }
}

impl From<i32> for CurrencyValue {
    fn from(value: i32) -> Self {
        CurrencyValue::Number(value as f64)
    }
}

impl From<&str> for CurrencyValue {
    fn from(value: &str) -> Self {
        CurrencyValue::Text(value.to_string())
    }
}

impl From<String> for CurrencyValue {
    fn from(value: String) -> Self {
        CurrencyValue::Text(value)
    }
}

impl From<&String> for CurrencyValue {
    fn from(value: &String) -> Self {
        CurrencyValue::Text(value.clone())
    }
}

/// 利潤率（百分比），保留兩位小數
///
/// 買入價極小導致比值溢位時保留正負無限大，顯示為 `Infinity` / `-Infinity`。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProfitPercentage(f64);

impl ProfitPercentage {
    pub const ZERO: ProfitPercentage = ProfitPercentage(0.0);

    pub fn from_raw(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        if percent.is_infinite() {
            return Self(percent);
        }
        let scaled = percent * 100.0;
        if !scaled.is_finite() {
            return Self(percent);
        }
        let rounded = scaled.round() / 100.0;
        // 避免顯示 "-0.00"
        if rounded == 0.0 {
            Self::ZERO
        } else {
            Self(rounded)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProfitPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            return write!(f, "{}Infinity", sign);
        }
        write!(f, "{:.2}", self.0)
    }
}

/// 單次探測的結果
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 回應是 JSON 且找到目標欄位
    Field(serde_json::Value),
    /// 回應是 JSON，但目標欄位不存在
    MissingField,
    /// 回應不是 JSON
    RawBody(String),
    /// 請求本身失敗（連線被拒等）
    RequestFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_coerces_missing_and_non_finite_to_zero() {
        assert_eq!(Amount::from(None::<f64>), Amount::ZERO);
        assert_eq!(Amount::from(f64::NAN), Amount::ZERO);
        assert_eq!(Amount::from(f64::INFINITY), Amount::ZERO);
        assert_eq!(Amount::from(Some(12_i32)).value(), 12.0);
    }

    #[test]
    fn test_amount_from_json() {
        assert_eq!(Amount::from(&json!(1500)).value(), 1500.0);
        assert_eq!(Amount::from(&json!(2.5)).value(), 2.5);
        assert_eq!(Amount::from(&json!(null)), Amount::ZERO);
        assert_eq!(Amount::from(&json!("1500")), Amount::ZERO);
        assert_eq!(Amount::from(json!({"cash": 1})), Amount::ZERO);
    }

    #[test]
    fn test_profit_percentage_rounding_and_display() {
        let pct = ProfitPercentage::from_raw(33.333_333);
        assert_eq!(pct.value(), 33.33);
        assert_eq!(pct.to_string(), "33.33");
        assert_eq!(ProfitPercentage::from_raw(-0.001).to_string(), "0.00");
        assert_eq!(ProfitPercentage::from_raw(f64::NAN), ProfitPercentage::ZERO);
    }

    #[test]
    fn test_profit_percentage_keeps_overflow() {
        let pct = ProfitPercentage::from_raw(f64::INFINITY);
        assert!(pct.value().is_infinite());
        assert_eq!(pct.to_string(), "Infinity");
        assert_eq!(ProfitPercentage::from_raw(f64::NEG_INFINITY).to_string(), "-Infinity");
    }
}
