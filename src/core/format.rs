use crate::domain::model::{Amount, CurrencyValue};
use regex::Regex;
use std::sync::LazyLock;

pub const CURRENCY_LABEL: &str = "Rs.";

/// `toLocaleString` 預設最多保留三位小數
const MAX_FRACTION_DIGITS: usize = 3;
const FRACTION_SCALE: f64 = 1000.0;
/// 放大後超過 2^53 的值已經沒有可保留的小數位
const MAX_EXACT_SCALED: f64 = 9_007_199_254_740_992.0;

static CURRENCY_LABELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:rs\.?|pkr)\s*").unwrap());
static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.\-]").unwrap());
static FLOAT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

/// 格式化為盧比顯示字串，例如 `Rs. 1,234,567`
pub fn format_pkr(amount: impl Into<Amount>) -> String {
    format!("{} {}", CURRENCY_LABEL, format_number(amount))
}

pub fn format_currency(amount: impl Into<Amount>) -> String {
    format_pkr(amount)
}

/// 千分位格式化，不加幣別
///
/// 小數最多三位，剛好落在中間時遠離零進位，尾端的 0 會被去掉：
/// `1234.5` -> `1,234.5`，`0.12345` -> `0.123`，`0.0625` -> `0.063`。
pub fn format_number(number: impl Into<Amount>) -> String {
    let value = number.into().value();
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, round_half_away(value.abs()));

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut result = group_thousands(int_part);
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }

    if value < 0.0 && result != "0" {
        result.insert(0, '-');
    }
    result
}

/// `f64::round` 遠離零進位；`{:.3}` 對剛好一半的值會取偶數，不能直接用
fn round_half_away(abs: f64) -> f64 {
    let scaled = abs * FRACTION_SCALE;
    if scaled < MAX_EXACT_SCALED {
        scaled.round() / FRACTION_SCALE
    } else {
        abs
    }
}

/// 由右往左每三位插入一個逗號
pub fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// 將顯示字串還原為數字
///
/// 數字原樣返回。字串先去掉所有幣別字樣（`Rs.`、`Rs`、`PKR`），
/// 再移除數字、小數點、負號以外的所有字元，最後取最長的合法浮點數前綴。
/// 解析不出數字時返回 0。
pub fn parse_currency(value: impl Into<CurrencyValue>) -> f64 {
    match value.into() {
        CurrencyValue::Number(n) => n,
        CurrencyValue::Text(text) => parse_currency_text(&text),
    }
}

fn parse_currency_text(text: &str) -> f64 {
    let without_label = CURRENCY_LABELS.replace_all(text, "");
    let cleaned = NON_NUMERIC.replace_all(&without_label, "");

    FLOAT_PREFIX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
