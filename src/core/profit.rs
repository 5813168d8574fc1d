use crate::domain::model::ProfitPercentage;

/// `(sell - buy) * quantity`，數量未指定時為 1。負值代表虧損。
pub fn calculate_profit(buy_price: f64, sell_price: f64, quantity: Option<f64>) -> f64 {
    (sell_price - buy_price) * quantity.unwrap_or(1.0)
}

/// 利潤率（百分比，兩位小數）
///
/// 買入價為 0 時返回 [`ProfitPercentage::ZERO`]，避免除以零。
/// 買入價不為 0 但比值溢位時返回無限大。
pub fn calculate_profit_percentage(buy_price: f64, sell_price: f64) -> ProfitPercentage {
    if buy_price == 0.0 {
        return ProfitPercentage::ZERO;
    }
    ProfitPercentage::from_raw((sell_price - buy_price) / buy_price * 100.0)
}
