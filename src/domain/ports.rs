use std::time::Duration;

/// 探測器需要的設定來源（CLI、TOML 檔或測試用設定）
pub trait ProbeSettings: Send + Sync {
    fn endpoint(&self) -> &str;
    fn field_path(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn render_pkr(&self) -> bool;
}
