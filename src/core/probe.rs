use crate::core::format::format_pkr;
use crate::domain::model::ProbeOutcome;
use crate::domain::ports::ProbeSettings;
use crate::utils::error::Result;
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/dashboard/sales-report";
pub const DEFAULT_FIELD_PATH: &str = "report.paymentSummary";

/// 對銷售報表 API 發出單一 GET 請求並取出指定欄位
pub struct SalesReportProbe<S: ProbeSettings> {
    settings: S,
    client: Client,
}

impl<S: ProbeSettings> SalesReportProbe<S> {
    pub fn new(settings: S) -> Result<Self> {
        let mut builder = Client::builder();
        // 未設定時不限制等待時間
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// 執行探測。所有失敗都會轉成 [`ProbeOutcome`]，不會返回錯誤。
    pub async fn run(&self) -> ProbeOutcome {
        let endpoint = self.settings.endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let body = match self.fetch_body(endpoint).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("❌ Request to {} failed: {}", endpoint, e);
                return ProbeOutcome::RequestFailed(e.to_string());
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => {
                let path = self.settings.field_path();
                match extract_field(&json, path) {
                    Some(field) => ProbeOutcome::Field(field.clone()),
                    None => {
                        tracing::warn!("Field '{}' not present in response", path);
                        ProbeOutcome::MissingField
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Response is not valid JSON ({}), printing raw body", e);
                ProbeOutcome::RawBody(body)
            }
        }
    }

    async fn fetch_body(&self, endpoint: &str) -> reqwest::Result<String> {
        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            tracing::warn!("API responded with non-success status {}", status);
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

/// 以 `.` 分隔的路徑取出巢狀欄位，數字片段可索引陣列
pub fn extract_field<'a>(json: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(json, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// 把所有數字葉節點換成 `Rs.` 顯示字串
pub fn pkr_view(value: &Value) -> Value {
    match value {
        Value::Number(_) => Value::String(format_pkr(value)),
        Value::Array(items) => Value::Array(items.iter().map(pkr_view).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), pkr_view(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

impl ProbeOutcome {
    /// 輸出到 stdout 的內容
    pub fn render(&self, pkr: bool) -> String {
        match self {
            ProbeOutcome::Field(value) => {
                let shown = if pkr { pkr_view(value) } else { value.clone() };
                serde_json::to_string_pretty(&shown).unwrap_or_else(|_| shown.to_string())
            }
            ProbeOutcome::MissingField => "null".to_string(),
            ProbeOutcome::RawBody(body) => body.clone(),
            ProbeOutcome::RequestFailed(message) => format!("Error: {}", message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Field(_))
    }
}
