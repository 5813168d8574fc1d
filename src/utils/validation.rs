use crate::utils::error::{Result, ToolError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ToolError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 欄位路徑以 `.` 分隔，例如 `report.paymentSummary`
pub fn validate_field_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Field path cannot be empty".to_string(),
        });
    }

    if path.split('.').any(|segment| segment.is_empty()) {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Field path contains an empty segment".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
