use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::ApiError(_) => "HTTP 請求失敗".to_string(),
            ToolError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            ToolError::TomlError(_) => "設定檔格式錯誤".to_string(),
            ToolError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} 設定無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::ApiError(_) => "Check that the API server is running and reachable",
            ToolError::IoError(_) => "Check the file path and its permissions",
            ToolError::TomlError(_) => "Fix the syntax of the configuration file",
            ToolError::InvalidConfigValueError { .. } => {
                "Review the command line flags and configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
