//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_ENV: &str = "GAEJEONG_CONFIG";

/// 개정문 생성기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GaejeongConfig {
    /// 같은 개정문을 한 번만 출력할지 여부
    #[serde(default = "default_dedup_sentences")]
    pub dedup_sentences: bool,
    /// env_logger 기본 필터 (RUST_LOG가 있으면 그쪽이 우선)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_dedup_sentences() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GaejeongConfig {
    fn default() -> Self {
        Self {
            dedup_sentences: default_dedup_sentences(),
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 파일 읽기/쓰기 오류
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Json(e) => write!(f, "설정 JSON 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

fn absolute_dir(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
}

/// 설정 파일 경로
///
/// 우선순위: $GAEJEONG_CONFIG > $XDG_CONFIG_HOME/gaejeong/config.json
/// > ~/.config/gaejeong/config.json > /var/tmp/gaejeong/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("gaejeong").join("config.json")
}

/// 지정한 파일에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<GaejeongConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 기본 경로에서 설정 로드
///
/// 파일이 없으면 기본값, 읽기/파싱 실패는 오류로 돌려준다.
pub fn try_load_config() -> Result<GaejeongConfig, ConfigError> {
    match load_config_from(&config_path()) {
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(GaejeongConfig::default())
        }
        result => result,
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
///
/// 실패 경고는 `log`로 남기므로 로거 초기화 이후에 호출해야 보인다.
pub fn load_config() -> GaejeongConfig {
    try_load_config().unwrap_or_else(|e| {
        log::warn!("설정 파일 로드 실패, 기본값 사용 ({}): {}", config_path().display(), e);
        GaejeongConfig::default()
    })
}

/// 지정한 파일에 설정 저장 (상위 디렉토리 자동 생성)
pub fn save_config_to(path: &Path, config: &GaejeongConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
