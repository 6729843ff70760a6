//! Station Context - Value Objects

use serde::{Deserialize, Serialize};

use super::StationError;

/// 车站名称最大长度（字符数）
const MAX_NAME_CHARS: usize = 100;

/// 车站唯一标识（由数据库自增生成）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(i64);

impl StationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 车站名称
///
/// 不变量:
/// - 去除首尾空白后非空
/// - 不超过 100 个字符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationName(String);

impl StationName {
    pub fn new(name: impl Into<String>) -> Result<Self, StationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(StationError::InvalidName("车站名称不能为空".to_string()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(StationError::InvalidName(format!(
                "车站名称长度不能超过{}字符",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_name_trims_whitespace() {
        let name = StationName::new("  강남역 ").unwrap();
        assert_eq!(name.as_str(), "강남역");
    }

    #[test]
    fn test_station_name_rejects_blank() {
        assert!(StationName::new("").is_err());
        assert!(StationName::new("   ").is_err());
    }

    #[test]
    fn test_station_name_length_counts_chars() {
        // 100 个韩文字符超过 100 字节，但按字符计算仍然合法
        let name = "역".repeat(MAX_NAME_CHARS);
        assert!(StationName::new(name).is_ok());

        let too_long = "역".repeat(MAX_NAME_CHARS + 1);
        assert!(StationName::new(too_long).is_err());
    }
}
