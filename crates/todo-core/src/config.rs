//! Todo Configuration

/// Settings shared by the list container and the storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Local storage key holding the serialized list
    pub storage_key: String,
    /// Maximum level forwarded to the browser console
    pub log_level: log::LevelFilter,
}

impl TodoConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "todos";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_with_storage_key() {
        let config = TodoConfig::default().with_storage_key("todos-work");
        assert_eq!(config.storage_key, "todos-work");
    }
}
