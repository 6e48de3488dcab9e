//! Widget Configuration
//!
//! Defaults match the stock page; the mount element may override them
//! with `data-*` attributes.

pub const DEFAULT_MOUNT_ID: &str = "root";
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Id of the container element the widget renders into
    pub mount_id: String,
    /// localStorage key holding the task JSON
    pub storage_key: String,
    /// Placeholder of the global input
    pub placeholder: String,
    /// Label of the clear-completed button
    pub clear_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder: "Add to your list...".to_string(),
            clear_label: "Clear all completed".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Apply `data-storage-key`, `data-placeholder` and `data-clear-label`.
    ///
    /// `lookup` returns the attribute value; blank values are ignored.
    pub fn with_attributes(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        if let Some(key) = value("data-storage-key") {
            self.storage_key = key;
        }
        if let Some(placeholder) = value("data-placeholder") {
            self.placeholder = placeholder;
        }
        if let Some(label) = value("data-clear-label") {
            self.clear_label = label;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.storage_key, "tasks");
    }

    #[test]
    fn test_attribute_overrides() {
        let config = WidgetConfig::default().with_attributes(|name| match name {
            "data-storage-key" => Some("work-tasks".to_string()),
            "data-placeholder" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.storage_key, "work-tasks");
        assert_eq!(config.placeholder, "Add to your list...");
        assert_eq!(config.clear_label, "Clear all completed");
    }
}
