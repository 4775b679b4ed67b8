//! Auto-save policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// When a dirty project should be written back to its current file.
///
/// Missing fields fall back to [`AutoSavePolicy::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSavePolicy {
    /// Whether auto-save is enabled.
    pub enabled: bool,

    /// Quiet period in milliseconds.
    ///
    /// After a change, wait this long before saving. Further changes restart
    /// the wait.
    pub debounce_ms: u64,

    /// Upper bound in milliseconds since the first unsaved change.
    ///
    /// If changes keep coming, save anyway once this much time has passed.
    pub max_delay_ms: u64,
}

impl Default for AutoSavePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 2000,
            max_delay_ms: 30_000,
        }
    }
}

impl AutoSavePolicy {
    /// A policy that never saves.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Parse a policy from JSON, e.g. a settings file section.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Decide from the quiet time since the last change and the age of the
    /// oldest unsaved change.
    pub fn is_due(&self, since_last_change: Duration, since_first_unsaved: Duration) -> bool {
        self.enabled
            && (since_last_change >= self.debounce() || since_first_unsaved >= self.max_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_default_policy() {
        let policy = AutoSavePolicy::default();
        assert!(policy.enabled);
        assert_eq!(policy.debounce(), ms(2000));
        assert_eq!(policy.max_delay(), ms(30_000));
    }

    #[test]
    fn test_disabled_never_due() {
        let policy = AutoSavePolicy::disabled();
        assert!(!policy.is_due(ms(10_000), ms(60_000)));
    }

    #[test]
    fn test_debounce() {
        let policy = AutoSavePolicy::default();
        assert!(!policy.is_due(ms(1000), ms(1000)));
        assert!(policy.is_due(ms(2500), ms(2500)));
    }

    #[test]
    fn test_max_delay_forces_save() {
        let policy = AutoSavePolicy::default();
        assert!(!policy.is_due(ms(500), ms(25_000)));
        assert!(policy.is_due(ms(500), ms(35_000)));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let policy = AutoSavePolicy::from_json(r#"{"debounce_ms": 500}"#).unwrap();
        assert!(policy.enabled);
        assert_eq!(policy.debounce_ms, 500);
        assert_eq!(policy.max_delay_ms, 30_000);

        assert!(AutoSavePolicy::from_json("{\"enabled\": \"yes\"}").is_err());
    }
}
