//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `MEMORY_MATCH_LEVEL` | initial level (`easy`, `normal`, `hard` or `1`-`3`) | `easy` |
//! | `MEMORY_MATCH_SEED` | `u32` seed for a reproducible deck | wall clock |
//! | `MEMORY_MATCH_LOG_PATH` | file to write logs to | logging off |
//! | `MEMORY_MATCH_LOG` | log filter directives (falls back to `RUST_LOG`) | `memory_match=info,memory_match_engine=info` |

use std::path::PathBuf;

use crate::core::level::level_for_index;
use crate::types::Level;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub level: Level,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_filter: Option<String>,
    /// Problems found while reading the environment; logged once logging is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = non_empty("MEMORY_MATCH_LEVEL") {
            let level = Level::from_str(&raw).or_else(|| {
                raw.parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(level_for_index)
            });
            match level {
                Some(level) => config.level = level,
                None => config.warnings.push(format!(
                    "MEMORY_MATCH_LEVEL={raw:?} is not one of easy, normal, hard (or 1-3); using easy"
                )),
            }
        }

        if let Some(raw) = non_empty("MEMORY_MATCH_SEED") {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.warnings.push(format!(
                    "MEMORY_MATCH_SEED={raw:?} is not a u32; using a random seed"
                )),
            }
        }

        config.log_path = non_empty("MEMORY_MATCH_LOG_PATH").map(PathBuf::from);
        config.log_filter = non_empty("MEMORY_MATCH_LOG").or_else(|| non_empty("RUST_LOG"));
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c, AppConfig::default());
        assert_eq!(c.level, Level::Easy);
        assert!(c.seed.is_none());
        assert!(c.log_path.is_none());
    }

    #[test]
    fn test_numeric_level() {
        assert_eq!(config(&[("MEMORY_MATCH_LEVEL", "2")]).level, Level::Normal);
        let c = config(&[("MEMORY_MATCH_LEVEL", "0")]);
        assert_eq!(c.level, Level::Easy);
        assert_eq!(c.warnings.len(), 1);
    }

    #[test]
    fn test_reads_values() {
        let c = config(&[
            ("MEMORY_MATCH_LEVEL", "Hard"),
            ("MEMORY_MATCH_SEED", " 42 "),
            ("MEMORY_MATCH_LOG_PATH", "/tmp/mm.log"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(c.level, Level::Hard);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/mm.log")));
        assert_eq!(c.log_filter.as_deref(), Some("debug"));
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn test_own_filter_wins_over_rust_log() {
        let c = config(&[("MEMORY_MATCH_LOG", "trace"), ("RUST_LOG", "warn")]);
        assert_eq!(c.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn test_bad_values_fall_back_with_warnings() {
        let c = config(&[
            ("MEMORY_MATCH_LEVEL", "nightmare"),
            ("MEMORY_MATCH_SEED", "-1"),
            ("MEMORY_MATCH_LOG_PATH", "  "),
        ]);
        assert_eq!(c.level, Level::Easy);
        assert!(c.seed.is_none());
        assert!(c.log_path.is_none());
        assert_eq!(c.warnings.len(), 2);
    }
}
