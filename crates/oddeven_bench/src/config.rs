//! # Benchmark Configuration
//!
//! Layered, later wins:
//!
//! 1. Built-in defaults (the reference run: 50k/100k/500k, 1/2/4 threads)
//! 2. TOML file (`--config`)
//! 3. Environment (`ODDEVEN_*`)
//! 4. Command-line flags
//!
//! ```toml
//! sizes = [50000, 100000]
//! threads = [1, 2, 4, 8]
//! seed = 42
//! repetitions = 3
//! output = "results.csv"
//!
//! [schedule]
//! kind = "guided"
//! min_chunk = 16
//! ```

use std::path::{Path, PathBuf};

use oddeven_core::Schedule;
use serde::Deserialize;

use crate::error::{BenchError, BenchResult};

/// Comma-separated list sizes.
pub const ENV_SIZES: &str = "ODDEVEN_SIZES";
/// Comma-separated thread counts.
pub const ENV_THREADS: &str = "ODDEVEN_THREADS";
/// Generator seed.
pub const ENV_SEED: &str = "ODDEVEN_SEED";
/// Timed runs per measurement.
pub const ENV_REPS: &str = "ODDEVEN_REPS";
/// Result CSV path.
pub const ENV_OUTPUT: &str = "ODDEVEN_OUTPUT";

/// Configuration for one benchmark run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// List sizes, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Worker counts, benchmarked in order for every size.
    pub threads: Vec<usize>,
    /// Generator seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Timed runs per measurement; the median is reported.
    pub repetitions: u32,
    /// Result CSV path (appended to).
    pub output: PathBuf,
    /// Pair partitioning inside a phase.
    pub schedule: Schedule,
    /// Check every sorted buffer for order.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50_000, 100_000, 500_000],
            threads: vec![1, 2, 4],
            seed: None,
            repetitions: 1,
            output: PathBuf::from("results.csv"),
            schedule: Schedule::default(),
            verify: true,
        }
    }
}

impl BenchConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::ConfigParse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> BenchResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Io`] if the file can't be read and
    /// [`BenchError::ConfigParse`] if it isn't a valid config.
    pub fn load(path: impl AsRef<Path>) -> BenchResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Applies `ODDEVEN_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if a variable is set but unparsable.
    pub fn apply_env(&mut self) -> BenchResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup (environment-shaped).
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if a value is unparsable.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> BenchResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SIZES) {
            self.sizes = parse_list(&value)?;
        }
        if let Some(value) = lookup(ENV_THREADS) {
            self.threads = parse_list(&value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = Some(parse_number(ENV_SEED, &value)?);
        }
        if let Some(value) = lookup(ENV_REPS) {
            self.repetitions = parse_number(ENV_REPS, &value)?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.output = PathBuf::from(value);
        }
        Ok(())
    }

    /// Checks the config before any work starts.
    ///
    /// Thread counts of zero are rejected here; the sorter treats them as a
    /// contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] describing the first problem.
    pub fn validate(&self) -> BenchResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no list sizes given".into()));
        }
        if self.threads.is_empty() {
            return Err(BenchError::InvalidConfig("no thread counts given".into()));
        }
        if self.threads.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "thread counts must be at least 1".into(),
            ));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parses `"1, 2,4"` into `[1, 2, 4]`.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] on an empty list or a bad entry.
pub fn parse_list(text: &str) -> BenchResult<Vec<usize>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.replace('_', "")
                .parse::<usize>()
                .map_err(|_| BenchError::InvalidConfig(format!("not a number: {part:?}")))
        })
        .collect::<BenchResult<Vec<_>>>()?;

    if values.is_empty() {
        return Err(BenchError::InvalidConfig(format!("empty list: {text:?}")));
    }
    Ok(values)
}

fn parse_number<T: std::str::FromStr>(key: &str, text: &str) -> BenchResult<T> {
    text.trim()
        .parse()
        .map_err(|_| BenchError::InvalidConfig(format!("{key}: not a number: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, [50_000, 100_000, 500_000]);
        assert_eq!(config.threads, [1, 2, 4]);
        assert_eq!(config.repetitions, 1);
        assert!(config.verify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BenchConfig::from_toml_str(
            "sizes = [10, 20]\nseed = 7\n\n[schedule]\nkind = \"static\"\n",
        )
        .unwrap();
        assert_eq!(config.sizes, [10, 20]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.schedule, Schedule::Static);
        assert_eq!(config.threads, [1, 2, 4]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            BenchConfig::from_toml_str("thread = [1]\n"),
            Err(BenchError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_SIZES, "100, 200"),
            (ENV_THREADS, "2,8"),
            (ENV_SEED, "123"),
            (ENV_REPS, "5"),
            (ENV_OUTPUT, "out/run.csv"),
        ]
        .into_iter()
        .collect();

        let mut config = BenchConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.sizes, [100, 200]);
        assert_eq!(config.threads, [2, 8]);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.repetitions, 5);
        assert_eq!(config.output, PathBuf::from("out/run.csv"));
    }

    #[test]
    fn test_bad_override_rejected() {
        let mut config = BenchConfig::default();
        let result = config.apply_overrides(|key| (key == ENV_REPS).then(|| "many".to_string()));
        assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = BenchConfig {
            threads: vec![1, 0],
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));

        let config = BenchConfig {
            repetitions: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            sizes: Vec::new(),
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("1,2,4").unwrap(), [1, 2, 4]);
        assert_eq!(parse_list(" 50_000 , 100000 ,").unwrap(), [50_000, 100_000]);
        assert!(parse_list("").is_err());
        assert!(parse_list("1,two").is_err());
    }
}
