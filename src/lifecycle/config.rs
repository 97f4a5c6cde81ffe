//! Runtime configuration for the store system.

use super::SystemError;
use argon2::Params;
use std::str::FromStr;

/// Settings read once at startup. Unset variables keep their [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Pre-populate the stores with the sample users, products, and orders.
    pub seed_sample_data: bool,
    /// Argon2 memory cost in KiB.
    pub hash_memory_kib: u32,
    /// Argon2 time cost (passes over memory).
    pub hash_iterations: u32,
    /// Argon2 lanes.
    pub hash_parallelism: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            hash_memory_kib: Params::DEFAULT_M_COST,
            hash_iterations: Params::DEFAULT_T_COST,
            hash_parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the environment on top of [`SystemConfig::default`].
    ///
    /// | Variable                | Field              |
    /// |-------------------------|--------------------|
    /// | `SHOP_SEED_SAMPLE_DATA` | `seed_sample_data` |
    /// | `SHOP_HASH_MEMORY_KIB`  | `hash_memory_kib`  |
    /// | `SHOP_HASH_ITERATIONS`  | `hash_iterations`  |
    /// | `SHOP_HASH_PARALLELISM` | `hash_parallelism` |
    pub fn from_env() -> Result<Self, SystemError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SystemConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let mut config = Self::default();
        override_with(&lookup, "SHOP_SEED_SAMPLE_DATA", &mut config.seed_sample_data)?;
        override_with(&lookup, "SHOP_HASH_MEMORY_KIB", &mut config.hash_memory_kib)?;
        override_with(&lookup, "SHOP_HASH_ITERATIONS", &mut config.hash_iterations)?;
        override_with(&lookup, "SHOP_HASH_PARALLELISM", &mut config.hash_parallelism)?;
        Ok(config)
    }

    /// Minimum Argon2 cost, no seed data. Only for tests and demos.
    pub fn fast_hashing() -> Self {
        Self {
            seed_sample_data: false,
            hash_memory_kib: Params::MIN_M_COST,
            hash_iterations: Params::MIN_T_COST,
            hash_parallelism: Params::MIN_P_COST,
        }
    }

    pub fn with_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Validated Argon2 parameters.
    pub fn hash_params(&self) -> Result<Params, SystemError> {
        Params::new(
            self.hash_memory_kib,
            self.hash_iterations,
            self.hash_parallelism,
            None,
        )
        .map_err(|e| SystemError::InvalidHashParams(e.to_string()))
    }
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    target: &mut T,
) -> Result<(), SystemError> {
    if let Some(value) = lookup(key) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| SystemError::InvalidConfigValue { key, value })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_without_variables() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("SHOP_SEED_SAMPLE_DATA", "false"),
            ("SHOP_HASH_ITERATIONS", " 3 "),
        ]))
        .unwrap();

        assert!(!config.seed_sample_data);
        assert_eq!(config.hash_iterations, 3);
        assert_eq!(config.hash_memory_kib, Params::DEFAULT_M_COST);
    }

    #[test]
    fn test_unparsable_variable_is_an_error() {
        let result = SystemConfig::from_lookup(lookup(&[("SHOP_HASH_MEMORY_KIB", "lots")]));
        assert_eq!(
            result,
            Err(SystemError::InvalidConfigValue {
                key: "SHOP_HASH_MEMORY_KIB",
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_out_of_range_hash_params_are_rejected() {
        let config = SystemConfig {
            hash_memory_kib: 1,
            ..SystemConfig::fast_hashing()
        };
        assert!(matches!(config.hash_params(), Err(SystemError::InvalidHashParams(_))));
    }

    #[test]
    fn test_fast_hashing_params_are_valid() {
        assert!(SystemConfig::fast_hashing().hash_params().is_ok());
    }
}
