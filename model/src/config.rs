//! Predictor configuration.
//!
//! Built explicitly with the bon builder or read from `TENMO_*` environment
//! variables. Unset variables take their defaults; a variable that is set but
//! does not parse is an error.

use std::str::FromStr;

use bon::bon;
use snafu::OptionExt;

use crate::arch::ModelSelector;
use crate::error::{InvalidEnvValueSnafu, Result, UnknownModelSnafu};

pub const ENV_MODEL: &str = "TENMO_MODEL";
pub const ENV_PEAK_GFLOPS: &str = "TENMO_PEAK_GFLOPS";
pub const ENV_VECTOR_SIZE: &str = "TENMO_VECTOR_SIZE";
pub const ENV_STRICT_TAGS: &str = "TENMO_STRICT_TAGS";

/// Which model to query and how descriptors are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictorConfig {
    pub model: ModelSelector,
    /// Peak throughput of the target; only used by the generic model.
    pub peak_gflops: f64,
    /// Vector width in elements; only used by the generic model.
    pub vector_size: i64,
    /// Reject descriptors whose primitive tags disagree with their positions.
    pub strict_tags: bool,
}

#[bon]
impl PredictorConfig {
    #[builder(finish_fn = build)]
    pub fn builder(
        #[builder(default)] model: ModelSelector,
        #[builder(default = 0.0)] peak_gflops: f64,
        #[builder(default = 0)] vector_size: i64,
        #[builder(default = false)] strict_tags: bool,
    ) -> Self {
        Self { model, peak_gflops, vector_size, strict_tags }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `TENMO_MODEL` - `zen5`, `m4`, `a76` or `generic` (default: generic)
    /// * `TENMO_PEAK_GFLOPS` - Peak GFLOPS for the generic model (default: 0)
    /// * `TENMO_VECTOR_SIZE` - Vector width for the generic model (default: 0)
    /// * `TENMO_STRICT_TAGS` - Enable strict tag validation if set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = match lookup(ENV_MODEL) {
            Some(name) => ModelSelector::from_str(name.trim()).ok().context(UnknownModelSnafu { name })?,
            None => ModelSelector::default(),
        };
        let peak_gflops = parse_var(&lookup, ENV_PEAK_GFLOPS)?.unwrap_or(0.0);
        let vector_size = parse_var(&lookup, ENV_VECTOR_SIZE)?.unwrap_or(0);
        let strict_tags = lookup(ENV_STRICT_TAGS).is_some();

        let config = Self { model, peak_gflops, vector_size, strict_tags };
        tracing::debug!(?config, "predictor config from environment");
        Ok(config)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<T>> {
    let Some(value) = lookup(var) else { return Ok(None) };
    value.trim().parse().ok().map(Some).context(InvalidEnvValueSnafu { var, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_builder_defaults() {
        let config = PredictorConfig::builder().build();
        assert_eq!(config, PredictorConfig::default());
        assert!(config.model.is_generic());
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        assert_eq!(PredictorConfig::from_lookup(env(&[])).unwrap(), PredictorConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = PredictorConfig::from_lookup(env(&[
            (ENV_MODEL, "Generic"),
            (ENV_PEAK_GFLOPS, "1000.5"),
            (ENV_VECTOR_SIZE, " 16 "),
            (ENV_STRICT_TAGS, ""),
        ]))
        .unwrap();
        assert_eq!(config, PredictorConfig::builder().peak_gflops(1000.5).vector_size(16).strict_tags(true).build());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = PredictorConfig::from_lookup(env(&[(ENV_MODEL, "skylake")])).unwrap_err();
        assert_eq!(err, crate::Error::UnknownModel { name: "skylake".into() });

        let err = PredictorConfig::from_lookup(env(&[(ENV_VECTOR_SIZE, "wide")])).unwrap_err();
        assert_eq!(err, crate::Error::InvalidEnvValue { var: ENV_VECTOR_SIZE, value: "wide".into() });
    }
}
