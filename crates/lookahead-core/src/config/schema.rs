//! The host configuration collaborator.

use std::fmt;
use std::sync::Arc;

use crate::errors::ConfigError;

/// Read access to a schema's configuration tree.
///
/// Paths are slash-separated, e.g. `predictor/max_candidates`.
pub trait SchemaConfig: Send + Sync {
    fn get_string(&self, path: &str) -> Option<String>;
    fn get_int(&self, path: &str) -> Option<i64>;
    fn get_bool(&self, path: &str) -> Option<bool>;
}

/// A configuration profile and its identity, as handed to factories.
#[derive(Clone)]
pub struct Schema {
    pub schema_id: String,
    pub config: Arc<dyn SchemaConfig>,
}

impl Schema {
    pub fn new(schema_id: impl Into<String>, config: Arc<dyn SchemaConfig>) -> Self {
        Self {
            schema_id: schema_id.into(),
            config,
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("schema_id", &self.schema_id)
            .finish_non_exhaustive()
    }
}

/// `SchemaConfig` backed by a TOML document.
#[derive(Debug, Clone, Default)]
pub struct TomlSchemaConfig {
    root: toml::Table,
}

impl TomlSchemaConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let root = source
            .parse::<toml::Table>()
            .map_err(|e| ConfigError::Parse {
                reason: e.to_string(),
            })?;
        Ok(Self { root })
    }

    fn lookup(&self, path: &str) -> Option<&toml::Value> {
        let mut parts = path.split('/');
        let mut value = self.root.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }
}

impl SchemaConfig for TomlSchemaConfig {
    fn get_string(&self, path: &str) -> Option<String> {
        self.lookup(path)?.as_str().map(str::to_string)
    }

    fn get_int(&self, path: &str) -> Option<i64> {
        self.lookup(path)?.as_integer()
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        self.lookup(path)?.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lookup() {
        let cfg = TomlSchemaConfig::from_toml(
            "[predictor]\npredictdb = \"x.userdb\"\n[predictor.extra]\nenabled = true\n",
        )
        .unwrap();
        assert_eq!(cfg.get_string("predictor/predictdb").as_deref(), Some("x.userdb"));
        assert_eq!(cfg.get_bool("predictor/extra/enabled"), Some(true));
        assert_eq!(cfg.get_int("predictor/predictdb"), None);
        assert_eq!(cfg.get_string("predictor/missing"), None);
        assert_eq!(cfg.get_string("predictor/predictdb/deeper"), None);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(TomlSchemaConfig::from_toml("[predictor").is_err());
    }
}
