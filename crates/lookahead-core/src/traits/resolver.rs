//! Mapping logical resource names to storage locations.

use std::path::PathBuf;

/// A family of resources sharing a naming convention on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceType {
    pub name: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// Resource type of the prediction database.
pub const PREDICT_DB_RESOURCE: ResourceType = ResourceType {
    name: "level_predict_db",
    prefix: "",
    suffix: "",
};

/// Resolves a logical resource id to an absolute storage location.
pub trait ResourceResolver: Send + Sync {
    fn resolve_path(&self, resource_id: &str) -> PathBuf;
}

/// Resolves resources under a user data directory.
#[derive(Debug, Clone)]
pub struct UserDataResolver {
    root: PathBuf,
    resource_type: ResourceType,
}

impl UserDataResolver {
    pub fn new(root: impl Into<PathBuf>, resource_type: ResourceType) -> Self {
        Self {
            root: root.into(),
            resource_type,
        }
    }

    /// Resolver for the prediction database under `root`.
    pub fn for_predict_db(root: impl Into<PathBuf>) -> Self {
        Self::new(root, PREDICT_DB_RESOURCE)
    }
}

impl ResourceResolver for UserDataResolver {
    fn resolve_path(&self, resource_id: &str) -> PathBuf {
        let file_name = format!(
            "{}{}{}",
            self.resource_type.prefix, resource_id, self.resource_type.suffix
        );
        self.root.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_and_suffix() {
        let resolver = UserDataResolver::new(
            "/home/u/.config/ime",
            ResourceType {
                name: "dict",
                prefix: "user_",
                suffix: ".db",
            },
        );
        assert_eq!(
            resolver.resolve_path("words"),
            PathBuf::from("/home/u/.config/ime/user_words.db")
        );
    }

    #[test]
    fn predict_db_uses_bare_name() {
        let resolver = UserDataResolver::for_predict_db("/data");
        assert_eq!(
            resolver.resolve_path("predict.userdb"),
            PathBuf::from("/data/predict.userdb")
        );
    }
}
