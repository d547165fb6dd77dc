use serde::{Deserialize, Serialize};
use siteframe_evaluator::{RenderOptions, DEFAULT_BRAND, DEFAULT_MAP_EMBED_URL};
use siteframe_store::StoreOptions;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "siteframe.config.json";

/// Siteframe configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted store keys
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Prefix for every store key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Site name used in titles and copy
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Actor recorded in the activity log
    #[serde(default = "default_admin_user")]
    pub admin_user: String,

    /// Map shown by Map sections without their own URL
    #[serde(default = "default_map_embed_url")]
    pub map_embed_url: String,

    /// Upper bound for media uploads, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_store_dir() -> String {
    ".siteframe".to_string()
}

fn default_key_prefix() -> String {
    StoreOptions::default().key_prefix
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_admin_user() -> String {
    StoreOptions::default().user
}

fn default_map_embed_url() -> String {
    DEFAULT_MAP_EMBED_URL.to_string()
}

fn default_max_upload_bytes() -> usize {
    StoreOptions::default().max_upload_bytes
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute path to the store directory; `override_dir` wins when set
    pub fn store_path(&self, cwd: &Path, override_dir: Option<&Path>) -> PathBuf {
        match override_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.join(&self.store_dir),
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            key_prefix: self.key_prefix.clone(),
            user: self.admin_user.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            brand: self.brand.clone(),
            map_embed_url: self.map_embed_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            key_prefix: default_key_prefix(),
            brand: default_brand(),
            admin_user: default_admin_user(),
            map_embed_url: default_map_embed_url(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storeDir": "data",
            "brand": "Acme Homes",
            "maxUploadBytes": 500000
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_dir, "data");
        assert_eq!(config.brand, "Acme Homes");
        assert_eq!(config.max_upload_bytes, 500_000);
        assert_eq!(config.key_prefix, "myploti_");
        assert_eq!(config.admin_user, "Admin");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_dir, ".siteframe");
        assert_eq!(config.brand, "MyPloti");
        assert_eq!(config.max_upload_bytes, 2_000_000);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_store_override() {
        let config = Config::default();
        let cwd = Path::new("/srv/site");
        assert_eq!(config.store_path(cwd, None), PathBuf::from("/srv/site/.siteframe"));
        assert_eq!(
            config.store_path(cwd, Some(Path::new("/tmp/other"))),
            PathBuf::from("/tmp/other")
        );
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }
}
