use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default config file location.
pub const CONFIG_PATH_ENV: &str = "RICHTEXT_DOM_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Tag tables and reserved attribute names consulted by the editing engine.
///
/// Every field has a default matching the HTML vocabulary, so a config file
/// only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Unique identifier attribute dropped from clones produced by split and isolate.
    pub id_attribute: String,
    /// Marker attribute; an element carrying it with an empty value is not serializable.
    pub metadata_attribute: String,
    /// Attribute flagging an element as not displayed.
    pub hidden_attribute: String,
    /// Element appended to a block that would otherwise be unable to host a caret.
    pub filler_tag: String,
    pub line_break_tag: String,
    /// Elements that can never have children.
    pub void_tags: Vec<String>,
    pub flow_containers: Vec<String>,
    pub block_inline_containers: Vec<String>,
    pub special_blocks: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            id_attribute: "id".to_string(),
            metadata_attribute: "metadata".to_string(),
            hidden_attribute: "hidden".to_string(),
            filler_tag: "br".to_string(),
            line_break_tag: "br".to_string(),
            void_tags: strings(&[
                "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input", "isindex",
                "link", "meta", "param", "nextid", "bgsound", "embed", "keygen", "spacer", "wbr",
            ]),
            flow_containers: strings(&["body", "li", "td", "th", "dd", "div", "blockquote"]),
            block_inline_containers: strings(&[
                "p", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "dt", "address",
            ]),
            special_blocks: strings(&[
                "hr", "ul", "ol", "dl", "table", "tbody", "thead", "tfoot", "tr", "form",
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn contains_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

impl EngineConfig {
    pub fn is_void_tag(&self, tag: &str) -> bool {
        contains_tag(&self.void_tags, tag)
    }

    pub fn is_flow_container_tag(&self, tag: &str) -> bool {
        contains_tag(&self.flow_containers, tag)
    }

    pub fn is_block_inline_container_tag(&self, tag: &str) -> bool {
        contains_tag(&self.block_inline_containers, tag)
    }

    pub fn is_special_block_tag(&self, tag: &str) -> bool {
        contains_tag(&self.special_blocks, tag)
    }

    /// Any of the three block-level categories.
    pub fn is_block_tag(&self, tag: &str) -> bool {
        self.is_flow_container_tag(tag)
            || self.is_block_inline_container_tag(tag)
            || self.is_special_block_tag(tag)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: EngineConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Load from [`Self::config_path`], falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Ok(Self::load_from_path(&config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        if let Ok(overridden) = std::env::var(CONFIG_PATH_ENV) {
            let overridden = PathBuf::from(overridden);
            return Self::expand_path(&overridden).unwrap_or(overridden);
        }
        let config_dir = shellexpand::tilde("~/.config/richtext-dom");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
