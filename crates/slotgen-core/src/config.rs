use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::slot::SlotKind;

/// Top-level project configuration loaded from `.slotgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlotgenConfig {
    pub supabase: SupabaseConfig,
    pub output: String,
    pub slots: u32,
    pub target: TargetKind,
    pub refresh_minutes: u32,
}

impl Default for SlotgenConfig {
    fn default() -> Self {
        Self {
            supabase: SupabaseConfig::default(),
            output: "dist".to_string(),
            slots: 60,
            target: TargetKind::All,
            refresh_minutes: 5,
        }
    }
}

/// Supabase project coordinates baked into the emitted fetch calls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Which embed kinds to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Waitlist,
    Upcoming,
    #[default]
    All,
}

impl TargetKind {
    pub fn kinds(self) -> &'static [SlotKind] {
        match self {
            TargetKind::Waitlist => &[SlotKind::Waitlist],
            TargetKind::Upcoming => &[SlotKind::Upcoming],
            TargetKind::All => &[SlotKind::Waitlist, SlotKind::Upcoming],
        }
    }
}

impl SlotgenConfig {
    /// Check the parts the emitters take on faith: credentials present, and a
    /// slot count that keeps the two-digit index padding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if self.supabase.anon_key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if self.slots == 0 || self.slots > 99 {
            return Err(ConfigError::SlotCount(self.slots));
        }
        Ok(())
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".slotgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SlotgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let config: SlotgenConfig = serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# slotgen configuration
supabase:
  url: ""              # https://<project>.supabase.co
  anon_key: ""         # anon/public API key of the project

output: dist
slots: 60              # embeds per kind (1..=99)
target: all            # waitlist | upcoming | all
refresh_minutes: 5     # how often the embedded script re-fetches
"#
}
