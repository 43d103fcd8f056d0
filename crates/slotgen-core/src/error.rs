use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("supabase.url is not configured")]
    MissingUrl,

    #[error("supabase.anon_key is not configured")]
    MissingKey,

    #[error("slot count {0} is out of range (1..=99)")]
    SlotCount(u32),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
