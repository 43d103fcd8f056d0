pub mod config;
pub mod error;
pub mod slot;

/// A generated file with path and content.
///
/// Paths are relative to the output directory, e.g.
/// `waitlist/waitlist-slot-07.html`.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that produce the embed files of one slot kind.
pub trait EmbedGenerator {
    fn kind(&self) -> slot::SlotKind;

    fn generate(
        &self,
        config: &config::SlotgenConfig,
    ) -> Result<Vec<GeneratedFile>, error::GeneratorError>;
}
