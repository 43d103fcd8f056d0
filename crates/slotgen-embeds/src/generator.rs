use slotgen_core::config::SlotgenConfig;
use slotgen_core::error::GeneratorError;
use slotgen_core::slot::{Slot, SlotKind};
use slotgen_core::{EmbedGenerator, GeneratedFile};

use crate::emitters::embed::{EmbedOptions, emit_embed};

/// Waitlist embed generator.
pub struct WaitlistGenerator;

/// Upcoming embed generator.
pub struct UpcomingGenerator;

fn generate_kind(
    kind: SlotKind,
    config: &SlotgenConfig,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    config.validate()?;

    let options = EmbedOptions::from_config(config);
    log::debug!("emitting {} {} embeds", config.slots, kind);

    let files = (1..=config.slots)
        .map(|index| {
            let slot = Slot::new(kind, index);
            GeneratedFile {
                path: slot.rel_path(),
                content: emit_embed(slot, &options),
            }
        })
        .collect();

    Ok(files)
}

impl EmbedGenerator for WaitlistGenerator {
    fn kind(&self) -> SlotKind {
        SlotKind::Waitlist
    }

    fn generate(&self, config: &SlotgenConfig) -> Result<Vec<GeneratedFile>, GeneratorError> {
        generate_kind(SlotKind::Waitlist, config)
    }
}

impl EmbedGenerator for UpcomingGenerator {
    fn kind(&self) -> SlotKind {
        SlotKind::Upcoming
    }

    fn generate(&self, config: &SlotgenConfig) -> Result<Vec<GeneratedFile>, GeneratorError> {
        generate_kind(SlotKind::Upcoming, config)
    }
}
