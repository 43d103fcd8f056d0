pub mod emitters;
pub mod generator;

pub use emitters::embed::{EmbedOptions, emit_embed};
pub use generator::{UpcomingGenerator, WaitlistGenerator};
