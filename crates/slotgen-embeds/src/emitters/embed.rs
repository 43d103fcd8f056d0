use minijinja::{Environment, context};
use slotgen_core::config::SlotgenConfig;
use slotgen_core::slot::Slot;

/// Values threaded from the config into every fragment.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub supabase_url: String,
    pub supabase_key: String,
    pub refresh_minutes: u32,
}

impl EmbedOptions {
    pub fn from_config(config: &SlotgenConfig) -> Self {
        Self {
            supabase_url: config.supabase.url.clone(),
            supabase_key: config.supabase.anon_key.clone(),
            refresh_minutes: config.refresh_minutes,
        }
    }
}

/// Emit one self-contained embed fragment: style block, DOM skeleton, and the
/// polling script. Pure function of its inputs.
pub fn emit_embed(slot: Slot, options: &EmbedOptions) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("embed.html.j2", include_str!("../../templates/embed.html.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("embed.html.j2").unwrap();

    tmpl.render(context! {
        kind_label => slot.kind.as_str().to_uppercase(),
        slot => slot.index,
        padded => slot.padded(),
        cls => slot.class_prefix(),
        idp => slot.kind.id_prefix(),
        view => slot.kind.view(),
        select => slot.kind.select_columns(),
        upcoming => slot.kind.has_dates(),
        supabase_url => options.supabase_url.clone(),
        supabase_key => options.supabase_key.clone(),
        refresh_ms => u64::from(options.refresh_minutes) * 60 * 1000,
    })
    .expect("render should succeed")
}

#[cfg(test)]
mod tests {
    use slotgen_core::slot::{Slot, SlotKind};

    use super::*;

    fn options() -> EmbedOptions {
        EmbedOptions {
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_key: "anon-key".to_string(),
            refresh_minutes: 5,
        }
    }

    #[test]
    fn waitlist_fragment_targets_waitlist_view() {
        let html = emit_embed(Slot::new(SlotKind::Waitlist, 7), &options());
        assert!(html.contains("const SLOT = 7;"));
        assert!(html.contains("/rest/v1/waitlist_slots_ordered"));
        assert!(html.contains("'?display_order=eq.' + SLOT"));
    }

    #[test]
    fn identifiers_share_the_padded_suffix() {
        let html = emit_embed(Slot::new(SlotKind::Waitlist, 7), &options());
        assert!(html.contains("wl-slot-07-container"));
        assert!(html.contains("id=\"wlState07\""));
        assert!(html.contains("id=\"wlContainer07\""));
        assert!(html.contains("const ID = '07';"));
        // The unpadded index never leaks into identifiers.
        assert!(!html.contains("wl-slot-7 "));
    }

    #[test]
    fn upcoming_fragment_formats_arrival_dates() {
        let html = emit_embed(Slot::new(SlotKind::Upcoming, 12), &options());
        assert!(html.contains("/rest/v1/upcoming_slots_ordered"));
        assert!(html.contains("function formatDate"));
        assert!(html.contains("date_from"));
        assert!(html.contains("'Anreise: ' + formatDate(data.date_from)"));
        assert!(html.contains("GERMAN_MONTHS"));
    }

    #[test]
    fn waitlist_fragment_has_no_date_helper() {
        let html = emit_embed(Slot::new(SlotKind::Waitlist, 12), &options());
        assert!(!html.contains("formatDate"));
        assert!(!html.contains("date_from"));
        assert!(html.contains("Flexibel verfügbar"));
    }

    #[test]
    fn credentials_and_refresh_come_from_options() {
        let opts = EmbedOptions {
            supabase_url: "https://proj.supabase.co".to_string(),
            supabase_key: "key-123".to_string(),
            refresh_minutes: 10,
        };
        let html = emit_embed(Slot::new(SlotKind::Waitlist, 1), &opts);
        assert!(html.contains("const SUPABASE_URL = 'https://proj.supabase.co';"));
        assert!(html.contains("const SUPABASE_KEY = 'key-123';"));
        assert!(html.contains("setInterval(fetchData, 600000);"));
    }

    #[test]
    fn fragment_keeps_its_ui_states() {
        let html = emit_embed(Slot::new(SlotKind::Upcoming, 1), &options());
        assert!(html.contains("'Currently inactive'"));
        assert!(html.contains("showState('Error', error.message || 'Failed to load');"));
        assert!(html.contains("'apikey': SUPABASE_KEY"));
        assert!(html.contains("'Authorization': 'Bearer ' + SUPABASE_KEY"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = emit_embed(Slot::new(SlotKind::Upcoming, 42), &options());
        let b = emit_embed(Slot::new(SlotKind::Upcoming, 42), &options());
        assert_eq!(a, b);
    }
}
