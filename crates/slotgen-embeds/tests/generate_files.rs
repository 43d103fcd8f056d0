use std::collections::HashSet;
use std::fs;
use std::path::Path;

use slotgen_core::EmbedGenerator;
use slotgen_core::config::SlotgenConfig;
use slotgen_embeds::{UpcomingGenerator, WaitlistGenerator};

fn test_config() -> SlotgenConfig {
    let mut config = SlotgenConfig::default();
    config.supabase.url = "https://example.supabase.co".to_string();
    config.supabase.anon_key = "test-anon-key".to_string();
    config
}

fn write_all(dir: &Path, config: &SlotgenConfig) {
    for generator in [
        &WaitlistGenerator as &dyn EmbedGenerator,
        &UpcomingGenerator as &dyn EmbedGenerator,
    ] {
        for file in generator.generate(config).unwrap() {
            let dest = dir.join(&file.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&dest, &file.content).unwrap();
        }
    }
}

#[test]
fn writes_the_full_embed_set() {
    let config = test_config();
    let tmp = tempfile::tempdir().unwrap();
    write_all(tmp.path(), &config);

    let mut names = HashSet::new();
    for kind in ["waitlist", "upcoming"] {
        for entry in fs::read_dir(tmp.path().join(kind)).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(name.ends_with(".html"));
            assert!(names.insert(name), "duplicate filename on disk");
        }
    }
    assert_eq!(names.len(), 120);
    assert!(tmp.path().join("waitlist/waitlist-slot-01.html").exists());
    assert!(tmp.path().join("waitlist/waitlist-slot-60.html").exists());
    assert!(tmp.path().join("upcoming/upcoming-slot-01.html").exists());
    assert!(tmp.path().join("upcoming/upcoming-slot-60.html").exists());
}

#[test]
fn regeneration_is_byte_identical() {
    let config = test_config();
    let tmp = tempfile::tempdir().unwrap();

    write_all(tmp.path(), &config);
    let before = fs::read(tmp.path().join("upcoming/upcoming-slot-33.html")).unwrap();

    write_all(tmp.path(), &config);
    let after = fs::read(tmp.path().join("upcoming/upcoming-slot-33.html")).unwrap();

    assert_eq!(before, after);
}

#[test]
fn written_fragment_references_its_slot() {
    let config = test_config();
    let tmp = tempfile::tempdir().unwrap();
    write_all(tmp.path(), &config);

    let html = fs::read_to_string(tmp.path().join("waitlist/waitlist-slot-07.html")).unwrap();
    assert!(html.contains("/rest/v1/waitlist_slots_ordered"));
    assert!(html.contains("const SLOT = 7;"));
    assert!(html.contains("wl-slot-07-container"));
}
