use std::fmt;

/// The two embed variants. They differ in date semantics, identifier prefix,
/// and the PostgREST view they query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Waitlist,
    Upcoming,
}

impl SlotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKind::Waitlist => "waitlist",
            SlotKind::Upcoming => "upcoming",
        }
    }

    /// Short prefix for DOM element ids (`wlState07`, `upName12`, ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            SlotKind::Waitlist => "wl",
            SlotKind::Upcoming => "up",
        }
    }

    /// Prefix for the generated CSS class namespace.
    pub fn css_prefix(self) -> &'static str {
        match self {
            SlotKind::Waitlist => "wl-slot",
            SlotKind::Upcoming => "up-slot",
        }
    }

    /// PostgREST view queried by the emitted script.
    pub fn view(self) -> &'static str {
        match self {
            SlotKind::Waitlist => "waitlist_slots_ordered",
            SlotKind::Upcoming => "upcoming_slots_ordered",
        }
    }

    /// Columns the emitted script selects from the view. Upcoming slots also
    /// carry the arrival/departure dates.
    pub fn select_columns(self) -> &'static str {
        match self {
            SlotKind::Waitlist => {
                "display_order,artist_name,instagram,profile_picture_url,background_image_url,style,short_description,bio,is_guest"
            }
            SlotKind::Upcoming => {
                "display_order,date_from,date_to,artist_name,instagram,profile_picture_url,background_image_url,style,short_description,bio,is_guest"
            }
        }
    }

    /// Whether fragments of this kind render a `date_from` arrival date.
    pub fn has_dates(self) -> bool {
        matches!(self, SlotKind::Upcoming)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bookable position: a kind plus a 1-based display index.
///
/// The index uniquely determines every identifier in the emitted fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub kind: SlotKind,
    pub index: u32,
}

impl Slot {
    pub fn new(kind: SlotKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// Zero-padded index, two digits for the whole supported 1..=99 range.
    pub fn padded(&self) -> String {
        format!("{:02}", self.index)
    }

    pub fn filename(&self) -> String {
        format!("{}-slot-{}.html", self.kind.as_str(), self.padded())
    }

    /// Path relative to the output directory.
    pub fn rel_path(&self) -> String {
        format!("{}/{}", self.kind.as_str(), self.filename())
    }

    /// Class namespace shared by every rule in the fragment's style block,
    /// e.g. `wl-slot-07`.
    pub fn class_prefix(&self) -> String {
        format!("{}-{}", self.kind.css_prefix(), self.padded())
    }
}
