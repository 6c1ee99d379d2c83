//! Generated record identifiers
//!
//! Records without a user-chosen key (breeding, prevention, disease, feed,
//! sale) get an id made of a two-letter prefix and a millisecond timestamp,
//! e.g. `BR1717171717171`.

/// Kind of generated record, which decides the id prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Breeding,
    Prevention,
    Disease,
    Feed,
    Sale,
}

impl RecordKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Breeding => "BR",
            RecordKind::Prevention => "PV",
            RecordKind::Disease => "DS",
            RecordKind::Feed => "FD",
            RecordKind::Sale => "SL",
        }
    }
}

/// Build a record id from a timestamp, bumping it until `is_taken` says no.
pub fn next_record_id(kind: RecordKind, millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = millis;
    loop {
        let candidate = format!("{}{}", kind.prefix(), stamp);
        if !is_taken(&candidate) {
            return candidate;
        }
        stamp += 1;
    }
}

/// Suggested code for the next pen (`P001`, `P002`, ...)
pub fn suggest_pen_id(existing_pens: usize) -> String {
    format!("P{:03}", existing_pens + 1)
}
