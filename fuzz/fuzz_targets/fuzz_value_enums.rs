#![no_main]

use libfuzzer_sys::fuzz_target;

use flockbook::domain::value_objects::{
    DiseaseOutcome, Gender, MatingType, PaymentMethod, PenType, SheepStatus,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<SheepStatus>(content);
        let _ = serde_json::from_str::<Gender>(content);
        let _ = serde_json::from_str::<PenType>(content);
        let _ = serde_json::from_str::<MatingType>(content);
        let _ = serde_json::from_str::<DiseaseOutcome>(content);
        let _ = serde_json::from_str::<PaymentMethod>(content);
    }
});
