#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Snapshot parsing must never panic, and whatever parses must serialize again
    if let Ok(snapshot) = serde_json::from_slice::<flockbook::AppData>(data) {
        let _ = serde_json::to_vec(&snapshot);
        let _ = flockbook::domain::services::DashboardStats::compute(&snapshot);
        let _ = flockbook::domain::services::check_integrity(&snapshot);
    }
});
