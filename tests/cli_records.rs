//! Pens, breeding, health, feed and sales through the CLI.

mod common;

use common::TestEnv;

#[test]
fn pen_add_picks_next_code() {
    let env = TestEnv::new();

    let (result, doc) = env.run_json(&[
        "pen", "add", "--name", "Quarantine", "--type", "isolation", "--capacity", "8",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(doc["data"]["id"], "P003");
    assert_eq!(doc["data"]["type"], "isolation");
    assert_eq!(doc["data"]["maxCapacity"], 8);
    assert_eq!(env.read_data()["pens"].as_array().unwrap().len(), 3);
}

#[test]
fn pen_update_warns_when_over_capacity() {
    let env = TestEnv::new();
    for tag in ["E001", "E002", "E003"] {
        env.run(&["sheep", "add", tag, "--pen", "P002"]);
    }

    let (result, doc) = env.run_json(&["pen", "update", "P002", "--capacity", "2"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(doc["data"]["maxCapacity"], 2);
    assert_eq!(doc["data"]["name"], "Pen 2 ewes");
    assert!(doc["warnings"][0].as_str().unwrap().contains("3 sheep"));
}

#[test]
fn pen_list_reports_occupancy() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001"]);

    let (_, doc) = env.run_json(&["pen", "list"]);

    assert_eq!(doc["data"][0]["penId"], "P001");
    assert_eq!(doc["data"][0]["count"], 1);
    assert_eq!(doc["data"][0]["percent"], 2);
}

#[test]
fn breeding_add_computes_lambing_date() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P002"]);
    env.run(&["sheep", "add", "R001", "--pen", "P002", "--gender", "male"]);

    let (result, doc) = env.run_json(&[
        "breeding", "add", "--ewe", "E001", "--ram", "R001", "--date", "2024-01-01",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(doc["data"]["expectedDate"], "2024-05-30");
    assert_eq!(doc["data"]["matingType"], "natural");
    assert!(doc["data"]["id"].as_str().unwrap().starts_with("BR"));
    assert!(doc.get("warnings").is_none());
}

#[test]
fn breeding_list_pending_skips_lambed_records() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P002"]);
    env.run(&["breeding", "add", "--ewe", "E001", "--date", "2023-01-01", "--lambed", "2023-05-31", "--lambs", "2"]);
    env.run(&["breeding", "add", "--ewe", "E001", "--date", "2024-01-01"]);

    let (_, all) = env.run_json(&["breeding", "list"]);
    let (_, pending) = env.run_json(&["breeding", "list", "--pending"]);

    assert_eq!(all["data"].as_array().unwrap().len(), 2);
    assert_eq!(pending["data"].as_array().unwrap().len(), 1);
    assert_eq!(pending["data"][0]["matingDate"], "2024-01-01");
}

#[test]
fn fatal_disease_marks_sheep_deceased() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001"]);

    let (result, doc) = env.run_json(&[
        "health", "disease", "add", "--sheep", "E001", "--disease", "Bloat", "--outcome", "died",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(doc["data"]["markedDeceased"], 1);
    assert_eq!(env.read_data()["sheep"][0]["status"], "deceased");
}

#[test]
fn recovered_disease_leaves_status_alone() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001"]);

    env.run(&["health", "disease", "add", "--sheep", "E001", "--disease", "Foot rot"]);

    assert_eq!(env.read_data()["sheep"][0]["status"], "in-pen");
    let (_, doc) = env.run_json(&["health", "disease", "list", "--sheep", "E001"]);
    assert_eq!(doc["data"][0]["diseaseName"], "Foot rot");
}

#[test]
fn prevention_records_filter_by_sheep() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001"]);
    env.run(&["sheep", "add", "E002", "--pen", "P001"]);
    env.run(&["health", "prevention", "add", "--sheep", "E001", "--project", "FMD vaccine"]);
    env.run(&["health", "prevention", "add", "--sheep", "E002", "--project", "Deworming"]);

    let (_, doc) = env.run_json(&["health", "prevention", "list", "--sheep", "E002"]);

    let records = doc["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["project"], "Deworming");
    assert_eq!(records[0]["operator"], "admin");
}

#[test]
fn prevention_for_unknown_sheep_is_kept_with_warning() {
    let env = TestEnv::new();

    let (result, doc) = env.run_json(&[
        "health", "prevention", "add", "--sheep", "GHOST", "--project", "FMD vaccine",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(doc["warnings"][0].as_str().unwrap().contains("GHOST"));
    assert_eq!(env.read_data()["prevention"].as_array().unwrap().len(), 1);
}

#[test]
fn feed_usage_reduces_remaining_stock() {
    let env = TestEnv::new();
    let (_, added) = env.run_json(&["feed", "add", "--name", "Corn", "--quantity", "100"]);
    let id = added["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(added["data"]["type"], "concentrate");

    env.run(&["feed", "use", &id, "--quantity", "30"]);
    let (result, doc) = env.run_json(&["feed", "use", &id, "--quantity", "20", "--target", "P001"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let usage = doc["data"]["usageRecords"].as_array().unwrap();
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0]["target"], "all sheep");
    assert_eq!(usage[1]["target"], "P001");

    let listing = env.run(&["feed", "list"]);
    assert!(listing.stdout.contains("Corn"));
    assert!(listing.stdout.contains("50%"), "{}", listing.stdout);
}

#[test]
fn feed_use_of_unknown_lot_warns() {
    let env = TestEnv::new();

    let (result, doc) = env.run_json(&["feed", "use", "FD404", "--quantity", "5"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(doc["data"].is_null());
    assert!(doc["warnings"][0].as_str().unwrap().contains("FD404"));
}

#[test]
fn sale_marks_sheep_sold_and_totals() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001"]);

    let (result, doc) = env.run_json(&[
        "sale", "add", "--sheep", "E001", "--price", "600", "--quantity", "2", "--payment", "cash",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(doc["data"]["markedSold"], 1);
    assert_eq!(doc["data"]["record"]["totalAmount"], 1200.0);
    assert_eq!(doc["data"]["record"]["paymentMethod"], "cash");
    assert_eq!(env.read_data()["sheep"][0]["status"], "sold");
}

#[test]
fn sale_of_deceased_sheep_still_marks_sold() {
    let env = TestEnv::new();
    env.run(&["sheep", "add", "E001", "--pen", "P001", "--status", "deceased"]);

    let (result, doc) = env.run_json(&["sale", "add", "--sheep", "E001", "--price", "300"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(doc["warnings"][0].as_str().unwrap().contains("deceased"));
    assert_eq!(env.read_data()["sheep"][0]["status"], "sold");
}

#[test]
fn zero_sale_amount_is_rejected() {
    let env = TestEnv::new();

    let (result, doc) = env.run_json(&["sale", "add", "--sheep", "E001", "--price", "0"]);

    assert!(!result.is_success());
    assert_eq!(doc["code"], "missing-field");
    assert!(!env.data_path().exists());
}

#[test]
fn farm_set_changes_only_given_fields() {
    let env = TestEnv::new();

    let result = env.run(&["farm", "set", "--owner", "Li Wei"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let (_, doc) = env.run_json(&["farm", "show"]);
    assert_eq!(doc["data"]["owner"], "Li Wei");
    assert_eq!(doc["data"]["name"], "My Happy Sheep Farm");
}
