//! Sink tests: six fixed-name files, valid JSON, camelCase contract.

use std::{fs, path::PathBuf};
use wfm_core::{engine::GenEngine, sink};

fn temp_out_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wfm-sink-{label}-{}", std::process::id()))
}

#[test]
fn writes_all_six_datasets() {
    let out_dir = temp_out_dir("all");
    let _ = fs::remove_dir_all(&out_dir);

    let data = GenEngine::new(42).run();
    sink::DataSink::new(&out_dir)
        .write_all(&data)
        .expect("write datasets");

    for name in [
        sink::VOLUME_FILE,
        sink::DEFLECTION_FILE,
        sink::STAFFING_FILE,
        sink::SLA_FILE,
        sink::COST_FILE,
        sink::SUMMARY_FILE,
    ] {
        let path = out_dir.join(name);
        let raw = fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing {name}"));
        let _: serde_json::Value = serde_json::from_str(&raw)
            .unwrap_or_else(|e| panic!("{name} is not valid JSON: {e}"));
    }

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn json_fields_follow_the_camel_case_contract() {
    let out_dir = temp_out_dir("contract");
    let _ = fs::remove_dir_all(&out_dir);

    let data = GenEngine::new(42).run();
    sink::DataSink::new(&out_dir)
        .write_all(&data)
        .expect("write datasets");

    let volume: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join(sink::VOLUME_FILE)).unwrap())
            .unwrap();
    let first = &volume.as_array().expect("array of records")[0];
    for key in ["date", "hour", "calls", "chats", "emails", "contactType"] {
        assert!(first.get(key).is_some(), "volume record missing {key}");
    }
    assert!(first["contactType"].get("billing").is_some());

    let staffing: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join(sink::STAFFING_FILE)).unwrap())
            .unwrap();
    let first = &staffing.as_array().expect("array of records")[0];
    for key in ["ptoCount", "sickCount", "trainingCount"] {
        assert!(first.get(key).is_some(), "staffing record missing {key}");
    }

    let deflection: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join(sink::DEFLECTION_FILE)).unwrap())
            .unwrap();
    let months = deflection.as_array().expect("array of records");
    assert_eq!(months.len(), 12);
    // Months without updates serialize the field as an explicit null.
    assert!(months[0].get("botUpdates").is_some());
    assert!(months[0]["botUpdates"].is_null());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join(sink::SUMMARY_FILE)).unwrap())
            .unwrap();
    for key in ["totalContacts", "peakDay", "avgSLA", "contactMix", "keyMetrics"] {
        assert!(summary.get(key).is_some(), "summary missing {key}");
    }
    assert!(summary["keyMetrics"].get("totalFTEs").is_some());
    // Display-string percentages, not numbers.
    assert!(summary["contactMix"]["calls"].is_string());

    let cost: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join(sink::COST_FILE)).unwrap()).unwrap();
    assert!(cost["benchmarks"]["byIndustry"]["telecom"].get("avgSLA").is_some());
    assert!(cost["projections"]["potentialSavings"].get("30%").is_some());

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn unwritable_output_directory_is_a_hard_error() {
    // A plain file standing where the output directory should be.
    let blocker = temp_out_dir("blocked");
    let _ = fs::remove_dir_all(&blocker);
    fs::write(&blocker, b"not a directory").expect("create blocker file");

    let data = GenEngine::new(42).run();
    let result = sink::DataSink::new(&blocker).write_all(&data);
    assert!(result.is_err(), "writing into a file path must fail");

    let _ = fs::remove_file(&blocker);
}
