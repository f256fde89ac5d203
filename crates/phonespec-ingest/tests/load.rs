//! Tests for loading records from files.

use std::fs;

use phonespec_ingest::{IngestError, LoadOptions, load_records};

const SAMPLE: &str = "\
oem,model,launch_announced,launch_status,body_dimensions,body_weight,body_sim,display_type,display_size,display_resolution,features_sensors,platform_os
Samsung,Galaxy S21,Announced 2021,Available. Released 2021,151.7 x 71.2 x 7.9 mm,169 g,Nano-SIM,AMOLED,6.2 inches,1080x2400,\"Fingerprint (under display), accelerometer\",\"Android 11, One UI 3.1\"
Apple,iPhone 12,2020,Available. Released 2020,146.7 x 71.5 x 7.4 mm,164 g,Nano-SIM,Super Retina XDR OLED,6.1,1170x2532,Face ID,iOS 14.1
Apple,iPhone 12,2020,Available. Released 2020,146.7 x 71.5 x 7.4 mm,164 g,Nano-SIM,Super Retina XDR OLED,6.1,1170x2532,Face ID,iOS 14.1
Nokia,3310,2000,Discontinued,-,133 g,No,Monochrome,-,84 x 48,V1,-
";

#[test]
fn loads_and_dedupes_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("cells.csv");
    fs::write(&path, SAMPLE).expect("write sample");

    let records = load_records(&path, &LoadOptions::default()).expect("load records");
    assert_eq!(records.len(), 3);

    let galaxy = &records[0];
    assert_eq!(galaxy.launch_announced, Some(2021));
    assert_eq!(galaxy.display_size, Some(6.2));
    assert_eq!(galaxy.platform_os.as_deref(), Some("Android 11"));
    assert_eq!(galaxy.sensors().count(), 2);

    let nokia = &records[2];
    assert_eq!(nokia.body_sim, None);
    assert_eq!(nokia.display_size, None);
    assert_eq!(nokia.feat_sensors.as_deref(), Some("V1"));
    assert_eq!(nokia.platform_os, None);

    let all = load_records(&path, &LoadOptions::default().with_dedupe(false))
        .expect("load records");
    assert_eq!(all.len(), 4);
}

#[test]
fn missing_source_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_file.csv");

    let error = load_records(&path, &LoadOptions::default()).expect_err("missing file");
    assert!(error.is_not_found());
    assert!(matches!(error, IngestError::SourceNotFound { .. }));
    let message = error.to_string();
    assert!(message.contains("source not found"));
    assert!(message.contains("no_such_file.csv"));
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("binary.csv");
    fs::write(&path, b"oem,model\n\xff\xfe,x\n").expect("write file");

    let error = load_records(&path, &LoadOptions::default()).expect_err("bad encoding");
    assert!(matches!(error, IngestError::CsvParse { .. }));
}
