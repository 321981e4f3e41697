use crate::helper::*;
use localisation_core::OverlapPolicy;
use localisation_metrics::{report::ReportFormat, startup::App};

#[tokio::test]
async fn test_app_writes_html_report() {
    let helper = TestHelper::new();
    let html = helper.run(ReportFormat::Html).await;

    assert!(html.contains("<h2>Fishing Localisation</h2>"));
    assert!(html.contains("<td>fixed_gear (1:5/5)</td>"));
    assert!(html.contains("<td>trawlers (1:10/20)</td>"));
    assert!(html.contains("<td>Overall</td>"));
    assert!(!html.contains("cargo"));
}

#[tokio::test]
async fn test_app_writes_text_report_with_formatted_metrics() {
    let helper = TestHelper::new();
    let text = helper.run(ReportFormat::Text).await;

    let overall = text.lines().find(|l| l.starts_with("Overall")).unwrap();
    let cells: Vec<_> = overall.split('|').map(str::trim).collect();
    assert_eq!(cells, vec!["Overall", "0.50", "0.67", "0.40", "0.57"]);

    let fixed_gear = text.lines().find(|l| l.starts_with("fixed_gear")).unwrap();
    let cells: Vec<_> = fixed_gear.split('|').map(str::trim).collect();
    assert_eq!(
        cells,
        vec!["fixed_gear (1:5/5)", "undefined", "0.00", "0.00", "undefined"]
    );
}

#[tokio::test]
async fn test_app_writes_json_report() {
    let helper = TestHelper::new();
    let json = helper.run(ReportFormat::Json).await;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["categories"].as_array().unwrap().len(), 2);
    assert_eq!(value["overall"]["vessels"], 2);
    assert_eq!(value["overall"]["total_minutes"], 25);
    assert!(value["categories"][0]["f1"].is_null());
}

#[tokio::test]
async fn test_app_settings_map_onto_localisation_settings() {
    let helper = TestHelper::new();
    let settings = helper.settings(ReportFormat::Html);

    let localisation = settings.localisation_settings();
    assert_eq!(localisation.test_split, "Test");
    assert_eq!(localisation.raster.overlap_policy, OverlapPolicy::LastWriteWins);
    assert!(settings.adapter_settings().threshold);
}

#[tokio::test]
async fn test_app_fails_on_missing_input_file() {
    let helper = TestHelper::new();
    let mut settings = helper.settings(ReportFormat::Html);
    settings.label_path = helper.temp_dir.path().join("missing.csv");

    assert!(App::build(&settings).run().await.is_err());
    assert!(!helper.dest_path().exists());
}
