use crate::helper::*;
use fishing_ranges::{FileAdapter, FileAdapterSettings};
use localisation_core::*;
use std::collections::BTreeSet;

#[tokio::test]
async fn test_vessel_metadata_is_restricted_to_split() {
    let helper = TestHelper::new();
    let adapter = helper.adapter();

    let metadata = adapter.vessel_metadata("Test").await.unwrap();

    assert_eq!(metadata.splits.len(), 3);
    assert_eq!(metadata.labels[&VesselId::from("100")], "trawlers");
    assert_eq!(metadata.attributes[&VesselId::from("100")].tonnage, Some(300.0));
    assert!(!metadata.splits.contains_key(&VesselId::from("400")));
}

#[tokio::test]
async fn test_true_ranges_are_restricted_to_split() {
    let helper = TestHelper::new();
    let adapter = helper.adapter();

    let metadata = adapter.vessel_metadata("Test").await.unwrap();
    let ranges = adapter.true_ranges(&metadata.splits, "Test").await.unwrap();

    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[&VesselId::from("100")].len(), 2);
    assert!(!ranges.contains_key(&VesselId::from("400")));
}

#[tokio::test]
async fn test_inferred_ranges_are_restricted_to_vessels() {
    let helper = TestHelper::new();
    let adapter = helper.adapter();

    let vessels = ["100", "300"].into_iter().map(VesselId::from).collect::<BTreeSet<_>>();
    let ranges = adapter.inferred_ranges(&vessels).await.unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(
        ranges[&VesselId::from("100")][0].value(),
        FishingValue::Flag(true)
    );
}

#[tokio::test]
async fn test_ndjson_inferred_ranges_are_read() {
    let helper = TestHelper::new();
    let adapter = helper.adapter_with_inferred(
        "inferred.ndjson",
        r#"{"vessel_id": "200", "start_time": "2016-01-01T00:00:00Z", "end_time": "2016-01-01T00:04:00Z", "nnet_score": 0.7}"#,
    );

    let vessels = [VesselId::from("200")].into_iter().collect::<BTreeSet<_>>();
    let ranges = adapter.inferred_ranges(&vessels).await.unwrap();

    assert_eq!(ranges[&VesselId::from("200")].len(), 1);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let helper = TestHelper::new();
    let adapter = FileAdapter::new(FileAdapterSettings {
        fishing_ranges: helper.temp_dir.path().join("missing.csv"),
        inference_path: helper.temp_dir.path().join("missing.csv"),
        label_path: helper.temp_dir.path().join("missing.csv"),
        threshold: true,
    });

    assert!(adapter.vessel_metadata("Test").await.is_err());
}

#[tokio::test]
async fn test_evaluates_localisation_from_files() {
    let helper = TestHelper::new();
    let adapter = helper.adapter();

    let report = evaluate_localisation(&adapter, &adapter, &adapter, &LocalisationSettings::default())
        .await
        .unwrap();

    let labels = report.rows().map(|r| r.label()).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec!["fixed_gear (1:5/5)", "trawlers (1:10/20)", "Overall"]
    );

    let fixed_gear = &report.categories[0];
    assert_eq!(fixed_gear.precision, None);
    assert_eq!(fixed_gear.recall, Some(0.0));
    assert_eq!(fixed_gear.accuracy, 0.0);

    let overall = report.overall.unwrap();
    assert_eq!(overall.vessels, 2);
    assert_eq!(overall.total_minutes, 25);
    assert_eq!(overall.precision, Some(0.5));
    assert_eq!(overall.recall, Some(10.0 / 15.0));
}
