use localisation_core::{test_helper::*, *};

fn adapter() -> InMemoryAdapter {
    InMemoryAdapter::default()
        .vessel("1", "trawlers", "Test")
        .vessel("2", "cargo", "Test")
        .vessel("3", "trawlers", "Training")
        .vessel("4", "drifting_longlines", "Test")
        .true_range("1", fishing(0, 9))
        .true_range("1", not_fishing(10, 19))
        .inferred_range("1", fishing(0, 14))
        .inferred_range("1", not_fishing(15, 30))
        .true_range("2", not_fishing(0, 59))
        .inferred_range("2", not_fishing(-60, 29))
        .inferred_range("2", fishing(30, 59))
        .true_range("3", fishing(0, 9))
        .inferred_range("3", fishing(0, 9))
        .true_range("4", fishing(0, 9))
}

#[tokio::test]
async fn test_evaluate_localisation_scores_only_test_split() {
    let adapter = adapter();

    let report = evaluate_localisation(&adapter, &adapter, &adapter, &LocalisationSettings::default())
        .await
        .unwrap();

    // Vessel 3 is in the training split and vessel 4 has no inferred ranges.
    let overall = report.overall.clone().unwrap();
    assert_eq!(overall.vessels, 2);
    assert_eq!(overall.total_minutes, 80);
    assert_eq!(overall.positive_minutes, 10);

    let labels = report.rows().map(|r| r.label()).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec!["trawlers (1:10/20)", "other (1:0/60)", "Overall"]
    );
}

#[tokio::test]
async fn test_evaluate_localisation_metrics_of_rows() {
    let adapter = adapter();

    let report = evaluate_localisation(&adapter, &adapter, &adapter, &LocalisationSettings::default())
        .await
        .unwrap();

    let trawlers = &report.categories[0];
    assert_eq!(trawlers.precision, Some(10.0 / 15.0));
    assert_eq!(trawlers.recall, Some(1.0));
    assert_eq!(trawlers.accuracy, 15.0 / 20.0);

    // Every prediction for the cargo vessel's fishing minutes is wrong, and it
    // has no true positives.
    let other = &report.categories[1];
    assert_eq!(other.precision, Some(0.0));
    assert_eq!(other.recall, None);
    assert_eq!(other.f1, None);
    assert_eq!(other.accuracy, 0.5);
}

#[tokio::test]
async fn test_evaluate_localisation_is_deterministic() {
    let adapter = adapter();
    let settings = LocalisationSettings::default();

    let first = evaluate_localisation(&adapter, &adapter, &adapter, &settings)
        .await
        .unwrap();
    let second = evaluate_localisation(&adapter, &adapter, &adapter, &settings)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_overlap_policy_changes_truth_of_overlapping_minutes() {
    let adapter = InMemoryAdapter::default()
        .vessel("1", "trawlers", "Test")
        .true_range("1", fishing(0, 9))
        .true_range("1", not_fishing(5, 9))
        .inferred_range("1", fishing(0, 9));

    let mut settings = LocalisationSettings::default();

    let last_write = evaluate_localisation(&adapter, &adapter, &adapter, &settings)
        .await
        .unwrap();
    assert_eq!(last_write.overall.unwrap().positive_minutes, 5);

    settings.raster.overlap_policy = OverlapPolicy::FishingWins;
    let fishing_wins = evaluate_localisation(&adapter, &adapter, &adapter, &settings)
        .await
        .unwrap();
    assert_eq!(fishing_wins.overall.unwrap().positive_minutes, 10);
}

#[tokio::test]
async fn test_report_is_written_through_inbound_port() {
    let adapter = adapter();

    let report = evaluate_localisation(&adapter, &adapter, &adapter, &LocalisationSettings::default())
        .await
        .unwrap();
    adapter.write_report(&report).await.unwrap();

    assert_eq!(adapter.written_report(), Some(report));
}
