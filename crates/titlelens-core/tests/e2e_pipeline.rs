/// End-to-end pipeline tests.
///
/// These write real CSV files to a temporary directory and drive them
/// through the public API: loader → normaliser → report, and the
/// background load handle. Nothing is mocked.
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use titlelens_core::analysis::{BucketUnit, CategoricalField};
use titlelens_core::loader::background::start_load;
use titlelens_core::loader::progress::LoadProgress;
use titlelens_core::model::FrequencyEntry;
use titlelens_core::{load_catalog, AnalysisConfig, CatalogReport, LoadError};

// ── Helpers ──────────────────────────────────────────────────────────────────

const HEADER: &str =
    "show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in";

/// A small export in the shape of the public titles dataset:
///
/// - `s1` appears twice (second copy must be dropped)
/// - `s5` has no date, `s6` an unparseable one
/// - `s4` has a blank rating, `s3` a non-numeric release year
const CATALOG: &[&str] = &[
    "s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,United States,9/25/2021,2020,PG-13,90 min,Documentaries",
    "s2,TV Show,Blood & Water,Not Given,\"South Africa, United States\",9/24/2021,2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\"",
    "s3,Movie,The Starling,Theodore Melfi,United States,9/24/2021,unknown,PG-13,104 min,\"Comedies, Dramas\"",
    "s4,TV Show,Jailbirds New Orleans,Not Given,Not Given,8/1/2020,2021,,1 Season,\"Docuseries, Reality TV\"",
    "s1,Movie,Dick Johnson Is Dead (copy),Kirsten Johnson,United States,1/1/2019,2020,PG-13,90 min,Documentaries",
    "s5,Movie,Undated Escape,Someone,India,,2019,TV-14,100 min,Dramas",
    "s6,Movie,Broken Date,Someone,India,sometime soon,2019,TV-14,100 min,Dramas",
    "s7,Movie,Great Escape Again,Theodore Melfi,India,\"December 3, 2019\",2018,TV-14,95 min,\"Dramas, International Movies\"",
];

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    let path = dir.join(name);
    fs::write(&path, body).expect("write csv");
    path
}

fn pairs(entries: &[FrequencyEntry]) -> Vec<(&str, u64)> {
    entries.iter().map(|e| (e.label.as_str(), e.count)).collect()
}

fn build_report(path: &Path) -> CatalogReport {
    let catalog = load_catalog(path).expect("catalog loads");
    catalog.report(&AnalysisConfig::default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Duplicate ids, missing dates and garbage dates are all dropped silently.
#[test]
fn normalisation_drops_unusable_rows() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(tmp.path(), "titles.csv", CATALOG);

    let catalog = load_catalog(&path).expect("catalog loads");
    assert_eq!(catalog.original_count, 8);

    let ids: Vec<&str> = catalog.records.iter().map(|r| r.show_id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s7"]);
    assert_eq!(catalog.stats.duplicate_ids, 1);
    assert_eq!(catalog.stats.missing_dates, 1);
    assert_eq!(catalog.stats.unparseable_dates, 1);

    let s1 = &catalog.records[0];
    assert_eq!(s1.title, "Dick Johnson Is Dead");
    assert_eq!((s1.year_added, s1.month_added, s1.day_added), (2021, 9, 25));

    let s3 = &catalog.records[2];
    assert_eq!(s3.release_year, 0, "non-numeric release year coerces to 0");

    let s7 = &catalog.records[4];
    assert_eq!((s7.year_added, s7.month_added, s7.day_added), (2019, 12, 3));
}

#[test]
fn categorical_views_follow_placeholder_and_default_rules() {
    let tmp = TempDir::new().expect("temp dir");
    let report = build_report(&write_csv(tmp.path(), "titles.csv", CATALOG));

    assert_eq!(
        pairs(report.category(CategoricalField::Country)),
        vec![("United States", 3), ("South Africa", 1), ("India", 1)]
    );
    assert_eq!(
        pairs(report.category(CategoricalField::Director)),
        vec![("Theodore Melfi", 2), ("Kirsten Johnson", 1)]
    );
    assert_eq!(
        pairs(report.category(CategoricalField::Rating)),
        vec![("PG-13", 2), ("TV-MA", 1), ("Unrated", 1), ("TV-14", 1)]
    );
    let genres = report.category(CategoricalField::Genre);
    assert_eq!(genres[0], FrequencyEntry::new("Dramas", 2));
}

#[test]
fn time_views_and_peaks() {
    let tmp = TempDir::new().expect("temp dir");
    let report = build_report(&write_csv(tmp.path(), "titles.csv", CATALOG));

    assert_eq!(report.time.monthly.len(), 12);
    let sep = &report.time.monthly[8];
    assert_eq!((sep.movies, sep.tv_shows), (2, 1));

    let years: Vec<BucketUnit> = report.time.yearly.iter().map(|b| b.unit).collect();
    assert_eq!(
        years,
        vec![BucketUnit::Year(2019), BucketUnit::Year(2020), BucketUnit::Year(2021)]
    );
    assert_eq!(report.time.peak_month.unit, BucketUnit::Month(9));
    assert_eq!(report.time.peak_year.unit, BucketUnit::Year(2021));
}

#[test]
fn summary_and_words() {
    let tmp = TempDir::new().expect("temp dir");
    let report = build_report(&write_csv(tmp.path(), "titles.csv", CATALOG));

    let s = &report.summary;
    assert_eq!((s.original_count, s.clean_count, s.removed_count), (8, 5, 3));
    assert_eq!((s.movies, s.tv_shows), (3, 2));
    assert_eq!(s.movie_share, 60.0);
    assert_eq!(s.year_range, Some((2019, 2021)));

    // "great" is a default stopword; "escape" survives.
    assert!(report.words.entries.iter().all(|e| e.label != "great"));
    assert!(report
        .words
        .entries
        .iter()
        .any(|e| e.label == "escape" && e.count == 1));
    assert!(report.words.entries.iter().all(|e| e.label.chars().count() >= 4));
}

/// A header-only file is a valid, empty dataset, not an error.
#[test]
fn header_only_file_yields_empty_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report = build_report(&write_csv(tmp.path(), "empty.csv", &[]));

    assert_eq!(report.summary.clean_count, 0);
    assert_eq!(report.summary.movie_share, 0.0);
    assert_eq!(report.time.monthly.len(), 12);
    assert!(report.time.yearly.is_empty());
    assert!(report.time.peak_year.is_empty());
    assert!(report.categories.iter().all(|v| v.entries.is_empty()));
    assert!(report.words.entries.is_empty());
}

#[test]
fn payload_without_date_column_fails_the_load() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "show_id,type,title\ns1,Movie,X\n").expect("write");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("date_added")));
}

// ── Background load ──────────────────────────────────────────────────────────

#[test]
fn background_load_delivers_report() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(tmp.path(), "titles.csv", CATALOG);

    let handle = start_load(path, AnalysisConfig::default()).expect("spawn loader");
    match handle.wait() {
        LoadProgress::Complete {
            catalog, report, ..
        } => {
            assert_eq!(catalog.records.len(), 5);
            assert_eq!(report.summary.clean_count, 5);
        }
        other => panic!("expected Complete, got {other:?}"),
    }
}

#[test]
fn background_load_reports_missing_file_as_failure() {
    let tmp = TempDir::new().expect("temp dir");
    let handle = start_load(tmp.path().join("nope.csv"), AnalysisConfig::default())
        .expect("spawn loader");

    match handle.wait() {
        LoadProgress::Failed { message } => assert!(message.contains("nope.csv")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

/// Cancelling a running load must not hang `wait`. The thread may already
/// have passed its last stage boundary, so either terminal outcome is
/// legitimate here; the never-completes-once-cancelled rule is pinned by the
/// loader's unit tests, which preset the flag.
#[test]
fn cancel_during_load_still_terminates() {
    let tmp = TempDir::new().expect("temp dir");
    let path = write_csv(tmp.path(), "titles.csv", CATALOG);

    let handle = start_load(path, AnalysisConfig::default()).expect("spawn loader");
    handle.cancel();
    assert!(handle.is_cancelled());

    match handle.wait() {
        LoadProgress::Cancelled | LoadProgress::Complete { .. } => {}
        other => panic!("unexpected outcome {other:?}"),
    }
}
