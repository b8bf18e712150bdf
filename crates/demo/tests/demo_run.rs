use std::io::Write;

use storefront_demo::config::DEFAULT_DATA_PATH;
use storefront_demo::{run, DemoConfig};
use storefront_sorting::{is_sorted_by_price, SortAlgorithm};

fn config_for(path: &std::path::Path) -> DemoConfig {
    DemoConfig {
        data_path: path.to_path_buf(),
        seed: 1,
        ..DemoConfig::default()
    }
}

fn write_source(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file
}

#[test]
fn demo_runs_every_step_against_a_small_catalog() {
    let file = write_source(&[
        "57353, Laptop, 899.99, Electronics",
        "68097, Novel, 14.5, Books",
        "10001, Headphones, 59.0, Electronics",
        "10002, Cookbook, 24.0, Books",
        "10003, Monitor, 189.0, Electronics",
    ]);

    let summary = run(&config_for(file.path())).expect("demo run");

    assert_eq!(summary.loaded, 5);
    assert!(summary.updated);
    assert!(summary.deleted);
    // three loaded plus the inserted item
    assert_eq!(summary.search_hits, 4);
    assert_eq!(summary.final_len, 5);
    assert_eq!(summary.bubble.algorithm, SortAlgorithm::Bubble);
    assert_eq!(summary.insertion.algorithm, SortAlgorithm::Insertion);
    assert_eq!(summary.complexity.len(), 2);
    assert!(summary.complexity.iter().all(|r| r.len == 5));
}

#[test]
fn missing_ids_do_not_fail_the_run() {
    let file = write_source(&["1, Kettle, 29.99, Kitchen", "2, Lamp, 15.0, Home"]);

    let summary = run(&config_for(file.path())).expect("demo run");

    assert!(!summary.updated);
    assert!(!summary.deleted);
    assert_eq!(summary.final_len, 3);
    assert_eq!(summary.search_hits, 1);
}

#[test]
fn malformed_source_fails_with_context() {
    let file = write_source(&["1, Kettle, 29.99, Kitchen", "2, Lamp, Home"]);

    let err = run(&config_for(file.path())).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("loading products from"), "{message}");
    assert!(message.contains("line 2"), "{message}");
}

#[test]
fn bundled_sample_catalog_loads() {
    let summary = run(&DemoConfig::default()).expect("demo run");
    assert!(summary.loaded > 0);
    assert!(summary.updated);
    assert!(summary.deleted);
}

#[test]
fn summary_serializes_to_json() {
    let file = write_source(&["3, Mug, 8.0, Kitchen", "1, Pan, 30.0, Kitchen"]);
    let summary = run(&config_for(file.path())).expect("demo run");

    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["loaded"], 2);
    assert_eq!(json["complexity"][0]["algorithm"], "bubble");
    assert!(json["complexity"][1]["best"]["elapsed_secs"].is_f64());
}

#[test]
fn default_data_path_points_at_bundled_file() {
    assert!(std::path::Path::new(DEFAULT_DATA_PATH).exists());
    let mut catalog = storefront_catalog::Catalog::new();
    catalog.load(DEFAULT_DATA_PATH).expect("load sample");
    catalog.sort_by_price(SortAlgorithm::Insertion);
    assert!(is_sorted_by_price(catalog.products()));
}
