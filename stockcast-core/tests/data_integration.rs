//! Integration tests for the CSV loading pipeline against files on disk.

use std::sync::Arc;
use stockcast_core::data::{CsvLoader, DataError, DirSource, ParsePolicy, PriceStore, SymbolTable};
use stockcast_core::indicators::MovingAverages;
use tempfile::TempDir;

/// Fresh fixture directory holding the given CSV files.
fn fixture_dir(files: &[(&str, String)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        std::fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

fn ascending_csv(n: usize) -> String {
    let mut csv = String::from("Date,Close\n");
    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    for i in 0..n {
        let date = start + chrono::Duration::days(i as i64);
        csv.push_str(&format!("{date},{}\n", i + 1));
    }
    csv
}

#[test]
fn loads_every_default_symbol_from_disk() {
    let table = SymbolTable::default_nse();
    let files: Vec<(&str, String)> = table.iter().map(|(_, f)| (f, ascending_csv(10))).collect();
    let dir = fixture_dir(&files);

    let source = DirSource::new(dir.path());
    let loader = CsvLoader::new(&table, &source);
    let mut store = PriceStore::new();

    for symbol in table.symbols() {
        let series = loader.load(&mut store, symbol).unwrap();
        assert_eq!(series.len(), 10, "{symbol}");
        assert_eq!(series.first().unwrap().date, "2023-01-02");
    }
    assert_eq!(store.len(), 5);
}

#[test]
fn repeated_load_is_memoized_even_after_file_changes() {
    let dir = fixture_dir(&[("tcs.csv", ascending_csv(3))]);
    let table = SymbolTable::default_nse();
    let source = DirSource::new(dir.path());
    let loader = CsvLoader::new(&table, &source);
    let mut store = PriceStore::new();

    let first = loader.load(&mut store, "tcs").unwrap();
    std::fs::write(dir.path().join("tcs.csv"), ascending_csv(7)).unwrap();
    let second = loader.load(&mut store, "tcs").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 3);
}

#[test]
fn header_only_file_loads_as_empty_series() {
    let dir = fixture_dir(&[("itc.csv", "Date,Close\n".to_string())]);
    let table = SymbolTable::default_nse();
    let source = DirSource::new(dir.path());
    let loader = CsvLoader::new(&table, &source);
    let mut store = PriceStore::new();

    let series = loader.load(&mut store, "itc").unwrap();
    assert!(series.is_empty());

    let ma = MovingAverages::from_series(&series);
    assert!(ma.is_empty());
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = fixture_dir(&[]);
    let table = SymbolTable::default_nse();
    let source = DirSource::new(dir.path());
    let loader = CsvLoader::new(&table, &source);
    let mut store = PriceStore::new();

    let err = loader.load(&mut store, "hdfc").unwrap_err();
    assert!(matches!(err, DataError::Io { .. }), "got {err:?}");
    assert!(store.is_empty());
}

#[test]
fn malformed_rows_are_skipped_or_rejected_by_policy() {
    let body = "Date,Close\n2024-01-02,10\n2024-01-03,-\n\n2024-01-04,12\n".to_string();
    let dir = fixture_dir(&[("yes.csv", body)]);
    let table = SymbolTable::default_nse();
    let source = DirSource::new(dir.path());

    let mut store = PriceStore::new();
    let lenient = CsvLoader::new(&table, &source)
        .load(&mut store, "yesbank")
        .unwrap();
    assert_eq!(lenient.closes(), vec![10.0, 12.0]);
    assert_eq!(lenient.diagnostics.len(), 1);
    assert_eq!(lenient.diagnostics[0].line, 3);

    let mut fresh = PriceStore::new();
    let strict = CsvLoader::new(&table, &source)
        .with_policy(ParsePolicy::Strict)
        .load(&mut fresh, "yesbank");
    assert!(matches!(strict, Err(DataError::InvalidPrice { line: 3, .. })));
}

#[test]
fn moving_averages_over_loaded_series() {
    let dir = fixture_dir(&[("tcs.csv", ascending_csv(60))]);
    let table = SymbolTable::default_nse();
    let source = DirSource::new(dir.path());
    let mut store = PriceStore::new();

    let series = CsvLoader::new(&table, &source)
        .load(&mut store, "tcs")
        .unwrap();
    let ma = MovingAverages::from_series(&series);

    assert_eq!(ma.len(), 60);
    assert!(ma.ma50[..50].iter().all(Option::is_none));
    assert!((ma.ma50[50].unwrap() - 25.5).abs() < 1e-12);
    assert!(ma.ma200.iter().all(Option::is_none));
}
