//! Integration tests for the market query entry point

mod common;

use common::{db_path, setup_market_dir};
use mktstatus::{storage::query_market, FilterKind, MktError, Number};

#[test]
fn test_query_by_type_id() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    let rows = query_market(&path, FilterKind::TypeId, "34").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].type_name, "Tritanium");
    assert_eq!(rows[0].stock, Some(Number::Integer(1_500_000)));
    assert_eq!(rows[0].price, Some(Number::Real(5.0)));
}

#[test]
fn test_query_by_group_id_ordering() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    let rows = query_market(&path, FilterKind::GroupId, "831").unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.type_name.as_str()).collect();
    assert_eq!(names, ["Ares", "Crow", "Raptor"]);
}

#[test]
fn test_query_by_group_name_substring() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    let rows = query_market(&path, FilterKind::GroupName, "ner").unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.type_name.as_str()).collect();
    assert_eq!(names, ["Pyerite", "Tritanium"]);
}

#[test]
fn test_query_by_type_name_is_case_sensitive() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    assert_eq!(query_market(&path, FilterKind::TypeName, "Crow").unwrap().len(), 1);
    assert!(query_market(&path, FilterKind::TypeName, "crow").unwrap().is_empty());
}

#[test]
fn test_query_each_database_separately() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktnorth2.db");
    let north = query_market(&path, FilterKind::GroupId, "831").unwrap();
    assert!(north.is_empty());
}

#[test]
fn test_non_integer_id_is_invalid_filter_value() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    let result = query_market(&path, FilterKind::TypeId, "abc");
    match result {
        Err(MktError::InvalidFilterValue { kind, value }) => {
            assert_eq!(kind, "type_id");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidFilterValue, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_unavailable_and_not_created() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "missing.db");
    let result = query_market(&path, FilterKind::TypeName, "Trit");
    assert!(matches!(result, Err(MktError::DatabaseUnavailable { .. })));
    assert!(!path.exists());
}

#[test]
fn test_query_leaves_file_unmodified() {
    let tmp = setup_market_dir();
    let path = db_path(&tmp, "wcmktprod.db");
    let before = std::fs::read(&path).unwrap();
    query_market(&path, FilterKind::GroupName, "Interceptor").unwrap();
    let after = std::fs::read(&path).unwrap();
    assert_eq!(before, after);
}
