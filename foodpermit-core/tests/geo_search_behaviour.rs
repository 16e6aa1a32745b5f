//! Behavioural tests for haversine radius search.

use foodpermit_core::{FoodPermitEngine, PermitRecord};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn record(lat: &str, lng: &str) -> PermitRecord {
    PermitRecord {
        locationid: "1".into(),
        latitude: lat.into(),
        longitude: lng.into(),
        ..PermitRecord::default()
    }
}

#[fixture]
fn engine() -> RefCell<FoodPermitEngine> {
    RefCell::new(FoodPermitEngine::default())
}

#[fixture]
fn results() -> RefCell<Vec<PermitRecord>> {
    RefCell::new(Vec::new())
}

fn search(
    engine: &RefCell<FoodPermitEngine>,
    results: &RefCell<Vec<PermitRecord>>,
    lat: f64,
    lng: f64,
    radius: f64,
) {
    let matches = engine
        .borrow()
        .geo_search(lat, lng, radius)
        .into_iter()
        .cloned()
        .collect();
    *results.borrow_mut() = matches;
}

#[given("a dataset with one record at latitude 1 and longitude 1")]
fn given_located_record(#[from(engine)] engine: &RefCell<FoodPermitEngine>) {
    *engine.borrow_mut() = FoodPermitEngine::new(vec![record("1", "1")], &[]);
}

#[given("a dataset with one record whose latitude is blank")]
fn given_unlocated_record(#[from(engine)] engine: &RefCell<FoodPermitEngine>) {
    *engine.borrow_mut() = FoodPermitEngine::new(vec![record("", "1")], &[]);
}

#[when("I search within 1 metre of latitude 1 and longitude 1")]
fn when_search_same_point(
    #[from(engine)] engine: &RefCell<FoodPermitEngine>,
    #[from(results)] results: &RefCell<Vec<PermitRecord>>,
) {
    search(engine, results, 1.0, 1.0, 1.0);
}

#[when("I search within 157410 metres of latitude 2 and longitude 2")]
fn when_search_just_inside(
    #[from(engine)] engine: &RefCell<FoodPermitEngine>,
    #[from(results)] results: &RefCell<Vec<PermitRecord>>,
) {
    search(engine, results, 2.0, 2.0, 157_410.0);
}

#[when("I search within 157400 metres of latitude 2 and longitude 2")]
fn when_search_just_outside(
    #[from(engine)] engine: &RefCell<FoodPermitEngine>,
    #[from(results)] results: &RefCell<Vec<PermitRecord>>,
) {
    search(engine, results, 2.0, 2.0, 157_400.0);
}

#[when("I search within 20000 kilometres of latitude 0 and longitude 0")]
fn when_search_globe(
    #[from(engine)] engine: &RefCell<FoodPermitEngine>,
    #[from(results)] results: &RefCell<Vec<PermitRecord>>,
) {
    search(engine, results, 0.0, 0.0, 20_000_000.0);
}

#[then("only that record is returned")]
fn then_single_record(#[from(results)] results: &RefCell<Vec<PermitRecord>>) {
    assert_eq!(*results.borrow(), vec![record("1", "1")]);
}

#[then("no records are returned")]
fn then_no_records(#[from(results)] results: &RefCell<Vec<PermitRecord>>) {
    assert!(results.borrow().is_empty(), "expected no results");
}

#[scenario(path = "tests/features/geo_search.feature", index = 0)]
fn scenario_same_point(engine: RefCell<FoodPermitEngine>, results: RefCell<Vec<PermitRecord>>) {
    let _ = (engine, results);
}

#[scenario(path = "tests/features/geo_search.feature", index = 1)]
fn scenario_just_inside(engine: RefCell<FoodPermitEngine>, results: RefCell<Vec<PermitRecord>>) {
    let _ = (engine, results);
}

#[scenario(path = "tests/features/geo_search.feature", index = 2)]
fn scenario_just_outside(engine: RefCell<FoodPermitEngine>, results: RefCell<Vec<PermitRecord>>) {
    let _ = (engine, results);
}

#[scenario(path = "tests/features/geo_search.feature", index = 3)]
fn scenario_unlocated(engine: RefCell<FoodPermitEngine>, results: RefCell<Vec<PermitRecord>>) {
    let _ = (engine, results);
}
