use chrono::{NaiveDate, NaiveDateTime};

use crate::{has_overlap, DateTimePair};

fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

fn period(start: NaiveDateTime, end: NaiveDateTime) -> DateTimePair {
    DateTimePair::new(start, end)
}

#[test]
fn disjoint_periods_do_not_overlap() {
    let first = [period(day(2024, 1, 1), day(2024, 1, 10))];
    let second = [period(day(2024, 1, 11), day(2024, 1, 20))];
    assert!(!has_overlap(&first, &second));
}

#[test]
fn partial_containing_and_contained_periods_overlap() {
    let first = [period(day(2024, 1, 1), day(2024, 1, 10))];
    let cases = [
        period(day(2024, 1, 5), day(2024, 1, 15)),
        period(day(2023, 1, 10), day(2025, 1, 20)),
        period(day(2024, 1, 2), day(2024, 1, 8)),
        period(day(2023, 12, 20), day(2024, 1, 1)),
    ];
    for second in cases {
        assert!(has_overlap(&first, &[second]), "{second:?}");
    }
}

#[test]
fn any_pair_is_enough() {
    let first = [
        period(day(2024, 1, 1), day(2024, 1, 10)),
        period(day(2024, 3, 1), day(2024, 3, 10)),
    ];
    let second = [
        period(day(2024, 2, 1), day(2024, 2, 10)),
        period(day(2024, 3, 9), day(2024, 4, 1)),
    ];
    assert!(has_overlap(&first, &second));
    assert!(has_overlap(&second, &first));
}

#[test]
fn empty_lists_never_overlap() {
    let first = [period(day(2024, 1, 1), day(2024, 1, 10))];
    assert!(!has_overlap(&first, &[]));
    assert!(!has_overlap(&[], &first));
}
