//! Integration tests for the weton congruence.
//!
//! Pinned fixtures plus a weekday cross-check against chrono's proleptic
//! Gregorian calendar.

use chrono::{Datelike, NaiveDate};
use weton_calc::{
    ALL_DINAS, CalendarDate, Dina, Pasaran, Weton, weton, weton_from_date, weton_key,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[test]
fn fixed_dates() {
    let cases = [
        ((17, 8, 1945), Dina::Jemuwah, Pasaran::Legi),
        ((10, 11, 1945), Dina::Setu, Pasaran::Legi),
        ((1, 1, 1999), Dina::Jemuwah, Pasaran::Legi),
        ((2, 10, 2009), Dina::Jemuwah, Pasaran::Pon),
        ((25, 12, 2023), Dina::Senen, Pasaran::Kliwon),
        ((1, 1, 2024), Dina::Senen, Pasaran::Pahing),
        ((29, 2, 2024), Dina::Kemis, Pasaran::Legi),
        ((1, 3, 2024), Dina::Jemuwah, Pasaran::Pahing),
    ];
    for ((d, m, y), dina, pasaran) in cases {
        assert_eq!(weton(d, m, y), Weton { dina, pasaran }, "{d}/{m}/{y}");
    }
}

#[test]
fn day_zero_is_previous_day() {
    // "0" from lenient parsing: 0 Aug 1945 behaves as 31 Jul 1945
    assert_eq!(weton(0, 8, 1945), weton(31, 7, 1945));
    assert_eq!(weton(0, 8, 1945).to_string(), "Selasa Wage");
}

#[test]
fn out_of_range_components_are_total() {
    assert_eq!(weton(0, 0, 0).to_string(), "Rebo Kliwon");
    assert_eq!(weton(-5, 3, 2020).to_string(), "Senen Kliwon");
    let _ = weton(i32::MIN, i32::MAX, i32::MIN);
}

#[test]
fn quadricentennial_january_follows_formula() {
    // True weekday of 1 Jan 2000 is Saturday; the two-digit borrow puts it a day later
    assert_eq!(weton(1, 1, 2000).dina, Dina::Ngahad);
    assert_eq!(weton(1, 3, 2000).dina, Dina::Rebo);
}

// ---------------------------------------------------------------------------
// Calendar cross-checks
// ---------------------------------------------------------------------------

fn to_calendar_date(date: NaiveDate) -> CalendarDate {
    CalendarDate::new(date.day() as i32, date.month() as i32, date.year())
}

/// January/February of a year divisible by 400 (see the congruence module docs).
fn in_borrow_gap(date: NaiveDate) -> bool {
    date.month() < 3 && date.year() % 400 == 0
}

#[test]
fn weekday_matches_gregorian_calendar() {
    let start = NaiveDate::from_ymd_opt(1600, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2400, 12, 31).unwrap();
    for date in start.iter_days().take_while(|d| *d <= end) {
        if in_borrow_gap(date) {
            continue;
        }
        let w = weton_from_date(to_calendar_date(date));
        let expected = ALL_DINAS[date.weekday().num_days_from_monday() as usize];
        assert_eq!(w.dina, expected, "{date}");
    }
}

#[test]
fn consecutive_days_advance_one_step_in_35_day_cycle() {
    let start = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
    let mut prev = start;
    for date in start.iter_days().skip(1).take_while(|d| *d <= end) {
        if !in_borrow_gap(prev) && !in_borrow_gap(date) {
            let step = weton_key(to_calendar_date(date)) - weton_key(to_calendar_date(prev));
            assert_eq!(step.rem_euclid(35), 1, "{prev} -> {date}");

            let a = weton_from_date(to_calendar_date(prev));
            let b = weton_from_date(to_calendar_date(date));
            assert_eq!(a.dina.next(), b.dina, "{prev} -> {date}");
            assert_eq!(a.pasaran.next(), b.pasaran, "{prev} -> {date}");
        }
        prev = date;
    }
}

#[test]
fn every_combination_within_35_days() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut seen: Vec<Weton> = start
        .iter_days()
        .take(35)
        .map(|d| weton_from_date(to_calendar_date(d)))
        .collect();
    seen.sort_by_key(|w| (w.dina.index(), w.pasaran.index()));
    seen.dedup();
    assert_eq!(seen.len(), 35);
}
