#![cfg(test)]
use chrono::Days;
use soulchart_calendar::{table, ChineseCalendar};
use soulchart_common::calendar::{CalendarOracle, LunarDate};
use soulchart_common::error::CalendarError;
use soulchart_integration_tests::ymd;

#[test]
fn known_conversions() {
    let calendar = ChineseCalendar;
    let cases = [
        (ymd(2024, 2, 10), LunarDate::new(2024, 1, 1, false)),
        (ymd(2000, 1, 1), LunarDate::new(1999, 11, 25, false)),
        (ymd(1984, 12, 31), LunarDate::new(1984, 11, 10, false)),
        (ymd(2020, 5, 23), LunarDate::new(2020, 4, 1, true)),
        (ymd(2025, 7, 25), LunarDate::new(2025, 6, 1, true)),
    ];

    for (solar, lunar) in cases {
        assert_eq!(calendar.solar_to_lunar(solar).unwrap(), lunar, "{solar}");
        assert_eq!(calendar.lunar_to_solar(lunar).unwrap(), solar, "{lunar}");
    }
}

#[test]
fn month_after_a_leap_month() {
    let calendar = ChineseCalendar;
    assert_eq!(
        calendar.lunar_to_solar(LunarDate::new(2020, 5, 1, false)).unwrap(),
        ymd(2020, 6, 21)
    );
    assert_eq!(
        calendar.lunar_to_solar(LunarDate::new(2025, 7, 1, false)).unwrap(),
        ymd(2025, 8, 23)
    );
}

#[test]
fn sampled_round_trips_over_the_whole_table() {
    let calendar = ChineseCalendar;
    let mut day = ymd(1900, 1, 31);
    let last = ymd(2100, 12, 31);

    while day <= last {
        let lunar = calendar.solar_to_lunar(day).unwrap();
        assert_eq!(calendar.lunar_to_solar(lunar).unwrap(), day, "{lunar}");
        day = day + Days::new(37);
    }
}

#[test]
fn table_edges() {
    let calendar = ChineseCalendar;
    assert!(matches!(
        calendar.solar_to_lunar(ymd(1900, 1, 30)),
        Err(CalendarError::OutOfRange { .. })
    ));
    assert!(calendar.solar_to_lunar(ymd(2101, 1, 28)).is_ok());
    assert!(calendar.solar_to_lunar(ymd(2101, 1, 29)).is_err());
    assert!(!table::covers(2101));
    assert_eq!(table::leap_month(2023), Some(2));
    assert_eq!(table::leap_month(2024), None);
}

#[test]
fn day_thirty_of_a_short_month_rolls_forward() {
    let calendar = ChineseCalendar;
    let short = (1..=11)
        .find(|&month| table::month_days(2024, month) == 29)
        .unwrap();
    let thirtieth = calendar
        .lunar_to_solar(LunarDate::new(2024, short, 30, false))
        .unwrap();
    let next_first = calendar
        .lunar_to_solar(LunarDate::new(2024, short + 1, 1, false))
        .unwrap();
    assert_eq!(thirtieth, next_first);
}
