#![cfg(test)]
use std::sync::atomic::Ordering;

use soulchart_calendar::ChineseCalendar;
use soulchart_common::calendar::LunarDate;
use soulchart_common::error::{CalendarError, ChartError};
use soulchart_core::name::name_to_number;
use soulchart_core::reduce::life_password;
use soulchart_core::sheet::Sheet;
use soulchart_core::ChartService;
use soulchart_integration_tests::{
    as_strings, degree_values, ymd, EmptyCalendar, ScriptedCalendar,
};

fn service() -> ChartService {
    ChartService::new(Box::new(ChineseCalendar))
}

#[test]
fn regular_birthday_full_page() {
    let report = service().generate("Tom", "", "20240929 1018").unwrap();
    assert!(!report.is_leap);
    assert_eq!(report.pages.len(), 1);

    let page = &report.pages[0];
    let solar = &page.solar;
    assert_eq!((solar.sums.year, solar.sums.month, solar.sums.day), (8, 9, 2));
    assert!(solar.more_than_two);
    assert_eq!(
        as_strings(&solar.stages),
        vec!["+8", "+17/8", "+19/10/1", "+20/2", "+29/11/2"]
    );
    assert_eq!(degree_values(&solar.degrees), [6, 5, 6, 6, 6]);

    let lunar = &page.lunar;
    assert_eq!(lunar.time.date_label(), "2024/08/27");
    assert_eq!(lunar.time.clock_label(), "10:18");
    assert_eq!((lunar.sums.year, lunar.sums.month, lunar.sums.day), (8, 8, 9));
    assert_eq!(
        as_strings(&lunar.stages),
        vec!["-8", "-16/7", "-25/7", "-26/8", "-35/8"]
    );
    assert_eq!(degree_values(&lunar.degrees), [6, 4, 5, 5, 4]);
}

#[test]
fn regular_birthday_grids() {
    let report = service().generate("", "", "20240929 1018").unwrap();
    let grids = &report.pages[0].grids;

    assert_eq!(
        as_strings(&grids.yearly.values.solar[..3]),
        vec!["+19/10/1", "+20/2", "+12/3"]
    );
    assert_eq!(grids.yearly.sequence[..3], [1, 2, 3]);
    assert_eq!(grids.yearly.years[..3], [2024, 2025, 2026]);
    assert_eq!(as_strings(&grids.monthly.solar[..2]), vec!["+11/2", "+12/3"]);
    assert_eq!(as_strings(&grids.daily.solar[..2]), vec!["+18/9", "+19/10/1"]);
    assert_eq!(grids.daily.solar.len(), 31);
    assert_eq!(grids.daily.lunar.len(), 30);
    assert_eq!(grids.daily.lunar[0].to_string(), "-17/8");
}

#[test]
fn leap_month_birthday_gives_two_pages() {
    let report = service().generate("", "", "20230401 0000").unwrap();
    assert!(report.is_leap);
    assert_eq!(report.pages.len(), 2);

    let first = &report.pages[0];
    assert_eq!(first.solar.time.date_label(), "2023/04/01");
    assert_eq!(first.lunar.time.date_label(), "2023/02/11");
    assert!(!first.solar.more_than_two);
    assert_eq!(
        as_strings(&first.solar.stages),
        vec!["+7", "+11/2", "+12/3", "+12/3", "+12/3"]
    );
    assert_eq!(degree_values(&first.solar.degrees), [7, 7, 7, 7, 7]);
    assert_eq!(degree_values(&first.lunar.degrees), [6, 1, 6, 6, 6]);

    let second = &report.pages[1];
    assert_eq!(second.solar.time.date_label(), "2023/04/30");
    assert_eq!(second.lunar.time.date_label(), "2023/03/11");
    assert_eq!(degree_values(&second.solar.degrees), [6, 4, 2, 2, 2]);
    assert_eq!(degree_values(&second.lunar.degrees), [6, 6, 6, 6, 6]);
}

#[test]
fn scripted_leap_month_asks_for_the_following_month() {
    let oracle = ScriptedCalendar::new(LunarDate::new(2020, 4, 1, true), Some(ymd(2020, 6, 21)));
    let service = ChartService::new(Box::new(oracle));

    let report = service.generate("", "", "20200523 1200").unwrap();
    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.pages[1].solar.time.to_string(), "2020/06/21 12:00");
    assert_eq!(report.pages[1].lunar.time.to_string(), "2020/05/01 12:00");
}

#[test]
fn scripted_regular_month_skips_the_reverse_lookup() {
    let oracle = ScriptedCalendar::new(LunarDate::new(2024, 8, 27, false), None);
    let duality = soulchart_core::resolver::resolve(&oracle, "20240929 1018".parse().unwrap())
        .unwrap();
    assert!(!duality.is_leap());
    assert!(duality.pairs().len() == 1);
    assert_eq!(oracle.to_lunar_calls.load(Ordering::SeqCst), 1);
    assert_eq!(oracle.to_solar_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn calendar_failures_surface_as_chart_errors() {
    let service = ChartService::new(Box::new(EmptyCalendar));
    let err = service.generate("", "", "20240929 1018").unwrap_err();
    assert_eq!(
        err,
        ChartError::Calendar(CalendarError::OutOfRange {
            year: 2024,
            month: 9,
            day: 29
        })
    );
    assert!(!err.is_input_error());

    let err = chart_error("18991231 0000");
    assert!(matches!(err, ChartError::Calendar(CalendarError::OutOfRange { .. })));
}

fn chart_error(birthday: &str) -> ChartError {
    service().generate("", "", birthday).unwrap_err()
}

#[test]
fn malformed_birthdays_are_rejected() {
    for birthday in ["", "20240929", "2024-09-29 10:18", "20240230 1000", "20240929 2500"] {
        let err = chart_error(birthday);
        assert!(err.is_input_error(), "{birthday:?} gave {err}");
    }
}

#[test]
fn report_serializes_labels_as_strings() {
    let report = service().generate("Tom", "", "20240929 1018").unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["name_number"], "20/2");
    assert_eq!(value["is_leap"], false);
    assert_eq!(value["pages"][0]["solar"]["stages"][2], "+19/10/1");
    assert_eq!(value["pages"][0]["solar"]["degrees"][0], 6);
    assert_eq!(value["pages"][0]["solar"]["digits"]["2"], 4);
    assert_eq!(value["pages"][0]["solar"]["track"], "solar");
}

#[test]
fn sheets_cover_every_page() {
    let report = service().generate("", "", "20230401 0000").unwrap();
    let sheets = Sheet::from_report(&report);
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1].tables[0].columns[1].header, "2023/04/30");
}

#[test]
fn standalone_trail_and_names() {
    assert_eq!(life_password("38").unwrap().to_string(), "11/2");
    assert_eq!(life_password(&"9".repeat(30)).unwrap().to_string(), "270/9");
    assert_eq!(
        life_password("12a"),
        Err(ChartError::InvalidNumber("12a".to_string()))
    );

    assert_eq!(name_to_number("Tom").to_string(), "20/2");
    assert_eq!(name_to_number("Mary Jane").to_string(), "22/4");
    assert_eq!(name_to_number("O'Brien 2").to_string(), "24/6");
    assert_eq!(name_to_number("").to_string(), "0");
}
