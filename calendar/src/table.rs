//! Packed lunar year table, 1900 to 2100.
//!
//! One entry per lunar year:
//! * bits 0-3: leap month number, 0 when the year has none.
//! * bits 4-15: month lengths, month 1 at bit 15 down to month 12 at bit 4 (set = 30 days).
//! * bit 16: leap month length (set = 30 days).

pub const FIRST_YEAR: i32 = 1900;
pub const LAST_YEAR: i32 = 2100;

const LEAP_MONTH_MASK: u32 = 0xf;
const LONG_LEAP_MONTH: u32 = 0x10000;
const LONG_MONTH_BASE: u32 = 0x10000;

#[rustfmt::skip]
static LUNAR_YEARS: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

fn entry(year: i32) -> Option<u32> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    LUNAR_YEARS.get((year - FIRST_YEAR) as usize).copied()
}

pub fn covers(year: i32) -> bool {
    entry(year).is_some()
}

/// The leap month of `year`, if it has one.
pub fn leap_month(year: i32) -> Option<u32> {
    entry(year)
        .map(|info| info & LEAP_MONTH_MASK)
        .filter(|&month| month != 0)
}

/// Length of the leap month of `year`, 0 when there is none.
pub fn leap_month_days(year: i32) -> u32 {
    match (leap_month(year), entry(year)) {
        (Some(_), Some(info)) if info & LONG_LEAP_MONTH != 0 => 30,
        (Some(_), Some(_)) => 29,
        _ => 0,
    }
}

/// Length of regular month `month` (1-12) of `year`, 0 outside the table.
pub fn month_days(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    match entry(year) {
        Some(info) if info & (LONG_MONTH_BASE >> month) != 0 => 30,
        Some(_) => 29,
        None => 0,
    }
}

pub fn year_days(year: i32) -> u32 {
    let regular: u32 = (1..=12).map(|month| month_days(year, month)).sum();
    regular + leap_month_days(year)
}

/// Months of `year` in calendar order as `(month, is_leap, days)`.
///
/// A leap month follows the regular month it duplicates.
pub fn months(year: i32) -> impl Iterator<Item = (u32, bool, u32)> {
    let leap = leap_month(year);
    (1..=12).flat_map(move |month| {
        let regular = (month, false, month_days(year, month));
        let intercalary = (leap == Some(month)).then(|| (month, true, leap_month_days(year)));
        std::iter::once(regular).chain(intercalary)
    })
}
