use std::time::Instant;

use anyhow::Context;
use colored::*;
use soulchart_calendar::ChineseCalendar;
use soulchart_common::config::{ChartOptions, Config};
use soulchart_common::model::chart::ChartReport;
use soulchart_core::ChartService;
use soulchart_core::sheet::Sheet;
use tracing::info;

use crate::terminal::{colors, print, table};

pub fn chart(name: &str, nickname: &str, birthday: &str, cfg: &Config) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let service = ChartService::new(Box::new(ChineseCalendar));
    let report = service
        .generate(name, nickname, birthday)
        .with_context(|| format!("could not build a chart for '{birthday}'"))?;

    if report.is_leap {
        info!("Birthday falls in a lunar leap month, adding a second page");
    }

    if cfg.json {
        print::print(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, service.options(), cfg);

    if cfg.shows_headers() {
        let pages = format!("{} page(s)", report.pages.len()).bold().green();
        let elapsed = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
        print::centerln(&format!("Chart complete: {pages} in {elapsed}"));
    }
    print::end_of_program(cfg);
    Ok(())
}

fn print_report(report: &ChartReport, options: &ChartOptions, cfg: &Config) {
    if cfg.shows_headers() {
        print::align_keys(&["Name", "Nickname", "Leap month"]);
        print::aligned_line("Name", format!("{} ({})", report.name, report.name_number));
        print::aligned_line(
            "Nickname",
            format!("{} ({})", report.nickname, report.nickname_number),
        );
        let leap = if report.is_leap { "yes" } else { "no" };
        print::aligned_line("Leap month", leap.color(colors::ACCENT));
    }

    let total = report.pages.len();
    for (idx, page) in report.pages.iter().enumerate() {
        print::header(&format!("page {} of {}", idx + 1, total), cfg);
        table::print_sheet(&Sheet::layout(report, page, options));
    }
}
