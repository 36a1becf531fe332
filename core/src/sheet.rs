//! # Sheet Model
//!
//! Renderer-facing layout of one chart page. A [`Sheet`] is an ordered list of [`Table`]s
//! whose cells carry their own text color. Nothing here knows how the tables end up on
//! screen or paper.

use serde::Serialize;

use soulchart_common::config::ChartOptions;
use soulchart_common::model::chart::{Chart, ChartPage, ChartReport, TrackColumns};
use soulchart_common::model::stage::{LifeStage, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const SOLAR: Rgb = Rgb(0, 0, 128);
    pub const LUNAR: Rgb = Rgb(180, 130, 255);
    pub const HEADER: Rgb = Rgb(187, 255, 255);

    /// Text color of a calendar track.
    pub fn track(sign: Sign) -> Self {
        match sign {
            Sign::Solar => Rgb::SOLAR,
            Sign::Lunar => Rgb::LUNAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    /// Minimum width in character cells.
    pub width: usize,
    pub align: Align,
}

impl Column {
    fn centered(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub color: Rgb,
}

impl Cell {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn blank() -> Self {
        Self::new("", Rgb::BLACK)
    }
}

/// Palette of a monthly or daily table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: Rgb,
    pub solar: Rgb,
    pub lunar: Rgb,
}

pub const MONTHLY_PALETTE: Palette = Palette {
    header: Rgb(255, 246, 143),
    solar: Rgb(139, 40, 19),
    lunar: Rgb(139, 117, 0),
};

pub const DAILY_PALETTE: Palette = Palette {
    header: Rgb(193, 255, 193),
    solar: Rgb(0, 50, 0),
    lunar: Rgb(34, 139, 34),
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub header_fill: Rgb,
    pub font_size: f32,
}

impl Table {
    fn new(title: impl Into<String>, columns: Vec<Column>, header_fill: Rgb, font_size: f32) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
            header_fill,
            font_size,
        }
    }

    fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// All tables of one page, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub tables: Vec<Table>,
}

const MAIN_FONT: f32 = 8.5;
const YEARLY_FONT: f32 = 9.0;
const LEFT_COLUMN: usize = 9;
const STAGE_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 9;

impl Sheet {
    /// Lays out one page of `report` with the default yearly block width.
    pub fn from_page(report: &ChartReport, page: &ChartPage) -> Self {
        Self::layout(report, page, &ChartOptions::default())
    }

    pub fn layout(report: &ChartReport, page: &ChartPage, options: &ChartOptions) -> Self {
        let mut tables = vec![time_header(page)];
        tables.push(stage_table(&page.solar));
        tables.push(stage_table(&page.lunar));
        tables.extend(yearly_tables(page, options.block_width.max(1)));
        tables.push(name_table(report));
        tables.push(projection_table(
            "Monthly",
            "Month",
            &page.grids.monthly,
            MONTHLY_PALETTE,
        ));
        tables.push(projection_table(
            "Daily",
            "Day",
            &page.grids.daily,
            DAILY_PALETTE,
        ));

        Self { tables }
    }

    /// One sheet per page, in page order.
    pub fn from_report(report: &ChartReport) -> Vec<Self> {
        report
            .pages
            .iter()
            .map(|page| Self::from_page(report, page))
            .collect()
    }
}

fn time_header(page: &ChartPage) -> Table {
    let solar = &page.solar.time;
    let lunar = &page.lunar.time;
    let columns = vec![
        Column::centered("Solar time:", 12),
        Column::centered(solar.date_label(), 12),
        Column::centered(solar.clock_label(), 7),
        Column {
            header: "Lunar time:".into(),
            width: 12,
            align: Align::Right,
        },
        Column::centered(lunar.date_label(), 12),
        Column {
            header: lunar.clock_label(),
            width: 7,
            align: Align::Left,
        },
    ];

    Table::new("Birth time", columns, Rgb::HEADER, 9.0)
}

fn stage_table(chart: &Chart) -> Table {
    let color = Rgb::track(chart.track);
    let columns = LifeStage::ALL
        .iter()
        .map(|stage| Column::centered(stage.title(), STAGE_WIDTH))
        .collect();
    let title = match chart.track {
        Sign::Solar => "Solar stages",
        Sign::Lunar => "Lunar stages",
    };

    let mut table = Table::new(title, columns, Rgb::WHITE, MAIN_FONT);
    let (labels, degrees): (Vec<Cell>, Vec<Cell>) = chart
        .stage_rows()
        .map(|(_, label, degree)| {
            (
                Cell::new(label.to_string(), color),
                Cell::new(degree.to_string(), color),
            )
        })
        .unzip();
    table.push_row(labels);
    table.push_row(degrees);
    table
}

fn yearly_tables(page: &ChartPage, width: usize) -> Vec<Table> {
    let yearly = &page.grids.yearly;
    let row_head = |text: &str| Cell::new(text, Rgb::BLACK);

    yearly
        .sequence
        .chunks(width)
        .zip(yearly.years.chunks(width))
        .zip(yearly.values.solar.chunks(width))
        .zip(yearly.values.lunar.chunks(width))
        .map(|(((ages, years), solar), lunar)| {
            let first = ages.first().copied().unwrap_or_default();
            let last = ages.last().copied().unwrap_or_default();

            let mut columns = vec![Column::centered("Age", LEFT_COLUMN)];
            columns.extend(ages.iter().map(|age| Column::centered(age.to_string(), VALUE_WIDTH)));

            let mut table = Table::new(
                format!("Years {first}-{last}"),
                columns,
                Rgb::WHITE,
                YEARLY_FONT,
            );

            let mut year_row = vec![row_head("Year")];
            year_row.extend(years.iter().map(|year| Cell::new(year.to_string(), Rgb::BLACK)));
            table.push_row(year_row);

            let mut solar_row = vec![row_head("Solar")];
            solar_row.extend(solar.iter().map(|v| Cell::new(v.to_string(), Rgb::SOLAR)));
            table.push_row(solar_row);

            let mut lunar_row = vec![row_head("Lunar")];
            lunar_row.extend(lunar.iter().map(|v| Cell::new(v.to_string(), Rgb::LUNAR)));
            table.push_row(lunar_row);

            table
        })
        .collect()
}

fn name_table(report: &ChartReport) -> Table {
    let columns = vec![
        Column::centered("", LEFT_COLUMN),
        Column {
            header: "Name".into(),
            width: 20,
            align: Align::Left,
        },
        Column {
            header: "Number".into(),
            width: 8,
            align: Align::Right,
        },
    ];

    let mut table = Table::new("Names", columns, Rgb::WHITE, YEARLY_FONT);
    let entries = [
        ("Passport", &report.name, &report.name_number),
        ("Nickname", &report.nickname, &report.nickname_number),
    ];
    for (kind, name, number) in entries {
        table.push_row(vec![
            Cell::new(kind, Rgb::BLACK),
            Cell::new(name.as_str(), Rgb::BLACK),
            Cell::new(number.to_string(), Rgb::BLACK),
        ]);
    }
    table
}

/// Monthly and daily tables: the axis value next to both tracks.
///
/// The lunar column may be shorter than the axis; missing cells stay blank.
fn projection_table(title: &str, axis: &str, values: &TrackColumns, palette: Palette) -> Table {
    let columns = vec![
        Column::centered(axis, 6),
        Column::centered("Solar", VALUE_WIDTH),
        Column::centered("Lunar", VALUE_WIDTH),
    ];
    let mut table = Table::new(title, columns, palette.header, MAIN_FONT);

    for (idx, solar) in values.solar.iter().enumerate() {
        let lunar = values
            .lunar
            .get(idx)
            .map_or_else(Cell::blank, |v| Cell::new(v.to_string(), palette.lunar));
        table.push_row(vec![
            Cell::new((idx + 1).to_string(), Rgb::BLACK),
            Cell::new(solar.to_string(), palette.solar),
            lunar,
        ]);
    }
    table
}
