use serde::Serialize;

/// Switches shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Skips the banner line printed before the first header.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 prints only results.
    pub quiet: u8,
    /// Emits machine readable JSON instead of terminal tables.
    ///
    /// Logging still goes through the terminal formatter.
    pub json: bool,
}

impl Config {
    pub fn shows_headers(&self) -> bool {
        self.quiet == 0 && !self.json
    }
}

/// Sizes of the projection tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    /// Number of calendar years in the yearly table, starting at the birth year.
    pub yearly_span: u32,
    /// Columns per block when the yearly table is laid out.
    pub block_width: usize,
    pub months: u32,
    pub days: u32,
    /// Longest lunar month the daily table shows.
    pub lunar_day_limit: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            yearly_span: 100,
            block_width: 10,
            months: 12,
            days: 31,
            lunar_day_limit: 30,
        }
    }
}
