use anyhow::Context;
use serde_json::json;
use soulchart_common::config::Config;
use soulchart_core::reduce::life_password;

use crate::terminal::print;

pub fn trail(number: &str, cfg: &Config) -> anyhow::Result<()> {
    let trail = life_password(number).context("expected a string of decimal digits")?;

    if cfg.json {
        print::print(&json!({ "lifePassword": trail }).to_string());
        return Ok(());
    }

    print::align_keys(&["Number", "Trail"]);
    print::aligned_line("Number", number);
    print::aligned_line("Trail", trail.to_string());
    print::end_of_program(cfg);
    Ok(())
}
