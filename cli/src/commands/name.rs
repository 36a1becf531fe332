use serde_json::json;
use soulchart_common::config::Config;
use soulchart_core::name::name_to_number;

use crate::terminal::print;

pub fn name(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let number = name_to_number(name);

    if cfg.json {
        print::print(&json!({ "nameNumber": number }).to_string());
        return Ok(());
    }

    print::align_keys(&["Name", "Number"]);
    print::aligned_line("Name", name);
    print::aligned_line("Number", number.to_string());
    print::end_of_program(cfg);
    Ok(())
}
