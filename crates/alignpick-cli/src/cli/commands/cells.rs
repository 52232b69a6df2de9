//! Cells listing command handler.

use alignpick_core::Position;
use anyhow::Result;

pub fn run(json: bool) -> Result<()> {
    let labels: Vec<String> = Position::ALL.iter().map(|position| position.label()).collect();

    if json {
        println!("{}", serde_json::to_string(&labels)?);
    } else {
        for label in labels {
            println!("{label}");
        }
    }

    Ok(())
}
