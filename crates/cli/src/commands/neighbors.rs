use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::engine::{Session, SessionOptions};

pub fn render(session: &Session, a: i64, n: i64) -> anyhow::Result<String> {
    let universe = session.universe(a, n)?;
    let summary = session.multiverse.describe(&universe)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Neighbor", "Modulus Ratio"]);

    for (i, neighbor) in session.multiverse.neighbors(&universe).iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            neighbor.to_string(),
            format!("{}/{}", neighbor.modulus(), universe.modulus()),
        ]);
    }

    Ok(format!("{summary}\n{table}"))
}

pub fn run(opts: &SessionOptions, a: i64, n: i64) -> anyhow::Result<()> {
    let session = Session::new(opts)?;
    println!("\n{}\n", render(&session, a, n)?);
    Ok(())
}
