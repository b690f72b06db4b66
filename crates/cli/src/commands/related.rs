use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::engine::{Session, SessionOptions};

pub fn render(session: &Session, a: i64, n: i64) -> anyhow::Result<String> {
    let universe = session.universe(a, n)?;
    let graph = session.multiverse.graph();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Universe", "Direction"]);

    let related = session.multiverse.related(&universe);
    for other in &related {
        let direction = match (graph.has_edge(other, &universe), graph.has_edge(&universe, other)) {
            (true, true) => "both",
            (true, false) => "incoming",
            _ => "outgoing",
        };
        table.add_row(vec![other.to_string(), direction.to_string()]);
    }

    Ok(format!(
        "{} universes related to {}\n{table}",
        related.len(),
        universe
    ))
}

pub fn run(opts: &SessionOptions, a: i64, n: i64) -> anyhow::Result<()> {
    let session = Session::new(opts)?;
    println!("\n{}\n", render(&session, a, n)?);
    Ok(())
}
