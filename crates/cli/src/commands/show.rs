use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::engine::{Session, SessionOptions};

/// Adjacency table: one row per universe, in enumeration order.
pub fn render(session: &Session) -> String {
    let multiverse = &session.multiverse;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Universe", "Out", "Neighbors"]);

    for universe in multiverse.vertices() {
        let neighbors = multiverse.neighbors(universe);
        let listed: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
        table.add_row(vec![
            universe.to_string(),
            neighbors.len().to_string(),
            listed.join(", "),
        ]);
    }

    format!(
        "{table}\n{} universes, {} edges (max out-degree {})",
        multiverse.len(),
        multiverse.graph().edge_count(),
        multiverse.config().max_out_degree
    )
}

pub fn run(opts: &SessionOptions) -> anyhow::Result<()> {
    let session = Session::new(opts)?;

    println!("\nMultiverse");
    println!("----------");
    println!("{}\n", render(&session));

    Ok(())
}
