use anyhow::{bail, Context};

use zn_multiverse::ResidueClass;

/// Upper bound on how many members one call will list.
pub const MAX_LISTED: i128 = 1_000_000;

/// Comma-separated members of `[a]Z_n` within `[lower, upper]`.
pub fn render(a: i64, n: i64, lower: i64, upper: i64) -> anyhow::Result<String> {
    let universe = ResidueClass::new(a, n)?;
    let span = i128::from(upper) - i128::from(lower);
    if span / i128::from(n) > MAX_LISTED {
        bail!(
            "Range [{}, {}] holds more than {} members of {}",
            lower,
            upper,
            MAX_LISTED,
            universe
        );
    }
    let members = universe
        .generate(lower, upper)
        .with_context(|| format!("Cannot enumerate {}", universe))?;

    let listed: Vec<String> = members.iter().map(ToString::to_string).collect();
    Ok(format!(
        "{} ∩ [{}, {}]: {} members\n{}",
        universe,
        lower,
        upper,
        members.len(),
        listed.join(", ")
    ))
}

pub fn run(a: i64, n: i64, lower: i64, upper: i64) -> anyhow::Result<()> {
    println!("\n{}\n", render(a, n, lower, upper)?);
    Ok(())
}
