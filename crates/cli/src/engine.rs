use anyhow::{bail, Context, Result};

use zn_multiverse::config::MultiverseConfig;
use zn_multiverse::{Command, Multiverse, ResidueClass};

/// Upper bound on how many universes a custom seed catalog may create.
pub const MAX_SEEDED: i64 = 4_096;

/// How to build the multiverse a command inspects.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Start with no universes instead of the seed catalog.
    pub empty: bool,
    pub max_degree: Option<usize>,
    /// Overrides the seed catalog moduli.
    pub moduli: Option<Vec<i64>>,
    /// `a:n` universes added after seeding, in order.
    pub add: Vec<String>,
    /// `a:n` universes removed after the additions, in order.
    pub remove: Vec<String>,
}

/// Parses `a:n` into its residue and modulus.
pub fn parse_universe(spec: &str) -> Result<(i64, i64)> {
    let (a, n) = spec
        .split_once(':')
        .with_context(|| format!("Expected universe as a:n, got {:?}", spec))?;
    let a = a
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid residue in {:?}", spec))?;
    let n = n
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid modulus in {:?}", spec))?;
    Ok((a, n))
}

pub struct Session {
    pub multiverse: Multiverse,
    pub applied: Vec<Command>,
}

impl Session {
    pub fn new(opts: &SessionOptions) -> Result<Self> {
        let mut config = MultiverseConfig::default();
        if let Some(k) = opts.max_degree {
            config.max_out_degree = k;
        }
        if let Some(moduli) = &opts.moduli {
            // each modulus n seeds n universes
            let total = moduli
                .iter()
                .filter(|n| **n > 0)
                .fold(0i64, |acc, n| acc.saturating_add(*n));
            if !opts.empty && total > MAX_SEEDED {
                bail!(
                    "Seed moduli {:?} would create {} universes, limit is {}",
                    moduli,
                    total,
                    MAX_SEEDED
                );
            }
            config.seed_moduli = moduli.clone();
        }

        let multiverse = if opts.empty {
            Multiverse::with_config(config)
        } else {
            Multiverse::seeded_with(config).context("Failed to seed multiverse")?
        };
        tracing::info!("Multiverse ready with {} universes", multiverse.len());

        let mut session = Self {
            multiverse,
            applied: Vec::new(),
        };

        // FAIL-CLOSED: the first rejected mutation aborts the session.
        for spec in &opts.add {
            let (a, n) = parse_universe(spec)?;
            session.apply(Command::AddUniverse { a, n })?;
        }
        for spec in &opts.remove {
            let (a, n) = parse_universe(spec)?;
            session.apply(Command::RemoveUniverse { a, n })?;
        }

        Ok(session)
    }

    pub fn apply(&mut self, cmd: Command) -> Result<()> {
        self.multiverse
            .apply(&cmd)
            .with_context(|| format!("Failed to apply {:?}", cmd))?;
        self.applied.push(cmd);
        Ok(())
    }

    /// Resolves `[a]Z_n`, failing when it is invalid or not in the multiverse.
    pub fn universe(&self, a: i64, n: i64) -> Result<ResidueClass> {
        let universe = ResidueClass::new(a, n)?;
        if !self.multiverse.contains(&universe) {
            bail!("Universe {} does not exist in the multiverse", universe);
        }
        Ok(universe)
    }
}
