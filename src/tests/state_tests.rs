// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::MultiverseConfig;
use crate::error::MultiverseError;
use crate::graph::Edge;
use crate::state::{Command, Multiverse};
use crate::types::ResidueClass;

fn z(a: i64, n: i64) -> ResidueClass {
    ResidueClass::new(a, n).unwrap()
}

fn neighbors(m: &Multiverse, u: ResidueClass) -> Vec<ResidueClass> {
    m.neighbors(&u).iter().copied().collect()
}

fn edge_list(m: &Multiverse) -> Vec<Edge<ResidueClass>> {
    m.graph().edges().iter().copied().collect()
}

#[test]
fn test_connection_rule_example() {
    let mut m = Multiverse::new();
    m.add_universe(0, 2).unwrap();
    m.add_universe(0, 4).unwrap();
    m.add_universe(2, 4).unwrap();

    // [2]Z4 lies inside [0]Z2 (2 ≡ 0 mod 2), so both refinements qualify.
    assert_eq!(neighbors(&m, z(0, 2)), vec![z(0, 4), z(2, 4)]);
    // 2 is not a multiple of 4
    assert!(!m.graph().has_edge(&z(0, 4), &z(0, 2)));
    assert!(neighbors(&m, z(0, 4)).is_empty());
    assert!(neighbors(&m, z(2, 4)).is_empty());
}

#[test]
fn test_rule_is_directed() {
    let mut m = Multiverse::new();
    m.add_universe(1, 3).unwrap();
    m.add_universe(4, 6).unwrap();
    m.add_universe(1, 6).unwrap();

    assert!(m.graph().has_edge(&z(1, 3), &z(4, 6)));
    assert!(!m.graph().has_edge(&z(4, 6), &z(1, 3)));
    // distinct classes of one modulus never connect
    assert!(!m.graph().has_edge(&z(4, 6), &z(1, 6)));
}

#[test]
fn test_seeded_catalog() {
    let m = Multiverse::seeded().unwrap();
    assert_eq!(m.len(), 2 + 3 + 4 + 6 + 8 + 9 + 12);

    let first: Vec<ResidueClass> = m.vertices().take(3).copied().collect();
    assert_eq!(first, vec![z(0, 2), z(1, 2), z(0, 3)]);
}

#[test]
fn test_out_degree_cap_follows_enumeration_order() {
    let m = Multiverse::seeded().unwrap();

    assert_eq!(
        neighbors(&m, z(0, 2)),
        vec![z(0, 4), z(2, 4), z(0, 6), z(2, 6), z(4, 6), z(0, 8)]
    );
    assert_eq!(
        neighbors(&m, z(0, 3)),
        vec![z(0, 6), z(3, 6), z(0, 9), z(3, 9), z(6, 9), z(0, 12)]
    );
    for u in m.vertices() {
        assert!(m.neighbors(u).len() <= 6, "{} exceeds cap", u);
        assert!(!m.graph().has_edge(u, u));
    }
}

#[test]
fn test_configured_cap() {
    let config = MultiverseConfig {
        max_out_degree: 2,
        ..MultiverseConfig::default()
    };
    let m = Multiverse::seeded_with(config).unwrap();
    assert_eq!(neighbors(&m, z(0, 2)), vec![z(0, 4), z(2, 4)]);
}

#[test]
fn test_add_duplicate_rejected() {
    let mut m = Multiverse::seeded().unwrap();
    let before = edge_list(&m);

    assert_eq!(
        m.add_universe(0, 2),
        Err(MultiverseError::DuplicateVertex { a: 0, n: 2 })
    );
    assert_eq!(m.len(), 44);
    assert_eq!(edge_list(&m), before);
}

#[test]
fn test_add_invalid_universe() {
    let mut m = Multiverse::new();
    assert_eq!(m.add_universe(0, 1), Err(MultiverseError::InvalidModulus(1)));
    assert_eq!(m.add_universe(5, 5), Err(MultiverseError::OutOfRange { a: 5, n: 5 }));
    assert!(m.is_empty());
}

#[test]
fn test_add_recomputes_existing_sources() {
    let mut m = Multiverse::new();
    m.add_universe(0, 2).unwrap();
    assert!(neighbors(&m, z(0, 2)).is_empty());

    m.add_universe(4, 8).unwrap();
    assert_eq!(neighbors(&m, z(0, 2)), vec![z(4, 8)]);
}

#[test]
fn test_remove_matches_rebuild_from_scratch() {
    let mut m = Multiverse::seeded().unwrap();
    assert!(m.remove_universe(0, 4).unwrap());
    assert!(!m.contains(&z(0, 4)));
    for u in m.vertices() {
        assert!(!m.graph().has_edge(u, &z(0, 4)));
    }
    assert_eq!(
        neighbors(&m, z(0, 2)),
        vec![z(2, 4), z(0, 6), z(2, 6), z(4, 6), z(0, 8), z(2, 8)]
    );

    let mut fresh = Multiverse::new();
    for u in m.vertices() {
        fresh.add(*u).unwrap();
    }
    assert_eq!(edge_list(&fresh), edge_list(&m));

    m.recompute_edges();
    assert_eq!(edge_list(&fresh), edge_list(&m));
}

#[test]
fn test_remove_absent_and_invalid() {
    let mut m = Multiverse::new();
    m.add_universe(0, 2).unwrap();

    assert_eq!(m.remove_universe(1, 2), Ok(false));
    assert_eq!(m.remove_universe(0, 1), Err(MultiverseError::InvalidModulus(1)));
    assert_eq!(m.len(), 1);
}

#[test]
fn test_remove_orbit() {
    let mut m = Multiverse::seeded().unwrap();
    assert_eq!(m.remove_orbit(4).unwrap(), 4);
    assert_eq!(m.len(), 40);
    assert!(m.vertices().all(|u| u.modulus() != 4));
    assert_eq!(
        neighbors(&m, z(0, 2)),
        vec![z(0, 6), z(2, 6), z(4, 6), z(0, 8), z(2, 8), z(4, 8)]
    );

    assert_eq!(m.remove_orbit(5).unwrap(), 0);
    assert_eq!(m.remove_orbit(1), Err(MultiverseError::InvalidModulus(1)));
}

#[test]
fn test_related() {
    let m = Multiverse::seeded().unwrap();
    let related: Vec<ResidueClass> = m.related(&z(0, 4)).iter().copied().collect();
    assert_eq!(
        related,
        vec![z(0, 2), z(0, 8), z(4, 8), z(0, 12), z(4, 12), z(8, 12)]
    );
}

#[test]
fn test_related_is_symmetric() {
    let m = Multiverse::seeded().unwrap();
    for v in m.vertices() {
        for w in &m.related(v) {
            assert!(m.related(w).contains(v), "{} related to {} but not back", v, w);
        }
    }
}

#[test]
fn test_describe() {
    let mut m = Multiverse::new();
    m.add_universe(0, 2).unwrap();
    m.add_universe(2, 4).unwrap();

    assert_eq!(m.describe(&z(0, 2)).unwrap(), "[0]ℤ2 --> ([[2]ℤ4])");
    assert_eq!(m.describe(&z(1, 2)), Err(MultiverseError::KeyNotFound));
}

#[test]
fn test_apply_commands() {
    let mut m = Multiverse::new();
    let cmds = [
        Command::AddUniverse { a: 0, n: 3 },
        Command::AddUniverse { a: 3, n: 6 },
        Command::AddUniverse { a: 0, n: 6 },
        Command::RemoveUniverse { a: 3, n: 6 },
        Command::Recompute,
    ];
    for cmd in &cmds {
        m.apply(cmd).unwrap();
    }
    assert_eq!(neighbors(&m, z(0, 3)), vec![z(0, 6)]);

    m.apply(&Command::RemoveOrbit { n: 6 }).unwrap();
    assert_eq!(m.len(), 1);

    let res = m.apply(&Command::AddUniverse { a: 0, n: 3 });
    assert_eq!(res, Err(MultiverseError::DuplicateVertex { a: 0, n: 3 }));
}

#[test]
fn test_seed_validates_first() {
    let mut m = Multiverse::new();
    assert_eq!(m.seed(&[2, 1]), Err(MultiverseError::InvalidModulus(1)));
    assert!(m.is_empty());

    assert_eq!(m.seed(&[2, 4]).unwrap(), 6);
    assert_eq!(m.seed(&[4]).unwrap(), 0);
}
