// tests/projection.rs
use f1_live::standings::{
    ExactOnly, ProjectionError, SessionType, StandingsEntry, project, project_with, schedule, unmatched,
};
use proptest::prelude::*;

fn two_drivers() -> Vec<StandingsEntry> {
    vec![
        StandingsEntry::new(1, "A", "T1", 10),
        StandingsEntry::new(2, "B", "T2", 8),
    ]
}

#[test]
fn race_order_swaps_the_leader() {
    let out = project(&two_drivers(), &["B", "A"], SessionType::Race).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].driver_name, "B");
    assert_eq!((out[0].session_points, out[0].projected_total), (25, 33));
    assert_eq!((out[0].original_position, out[0].new_position, out[0].position_delta), (2, 1, 1));

    assert_eq!(out[1].driver_name, "A");
    assert_eq!((out[1].session_points, out[1].projected_total), (18, 28));
    assert_eq!((out[1].original_position, out[1].new_position, out[1].position_delta), (1, 2, -1));
}

#[test]
fn empty_order_passes_standings_through() {
    let standings = two_drivers();
    let out = project::<&str>(&standings, &[], SessionType::Race).unwrap();

    assert_eq!(out.len(), standings.len());
    for (p, s) in out.iter().zip(&standings) {
        assert_eq!(p.driver_name, s.driver_name);
        assert_eq!(p.session_points, 0);
        assert_eq!(p.projected_total, s.current_points);
        assert_eq!(p.new_position, s.position);
        assert_eq!(p.position_delta, 0);
    }
}

#[test]
fn unknown_names_contribute_nothing() {
    let standings = two_drivers();
    let out = project(&standings, &["Z", "A"], SessionType::Race).unwrap();

    // "Z" holds rank 1 but matches nobody; A still gets rank-2 points.
    let a = out.iter().find(|e| e.driver_name == "A").unwrap();
    let b = out.iter().find(|e| e.driver_name == "B").unwrap();
    assert_eq!(a.session_points, 18);
    assert_eq!(b.session_points, 0);
    assert_eq!(unmatched(&ExactOnly, &standings, &["Z", "A"]), vec!["Z"]);
}

#[test]
fn sprint_pays_only_the_top_eight() {
    let standings: Vec<StandingsEntry> = (1..=9)
        .map(|i| StandingsEntry::new(i, &format!("Driver {}", (b'A' + i as u8 - 1) as char), "T", 0))
        .collect();
    let order: Vec<String> = standings.iter().map(|e| e.driver_name.clone()).collect();

    let out = project(&standings, &order, SessionType::Sprint).unwrap();
    let ninth = out.iter().find(|e| e.driver_name == "Driver I").unwrap();
    assert_eq!(ninth.session_points, 0);
    let pts: Vec<u32> = out.iter().map(|e| e.session_points).collect();
    assert_eq!(pts, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn pointless_session_is_a_pass_through() {
    let out = project(&two_drivers(), &["B", "A"], SessionType::Other).unwrap();
    assert!(out.iter().all(|e| e.session_points == 0 && e.position_delta == 0));
    assert_eq!(out[0].driver_name, "A");
}

#[test]
fn feed_style_names_resolve() {
    let standings = vec![
        StandingsEntry::new(1, "Sergio Pérez", "Red Bull", 100),
        StandingsEntry::new(2, "Nico Hülkenberg", "Haas", 90),
    ];
    let out = project(&standings, &["HULKENBERG", "perez"], SessionType::Race).unwrap();
    assert_eq!(out[0].driver_name, "Sergio Pérez");
    assert_eq!((out[0].session_points, out[0].projected_total), (18, 118));
    assert_eq!(out[1].driver_name, "Nico Hülkenberg");
    assert_eq!((out[1].session_points, out[1].projected_total), (25, 115));
}

#[test]
fn strict_matcher_ignores_partial_names() {
    let standings = two_drivers();
    let out = project_with(&ExactOnly, &standings, &["b"], SessionType::Race).unwrap();
    assert_eq!(out.iter().find(|e| e.driver_name == "B").unwrap().session_points, 25);

    let standings = vec![StandingsEntry::new(1, "Lando Norris", "McLaren", 0)];
    let out = project_with(&ExactOnly, &standings, &["Norris"], SessionType::Race).unwrap();
    assert_eq!(out[0].session_points, 0);
}

#[test]
fn contract_violations_are_errors() {
    let dup = vec![
        StandingsEntry::new(1, "Max Verstappen", "RB", 10),
        StandingsEntry::new(2, "MAX VERSTAPPEN", "RB", 9),
    ];
    assert!(matches!(
        project(&dup, &["x"], SessionType::Race),
        Err(ProjectionError::DuplicateDriver(_))
    ));

    let no_pos = vec![StandingsEntry::new(0, "A", "T", 1)];
    assert_eq!(
        project::<&str>(&no_pos, &[], SessionType::Race),
        Err(ProjectionError::MissingField { row: 0, field: "position" })
    );

    let no_name = vec![StandingsEntry::new(1, "  ", "T", 1)];
    assert!(matches!(
        project::<&str>(&no_name, &[], SessionType::Race),
        Err(ProjectionError::MissingField { field: "driver", .. })
    ));
}

#[test]
fn totals_past_u32_are_an_error() {
    let standings = vec![
        StandingsEntry::new(1, "A", "T1", u32::MAX),
        StandingsEntry::new(2, "B", "T2", 0),
    ];
    assert_eq!(
        project(&standings, &["A"], SessionType::Race),
        Err(ProjectionError::PointsOverflow { driver: "A".into() })
    );

    // no points awarded, nothing to overflow
    let out = project::<&str>(&standings, &[], SessionType::Race).unwrap();
    assert_eq!(out[0].projected_total, u32::MAX);
    let out = project(&standings, &["B"], SessionType::Race).unwrap();
    assert_eq!(out[0].driver_name, "A");
    assert_eq!(out[1].projected_total, 25);
}

#[test]
fn positions_must_be_one_to_n() {
    let repeated = vec![
        StandingsEntry::new(1, "A", "T1", 10),
        StandingsEntry::new(1, "B", "T2", 8),
    ];
    assert_eq!(
        project(&repeated, &["A"], SessionType::Race),
        Err(ProjectionError::BadPosition { row: 1, position: 1, count: 2 })
    );

    let gap = vec![
        StandingsEntry::new(1, "A", "T1", 10),
        StandingsEntry::new(7, "B", "T2", 8),
    ];
    assert_eq!(
        project::<&str>(&gap, &[], SessionType::Race),
        Err(ProjectionError::BadPosition { row: 1, position: 7, count: 2 })
    );
}

#[test]
fn unsorted_standings_come_out_in_rank_order() {
    let shuffled = vec![
        StandingsEntry::new(2, "B", "T2", 8),
        StandingsEntry::new(1, "A", "T1", 10),
    ];
    let out = project::<&str>(&shuffled, &[], SessionType::Race).unwrap();
    let seen: Vec<(&str, u32)> = out.iter().map(|e| (e.driver_name.as_str(), e.new_position)).collect();
    assert_eq!(seen, vec![("A", 1), ("B", 2)]);

    // ties fall back to standings rank, not input order
    let tied = vec![
        StandingsEntry::new(2, "B", "T2", 10),
        StandingsEntry::new(1, "A", "T1", 10),
    ];
    let out = project(&tied, &["Z"], SessionType::Race).unwrap();
    assert_eq!(out[0].driver_name, "A");
    assert!(out.iter().all(|e| e.position_delta == 0));
}

#[test]
fn repeated_driver_keeps_best_rank() {
    let out = project(&two_drivers(), &["A", "B", "A"], SessionType::Race).unwrap();
    assert_eq!(out[0].driver_name, "A");
    assert_eq!(out[0].session_points, 25);
    assert_eq!(out[1].session_points, 18);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const SURNAMES: [&str; 20] = [
    "Verstappen", "Norris", "Leclerc", "Piastri", "Sainz", "Hamilton", "Russell",
    "Perez", "Alonso", "Hulkenberg", "Tsunoda", "Stroll", "Ricciardo", "Gasly",
    "Magnussen", "Albon", "Ocon", "Zhou", "Bottas", "Sargeant",
];

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_session() -> impl Strategy<Value = SessionType> {
    proptest::sample::select(SessionType::ALL.to_vec())
}

/// Standings with positions 1..=n plus a running order drawn from a
/// shuffled prefix of those drivers.
fn arb_case() -> impl Strategy<Value = (Vec<StandingsEntry>, Vec<String>, SessionType)> {
    (1usize..=20)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(0u32..60, n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                0..=n,
                arb_session(),
            )
        })
        .prop_map(|(points, shuffled, k, session)| {
            let mut points = points;
            points.sort_unstable_by(|a, b| b.cmp(a));
            let standings: Vec<StandingsEntry> = points
                .iter()
                .enumerate()
                .map(|(i, &p)| StandingsEntry::new(i as u32 + 1, SURNAMES[i], "Team", p))
                .collect();
            let order = shuffled[..k].iter().map(|&i| SURNAMES[i].to_string()).collect();
            (standings, order, session)
        })
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn projection_is_deterministic((standings, order, session) in arb_case()) {
        let a = project(&standings, &order, session).unwrap();
        let b = project(&standings, &order, session).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn empty_order_changes_nothing((standings, _order, session) in arb_case()) {
        let out = project::<&str>(&standings, &[], session).unwrap();
        prop_assert_eq!(out.len(), standings.len());
        for (p, s) in out.iter().zip(&standings) {
            prop_assert_eq!(&p.driver_name, &s.driver_name);
            prop_assert_eq!(p.session_points, 0);
            prop_assert_eq!(p.position_delta, 0);
        }
    }

    #[test]
    fn pointless_session_equals_empty_order((standings, order, _session) in arb_case()) {
        let empty = project::<&str>(&standings, &[], SessionType::Race).unwrap();
        let other = project(&standings, &order, SessionType::Other).unwrap();
        prop_assert_eq!(empty, other);
    }

    #[test]
    fn points_are_conserved((standings, order, session) in arb_case()) {
        let out = project(&standings, &order, session).unwrap();
        prop_assert_eq!(out.len(), standings.len());
        for e in &out {
            prop_assert_eq!(e.projected_total, e.current_points + e.session_points);
        }
        let awarded: u32 = out.iter().map(|e| e.session_points).sum();
        let expected: u32 = schedule(session).iter().take(order.len()).sum();
        prop_assert_eq!(awarded, expected);
    }

    #[test]
    fn positions_are_a_permutation((standings, order, session) in arb_case()) {
        let out = project(&standings, &order, session).unwrap();
        let mut positions: Vec<u32> = out.iter().map(|e| e.new_position).collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (1..=standings.len() as u32).collect::<Vec<_>>());

        let delta_sum: i32 = out.iter().map(|e| e.position_delta).sum();
        prop_assert_eq!(delta_sum, 0);
        for e in &out {
            prop_assert_eq!(e.position_delta, e.original_position as i32 - e.new_position as i32);
        }
    }

    #[test]
    fn ranked_by_total_then_standings((standings, order, session) in arb_case()) {
        let out = project(&standings, &order, session).unwrap();
        for w in out.windows(2) {
            prop_assert!(w[0].projected_total >= w[1].projected_total);
            if w[0].projected_total == w[1].projected_total {
                prop_assert!(w[0].original_position < w[1].original_position);
            }
        }
    }
}
