use std::collections::{HashMap, HashSet};

use bancal::{relationship_of, CompanionTable, Conflict, GridError, GridSpec, Relationship};

#[test]
fn builtin_enemies_are_symmetric() {
    assert_eq!(relationship_of("Tomate", "Patata"), Relationship::Enemy);
    assert_eq!(relationship_of("Patata", "Tomate"), Relationship::Enemy);
}

#[test]
fn builtin_friends_and_neutrals() {
    assert_eq!(relationship_of("Tomate", "Albahaca"), Relationship::Friend);
    assert_eq!(relationship_of("Albahaca", "Tomate"), Relationship::Friend);
    assert_eq!(relationship_of("Tomate", "Maíz"), Relationship::Neutral);
}

#[test]
fn lookup_normalizes_names() {
    assert_eq!(relationship_of(" tomate ", "PATATA"), Relationship::Enemy);
    assert_eq!(relationship_of("ALBAHACA", "  Tomate"), Relationship::Friend);
}

#[test]
fn self_and_unknown_crops_are_neutral() {
    assert_eq!(relationship_of("Tomate", "Tomate"), Relationship::Neutral);
    assert_eq!(relationship_of("Tomate", " tomate"), Relationship::Neutral);
    assert_eq!(relationship_of("Ruibarbo", "Okra"), Relationship::Neutral);
}

#[test]
fn enemy_beats_friend() {
    let mut table = CompanionTable::new();
    table.add_friends("haba", "alcachofa");
    table.add_enemies("alcachofa", "haba");
    assert_eq!(table.relationship("Haba", "Alcachofa"), Relationship::Enemy);
    assert_eq!(
        table.contradictions(),
        vec![("alcachofa".to_string(), "haba".to_string())]
    );
}

#[test]
fn builtin_contradiction_is_flagged_and_resolved_as_enemy() {
    let disputed = ("pepino".to_string(), "rábano".to_string());
    assert!(CompanionTable::builtin().contradictions().contains(&disputed));
    assert_eq!(relationship_of("Pepino", "Rábano"), Relationship::Enemy);
}

#[test]
fn slot_conflicts_in_a_row_bed() {
    let spec = GridSpec::new(1, 3).unwrap();
    let occupants = HashMap::from([(0, "Tomate"), (1, "Patata")]);
    let table = CompanionTable::builtin();
    assert_eq!(
        table.slot_conflicts(&spec, 0, &occupants).unwrap(),
        vec![Conflict {
            neighbor: 1,
            relationship: Relationship::Enemy,
        }]
    );
    // Slot 1 sees the enemy on one side and an empty slot on the other.
    assert_eq!(
        table.slot_conflicts(&spec, 1, &occupants).unwrap(),
        vec![Conflict {
            neighbor: 0,
            relationship: Relationship::Enemy,
        }]
    );
    // Querying the empty slot yields nothing.
    assert!(table.slot_conflicts(&spec, 2, &occupants).unwrap().is_empty());
}

#[test]
fn neutral_neighbors_are_omitted() {
    let spec = GridSpec::new(1, 3).unwrap();
    let occupants = HashMap::from([(0, "Tomate"), (1, "Maíz"), (2, "Judía")]);
    let table = CompanionTable::builtin();
    assert!(table.slot_conflicts(&spec, 0, &occupants).unwrap().is_empty());
    // Maíz is neutral toward tomate but friendly toward judía.
    assert_eq!(
        table.slot_conflicts(&spec, 1, &occupants).unwrap(),
        vec![Conflict {
            neighbor: 2,
            relationship: Relationship::Friend,
        }]
    );
}

#[test]
fn slot_conflicts_propagates_grid_errors() {
    let spec = GridSpec::new(1, 3).unwrap();
    let occupants: HashMap<usize, &str> = HashMap::new();
    assert!(matches!(
        CompanionTable::builtin().slot_conflicts(&spec, 3, &occupants),
        Err(GridError::OutOfRange { .. })
    ));
}

#[test]
fn garden_scan_reports_occupied_conflicting_slots_only() {
    let spec = GridSpec::new(2, 2).unwrap();
    let occupants = HashMap::from([(0, "Tomate"), (1, "Patata"), (2, "Albahaca")]);
    let report = CompanionTable::builtin()
        .garden_conflicts(&spec, &occupants)
        .unwrap();
    let slots: Vec<_> = report.iter().map(|&(index, _)| index).collect();
    assert_eq!(slots, vec![0, 1, 2]);
    // Slot 0 borders both the enemy and the friend; entry order within a
    // slot is unspecified, so compare as a set.
    let for_tomato: HashSet<_> = report[0].1.iter().cloned().collect();
    assert_eq!(
        for_tomato,
        HashSet::from([
            Conflict {
                neighbor: 1,
                relationship: Relationship::Enemy,
            },
            Conflict {
                neighbor: 2,
                relationship: Relationship::Friend,
            },
        ])
    );
    assert_eq!(
        report[1].1,
        vec![Conflict {
            neighbor: 0,
            relationship: Relationship::Enemy,
        }]
    );
    assert_eq!(
        report[2].1,
        vec![Conflict {
            neighbor: 0,
            relationship: Relationship::Friend,
        }]
    );
}

#[test]
fn garden_scan_skips_all_neutral_gardens() {
    let spec = GridSpec::new(1, 2).unwrap();
    let occupants = HashMap::from([(0, "Tomate"), (1, "Maíz")]);
    let report = CompanionTable::builtin()
        .garden_conflicts(&spec, &occupants)
        .unwrap();
    assert!(report.is_empty());
}

#[test]
fn garden_scan_rejects_out_of_range_occupants() {
    let spec = GridSpec::new(2, 2).unwrap();
    let occupants = HashMap::from([(7, "Tomate")]);
    assert!(matches!(
        CompanionTable::builtin().garden_conflicts(&spec, &occupants),
        Err(GridError::OutOfRange { .. })
    ));
}
