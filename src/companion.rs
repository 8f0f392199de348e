use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use itertools::Itertools;

/// How two crops get along when planted in adjacent slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relationship {
    Friend,
    Enemy,
    Neutral,
}

/// Crop-to-crop companion relationships.
///
/// Entries are stored directed, as a source list gives them; lookup is
/// symmetric, so listing "patata" under "tomate"'s enemies makes the pair
/// enemies both ways. Crop names are trimmed and Unicode-lowercased on both
/// insert and lookup.
#[derive(Clone, Debug, Default)]
pub struct CompanionTable {
    friends: HashMap<String, HashSet<String>>,
    enemies: HashMap<String, HashSet<String>>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CompanionTable {
    /// Make an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: populated once at first use from the lists
    /// below, read-only thereafter.
    pub fn builtin() -> &'static CompanionTable {
        static BUILTIN: LazyLock<CompanionTable> = LazyLock::new(|| {
            let mut table = CompanionTable::new();
            for &(crop, friends) in BUILTIN_FRIENDS {
                for &friend in friends {
                    table.add_friends(crop, friend);
                }
            }
            for &(crop, enemies) in BUILTIN_ENEMIES {
                for &enemy in enemies {
                    table.add_enemies(crop, enemy);
                }
            }
            table
        });
        &BUILTIN
    }

    /// Record that `a` lists `b` as a beneficial companion.
    pub fn add_friends(&mut self, a: &str, b: &str) {
        self.friends
            .entry(normalize(a))
            .or_default()
            .insert(normalize(b));
    }

    /// Record that `a` lists `b` as an antagonist.
    pub fn add_enemies(&mut self, a: &str, b: &str) {
        self.enemies
            .entry(normalize(a))
            .or_default()
            .insert(normalize(b));
    }

    /// Classify the relationship between two crops.
    ///
    /// The enemy table is consulted first and wins when a pair appears in
    /// both tables: warn on a possible conflict rather than suppress it.
    /// A crop is `Neutral` toward itself, and a pair absent from both
    /// tables is `Neutral`. Never fails; unknown names are just neutral.
    pub fn relationship(&self, a: &str, b: &str) -> Relationship {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            Relationship::Neutral
        } else if Self::listed(&self.enemies, &a, &b) {
            Relationship::Enemy
        } else if Self::listed(&self.friends, &a, &b) {
            Relationship::Friend
        } else {
            Relationship::Neutral
        }
    }

    /// Crop pairs present in both the friend and the enemy table.
    ///
    /// Companion lists ported from different sources disagree on some
    /// pairs. Those entries are kept as found and surfaced here rather
    /// than silently dropping one side; [`relationship`](Self::relationship)
    /// resolves them as `Enemy`. Pairs come back normalized, each ordered
    /// alphabetically, deduplicated.
    pub fn contradictions(&self) -> Vec<(String, String)> {
        self.friends
            .iter()
            .flat_map(|(a, others)| others.iter().map(move |b| (a, b)))
            .filter(|&(a, b)| Self::listed(&self.enemies, a, b))
            .map(|(a, b)| {
                if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .sorted()
            .dedup()
            .collect()
    }

    fn listed(side: &HashMap<String, HashSet<String>>, a: &str, b: &str) -> bool {
        side.get(a).is_some_and(|set| set.contains(b))
            || side.get(b).is_some_and(|set| set.contains(a))
    }
}

/// Classify two crops against the built-in table.
pub fn relationship_of(a: &str, b: &str) -> Relationship {
    CompanionTable::builtin().relationship(a, b)
}

// Common huerto companion lists, pre-normalized. Pepino/rábano is disputed
// across sources and deliberately appears on both sides; `contradictions`
// reports it and lookup resolves it as an enemy pair.
const BUILTIN_FRIENDS: &[(&str, &[&str])] = &[
    ("tomate", &["albahaca", "zanahoria", "cebolla", "perejil", "apio"]),
    ("zanahoria", &["cebolla", "puerro", "rábano", "lechuga", "guisante"]),
    ("lechuga", &["fresa", "pepino", "rábano", "remolacha"]),
    ("maíz", &["judía", "calabaza", "pepino"]),
    ("judía", &["calabaza", "fresa", "maíz"]),
    ("fresa", &["espinaca", "lechuga"]),
    ("cebolla", &["remolacha", "lechuga", "fresa"]),
    ("pepino", &["rábano", "girasol", "guisante"]),
    ("col", &["apio", "remolacha", "menta"]),
    ("espinaca", &["fresa", "col"]),
];

const BUILTIN_ENEMIES: &[(&str, &[&str])] = &[
    ("tomate", &["patata", "pepino", "hinojo", "col"]),
    ("patata", &["calabaza", "pepino", "girasol"]),
    ("cebolla", &["judía", "guisante"]),
    ("ajo", &["judía", "guisante"]),
    ("judía", &["puerro"]),
    ("zanahoria", &["eneldo"]),
    ("hinojo", &["judía", "pimiento"]),
    ("pepino", &["rábano", "salvia"]),
    ("col", &["fresa"]),
];
