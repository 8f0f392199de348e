use std::collections::HashMap;

use rayon::prelude::*;

use crate::{CompanionTable, GridError, GridSpec, Relationship, SlotIndex};

/// A non-neutral relationship between a slot's occupant and one of its
/// orthogonal neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conflict {
    pub neighbor: SlotIndex,
    pub relationship: Relationship,
}

impl CompanionTable {
    /// Evaluate one slot against its occupied neighbors.
    ///
    /// `occupants` maps slot indices to the crop planted there; absent
    /// entries are empty slots and contribute nothing. Only `Friend` and
    /// `Enemy` entries are returned, so the result has at most as many
    /// entries as [`GridSpec::neighbors_of`] and never mentions the queried
    /// slot itself. Querying an empty slot yields no entries. Grid errors
    /// propagate unchanged.
    pub fn slot_conflicts<S: AsRef<str>>(
        &self,
        spec: &GridSpec,
        index: isize,
        occupants: &HashMap<SlotIndex, S>,
    ) -> Result<Vec<Conflict>, GridError> {
        let neighbors = spec.neighbors_of(index)?;
        let Some(crop) = occupants.get(&(index as usize)) else {
            return Ok(Vec::new());
        };
        Ok(neighbors
            .into_iter()
            .filter_map(|neighbor| {
                occupants.get(&neighbor).map(|other| Conflict {
                    neighbor,
                    relationship: self.relationship(crop.as_ref(), other.as_ref()),
                })
            })
            .filter(|conflict| conflict.relationship != Relationship::Neutral)
            .collect())
    }

    /// Evaluate every occupied slot of a garden in one parallel pass.
    ///
    /// Returns only slots with at least one non-neutral neighbor, ordered
    /// by slot index. The first grid error aborts the scan.
    pub fn garden_conflicts<S: AsRef<str> + Sync>(
        &self,
        spec: &GridSpec,
        occupants: &HashMap<SlotIndex, S>,
    ) -> Result<Vec<(SlotIndex, Vec<Conflict>)>, GridError> {
        let mut slots: Vec<(SlotIndex, Vec<Conflict>)> = occupants
            .par_iter()
            .map(|(&index, _)| {
                self.slot_conflicts(spec, index as isize, occupants)
                    .map(|conflicts| (index, conflicts))
            })
            .collect::<Result<_, _>>()?;
        slots.retain(|(_, conflicts)| !conflicts.is_empty());
        slots.sort_unstable_by_key(|&(index, _)| index);
        Ok(slots)
    }
}
