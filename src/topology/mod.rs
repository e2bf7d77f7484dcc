//! Logical corner adjacency of a solid.
//!
//! Flat shading needs every face to own its vertex slots, so one geometric
//! corner is stored several times. The [`AdjacencyMap`] records which slots
//! are copies of the same corner. It is built from the topology each solid
//! generator already knows, never from comparing floating-point positions.

use slotmap::SlotMap;

use crate::error::TopologyError;

slotmap::new_key_type! {
    /// Unique identifier for a logical corner in an adjacency map.
    pub struct CornerId;
}

/// Data associated with a logical corner.
#[derive(Debug, Clone, Default)]
pub struct CornerData {
    /// Vertex slots that duplicate this corner, in ascending order.
    pub slots: Vec<u32>,
}

/// Groups vertex slots by the logical corner they duplicate.
///
/// Every slot in `0..slot_count()` belongs to exactly one corner.
#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    corners: SlotMap<CornerId, CornerData>,
    slot_corner: Vec<CornerId>,
}

impl AdjacencyMap {
    /// Builds the map from one corner tag per vertex slot.
    ///
    /// `tags[slot]` names the logical corner of `slot`; tags need not be dense.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyCorner`] if `tags` is empty, or
    /// [`TopologyError::TooManySlots`] if slots cannot be numbered with `u32`.
    pub fn from_corner_tags(tags: &[usize]) -> Result<Self, TopologyError> {
        if tags.is_empty() {
            return Err(TopologyError::EmptyCorner);
        }
        if u32::try_from(tags.len()).is_err() {
            return Err(TopologyError::TooManySlots {
                slot_count: tags.len(),
            });
        }

        let mut corners: SlotMap<CornerId, CornerData> = SlotMap::with_key();
        let mut by_tag: Vec<Option<CornerId>> = Vec::new();
        let mut slot_corner = Vec::with_capacity(tags.len());

        for (slot, &tag) in (0..).zip(tags) {
            if by_tag.len() <= tag {
                by_tag.resize(tag + 1, None);
            }
            let id = *by_tag[tag].get_or_insert_with(|| corners.insert(CornerData::default()));
            corners[id].slots.push(slot);
            slot_corner.push(id);
        }

        let map = Self {
            corners,
            slot_corner,
        };
        map.validate()?;
        Ok(map)
    }

    /// Checks that every slot appears in exactly one corner group.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] naming the first offending slot.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut seen = vec![false; self.slot_corner.len()];
        for corner in self.corners.values() {
            if corner.slots.is_empty() {
                return Err(TopologyError::EmptyCorner);
            }
            for &slot in &corner.slots {
                let slot = slot as usize;
                match seen.get_mut(slot) {
                    None => return Err(TopologyError::SlotNotCovered { slot }),
                    Some(true) => return Err(TopologyError::SlotSharedByCorners { slot }),
                    Some(flag) => *flag = true,
                }
            }
        }
        match seen.iter().position(|covered| !covered) {
            Some(slot) => Err(TopologyError::SlotNotCovered { slot }),
            None => Ok(()),
        }
    }

    /// Returns the corner that `slot` duplicates, if the slot exists.
    #[must_use]
    pub fn corner_of(&self, slot: usize) -> Option<CornerId> {
        self.slot_corner.get(slot).copied()
    }

    /// Returns the slots duplicating `corner`.
    #[must_use]
    pub fn slots_of(&self, corner: CornerId) -> &[u32] {
        self.corners
            .get(corner)
            .map_or(&[][..], |data| data.slots.as_slice())
    }

    /// Iterates over all corners and their slot groups.
    pub fn corners(&self) -> impl Iterator<Item = (CornerId, &[u32])> {
        self.corners
            .iter()
            .map(|(id, data)| (id, data.slots.as_slice()))
    }

    /// Number of logical corners.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Number of vertex slots covered by the map.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_corner.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn groups_slots_by_tag() {
        let map = AdjacencyMap::from_corner_tags(&[0, 1, 2, 2, 1, 3]).unwrap();
        assert_eq!(map.corner_count(), 4);
        assert_eq!(map.slot_count(), 6);

        let c = map.corner_of(2).unwrap();
        assert_eq!(map.slots_of(c), &[2, 3]);
        assert_eq!(map.corner_of(1), map.corner_of(4));
        assert_ne!(map.corner_of(0), map.corner_of(5));
    }

    #[test]
    fn every_slot_in_exactly_one_group() {
        let map = AdjacencyMap::from_corner_tags(&[5, 5, 0, 9, 0, 9, 9]).unwrap();
        let mut counts = vec![0; map.slot_count()];
        for (_, slots) in map.corners() {
            for &s in slots {
                counts[s as usize] += 1;
            }
        }
        assert!(counts.iter().all(|&c| c == 1));
    }

    #[test]
    fn sparse_tags_are_allowed() {
        let map = AdjacencyMap::from_corner_tags(&[100, 7, 100]).unwrap();
        assert_eq!(map.corner_count(), 2);
    }

    #[test]
    fn empty_tags_fail() {
        assert!(matches!(
            AdjacencyMap::from_corner_tags(&[]),
            Err(TopologyError::EmptyCorner)
        ));
    }

    #[test]
    fn out_of_range_slot_is_reported() {
        let mut map = AdjacencyMap::from_corner_tags(&[0, 0]).unwrap();
        let id = map.corner_of(0).unwrap();
        map.corners[id].slots.push(7);
        assert!(matches!(
            map.validate(),
            Err(TopologyError::SlotNotCovered { slot: 7 })
        ));
    }

    #[test]
    fn shared_slot_is_reported() {
        let mut map = AdjacencyMap::from_corner_tags(&[0, 1]).unwrap();
        let id = map.corner_of(1).unwrap();
        map.corners[id].slots.push(0);
        assert!(matches!(
            map.validate(),
            Err(TopologyError::SlotSharedByCorners { slot: 0 })
        ));
    }

    #[test]
    fn unknown_slot_has_no_corner() {
        let map = AdjacencyMap::from_corner_tags(&[0]).unwrap();
        assert!(map.corner_of(1).is_none());
    }
}
