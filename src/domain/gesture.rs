//! Swipe gesture resolution
//!
//! A swipe starts on one face and ends on a neighbouring one. The pair of
//! faces is all that is needed to pick the axis being turned and the
//! direction of the turn: the pair must appear as adjacent entries of exactly
//! one axis ring, either in ring order (forward) or against it (inverted).

use serde::{Deserialize, Serialize};

use crate::domain::core::FaceDirection;
use crate::domain::topology::{Axis, RING_LEN};

/// Rotational sense of a turn relative to its axis ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Colors travel from `ring[p]` to `ring[p + 1]`
    Forward,
    /// Colors travel from `ring[p + 1]` to `ring[p]`
    Inverted,
}

impl Turn {
    pub fn reversed(self) -> Self {
        match self {
            Turn::Forward => Turn::Inverted,
            Turn::Inverted => Turn::Forward,
        }
    }

    pub fn is_inverted(self) -> bool {
        self == Turn::Inverted
    }
}

/// What the engine does with a swipe that matches no ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GesturePolicy {
    /// Fail with `CubeError::UnrecognizedGesture`
    #[default]
    Reject,
    /// Return the cube unchanged
    Ignore,
}

/// A swipe from one face to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swipe {
    pub start: FaceDirection,
    pub end: FaceDirection,
}

/// The axis and direction a swipe addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSwipe {
    pub axis: Axis,
    pub turn: Turn,
}

impl Swipe {
    pub fn new(start: FaceDirection, end: FaceDirection) -> Self {
        Self { start, end }
    }

    /// Returns the swipe in the opposite direction
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the canonical swipe that produces `turn` on `axis`
    ///
    /// # Example
    /// ```rust
    /// use cube_swipe::domain::core::FaceDirection;
    /// use cube_swipe::domain::gesture::{Swipe, Turn};
    /// use cube_swipe::domain::topology::Axis;
    ///
    /// let swipe = Swipe::for_turn(Axis::A, Turn::Forward);
    /// assert_eq!(swipe, Swipe::new(FaceDirection::Front, FaceDirection::Right));
    /// ```
    pub fn for_turn(axis: Axis, turn: Turn) -> Self {
        let ring = axis.topology().ring_faces();
        let forward = Self::new(ring[0], ring[1]);
        match turn {
            Turn::Forward => forward,
            Turn::Inverted => forward.reversed(),
        }
    }

    /// Resolves the swipe to an axis and turn direction
    ///
    /// # Returns
    /// None if the two faces are not neighbours on any axis ring (the same
    /// face twice, or two opposite faces)
    pub fn resolve(self) -> Option<ResolvedSwipe> {
        Axis::ALL.into_iter().find_map(|axis| {
            let ring = axis.topology().ring_faces();
            (0..RING_LEN).find_map(|p| {
                let pair = (ring[p], ring[(p + 1) % RING_LEN]);
                if pair == (self.start, self.end) {
                    Some(ResolvedSwipe { axis, turn: Turn::Forward })
                } else if pair == (self.end, self.start) {
                    Some(ResolvedSwipe { axis, turn: Turn::Inverted })
                } else {
                    None
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FaceDirection::*;

    #[test]
    fn resolves_ring_pairs() {
        assert_eq!(
            Swipe::new(Front, Right).resolve(),
            Some(ResolvedSwipe { axis: Axis::A, turn: Turn::Forward })
        );
        assert_eq!(
            Swipe::new(Right, Front).resolve(),
            Some(ResolvedSwipe { axis: Axis::A, turn: Turn::Inverted })
        );
        assert_eq!(
            Swipe::new(Up, Left).resolve(),
            Some(ResolvedSwipe { axis: Axis::B, turn: Turn::Forward })
        );
        assert_eq!(
            Swipe::new(Front, Down).resolve(),
            Some(ResolvedSwipe { axis: Axis::C, turn: Turn::Inverted })
        );
    }

    #[test]
    fn closing_pair_of_ring_resolves() {
        assert_eq!(
            Swipe::new(Left, Front).resolve(),
            Some(ResolvedSwipe { axis: Axis::A, turn: Turn::Forward })
        );
        assert_eq!(
            Swipe::new(Right, Down).resolve(),
            Some(ResolvedSwipe { axis: Axis::B, turn: Turn::Inverted })
        );
    }

    #[test]
    fn same_or_opposite_faces_do_not_resolve() {
        for face in FaceDirection::ALL {
            assert_eq!(Swipe::new(face, face).resolve(), None);
            assert_eq!(Swipe::new(face, face.opposite()).resolve(), None);
        }
    }

    #[test]
    fn every_neighbour_pair_resolves_both_ways() {
        let mut resolved = 0;
        for start in FaceDirection::ALL {
            for end in FaceDirection::ALL {
                let swipe = Swipe::new(start, end);
                if let Some(hit) = swipe.resolve() {
                    resolved += 1;
                    let back = swipe.reversed().resolve().unwrap();
                    assert_eq!(back.axis, hit.axis);
                    assert_eq!(back.turn, hit.turn.reversed());
                }
            }
        }
        // 12 edges of the cube, each swiped both ways
        assert_eq!(resolved, 24);
    }

    #[test]
    fn canonical_swipes_round_trip() {
        for axis in Axis::ALL {
            for turn in [Turn::Forward, Turn::Inverted] {
                assert_eq!(Swipe::for_turn(axis, turn).resolve(), Some(ResolvedSwipe { axis, turn }));
            }
        }
    }
}
