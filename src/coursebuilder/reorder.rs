//! Single-element moves over an ordered collection.
//!
//! A drag gesture ends with a source position and, if the item was dropped on
//! a valid target, a destination position. Applying a [`Move`] never touches
//! the input: it returns the complete new ordering so the caller can swap it
//! in one step.

use crate::error::{CourseError, Result};

/// Result of a drag gesture. Positions are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub source: usize,
    pub destination: Option<usize>,
}

impl Move {
    pub fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A gesture that ended outside any drop target.
    pub fn dropped_outside(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Apply `mv` to `items`.
///
/// Returns `Ok(None)` when there is nothing to do: no destination, or the
/// destination equals the source. Both positions must be `< items.len()`.
pub fn apply<T: Clone>(items: &[T], mv: Move) -> Result<Option<Vec<T>>> {
    let Some(destination) = mv.destination else {
        return Ok(None);
    };

    let len = items.len();
    if mv.source >= len || destination >= len {
        return Err(CourseError::InvalidMove {
            from: mv.source,
            to: destination,
            len,
        });
    }
    if mv.source == destination {
        return Ok(None);
    }

    let mut next = items.to_vec();
    let moved = next.remove(mv.source);
    next.insert(destination, moved);
    Ok(Some(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_forward() {
        let next = apply(&['a', 'b', 'c', 'd'], Move::new(0, 2)).unwrap();
        assert_eq!(next, Some(vec!['b', 'c', 'a', 'd']));
    }

    #[test]
    fn moves_backward() {
        let next = apply(&['a', 'b', 'c', 'd'], Move::new(3, 1)).unwrap();
        assert_eq!(next, Some(vec!['a', 'd', 'b', 'c']));
    }

    #[test]
    fn moves_to_last_position() {
        let next = apply(&['a', 'b', 'c'], Move::new(0, 2)).unwrap();
        assert_eq!(next, Some(vec!['b', 'c', 'a']));
    }

    #[test]
    fn inverse_move_restores_order() {
        let original = vec!['a', 'b', 'c', 'd', 'e'];
        for i in 0..original.len() {
            for j in 0..original.len() {
                let there = apply(&original, Move::new(i, j))
                    .unwrap()
                    .unwrap_or_else(|| original.clone());
                let back = apply(&there, Move::new(j, i))
                    .unwrap()
                    .unwrap_or_else(|| there.clone());
                assert_eq!(back, original, "move {} -> {}", i, j);
            }
        }
    }

    #[test]
    fn dropped_outside_is_noop() {
        assert_eq!(apply(&['a', 'b'], Move::dropped_outside(0)).unwrap(), None);
    }

    #[test]
    fn same_position_is_noop() {
        assert_eq!(apply(&['a', 'b'], Move::new(1, 1)).unwrap(), None);
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        assert!(matches!(
            apply(&['a', 'b'], Move::new(2, 0)),
            Err(CourseError::InvalidMove { from: 2, to: 0, len: 2 })
        ));
        assert!(apply(&['a', 'b'], Move::new(0, 2)).is_err());
        assert!(apply::<char>(&[], Move::new(0, 0)).is_err());
    }
}
