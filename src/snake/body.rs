use std::collections::VecDeque;

use crate::basic::GridPoint;

/// The cells occupied by the snake, head first
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Body {
    segments: VecDeque<GridPoint>,
    /// Upper bound on the length, the number of cells on the board
    capacity: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Body {
    pub fn new(head: GridPoint, capacity: usize) -> Self {
        Self::from_segments([head], capacity)
    }

    /// Panics on an empty body or one longer than `capacity`
    pub fn from_segments(segments: impl IntoIterator<Item = GridPoint>, capacity: usize) -> Self {
        let segments: VecDeque<_> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least a head");
        assert!(
            segments.len() <= capacity,
            "{} segments don't fit in a capacity of {}",
            segments.len(),
            capacity
        );
        Self { segments, capacity }
    }

    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    pub fn tail(&self) -> GridPoint {
        self.segments[self.segments.len() - 1]
    }

    /// Never 0
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = GridPoint> + ExactSizeIterator + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, pos: GridPoint) -> bool {
        self.segments.contains(&pos)
    }

    /// Index of the segment a head moving to `pos` would run into,
    /// the tail is ignored when it moves out of the way this tick
    pub fn collision_at(&self, pos: GridPoint, tail_vacates: bool) -> Option<usize> {
        let checked = if tail_vacates { self.len() - 1 } else { self.len() };
        self.segments.iter().take(checked).position(|&seg| seg == pos)
    }

    /// Push a new head, the tail stays if the snake grows and there is room for it
    /// Returns whether the body got longer
    pub fn advance(&mut self, new_head: GridPoint, grow: bool) -> bool {
        let grows = grow && !self.is_full();
        if !grows {
            self.segments.pop_back();
        }
        self.segments.push_front(new_head);
        grows
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a GridPoint;
    type IntoIter = std::collections::vec_deque::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;

    fn body(points: &[(isize, isize)]) -> Body {
        Body::from_segments(points.iter().map(|&p| GridPoint::from(p)), 96)
    }

    #[test]
    fn test_advance_without_growth_drops_tail() {
        let mut b = body(&[(3, 3), (3, 4), (3, 5)]);
        assert!(!b.advance(GridPoint::new(3, 2), false));
        assert_eq!(b, body(&[(3, 2), (3, 3), (3, 4)]));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut b = body(&[(3, 3), (3, 4), (3, 5)]);
        assert!(b.advance(GridPoint::new(3, 2), true));
        assert_eq!(b, body(&[(3, 2), (3, 3), (3, 4), (3, 5)]));
    }

    #[test]
    fn test_growth_capped_at_capacity() {
        let mut b = Body::from_segments([GridPoint::new(0, 0), GridPoint::new(0, 1)], 2);
        assert!(!b.advance(GridPoint::new(1, 0), true));
        assert_eq!(b.len(), 2);
        assert_eq!(b.tail(), GridPoint::new(0, 0));
    }

    #[test]
    fn test_collision_ignores_vacating_tail() {
        // a 2x2 loop, the head chases the tail
        let b = body(&[(0, 1), (1, 1), (1, 0), (0, 0)]);
        let target = b.head() + Dir::L;
        assert_eq!(target, b.tail());
        assert_eq!(b.collision_at(target, true), None);
        assert_eq!(b.collision_at(target, false), Some(3));
        assert_eq!(b.collision_at(GridPoint::new(1, 1), true), Some(1));
    }

    #[test]
    fn test_single_segment_never_collides_when_moving() {
        let b = Body::new(GridPoint::new(2, 2), 4);
        assert_eq!(b.collision_at(GridPoint::new(2, 2), true), None);
    }

    #[test]
    #[should_panic(expected = "at least a head")]
    fn test_empty_body_rejected() {
        Body::from_segments([], 4);
    }
}
