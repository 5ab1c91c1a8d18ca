//! Drag-and-drop reordering shared by the store and client-side views.

/// Index a record moved from `from` ends up at when it is reinserted immediately
/// before the record currently at `target`.
///
/// Positions are those of the collection before the move. Moving towards the back
/// lands one slot earlier than `target`, since removing the record shifts the
/// target down by one.
#[must_use]
pub fn destination_index(from: usize, target: usize) -> usize {
    if from < target {
        target.saturating_sub(1)
    } else {
        target
    }
}

/// Move the element at `from` so it sits immediately before the element at
/// `target`. Out-of-range positions and `from == target` leave the slice untouched.
pub fn move_before<T>(items: &mut Vec<T>, from: usize, target: usize) {
    if from == target || from >= items.len() || target >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(destination_index(from, target), moved);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_front_to_before_last() {
        let mut items = vec!['A', 'B', 'C'];
        move_before(&mut items, 0, 2);
        assert_eq!(items, vec!['B', 'A', 'C']);
    }

    #[test]
    fn test_move_last_to_front() {
        let mut items = vec!['A', 'B', 'C'];
        move_before(&mut items, 2, 0);
        assert_eq!(items, vec!['C', 'A', 'B']);
    }

    #[test]
    fn test_move_onto_neighbour_is_noop_forward() {
        let mut items = vec!['A', 'B', 'C'];
        move_before(&mut items, 0, 1);
        assert_eq!(items, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let mut items = vec!['A', 'B', 'C'];
        move_before(&mut items, 1, 1);
        assert_eq!(items, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut items = vec!['A', 'B'];
        move_before(&mut items, 0, 5);
        assert_eq!(items, vec!['A', 'B']);
    }

    #[test]
    fn test_destination_index() {
        assert_eq!(destination_index(0, 2), 1);
        assert_eq!(destination_index(2, 0), 0);
        assert_eq!(destination_index(1, 1), 1);
    }
}
