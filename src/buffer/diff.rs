//! Buffer-to-buffer diffing.

use tracing::trace;

use crate::geometry::Position;

use super::buffer::Buffer;
use super::cell::Cell;
use super::error::BufferError;

/// A single cell that changed between two buffers, at an absolute
/// grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub position: Position,
    pub cell: Cell,
}

/// Walk `previous` and `current` in row-major order and collect every
/// position whose cell differs, skipping cells marked `skip` (those are
/// owned by the wide glyph to their left and never independently
/// rendered).
///
/// O(width · height); allocates only the output vector, no auxiliary
/// grid. Fails if the two buffers don't share the same area.
pub fn diff(previous: &Buffer, current: &Buffer) -> Result<Vec<CellUpdate>, BufferError> {
    if previous.area() != current.area() {
        return Err(BufferError::MismatchedAreas {
            expected: previous.area(),
            actual: current.area(),
        });
    }

    let area = current.area();
    let mut updates = Vec::new();

    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let cur = current.get(x, y).expect("in-bounds by construction");
            if cur.skip {
                continue;
            }
            let prev = previous.get(x, y).expect("in-bounds by construction");
            if cur != prev {
                updates.push(CellUpdate { position: Position::new(x, y), cell: cur.clone() });
            }
        }
    }

    trace!(updates = updates.len(), "diff computed");
    Ok(updates)
}

/// Apply a diff (as produced by [`diff`]) to a buffer, writing each
/// update's cell at its position. Used by tests to verify the round-trip
/// law `apply(previous, diff(previous, current)) == current`.
pub fn apply_updates(buffer: &mut Buffer, updates: &[CellUpdate]) {
    for update in updates {
        buffer.set(update.position.x, update.position.y, update.cell.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::style::{Color, Style};

    #[test]
    fn scenario_a_basic_diff() {
        let previous = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut current = Buffer::empty(Rect::new(0, 0, 3, 1));
        let style = Style::new().fg(Color::rgb(255, 0, 0)).bg(Color::rgb(0, 0, 0));
        current.set_string(0, 0, "AB", style);

        let updates = diff(&previous, &current).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].position, Position::new(0, 0));
        assert_eq!(updates[0].cell.symbol, "A");
        assert_eq!(updates[1].position, Position::new(1, 0));
        assert_eq!(updates[1].cell.symbol, "B");
    }

    #[test]
    fn skip_cells_never_emitted() {
        let previous = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut current = Buffer::empty(Rect::new(0, 0, 3, 1));
        current.set_string(0, 0, "漢", Style::EMPTY);

        let updates = diff(&previous, &current).unwrap();
        let positions: Vec<_> = updates.iter().map(|u| u.position).collect();
        assert!(positions.contains(&Position::new(0, 0)));
        assert!(!positions.contains(&Position::new(1, 0)));
    }

    #[test]
    fn mismatched_areas_error() {
        let a = Buffer::empty(Rect::new(0, 0, 3, 1));
        let b = Buffer::empty(Rect::new(0, 0, 4, 1));
        assert!(matches!(diff(&a, &b), Err(BufferError::MismatchedAreas { .. })));
    }

    #[test]
    fn apply_diff_round_trip() {
        let previous = Buffer::empty(Rect::new(0, 0, 5, 3));
        let mut current = Buffer::empty(Rect::new(0, 0, 5, 3));
        current.set_string(1, 1, "hi", Style::new().fg(Color::rgb(1, 2, 3)));

        let updates = diff(&previous, &current).unwrap();
        let mut rebuilt = previous.clone();
        apply_updates(&mut rebuilt, &updates);
        assert_eq!(rebuilt, current);
    }

    fn arbitrary_row(width: u16) -> impl proptest::strategy::Strategy<Value = Vec<String>> {
        proptest::collection::vec(proptest::prop_oneof![
            proptest::strategy::Just(" ".to_string()),
            proptest::strategy::Just("a".to_string()),
            proptest::strategy::Just("Z".to_string()),
            proptest::strategy::Just("漢".to_string()),
            proptest::strategy::Just("字".to_string()),
        ], width as usize)
    }

    fn paint(buffer: &mut Buffer, rows: &[Vec<String>]) {
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0u16;
            for glyph in row {
                if x >= buffer.width() {
                    break;
                }
                x = buffer.set_string(x, y as u16, glyph, Style::EMPTY);
            }
        }
    }

    proptest::proptest! {
        #[test]
        fn diff_apply_round_trips_over_arbitrary_contents(
            width in 1u16..8,
            height in 1u16..4,
            previous_rows in proptest::collection::vec(arbitrary_row(6), 1..4),
            current_rows in proptest::collection::vec(arbitrary_row(6), 1..4),
        ) {
            let area = Rect::new(0, 0, width, height);
            let mut previous = Buffer::empty(area);
            let mut current = Buffer::empty(area);
            paint(&mut previous, &previous_rows);
            paint(&mut current, &current_rows);

            let updates = diff(&previous, &current).unwrap();
            let mut rebuilt = previous.clone();
            apply_updates(&mut rebuilt, &updates);
            proptest::prop_assert_eq!(rebuilt, current);
        }
    }
}
