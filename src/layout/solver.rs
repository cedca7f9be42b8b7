//! The 1-D constraint solver.
//!
//! Resolves a list of [`Constraint`]s against a total length into a list
//! of `(start, length)` segments, honoring minimums/maximums, `Fill`
//! weights, [`Flex`] padding, and [`Spacing`] gaps/overlap. Deterministic:
//! identical inputs always produce identical outputs.

use super::constraint::Constraint;
use super::flex::Flex;
use super::spacing::Spacing;

/// A resolved segment: offset from the start of the solved range, and
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u16,
    pub length: u16,
}

/// Split `total` equally into `parts` buckets, earlier buckets receiving
/// any remainder — the tie-break convention this solver uses everywhere
/// leftover space must be divided among equal claimants (declaration
/// order wins ties, per the spec's open question on `Fill` tie-breaking).
fn distribute_equal(total: u32, parts: usize) -> Vec<u32> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts as u32;
    let remainder = total % parts as u32;
    (0..parts).map(|i| base + if (i as u32) < remainder { 1 } else { 0 }).collect()
}

/// Distribute `total` across `weights` proportionally, assigning the
/// leftover (from integer-division rounding) to the earliest-declared
/// weighted claimants one unit at a time.
fn distribute_by_weight(total: u32, weights: &[u32]) -> Vec<u32> {
    let sum: u32 = weights.iter().sum();
    if sum == 0 {
        return vec![0; weights.len()];
    }
    let mut shares: Vec<u32> = weights.iter().map(|w| (total as u64 * *w as u64 / sum as u64) as u32).collect();
    let allocated: u32 = shares.iter().sum();
    let mut leftover = total.saturating_sub(allocated);
    let mut i = 0;
    while leftover > 0 && !weights.is_empty() {
        if weights[i] > 0 {
            shares[i] += 1;
            leftover -= 1;
        }
        i = (i + 1) % weights.len();
    }
    shares
}

/// Resolve `constraints` against `total`, returning one [`Segment`] per
/// constraint in declaration order.
pub fn solve(constraints: &[Constraint], total: u16, flex: Flex, spacing: Spacing) -> Vec<Segment> {
    let n = constraints.len();
    if n == 0 {
        return Vec::new();
    }

    let total = total as i64;
    let gap = spacing.as_signed() as i64;
    let gap_count = (n - 1) as i64;
    // Positive spacing reserves room up front; negative spacing (overlap)
    // effectively grants extra room back to the segments themselves.
    let solve_total = (total - gap * gap_count).max(0) as u32;

    let mut mins: Vec<u32> = constraints.iter().map(|c| c.bounds(solve_total.min(u16::MAX as u32) as u16).0 as u32).collect();
    let total_min: u32 = mins.iter().sum();

    if total_min > solve_total {
        let mut overflow = total_min - solve_total;
        // Proportional shrink weighted by each segment's own minimum,
        // in declaration order.
        for m in mins.iter_mut() {
            if overflow == 0 {
                break;
            }
            let share = (overflow as u64 * *m as u64 / total_min as u64) as u32;
            let applied = share.min(*m);
            *m -= applied;
            overflow -= applied;
        }
        // Mop up any remainder from rounding, one cell at a time,
        // earliest segment first.
        let mut i = 0;
        let mut guard = 0;
        while overflow > 0 && guard < n * 2 {
            if mins[i] > 0 {
                mins[i] -= 1;
                overflow -= 1;
            }
            i = (i + 1) % n;
            guard += 1;
        }
    }

    let allocated: u32 = mins.iter().sum();
    let remainder = solve_total.saturating_sub(allocated);

    let weights: Vec<u32> = constraints.iter().map(|c| c.fill_weight().unwrap_or(0) as u32).collect();
    let has_fill = weights.iter().any(|w| *w > 0);

    let mut lengths = mins;
    let leftover_for_flex = if has_fill {
        let shares = distribute_by_weight(remainder, &weights);
        for (len, share) in lengths.iter_mut().zip(shares) {
            *len += share;
        }
        0
    } else {
        remainder
    };

    // Flex padding: a leading pad before the first segment, plus extra
    // gap inserted between each adjacent pair on top of `spacing`.
    let (leading_pad, between_extra) = flex_gaps(flex, leftover_for_flex, n);

    let mut segments = Vec::with_capacity(n);
    let mut cursor: i64 = leading_pad as i64;
    for (i, length) in lengths.iter().enumerate() {
        let start = cursor.max(0) as u32;
        segments.push(Segment { start: start.min(u16::MAX as u32) as u16, length: (*length).min(u16::MAX as u32) as u16 });
        if i + 1 < n {
            cursor += *length as i64 + gap + between_extra[i] as i64;
        }
    }

    segments
}

/// `(leading_pad, between_extra[0..n-1])` for a given flex mode and
/// amount of leftover space.
fn flex_gaps(flex: Flex, leftover: u32, n: usize) -> (u32, Vec<u32>) {
    match flex {
        Flex::Start | Flex::Legacy => (0, vec![0; n.saturating_sub(1)]),
        Flex::End => (leftover, vec![0; n.saturating_sub(1)]),
        Flex::Center => (leftover / 2, vec![0; n.saturating_sub(1)]),
        Flex::SpaceBetween => {
            if n <= 1 {
                (0, Vec::new())
            } else {
                (0, distribute_equal(leftover, n - 1))
            }
        }
        Flex::SpaceAround => {
            let margins = distribute_equal(leftover, 2 * n);
            let leading = margins.first().copied().unwrap_or(0);
            let between = (0..n.saturating_sub(1))
                .map(|i| margins[2 * i + 1] + margins[2 * i + 2])
                .collect();
            (leading, between)
        }
        Flex::SpaceEvenly => {
            let gaps = distribute_equal(leftover, n + 1);
            let leading = gaps.first().copied().unwrap_or(0);
            let between = (0..n.saturating_sub(1)).map(|i| gaps[i + 1]).collect();
            (leading, between)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_c_length_fill_length() {
        let constraints = [Constraint::Length(3), Constraint::Fill(1), Constraint::Length(5)];
        let segments = solve(&constraints, 20, Flex::Start, Spacing::Space(0));
        assert_eq!(segments, vec![
            Segment { start: 0, length: 3 },
            Segment { start: 3, length: 12 },
            Segment { start: 15, length: 5 },
        ]);
    }

    #[test]
    fn scenario_d_flex_center() {
        let constraints = [Constraint::Length(4), Constraint::Length(4)];
        let segments = solve(&constraints, 10, Flex::Center, Spacing::Space(0));
        assert_eq!(segments, vec![
            Segment { start: 1, length: 4 },
            Segment { start: 5, length: 4 },
        ]);
    }

    #[test]
    fn sum_of_lengths_and_spacing_equals_total() {
        let constraints = [Constraint::Fill(1), Constraint::Fill(2), Constraint::Length(3)];
        let segments = solve(&constraints, 33, Flex::SpaceBetween, Spacing::Space(2));
        let last = segments.last().unwrap();
        assert_eq!(last.start + last.length, 33);
    }

    #[test]
    fn space_between_has_no_edge_gap() {
        let constraints = [Constraint::Length(2), Constraint::Length(2), Constraint::Length(2)];
        let segments = solve(&constraints, 12, Flex::SpaceBetween, Spacing::Space(0));
        assert_eq!(segments[0].start, 0);
        let last = segments.last().unwrap();
        assert_eq!(last.start + last.length, 12);
        // equal gaps of 2 between each pair of 2-wide segments: 0,4,8
        assert_eq!(segments.iter().map(|s| s.start).collect::<Vec<_>>(), vec![0, 4, 8]);
    }

    #[test]
    fn space_evenly_has_equal_edge_and_between_gaps() {
        let constraints = [Constraint::Length(2), Constraint::Length(2)];
        // total 10, 2 segments of length 2 = 4 consumed, 6 leftover across 3 gaps = 2 each
        let segments = solve(&constraints, 10, Flex::SpaceEvenly, Spacing::Space(0));
        assert_eq!(segments[0].start, 2);
        assert_eq!(segments[1].start, 6);
    }

    #[test]
    fn overflow_shrinks_mins_proportionally_in_order() {
        let constraints = [Constraint::Length(10), Constraint::Length(10)];
        let segments = solve(&constraints, 10, Flex::Start, Spacing::Space(0));
        let total: u16 = segments.iter().map(|s| s.length).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn positive_spacing_is_inserted_between_segments() {
        let constraints = [Constraint::Length(3), Constraint::Length(3)];
        let segments = solve(&constraints, 10, Flex::Start, Spacing::Space(2));
        assert_eq!(segments[0], Segment { start: 0, length: 3 });
        assert_eq!(segments[1], Segment { start: 5, length: 3 });
    }

    #[test]
    fn negative_spacing_overlaps_without_shrinking_segments() {
        let constraints = [Constraint::Length(3), Constraint::Length(3)];
        let segments = solve(&constraints, 10, Flex::Start, Spacing::Overlap(2));
        assert_eq!(segments[0].length, 3);
        assert_eq!(segments[1].length, 3);
        assert_eq!(segments[1].start, 1);
    }

    #[test]
    fn empty_constraints_yield_empty_segments() {
        assert_eq!(solve(&[], 10, Flex::Start, Spacing::Space(0)), Vec::new());
    }

    proptest::proptest! {
        #[test]
        fn fill_distribution_sums_to_leftover(weights in proptest::collection::vec(1u16..=20, 1..6), total in 0u16..500) {
            let constraints: Vec<Constraint> = weights.iter().map(|w| Constraint::Fill(*w)).collect();
            let segments = solve(&constraints, total, Flex::Start, Spacing::Space(0));
            let sum: u32 = segments.iter().map(|s| s.length as u32).sum();
            proptest::prop_assert_eq!(sum, total as u32);
        }
    }
}
