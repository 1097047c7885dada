//! Standard bracket seeding order
//!
//! Level 4 - Utilities

/// Compute the slot order of seeds for a field of `n` entrants.
///
/// Returns a permutation of `1..=n` (1-indexed seed ranks). Adjacent pairs
/// meet in the opening round, and the top two seeds land in opposite halves
/// so they can only meet in the final.
///
/// Built by doubling: starting from `[1]`, every seed `e` is followed by its
/// mirror `size + 1 - e`, where `size` is the length of the next sequence.
///
/// `n` must be a power of two. Other values yield the order for the next
/// power of two (and `[1]` for `n <= 1`).
pub fn seeding_order(n: usize) -> Vec<usize> {
    debug_assert!(n.is_power_of_two(), "seeding_order needs a power of two, got {}", n);

    let mut order = vec![1];
    while order.len() < n {
        let size = order.len() * 2;
        order = order.iter().flat_map(|&e| [e, size + 1 - e]).collect();
    }
    order
}

/// Smallest power of two that holds `count` entrants, never below 2
pub fn padded_size(count: usize) -> usize {
    count.max(2).next_power_of_two()
}
