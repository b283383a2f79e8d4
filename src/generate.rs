use std::collections::BTreeSet;

use itertools::Itertools;
use log::info;

use crate::board::{Board, CELLS};

/// Every robot bitmask with exactly `robots` bits set among the 25 cells.
pub fn robot_masks(robots: usize) -> impl Iterator<Item = u32> {
    (0..CELLS)
        .combinations(robots)
        .map(|cells| cells.into_iter().fold(0u32, |mask, ix| mask | 1 << ix))
}

/// Number of ways to place one hero and `robots` robots on distinct cells.
pub fn raw_placements(robots: usize) -> u64 {
    if robots >= CELLS {
        return 0;
    }

    // 25 * C(24, robots)
    (0..robots as u64).fold(CELLS as u64, |acc, k| acc * (CELLS as u64 - 1 - k) / (k + 1))
}

/// All placements of one hero and `robots` robots, with symmetric copies
/// collapsed. The result is sorted and contains only canonical boards.
///
/// There is no room for the hero once `robots` reaches 25, so the result is
/// simply empty from there on.
pub fn generate_boards(robots: usize) -> Vec<Board> {
    let mut vertices = BTreeSet::new();
    let mut visited = 0u64;

    for mask in robot_masks(robots) {
        for hero in (0..CELLS).filter(|&ix| mask & (1 << ix) == 0) {
            vertices.insert(Board::from_mask(mask, hero).canonical());
            visited += 1;
        }
    }

    info!(
        "robots = {}: {} placements, {} canonical boards",
        robots,
        visited,
        vertices.len()
    );

    vertices.into_iter().collect()
}
