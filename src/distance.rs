//! Moves-to-solve for every vertex of a [`Graph`].
//!
//! Edges point from a position to its successors, while the distance we want
//! is measured towards the solved positions, so the search starts from all
//! solved vertices at once and walks the edges backwards.

use std::collections::VecDeque;

use log::debug;

use crate::graph::Graph;

/// `None` for positions from which the hero can never reach the center.
pub type Distance = Option<u32>;

/// Multi-source breadth-first search over the reverse adjacency.
pub fn distances(graph: &Graph) -> Vec<Distance> {
    let mut distance = vec![None; graph.len()];
    let mut queue = VecDeque::new();

    for (v, board) in graph.vertices().iter().enumerate() {
        if board.is_solution() {
            distance[v] = Some(0);
            queue.push_back(v);
        }
    }

    let reverse = graph.reversed();
    while let Some(w) = queue.pop_front() {
        let next = distance[w].map(|d| d + 1);
        for &v in &reverse[w] {
            if distance[v].is_none() {
                distance[v] = next;
                queue.push_back(v);
            }
        }
    }

    distance
}

/// Layered relaxation: at depth `d`, every unknown vertex with an edge into
/// depth `d` gets `d + 1`, until a pass assigns nothing. Same result as
/// [`distances`] in O(V·E).
pub fn distances_by_relaxation(graph: &Graph) -> Vec<Distance> {
    let mut distance: Vec<Distance> = graph
        .vertices()
        .iter()
        .map(|b| b.is_solution().then(|| 0))
        .collect();

    for d in 0.. {
        let mut assigned = 0usize;
        for v in 0..graph.len() {
            if distance[v].is_none()
                && graph
                    .successors(v)
                    .iter()
                    .any(|&w| distance[w] == Some(d))
            {
                distance[v] = Some(d + 1);
                assigned += 1;
            }
        }

        debug!("depth {}: {} vertices", d + 1, assigned);
        if assigned == 0 {
            break;
        }
    }

    distance
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generate::generate_boards;

    fn solved(robots: usize) -> (Graph, Vec<Distance>) {
        let graph = Graph::build(generate_boards(robots));
        let distance = distances(&graph);
        (graph, distance)
    }

    #[test]
    fn lone_hero() {
        let (graph, distance) = solved(0);
        for (board, d) in graph.vertices().iter().zip(&distance) {
            if board.is_solution() {
                assert_eq!(*d, Some(0));
            } else {
                // a single piece never collides with anything
                assert_eq!(*d, None);
            }
        }
    }

    #[test]
    fn zero_exactly_at_solutions() {
        for robots in 1..=3 {
            let (graph, distance) = solved(robots);
            for (board, d) in graph.vertices().iter().zip(&distance) {
                assert_eq!(board.is_solution(), *d == Some(0));
            }
        }
    }

    #[test]
    fn consistent_along_edges() {
        let (graph, distance) = solved(3);
        for v in 0..graph.len() {
            for &w in graph.successors(v) {
                if let (Some(dv), Some(dw)) = (distance[v], distance[w]) {
                    assert!(dv <= dw + 1);
                }
                // anything that can reach a solvable position is solvable
                if distance[w].is_some() {
                    assert!(distance[v].is_some());
                }
            }

            if let Some(d) = distance[v].filter(|&d| d > 0) {
                assert!(graph
                    .successors(v)
                    .iter()
                    .any(|&w| distance[w] == Some(d - 1)));
            }
        }
    }

    #[test]
    fn relaxation_matches_bfs() {
        for robots in 0..=3 {
            let graph = Graph::build(generate_boards(robots));
            assert_eq!(distances(&graph), distances_by_relaxation(&graph));
        }
    }

    #[test]
    fn histogram_for_three_robots() {
        let (_, distance) = solved(3);
        let count = |d| distance.iter().filter(|&&x| x == d).count();
        assert_eq!(count(Some(0)), 275);
        assert_eq!(count(Some(1)), 231);
        assert_eq!(count(Some(2)), 168);
        assert_eq!(count(Some(3)), 77);
        assert_eq!(count(Some(4)), 29);
        assert_eq!(count(Some(5)), 6);
        assert_eq!(count(None), 5649);
    }
}
