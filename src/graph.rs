use log::info;

use crate::{board::Board, moves::onestep};

/// One-slide transitions between canonical boards, indexed by position in
/// the sorted vertex list.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Board>,
    edges: Vec<Vec<usize>>,
}

impl Graph {
    /// `vertices` must be sorted and closed under `onestep`, which is what
    /// `generate_boards` produces.
    pub fn build(vertices: Vec<Board>) -> Graph {
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));

        let edges: Vec<Vec<usize>> = vertices
            .iter()
            .map(|v| {
                // onestep is a BTreeSet, so the indices come out sorted and distinct
                onestep(v)
                    .iter()
                    .map(|dest| match vertices.binary_search(dest) {
                        Ok(ix) => ix,
                        Err(_) => unreachable!("successor is not a vertex:\n{}", dest),
                    })
                    .collect()
            })
            .collect();

        let graph = Graph { vertices, edges };
        info!("nv = {} ne = {}", graph.len(), graph.edge_count());
        graph
    }

    pub fn vertices(&self) -> &[Board] {
        &self.vertices
    }

    pub fn successors(&self, v: usize) -> &[usize] {
        &self.edges[v]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Predecessor lists: `reversed()[w]` holds every `v` with an edge `v -> w`.
    pub fn reversed(&self) -> Vec<Vec<usize>> {
        let mut rev = vec![Vec::new(); self.len()];
        for (v, succ) in self.edges.iter().enumerate() {
            for &w in succ {
                rev[w].push(v);
            }
        }
        rev
    }
}
