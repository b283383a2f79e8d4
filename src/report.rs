use std::{collections::BTreeMap, fmt::Display, ops::RangeInclusive};

use log::info;

use crate::{
    board::{Board, MAX_ROBOTS},
    distance::{distances, Distance},
    error::{Error, Result},
    generate::generate_boards,
    graph::Graph,
};

/// Everything computed for one robot count.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub robots: usize,
    pub graph: Graph,
    pub distances: Vec<Distance>,
}

pub fn analyze(robots: usize) -> Analysis {
    let graph = Graph::build(generate_boards(robots));
    let distances = distances(&graph);

    Analysis {
        robots,
        graph,
        distances,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub robots: usize,
    pub vertices: usize,
    pub edges: usize,
    /// largest finite distance, `None` if nothing is solvable
    pub max_distance: Option<u32>,
    /// positions at `max_distance`, in vertex order
    pub hardest: Vec<Board>,
    pub unreachable: usize,
    pub histogram: BTreeMap<u32, usize>,
}

impl Report {
    pub fn new(analysis: &Analysis) -> Report {
        let vertices = analysis.graph.vertices();

        let mut histogram = BTreeMap::new();
        for d in analysis.distances.iter().flatten() {
            *histogram.entry(*d).or_insert(0) += 1;
        }

        let max_distance = histogram.keys().next_back().copied();
        let hardest = match max_distance {
            Some(max) => vertices
                .iter()
                .zip(&analysis.distances)
                .filter(|(_, d)| **d == Some(max))
                .map(|(b, _)| *b)
                .collect(),
            None => Vec::new(),
        };

        let report = Report {
            robots: analysis.robots,
            vertices: vertices.len(),
            edges: analysis.graph.edge_count(),
            max_distance,
            unreachable: analysis.distances.iter().filter(|d| d.is_none()).count(),
            hardest,
            histogram,
        };

        info!(
            "nr = {} max_d: {:?} -- {}",
            report.robots,
            report.max_distance,
            report.hardest.len()
        );
        report
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "nr = {}: nv = {} ne = {}.",
            self.robots, self.vertices, self.edges
        )?;

        let max = match self.max_distance {
            Some(max) => max,
            None => return writeln!(f, "nr = {}: no solvable positions", self.robots),
        };

        writeln!(f, "nr = {} max_d: {} -- {}", self.robots, max, self.hardest.len())?;
        for (d, count) in &self.histogram {
            writeln!(f, "  d = {:2}: {}", d, count)?;
        }
        writeln!(f, "  unsolvable: {}", self.unreachable)?;

        for board in &self.hardest {
            writeln!(f)?;
            writeln!(f, "nr = {} d = {}", self.robots, max)?;
            writeln!(f, "{}", board)?;
        }

        Ok(())
    }
}

/// Robot counts to survey, validated against what fits on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotRange(RangeInclusive<usize>);

impl RobotRange {
    pub fn new(min: usize, max: usize) -> Result<RobotRange> {
        if min > max || max > MAX_ROBOTS {
            return Err(Error::RobotRange { min, max });
        }

        Ok(RobotRange(min..=max))
    }

    pub fn counts(&self) -> RangeInclusive<usize> {
        self.0.clone()
    }
}

/// One report per robot count, computed lazily in increasing order.
pub fn survey(range: &RobotRange) -> impl Iterator<Item = Report> {
    range.counts().map(|robots| Report::new(&analyze(robots)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn no_robots() {
        let report = Report::new(&analyze(0));
        assert_eq!(report.vertices, 6);
        assert_eq!(report.edges, 0);
        assert_eq!(report.max_distance, Some(0));
        assert_eq!(report.unreachable, 5);
        assert_eq!(
            report.hardest,
            vec![parse_board(".....\n.....\n..x..\n.....\n.....").unwrap()]
        );
    }

    #[test]
    fn one_robot() {
        let report = Report::new(&analyze(1));
        assert_eq!(report.vertices, 85);
        assert_eq!(report.edges, 36);
        assert_eq!(report.max_distance, Some(1));
        assert_eq!(report.unreachable, 78);
        assert_eq!(report.histogram, BTreeMap::from([(0, 5), (1, 2)]));
        assert_eq!(
            report.hardest,
            vec![
                parse_board(".....\n.....\n.x.r.\n.....\n.....").unwrap(),
                parse_board(".....\n.....\n.r..x\n.....\n.....").unwrap(),
            ]
        );
    }

    #[test]
    fn empty_vertex_set() {
        let report = Report::new(&analyze(25));
        assert_eq!(report.vertices, 0);
        assert_eq!(report.max_distance, None);
        assert!(report.hardest.is_empty());
        assert!(report.to_string().contains("no solvable positions"));
    }

    #[test]
    fn display_lists_hardest() {
        let text = Report::new(&analyze(1)).to_string();
        assert!(text.starts_with("nr = 1: nv = 85 ne = 36."));
        assert!(text.contains("nr = 1 max_d: 1 -- 2"));
        assert!(text.contains(".x.r."));
        assert!(text.contains(".r..x"));
    }

    #[test]
    fn robot_range_validation() {
        assert!(RobotRange::new(0, 24).is_ok());
        assert_eq!(
            RobotRange::new(0, 25),
            Err(Error::RobotRange { min: 0, max: 25 })
        );
        assert!(RobotRange::new(3, 2).is_err());
    }

    #[test]
    fn survey_in_order() {
        let range = RobotRange::new(0, 2).unwrap();
        let reports: Vec<Report> = survey(&range).collect();
        assert_eq!(
            reports.iter().map(|r| r.robots).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(reports[2].vertices, 904);
        assert_eq!(reports[2].max_distance, Some(2));
        assert_eq!(reports[2].hardest.len(), 11);
    }
}
