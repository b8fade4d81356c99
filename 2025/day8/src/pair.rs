use std::slice::Iter;

use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    index_a: usize,
    index_b: usize,
    distance: f64,
}

impl PointPair {
    pub fn index_a(&self) -> usize {
        self.index_a
    }

    pub fn index_b(&self) -> usize {
        self.index_b
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Every unordered pair of points, closest first.
///
/// Pairs are generated with `index_a` ascending, then `index_b` ascending, and
/// sorted stably, so pairs at equal distance keep that order on every run.
#[derive(Debug, Clone)]
pub struct PairIndex {
    pairs: Vec<PointPair>,
}

impl PairIndex {
    pub fn new(points: &[Point]) -> Self {
        let point_n = points.len();
        let mut pairs = Vec::with_capacity(point_n * point_n.saturating_sub(1) / 2);
        for index_a in 0..point_n {
            for index_b in (index_a + 1)..point_n {
                pairs.push(PointPair {
                    index_a,
                    index_b,
                    distance: points[index_a].distance(&points[index_b]),
                });
            }
        }
        pairs.sort_by(|left, right| left.distance.total_cmp(&right.distance));

        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, ind: usize) -> Option<&PointPair> {
        self.pairs.get(ind)
    }

    pub fn iter(&self) -> Iter<'_, PointPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[PointPair] {
        &self.pairs
    }
}
