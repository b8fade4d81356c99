use tracing::debug;

use crate::{Axis, Cluster, DisjointSetForest, PairIndex, Point, PointPair};

/// What a successful merge looks like to a [`MergeObserver`].
#[derive(Debug, Clone, Copy)]
pub struct MergeEvent<'a> {
    pub step: usize, // 1-based count of pairs consumed, including this one.
    pub pair: &'a PointPair,
    pub point_a: &'a Point,
    pub point_b: &'a Point,
    pub clusters_remaining: usize,
}

/// Gets called on every union that actually joins two clusters.
pub trait MergeObserver {
    fn on_merge(&mut self, event: &MergeEvent<'_>);
}

impl MergeObserver for () {
    fn on_merge(&mut self, _event: &MergeEvent<'_>) {}
}

impl<F> MergeObserver for F
where
    F: FnMut(&MergeEvent<'_>),
{
    fn on_merge(&mut self, event: &MergeEvent<'_>) {
        self(event)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MergeCounter {
    count: usize,
}

impl MergeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl MergeObserver for MergeCounter {
    fn on_merge(&mut self, _event: &MergeEvent<'_>) {
        self.count += 1;
    }
}

/// Keeps the product of one coordinate of each merged point, for the latest merge seen.
#[derive(Debug, Clone)]
pub struct CoordinateTap {
    left: Axis,
    right: Axis,
    last: Option<(PointPair, f64)>,
}

impl CoordinateTap {
    pub fn new(left: Axis, right: Axis) -> Self {
        Self {
            left,
            right,
            last: None,
        }
    }

    pub fn product(&self) -> Option<f64> {
        self.last.map(|(_, product)| product)
    }

    pub fn last_pair(&self) -> Option<&PointPair> {
        self.last.as_ref().map(|(pair, _)| pair)
    }
}

impl MergeObserver for CoordinateTap {
    fn on_merge(&mut self, event: &MergeEvent<'_>) {
        let product = event.point_a.coord(self.left) * event.point_b.coord(self.right);
        self.last = Some((*event.pair, product));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClustererState {
    Active,
    Exhausted,
}

/// Single-linkage clustering driven one closest pair at a time.
#[derive(Debug)]
pub struct IncrementalClusterer<O = ()> {
    points: Vec<Point>,
    pairs: PairIndex,
    forest: DisjointSetForest,
    step: usize,
    merges_n: usize,
    cluster_n: usize,
    observer: O,
}

impl IncrementalClusterer<()> {
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_observer(points, ())
    }
}

impl<O: MergeObserver> IncrementalClusterer<O> {
    pub fn with_observer(points: Vec<Point>, observer: O) -> Self {
        let pairs = PairIndex::new(&points);
        let forest = DisjointSetForest::new(points.len());
        let cluster_n = points.len();
        Self {
            points,
            pairs,
            forest,
            step: 0,
            merges_n: 0,
            cluster_n,
            observer,
        }
    }

    /// Consumes the next closest pair. Returns false only if no pair was left to consume.
    pub fn step(&mut self) -> bool {
        let Some(pair) = self.pairs.get(self.step).copied() else {
            return false;
        };
        self.step += 1;

        if self.forest.union(pair.index_a(), pair.index_b()) {
            self.merges_n += 1;
            self.cluster_n -= 1;

            let event = MergeEvent {
                step: self.step,
                pair: &pair,
                point_a: &self.points[pair.index_a()],
                point_b: &self.points[pair.index_b()],
                clusters_remaining: self.cluster_n,
            };
            debug!(
                "Step {}: merged point {} {} with point {} {} [distance: {:.2}], {} cluster(s) remaining.",
                event.step,
                pair.index_a(),
                event.point_a,
                pair.index_b(),
                event.point_b,
                pair.distance(),
                event.clusters_remaining
            );
            self.observer.on_merge(&event);
        }

        true
    }

    pub fn step_n(&mut self, n: usize) -> usize {
        let mut taken_n = 0;
        while taken_n < n && self.step() {
            taken_n += 1;
        }

        taken_n
    }

    /// Steps until every point is in one cluster or pairs run out.
    pub fn one_cluster(&mut self) -> bool {
        while self.cluster_n > 1 && self.step() {}

        self.cluster_n == 1
    }

    pub fn state(&self) -> ClustererState {
        if self.step < self.pairs.len() {
            ClustererState::Active
        } else {
            ClustererState::Exhausted
        }
    }

    pub fn steps_taken(&self) -> usize {
        self.step
    }

    pub fn merges_n(&self) -> usize {
        self.merges_n
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_n
    }

    /// Recounts roots over the whole forest, unlike [`Self::cluster_count`].
    pub fn count_clusters(&mut self) -> usize {
        self.forest.count_clusters()
    }

    pub fn clusters(&mut self) -> Vec<Cluster> {
        self.forest.get_clusters()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn pairs(&self) -> &PairIndex {
        &self.pairs
    }

    pub fn connected(&mut self, index_a: usize, index_b: usize) -> bool {
        self.forest.connected(index_a, index_b)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
