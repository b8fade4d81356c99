use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod cluster;
pub mod forest;
pub mod pair;
pub mod point;

pub use cluster::{
    ClustererState, CoordinateTap, IncrementalClusterer, MergeCounter, MergeEvent, MergeObserver,
};
pub use forest::{Cluster, DisjointSetForest};
pub use pair::{PairIndex, PointPair};
pub use point::{Axis, Point};

#[derive(Debug)]
pub enum Error {
    InvalidPointText(String),
    EmptyPointSet,
    NotEnoughClusters(usize, usize), // (expected count, actual count)
    NoMergePerformed,
    ProductOverflow(usize), // Count of cluster sizes to multiply.
    ProductOutOfRange(f64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPointText(s) => write!(
                f,
                "Invalid text({}) for point, expect three comma separated coordinates.",
                s
            ),
            Error::EmptyPointSet => write!(f, "Given point set is empty."),
            Error::NotEnoughClusters(expect_n, actual_n) => write!(
                f,
                "Expect at least {} cluster(s), given {}.",
                expect_n, actual_n
            ),
            Error::NoMergePerformed => write!(
                f,
                "No pair of points has been merged, need at least two points."
            ),
            Error::ProductOverflow(factor_n) => write!(
                f,
                "Product of the {} largest cluster size(s) overflows.",
                factor_n
            ),
            Error::ProductOutOfRange(product) => write!(
                f,
                "Coordinate product({}) can't be represented as a 64-bit integer.",
                product
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 1000)]
    pub pair_n: usize,
    #[arg(default_value_t = 3)]
    pub top_n: usize,
}

/// Install a stderr subscriber filtered by `RUST_LOG`, so answers on stdout stay clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let point = Point::try_from(line.as_str()).with_context(|| {
            format!(
                "Failed to read point from line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        points.push(point);
    }

    Ok(points)
}

/// Consumes the `pair_n` closest pairs, then multiplies the sizes of the `top_n` largest clusters.
pub fn largest_clusters_product(
    points: &[Point],
    pair_n: usize,
    top_n: usize,
) -> std::result::Result<usize, Error> {
    let mut clusterer = IncrementalClusterer::new(points.to_vec());
    let step_n = clusterer.step_n(pair_n);
    debug!(
        "Consumed {} pair(s), {} merge(s) performed.",
        step_n,
        clusterer.merges_n()
    );

    let clusters = clusterer.clusters();
    report_clusters(points, &clusters);
    if clusters.len() < top_n {
        return Err(Error::NotEnoughClusters(top_n, clusters.len()));
    }

    clusters
        .iter()
        .take(top_n)
        .try_fold(1usize, |product, cluster| product.checked_mul(cluster.len()))
        .ok_or(Error::ProductOverflow(top_n))
}

/// Merges closest pairs until all points are connected, returns the product of
/// X coordinates of the two points joined by the connecting merge.
pub fn connecting_coordinate_product(points: &[Point]) -> std::result::Result<i64, Error> {
    if points.is_empty() {
        return Err(Error::EmptyPointSet);
    }

    let mut clusterer =
        IncrementalClusterer::with_observer(points.to_vec(), CoordinateTap::new(Axis::X, Axis::X));
    clusterer.one_cluster();
    report_clusters(points, &clusterer.clusters());

    let product = clusterer
        .observer()
        .product()
        .ok_or(Error::NoMergePerformed)?;
    // Fractions are dropped.
    if product.is_finite() && product >= i64::MIN as f64 && product < i64::MAX as f64 {
        Ok(product as i64)
    } else {
        Err(Error::ProductOutOfRange(product))
    }
}

fn report_clusters(points: &[Point], clusters: &[Cluster]) {
    for (ind, cluster) in clusters.iter().enumerate() {
        debug!(
            "Cluster {} (root: {}, size: {}):",
            ind + 1,
            cluster.root(),
            cluster.len()
        );
        for &member in cluster.members() {
            debug!("  Point {}: {}", member, points[member]);
        }
    }
    debug!("Total clusters: {}", clusters.len());
}
