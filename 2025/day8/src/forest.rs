use std::collections::HashMap;

/// Union-find over point indices, with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parents: Vec<usize>,
    ranks: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    root: usize,
    members: Vec<usize>,
}

impl Cluster {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl DisjointSetForest {
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut node = x;
        while self.parents[node] != root {
            let parent = self.parents[node];
            self.parents[node] = root;
            node = parent;
        }

        root
    }

    /// Returns true if `x` and `y` were in different sets before this call.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (rank_x, rank_y) = (self.ranks[root_x], self.ranks[root_y]);
        if rank_x < rank_y {
            self.parents[root_x] = root_y;
        } else {
            self.parents[root_y] = root_x;
            if rank_x == rank_y {
                self.ranks[root_x] += 1;
            }
        }

        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn count_clusters(&mut self) -> usize {
        let mut root_n = 0;
        for ind in 0..self.len() {
            if self.find(ind) == ind {
                root_n += 1;
            }
        }

        root_n
    }

    /// Largest cluster first, ties ordered by root index.
    pub fn get_clusters(&mut self) -> Vec<Cluster> {
        let mut member_map: HashMap<usize, Vec<usize>> = HashMap::new();
        for ind in 0..self.len() {
            let root = self.find(ind);
            member_map.entry(root).or_default().push(ind);
        }

        let mut clusters = member_map
            .into_iter()
            .map(|(root, members)| Cluster { root, members })
            .collect::<Vec<_>>();
        clusters.sort_unstable_by(|left, right| {
            right
                .len()
                .cmp(&left.len())
                .then(left.root.cmp(&right.root))
        });

        clusters
    }
}
