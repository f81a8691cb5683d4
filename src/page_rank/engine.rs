use super::*;
use crate::*;
use std::ops::ControlFlow;

/// Power-iteration PageRank over a borrowed [`SparseMatrix`].
pub struct RankEngine<'a> {
    matrix: &'a SparseMatrix,
    config: Config,
    dangling_nodes: Vec<usize>,
    current_ranks: RankVector,
    dangling_weight: f64,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Iteration stops once the L1 change drops below this.
    pub epsilon: f64,
    pub max_iterations: usize,
    pub dangling: Dangling,
}

/// What happens to rank held by nodes without outgoing links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dangling {
    /// Spread it uniformly over all nodes every step.
    #[default]
    Redistribute,
    /// Let it leak. Total mass shrinks on graphs with dangling nodes.
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    BudgetExhausted,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub ranks: RankVector,
    pub iterations: usize,
    /// L1 change of the last committed iteration.
    pub delta: f64,
    pub status: Status,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 1e-9,
            max_iterations: 100,
            dangling: Dangling::Redistribute,
        }
    }
}

impl Config {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_dangling(mut self, dangling: Dangling) -> Self {
        self.dangling = dangling;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let damping = self.damping;
        if !(damping > 0.0 && damping < 1.0) {
            return Err(Error::InvalidConfig(format!("damping={damping}")));
        }
        let epsilon = self.epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(Error::InvalidConfig(format!("epsilon={epsilon}")));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig("max_iterations=0".to_string()));
        }
        Ok(())
    }
}

impl<'a> RankEngine<'a> {
    pub fn new(matrix: &'a SparseMatrix) -> Self {
        Self::build(matrix, Config::default())
    }

    pub fn with_config(matrix: &'a SparseMatrix, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(matrix, config))
    }

    fn build(matrix: &'a SparseMatrix, config: Config) -> Self {
        let dangling_nodes = matrix.dangling_nodes();
        let mut res = Self {
            matrix,
            config,
            dangling_nodes,
            current_ranks: uniform(matrix.row_count()),
            dangling_weight: 0.0,
        };
        res.dangling_weight = res.dangling_mass(&res.current_ranks);
        res
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ranks(&self) -> &[f64] {
        &self.current_ranks
    }

    /// Rank currently held by dangling nodes that the next step spreads out.
    pub fn dangling_weight(&self) -> f64 {
        self.dangling_weight
    }

    /// Restarts iteration from `ranks`. They need not sum to one.
    pub fn set_ranks(&mut self, ranks: RankVector) -> Result<()> {
        if ranks.len() != self.matrix.row_count() {
            return Err(Error::Dimension {
                expected: self.matrix.row_count(),
                actual: ranks.len(),
            });
        }
        self.commit(ranks);
        Ok(())
    }

    fn commit(&mut self, ranks: RankVector) {
        self.dangling_weight = self.dangling_mass(&ranks);
        self.current_ranks = ranks;
    }

    fn dangling_mass(&self, ranks: &[f64]) -> f64 {
        match self.config.dangling {
            Dangling::Redistribute => self.dangling_nodes.iter().map(|j| ranks[*j]).sum(),
            Dangling::Drop => 0.0,
        }
    }

    /// One power-iteration step from the current ranks.
    ///
    /// Returns the next rank vector and its L1 distance from the current one
    /// without committing it.
    pub fn step(&self) -> Result<(RankVector, f64)> {
        let n = self.matrix.row_count();
        if n == 0 {
            return Err(Error::DegenerateGraph);
        }
        let n = n as f64;
        let damping = self.config.damping;
        let teleport = (1.0 - damping) / n;
        let spread = self.dangling_weight / n;
        let mut next = self.matrix.multiply(&self.current_ranks)?;
        for r in next.iter_mut() {
            *r = teleport + damping * (*r + spread);
        }
        let delta = l1_difference(&next, &self.current_ranks)?;
        Ok((next, delta))
    }

    /// Iterates until the L1 change drops below epsilon or the iteration
    /// budget runs out.
    pub fn run(&mut self) -> Result<Outcome> {
        self.run_with(|_, _| ControlFlow::Continue(()))
    }

    /// Like [`Self::run`], calling `observer(iteration, delta)` after every
    /// committed iteration. Returning `Break` stops with [`Status::Cancelled`].
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<Outcome>
    where
        F: FnMut(usize, f64) -> ControlFlow<()>,
    {
        log::debug!(
            "running pagerank over {} nodes, {} edges, {} dangling",
            self.matrix.row_count(),
            self.matrix.nnz(),
            self.dangling_nodes.len()
        );
        let mut delta = f64::INFINITY;
        let mut status = Status::BudgetExhausted;
        let mut iterations = 0;
        while iterations < self.config.max_iterations {
            let (next, d) = self.step()?;
            self.commit(next);
            iterations += 1;
            delta = d;
            log::debug!("iteration {iterations}: delta={delta:.10}");
            let flow = observer(iterations, delta);
            if delta < self.config.epsilon {
                status = Status::Converged;
                break;
            }
            if flow.is_break() {
                status = Status::Cancelled;
                break;
            }
        }
        match status {
            Status::Converged => log::info!("converged after {iterations} iterations"),
            Status::BudgetExhausted => log::warn!(
                "no convergence within {iterations} iterations, delta={delta:e}"
            ),
            Status::Cancelled => log::info!("cancelled after {iterations} iterations"),
        }
        Ok(Outcome {
            ranks: self.current_ranks.clone(),
            iterations,
            delta,
            status,
        })
    }
}

impl Outcome {
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl PageRankResult for Outcome {
    fn page_rank(&self) -> &[f64] {
        &self.ranks
    }
}
