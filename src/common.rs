use crate::{Error, Result};
use keyed_priority_queue::KeyedPriorityQueue;

/// One rank estimate per node, indexed by node id.
pub type RankVector = Vec<f64>;

pub fn uniform(n: usize) -> RankVector {
    if n == 0 {
        return vec![];
    }
    vec![1.0 / (n as f64); n]
}

pub fn norm_1(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// Sum of absolute per-element differences.
pub fn l1_difference(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::Dimension {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
}

/// Ids of the `k` highest ranks, best first.
pub fn top_k(ranks: &[f64], k: usize) -> Vec<(usize, f64)> {
    let mut q = KeyedPriorityQueue::new();
    for (v, r) in ranks.iter().enumerate() {
        q.push(v, FullOrdFloat(*r));
    }
    let mut res = Vec::with_capacity(k.min(ranks.len()));
    while res.len() < k {
        let Some((v, FullOrdFloat(r))) = q.pop() else {
            break;
        };
        res.push((v, r));
    }
    res
}

#[derive(Debug, Clone, Copy)]
pub struct FullOrdFloat(pub f64);
impl PartialOrd for FullOrdFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FullOrdFloat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialEq for FullOrdFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for FullOrdFloat {}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn l1_difference_sums_abs_deltas() {
        let a = [0.1, 0.5, 0.4];
        let b = [0.2, 0.4, 0.4];
        let diff = l1_difference(&a, &b).unwrap();
        assert!((diff - 0.2).abs() < TOLERANCE, "diff={diff}");
    }

    #[test]
    fn l1_difference_of_identical_vectors() {
        let a = [0.3, 0.3];
        let diff = l1_difference(&a, &a).unwrap();
        assert_eq!(diff, 0.0);
    }

    #[test]
    fn l1_difference_rejects_mismatched_lengths() {
        let res = l1_difference(&[1.0, 2.0], &[1.0]);
        assert!(
            matches!(
                res,
                Err(Error::Dimension {
                    expected: 2,
                    actual: 1
                })
            ),
            "{res:?}"
        );
    }

    #[test]
    fn uniform_splits_unit_mass() {
        let v = uniform(4);
        assert_eq!(v, vec![0.25; 4]);
        assert!((norm_1(&v) - 1.0).abs() < TOLERANCE);
        assert!(uniform(0).is_empty());
    }

    #[test]
    fn top_k_orders_by_rank() {
        let ranks = [0.1, 0.4, 0.2, 0.3];
        assert_eq!(top_k(&ranks, 2), vec![(1, 0.4), (3, 0.3)]);
        assert_eq!(top_k(&ranks, 10).len(), 4);
        assert!(top_k(&ranks, 0).is_empty());
    }

    #[test]
    fn full_ord_float_orders_nan_last() {
        let mut xs = [FullOrdFloat(f64::NAN), FullOrdFloat(1.0), FullOrdFloat(-1.0)];
        xs.sort();
        assert_eq!(xs[0].0, -1.0);
        assert_eq!(xs[1].0, 1.0);
        assert!(xs[2].0.is_nan());
    }
}
