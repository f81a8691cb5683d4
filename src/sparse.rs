//! Row-compressed storage of the transposed link matrix.
//!
//! Row `i` lists every node linking *into* `i`, so a matrix-vector product
//! pulls rank along incoming edges.

use crate::{Error, RankVector, Result};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SparseMatrix {
    row_count: usize,
    values: Vec<f64>,
    column_indices: Vec<usize>,
    row_offsets: Vec<usize>,
}

impl SparseMatrix {
    /// Takes the three compressed-row arrays verbatim after checking that
    /// they describe a `row_count` x `row_count` matrix.
    pub fn new(
        row_count: usize,
        values: Vec<f64>,
        column_indices: Vec<usize>,
        row_offsets: Vec<usize>,
    ) -> Result<Self> {
        if values.len() != column_indices.len() {
            return Err(Error::Shape(format!(
                "{} values but {} column indices",
                values.len(),
                column_indices.len()
            )));
        }
        let Some(offsets_len) = row_count.checked_add(1) else {
            return Err(Error::Shape(format!("{row_count} rows do not fit")));
        };
        if row_offsets.len() != offsets_len {
            return Err(Error::Shape(format!(
                "{} row offsets for {row_count} rows",
                row_offsets.len()
            )));
        }
        if row_offsets[0] != 0 {
            return Err(Error::Shape(format!(
                "first row offset is {}",
                row_offsets[0]
            )));
        }
        if let Some(i) = row_offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::Shape(format!(
                "row offsets decrease at row {i}: {} > {}",
                row_offsets[i],
                row_offsets[i + 1]
            )));
        }
        if row_offsets[row_count] != values.len() {
            return Err(Error::Shape(format!(
                "last row offset is {} but there are {} entries",
                row_offsets[row_count],
                values.len()
            )));
        }
        if let Some(k) = column_indices.iter().position(|c| *c >= row_count) {
            return Err(Error::Shape(format!(
                "column index {} at entry {k} is out of range",
                column_indices[k]
            )));
        }
        if let Some(k) = values.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::Shape(format!(
                "weight {} at entry {k} is not a finite non-negative number",
                values[k]
            )));
        }
        Ok(Self {
            row_count,
            values,
            column_indices,
            row_offsets,
        })
    }

    /// Builds the transposed transition matrix of a directed graph given as
    /// `(source, sink)` pairs. Each edge carries `1 / out_degree(source)`;
    /// parallel edges count separately.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if let Some((u, v)) = edges
            .iter()
            .find(|(u, v)| *u >= node_count || *v >= node_count)
        {
            return Err(Error::Shape(format!(
                "edge ({u}, {v}) leaves the {node_count} nodes"
            )));
        }
        let Some(offsets_len) = node_count.checked_add(1) else {
            return Err(Error::Shape(format!("{node_count} nodes do not fit")));
        };
        let mut out_degrees = vec![0usize; node_count];
        let mut row_offsets = vec![0usize; offsets_len];
        for (u, v) in edges.iter() {
            out_degrees[*u] += 1;
            row_offsets[*v + 1] += 1;
        }
        for i in 0..node_count {
            row_offsets[i + 1] += row_offsets[i];
        }
        // counting sort by sink, stable in edge order
        let mut cursor = row_offsets.clone();
        let mut values = vec![0.0; edges.len()];
        let mut column_indices = vec![0usize; edges.len()];
        for (u, v) in edges.iter() {
            let k = cursor[*v];
            values[k] = 1.0 / (out_degrees[*u] as f64);
            column_indices[k] = *u;
            cursor[*v] += 1;
        }
        Self::new(node_count, values, column_indices, row_offsets)
    }

    /// Builds the matrix from a graph.
    ///
    /// Vertices are numbered densely in iteration order; the returned table
    /// maps each row back to its vertex.
    pub fn from_graph<G: QueryableGraph>(g: &G) -> Result<(Self, Vec<VertexId>)> {
        let vertices: Vec<VertexId> = g.iter_vertices().collect();
        let index: HashMap<VertexId, usize, ahash::RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        let mut edges = Vec::with_capacity(g.edge_size());
        for (i, u) in vertices.iter().enumerate() {
            for e in g.out_edges(u) {
                let Some(j) = index.get(&e.sink) else {
                    return Err(Error::Shape(format!("edge to unknown vertex {:?}", e.sink)));
                };
                edges.push((i, *j));
            }
        }
        let m = Self::from_edges(vertices.len(), &edges)?;
        Ok((m, vertices))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// `(source, weight)` entries of row `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.row_count()`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_offsets[i];
        let end = self.row_offsets[i + 1];
        self.column_indices[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// `result[i] = sum of values[k] * v[column_indices[k]]` over row `i`.
    pub fn multiply(&self, v: &[f64]) -> Result<RankVector> {
        if v.len() != self.row_count {
            return Err(Error::Dimension {
                expected: self.row_count,
                actual: v.len(),
            });
        }
        let mut result = vec![0.0; self.row_count];
        for (i, r) in result.iter_mut().enumerate() {
            *r = self.row(i).map(|(j, w)| w * v[j]).sum();
        }
        Ok(result)
    }

    /// Nodes with no outgoing edge, i.e. columns without any entry.
    pub fn dangling_nodes(&self) -> Vec<usize> {
        let mut linked = vec![false; self.row_count];
        for j in self.column_indices.iter() {
            linked[*j] = true;
        }
        linked
            .iter()
            .enumerate()
            .filter_map(|(j, l)| if *l { None } else { Some(j) })
            .collect()
    }
}
