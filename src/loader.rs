//! Reads `SourceLabel DestLabel` edge lists.

use crate::{Error, LabelMapper, Result, SparseMatrix};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Parses one edge per line. Blank lines and `#` comments are skipped.
/// Labels that only ever appear as a destination still become nodes.
pub fn load_edge_list<R: BufRead>(reader: R) -> Result<(SparseMatrix, LabelMapper)> {
    let mut mapper = LabelMapper::new();
    let mut edges = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [source, dest] = fields[..] else {
            return Err(Error::Parse {
                line: i + 1,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        };
        let u = mapper.id_or_insert(source);
        let v = mapper.id_or_insert(dest);
        edges.push((u, v));
    }
    let matrix = SparseMatrix::from_edges(mapper.len(), &edges)?;
    log::info!(
        "loaded {} nodes and {} edges",
        matrix.row_count(),
        matrix.nnz()
    );
    Ok((matrix, mapper))
}

pub fn load_edge_list_file<P: AsRef<Path>>(path: P) -> Result<(SparseMatrix, LabelMapper)> {
    let path = path.as_ref();
    log::info!("reading edge list from {}", path.display());
    let file = File::open(path)?;
    load_edge_list(BufReader::new(file))
}
