mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
pub mod sparse;
pub use self::sparse::SparseMatrix;
pub mod mapper;
pub use self::mapper::LabelMapper;
pub mod loader;
pub use self::loader::{load_edge_list, load_edge_list_file};

pub mod page_rank;
pub use self::page_rank::{Config, Dangling, Outcome, PageRankResult, RankEngine, Status};
