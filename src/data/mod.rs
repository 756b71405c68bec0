//! Precomputed artifacts: the movie table and the similarity matrix.
//!
//! Both are loaded once at startup and shared read-only for the lifetime of
//! the process.

pub mod loader;
pub mod similarity;
pub mod table;

pub use loader::load;
pub use similarity::SimilarityMatrix;
pub use table::MovieTable;

/// The loaded artifacts, aligned by row index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    table: MovieTable,
    similarity: SimilarityMatrix,
}

impl Catalog {
    pub fn new(table: MovieTable, similarity: SimilarityMatrix) -> Self {
        Self { table, similarity }
    }

    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
