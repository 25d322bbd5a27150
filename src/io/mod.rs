pub mod loader;
pub mod writer;

pub use loader::load_graph;
pub use writer::{write_results, ResultWriter};
