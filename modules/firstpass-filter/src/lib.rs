//! The filtering stages and their orchestrator: content heuristics, the
//! authenticity gate, the preprocessing gate, and the pipeline state machine
//! that sequences them and short-circuits on a Block.

pub mod authenticity;
pub mod content;
pub mod pipeline;
pub mod preprocess;
pub mod summary;

pub use authenticity::AuthenticityFilter;
pub use content::content_score;
pub use pipeline::Pipeline;
pub use preprocess::{Preprocessor, PreprocessorConfig};
pub use summary::{AnalysisSummary, ArticleVerdict};
