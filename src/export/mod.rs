//! Export of solved game trees
//!
//! Supports a JSON report of the root evaluation and a CSV table of node
//! counts per depth.

mod report;

pub use report::{DepthRecord, ExportFormat, MoveValue, ReportExporter, SolveReport};
