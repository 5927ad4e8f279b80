//! Command implementations.

mod rewrite;

pub use rewrite::{
    plan_rewrite, rewrite, run_rewrite, FileError, FileOp, PlannedRewrite, RewriteOptions,
    RewriteReport,
};
