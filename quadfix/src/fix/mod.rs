//! Literal rewriting engine.
//!
//! `ByteRangeRewriter` splices byte-range edits into a document in a single
//! forward pass. `LiteralRewriter` drives it once per
//! substitution rule, turning each match of the rule's search literal into
//! an edit.

mod literal;
mod rewriter;

pub use literal::{LiteralRewriter, Rewritten, RuleOutcome};
pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
