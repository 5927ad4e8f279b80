//! The fixed substitution table for the quadrant migration.
//!
//! Rules run top to bottom, each as one full pass over the document. No
//! search literal occurs inside another rule's search or replacement, so the
//! order of the table does not change the result for this set.

use serde::Serialize;

/// One literal substitution: every occurrence of `search` becomes `replace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Exact text to find.
    pub search: &'static str,
    /// Text written in its place.
    pub replace: &'static str,
}

impl Rule {
    /// Create a new rule.
    #[must_use]
    pub const fn new(search: &'static str, replace: &'static str) -> Self {
        Self { search, replace }
    }
}

/// Quoted quadrant values rewritten to `Quadrant` enum references.
pub const QUADRANT_RULES: &[Rule] = &[
    // Object field values
    Rule::new("quadrant: 'DO',", "quadrant: Quadrant.DO,"),
    Rule::new("quadrant: 'PLAN',", "quadrant: Quadrant.PLAN,"),
    Rule::new("quadrant: 'DELEGATE',", "quadrant: Quadrant.DELEGATE,"),
    Rule::new("quadrant: 'ELIMINATE',", "quadrant: Quadrant.ELIMINATE,"),
    // toBe assertions
    Rule::new("toBe('DO')", "toBe(Quadrant.DO)"),
    Rule::new("toBe('PLAN')", "toBe(Quadrant.PLAN)"),
    Rule::new("toBe('DELEGATE')", "toBe(Quadrant.DELEGATE)"),
    Rule::new("toBe('ELIMINATE')", "toBe(Quadrant.ELIMINATE)"),
    // Call sites
    Rule::new("getTasksByQuadrant('DO')", "getTasksByQuadrant(Quadrant.DO)"),
    Rule::new(
        "moveToQuadrant('non-existent-id', 'DO')",
        "moveToQuadrant('non-existent-id', Quadrant.DO)",
    ),
    Rule::new(
        "moveToQuadrant(task.id, 'ELIMINATE')",
        "moveToQuadrant(task.id, Quadrant.ELIMINATE)",
    ),
    Rule::new(
        "moveToQuadrant(task.id, 'PLAN')",
        "moveToQuadrant(task.id, Quadrant.PLAN)",
    ),
    Rule::new(
        "moveToQuadrant(task.id, 'DELEGATE')",
        "moveToQuadrant(task.id, Quadrant.DELEGATE)",
    ),
    Rule::new(
        "moveToQuadrant(task.id, 'DO')",
        "moveToQuadrant(task.id, Quadrant.DO)",
    ),
];
