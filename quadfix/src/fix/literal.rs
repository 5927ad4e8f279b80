//! Sequential literal substitution on top of [`ByteRangeRewriter`].

use serde::Serialize;

use super::rewriter::{ByteRangeRewriter, Edit, RewriteError};
use crate::rules::Rule;

/// How many occurrences a single rule replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// The rule that ran
    #[serde(flatten)]
    pub rule: Rule,
    /// Number of occurrences replaced by its pass
    pub matches: usize,
}

/// Result of running every rule over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The final document text
    pub content: String,
    /// One outcome per rule, in table order
    pub outcomes: Vec<RuleOutcome>,
}

impl Rewritten {
    /// Sum of matches across all rules
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }
}

/// Applies an ordered rule table to a document, one full pass per rule.
///
/// Each pass replaces every non-overlapping occurrence of the rule's search
/// literal, scanning left to right. Later rules see the output of earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct LiteralRewriter<'r> {
    rules: &'r [Rule],
}

impl<'r> LiteralRewriter<'r> {
    /// Create a rewriter over the given rules
    #[must_use]
    pub const fn new(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    /// Run all rules over `document`.
    ///
    /// # Errors
    /// Returns [`RewriteError::EmptySearch`] if any rule has an empty search literal.
    pub fn apply(&self, document: &str) -> Result<Rewritten, RewriteError> {
        if let Some(rule_index) = self.rules.iter().position(|r| r.search.is_empty()) {
            return Err(RewriteError::EmptySearch { rule_index });
        }

        let mut content = document.to_owned();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in self.rules {
            let edits: Vec<Edit> = content
                .match_indices(rule.search)
                .map(|(start, found)| Edit::new(start, start + found.len(), rule.replace))
                .collect();
            let matches = edits.len();

            if matches > 0 {
                let mut rewriter = ByteRangeRewriter::new(content);
                rewriter.add_edits(edits);
                content = rewriter.apply()?;
            }

            outcomes.push(RuleOutcome {
                rule: *rule,
                matches,
            });
        }

        Ok(Rewritten { content, outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::QUADRANT_RULES;

    const SAMPLE: &str = r"import { TaskService } from '../../../src/services/task-service';
import { Quadrant } from '../../../src/types';

describe('TaskService', () => {
  it('creates a task', () => {
    const task = service.createTask({
      title: 'Write docs',
      quadrant: 'DO',
    });
    expect(task.quadrant).toBe('DO');
  });

  it('filters by quadrant', () => {
    service.createTask({ title: 'a', quadrant: 'PLAN', });
    service.createTask({ title: 'b', quadrant: 'DELEGATE', });
    service.createTask({ title: 'c', quadrant: 'ELIMINATE', });
    expect(service.getTasksByQuadrant('DO')).toHaveLength(1);
  });

  it('moves tasks', () => {
    expect(service.moveToQuadrant('non-existent-id', 'DO')).toBeNull();
    service.moveToQuadrant(task.id, 'ELIMINATE');
    expect(task.quadrant).toBe('ELIMINATE');
    service.moveToQuadrant(task.id, 'PLAN');
    expect(task.quadrant).toBe('PLAN');
    service.moveToQuadrant(task.id, 'DELEGATE');
    expect(task.quadrant).toBe('DELEGATE');
    service.moveToQuadrant(task.id, 'DO');
  });
});
";

    #[test]
    fn test_field_value_scenario() {
        let out = LiteralRewriter::new(QUADRANT_RULES)
            .apply("quadrant: 'DO',")
            .unwrap();
        assert_eq!(out.content, "quadrant: Quadrant.DO,");
        assert_eq!(out.total_matches(), 1);
    }

    #[test]
    fn test_to_be_scenario() {
        let out = LiteralRewriter::new(QUADRANT_RULES)
            .apply("expect(result).toBe('PLAN')")
            .unwrap();
        assert_eq!(out.content, "expect(result).toBe(Quadrant.PLAN)");
    }

    #[test]
    fn test_call_site_scenario() {
        let out = LiteralRewriter::new(QUADRANT_RULES)
            .apply("moveToQuadrant(task.id, 'ELIMINATE')")
            .unwrap();
        assert_eq!(out.content, "moveToQuadrant(task.id, Quadrant.ELIMINATE)");
    }

    #[test]
    fn test_non_existent_id_keeps_its_quotes() {
        let out = LiteralRewriter::new(QUADRANT_RULES)
            .apply("moveToQuadrant('non-existent-id', 'DO')")
            .unwrap();
        assert_eq!(out.content, "moveToQuadrant('non-existent-id', Quadrant.DO)");
    }

    #[test]
    fn test_sample_file_fully_rewritten() {
        let out = LiteralRewriter::new(QUADRANT_RULES).apply(SAMPLE).unwrap();
        for rule in QUADRANT_RULES {
            assert!(
                !out.content.contains(rule.search),
                "{:?} still present",
                rule.search
            );
        }
        // Unrelated quoted strings stay put
        assert!(out.content.contains("title: 'Write docs',"));
        assert!(out.content.contains("describe('TaskService'"));
        assert_eq!(out.total_matches(), 14);
    }

    #[test]
    fn test_counts_every_occurrence() {
        let doc = "toBe('DO') toBe('DO')\ntoBe('DO')";
        let out = LiteralRewriter::new(QUADRANT_RULES).apply(doc).unwrap();
        assert_eq!(
            out.content,
            "toBe(Quadrant.DO) toBe(Quadrant.DO)\ntoBe(Quadrant.DO)"
        );
        let to_be_do = out
            .outcomes
            .iter()
            .find(|o| o.rule.search == "toBe('DO')")
            .unwrap();
        assert_eq!(to_be_do.matches, 3);
    }

    #[test]
    fn test_idempotent() {
        let rewriter = LiteralRewriter::new(QUADRANT_RULES);
        let once = rewriter.apply(SAMPLE).unwrap();
        let twice = rewriter.apply(&once.content).unwrap();
        assert_eq!(once.content, twice.content);
        assert_eq!(twice.total_matches(), 0);
    }

    #[test]
    fn test_document_without_literals_unchanged() {
        let doc = "const x = 'DONE';\nexpect(y).toBe(\"DO\");\n";
        let out = LiteralRewriter::new(QUADRANT_RULES).apply(doc).unwrap();
        assert_eq!(out.content, doc);
        assert_eq!(out.total_matches(), 0);
        assert_eq!(out.outcomes.len(), QUADRANT_RULES.len());
    }

    #[test]
    fn test_fixed_table_order_does_not_matter() {
        let reversed: Vec<Rule> = QUADRANT_RULES.iter().rev().copied().collect();
        let forward = LiteralRewriter::new(QUADRANT_RULES).apply(SAMPLE).unwrap();
        let backward = LiteralRewriter::new(&reversed).apply(SAMPLE).unwrap();
        assert_eq!(forward.content, backward.content);
    }

    #[test]
    fn test_overlapping_rules_are_order_sensitive() {
        let a = Rule::new("'DO'", "X");
        let b = Rule::new("toBe('DO')", "Y");
        let doc = "toBe('DO')";
        let ab = LiteralRewriter::new(&[a, b]).apply(doc).unwrap();
        let ba = LiteralRewriter::new(&[b, a]).apply(doc).unwrap();
        assert_eq!(ab.content, "toBe(X)");
        assert_eq!(ba.content, "Y");
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = [Rule::new("a", "b"), Rule::new("b", "c")];
        let out = LiteralRewriter::new(&rules).apply("ab").unwrap();
        assert_eq!(out.content, "cc");
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let rules = [Rule::new("aa", "b")];
        let out = LiteralRewriter::new(&rules).apply("aaa").unwrap();
        assert_eq!(out.content, "ba");
        assert_eq!(out.outcomes[0].matches, 1);
    }

    #[test]
    fn test_empty_search_rejected() {
        let rules = [Rule::new("x", "y"), Rule::new("", "z")];
        let err = LiteralRewriter::new(&rules).apply("abc").unwrap_err();
        assert_eq!(err, RewriteError::EmptySearch { rule_index: 1 });
    }

    #[test]
    fn test_large_document_rewrites_every_match() {
        let count = 40_000;
        let doc = "toBe('DO')\n".repeat(count);

        let started = std::time::Instant::now();
        let out = LiteralRewriter::new(QUADRANT_RULES).apply(&doc).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));

        assert_eq!(out.total_matches(), count);
        assert_eq!(out.content, "toBe(Quadrant.DO)\n".repeat(count));
    }
}
