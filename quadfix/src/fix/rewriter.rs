//! Byte-range safe text rewriter.
//!
//! # Usage
//!
//! ```
//! use quadfix::fix::{ByteRangeRewriter, Edit};
//!
//! let source = "toBe('DO')";
//! let mut rewriter = ByteRangeRewriter::new(source);
//! rewriter.add_edit(Edit::new(5, 9, "Quadrant.DO"));
//! let fixed = rewriter.apply().expect("should apply");
//! assert_eq!(fixed, "toBe(Quadrant.DO)");
//! ```

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// Two or more edits have overlapping ranges
    #[error("Overlapping edits at indices {edit_a} and {edit_b}")]
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range is out of bounds or splits a character
    #[error("Edit {edit_index} out of bounds: {start_byte}..{end_byte} in source of length {source_len}")]
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// Start byte of the edit
        start_byte: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
    /// A rule with an empty search literal would match between every character
    #[error("Rule {rule_index} has an empty search literal")]
    EmptySearch {
        /// Position of the rule in its table
        rule_index: usize,
    },
}

/// Safe text rewriter using byte ranges
///
/// Edit offsets refer to the original source. Edits are validated for bounds
/// and overlap, then spliced in start order.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    /// Original source text
    source: String,
    /// Pending edits
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Add multiple edits
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Indices of the pending edits ordered by `(start_byte, end_byte)`
    fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| (self.edits[i].start_byte, self.edits[i].end_byte));
        order
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap or are out of bounds
    pub fn validate(&self) -> Result<(), RewriteError> {
        self.check_bounds()?;
        self.check_overlaps(&self.sorted_order())
    }

    fn check_bounds(&self) -> Result<(), RewriteError> {
        for (i, edit) in self.edits.iter().enumerate() {
            let in_bounds = edit.start_byte <= edit.end_byte
                && edit.end_byte <= self.source.len()
                && self.source.is_char_boundary(edit.start_byte)
                && self.source.is_char_boundary(edit.end_byte);
            if !in_bounds {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    start_byte: edit.start_byte,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
        }
        Ok(())
    }

    /// Single sweep over `order`, comparing each edit with the earlier edit
    /// that reaches furthest.
    fn check_overlaps(&self, order: &[usize]) -> Result<(), RewriteError> {
        let mut furthest: Option<usize> = None;
        for &j in order {
            if let Some(i) = furthest {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(RewriteError::OverlappingEdits {
                        edit_a: i.min(j),
                        edit_b: i.max(j),
                    });
                }
                if self.edits[j].end_byte > self.edits[i].end_byte {
                    furthest = Some(j);
                }
            } else {
                furthest = Some(j);
            }
        }
        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// The output is built in one forward pass: the untouched gap before each
    /// edit, then its replacement.
    ///
    /// # Errors
    /// Returns error if edits overlap or are out of bounds
    pub fn apply(self) -> Result<String, RewriteError> {
        self.check_bounds()?;
        let order = self.sorted_order();
        self.check_overlaps(&order)?;

        let growth: usize = self.edits.iter().map(|e| e.replacement.len()).sum();
        let mut result = String::with_capacity(self.source.len() + growth);
        let mut cursor = 0;
        for i in order {
            let edit = &self.edits[i];
            result.push_str(&self.source[cursor..edit.start_byte]);
            result.push_str(&edit.replacement);
            cursor = edit.end_byte;
        }
        result.push_str(&self.source[cursor..]);

        Ok(result)
    }
}
