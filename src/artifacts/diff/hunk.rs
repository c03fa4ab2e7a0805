use crate::artifacts::diff::edit::Edit;
use derive_new::new;

/// Number of unchanged lines shown around each change by default
pub const HUNK_CONTEXT: usize = 3;

/// A group of nearby changes together with their surrounding context
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Hunk<T> {
    /// Zero-based index of the first old line covered by the hunk
    a_offset: usize,
    /// Zero-based index of the first new line covered by the hunk
    b_offset: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Splits a full edit script into hunks
    ///
    /// Every change keeps up to `context` equal lines on each side. Two changes
    /// separated by at most `2 * context` equal lines end up in the same hunk,
    /// since their context would otherwise overlap.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Self> {
        let mut offsets = Vec::with_capacity(edits.len());
        let (mut a, mut b) = (0, 0);
        for edit in edits {
            offsets.push((a, b));
            a += edit.in_old() as usize;
            b += edit.in_new() as usize;
        }

        let mut hunks = Vec::new();
        let mut cursor = 0;

        while let Some(first_change) = next_change(edits, cursor) {
            let start = first_change.saturating_sub(context).max(cursor);
            let mut last_change = first_change;

            while let Some(change) = next_change(edits, last_change + 1) {
                if change - last_change - 1 > 2 * context {
                    break;
                }
                last_change = change;
            }

            let end = (last_change + 1 + context).min(edits.len());
            let (a_offset, b_offset) = offsets[start];
            hunks.push(Hunk::new(a_offset, b_offset, edits[start..end].to_vec()));

            cursor = end;
        }

        hunks
    }
}

fn next_change<T>(edits: &[Edit<T>], from: usize) -> Option<usize> {
    edits
        .iter()
        .skip(from)
        .position(|edit| !edit.is_equal())
        .map(|position| position + from)
}

impl<T> Hunk<T> {
    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn a_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_old()).count()
    }

    pub fn b_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_new()).count()
    }

    /// One-based first old line, or the line before the hunk when it covers none
    pub fn a_start(&self) -> usize {
        if self.a_size() == 0 {
            self.a_offset
        } else {
            self.a_offset + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_size() == 0 {
            self.b_offset
        } else {
            self.b_offset + 1
        }
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start(),
            self.a_size(),
            self.b_start(),
            self.b_size()
        )
    }
}
