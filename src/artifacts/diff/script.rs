use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::myers::hook::{EditOp, Recorder};
use crate::artifacts::myers::options::DiffOptions;
use crate::artifacts::myers::{Comparison, Outcome};

/// Complete edit script of two sequences, common elements included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    edits: Vec<Edit<T>>,
    outcome: Outcome,
}

impl<T: Clone + PartialEq> EditScript<T> {
    pub fn diff(a: &[T], b: &[T], options: DiffOptions) -> anyhow::Result<Self> {
        let mut recorder = Recorder::default();
        let outcome = Comparison::new(a, b, |l: &T, r: &T| l == r)
            .with_options(options)
            .run(&mut recorder)?;

        Ok(Self {
            edits: weave(a, b, recorder.ops()),
            outcome,
        })
    }
}

impl<T> EditScript<T> {
    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn has_changes(&self) -> bool {
        self.edits.iter().any(|edit| !edit.is_equal())
    }
}

impl<T: Clone> EditScript<T> {
    pub fn hunks(&self, context: usize) -> Vec<Hunk<T>> {
        Hunk::build(&self.edits, context)
    }
}

/// Interleaves the untouched elements with the reported edits
///
/// Between two edits the path through the edit graph runs along a diagonal,
/// so the elements skipped on both sides pair up one to one.
fn weave<T: Clone>(a: &[T], b: &[T], ops: &[EditOp]) -> Vec<Edit<T>> {
    let mut edits = Vec::with_capacity(a.len() + ops.len());
    let mut i = 0;
    let mut j = 0;

    for op in ops {
        let (x, y) = match *op {
            EditOp::Delete(x) => (x, j + (x - i)),
            EditOp::Insert(y) => (i + (y - j), y),
        };

        edits.extend(a[i..x].iter().cloned().map(|value| Edit::Equal { value }));
        (i, j) = (x, y);

        match *op {
            EditOp::Delete(_) => {
                edits.push(Edit::Delete {
                    value: a[i].clone(),
                });
                i += 1;
            }
            EditOp::Insert(_) => {
                edits.push(Edit::Insert {
                    value: b[j].clone(),
                });
                j += 1;
            }
        }
    }

    edits.extend(a[i..].iter().cloned().map(|value| Edit::Equal { value }));

    edits
}
