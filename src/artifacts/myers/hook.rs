use derive_new::new;
use std::ops::ControlFlow;

/// Receives the edit script as it is produced
///
/// Indices refer to the original sequences: `delete(i)` means `x[i]` is not
/// part of the common subsequence, `insert(j)` means `y[j]` is not. Calls
/// arrive in left-to-right document order and no index is reported twice.
///
/// Returning `ControlFlow::Break` aborts the comparison right away.
pub trait EditHook {
    fn delete(&mut self, x_index: usize) -> ControlFlow<()>;
    fn insert(&mut self, y_index: usize) -> ControlFlow<()>;
}

impl<H: EditHook + ?Sized> EditHook for &mut H {
    fn delete(&mut self, x_index: usize) -> ControlFlow<()> {
        (**self).delete(x_index)
    }

    fn insert(&mut self, y_index: usize) -> ControlFlow<()> {
        (**self).insert(y_index)
    }
}

/// Adapts a pair of closures to [`EditHook`]
#[derive(new)]
pub struct FnHook<D, I> {
    on_delete: D,
    on_insert: I,
}

impl<D, I> EditHook for FnHook<D, I>
where
    D: FnMut(usize),
    I: FnMut(usize),
{
    fn delete(&mut self, x_index: usize) -> ControlFlow<()> {
        (self.on_delete)(x_index);
        ControlFlow::Continue(())
    }

    fn insert(&mut self, y_index: usize) -> ControlFlow<()> {
        (self.on_insert)(y_index);
        ControlFlow::Continue(())
    }
}

/// Counts edits, optionally aborting once more than `limit` were seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCounter {
    pub deletions: usize,
    pub insertions: usize,
    limit: Option<usize>,
}

impl EditCounter {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.deletions + self.insertions
    }

    fn check_limit(&self) -> ControlFlow<()> {
        match self.limit {
            Some(limit) if self.total() > limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

impl EditHook for EditCounter {
    fn delete(&mut self, _x_index: usize) -> ControlFlow<()> {
        self.deletions += 1;
        self.check_limit()
    }

    fn insert(&mut self, _y_index: usize) -> ControlFlow<()> {
        self.insertions += 1;
        self.check_limit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Delete(usize),
    Insert(usize),
}

/// Collects every edit in the order it was reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    ops: Vec<EditOp>,
}

impl Recorder {
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }
}

impl EditHook for Recorder {
    fn delete(&mut self, x_index: usize) -> ControlFlow<()> {
        self.ops.push(EditOp::Delete(x_index));
        ControlFlow::Continue(())
    }

    fn insert(&mut self, y_index: usize) -> ControlFlow<()> {
        self.ops.push(EditOp::Insert(y_index));
        ControlFlow::Continue(())
    }
}
