use crate::artifacts::myers::context::DiagonalVectors;
use std::cell::RefCell;

thread_local! {
    static SCRATCH: RefCell<DiagonalVectors> = RefCell::new(DiagonalVectors::default());
}

/// Runs `task` with this thread's pooled diagonal vectors
///
/// The vectors grow to the largest comparison seen on the thread and are
/// released when the thread exits. A nested call (or one made while the
/// thread is shutting down) gets a private buffer instead.
pub(crate) fn with_pooled<R>(
    mut task: impl FnMut(&mut DiagonalVectors) -> anyhow::Result<R>,
) -> anyhow::Result<R> {
    let pooled = SCRATCH.try_with(|cell| {
        cell.try_borrow_mut()
            .ok()
            .map(|mut scratch| task(&mut scratch))
    });

    match pooled {
        Ok(Some(result)) => result,
        _ => task(&mut DiagonalVectors::default()),
    }
}
