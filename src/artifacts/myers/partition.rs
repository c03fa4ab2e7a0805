use crate::artifacts::myers::context::Context;
use crate::artifacts::myers::diag::{self, Bounds};
use crate::artifacts::myers::hook::EditHook;
use std::ops::ControlFlow;

/// A pending sub-rectangle together with whether it must be searched minimally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub bounds: Bounds,
    pub find_minimal: bool,
}

impl Frame {
    pub(crate) fn whole(xlen: isize, ylen: isize, find_minimal: bool) -> Self {
        Self {
            bounds: Bounds {
                xoff: 0,
                xlim: xlen,
                yoff: 0,
                ylim: ylen,
            },
            find_minimal,
        }
    }
}

/// Compares the rectangle described by `frame`, reporting edits to `hook`
///
/// Each frame is trimmed of its common prefix and suffix; what remains is
/// either a run of pure insertions or deletions, or it is split at the
/// midpoint found by [`diag::diag`]. The two halves go onto a worklist with
/// the low half on top, so edits come out in left-to-right order without
/// recursing once per split.
///
/// Returns `ControlFlow::Break` as soon as the hook asks to stop.
pub(crate) fn compareseq<A, B, F, H>(
    ctx: &mut Context<'_, A, B, F>,
    hook: &mut H,
    frame: Frame,
) -> ControlFlow<()>
where
    F: Fn(&A, &B) -> bool,
    H: EditHook + ?Sized,
{
    let mut pending = vec![frame];

    while let Some(Frame {
        bounds,
        find_minimal,
    }) = pending.pop()
    {
        let Bounds {
            mut xoff,
            mut xlim,
            mut yoff,
            mut ylim,
        } = bounds;

        while xoff < xlim && yoff < ylim && ctx.matches(xoff, yoff) {
            xoff += 1;
            yoff += 1;
        }
        while xoff < xlim && yoff < ylim && ctx.matches(xlim - 1, ylim - 1) {
            xlim -= 1;
            ylim -= 1;
        }

        if xoff == xlim {
            for y in yoff..ylim {
                hook.insert(y as usize)?;
            }
        } else if yoff == ylim {
            for x in xoff..xlim {
                hook.delete(x as usize)?;
            }
        } else {
            let trimmed = Bounds {
                xoff,
                xlim,
                yoff,
                ylim,
            };
            let partition = diag::diag(ctx, trimmed, find_minimal);
            ctx.stats.record(&partition);

            debug_log!(
                "split {:?} at ({}, {}) cost={} kind={:?} minimality={:?}",
                trimmed,
                partition.xmid,
                partition.ymid,
                partition.cost,
                partition.kind,
                partition.minimality
            );

            pending.push(Frame {
                bounds: Bounds {
                    xoff: partition.xmid,
                    xlim,
                    yoff: partition.ymid,
                    ylim,
                },
                find_minimal: partition.hi_minimal(),
            });
            pending.push(Frame {
                bounds: Bounds {
                    xoff,
                    xlim: partition.xmid,
                    yoff,
                    ylim: partition.ymid,
                },
                find_minimal: partition.lo_minimal(),
            });
        }
    }

    ControlFlow::Continue(())
}
