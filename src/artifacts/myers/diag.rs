//! Bidirectional diagonal search
//!
//! Given a sub-rectangle `[xoff, xlim) x [yoff, ylim)` of the edit graph whose
//! corners do not match, this module runs the forward and backward
//! breadth-first searches of Myers' algorithm in lock step until their
//! wavefronts overlap. The overlap point lies on a shortest edit path and
//! splits the rectangle into two independent halves.
//!
//! Two escapes bound the work when the caller does not insist on a minimal
//! answer:
//!
//! - the big-snake heuristic accepts a diagonal that advanced much further than
//!   its cost, provided it ends in a long run of matches;
//! - the cost threshold gives up once the cost level reaches `too_expensive`
//!   and reports the furthest point of whichever search closed more of the
//!   gap.
//!
//! In both cases only the half on the side of the accepted search is known to
//! be minimal; the other half is searched again without that guarantee.

use crate::artifacts::myers::context::Context;
use bitflags::bitflags;

/// Length of a run of matches considered significant by the big-snake heuristic
pub const SNAKE_LIMIT: isize = 20;

/// Cost level the search must pass before the big-snake heuristic is consulted
const BIG_SNAKE_MIN_COST: isize = 200;

bitflags! {
    /// Which halves of a split are guaranteed to be searched minimally
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Minimality: u8 {
        const LO = 0b01;
        const HI = 0b10;
        const BOTH = Self::LO.bits() | Self::HI.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MidpointKind {
    /// The forward and backward wavefronts met
    Overlap,
    /// A diagonal made disproportionate progress and ended in a long snake
    BigSnake,
    /// The cost threshold was reached
    TooExpensive,
}

/// Result of one diagonal search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub xmid: isize,
    pub ymid: isize,
    pub minimality: Minimality,
    pub kind: MidpointKind,
    /// Cost level at which the search stopped
    pub cost: isize,
}

impl Partition {
    pub fn lo_minimal(&self) -> bool {
        self.minimality.contains(Minimality::LO)
    }

    pub fn hi_minimal(&self) -> bool {
        self.minimality.contains(Minimality::HI)
    }
}

/// Sub-rectangle of the edit graph handed to a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub xoff: isize,
    pub xlim: isize,
    pub yoff: isize,
    pub ylim: isize,
}

/// Finds a midpoint of a shortest (or acceptable) edit path through `bounds`
///
/// Both ranges must be non-empty and neither the first nor the last elements
/// of the two ranges may match; the partition driver trims common affixes
/// before calling this.
pub(crate) fn diag<A, B, F>(
    ctx: &mut Context<'_, A, B, F>,
    bounds: Bounds,
    find_minimal: bool,
) -> Partition
where
    F: Fn(&A, &B) -> bool,
{
    let Bounds {
        xoff,
        xlim,
        yoff,
        ylim,
    } = bounds;

    let dmin = xoff - ylim;
    let dmax = xlim - yoff;
    let fmid = xoff - yoff;
    let bmid = xlim - ylim;
    let (mut fmin, mut fmax) = (fmid, fmid);
    let (mut bmin, mut bmax) = (bmid, bmid);
    // The southeast corner sits on an odd diagonal relative to the northwest one
    let odd = (fmid - bmid) & 1 != 0;

    ctx.diagonals.set_forward(fmid, xoff);
    ctx.diagonals.set_backward(bmid, xlim);

    let mut cost: isize = 1;
    loop {
        let mut big_snake = false;

        // Extend the top-down search by one edit step on every diagonal.
        if fmin > dmin {
            fmin -= 1;
            ctx.diagonals.set_forward(fmin - 1, -1);
        } else {
            fmin += 1;
        }
        if fmax < dmax {
            fmax += 1;
            ctx.diagonals.set_forward(fmax + 1, -1);
        } else {
            fmax -= 1;
        }

        let mut d = fmax;
        while d >= fmin {
            let tlo = ctx.diagonals.forward(d - 1);
            let thi = ctx.diagonals.forward(d + 1);
            let x0 = if tlo < thi { thi } else { tlo + 1 };

            let (mut x, mut y) = (x0, x0 - d);
            while x < xlim && y < ylim && ctx.matches(x, y) {
                x += 1;
                y += 1;
            }
            if x - x0 > SNAKE_LIMIT {
                big_snake = true;
            }
            ctx.diagonals.set_forward(d, x);

            if odd && bmin <= d && d <= bmax && ctx.diagonals.backward(d) <= x {
                return Partition {
                    xmid: x,
                    ymid: y,
                    minimality: Minimality::BOTH,
                    kind: MidpointKind::Overlap,
                    cost,
                };
            }

            d -= 2;
        }

        // Same for the bottom-up search.
        if bmin > dmin {
            bmin -= 1;
            ctx.diagonals.set_backward(bmin - 1, isize::MAX);
        } else {
            bmin += 1;
        }
        if bmax < dmax {
            bmax += 1;
            ctx.diagonals.set_backward(bmax + 1, isize::MAX);
        } else {
            bmax -= 1;
        }

        let mut d = bmax;
        while d >= bmin {
            let tlo = ctx.diagonals.backward(d - 1);
            let thi = ctx.diagonals.backward(d + 1);
            let x0 = if tlo < thi { tlo } else { thi - 1 };

            let (mut x, mut y) = (x0, x0 - d);
            while xoff < x && yoff < y && ctx.matches(x - 1, y - 1) {
                x -= 1;
                y -= 1;
            }
            if x0 - x > SNAKE_LIMIT {
                big_snake = true;
            }
            ctx.diagonals.set_backward(d, x);

            if !odd && fmin <= d && d <= fmax && x <= ctx.diagonals.forward(d) {
                return Partition {
                    xmid: x,
                    ymid: y,
                    minimality: Minimality::BOTH,
                    kind: MidpointKind::Overlap,
                    cost,
                };
            }

            d -= 2;
        }

        if find_minimal {
            cost += 1;
            continue;
        }

        let search = Wavefronts {
            bounds,
            fmid,
            bmid,
            fmin,
            fmax,
            bmin,
            bmax,
            cost,
        };

        if ctx.heuristic && cost > BIG_SNAKE_MIN_COST && big_snake {
            if let Some(partition) = search.forward_big_snake(ctx) {
                debug_log!(
                    "big snake forward at cost {}: ({}, {})",
                    cost,
                    partition.xmid,
                    partition.ymid
                );
                return partition;
            }
            if let Some(partition) = search.backward_big_snake(ctx) {
                debug_log!(
                    "big snake backward at cost {}: ({}, {})",
                    cost,
                    partition.xmid,
                    partition.ymid
                );
                return partition;
            }
        }

        if cost >= ctx.too_expensive {
            let partition = search.closest_to_closing(ctx);
            debug_log!(
                "too expensive at cost {} in {:?}: settling for ({}, {})",
                cost,
                bounds,
                partition.xmid,
                partition.ymid
            );
            return partition;
        }

        cost += 1;
    }
}

/// Snapshot of both searches at a given cost level, used by the escapes
struct Wavefronts {
    bounds: Bounds,
    fmid: isize,
    bmid: isize,
    fmin: isize,
    fmax: isize,
    bmin: isize,
    bmax: isize,
    cost: isize,
}

impl Wavefronts {
    fn is_promising(&self, progress: isize, offset_from_mid: isize) -> bool {
        progress > 12 * (self.cost + offset_from_mid.abs())
    }

    /// Best forward diagonal whose endpoint is preceded by `SNAKE_LIMIT` matches
    fn forward_big_snake<A, B, F>(&self, ctx: &Context<'_, A, B, F>) -> Option<Partition>
    where
        F: Fn(&A, &B) -> bool,
    {
        let Bounds {
            xoff,
            xlim,
            yoff,
            ylim,
        } = self.bounds;
        let mut best: Option<(isize, isize, isize)> = None;

        let mut d = self.fmax;
        while d >= self.fmin {
            let dd = d - self.fmid;
            let x = ctx.diagonals.forward(d);
            let y = x - d;
            let progress = (x - xoff) * 2 - dd;

            if self.is_promising(progress, dd)
                && best.is_none_or(|(value, _, _)| progress > value)
                && xoff + SNAKE_LIMIT <= x
                && x < xlim
                && yoff + SNAKE_LIMIT <= y
                && y < ylim
                && (1..=SNAKE_LIMIT).all(|k| ctx.matches(x - k, y - k))
            {
                best = Some((progress, x, y));
            }

            d -= 2;
        }

        best.map(|(_, xmid, ymid)| Partition {
            xmid,
            ymid,
            minimality: Minimality::LO,
            kind: MidpointKind::BigSnake,
            cost: self.cost,
        })
    }

    /// Best backward diagonal whose endpoint starts a run of `SNAKE_LIMIT` matches
    fn backward_big_snake<A, B, F>(&self, ctx: &Context<'_, A, B, F>) -> Option<Partition>
    where
        F: Fn(&A, &B) -> bool,
    {
        let Bounds {
            xoff,
            xlim,
            yoff,
            ylim,
        } = self.bounds;
        let mut best: Option<(isize, isize, isize)> = None;

        let mut d = self.bmax;
        while d >= self.bmin {
            let dd = d - self.bmid;
            let x = ctx.diagonals.backward(d);
            let y = x - d;
            let progress = (xlim - x) * 2 + dd;

            if self.is_promising(progress, dd)
                && best.is_none_or(|(value, _, _)| progress > value)
                && xoff < x
                && x <= xlim - SNAKE_LIMIT
                && yoff < y
                && y <= ylim - SNAKE_LIMIT
                && (0..SNAKE_LIMIT).all(|k| ctx.matches(x + k, y + k))
            {
                best = Some((progress, x, y));
            }

            d -= 2;
        }

        best.map(|(_, xmid, ymid)| Partition {
            xmid,
            ymid,
            minimality: Minimality::HI,
            kind: MidpointKind::BigSnake,
            cost: self.cost,
        })
    }

    /// Gives up on the exact search and reports the furthest point reached
    ///
    /// The forward candidate maximises `x + y`, the backward one minimises it;
    /// whichever covered more of the rectangle's anti-diagonal span wins.
    fn closest_to_closing<A, B, F>(&self, ctx: &Context<'_, A, B, F>) -> Partition
    where
        F: Fn(&A, &B) -> bool,
    {
        let Bounds {
            xoff,
            xlim,
            yoff,
            ylim,
        } = self.bounds;

        let (mut fxybest, mut fxbest) = (-1, xoff);
        let mut d = self.fmax;
        while d >= self.fmin {
            let mut x = ctx.diagonals.forward(d).min(xlim);
            let mut y = x - d;
            if ylim < y {
                x = ylim + d;
                y = ylim;
            }
            if fxybest < x + y {
                fxybest = x + y;
                fxbest = x;
            }
            d -= 2;
        }

        let (mut bxybest, mut bxbest) = (isize::MAX, xlim);
        let mut d = self.bmax;
        while d >= self.bmin {
            let mut x = ctx.diagonals.backward(d).max(xoff);
            let mut y = x - d;
            if y < yoff {
                x = yoff + d;
                y = yoff;
            }
            if x + y < bxybest {
                bxybest = x + y;
                bxbest = x;
            }
            d -= 2;
        }

        if (xlim + ylim) - bxybest < fxybest - (xoff + yoff) {
            Partition {
                xmid: fxbest,
                ymid: fxybest - fxbest,
                minimality: Minimality::LO,
                kind: MidpointKind::TooExpensive,
                cost: self.cost,
            }
        } else {
            Partition {
                xmid: bxbest,
                ymid: bxybest - bxbest,
                minimality: Minimality::HI,
                kind: MidpointKind::TooExpensive,
                cost: self.cost,
            }
        }
    }
}
