//! The boolean engine: produce a new [`Grid`] from two grids under a
//! boolean op, or evaluate a boolean predicate over all of their
//! intersections, via a lock-step walk of their edge arrays.

use crate::aabb::Axis;
use crate::error::Result;
use crate::grid::{Grid, GridBuilder};
use crate::Scalar;

/// The five boolean operations the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// `l ∨ r`
    Or,
    /// `l ∧ r`
    And,
    /// `l ∧ ¬r`
    Sub,
    /// `l ≠ r`
    Xor,
    /// `r ∧ ¬l`
    RSub,
}

impl BoolOp {
    #[inline]
    fn apply(self, l: bool, r: bool) -> bool {
        match self {
            BoolOp::Or => l || r,
            BoolOp::And => l && r,
            BoolOp::Sub => l && !r,
            BoolOp::Xor => l != r,
            BoolOp::RSub => r && !l,
        }
    }
}

/// Merge two sorted, distinct-valued slices into a sorted, distinct-valued
/// `Vec`, coalescing duplicates shared between the two.
fn merge_edges(l: &[Scalar], r: &[Scalar]) -> Vec<Scalar> {
    let mut out = Vec::with_capacity(l.len() + r.len());
    let (mut i, mut j) = (0, 0);
    while i < l.len() || j < r.len() {
        let v = if j >= r.len() || (i < l.len() && l[i] <= r[j]) {
            l[i]
        } else {
            r[j]
        };
        if i < l.len() && l[i] == v {
            i += 1;
        }
        if j < r.len() && r[j] == v {
            j += 1;
        }
        out.push(v);
    }
    out
}

/// Return the dominating edge positions on one axis for a boolean walk: the
/// position that directly provides the state of each side at the
/// destination coordinate `min(l[li], r[ri])`. The side that sits exactly
/// at the destination coordinate contributes itself; the other side
/// contributes the largest edge strictly less than that coordinate, or
/// `None` if no such edge exists.
fn dominating(
    l: &[Scalar],
    r: &[Scalar],
    li: usize,
    ri: usize,
) -> (Option<usize>, Option<usize>) {
    let l_exhausted = li >= l.len();
    let r_exhausted = ri >= r.len();
    if l_exhausted {
        (None, if r_exhausted { None } else { Some(ri) })
    } else if r_exhausted {
        (Some(li), None)
    } else if l[li] < r[ri] {
        (Some(li), if ri > 0 { Some(ri - 1) } else { None })
    } else if r[ri] < l[li] {
        (if li > 0 { Some(li - 1) } else { None }, Some(ri))
    } else {
        (Some(li), Some(ri))
    }
}

#[inline]
fn on(grid: &Grid, dom: (Option<usize>, Option<usize>, Option<usize>)) -> bool {
    match dom {
        (Some(x), Some(y), Some(z)) => grid.is_marked(x, y, z),
        _ => false,
    }
}

/// Advance the cursor(s) that are at or behind the destination coordinate,
/// exactly as the reference implementation's lock-step advance does.
#[inline]
fn advance(l: &[Scalar], r: &[Scalar], li: &mut usize, ri: &mut usize) {
    let (l_old, r_old) = (*li, *ri);
    if *li < l.len() && (r_old >= r.len() || l[l_old] <= r[r_old]) {
        *li += 1;
    }
    if *ri < r.len() && (l_old >= l.len() || r[r_old] <= l[l_old]) {
        *ri += 1;
    }
}

/// Produce a new grid combining `l` and `r` under `kind`.
pub fn op(l: &Grid, r: &Grid, kind: BoolOp) -> Result<Grid> {
    if l.is_empty() {
        return Ok(match kind {
            BoolOp::Or | BoolOp::Xor | BoolOp::RSub => r.clone(),
            BoolOp::And | BoolOp::Sub => Grid::empty(),
        });
    }
    if r.is_empty() {
        return Ok(match kind {
            BoolOp::Or | BoolOp::Sub | BoolOp::Xor => l.clone(),
            BoolOp::And | BoolOp::RSub => Grid::empty(),
        });
    }

    let lx = l.edges(Axis::X);
    let ly = l.edges(Axis::Y);
    let lz = l.edges(Axis::Z);
    let rx = r.edges(Axis::X);
    let ry = r.edges(Axis::Y);
    let rz = r.edges(Axis::Z);

    let mx = merge_edges(lx, rx);
    let my = merge_edges(ly, ry);
    let mz = merge_edges(lz, rz);
    let mut builder = GridBuilder::new(mx, my, mz)?;

    let (mut lxi, mut rxi) = (0usize, 0usize);
    let mut dxi = 0usize;
    while lxi < lx.len() || rxi < rx.len() {
        let (lx_dom, rx_dom) = dominating(lx, rx, lxi, rxi);

        let (mut lyi, mut ryi) = (0usize, 0usize);
        let mut dyi = 0usize;
        while lyi < ly.len() || ryi < ry.len() {
            let (ly_dom, ry_dom) = dominating(ly, ry, lyi, ryi);

            let (mut lzi, mut rzi) = (0usize, 0usize);
            let mut dzi = 0usize;
            while lzi < lz.len() || rzi < rz.len() {
                let (lz_dom, rz_dom) = dominating(lz, rz, lzi, rzi);

                let l_on = on(l, (lx_dom, ly_dom, lz_dom));
                let r_on = on(r, (rx_dom, ry_dom, rz_dom));
                if kind.apply(l_on, r_on) {
                    builder.mark(dxi, dyi, dzi);
                }

                advance(lz, rz, &mut lzi, &mut rzi);
                dzi += 1;
            }

            advance(ly, ry, &mut lyi, &mut ryi);
            dyi += 1;
        }

        advance(lx, rx, &mut lxi, &mut rxi);
        dxi += 1;
    }

    Ok(Grid::from_owned(builder.build()))
}

/// Return whether `kind(l_on, r_on)` holds for any cell produced by
/// intersecting `l` and `r`'s edge grids. Short-circuits on the first hit.
pub fn evaluate(l: &Grid, r: &Grid, kind: BoolOp) -> bool {
    if l.is_empty() {
        return kind.apply(false, !r.is_empty());
    }
    if r.is_empty() {
        return kind.apply(!l.is_empty(), false);
    }

    let lx = l.edges(Axis::X);
    let ly = l.edges(Axis::Y);
    let lz = l.edges(Axis::Z);
    let rx = r.edges(Axis::X);
    let ry = r.edges(Axis::Y);
    let rz = r.edges(Axis::Z);

    let (mut lxi, mut rxi) = (0usize, 0usize);
    while lxi < lx.len() || rxi < rx.len() {
        let (lx_dom, rx_dom) = dominating(lx, rx, lxi, rxi);

        let (mut lyi, mut ryi) = (0usize, 0usize);
        while lyi < ly.len() || ryi < ry.len() {
            let (ly_dom, ry_dom) = dominating(ly, ry, lyi, ryi);

            let (mut lzi, mut rzi) = (0usize, 0usize);
            while lzi < lz.len() || rzi < rz.len() {
                let (lz_dom, rz_dom) = dominating(lz, rz, lzi, rzi);

                let l_on = on(l, (lx_dom, ly_dom, lz_dom));
                let r_on = on(r, (rx_dom, ry_dom, rz_dom));
                if kind.apply(l_on, r_on) {
                    return true;
                }

                advance(lz, rz, &mut lzi, &mut rzi);
            }

            advance(ly, ry, &mut lyi, &mut ryi);
        }

        advance(lx, rx, &mut lxi, &mut rxi);
    }

    false
}

#[cfg(test)]
mod test_bool_op {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(BoolOp::Or.apply(true, false));
        assert!(BoolOp::Or.apply(false, true));
        assert!(!BoolOp::Or.apply(false, false));

        assert!(BoolOp::And.apply(true, true));
        assert!(!BoolOp::And.apply(true, false));

        assert!(BoolOp::Sub.apply(true, false));
        assert!(!BoolOp::Sub.apply(true, true));

        assert!(BoolOp::Xor.apply(true, false));
        assert!(!BoolOp::Xor.apply(true, true));

        assert!(BoolOp::RSub.apply(false, true));
        assert!(!BoolOp::RSub.apply(true, true));
    }
}


#[cfg(test)]
mod test_dominating {
    use super::*;

    #[test]
    fn test_exhausted_sides() {
        let l = [1.0, 2.0];
        let r: [Scalar; 0] = [];
        assert_eq!(dominating(&l, &r, 0, 0), (Some(0), None));
        assert_eq!(dominating(&r, &l, 0, 0), (None, Some(0)));
    }

    #[test]
    fn test_equal_values() {
        let l = [1.0, 2.0];
        let r = [1.0, 3.0];
        assert_eq!(dominating(&l, &r, 0, 0), (Some(0), Some(0)));
    }

    #[test]
    fn test_strictly_less() {
        let l = [1.0, 2.0];
        let r = [5.0];
        // l dominates with its own value; r has no predecessor, so None.
        assert_eq!(dominating(&l, &r, 0, 0), (Some(0), None));
        // advance l so l[1]=2.0 still < r[0]=5.0: r's predecessor is still none
        assert_eq!(dominating(&l, &r, 1, 0), (Some(1), None));
    }
}
