use crate::error::Result;
use crate::matrix::alloc_zeroed;

/// Copy `src` (rows × cols, row-major) into `dst` with row `row` and column
/// `col` removed. `dst` must hold exactly `(rows - 1) * (cols - 1)` elements.
///
/// The remaining rows and columns keep their relative order.
pub(crate) fn write_minor(
    src: &[f64],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    dst: &mut [f64],
) {
    debug_assert!(row < rows && col < cols);
    debug_assert_eq!(dst.len(), (rows - 1) * (cols - 1));

    let mut out = 0;
    for i in (0..rows).filter(|&i| i != row) {
        let src_row = &src[i * cols..(i + 1) * cols];
        for (_, &v) in src_row.iter().enumerate().filter(|&(j, _)| j != col) {
            dst[out] = v;
            out += 1;
        }
    }
}

/// One scratch buffer per recursion level of an order-`m` expansion.
///
/// `levels[0]` holds an `(m-1)²` minor, `levels[1]` an `(m-2)²` minor, down to
/// a single element. Recursing one level deeper means handing the callee
/// `levels[1..]`.
pub(crate) struct MinorStack {
    levels: Vec<Vec<f64>>,
}

impl MinorStack {
    pub(crate) fn for_order(m: usize) -> Result<Self> {
        let mut levels = Vec::with_capacity(m.saturating_sub(1));
        for k in (1..m).rev() {
            levels.push(alloc_zeroed(k * k)?);
        }
        Ok(Self { levels })
    }

    pub(crate) fn levels_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.levels
    }
}
