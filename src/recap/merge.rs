//! Rowspan / colspan layout for a matrix of label cells.
//!
//! The scan is row-major. Every cell that is not yet covered becomes an
//! anchor: its rowspan grows downward while the cell below in the same column
//! is equal, and, independently, its colspan grows rightward while the next
//! cell in the same row is equal. The whole rowspan x colspan rectangle is
//! then covered. The two directions are never combined into a maximal
//! rectangle, so an anchor may cover cells whose values differ from its own.
//!
//! A `None` row is a separator: it has no cells and stops every span.

/// A rendered cell and the area it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub row: usize,
    pub col: usize,
    pub rowspan: usize,
    pub colspan: usize,
}

impl CellSpan {
    /// `rowspan` attribute value, omitted when 1
    pub fn rowspan_attr(&self) -> Option<String> {
        (self.rowspan > 1).then(|| self.rowspan.to_string())
    }

    /// `colspan` attribute value, omitted when 1
    pub fn colspan_attr(&self) -> Option<String> {
        (self.colspan > 1).then(|| self.colspan.to_string())
    }
}

/// Anchors of a matrix, in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanLayout {
    spans: Vec<CellSpan>,
}

impl SpanLayout {
    /// Scan `rows` and record one anchor per emitted cell
    pub fn compute<T: PartialEq>(rows: &[Option<&[T]>]) -> Self {
        let mut covered: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| vec![false; row.map_or(0, <[T]>::len)])
            .collect();
        let mut spans = Vec::new();

        for (r, row) in rows.iter().enumerate() {
            let Some(row) = row else { continue };

            for (c, value) in row.iter().enumerate() {
                if covered[r][c] {
                    continue;
                }

                let mut rowspan = 1;
                while let Some(Some(below)) = rows.get(r + rowspan) {
                    if below.get(c) != Some(value) {
                        break;
                    }
                    rowspan += 1;
                }

                let mut colspan = 1;
                while row.get(c + colspan) == Some(value) {
                    colspan += 1;
                }

                for covered_row in covered.iter_mut().skip(r).take(rowspan) {
                    for flag in covered_row.iter_mut().skip(c).take(colspan) {
                        *flag = true;
                    }
                }

                spans.push(CellSpan {
                    row: r,
                    col: c,
                    rowspan,
                    colspan,
                });
            }
        }

        Self { spans }
    }

    pub fn spans(&self) -> &[CellSpan] {
        &self.spans
    }

    /// Anchors emitted on one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &CellSpan> {
        let start = self.spans.partition_point(|s| s.row < row);
        self.spans[start..].iter().take_while(move |s| s.row == row)
    }

    /// The anchor at `(row, col)`, if that cell is emitted
    pub fn anchor(&self, row: usize, col: usize) -> Option<CellSpan> {
        self.row(row).find(|s| s.col == col).copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(row: usize, col: usize, rowspan: usize, colspan: usize) -> CellSpan {
        CellSpan {
            row,
            col,
            rowspan,
            colspan,
        }
    }

    #[test]
    fn test_independent_scans_on_two_rows() {
        let a = ["A", "X", "X"];
        let b = ["A", "X", "Y"];
        let layout = SpanLayout::compute(&[Some(&a[..]), Some(&b[..])]);

        // (0,1) spans two rows and two columns, covering (1,2) = "Y"
        assert_eq!(layout.spans(), &[span(0, 0, 2, 1), span(0, 1, 2, 2)]);
        assert_eq!(layout.row(1).count(), 0);
    }

    #[test]
    fn test_separator_stops_spans() {
        let a = ["S1", "MATH"];
        let layout = SpanLayout::compute(&[Some(&a[..]), None, Some(&a[..])]);

        assert_eq!(
            layout.spans(),
            &[span(0, 0, 1, 1), span(0, 1, 1, 1), span(2, 0, 1, 1), span(2, 1, 1, 1)]
        );
    }

    #[test]
    fn test_anchor_lookup_and_attrs() {
        let a = ["S1", "Total", "Total"];
        let layout = SpanLayout::compute(&[Some(&a[..])]);

        let total = layout.anchor(0, 1).unwrap();
        assert_eq!(total.colspan_attr().as_deref(), Some("2"));
        assert_eq!(total.rowspan_attr(), None);
        assert_eq!(layout.anchor(0, 2), None);
    }

    #[test]
    fn test_empty_matrix() {
        let layout = SpanLayout::compute::<&str>(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.row(0).count(), 0);
    }

    #[test]
    fn test_same_input_same_layout() {
        let rows: Vec<[&str; 3]> = vec![["S1", "A", "x"], ["S1", "A", "y"], ["S1", "B", "y"]];
        let slices: Vec<Option<&[&str]>> = rows.iter().map(|r| Some(&r[..])).collect();

        assert_eq!(SpanLayout::compute(&slices), SpanLayout::compute(&slices));
    }
}
