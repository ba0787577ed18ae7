//! Grid layout: packs variable-width cells into as few rows as fit a width.
//!
//! Cells are measured in terminal columns, not bytes. A cell may carry
//! invisible escape sequences (color), in which case its visible width is
//! supplied by the caller through [`Grid::add_measured`].

use unicode_width::UnicodeWidthStr;

/// Order in which cells fill the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Column-major: fill down each column, then move right.
    #[default]
    TopToBottom,
    /// Row-major: fill across each row, then move down.
    LeftToRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    width: usize,
}

/// A resolved layout: one width per populated column, plus the row count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub widths: Vec<usize>,
    pub rows: usize,
}

impl Dimensions {
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Width of the widest possible row, separators included.
    pub fn total_width(&self, separator_width: usize) -> usize {
        let cells: usize = self.widths.iter().sum();
        cells + self.columns().saturating_sub(1) * separator_width
    }
}

/// Accumulates cells and lays them out.
#[derive(Debug, Clone)]
pub struct Grid {
    direction: Direction,
    separator: String,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(direction: Direction, separator: impl Into<String>) -> Self {
        Grid {
            direction,
            separator: separator.into(),
            cells: Vec::new(),
        }
    }

    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        let width = text.width();
        self.cells.push(Cell { text, width });
    }

    /// Add a cell whose visible width differs from its text (e.g. colored).
    pub fn add_measured(&mut self, text: impl Into<String>, width: usize) {
        self.cells.push(Cell {
            text: text.into(),
            width,
        });
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.text.as_str())
    }

    /// Largest column count whose rows fit in `width`.
    ///
    /// Returns `None` when even a single column is wider than `width`; the
    /// caller should then print one cell per line.
    pub fn fit_into_width(&self, width: usize) -> Option<Dimensions> {
        if self.cells.is_empty() {
            return Some(Dimensions::default());
        }
        let separator_width = self.separator.width();
        // No row holds more columns than the narrowest cells allow.
        let narrowest = self.cells.iter().map(|c| c.width).min().unwrap_or(0);
        let most = match narrowest + separator_width {
            0 => self.cells.len(),
            step => self.cells.len().min((width + separator_width) / step),
        };
        (1..=most)
            .rev()
            .map(|columns| self.dimensions_for(columns))
            .find(|dims| dims.total_width(separator_width) <= width)
    }

    /// Layout with a fixed column count, clamped to `1..=len`.
    pub fn fit_into_columns(&self, columns: usize) -> Dimensions {
        if self.cells.is_empty() {
            return Dimensions::default();
        }
        self.dimensions_for(columns.clamp(1, self.cells.len()))
    }

    fn dimensions_for(&self, columns: usize) -> Dimensions {
        let n = self.cells.len();
        let rows = n.div_ceil(columns);
        let populated = match self.direction {
            Direction::TopToBottom => n.div_ceil(rows),
            Direction::LeftToRight => columns.min(n),
        };
        let mut widths = vec![0; populated];
        for (index, cell) in self.cells.iter().enumerate() {
            let column = match self.direction {
                Direction::TopToBottom => index / rows,
                Direction::LeftToRight => index % columns,
            };
            widths[column] = widths[column].max(cell.width);
        }
        Dimensions { widths, rows }
    }

    fn index_at(&self, dims: &Dimensions, row: usize, column: usize) -> Option<usize> {
        let index = match self.direction {
            Direction::TopToBottom => column * dims.rows + row,
            Direction::LeftToRight => row * dims.columns() + column,
        };
        (index < self.cells.len()).then_some(index)
    }

    /// Render the cells row by row. The last cell of each row is neither
    /// padded nor followed by the separator.
    pub fn render(&self, dims: &Dimensions) -> String {
        let mut out = String::new();
        for row in 0..dims.rows {
            let indices: Vec<usize> = (0..dims.columns())
                .map_while(|column| self.index_at(dims, row, column))
                .collect();
            for (position, &index) in indices.iter().enumerate() {
                let cell = &self.cells[index];
                out.push_str(&cell.text);
                if position + 1 < indices.len() {
                    let pad = dims.widths[position].saturating_sub(cell.width);
                    out.extend(std::iter::repeat(' ').take(pad));
                    out.push_str(&self.separator);
                }
            }
            out.push('\n');
        }
        out
    }

    /// One cell per line, bypassing layout.
    pub fn render_lines(&self) -> String {
        let mut out = String::new();
        for cell in &self.cells {
            out.push_str(&cell.text);
            out.push('\n');
        }
        out
    }
}
