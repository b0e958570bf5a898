/// Dense adjacency-plus-priors matrix and its CSV codec.
///
/// A fixture file holds `N` rows and `N + 1` columns with no header. Column 0
/// of row `i` is the prior probability of node `i`; column `j + 1` is the
/// weight of the edge `i -> j`. A weight greater than zero means the edge
/// exists; any other value means it does not.
///
/// Parsing is strict about shape: every row must have the same number of
/// columns as the first, and that number must be exactly one more than the
/// row count. Cells must be finite decimal literals. Any deviation is a
/// [`ParseError`] and no check runs on a matrix that failed to parse.
use std::io::Write;

use serde::Serialize;

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Errors produced while loading a matrix from CSV text or in-memory rows.
///
/// Line and column numbers are 1-based and count non-blank lines as they
/// appear in the input, so they can be matched against an editor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input has no data rows.
    #[error("matrix has no rows")]
    Empty,

    /// A cell could not be parsed as a finite decimal number.
    #[error("line {line}, column {column}: {token:?} is not a finite decimal number")]
    NonNumeric {
        /// 1-based line number in the input.
        line: usize,
        /// 1-based column number within the line.
        column: usize,
        /// The offending cell text, trimmed.
        token: String,
    },

    /// A row has a different number of columns than the first row.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        /// 1-based line number in the input.
        line: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of this row.
        found: usize,
    },

    /// The matrix is rectangular but is not `N x (N + 1)`.
    #[error("matrix has {rows} rows and {columns} columns; expected {} columns", .rows + 1)]
    ShapeMismatch {
        /// Number of rows (nodes).
        rows: usize,
        /// Number of columns in every row.
        columns: usize,
    },
}

// ---------------------------------------------------------------------------
// MatrixEdge
// ---------------------------------------------------------------------------

/// A present edge read from the matrix: `weight > 0` at `(source, target)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixEdge {
    /// Row index of the edge.
    pub source: usize,
    /// Target node index (matrix column minus one).
    pub target: usize,
    /// Raw cell value; always strictly positive.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// PriorMatrix
// ---------------------------------------------------------------------------

/// An `N x (N + 1)` matrix of priors and edge weights, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorMatrix {
    nodes: usize,
    cells: Vec<f64>,
}

impl PriorMatrix {
    /// Creates a matrix of `nodes` rows with every prior and weight at `0.0`.
    ///
    /// Use [`PriorMatrix::try_zeros`] when `nodes` comes from user input.
    pub fn zeros(nodes: usize) -> Self {
        Self {
            nodes,
            cells: vec![0.0; nodes.saturating_mul(nodes.saturating_add(1))],
        }
    }

    /// Like [`PriorMatrix::zeros`], but returns `None` when the cell count
    /// `nodes * (nodes + 1)` overflows `usize`.
    pub fn try_zeros(nodes: usize) -> Option<Self> {
        let len = nodes.checked_add(1)?.checked_mul(nodes)?;
        Some(Self {
            nodes,
            cells: vec![0.0; len],
        })
    }

    /// Builds a matrix from in-memory rows, applying the same shape and
    /// finiteness rules as [`parse_matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for empty input, ragged rows, non-finite cells,
    /// or a shape other than `N x (N + 1)`. Line numbers refer to row
    /// positions (1-based).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ParseError> {
        let Some(first) = rows.first() else {
            return Err(ParseError::Empty);
        };
        let width = first.len();
        let mut cells = Vec::with_capacity(rows.len() * width);

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::RaggedRow {
                    line: row_idx + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            for (col_idx, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ParseError::NonNumeric {
                        line: row_idx + 1,
                        column: col_idx + 1,
                        token: value.to_string(),
                    });
                }
            }
            cells.extend_from_slice(row);
        }

        check_shape(rows.len(), width)?;
        Ok(Self {
            nodes: rows.len(),
            cells,
        })
    }

    /// Number of nodes (rows).
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn width(&self) -> usize {
        self.nodes + 1
    }

    /// Returns row `node` as a slice: the prior followed by `N` weights.
    pub fn row(&self, node: usize) -> Option<&[f64]> {
        if node >= self.nodes {
            return None;
        }
        let start = node * self.width();
        self.cells.get(start..start + self.width())
    }

    /// Prior probability of `node`, or `None` if out of range.
    pub fn prior(&self, node: usize) -> Option<f64> {
        self.row(node).and_then(|r| r.first().copied())
    }

    /// Weight of the edge `source -> target`, or `None` if either index is
    /// out of range.
    pub fn weight(&self, source: usize, target: usize) -> Option<f64> {
        if target >= self.nodes {
            return None;
        }
        self.row(source).and_then(|r| r.get(target + 1).copied())
    }

    /// Mutable access to the prior of `node`.
    pub fn prior_mut(&mut self, node: usize) -> Option<&mut f64> {
        if node >= self.nodes {
            return None;
        }
        let idx = node * self.width();
        self.cells.get_mut(idx)
    }

    /// Mutable access to the weight of `source -> target`.
    pub fn weight_mut(&mut self, source: usize, target: usize) -> Option<&mut f64> {
        if source >= self.nodes || target >= self.nodes {
            return None;
        }
        let idx = source * self.width() + target + 1;
        self.cells.get_mut(idx)
    }

    /// Iterates over column 0 in node order.
    pub fn priors(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().step_by(self.width()).copied()
    }

    /// Iterates over every present edge (`weight > 0`) in row-major order.
    ///
    /// Column 0 is never treated as an edge.
    pub fn edges(&self) -> impl Iterator<Item = MatrixEdge> + '_ {
        self.cells
            .chunks_exact(self.width())
            .enumerate()
            .flat_map(|(source, row)| {
                row.iter()
                    .skip(1)
                    .enumerate()
                    .filter(|&(_, &weight)| weight > 0.0)
                    .map(move |(target, &weight)| MatrixEdge {
                        source,
                        target,
                        weight,
                    })
            })
    }

    /// Writes the matrix as CSV, one row per line, each cell with exactly one
    /// fractional digit.
    ///
    /// Positive edge weights below [`MIN_WRITTEN_WEIGHT`] are written as
    /// `0.1`, so every edge of the matrix is still an edge when read back.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut line = String::new();
        for row in self.cells.chunks_exact(self.width()) {
            line.clear();
            push_csv_row(&mut line, row);
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Renders the matrix as a CSV string (see [`PriorMatrix::write_csv`]).
    pub fn to_csv_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4);
        for row in self.cells.chunks_exact(self.width()) {
            push_csv_row(&mut out, row);
        }
        out
    }
}

/// Smallest positive edge weight [`PriorMatrix::write_csv`] emits.
pub const MIN_WRITTEN_WEIGHT: f64 = 0.1;

fn push_csv_row(out: &mut String, row: &[f64]) {
    for (i, &value) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let cell = if i > 0 && value > 0.0 {
            value.max(MIN_WRITTEN_WEIGHT)
        } else {
            normalize_zero(value)
        };
        out.push_str(&format!("{cell:.1}"));
    }
    out.push('\n');
}

/// Maps `-0.0` to `0.0` so it prints as `0.0`.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

fn check_shape(rows: usize, columns: usize) -> Result<(), ParseError> {
    if columns == rows + 1 {
        Ok(())
    } else {
        Err(ParseError::ShapeMismatch { rows, columns })
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses the CSV text of a fixture file into a [`PriorMatrix`].
///
/// Blank lines are ignored and a trailing `\r` on each line is stripped.
/// Cells are trimmed before parsing.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is empty, contains a non-numeric or
/// non-finite cell, has rows of differing width, or is not `N x (N + 1)`.
pub fn parse_matrix(text: &str) -> Result<PriorMatrix, ParseError> {
    let mut cells: Vec<f64> = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;

    for (line_idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        let line_no = line_idx + 1;

        let before = cells.len();
        for (col_idx, token) in line.split(',').enumerate() {
            let token = token.trim();
            let value = parse_cell(token).ok_or_else(|| ParseError::NonNumeric {
                line: line_no,
                column: col_idx + 1,
                token: token.to_owned(),
            })?;
            cells.push(value);
        }
        let found = cells.len() - before;

        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::RaggedRow {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let Some(width) = width else {
        return Err(ParseError::Empty);
    };
    check_shape(rows, width)?;

    tracing::debug!(nodes = rows, "parsed prior matrix");
    Ok(PriorMatrix { nodes: rows, cells })
}

fn parse_cell(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
