use crate::domain::AutomatonError;

/// Fixed number of columns laid across the viewport width
pub const TARGET_COLS: usize = 100;

/// Cell geometry derived from the viewport: a fixed column count, a row
/// count matching the aspect ratio, and the resulting pixel size of one
/// cell edge. Any change of geometry invalidates the grid it was sized
/// for, so callers re-initialize when two geometries compare unequal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
}

impl Geometry {
    /// Derive geometry from the viewport dimensions in pixels.
    /// Degenerate viewports produce no usable grid and are rejected.
    pub fn from_viewport(width: f32, height: f32) -> Result<Self, AutomatonError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(AutomatonError::InvalidDimensions {
                rows: 0,
                cols: TARGET_COLS,
            });
        }

        let cols = TARGET_COLS;
        let rows = ((height / width) * cols as f32).round() as usize;
        if rows == 0 {
            return Err(AutomatonError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cell_size: width / cols as f32,
        })
    }

    /// Width of the drawing surface in pixels
    pub fn surface_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Height of the drawing surface in pixels
    pub fn surface_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Map a pixel coordinate to the cell containing it.
    /// Coordinates outside the surface map to None.
    pub fn point_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}
