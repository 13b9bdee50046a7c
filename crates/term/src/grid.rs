//! Character grid produced by a render pass.

/// 2D grid of glyph cells, row-major.
///
/// Out-of-range reads return `None` and out-of-range writes are ignored, so
/// render code can project world coordinates through without pre-clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    fill: char,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: u16, height: u16, fill: char) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            fill,
            cells: vec![fill; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, glyph: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Reset every cell to the fill glyph.
    pub fn clear(&mut self) {
        self.cells.fill(self.fill);
    }

    /// Rows top to bottom. A zero-width grid yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on a zero chunk size; the cell vec is empty
        // then anyway, so any positive size yields nothing.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// One row rendered as a `String`, for assertions and plain-text output.
    pub fn row_string(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(self.cells[start..start + self.width as usize].iter().collect())
    }
}
