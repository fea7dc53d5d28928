//! Cell grid the view draws into before anything touches the terminal.

/// Truecolor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Colors plus the two attributes the card grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        CellStyle {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        CellStyle { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        CellStyle { dim: true, ..self }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// Screen rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Rect { x, y, w, h }
    }

    /// `w` by `h` rectangle centered in `outer`, shrunk to fit.
    pub fn centered_in(outer: Rect, w: u16, h: u16) -> Self {
        let w = w.min(outer.w);
        let h = h.min(outer.h);
        Rect::new(
            outer.x + (outer.w - w) / 2,
            outer.y + (outer.h - h) / 2,
            w,
            h,
        )
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn center(&self) -> (u16, u16) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Row-major grid of styled cells. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = FrameBuffer {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Change dimensions in place. Cell contents are unspecified until the next clear.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            (self.width, self.height) = (width, height);
            self.cells
                .resize(usize::from(width) * usize::from(height), Cell::default());
        }
    }

    /// Cells of row `y`; empty below the last row.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = usize::from(self.width);
        &self.cells[usize::from(y) * w..][..w]
    }

    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        Some(self.cells[self.offset(x, y)?])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(at) = self.offset(x, y) {
            self.cells[at] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `text` from column `x`, clipped at the right edge.
    /// Returns the column just past the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        let mut end = x;
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.put_char(cx, y, ch, style);
            end = cx + 1;
        }
        end
    }

    pub fn put_str_centered(&mut self, y: u16, text: &str, style: CellStyle) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.put_str(self.width.saturating_sub(len) / 2, y, text, style);
    }

    pub fn fill(&mut self, rect: Rect, ch: char, style: CellStyle) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put_char(x, y, ch, style);
            }
        }
    }

    /// Thin box-drawing outline along the edge of `rect`.
    pub fn outline(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);

        for x in rect.x + 1..x1 {
            self.put_char(x, rect.y, '─', style);
            self.put_char(x, y1, '─', style);
        }
        for y in rect.y + 1..y1 {
            self.put_char(rect.x, y, '│', style);
            self.put_char(x1, y, '│', style);
        }
        for (x, y, corner) in [
            (rect.x, rect.y, '┌'),
            (x1, rect.y, '┐'),
            (rect.x, y1, '└'),
            (x1, y1, '┘'),
        ] {
            self.put_char(x, y, corner, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'x', CellStyle::default());
        assert_eq!(fb.get(5, 5), None);
        assert!(fb.row(2).is_empty());
    }

    #[test]
    fn test_outline() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.outline(fb.area(), CellStyle::default());
        assert_eq!(fb.row_text(0), "┌─┐");
        assert_eq!(fb.row_text(1), "│ │");
        assert_eq!(fb.row_text(2), "└─┘");
    }

    #[test]
    fn test_centered() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.put_str_centered(0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  abc  ");
    }

    #[test]
    fn test_rect_centered_in() {
        let outer = Rect::new(0, 0, 10, 6);
        assert_eq!(Rect::centered_in(outer, 4, 2), Rect::new(3, 2, 4, 2));
        assert_eq!(Rect::centered_in(outer, 20, 20), outer);
        assert_eq!(Rect::new(2, 2, 7, 3).center(), (5, 3));
    }

    #[test]
    fn test_resize() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 4);
        assert_eq!((fb.width(), fb.height()), (3, 4));
        assert_eq!(fb.row(3).len(), 3);
    }
}
