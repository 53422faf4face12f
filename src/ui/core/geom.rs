//! Cell geometry. Columns and rows are zero-based; `(0, 0)` is the top-left cell.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Half-open rectangle: `x..x + w` by `y..y + h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Whole terminal surface of `rows` x `cols` cells anchored at the origin.
    pub const fn screen(rows: u16, cols: u16) -> Self {
        Self::new(0, 0, cols, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// One past the rightmost column.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Rightmost column that still belongs to the rect. `None` when empty.
    pub fn last_col(&self) -> Option<u16> {
        (!self.is_empty()).then(|| self.right() - 1)
    }

    /// Bottom row that still belongs to the rect. `None` when empty.
    pub fn last_row(&self) -> Option<u16> {
        (!self.is_empty()).then(|| self.bottom() - 1)
    }

    pub fn contains(&self, p: Pos) -> bool {
        !self.is_empty()
            && (self.x..self.right()).contains(&p.x)
            && (self.y..self.bottom()).contains(&p.y)
    }

    /// Shrinks every side by `margin` cells; collapses to an empty rect when too small.
    pub fn shrink(self, margin: u16) -> Rect {
        let twice = margin.saturating_mul(2);
        Rect::new(
            self.x.saturating_add(margin),
            self.y.saturating_add(margin),
            self.w.saturating_sub(twice),
            self.h.saturating_sub(twice),
        )
    }

    /// Overlap of both rects; empty (zero-sized) when they are disjoint.
    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let w = self.right().min(other.right()).saturating_sub(x);
        let h = self.bottom().min(other.bottom()).saturating_sub(y);
        Rect::new(x, y, w, h)
    }

    /// Area left once a one-cell frame border is drawn around `self`.
    pub fn content_area(self) -> Rect {
        self.shrink(1)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
