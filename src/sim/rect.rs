//! Integer axis-aligned rectangles
//!
//! All playfield geometry is whole pixels. A rectangle is its top-left corner
//! plus a size; right and bottom edges are exclusive.

use glam::IVec2;

/// An axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Rectangle of the given size whose center is `center`
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect,
    /// and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0 || self.size.y <= 0 || other.size.x <= 0 || other.size.y <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center(), IVec2::new(25, 40));
    }

    #[test]
    fn test_center_round_trip() {
        let r = Rect::from_center(IVec2::new(400, 300), IVec2::splat(10));
        assert_eq!(r.pos, IVec2::new(395, 295));
        assert_eq!(r.center(), IVec2::new(400, 300));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(0, 0, 10, 100);
        r.set_bottom(600);
        assert_eq!(r.top(), 500);
        assert_eq!(r.bottom(), 600);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(5, 5, 0, 10)));
    }
}
