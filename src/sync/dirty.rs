//! Dirty-rectangle bookkeeping.
use crate::devices::framebuffer::Rect;

/// Where an object was last frame and where it is now. Built fresh every
/// frame and thrown away after the redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub previous: Rect,
    pub current: Rect,
}

impl DirtyRegion {
    pub const fn new(previous: Rect, current: Rect) -> Self {
        Self { previous, current }
    }

    /// Nothing needs redrawing when the object did not move.
    pub fn is_dirty(&self) -> bool {
        self.previous != self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmoved_object_is_clean() {
        let r = Rect::new(115, 75, 10, 10);
        let region = DirtyRegion::new(r, r);
        assert!(!region.is_dirty());
    }

    #[test]
    fn moved_object_is_dirty() {
        let region = DirtyRegion::new(Rect::new(115, 75, 10, 10), Rect::new(117, 75, 10, 10));
        assert!(region.is_dirty());
    }
}
