//! Pointer offset tracking
//!
//! Reduces absolute cursor positions to an offset from the viewport center.
//! Input callbacks write into the tracker; the tick path reads a by-value
//! snapshot once at tick start, which is the only synchronization point the
//! single-threaded event loop needs.

/// Immutable copy of the pointer offset, taken once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pixels right of the viewport center (negative = left)
    pub x: f32,
    /// Pixels below the viewport center (negative = above)
    pub y: f32,
}

/// Tracks the cursor's offset from the viewport center
///
/// The half extents are captured once at startup and intentionally not
/// updated when the window resizes, so after a resize the "center" stays
/// where it was at launch.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    half_width: f32,
    half_height: f32,
    offset: PointerSnapshot,
}

impl PointerTracker {
    /// Creates a tracker centered on the given viewport size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            half_width: viewport_width / 2.0,
            half_height: viewport_height / 2.0,
            offset: PointerSnapshot::default(),
        }
    }

    /// Records an absolute cursor position in viewport pixels
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.offset = PointerSnapshot {
            x: x - self.half_width,
            y: y - self.half_height,
        };
    }

    /// Current offset, by value
    pub fn snapshot(&self) -> PointerSnapshot {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero_offset() {
        let mut tracker = PointerTracker::new(1200.0, 800.0);
        tracker.cursor_moved(600.0, 400.0);
        assert_eq!(tracker.snapshot(), PointerSnapshot { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_offset_signs() {
        let mut tracker = PointerTracker::new(1200.0, 800.0);
        tracker.cursor_moved(0.0, 0.0);
        let snap = tracker.snapshot();
        assert_eq!(snap.x, -600.0);
        assert_eq!(snap.y, -400.0);

        tracker.cursor_moved(1200.0, 800.0);
        let snap = tracker.snapshot();
        assert_eq!(snap.x, 600.0);
        assert_eq!(snap.y, 400.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut tracker = PointerTracker::new(100.0, 100.0);
        tracker.cursor_moved(75.0, 25.0);
        let snap = tracker.snapshot();
        tracker.cursor_moved(0.0, 0.0);
        // The copy taken at tick start is unaffected by later writes
        assert_eq!(snap, PointerSnapshot { x: 25.0, y: -25.0 });
    }
}
