//! Drag-and-drop reordering of shortcut tiles.
//!
//! The controller tracks one drag interaction at a time. It only produces a
//! [`Reorder`] when a drag is dropped onto a different tile; everything else
//! (hover markers, cancelled drags) is visual state for the renderer.

/// Request to move the tile at `from` to position `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
        over: Option<usize>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Index of the tile being dragged.
    pub fn source(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging { source, .. } => Some(*source),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.source() == Some(index)
    }

    pub fn is_drag_over(&self, index: usize) -> bool {
        matches!(self.state, DragState::Dragging { over: Some(i), .. } if i == index)
    }

    /// Begin dragging the tile at `index`. Ignored while another drag is
    /// active or when `index` is not a tile.
    pub fn drag_start(&mut self, index: usize, item_count: usize) -> bool {
        if !self.is_idle() || index >= item_count {
            return false;
        }
        self.state = DragState::Dragging {
            source: index,
            over: None,
        };
        true
    }

    /// Pointer moved over `target` while dragging.
    pub fn drag_over(&mut self, target: usize) {
        if let DragState::Dragging { source, over } = &mut self.state {
            if *source != target {
                *over = Some(target);
            }
        }
    }

    pub fn drag_leave(&mut self, target: usize) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            if *over == Some(target) {
                *over = None;
            }
        }
    }

    /// Drop onto `target`, ending the drag.
    pub fn drop_on(&mut self, target: usize) -> Option<Reorder> {
        let DragState::Dragging { source: from, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        if from == target {
            return None;
        }
        Some(Reorder { from, to: target })
    }

    /// The drag finished without landing on a tile.
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_on_other_tile_yields_reorder() {
        let mut c = DragController::new();
        assert!(c.drag_start(0, 3));
        assert!(c.is_dragging(0));
        c.drag_over(2);
        assert!(c.is_drag_over(2));
        assert_eq!(c.drop_on(2), Some(Reorder { from: 0, to: 2 }));
        assert!(c.is_idle());
        assert!(!c.is_dragging(0));
        assert!(!c.is_drag_over(2));
    }

    #[test]
    fn drop_on_source_is_noop() {
        let mut c = DragController::new();
        c.drag_start(1, 3);
        c.drag_over(1);
        assert!(!c.is_drag_over(1));
        assert_eq!(c.drop_on(1), None);
        assert!(c.is_idle());
    }

    #[test]
    fn drag_end_clears_without_intent() {
        let mut c = DragController::new();
        c.drag_start(1, 3);
        c.drag_over(0);
        c.drag_end();
        assert!(c.is_idle());
        assert!(!c.is_drag_over(0));
        assert_eq!(c.drop_on(0), None);
    }

    #[test]
    fn leave_only_clears_matching_marker() {
        let mut c = DragController::new();
        c.drag_start(0, 4);
        c.drag_over(2);
        c.drag_leave(3);
        assert!(c.is_drag_over(2));
        c.drag_leave(2);
        assert!(!c.is_drag_over(2));
        c.drag_over(3);
        c.drag_over(3);
        assert!(c.is_drag_over(3));
    }

    #[test]
    fn invalid_start_is_rejected() {
        let mut c = DragController::new();
        assert!(!c.drag_start(3, 3));
        assert!(c.is_idle());
        assert!(c.drag_start(0, 3));
        assert!(!c.drag_start(1, 3));
        assert!(c.is_dragging(0));
    }

    #[test]
    fn events_while_idle_do_nothing() {
        let mut c = DragController::new();
        c.drag_over(1);
        c.drag_leave(1);
        assert_eq!(c.drop_on(1), None);
        assert!(c.is_idle());
    }

    #[test]
    fn source_is_stable_across_hover_events() {
        let mut c = DragController::new();
        assert_eq!(c.source(), None);
        c.drag_start(2, 4);
        for target in [0, 1, 3, 1] {
            c.drag_over(target);
            assert_eq!(c.source(), Some(2));
            c.drag_leave(target);
        }
        assert_eq!(c.drop_on(3), Some(Reorder { from: 2, to: 3 }));
        assert_eq!(c.source(), None);
    }
}
