use serde::{Deserialize, Serialize};

/// Pointer events delivered by the host for bar hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverEvent {
    /// Pointer entered the bar at this visible position.
    Enter(usize),
    Leave,
}

/// Hovered bar of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    /// Applies one event; returns whether the hovered position changed.
    pub fn apply(&mut self, event: HoverEvent) -> bool {
        let next = match event {
            HoverEvent::Enter(position) => Some(position),
            HoverEvent::Leave => None,
        };
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    /// Drops a hovered position that no longer exists in a window of `visible` bars.
    pub fn retain_within(&mut self, visible: usize) -> bool {
        match self.hovered {
            Some(position) if position >= visible => {
                self.hovered = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverEvent, HoverState};

    #[test]
    fn enter_and_leave_report_changes() {
        let mut state = HoverState::default();
        assert!(state.apply(HoverEvent::Enter(2)));
        assert!(!state.apply(HoverEvent::Enter(2)));
        assert_eq!(state.hovered(), Some(2));
        assert!(state.apply(HoverEvent::Enter(0)));
        assert!(state.apply(HoverEvent::Leave));
        assert!(!state.apply(HoverEvent::Leave));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn shrinking_window_clears_stale_hover() {
        let mut state = HoverState::default();
        state.apply(HoverEvent::Enter(4));
        assert!(!state.retain_within(5));
        assert!(state.retain_within(4));
        assert_eq!(state.hovered(), None);
    }
}
