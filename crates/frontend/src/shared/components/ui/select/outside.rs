/// Where a pointer-down landed relative to the control.
///
/// The panel is mounted through a portal, so the control spans two disjoint
/// DOM subtrees: the trigger and the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Trigger,
    Panel,
    Outside,
}

impl PointerTarget {
    pub fn classify(in_trigger: bool, in_panel: bool) -> Self {
        if in_trigger {
            PointerTarget::Trigger
        } else if in_panel {
            PointerTarget::Panel
        } else {
            PointerTarget::Outside
        }
    }

    pub fn is_outside(self) -> bool {
        self == PointerTarget::Outside
    }
}
