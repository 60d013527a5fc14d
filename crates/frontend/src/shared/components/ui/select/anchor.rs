//! Panel geometry relative to the trigger.

/// Vertical gap between trigger and panel, px
pub const PANEL_GAP_PX: f64 = 4.0;

/// Trigger rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

/// Where the floating panel goes: under the trigger, same width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl AnchorRect {
    pub fn below(bounds: &TriggerBounds) -> Self {
        Self {
            top: bounds.bottom + PANEL_GAP_PX,
            left: bounds.left,
            width: bounds.width,
        }
    }

    /// Inline style for a `position: fixed` panel
    pub fn to_style(&self) -> String {
        format!(
            "position: fixed; top: {}px; left: {}px; width: {}px;",
            self.top, self.left, self.width
        )
    }
}

/// Next anchor given a fresh measurement.
///
/// An unmeasurable trigger (`None`, e.g. mid-unmount) keeps the previous
/// anchor.
pub fn track(previous: Option<AnchorRect>, measured: Option<TriggerBounds>) -> Option<AnchorRect> {
    match measured {
        Some(bounds) => Some(AnchorRect::below(&bounds)),
        None => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, left: f64, height: f64, width: f64) -> TriggerBounds {
        TriggerBounds {
            top,
            left,
            bottom: top + height,
            width,
        }
    }

    #[test]
    fn test_anchor_under_trigger() {
        let rect = AnchorRect::below(&bounds(100.0, 40.0, 32.0, 240.0));
        assert_eq!(rect.top, 132.0 + PANEL_GAP_PX);
        assert_eq!(rect.left, 40.0);
        assert_eq!(rect.width, 240.0);
    }

    #[test]
    fn test_unmeasurable_keeps_last_position() {
        let first = track(None, Some(bounds(10.0, 5.0, 20.0, 100.0)));
        assert!(first.is_some());
        assert_eq!(track(first, None), first);
        assert_eq!(track(None, None), None);
    }

    #[test]
    fn test_scroll_moves_anchor() {
        let before = track(None, Some(bounds(300.0, 20.0, 30.0, 200.0)));
        let after = track(before, Some(bounds(180.0, 20.0, 30.0, 200.0)));
        assert_eq!(after.map(|a| a.top), Some(210.0 + PANEL_GAP_PX));
    }

    #[test]
    fn test_style() {
        let rect = AnchorRect {
            top: 36.0,
            left: 8.5,
            width: 120.0,
        };
        assert_eq!(
            rect.to_style(),
            "position: fixed; top: 36px; left: 8.5px; width: 120px;"
        );
    }
}
