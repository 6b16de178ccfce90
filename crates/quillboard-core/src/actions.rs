//! Context-bar actions and the per-selection action resolver.
//!
//! Every shape kind maps to a fixed list of context-bar capabilities. For a
//! selection the applicable actions are the intersection of the lists of all
//! selected shapes, always emitted in the master [`ActionKind::ALL`] order.

use crate::shapes::{Shape, ShapeKind};
use serde::{Deserialize, Serialize};

/// A context-bar capability.
///
/// Declaration order is the display order: the bar renders applicable actions
/// in this order regardless of how the selection was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Begin editing the shape's text payload.
    Edit,
    /// Toggle content-tracking bounds.
    AutoResize,
    /// Pick the shape color.
    Swatch,
    /// Toggle interior fill.
    NoFill,
    /// Pick the stroke pattern.
    StrokeStyle,
    /// Pick the content scale.
    ScaleLevel,
    /// Pick font family/weight.
    TextStyle,
    /// Edit the external video URL.
    VideoLink,
    /// Collapse/expand an embedded page.
    PortalView,
    /// Pick line end decorations.
    ArrowMode,
    /// Navigate to the embedded page in the host.
    OpenPage,
}

impl ActionKind {
    /// The master enumeration, in display order.
    pub const ALL: [ActionKind; 11] = [
        ActionKind::Edit,
        ActionKind::AutoResize,
        ActionKind::Swatch,
        ActionKind::NoFill,
        ActionKind::StrokeStyle,
        ActionKind::ScaleLevel,
        ActionKind::TextStyle,
        ActionKind::VideoLink,
        ActionKind::PortalView,
        ActionKind::ArrowMode,
        ActionKind::OpenPage,
    ];
}

/// Actions that only make sense for a single selected shape.
pub const SINGLE_SHAPE_ACTIONS: [ActionKind; 3] = [
    ActionKind::Edit,
    ActionKind::VideoLink,
    ActionKind::OpenPage,
];

/// The static shape-kind → action-list table. Never mutated at runtime.
///
/// Groups have no entry of their own: their empty list collapses any
/// intersection they participate in.
pub fn supported_actions(kind: ShapeKind) -> &'static [ActionKind] {
    match kind {
        ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Polygon => &[
            ActionKind::Swatch,
            ActionKind::NoFill,
            ActionKind::StrokeStyle,
        ],
        ShapeKind::Line => &[ActionKind::Edit, ActionKind::Swatch, ActionKind::ArrowMode],
        ShapeKind::Freehand | ShapeKind::Highlighter => &[ActionKind::Swatch],
        ShapeKind::Text => &[
            ActionKind::Edit,
            ActionKind::AutoResize,
            ActionKind::Swatch,
            ActionKind::ScaleLevel,
            ActionKind::TextStyle,
        ],
        ShapeKind::Html => &[ActionKind::AutoResize, ActionKind::ScaleLevel],
        ShapeKind::Video => &[ActionKind::VideoLink],
        ShapeKind::Portal => &[
            ActionKind::Edit,
            ActionKind::AutoResize,
            ActionKind::ScaleLevel,
            ActionKind::PortalView,
            ActionKind::OpenPage,
        ],
        ShapeKind::Group => &[],
    }
}

/// Resolve the context-bar actions applicable to a whole selection.
///
/// Seeds with the first kind's action list, intersects with each subsequent
/// kind's list (short-circuiting once empty), strips single-shape-only actions
/// for multi-shape selections, and emits in [`ActionKind::ALL`] order. An
/// empty selection resolves to no actions.
pub fn actions_for_kinds(kinds: &[ShapeKind]) -> Vec<ActionKind> {
    let Some(&first) = kinds.first() else {
        return Vec::new();
    };

    let mut common: Vec<ActionKind> = supported_actions(first).to_vec();
    for &kind in &kinds[1..] {
        if common.is_empty() {
            break;
        }
        let supported = supported_actions(kind);
        common.retain(|action| supported.contains(action));
    }

    if kinds.len() > 1 {
        common.retain(|action| !SINGLE_SHAPE_ACTIONS.contains(action));
    }

    ActionKind::ALL
        .iter()
        .copied()
        .filter(|action| common.contains(action))
        .collect()
}

/// Convenience wrapper over [`actions_for_kinds`] for shape references.
pub fn actions_for_selection(shapes: &[&Shape]) -> Vec<ActionKind> {
    let kinds: Vec<ShapeKind> = shapes.iter().map(|s| s.kind()).collect();
    actions_for_kinds(&kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Ellipse, Portal, Rectangle, Shape};
    use kurbo::Point;

    #[test]
    fn test_empty_selection_resolves_to_nothing() {
        assert!(actions_for_kinds(&[]).is_empty());
    }

    #[test]
    fn test_single_shape_gets_its_full_list_in_display_order() {
        let actions = actions_for_kinds(&[ShapeKind::Portal]);
        assert_eq!(
            actions,
            vec![
                ActionKind::Edit,
                ActionKind::AutoResize,
                ActionKind::ScaleLevel,
                ActionKind::PortalView,
                ActionKind::OpenPage,
            ]
        );
    }

    #[test]
    fn test_homogeneous_pair_keeps_shared_actions() {
        let actions = actions_for_kinds(&[ShapeKind::Rectangle, ShapeKind::Ellipse]);
        assert_eq!(
            actions,
            vec![
                ActionKind::Swatch,
                ActionKind::NoFill,
                ActionKind::StrokeStyle,
            ]
        );
    }

    #[test]
    fn test_heterogeneous_pair_intersects() {
        // Rectangle: Swatch/NoFill/StrokeStyle; Line: Edit/Swatch/ArrowMode.
        let actions = actions_for_kinds(&[ShapeKind::Rectangle, ShapeKind::Line]);
        assert_eq!(actions, vec![ActionKind::Swatch]);
    }

    #[test]
    fn test_disjoint_tables_resolve_to_nothing() {
        // Video supports only the link editor; rectangles share nothing with it.
        assert!(actions_for_kinds(&[ShapeKind::Video, ShapeKind::Rectangle]).is_empty());
    }

    #[test]
    fn test_group_collapses_intersection() {
        assert!(actions_for_kinds(&[ShapeKind::Rectangle, ShapeKind::Group]).is_empty());
        assert!(actions_for_kinds(&[ShapeKind::Group]).is_empty());
    }

    #[test]
    fn test_single_shape_only_actions_dropped_for_multi_selection() {
        let single = actions_for_kinds(&[ShapeKind::Portal]);
        assert!(single.contains(&ActionKind::Edit));
        assert!(single.contains(&ActionKind::OpenPage));

        let double = actions_for_kinds(&[ShapeKind::Portal, ShapeKind::Portal]);
        assert!(!double.contains(&ActionKind::Edit));
        assert!(!double.contains(&ActionKind::OpenPage));
        // The view-mode toggle survives: it applies to every portal at once.
        assert!(double.contains(&ActionKind::PortalView));
    }

    #[test]
    fn test_output_order_is_independent_of_selection_order() {
        let a = actions_for_kinds(&[ShapeKind::Text, ShapeKind::Portal]);
        let b = actions_for_kinds(&[ShapeKind::Portal, ShapeKind::Text]);
        assert_eq!(a, b);
        assert_eq!(a, vec![ActionKind::AutoResize, ActionKind::ScaleLevel]);
    }

    #[test]
    fn test_output_is_subsequence_of_master_order() {
        let kind_sets: [&[ShapeKind]; 4] = [
            &[ShapeKind::Text],
            &[ShapeKind::Portal, ShapeKind::Html],
            &[ShapeKind::Line, ShapeKind::Freehand, ShapeKind::Highlighter],
            &[ShapeKind::Ellipse, ShapeKind::Polygon, ShapeKind::Rectangle],
        ];
        for kinds in kind_sets {
            let actions = actions_for_kinds(kinds);
            let positions: Vec<usize> = actions
                .iter()
                .map(|a| ActionKind::ALL.iter().position(|m| m == a).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{kinds:?}");
        }
    }

    #[test]
    fn test_intersection_short_circuits_after_collapse() {
        // Once the running set is empty, later kinds cannot resurrect actions.
        let actions = actions_for_kinds(&[
            ShapeKind::Video,
            ShapeKind::Rectangle,
            ShapeKind::Rectangle,
        ]);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_selection_wrapper_uses_shape_kinds() {
        let rect = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0));
        let ellipse = Shape::Ellipse(Ellipse::new(Point::new(0.0, 0.0), 5.0, 5.0));
        let actions = actions_for_selection(&[&rect, &ellipse]);
        assert_eq!(
            actions,
            vec![
                ActionKind::Swatch,
                ActionKind::NoFill,
                ActionKind::StrokeStyle,
            ]
        );

        let portal = Shape::Portal(Portal::new(Point::new(0.0, 0.0), "Journal".to_string()));
        assert!(actions_for_selection(&[&portal]).contains(&ActionKind::OpenPage));
    }
}
