//! Shared stacking helpers for container widgets.

use tumaninah_core::{Constraints, Rect, Size, Widget};

/// Measure children stacked top to bottom with `gap` between them.
pub(crate) fn measure_column(
    children: &[Box<dyn Widget>],
    constraints: Constraints,
    gap: f32,
) -> Size {
    let child_constraints = constraints.loosen();
    let mut width = 0.0f32;
    let mut height = 0.0f32;
    let mut visible = 0usize;

    for child in children {
        let size = child.measure(child_constraints);
        if size.height > 0.0 {
            visible += 1;
        }
        width = width.max(size.width);
        height += size.height;
    }

    height += gap * visible.saturating_sub(1) as f32;
    constraints.constrain(Size::new(width, height))
}

/// Lay children out top to bottom, each spanning the full width.
///
/// Zero-height children receive a zero rect and no gap.
pub(crate) fn layout_column(children: &mut [Box<dyn Widget>], bounds: Rect, gap: f32) {
    let mut y = bounds.y;
    let mut first = true;

    for child in children.iter_mut() {
        let size = child.measure(Constraints::loose(bounds.size()));
        if size.height <= 0.0 {
            child.layout(Rect::new(bounds.x, y, 0.0, 0.0));
            continue;
        }
        if !first {
            y += gap;
        }
        first = false;
        child.layout(Rect::new(bounds.x, y, bounds.width, size.height));
        y += size.height;
    }
}

/// Measure children placed left to right with `gap` between them.
pub(crate) fn measure_row(children: &[Box<dyn Widget>], constraints: Constraints, gap: f32) -> Size {
    let child_constraints = constraints.loosen();
    let mut width = 0.0f32;
    let mut height = 0.0f32;

    for child in children {
        let size = child.measure(child_constraints);
        width += size.width;
        height = height.max(size.height);
    }

    width += gap * children.len().saturating_sub(1) as f32;
    constraints.constrain(Size::new(width, height))
}

/// Lay children out left to right at their measured widths.
pub(crate) fn layout_row(children: &mut [Box<dyn Widget>], bounds: Rect, gap: f32) {
    let mut x = bounds.x;
    for child in children.iter_mut() {
        let size = child.measure(Constraints::loose(bounds.size()));
        child.layout(Rect::new(x, bounds.y, size.width, bounds.height));
        x += size.width + gap;
    }
}
