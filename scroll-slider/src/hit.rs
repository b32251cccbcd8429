use crate::layout::SliderLayout;

/// Find the slider element at the given coordinates.
/// Buttons are checked before the viewport.
pub fn hit_test(layout: &SliderLayout, x: u16, y: u16) -> Option<String> {
    [&layout.left, &layout.right, &layout.viewport]
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(id, _)| id.clone())
}
