use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell, BLANK_BG};
use crate::element::{Button, Container, ScrollContainer};
use crate::layout::{Rect, SliderLayout};
use crate::slider::ScrollSlider;
use crate::types::{Display, Justify, Rgb, Weight};

const SLIDE_BG: Rgb = Rgb::new(40, 44, 52);
const SLIDE_FG: Rgb = Rgb::new(220, 223, 228);
const BUTTON_FG: Rgb = Rgb::new(97, 175, 239);
const DISABLED_FG: Rgb = Rgb::new(92, 99, 112);

/// Draw the slider's buttons and visible slides into the buffer.
pub fn render_slider(
    slider: &ScrollSlider<Container, Button>,
    layout: &SliderLayout,
    buf: &mut Buffer,
) {
    render_button(slider.left(), layout.left.1, buf);
    render_button(slider.right(), layout.right.1, buf);
    render_container(slider.container(), layout.viewport.1, buf);
}

fn render_button(button: &Button, rect: Rect, buf: &mut Buffer) {
    if button.display() == Display::None || rect.is_empty() {
        return;
    }

    let (fg, weight) = if button.is_disabled() {
        (DISABLED_FG, Weight::Dim)
    } else {
        (BUTTON_FG, Weight::Bold)
    };

    let (x, y) = rect.center();
    buf.put(x, y, Cell::glyph(button.glyph(), fg, BLANK_BG).weight(weight));
}

fn render_container(container: &Container, rect: Rect, buf: &mut Buffer) {
    if rect.is_empty() {
        return;
    }

    let m = container.measurements();
    let (slide_width, gap) = container.slide_size();
    let pitch = u32::from(slide_width) + u32::from(gap);
    if pitch == 0 {
        return;
    }

    // Content narrower than the viewport sits in the middle when centered
    let lead = match container.justify() {
        Justify::Center => m.client_width.saturating_sub(m.scroll_width) / 2,
        Justify::Start => 0,
    };
    let label_row = rect.y + rect.height / 2;
    let labels: Vec<Vec<(u16, char)>> = container
        .labels()
        .iter()
        .map(|label| fit_label(label, slide_width))
        .collect();

    let slide_at = |col: u16| -> Option<(usize, u16)> {
        let content_x = (u32::from(col) + u32::from(m.scroll_left)).checked_sub(u32::from(lead))?;
        let index = (content_x / pitch) as usize;
        let within = (content_x % pitch) as u16;
        (index < labels.len() && within < slide_width).then_some((index, within))
    };

    for col in 0..rect.width {
        if slide_at(col).is_some() {
            buf.fill_column(rect.x + col, rect.y, rect.height, SLIDE_BG);
        }
    }

    // Labels go in a second pass so a wide char's continuation is not painted over
    for col in 0..rect.width {
        let Some((index, within)) = slide_at(col) else {
            continue;
        };
        let Some(&(_, ch)) = labels[index].iter().find(|(offset, _)| *offset == within) else {
            continue;
        };

        let x = rect.x + col;
        buf.put(x, label_row, Cell::glyph(ch, SLIDE_FG, SLIDE_BG));
        if ch.width().unwrap_or(1) > 1 && col + 1 < rect.width {
            buf.put(x + 1, label_row, Cell::continuation(SLIDE_BG));
        }
    }
}

/// Lay a label out centered within `width` cells, truncating what does not fit.
/// Returns (offset, char) pairs.
fn fit_label(label: &str, width: u16) -> Vec<(u16, char)> {
    let mut placed = Vec::new();
    let mut used: u16 = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if used + w > width {
            break;
        }
        placed.push((used, ch));
        used += w;
    }

    let pad = (width - used) / 2;
    placed
        .into_iter()
        .map(|(offset, ch)| (offset + pad, ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_label_centers() {
        let placed = fit_label("ab", 6);
        assert_eq!(placed, vec![(2, 'a'), (3, 'b')]);
    }

    #[test]
    fn test_fit_label_truncates() {
        let placed = fit_label("abcdef", 3);
        assert_eq!(placed, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_fit_label_wide_chars() {
        // Each CJK char is two cells wide; only two fit in five cells
        let placed = fit_label("日本語", 5);
        assert_eq!(placed, vec![(0, '日'), (2, '本')]);
    }
}
