use eframe::egui;

const DOT_RADIUS: f32 = 4.0;
const DOT_SPACING: f32 = 16.0;
const HEIGHT: f32 = 24.0;

const CURRENT_COLOR: egui::Color32 = egui::Color32::BLACK;
const OTHER_COLOR: egui::Color32 = egui::Color32::LIGHT_GRAY;

/// X offset of dot `index` from the left of a row of `count` dots centered
/// in a container `width` wide.
fn dot_x(index: usize, count: usize, width: f32) -> f32 {
    let row_width = count.saturating_sub(1) as f32 * DOT_SPACING;
    (width - row_width) / 2.0 + index as f32 * DOT_SPACING
}

/// Dot under the pointer, if any. Hits within half the spacing count.
fn hit_test(x: f32, count: usize, width: f32) -> Option<usize> {
    (0..count).find(|&i| (dot_x(i, count, width) - x).abs() <= DOT_SPACING / 2.0)
}

/// Renders one dot per page with the current page highlighted.
/// Returns the page whose dot was clicked, if any.
pub fn render(ui: &mut egui::Ui, count: usize, current: usize, width: f32) -> Option<usize> {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, HEIGHT), egui::Sense::click());
    let rect = response.rect;
    let y = rect.center().y;

    for i in 0..count {
        let x = rect.left() + dot_x(i, count, width);
        let color = if i == current { CURRENT_COLOR } else { OTHER_COLOR };
        painter.circle_filled(egui::pos2(x, y), DOT_RADIUS, color);
    }

    if !response.clicked() {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    hit_test(pos.x - rect.left(), count, width)
}
