use carousel::CardScale;
use eframe::egui;

/// One card ready to paint, in strip coordinates.
pub struct CardPaint {
    /// Card center relative to the strip's left edge
    pub center_x: f32,
    /// Transform from the carousel controller
    pub scale: CardScale,
    pub color: egui::Color32,
}

pub struct CardStripState {
    pub cards: Vec<CardPaint>,
    pub item_width: f32,
    pub item_height: f32,
    pub corner_radius: f32,
}

/// Paints the visible cards and returns the strip's response.
///
/// The response senses drags so the caller can feed pointer movement back
/// into the carousel.
pub fn render(ui: &mut egui::Ui, state: &CardStripState, viewport_width: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(viewport_width, state.item_height),
        egui::Sense::drag(),
    );

    let painter = ui.painter_at(rect);
    let center_y = rect.center().y;

    for card in &state.cards {
        let size = egui::vec2(
            state.item_width * card.scale.width,
            state.item_height * card.scale.height,
        );
        let card_rect =
            egui::Rect::from_center_size(egui::pos2(rect.left() + card.center_x, center_y), size);

        if !card_rect.intersects(rect) {
            continue;
        }

        painter.rect_filled(card_rect, state.corner_radius, card.color);
    }

    response
}
