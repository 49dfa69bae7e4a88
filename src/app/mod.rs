mod input;
mod perf;

use crate::config::Config;
use crate::ui::{card_strip, help_bar, page_indicator};
use carousel::palette;
use carousel::util::layout;
use carousel::{CarouselController, CarouselResult};
use eframe::egui;
use self::perf::PerfStats;

/// Height reserved for the help bar
const HELP_BAR_HEIGHT: f32 = 28.0;

/// Build a carousel of random colors sized for `viewport_width`.
fn build_carousel(
    config: &Config,
    viewport_width: f32,
    seed: Option<u64>,
) -> CarouselResult<CarouselController<egui::Color32>> {
    let colors = palette::random_colors(config.item_count, seed);
    CarouselController::new(
        colors,
        config.item_width(viewport_width),
        config.item_spacing,
        viewport_width,
    )
}

/// The carousel demo
pub struct App {
    /// Application configuration
    config: Config,
    /// Cards and scroll state
    carousel: CarouselController<egui::Color32>,
    /// Frame tracking stats
    perf_stats: PerfStats,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> CarouselResult<Self> {
        let carousel = build_carousel(&config, config.window_width, config.seed)?;
        log::info!(
            "carousel ready: {} cards, item width {}",
            carousel.len(),
            carousel.geometry().item_width()
        );

        Ok(Self {
            config,
            carousel,
            perf_stats: PerfStats::default(),
        })
    }

    /// Replace the cards with fresh colors, staying on the current page.
    pub(crate) fn shuffle_colors(&mut self) {
        let page = self.carousel.current_page();
        let viewport_width = self.carousel.geometry().viewport_width();
        let item_width = self.carousel.geometry().item_width();
        let colors = palette::random_colors(self.carousel.len(), None);

        let rebuilt = CarouselController::new(colors, item_width, self.config.item_spacing, viewport_width)
            .and_then(|mut carousel| carousel.jump_to_page(page).map(|()| carousel));

        match rebuilt {
            Ok(carousel) => self.carousel = carousel,
            Err(e) => log::error!("Failed to shuffle colors: {}", e),
        }
    }

    /// Keep the carousel's viewport in sync with the window.
    fn ensure_viewport(&mut self, viewport_width: f32) {
        if (self.carousel.geometry().viewport_width() - viewport_width).abs() < 0.1 {
            return;
        }
        if let Err(e) = self.carousel.set_viewport_width(viewport_width) {
            log::warn!("Ignoring viewport resize to {}: {}", viewport_width, e);
        }
    }

    /// Advance the settle animation by one frame.
    fn update_scroll(&mut self) {
        if !self.carousel.is_settling() {
            return;
        }
        self.perf_stats.on_settle();
        if let Some(page) = self.carousel.tick(layout::SCROLL_EASING) {
            log::debug!("settled on page {}", page);
            self.perf_stats.on_page_change();
        }
    }

    /// Turn strip pointer interaction into drag lifecycle events.
    fn handle_drag(&mut self, response: &egui::Response, ctx: &egui::Context) {
        if response.drag_started() {
            self.carousel.begin_drag();
        }

        if response.dragged() {
            self.perf_stats.on_drag();
            self.carousel.drag_by(response.drag_delta().x);
        }

        if response.drag_stopped() {
            // Pointer moving left scrolls toward later cards
            let velocity = -ctx.input(|i| i.pointer.velocity().x);
            let (offset, page) = self.carousel.end_drag(velocity);
            log::debug!("released at {:.1} pt/s, snapping to page {} ({:.1})", velocity, page, offset);
        }
    }

    fn strip_state(&self) -> card_strip::CardStripState {
        let cards = self
            .carousel
            .card_scales()
            .into_iter()
            .filter_map(|(index, scale)| {
                self.carousel.item(index).map(|&color| card_strip::CardPaint {
                    center_x: self.carousel.card_center_x(index),
                    scale,
                    color,
                })
            })
            .collect();

        card_strip::CardStripState {
            cards,
            item_width: self.carousel.geometry().item_width(),
            item_height: self.config.item_height,
            corner_radius: self.config.corner_radius,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.perf_stats.on_frame(ctx);

        // Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // Update settle animation and keep repainting until it lands
        self.update_scroll();
        if self.carousel.is_settling() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("help_bar")
            .exact_height(HELP_BAR_HEIGHT)
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(245)))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    help_bar::render(ui, self.carousel.current_page(), self.carousel.len());
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let viewport_width = ui.available_width();
                self.ensure_viewport(viewport_width);

                // Center the strip vertically
                let top = (ui.available_height() - self.config.item_height) / 2.0;
                ui.add_space(top.max(0.0));

                let strip_state = self.strip_state();
                let response = card_strip::render(ui, &strip_state, viewport_width);
                self.handle_drag(&response, ctx);

                ui.add_space(self.config.indicator_spacing);

                if let Some(page) = page_indicator::render(
                    ui,
                    self.carousel.len(),
                    self.carousel.current_page(),
                    viewport_width,
                ) {
                    self.go_to_page(page);
                }
            });

        self.perf_stats.maybe_log(self.config.perf_log_interval);
    }
}
