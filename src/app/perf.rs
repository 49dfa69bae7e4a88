use eframe::egui;
use std::time::{Duration, Instant};

/// Frame statistics for checking that the demo idles when nothing moves
#[derive(Default)]
pub struct PerfStats {
    /// When the current measurement window started
    window_start: Option<Instant>,
    /// Number of frames rendered in this window
    frame_count: u64,
    /// Frames where the user was dragging the strip
    drag_frames: u64,
    /// Frames where a settle animation was running
    settle_frames: u64,
    /// Number of page changes
    page_changes: u64,
    /// Frames with pointer (mouse) activity
    pointer_frames: u64,
    /// Frames with keyboard activity
    keyboard_frames: u64,
}

impl PerfStats {
    pub fn on_frame(&mut self, ctx: &egui::Context) {
        self.frame_count += 1;

        ctx.input(|i| {
            if i.pointer.is_moving() || i.pointer.any_down() || i.pointer.any_released() {
                self.pointer_frames += 1;
            }
            if !i.keys_down.is_empty()
                || i.events.iter().any(|e| matches!(e, egui::Event::Key { .. }))
            {
                self.keyboard_frames += 1;
            }
        });
    }

    pub fn on_drag(&mut self) {
        self.drag_frames += 1;
    }

    pub fn on_settle(&mut self) {
        self.settle_frames += 1;
    }

    pub fn on_page_change(&mut self) {
        self.page_changes += 1;
    }

    /// Log frame stats if enabled and interval has elapsed.
    ///
    /// Zero, negative, NaN and unrepresentable intervals disable logging.
    pub fn maybe_log(&mut self, interval: f32) {
        if interval <= 0.0 {
            return;
        }
        let Ok(interval) = Duration::try_from_secs_f32(interval) else {
            return;
        };

        let now = Instant::now();
        let window_start = self.window_start.get_or_insert(now);
        let elapsed = now.duration_since(*window_start);

        if elapsed >= interval {
            let secs = elapsed.as_secs_f64();
            let fps = self.frame_count as f64 / secs;
            let s = &self;

            let explained = s.drag_frames + s.settle_frames + s.pointer_frames + s.keyboard_frames;
            let idle = s.frame_count.saturating_sub(explained);

            log::info!(
                "[perf] {:.1}s: frames={} ({:.1} fps) | drag={} settle={} pages={} pointer={} kbd={} | idle={}",
                secs,
                s.frame_count,
                fps,
                s.drag_frames,
                s.settle_frames,
                s.page_changes,
                s.pointer_frames,
                s.keyboard_frames,
                idle,
            );

            *self = PerfStats {
                window_start: Some(now),
                ..Default::default()
            };
        }
    }
}
