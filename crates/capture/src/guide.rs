use {
    crate::*,
    base::{Cancel, Vec2, log_debug, log_error, log_warn},
    image::{Color, GLYPH_SIZE, Image},
    std::time::Duration,
    video::VideoSource,
};

pub const DEFAULT_GUIDE_TITLE: &str = "Hand in the circle - ESC cancels";
pub const GO_TEXT: &str = "GO!";

/// How the countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOutcome {
    /// The countdown reached zero and "GO!" was shown.
    Done,
    /// Cancel key, closed window, or stop requested.
    Cancelled,
    /// The camera stopped delivering frames.
    ReadFailed,
    /// The window could not be updated.
    SurfaceFailed,
}

impl GuideOutcome {
    /// Whether recording should start.
    pub fn proceed(&self) -> bool {
        *self == GuideOutcome::Done
    }
}

/// Positioning overlay shown on the live feed before recording.
///
/// Uses the session's camera and window; it never creates or closes either.
#[derive(Debug, Clone)]
pub struct PreCaptureGuide {
    countdown: Duration,
    title: String,
    circle_color: Color,
    text_color: Color,
    circle_thickness: usize,
    radius_frac: f32,
    go_pause: Duration,
}

impl PreCaptureGuide {
    pub fn new(countdown: Duration) -> Self {
        Self {
            countdown,
            title: DEFAULT_GUIDE_TITLE.to_string(),
            circle_color: Color::GREEN,
            text_color: Color::WHITE,
            circle_thickness: 3,
            radius_frac: 0.22,
            go_pause: Duration::from_millis(250),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_colors(mut self, circle: Color, text: Color) -> Self {
        self.circle_color = circle;
        self.text_color = text;
        self
    }

    pub fn countdown(&self) -> Duration {
        self.countdown
    }

    /// Text shown for `remaining` time left: whole seconds rounded up, or "GO!".
    pub fn label(remaining: Duration) -> String {
        match remaining.as_secs_f64().ceil() as u64 {
            0 => GO_TEXT.to_string(),
            secs => secs.to_string(),
        }
    }

    /// Draw the circle, title and `label` onto an RGB8 frame.
    pub fn render(&self, frame: &mut Image, label: &str) -> Result<(), image::ImageError> {
        let size = frame.size;
        let center = Vec2::new((size.x / 2) as isize, (size.y / 2) as isize);
        let radius = ((size.min_element() as f32 * self.radius_frac) as usize).max(10);
        image::draw_ring(frame, center, radius, self.circle_thickness, self.circle_color)?;

        // title fits 90% of the width, count is about an eighth of the height
        let title_len = self.title.chars().count().max(1);
        let title_scale = (size.y / 240)
            .min(size.x * 9 / 10 / (title_len * GLYPH_SIZE))
            .max(1);
        let title_at = Vec2::new(center.x, (size.y / 10) as isize);
        image::draw_text_centered(frame, &self.title, title_at, title_scale, self.text_color)?;

        let count_scale = (size.y / 60).max(2);
        let count_at = Vec2::new(center.x, (size.y * 6 / 10) as isize);
        image::draw_text_centered(frame, label, count_at, count_scale, self.text_color)
    }

    /// Run the countdown on the live feed.
    ///
    /// Returns `Done` once the countdown has elapsed and a final "GO!" frame
    /// was shown; anything else means the session should not record.
    pub fn run(
        &self,
        source: &mut dyn VideoSource,
        surface: &mut dyn Surface,
        clock: &dyn Clock,
        cancel: &Cancel,
    ) -> GuideOutcome {
        let end = clock.now() + self.countdown;

        loop {
            if cancel.is_cancelled() {
                log_debug!("guide: stop requested");
                return GuideOutcome::Cancelled;
            }

            let remaining = end.saturating_duration_since(clock.now());
            let mut frame = match source.read() {
                Ok(frame) => frame,
                Err(e) => {
                    log_warn!("guide: failed to read frame: {}", e);
                    return GuideOutcome::ReadFailed;
                }
            };

            let label = Self::label(remaining);
            if let Err(e) = self.render(&mut frame, &label) {
                log_warn!("guide: cannot draw overlay: {}", e);
            }
            if let Err(e) = surface.show(&frame) {
                log_error!("guide: {}", e);
                return GuideOutcome::SurfaceFailed;
            }

            if remaining.is_zero() {
                clock.sleep(self.go_pause);
                return GuideOutcome::Done;
            }

            if surface.poll_key().is_some_and(|key| key.is_cancel()) {
                log_debug!("guide: cancelled by user with {} left", label);
                return GuideOutcome::Cancelled;
            }
        }
    }
}
