//! Animation timings and the inline styles derived from them.
//!
//! Everything here is a pure function of scroll offsets, phases and time so
//! components only have to bind the results to `style` attributes.

use std::time::Duration;

use crate::gallery::Phase;

pub const EASE_OUT: &str = "cubic-bezier(0.16, 1, 0.3, 1)";
pub const EASE_IN: &str = "cubic-bezier(0.55, 0, 1, 0.45)";

pub const CARD_FADE_OUT_MS: u64 = 300;
pub const CARD_FADE_OUT_STAGGER_MS: u64 = 50;
pub const CARD_FADE_IN_MS: u64 = 500;
pub const CARD_FADE_IN_STAGGER_MS: u64 = 100;
pub const CARD_REVEAL_MS: u64 = 800;
pub const CARD_REVEAL_STAGGER_MS: u64 = 150;

pub const MODAL_EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    None,
    Up(i32),
    Left(i32),
    Right(i32),
}

impl Offset {
    fn hidden_transform(self) -> String {
        match self {
            Offset::None => "none".to_string(),
            Offset::Up(px) => format!("translateY({px}px)"),
            Offset::Left(px) => format!("translateX(-{px}px)"),
            Offset::Right(px) => format!("translateX({px}px)"),
        }
    }
}

/// A single entrance: where the element starts and how it gets home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub offset: Offset,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl Cue {
    pub const fn new(offset: Offset, duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            offset,
            duration_ms,
            delay_ms,
        }
    }

    pub const fn delayed(self, extra_ms: u64) -> Self {
        Self {
            delay_ms: self.delay_ms + extra_ms,
            ..self
        }
    }

    pub fn style(self, visible: bool) -> String {
        reveal_style(visible, self.offset, self.duration_ms, self.delay_ms)
    }
}

// Hero entrance timeline
pub const HERO_NAME: Cue = Cue::new(Offset::Up(50), 1200, 0);
pub const HERO_TITLE: Cue = Cue::new(Offset::Up(35), 1000, 500);
pub const HERO_SUBTITLE: Cue = Cue::new(Offset::Up(25), 800, 900);
pub const HERO_CTA: Cue = Cue::new(Offset::Up(20), 800, 1000);
pub const HERO_INDICATOR: Cue = Cue::new(Offset::None, 600, 1400);

pub fn reveal_style(visible: bool, offset: Offset, duration_ms: u64, delay_ms: u64) -> String {
    let (opacity, transform) = if visible {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), offset.hidden_transform())
    };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {duration_ms}ms {EASE_OUT}, transform {duration_ms}ms {EASE_OUT}; \
         transition-delay: {delay_ms}ms;"
    )
}

/// Intersection root margin for a "section top crosses `start_pct`% of the
/// viewport" trigger.
pub fn trigger_root_margin(start_pct: u8) -> String {
    let start_pct = start_pct.min(100);
    format!("0px 0px -{}% 0px", 100 - start_pct)
}

fn staggered(base_ms: u64, stagger_ms: u64, count: usize) -> Duration {
    let extra = stagger_ms * count.saturating_sub(1) as u64;
    Duration::from_millis(base_ms + extra)
}

/// Time until the last of `count` cards has faded out.
pub fn fade_out_duration(count: usize) -> Duration {
    staggered(CARD_FADE_OUT_MS, CARD_FADE_OUT_STAGGER_MS, count)
}

/// Time until the last of `count` cards has faded in.
pub fn fade_in_duration(count: usize) -> Duration {
    staggered(CARD_FADE_IN_MS, CARD_FADE_IN_STAGGER_MS, count)
}

pub fn card_style(phase: Phase, index: usize, revealed: bool) -> String {
    let index = index as u64;
    match phase {
        Phase::FadingOut { .. } => format!(
            "opacity: 0; transform: translateY(20px); \
             transition: opacity {CARD_FADE_OUT_MS}ms {EASE_IN}, transform {CARD_FADE_OUT_MS}ms {EASE_IN}; \
             transition-delay: {}ms;",
            index * CARD_FADE_OUT_STAGGER_MS
        ),
        Phase::FadingIn => format!(
            "animation: card-in {CARD_FADE_IN_MS}ms {EASE_OUT} {}ms both;",
            index * CARD_FADE_IN_STAGGER_MS
        ),
        Phase::Idle => reveal_style(
            revealed,
            Offset::Up(40),
            CARD_REVEAL_MS,
            index * CARD_REVEAL_STAGGER_MS,
        ),
    }
}

/// Backdrop animation for the detail overlay.
pub fn overlay_style(closing: bool) -> String {
    if closing {
        format!("animation: overlay-out 200ms {EASE_IN} 100ms both;")
    } else {
        format!("animation: overlay-in 300ms {EASE_OUT} both;")
    }
}

/// Dialog animation for the detail overlay. Closing ends within
/// [`MODAL_EXIT_MS`].
pub fn dialog_style(closing: bool) -> String {
    if closing {
        format!("animation: dialog-out 250ms {EASE_IN} both;")
    } else {
        format!("animation: dialog-in 400ms {EASE_OUT} 100ms both;")
    }
}

fn progress(value: f64, span: f64) -> f64 {
    if span <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / span).clamp(0.0, 1.0)
}

type Rgb = (u8, u8, u8);

const WHITE: Rgb = (0xff, 0xff, 0xff);
const TINT_MID: Rgb = (0xee, 0xf2, 0xff);
const TINT_END: Rgb = (0xe0, 0xf2, 0xfe);

fn mix(from: Rgb, to: Rgb, t: f64) -> String {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!(
        "rgb({}, {}, {})",
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2)
    )
}

/// Scroll-linked hero state for a given offset and hero height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    /// Progress through the first half of the hero.
    pub content: f64,
    /// Progress through the first fifth of the hero.
    pub indicator: f64,
    /// Progress through the whole hero.
    pub section: f64,
}

impl HeroParallax {
    pub fn at(scroll_y: f64, hero_height: f64) -> Self {
        Self {
            content: progress(scroll_y, hero_height * 0.5),
            indicator: progress(scroll_y, hero_height * 0.2),
            section: progress(scroll_y, hero_height),
        }
    }

    pub fn content_opacity(&self) -> f64 {
        1.0 - self.content
    }

    pub fn content_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px) scale({:.3});",
            self.content_opacity(),
            -60.0 * self.content,
            1.0 - 0.1 * self.content
        )
    }

    pub fn title_style(&self) -> String {
        format!(
            "text-shadow: 0 0 40px rgba(59, 130, 246, {:.3});",
            0.4 * self.content
        )
    }

    pub fn indicator_opacity(&self) -> f64 {
        1.0 - self.indicator
    }

    pub fn blue_orb_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            1.0 - 0.8 * self.section,
            -250.0 * self.section
        )
    }

    pub fn purple_orb_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            1.0 - 0.7 * self.section,
            150.0 * self.section
        )
    }

    pub fn background_style(&self) -> String {
        format!(
            "background: linear-gradient(to bottom, #ffffff 0%, {} 50%, {} 100%);",
            mix(WHITE, TINT_MID, self.section),
            mix(WHITE, TINT_END, self.section)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_reveal_style_hidden_and_visible() {
        let hidden = reveal_style(false, Offset::Left(80), 1000, 0);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateX(-80px)"));

        let shown = reveal_style(true, Offset::Left(80), 1000, 200);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
        assert!(shown.contains("transition-delay: 200ms;"));
    }

    #[test]
    fn test_cue_delay_accumulates() {
        let cue = Cue::new(Offset::Up(30), 600, 100).delayed(50);
        assert_eq!(cue.delay_ms, 150);
        assert!(cue.style(false).contains("translateY(30px)"));
    }

    #[test]
    fn test_hero_timeline_is_ordered() {
        let cues = [HERO_NAME, HERO_TITLE, HERO_SUBTITLE, HERO_CTA, HERO_INDICATOR];
        assert!(cues.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms));
    }

    #[test]
    fn test_trigger_root_margin() {
        assert_eq!(trigger_root_margin(70), "0px 0px -30% 0px");
        assert_eq!(trigger_root_margin(50), "0px 0px -50% 0px");
        assert_eq!(trigger_root_margin(120), "0px 0px -0% 0px");
    }

    #[test]
    fn test_fade_durations_include_stagger() {
        assert_eq!(fade_out_duration(0), Duration::from_millis(300));
        assert_eq!(fade_out_duration(1), Duration::from_millis(300));
        assert_eq!(fade_out_duration(3), Duration::from_millis(400));
        assert_eq!(fade_in_duration(0), Duration::from_millis(500));
        assert_eq!(fade_in_duration(4), Duration::from_millis(800));
    }

    #[test]
    fn test_card_style_per_phase() {
        let out = card_style(
            Phase::FadingOut {
                next: Category::Creative,
            },
            2,
            true,
        );
        assert!(out.contains("opacity: 0;"));
        assert!(out.contains("transition-delay: 100ms;"));

        let fading_in = card_style(Phase::FadingIn, 1, true);
        assert!(fading_in.contains("card-in 500ms"));
        assert!(fading_in.contains(" 100ms both"));

        assert!(card_style(Phase::Idle, 0, false).contains("opacity: 0;"));
        assert!(card_style(Phase::Idle, 0, true).contains("opacity: 1;"));
    }

    #[test]
    fn test_overlay_exit_fits_in_exit_window() {
        assert!(overlay_style(true).contains("overlay-out 200ms"));
        assert!(overlay_style(true).contains(" 100ms both"));
        assert!(200 + 100 <= MODAL_EXIT_MS);
        assert!(dialog_style(true).contains("dialog-out 250ms"));
        assert!(dialog_style(false).contains("dialog-in"));
    }

    #[test]
    fn test_parallax_at_rest() {
        let p = HeroParallax::at(0.0, 800.0);
        assert_eq!(p.content_opacity(), 1.0);
        assert_eq!(p.indicator_opacity(), 1.0);
        assert!(p.content_style().contains("scale(1.000)"));
        assert!(p.background_style().contains("rgb(255, 255, 255) 50%"));
    }

    #[test]
    fn test_parallax_end_points() {
        let half = HeroParallax::at(400.0, 800.0);
        assert_eq!(half.content, 1.0);
        assert_eq!(half.content_opacity(), 0.0);
        assert!(half.content_style().contains("translateY(-60.0px)"));
        assert!(half.content_style().contains("scale(0.900)"));
        assert_eq!(half.indicator_opacity(), 0.0);
        assert_eq!(half.section, 0.5);

        let past = HeroParallax::at(5000.0, 800.0);
        assert_eq!(past.section, 1.0);
        assert!(past.blue_orb_style().contains("translateY(-250.0px)"));
        assert!(past.purple_orb_style().contains("translateY(150.0px)"));
        assert!(past.background_style().contains("rgb(238, 242, 255) 50%"));
        assert!(past.background_style().contains("rgb(224, 242, 254) 100%"));
    }

    #[test]
    fn test_parallax_degenerate_height_rests() {
        assert_eq!(HeroParallax::at(300.0, 0.0), HeroParallax::at(0.0, 800.0));
        assert_eq!(HeroParallax::at(-20.0, 800.0).content, 0.0);
        assert_eq!(HeroParallax::at(f64::NAN, 800.0).section, 0.0);
    }
}
