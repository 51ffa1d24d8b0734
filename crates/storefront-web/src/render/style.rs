//! Inline styles for core-driven animation frames.

use storefront_core::render::{AnimationFrame, Reveal};

const FADE_UP_OFFSET_PX: f32 = 30.0;
const HOVER_LIFT: &str = "transform: translateY(-8px) scale(1.02); transition: transform 0.3s ease;";

fn progress(frame: AnimationFrame) -> f32 {
    f32::from(frame.progress_pct.min(100)) / 100.0
}

fn fade_up_frame(frame: AnimationFrame) -> String {
    let p = progress(frame);
    format!(
        "opacity: {:.2}; transform: translateY({:.1}px);",
        p,
        (1.0 - p) * FADE_UP_OFFSET_PX
    )
}

/// Staggered section entrance. A settled element carries no inline style.
pub fn fade_up(frame: Option<AnimationFrame>) -> String {
    frame.map(fade_up_frame).unwrap_or_default()
}

pub fn reveal(reveal: Reveal) -> String {
    match reveal {
        Reveal::Hidden => format!(
            "opacity: 0; transform: translateY({:.1}px);",
            FADE_UP_OFFSET_PX
        ),
        Reveal::Entering(frame) => fade_up_frame(frame),
        Reveal::Visible => "opacity: 1; transform: translateY(0);".to_owned(),
    }
}

/// Project card: revealed on scroll, lifted while hovered once visible.
pub fn card(state: Reveal, hovered: bool) -> String {
    if hovered && state == Reveal::Visible {
        format!("opacity: 1; {}", HOVER_LIFT)
    } else {
        reveal(state)
    }
}

/// Modal dialog entrance.
pub fn zoom(frame: Option<AnimationFrame>) -> String {
    match frame {
        Some(frame) => {
            let p = progress(frame);
            format!("opacity: {:.2}; transform: scale({:.3});", p, 0.9 + 0.1 * p)
        }
        None => String::new(),
    }
}

/// Gallery image: hidden while the next source is pending, then faded in.
pub fn gallery_image(hidden: bool, fade_in: Option<AnimationFrame>) -> String {
    if hidden {
        return "opacity: 0;".to_owned();
    }

    match fade_in {
        Some(frame) => format!("opacity: {:.2};", progress(frame)),
        None => "opacity: 1;".to_owned(),
    }
}
