//! App-level view models and animation metadata.

use crate::section::SectionId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// Translate up while fading in.
    FadeUp,
    /// Scale from 90% to full size.
    Zoom,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        self.frame_delayed(now_ms, 0)
    }

    /// Frame of a copy of this animation started `delay_ms` later. Before the
    /// delayed start the frame sits at 0%.
    pub fn frame_delayed(self, now_ms: u64, delay_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let start = self.start_ms.saturating_add(delay_ms);
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }

    pub fn end_ms(self, delay_ms: u64) -> u64 {
        self.start_ms
            .saturating_add(delay_ms)
            .saturating_add(self.duration_ms as u64)
    }
}

/// One animation replayed on a sequence of elements, each delayed by `step_ms`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StaggeredFrame {
    pub spec: AnimationSpec,
    pub step_ms: u16,
    pub now_ms: u64,
}

impl StaggeredFrame {
    /// `None` once the element finished animating.
    pub fn element(&self, index: usize) -> Option<AnimationFrame> {
        let delay = (index as u64).saturating_mul(self.step_ms as u64);
        self.spec.frame_delayed(self.now_ms, delay)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ImageStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Scroll-triggered entrance of a card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reveal {
    Hidden,
    Entering(AnimationFrame),
    Visible,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SidebarView {
    /// Slid in on mobile widths.
    pub open: bool,
    /// Widened by hover on desktop widths.
    pub expanded: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectCardView<'a> {
    pub index: usize,
    pub id: u32,
    pub name: &'a str,
    pub category: &'a str,
    pub cover_image: &'a str,
    pub live_demo: &'a str,
    pub hovered: bool,
    pub reveal: Reveal,
    pub image: ImageStatus,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceCardView<'a> {
    pub index: usize,
    pub icon: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub reveal: Reveal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalView<'a> {
    pub product_index: usize,
    pub title: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub goal: &'a str,
    pub technologies: &'a [&'a str],
    pub features: &'a [&'a str],
    pub live_demo: &'a str,
    /// Source currently on screen. Lags the selected index during a fade.
    pub image_src: &'a str,
    pub image_index: usize,
    pub image_total: usize,
    /// Dots are only drawn for multi-image galleries.
    pub show_dots: bool,
    /// Faded out while the next image is pending.
    pub image_hidden: bool,
    pub image_animation: Option<AnimationFrame>,
    pub image: ImageStatus,
    pub entrance: Option<AnimationFrame>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub project_type: &'a str,
    pub message: &'a str,
    pub submitting: bool,
}

/// App-level view model consumed by the platform renderer.
#[derive(Clone, Copy, Debug)]
pub struct Screen<'a> {
    pub title: &'a str,
    pub active_section: SectionId,
    /// Entrance of the active section's `animate-fade-up` elements.
    pub section_entrance: Option<StaggeredFrame>,
    pub sidebar: SidebarView,
    pub body_scroll_locked: bool,
    pub projects: &'a [ProjectCardView<'a>],
    /// Shown instead of the strip when the catalog is empty.
    pub empty_notice: Option<&'a str>,
    pub services: &'a [ServiceCardView<'a>],
    pub modal: Option<ModalView<'a>>,
    pub form: FormView<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_progress_runs_until_duration() {
        let spec = AnimationSpec::new(AnimationKind::Zoom, 1_000, 200);
        assert_eq!(spec.frame(1_000).map(|f| f.progress_pct), Some(0));
        assert_eq!(spec.frame(1_100).map(|f| f.progress_pct), Some(50));
        assert_eq!(spec.frame(1_200), None);
        assert_eq!(spec.end_ms(0), 1_200);
    }

    #[test]
    fn delayed_frames_hold_at_zero_before_start() {
        let spec = AnimationSpec::new(AnimationKind::FadeUp, 0, 800);
        let stagger = StaggeredFrame {
            spec,
            step_ms: 100,
            now_ms: 150,
        };

        assert_eq!(stagger.element(0).map(|f| f.progress_pct), Some(18));
        assert_eq!(stagger.element(1).map(|f| f.progress_pct), Some(6));
        assert_eq!(stagger.element(3).map(|f| f.progress_pct), Some(0));

        let done = StaggeredFrame {
            now_ms: 900,
            ..stagger
        };
        assert_eq!(done.element(0), None);
        assert_eq!(done.element(1), None);
        assert!(done.element(2).is_some());
    }
}
