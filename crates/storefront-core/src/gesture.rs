//! Touch swipe classification for the projects strip and the mobile sidebar.

/// Screen coordinates of a touch, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Direction of a projects strip scroll. `Forward` scrolls toward positive
/// offsets, which is leftward on the right-to-left page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    pub const fn signed(self, step_px: i32) -> i32 {
        match self {
            Self::Forward => step_px,
            Self::Backward => -step_px,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SidebarSwipe {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwipeConfig {
    pub projects_threshold_px: i32,
    pub projects_max_vertical_px: i32,
    pub sidebar_threshold_px: i32,
    pub sidebar_edge_px: i32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            projects_threshold_px: 50,
            projects_max_vertical_px: 50,
            sidebar_threshold_px: 100,
            sidebar_edge_px: 50,
        }
    }
}

/// Horizontal swipe over the projects strip. Mostly-vertical movement is a
/// page scroll and is ignored.
pub fn projects_swipe(
    start: TouchPoint,
    end: TouchPoint,
    config: &SwipeConfig,
) -> Option<ScrollDirection> {
    let diff_x = start.x - end.x;
    let diff_y = (start.y - end.y).abs();

    if diff_y >= config.projects_max_vertical_px || diff_x.abs() <= config.projects_threshold_px {
        return None;
    }

    if diff_x > 0 {
        Some(ScrollDirection::Forward)
    } else {
        Some(ScrollDirection::Backward)
    }
}

/// Rightward swipe on mobile: opens the sidebar when it starts at the left
/// edge, closes it when it is already open.
pub fn sidebar_swipe(
    start_x: i32,
    end_x: i32,
    sidebar_open: bool,
    config: &SwipeConfig,
) -> Option<SidebarSwipe> {
    let diff = end_x - start_x;
    if diff <= config.sidebar_threshold_px {
        return None;
    }

    if sidebar_open {
        Some(SidebarSwipe::Close)
    } else if start_x < config.sidebar_edge_px {
        Some(SidebarSwipe::Open)
    } else {
        None
    }
}

/// Suppresses the second of two touch-ends that land inside the window, so a
/// double tap does not zoom the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTapGuard {
    window_ms: u64,
    last_end_ms: Option<u64>,
}

impl DoubleTapGuard {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_end_ms: None,
        }
    }

    /// Records a touch-end and returns whether its default action should be
    /// prevented.
    pub fn touch_ended(&mut self, now_ms: u64) -> bool {
        let suppress = self
            .last_end_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= self.window_ms);
        self.last_end_ms = Some(now_ms);
        suppress
    }
}
