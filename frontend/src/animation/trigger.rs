//! Scroll trigger windows and the per-trigger activation state.
//!
//! A window is bounded by two anchors. Each anchor pins a point on the
//! element (its top, center or bottom) to a line across the viewport given as
//! a fraction of the viewport height, measured from the top. "top 80%" is
//! `Anchor::new(Edge::Top, 0.8)`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }
}

/// The element's bounding box relative to the viewport, plus the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollWindow {
    /// Starts at `start` and ends when the element's bottom leaves the top of the viewport.
    pub const fn from(start: Anchor) -> Self {
        Self {
            start,
            end: Anchor::new(Edge::Bottom, 0.0),
        }
    }

    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// From the element's top entering at the bottom of the viewport until its
    /// bottom leaves at the top.
    pub const fn full_pass() -> Self {
        Self::new(Anchor::new(Edge::Top, 1.0), Anchor::new(Edge::Bottom, 0.0))
    }

    /// Raw scroll progress through the window: negative before the start,
    /// above one past the end. Depends only on where the element sits, not on
    /// how it got there.
    pub fn progress(&self, geo: &Geometry) -> f64 {
        // Scroll distance already travelled past the start line.
        let travelled = self.start.viewport * geo.viewport_height
            - (geo.top + self.start.edge.fraction() * geo.height);
        let span = (self.end.edge.fraction() - self.start.edge.fraction()) * geo.height
            + self.start.viewport * geo.viewport_height
            - self.end.viewport * geo.viewport_height;

        if span <= 0.0 {
            if travelled >= 0.0 { 1.0 } else { -1.0 }
        } else {
            snap(travelled / span)
        }
    }
}

/// Pulls rounding noise at the window's ends back onto exactly 0 and 1.
fn snap(progress: f64) -> f64 {
    const EPSILON: f64 = 1e-9;
    if progress.abs() < EPSILON {
        0.0
    } else if (progress - 1.0).abs() < EPSILON {
        1.0
    } else {
        progress
    }
}

/// How a trigger reacts to its window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Plays once on first entry, never reverses.
    OneShot,
    /// Plays on entry, reverses when scrolled back above the start.
    Toggle,
    /// The effect follows scroll progress directly.
    Scrub,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Play,
    Reverse,
    Seek(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerState {
    past_start: bool,
    fired: bool,
    last_seek: Option<f64>,
}

impl TriggerState {
    /// Feeds the latest raw progress and returns what the effect should do.
    pub fn update(&mut self, mode: Mode, progress: f64) -> Option<Action> {
        let past_start = progress >= 0.0;
        let crossed = past_start != self.past_start;
        self.past_start = past_start;

        match mode {
            Mode::Scrub => {
                let p = progress.clamp(0.0, 1.0);
                if self.last_seek == Some(p) {
                    return None;
                }
                self.last_seek = Some(p);
                Some(Action::Seek(p))
            }
            Mode::OneShot => {
                if past_start && !self.fired {
                    self.fired = true;
                    Some(Action::Play)
                } else {
                    None
                }
            }
            Mode::Toggle => match (crossed, past_start) {
                (true, true) => Some(Action::Play),
                (true, false) => Some(Action::Reverse),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn at(top: f64) -> Geometry {
        Geometry {
            top,
            height: 400.0,
            viewport_height: VH,
        }
    }

    #[test]
    fn progress_spans_the_window() {
        // top 80% .. bottom 20%
        let window = ScrollWindow::new(Anchor::new(Edge::Top, 0.8), Anchor::new(Edge::Bottom, 0.2));
        assert_eq!(window.progress(&at(800.0)), 0.0);
        // bottom at 200 means top at -200
        assert_eq!(window.progress(&at(-200.0)), 1.0);
        assert_eq!(window.progress(&at(300.0)), 0.5);
        assert!(window.progress(&at(900.0)) < 0.0);
        assert!(window.progress(&at(-900.0)) > 1.0);
    }

    #[test]
    fn scrub_reaches_both_ends_exactly() {
        // Fractions whose differences do not round-trip through f64.
        for (start, end) in [(0.8, 0.2), (0.7, 0.1), (0.9, 0.3)] {
            let window = ScrollWindow::new(Anchor::new(Edge::Top, start), Anchor::new(Edge::Bottom, end));
            let entered = at(start * VH);
            let left = at(end * VH - 400.0);
            assert_eq!(window.progress(&entered), 0.0, "start {}", start);
            assert_eq!(window.progress(&left), 1.0, "end {}", end);

            let mut state = TriggerState::default();
            assert_eq!(state.update(Mode::Scrub, window.progress(&left)), Some(Action::Seek(1.0)));
            assert_eq!(state.update(Mode::Scrub, window.progress(&entered)), Some(Action::Seek(0.0)));
        }
    }

    #[test]
    fn full_pass_window() {
        let window = ScrollWindow::full_pass();
        assert_eq!(window.progress(&at(VH)), 0.0);
        assert_eq!(window.progress(&at(-400.0)), 1.0);
    }

    #[test]
    fn degenerate_window_is_a_step() {
        let window = ScrollWindow::new(Anchor::new(Edge::Top, 0.5), Anchor::new(Edge::Top, 0.5));
        assert_eq!(window.progress(&at(400.0)), 1.0);
        assert_eq!(window.progress(&at(600.0)), -1.0);
    }

    #[test]
    fn toggle_plays_on_entry_and_reverses_above_start() {
        let mut state = TriggerState::default();
        assert_eq!(state.update(Mode::Toggle, -0.2), None);
        assert_eq!(state.update(Mode::Toggle, 0.1), Some(Action::Play));
        assert_eq!(state.update(Mode::Toggle, 0.6), None);
        assert_eq!(state.update(Mode::Toggle, 1.4), None);
        assert_eq!(state.update(Mode::Toggle, -0.1), Some(Action::Reverse));
        assert_eq!(state.update(Mode::Toggle, 2.0), Some(Action::Play));
    }

    #[test]
    fn toggle_already_in_view_plays_on_first_check() {
        let mut state = TriggerState::default();
        assert_eq!(state.update(Mode::Toggle, 0.3), Some(Action::Play));
    }

    #[test]
    fn one_shot_never_reverses_or_replays() {
        let mut state = TriggerState::default();
        assert_eq!(state.update(Mode::OneShot, 0.0), Some(Action::Play));
        assert_eq!(state.update(Mode::OneShot, -1.0), None);
        assert_eq!(state.update(Mode::OneShot, 0.5), None);
    }

    #[test]
    fn scrub_seeks_clamped_progress_in_any_order() {
        let mut state = TriggerState::default();
        assert_eq!(state.update(Mode::Scrub, 0.5), Some(Action::Seek(0.5)));
        assert_eq!(state.update(Mode::Scrub, 0.5), None);
        assert_eq!(state.update(Mode::Scrub, 3.0), Some(Action::Seek(1.0)));
        assert_eq!(state.update(Mode::Scrub, -3.0), Some(Action::Seek(0.0)));
        assert_eq!(state.update(Mode::Scrub, 0.5), Some(Action::Seek(0.5)));
    }
}
