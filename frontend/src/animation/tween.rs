use super::easing::Ease;
use super::pose::Pose;

/// A timed interpolation between two poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: Pose, to: Pose) -> Self {
        Self {
            from,
            to,
            duration_ms: 800.0,
            delay_ms: 0.0,
            ease: Ease::Power2Out,
        }
    }

    /// Settles into the rest pose, the common "reveal" shape.
    pub fn reveal(from: Pose) -> Self {
        Self::new(from, Pose::REST)
    }

    pub fn duration_ms(self, duration_ms: f64) -> Self {
        Self { duration_ms, ..self }
    }

    pub fn delay_ms(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Pose at `t_ms` on the tween's own clock, delay included.
    pub fn at_time(&self, t_ms: f64) -> Pose {
        let local = if self.duration_ms <= 0.0 {
            if t_ms >= self.delay_ms { 1.0 } else { 0.0 }
        } else {
            (t_ms - self.delay_ms) / self.duration_ms
        };
        self.at_progress(local)
    }

    /// Pose at linear progress `p`, ignoring delay and duration.
    pub fn at_progress(&self, p: f64) -> Pose {
        self.from.lerp(&self.to, self.ease.apply(p))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Position on a tween's clock, advanced by animation frame timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    time_ms: f64,
    total_ms: f64,
    running: Option<Direction>,
    last_tick: Option<f64>,
}

impl Playhead {
    pub fn new(total_ms: f64) -> Self {
        Self {
            time_ms: 0.0,
            total_ms: total_ms.max(0.0),
            running: None,
            last_tick: None,
        }
    }

    /// Runs forward from wherever the playhead is now.
    pub fn play(&mut self) {
        self.start(Direction::Forward);
    }

    /// Runs backward from wherever the playhead is now.
    pub fn reverse(&mut self) {
        self.start(Direction::Backward);
    }

    fn start(&mut self, direction: Direction) {
        self.running = Some(direction);
        self.last_tick = None;
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Advances to frame timestamp `now`. The first tick after a start only
    /// records the timestamp. Returns whether the playhead is still running.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(direction) = self.running else {
            return false;
        };
        let dt = self.last_tick.map_or(0.0, |prev| (now - prev).max(0.0));
        self.last_tick = Some(now);

        match direction {
            Direction::Forward => {
                self.time_ms = (self.time_ms + dt).min(self.total_ms);
                if self.time_ms >= self.total_ms {
                    self.running = None;
                }
            }
            Direction::Backward => {
                self.time_ms = (self.time_ms - dt).max(0.0);
                if self.time_ms <= 0.0 {
                    self.running = None;
                }
            }
        }
        self.running.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> Tween {
        Tween::reveal(Pose::REST.opacity(0.0).y(30.0))
            .duration_ms(1000.0)
            .ease(Ease::Linear)
    }

    #[test]
    fn delay_holds_the_start_pose() {
        let tween = fade_up().delay_ms(500.0);
        assert_eq!(tween.at_time(0.0), tween.from);
        assert_eq!(tween.at_time(499.0), tween.from);
        assert_eq!(tween.at_time(1000.0).y, 15.0);
        assert_eq!(tween.at_time(1500.0), Pose::REST);
        assert_eq!(tween.at_time(9000.0), Pose::REST);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = fade_up().duration_ms(0.0);
        assert_eq!(tween.at_time(0.0), Pose::REST);
        assert_eq!(tween.at_time(-1.0), tween.from);
    }

    #[test]
    fn playhead_runs_forward_and_stops_at_end() {
        let mut head = Playhead::new(1000.0);
        head.play();
        assert!(head.tick(100.0));
        assert_eq!(head.time_ms(), 0.0);
        assert!(head.tick(600.0));
        assert_eq!(head.time_ms(), 500.0);
        assert!(!head.tick(5000.0));
        assert_eq!(head.time_ms(), 1000.0);
        assert!(!head.is_running());
    }

    #[test]
    fn reverse_starts_from_current_position() {
        let mut head = Playhead::new(1000.0);
        head.play();
        head.tick(0.0);
        head.tick(400.0);
        head.reverse();
        head.tick(1000.0);
        head.tick(1100.0);
        assert_eq!(head.time_ms(), 300.0);
        assert!(!head.tick(2000.0));
        assert_eq!(head.time_ms(), 0.0);
    }

    #[test]
    fn idle_playhead_ignores_ticks() {
        let mut head = Playhead::new(1000.0);
        assert!(!head.tick(10.0));
        assert!(!head.tick(500.0));
        assert_eq!(head.time_ms(), 0.0);
    }
}
