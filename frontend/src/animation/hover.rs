use super::easing::Ease;
use super::pose::Pose;
use super::tween::Tween;

/// A pointer (or focus) driven effect between a rest pose and an active pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEffect {
    pub rest: Pose,
    pub active: Pose,
    pub enter_ms: f64,
    pub leave_ms: f64,
    pub enter_ease: Ease,
    pub leave_ease: Ease,
}

impl HoverEffect {
    pub fn new(active: Pose) -> Self {
        Self {
            rest: Pose::REST,
            active,
            enter_ms: 300.0,
            leave_ms: 300.0,
            enter_ease: Ease::Power2Out,
            leave_ease: Ease::Power2Out,
        }
    }

    pub fn enter(self, duration_ms: f64, ease: Ease) -> Self {
        Self {
            enter_ms: duration_ms,
            enter_ease: ease,
            ..self
        }
    }

    pub fn leave(self, duration_ms: f64, ease: Ease) -> Self {
        Self {
            leave_ms: duration_ms,
            leave_ease: ease,
            ..self
        }
    }
}

/// Where a hover effect is heading and since when.
///
/// Every enter or leave restarts from the pose currently on screen, so
/// interrupting a transition never jumps, and a leave always ends exactly on
/// the rest pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    effect: HoverEffect,
    leg: Tween,
    started_at: f64,
}

impl HoverState {
    pub fn new(effect: HoverEffect) -> Self {
        Self {
            effect,
            leg: Tween::new(effect.rest, effect.rest).duration_ms(0.0),
            started_at: 0.0,
        }
    }

    pub fn enter(&mut self, now: f64) {
        let current = self.pose_at(now);
        self.leg = Tween::new(current, self.effect.active)
            .duration_ms(self.effect.enter_ms)
            .ease(self.effect.enter_ease);
        self.started_at = now;
    }

    pub fn leave(&mut self, now: f64) {
        let current = self.pose_at(now);
        self.leg = Tween::new(current, self.effect.rest)
            .duration_ms(self.effect.leave_ms)
            .ease(self.effect.leave_ease);
        self.started_at = now;
    }

    pub fn pose_at(&self, now: f64) -> Pose {
        self.leg.at_time(now - self.started_at)
    }

    pub fn is_settled(&self, now: f64) -> bool {
        now - self.started_at >= self.leg.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin() -> HoverEffect {
        HoverEffect::new(Pose::REST.rotate(360.0).scale(1.2))
            .enter(600.0, Ease::BACK_OUT)
            .leave(300.0, Ease::Power2Out)
    }

    #[test]
    fn starts_at_rest() {
        let state = HoverState::new(spin());
        assert_eq!(state.pose_at(0.0), Pose::REST);
        assert!(state.is_settled(0.0));
    }

    #[test]
    fn enter_reaches_active_pose() {
        let mut state = HoverState::new(spin());
        state.enter(1000.0);
        assert!(!state.is_settled(1300.0));
        assert_eq!(state.pose_at(1600.0), spin().active);
    }

    #[test]
    fn interrupted_enter_continues_from_current_pose() {
        let mut state = HoverState::new(spin());
        state.enter(0.0);
        let midway = state.pose_at(200.0);
        state.leave(200.0);
        assert_eq!(state.pose_at(200.0), midway);
    }

    #[test]
    fn any_number_of_reentries_ends_exactly_at_rest() {
        let mut state = HoverState::new(spin());
        let mut now = 0.0;
        for step in 0..50 {
            state.enter(now);
            now += 17.0 + (step % 7) as f64 * 41.0;
            state.leave(now);
            now += 5.0 + (step % 3) as f64 * 13.0;
        }
        state.enter(now);
        now += 90.0;
        state.leave(now);
        now += 300.0;
        assert!(state.is_settled(now));
        assert_eq!(state.pose_at(now), Pose::REST);
    }
}
