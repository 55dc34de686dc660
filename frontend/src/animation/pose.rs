/// The visual properties an effect can drive on an element.
///
/// Translations are in pixels, rotations in degrees. `draw` is the visible
/// fraction of an SVG stroke whose `pathLength` is 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub draw: f64,
}

impl Pose {
    /// Where every element sits when no effect is applied.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        draw: 1.0,
    };

    pub const fn opacity(self, opacity: f64) -> Self {
        Pose { opacity, ..self }
    }

    pub const fn x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        Pose { rotate, ..self }
    }

    pub const fn rotate_x(self, rotate_x: f64) -> Self {
        Pose { rotate_x, ..self }
    }

    pub const fn rotate_y(self, rotate_y: f64) -> Self {
        Pose { rotate_y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn scale_x(self, scale_x: f64) -> Self {
        Pose { scale_x, ..self }
    }

    pub const fn draw(self, draw: f64) -> Self {
        Pose { draw, ..self }
    }

    /// Interpolates towards `to`. `t` may leave `[0, 1]` for overshooting
    /// curves; `t == 0` and `t == 1` return the endpoints bit for bit.
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            rotate: mix(self.rotate, to.rotate),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            draw: mix(self.draw, to.draw),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) rotateX({}deg) rotateY({}deg) scale({}) scaleX({})",
            self.x, self.y, self.rotate, self.rotate_x, self.rotate_y, self.scale, self.scale_x
        )
    }

    /// CSS property/value pairs for writing this pose to an element's inline style.
    pub fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", self.opacity.to_string()),
            ("transform", self.transform()),
            ("stroke-dashoffset", (1.0 - self.draw).to_string()),
        ]
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let from = Pose::REST.opacity(0.0).y(30.0).scale(0.9).rotate(-180.0);
        let to = Pose::REST.scale(1.2).rotate(10.0);
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
    }

    #[test]
    fn lerp_midpoint() {
        let from = Pose::REST.y(-50.0);
        let to = Pose::REST.y(50.0).opacity(0.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.y, 0.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.scale, 1.0);
    }

    #[test]
    fn transform_lists_every_component() {
        let css = Pose::REST.x(4.0).rotate_y(15.0).transform();
        assert_eq!(
            css,
            "translate(4px, 0px) rotate(0deg) rotateX(0deg) rotateY(15deg) scale(1) scaleX(1)"
        );
    }

    #[test]
    fn undrawn_stroke_is_fully_offset() {
        let decls = Pose::REST.draw(0.0).declarations();
        assert_eq!(decls[2], ("stroke-dashoffset", "1".to_string()));
    }
}
