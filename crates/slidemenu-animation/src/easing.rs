/// Curves mapping a linear tween fraction to an eased one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    /// Android `Scroller` viscous fluid curve, the curve `smoothScrollTo` uses
    /// on a native horizontal scroll view.
    ViscousFluid,
}

impl Easing {
    /// Map `fraction` in `[0, 1]`. Values outside the range are clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::ViscousFluid => viscous_fluid_normalized(fraction),
        }
    }
}

/// Bezier from (0, 0) to (1, 1) with control points `p1` and `p2`.
struct CubicBezier {
    p1: (f32, f32),
    p2: (f32, f32),
}

impl CubicBezier {
    const BISECTION_STEPS: usize = 24;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: (x1, y1),
            p2: (x2, y2),
        }
    }

    fn component(c1: f32, c2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * c1 + 3.0 * u * t * t * c2 + t * t * t
    }

    /// `y` at the point whose `x` is `x`. Control x values lie in `[0, 1]`,
    /// so `x(t)` is monotonic and bisection finds the parameter.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 || x >= 1.0 {
            return x;
        }
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = x;
        for _ in 0..Self::BISECTION_STEPS {
            t = (low + high) * 0.5;
            if Self::component(self.p1.0, self.p2.0, t) < x {
                low = t;
            } else {
                high = t;
            }
        }
        Self::component(self.p1.1, self.p2.1, t)
    }
}

const VISCOUS_FLUID_SCALE: f32 = 8.0;

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e == integral(exp(x) - 1) from 0 to 1
        let start = 0.367_879_44;
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}

fn viscous_fluid_normalized(fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }
    let normalize = 1.0 / viscous_fluid(1.0);
    let offset = 1.0 - normalize * viscous_fluid(1.0);
    let interpolated = normalize * viscous_fluid(fraction);
    if interpolated > 0.0 {
        interpolated + offset
    } else {
        interpolated
    }
}
