use crate::foundation::core::Rgba8;

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Value at `t` in `[0, 1]` between `a` and `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Linear tween from `from` to `to` over `[start, start + duration]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at `start` and before.
    pub from: T,
    /// Value at `start + duration` and after.
    pub to: T,
    /// Virtual time the tween begins.
    pub start: f64,
    /// Length in virtual time units; zero jumps straight to `to`.
    pub duration: f64,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Build a tween.
    pub fn new(from: T, to: T, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
        }
    }

    /// Virtual time the tween reaches `to`.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`.
    pub fn sample(&self, now: f64) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, t)
    }

    /// True once `now` has reached the end of the tween.
    pub fn is_done(&self, now: f64) -> bool {
        now >= self.end()
    }
}

/// Flash a node to a peak colour and back: two tweens of `half` each.
#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    rise: Tween<Rgba8>,
    fall: Tween<Rgba8>,
}

impl Pulse {
    /// Pulse from `base` to `peak` and back, starting at `start`, lasting `duration` in total.
    pub fn new(base: Rgba8, peak: Rgba8, start: f64, duration: f64) -> Self {
        let half = duration.max(0.0) / 2.0;
        Self {
            rise: Tween::new(base, peak, start, half),
            fall: Tween::new(peak, base, start + half, half),
        }
    }

    /// Colour at `now`.
    pub fn sample(&self, now: f64) -> Rgba8 {
        if now < self.fall.start {
            self.rise.sample(now)
        } else {
            self.fall.sample(now)
        }
    }

    /// Virtual time the node is back at its base colour.
    pub fn end(&self) -> f64 {
        self.fall.end()
    }

    /// True once the pulse has returned to the base colour.
    pub fn is_done(&self, now: f64) -> bool {
        self.fall.is_done(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
