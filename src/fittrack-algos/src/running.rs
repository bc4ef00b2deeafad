use crate::workout::{M_IN_KM, MIN_IN_H, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    /// `(18 * speed - 20) * weight / 1000 * duration_h * 60`
    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed() - Self::SPEED_SHIFT) * self.weight / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}
