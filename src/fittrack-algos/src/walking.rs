use crate::workout::{MIN_IN_H, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    /// `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * duration_h * 60`
    ///
    /// The squared-speed term is floor-divided by height, matching the
    /// reference numerics. True division here would change the results.
    fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        (Self::WEIGHT_MULTIPLIER * self.weight
            + (speed * speed / self.height).floor() * Self::SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_H
    }
}
