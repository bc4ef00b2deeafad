use crate::workout::{M_IN_KM, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    /// Meters
    pub length_pool: f64,
    /// Completed laps
    pub count_pool: f64,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    /// Meters per stroke instead of the walking stride
    const LEN_STEP: f64 = 1.38;

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    /// Pool speed, not stroke speed: `length_pool * count_pool / 1000 / duration_h`
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.duration
    }

    /// `(speed + 1.1) * 2 * weight`
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT) * Self::WEIGHT_MULTIPLIER * self.weight
    }
}
