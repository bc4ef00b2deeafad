use std::fmt;

use serde::Serialize;

/// Computed metrics for one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub training_type: &'static str,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    pub calories: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; \
             Duration: {:.3} h.; \
             Distance: {:.3} km; \
             Avg speed: {:.3} km/h; \
             Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
