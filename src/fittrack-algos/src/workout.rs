use crate::Summary;

/// Meters in a kilometer
pub(crate) const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub(crate) const MIN_IN_H: f64 = 60.0;

/// Common capability set of every workout calculator.
///
/// `spent_calories` has no default body: each variant must supply its own
/// formula. `distance` and `mean_speed` come for free from the accessors;
/// Swimming overrides both `LEN_STEP` and `mean_speed`.
pub trait Workout {
    /// Distance covered by a single step or stroke, in meters
    const LEN_STEP: f64 = 0.65;

    /// Variant name used in the summary message
    fn label(&self) -> &'static str;

    /// Number of steps or strokes recorded by the sensor
    fn action(&self) -> f64;

    /// Workout duration in hours
    fn duration(&self) -> f64;

    fn spent_calories(&self) -> f64;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.action() * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    fn summary(&self) -> Summary {
        Summary {
            training_type: self.label(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
