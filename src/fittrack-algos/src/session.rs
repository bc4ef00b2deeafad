use crate::{DecodeError, Running, SportsWalking, Summary, Swimming, Workout as _};

/// One decoded workout, ready to summarize.
///
/// Closed over the three supported workout types, so adding a code means
/// adding a variant here and a decode arm below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Session {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Session {
    /// Decode a sensor package into a workout.
    ///
    /// Readings bind positionally: action count, duration in hours, weight
    /// in kg, then the type-specific extras (height for `WLK`; pool length
    /// and lap count for `SWM`).
    pub fn decode(code: &str, readings: &[f64]) -> Result<Self, DecodeError> {
        let session = match code {
            "SWM" => {
                let [action, duration, weight, length_pool, count_pool] =
                    Self::bind::<5>("SWM", readings)?;
                Self::Swimming(Swimming::new(action, duration, weight, length_pool, count_pool))
            }
            "RUN" => {
                let [action, duration, weight] = Self::bind::<3>("RUN", readings)?;
                Self::Running(Running::new(action, duration, weight))
            }
            "WLK" => {
                let [action, duration, weight, height] = Self::bind::<4>("WLK", readings)?;
                Self::SportsWalking(SportsWalking::new(action, duration, weight, height))
            }
            _ => return Err(DecodeError::UnknownCode(code.to_owned())),
        };

        if session.duration() <= 0.0 {
            return Err(DecodeError::NonPositiveDuration(session.duration()));
        }

        Ok(session)
    }

    fn bind<const N: usize>(
        code: &'static str,
        readings: &[f64],
    ) -> Result<[f64; N], DecodeError> {
        readings
            .try_into()
            .map_err(|_| DecodeError::ReadingCount {
                code,
                expected: N,
                got: readings.len(),
            })
    }

    fn duration(&self) -> f64 {
        match self {
            Self::Running(w) => w.duration,
            Self::SportsWalking(w) => w.duration,
            Self::Swimming(w) => w.duration,
        }
    }

    pub fn summary(&self) -> Summary {
        match self {
            Self::Running(w) => w.summary(),
            Self::SportsWalking(w) => w.summary(),
            Self::Swimming(w) => w.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_known_codes() {
        let swim = Session::decode("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let run = Session::decode("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walk = Session::decode("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert!(matches!(swim, Session::Swimming(_)));
        assert!(matches!(run, Session::Running(_)));
        assert!(matches!(walk, Session::SportsWalking(_)));

        for session in [swim, run, walk] {
            let summary = session.summary();
            assert!(summary.distance >= 0.0);
            assert_eq!(summary.duration, 1.0);
        }
    }

    #[test]
    fn unknown_code() {
        let result = Session::decode("XYZ", &[1.0, 1.0, 1.0]);
        assert_eq!(result, Err(DecodeError::UnknownCode("XYZ".to_owned())));
    }

    #[test]
    fn wrong_reading_count() {
        let result = Session::decode("RUN", &[15000.0, 1.0]);
        assert_eq!(
            result,
            Err(DecodeError::ReadingCount {
                code: "RUN",
                expected: 3,
                got: 2,
            })
        );

        // Extra readings are just as fatal as missing ones
        let result = Session::decode("WLK", &[9000.0, 1.0, 75.0, 180.0, 7.0]);
        assert!(matches!(result, Err(DecodeError::ReadingCount { .. })));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let result = Session::decode("RUN", &[15000.0, 0.0, 75.0]);
        assert_eq!(result, Err(DecodeError::NonPositiveDuration(0.0)));
    }

    #[test]
    fn summary_is_idempotent() {
        let session = Session::decode("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(session.summary(), session.summary());
    }

    #[test]
    fn labels_match_variant_names() {
        let cases = [
            ("RUN", vec![15000.0, 1.0, 75.0], "Running"),
            ("WLK", vec![9000.0, 1.0, 75.0, 180.0], "SportsWalking"),
            ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], "Swimming"),
        ];

        for (code, readings, label) in cases {
            let summary = Session::decode(code, &readings).unwrap().summary();
            assert_eq!(summary.training_type, label);
        }
    }
}
