const SHORT_MINUTES: f32 = 5.0;
const LONG_MINUTES: f32 = 60.0;

/// Desirability of a reading time: 1.0 up to five minutes, 0.0 from an hour on, linear between.
pub fn reading_time_score(minutes: f32) -> f32 {
	if minutes <= SHORT_MINUTES {
		return 1.0;
	}
	if minutes >= LONG_MINUTES {
		return 0.0;
	}

	1.0 - (minutes - SHORT_MINUTES) / (LONG_MINUTES - SHORT_MINUTES)
}
