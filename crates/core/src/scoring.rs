//! Scoring module - points per lock event and gravity timing
//!
//! One locked piece spans at most four rows, so a single lock clears 0..=4
//! rows. The table is flat: there is no level multiplier, combo or
//! back-to-back bonus.

use blockfall_types::{BASE_TICK_MS, LINE_SCORES, VELOCITY_PERIOD};

/// Points for clearing `rows` rows in one lock event.
/// Counts outside 0..=4 cannot happen and score 0.
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES.get(rows).copied().unwrap_or(0)
}

/// Velocity after `tick` successful gravity steps.
///
/// This is a sawtooth (`tick mod 10`), not a difficulty ramp: the game speeds
/// up for nine steps and then drops back to the slowest setting.
pub fn velocity_for_tick(tick: u32) -> u32 {
    tick % VELOCITY_PERIOD
}

/// Ticker delay for a velocity, given the period at velocity 1.
/// Velocity 0 is treated as 1.
pub fn tick_interval_ms(base_ms: u32, velocity: u32) -> u32 {
    base_ms / velocity.max(1)
}

/// Ticker delay for a velocity using [`BASE_TICK_MS`]
pub fn default_tick_interval_ms(velocity: u32) -> u32 {
    tick_interval_ms(BASE_TICK_MS, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 700);
        assert_eq!(line_clear_score(4), 1500);
    }

    #[test]
    fn test_out_of_range_rows_score_nothing() {
        assert_eq!(line_clear_score(5), 0);
        assert_eq!(line_clear_score(usize::MAX), 0);
    }

    // The velocity curve wraps around instead of growing. Kept as observed.
    #[test]
    fn test_velocity_is_a_sawtooth() {
        let curve: Vec<u32> = (0..22).map(velocity_for_tick).collect();
        assert_eq!(&curve[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(velocity_for_tick(10), 0);
        assert_eq!(velocity_for_tick(21), 1);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(default_tick_interval_ms(1), 300);
        assert_eq!(default_tick_interval_ms(3), 100);
        assert_eq!(default_tick_interval_ms(9), 33);
        // Zero velocity would divide by zero; clamped to the slowest speed.
        assert_eq!(default_tick_interval_ms(0), 300);
        assert_eq!(tick_interval_ms(1000, 4), 250);
    }
}
