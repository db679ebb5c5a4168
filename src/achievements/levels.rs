//! Points and level system
//!
//! Defines the level ladder and progress calculations.

/// Points needed to reach each level (index 0 is level 1, must be ascending)
pub static LEVEL_THRESHOLDS: &[u32] = &[0, 100, 300, 600, 1000, 1500, 2500, 4000, 6000, 9000, 12000];

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Calculate level for given total points (1-based, capped at [`MAX_LEVEL`])
pub fn level_for_points(points: u32) -> u32 {
    let reached = LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| points >= *threshold)
        .unwrap_or(0) as u32
        + 1;
    reached.min(MAX_LEVEL)
}

/// Level status derived from a point total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelStatus {
    pub total_points: u32,
    pub level: u32,
    /// Points at which the current level starts
    pub current_level_points: u32,
    /// Points needed for next level (None if max)
    pub next_level_points: Option<u32>,
}

impl LevelStatus {
    pub fn new(total_points: u32) -> Self {
        let level = level_for_points(total_points);
        let idx = (level - 1) as usize;
        let next_level_points = if level >= MAX_LEVEL {
            None
        } else {
            LEVEL_THRESHOLDS.get(idx + 1).copied()
        };

        Self {
            total_points,
            level,
            current_level_points: LEVEL_THRESHOLDS[idx],
            next_level_points,
        }
    }

    /// Progress percentage to next level (0.0 - 100.0)
    pub fn progress_percent(&self) -> f64 {
        match self.next_level_points {
            Some(next) => {
                let span = next.saturating_sub(self.current_level_points);
                if span == 0 {
                    return 100.0;
                }
                let earned = self.total_points.saturating_sub(self.current_level_points);
                (earned as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
            }
            None => 100.0, // Max level
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.next_level_points.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(599), 3);
        assert_eq!(level_for_points(8999), 9);
        assert_eq!(level_for_points(9000), 10);
        assert_eq!(level_for_points(12000), 10); // Beyond max
        assert_eq!(level_for_points(u32::MAX), 10);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut last = 0;
        for points in (0..15_000).step_by(25) {
            let level = level_for_points(points);
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn test_progress_interpolates() {
        let status = LevelStatus::new(200); // Between level 2 (100) and level 3 (300)
        assert_eq!(status.level, 2);
        assert!((status.progress_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_level_is_terminal() {
        for points in [9000, 10_500, 50_000] {
            let status = LevelStatus::new(points);
            assert!(status.is_max_level());
            assert_eq!(status.progress_percent(), 100.0);
        }
    }
}
