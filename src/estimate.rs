//! Rough time and material estimates for a configuration.
//!
//! Figures are empirical: digital time scales with the candidate count per
//! step, physical build time assumes a fixed number of seconds per wound
//! connection plus setup overhead, and thread length assumes an average chord
//! of 60% of a 50 cm frame.
use serde::Serialize;

const BEGINNER_SECS_PER_LINE: f64 = 9.0;
const AVERAGE_SECS_PER_LINE: f64 = 6.0;
const EXPERIENCED_SECS_PER_LINE: f64 = 4.0;
const PHYSICAL_FRAME_M: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimates {
    /// Generation time range in seconds.
    pub digital_secs: (u64, u64),
    pub build_minutes: BuildMinutes,
    /// Thread length range in meters.
    pub thread_m: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BuildMinutes {
    pub beginner: u64,
    pub average: u64,
    pub experienced: u64,
}

pub fn estimate(pegs_per_side: usize, iterations: usize) -> TimeEstimates {
    let total_pegs = pegs_per_side * 4;
    let n = iterations as f64;

    let secs_per_iteration = match total_pegs {
        0..=20 => 0.002,
        21..=40 => 0.004,
        41..=100 => 0.01,
        _ => 0.02,
    };
    let digital_min = ((secs_per_iteration * n * 0.8).floor() as u64).max(1);
    let digital_max = (secs_per_iteration * n * 1.2).ceil() as u64;

    let overhead = 10.0 + (iterations / 500) as f64 * 5.0;
    let minutes = |secs_per_line: f64| (n * secs_per_line / 60.0 + overhead).ceil() as u64;

    let avg_line_m = PHYSICAL_FRAME_M * 0.6;
    TimeEstimates {
        digital_secs: (digital_min, digital_max),
        build_minutes: BuildMinutes {
            beginner: minutes(BEGINNER_SECS_PER_LINE),
            average: minutes(AVERAGE_SECS_PER_LINE),
            experienced: minutes(EXPERIENCED_SECS_PER_LINE),
        },
        thread_m: (
            (n * avg_line_m * 0.8).floor(),
            (n * avg_line_m * 1.2).ceil(),
        ),
    }
}

/// `"45s"`, `"2m 5s"`, `"1h 3m"`.
pub fn format_digital_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        let (mins, secs) = (seconds / 60, seconds % 60);
        if secs > 0 {
            format!("{mins}m {secs}s")
        } else {
            format!("{mins}m")
        }
    } else {
        let (hours, mins) = (seconds / 3600, (seconds % 3600) / 60);
        if mins > 0 {
            format!("{hours}h {mins}m")
        } else {
            format!("{hours}h")
        }
    }
}

/// `"45 min"`, `"2h 5m"`.
pub fn format_physical_time(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let (hours, mins) = (minutes / 60, minutes % 60);
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

/// `"40 cm"`, `"150 m"`, `"1.2 km"`.
pub fn format_thread_length(meters: f64) -> String {
    if meters < 1.0 {
        format!("{} cm", (meters * 100.0).round())
    } else if meters < 1000.0 {
        format!("{} m", meters.round())
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_preset_estimates() {
        let est = estimate(10, 500);
        assert_eq!(est.digital_secs, (1, 3));
        assert_eq!(
            est.build_minutes,
            BuildMinutes {
                beginner: 90,
                average: 65,
                experienced: 49
            }
        );
        assert_eq!(est.thread_m, (120.0, 180.0));
    }

    #[test]
    fn larger_frames_take_longer() {
        let small = estimate(4, 1000);
        let large = estimate(50, 1000);
        assert!(large.digital_secs.1 > small.digital_secs.1);
        assert_eq!(small.build_minutes, large.build_minutes);
    }

    #[test]
    fn formatters() {
        assert_eq!(format_digital_time(42), "42s");
        assert_eq!(format_digital_time(120), "2m");
        assert_eq!(format_digital_time(125), "2m 5s");
        assert_eq!(format_digital_time(3600), "1h");
        assert_eq!(format_digital_time(3780), "1h 3m");
        assert_eq!(format_physical_time(45), "45 min");
        assert_eq!(format_physical_time(125), "2h 5m");
        assert_eq!(format_physical_time(180), "3h");
        assert_eq!(format_thread_length(0.4), "40 cm");
        assert_eq!(format_thread_length(150.0), "150 m");
        assert_eq!(format_thread_length(1300.0), "1.3 km");
    }
}
