//! Wall-clock time to dial angles, and marker labels.

use chrono::Timelike;
use dialclock_types::{MarkerType, SCALE_4};

const ROMAN: [&str; 12] = [
    "XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI",
];

/// Hand angles in table units (`SCALE_4` per turn)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl FaceAngles {
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let h = (time.hour() % 12) as i32;
        let m = time.minute() as i32;
        let s = time.second() as i32;
        Self {
            // 100 units per hour, creeping through the hour
            hour: h * 100 + (m * 60 + s) / 36,
            // 20 units per minute
            minute: m * 20 + s / 3,
            second: s * 20,
        }
    }
}

/// Label drawn at a marker position: the hour the angle points at.
/// Empty for shape markers.
pub fn marker_label(marker_type: MarkerType, angle: i32) -> String {
    let hour = (angle.rem_euclid(SCALE_4) / 100) as usize;
    match marker_type {
        MarkerType::Numeral => {
            let hour = if hour == 0 { 12 } else { hour };
            hour.to_string()
        }
        MarkerType::Roman => ROMAN[hour].to_string(),
        MarkerType::None | MarkerType::Triangle | MarkerType::Circle => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_angles_at_known_times() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(
            FaceAngles::from_time(&noon),
            FaceAngles {
                hour: 0,
                minute: 0,
                second: 0
            }
        );

        let t = NaiveTime::from_hms_opt(15, 30, 45).unwrap();
        let angles = FaceAngles::from_time(&t);
        assert_eq!(angles.hour, 300 + 1845 / 36);
        assert_eq!(angles.minute, 615);
        assert_eq!(angles.second, 900);
    }

    #[test]
    fn test_angles_stay_within_turn() {
        let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let angles = FaceAngles::from_time(&t);
        assert!(angles.hour < SCALE_4);
        assert!(angles.minute < SCALE_4);
        assert!(angles.second < SCALE_4);
    }

    #[test]
    fn test_marker_labels() {
        assert_eq!(marker_label(MarkerType::Numeral, 0), "12");
        assert_eq!(marker_label(MarkerType::Numeral, 300), "3");
        assert_eq!(marker_label(MarkerType::Roman, 900), "IX");
        assert_eq!(marker_label(MarkerType::Roman, -100), "XI");
        assert_eq!(marker_label(MarkerType::Triangle, 300), "");
    }
}
