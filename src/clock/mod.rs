//! Clock business logic: what each face shows and in which order.

mod angles;
mod face;

pub use angles::{marker_label, FaceAngles};
pub use face::{
    default_colors, draw_face, ClockFace, FaceShape, FaceStyle, COLD, FACE, HOT, HOUR, MARK,
    MINUTE, RIM, SECOND, TEXT, TICK,
};

use chrono::{DateTime, Utc};

use crate::core::OrderedList;

/// Order faces west to east by their current UTC offset. Faces with the
/// same offset keep their configured order.
pub fn faces_by_offset(
    faces: impl IntoIterator<Item = ClockFace>,
    now: DateTime<Utc>,
) -> OrderedList<ClockFace> {
    let mut ordered = OrderedList::new();
    for face in faces {
        ordered.insert_sorted_by(face, |a, b| a.utc_offset(now).cmp(&b.utc_offset(now)));
    }
    ordered
}
