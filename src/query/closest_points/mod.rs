//! Implementation details of the closest points computation between segments.

pub use self::closest_points_segment_segment::{
    closest_points_line_line, closest_points_segment_segment_params,
};

mod closest_points_segment_segment;
