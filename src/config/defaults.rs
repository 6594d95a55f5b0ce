//! Default value functions for serde deserialization.

pub fn extent() -> f32 {
    2.0
}

pub fn resolution() -> f32 {
    0.02
}

pub fn p_occupied() -> f32 {
    0.7
}

pub fn p_free() -> f32 {
    0.3
}

pub fn l_min() -> f32 {
    -10.0
}

pub fn l_max() -> f32 {
    10.0
}

pub fn horizontal_fov_deg() -> f32 {
    62.0
}

pub fn min_distance() -> f32 {
    0.5
}

pub fn max_distance() -> f32 {
    5.0
}

pub fn occupied_threshold() -> f32 {
    0.5
}

pub fn frame_id() -> String {
    "map".to_string()
}
