use eframe::egui::Vec2;

/// Push on `point` away from `other`, or zero when the two coincide or are out of range.
pub(super) fn repulsion_between(point: Vec2, other: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = point - other;
    let distance = delta.length();
    if distance >= radius || distance <= 0.0 {
        return Vec2::ZERO;
    }
    delta / distance * strength
}

/// Applies the repulsion of every image node in `others` to `position`, one after the
/// other, so each distance check sees the nudges accumulated so far.
pub(super) fn accumulate_repulsion(
    mut position: Vec2,
    others: impl IntoIterator<Item = Vec2>,
    radius: f32,
    strength: f32,
) -> Vec2 {
    for other in others {
        position += repulsion_between(position, other, radius, strength);
    }
    position
}

/// Flips a velocity component when its coordinate has left `[0, limit]`.
pub(super) fn reflect_axis(coordinate: f32, velocity: f32, limit: f32) -> f32 {
    if coordinate < 0.0 || coordinate > limit {
        -velocity
    } else {
        velocity
    }
}
