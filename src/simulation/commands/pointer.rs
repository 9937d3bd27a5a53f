use super::PileCore;

/// Host pointer input; takes effect on the next step
pub(super) fn set_mouse(core: &mut PileCore, x: f64, y: f64, vx: f64, vy: f64, active: bool) {
    core.pointer.set(x, y, vx, vy, active);
}

pub(super) fn clear_mouse(core: &mut PileCore) {
    core.pointer.clear();
}
