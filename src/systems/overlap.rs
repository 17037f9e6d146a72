//! Overlap resolution between the moving top layer and the layer beneath it.
//!
//! Pure geometry: no physics, no visuals. The session applies the outcome.

use glam::Vec3;

use crate::domain::geometry::{Axis, Slab};

/// A partial drop: the top layer splits into the part that stays and the part
/// that falls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cut {
    pub retained: Slab,
    pub overhang: Slab,
    /// Signed offset of the top layer from the one below, along the travel axis
    pub delta: f32,
    pub overlap: f32,
    pub overhang_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropOutcome {
    /// No measurable overhang; the layer snaps onto the one below at full size
    Perfect { snapped: Slab },
    Partial(Cut),
    /// Nothing overlaps; the game is over
    Miss { overlap: f32 },
}

/// An overhang that rounds to 0.0 at one decimal place counts as perfect.
#[inline]
pub fn is_perfect(overhang_size: f32) -> bool {
    (overhang_size * 10.0).round() == 0.0
}

/// Resolve a drop of `top` onto `previous`, `top` having travelled along `axis`.
pub fn resolve(top: &Slab, previous: &Slab, axis: Axis) -> DropOutcome {
    let delta = axis.component(top.position) - axis.component(previous.position);
    let overhang_size = delta.abs();
    let size = top.size_along(axis);
    let overlap = size - overhang_size;

    if is_perfect(overhang_size) {
        let mut snapped = *top;
        axis.set_component(&mut snapped.position, axis.component(previous.position));
        return DropOutcome::Perfect { snapped };
    }

    if overlap <= 0.0 {
        return DropOutcome::Miss { overlap };
    }

    let mut retained = *top;
    retained.set_size_along(axis, overlap);
    retained.position -= axis.unit() * (delta / 2.0);

    let mut overhang = *top;
    overhang.set_size_along(axis, overhang_size);
    let shift = (overlap / 2.0 + overhang_size / 2.0) * delta.signum();
    overhang.position = retained.position + axis.unit() * shift;

    DropOutcome::Partial(Cut { retained, overhang, delta, overlap, overhang_size })
}

/// Where the next layer enters: off-stage on the perpendicular axis, lined up
/// with `placed` on the axis just used, one slab above the current stack.
pub fn next_layer(placed: &Slab, used_axis: Axis, stack_len: usize, travel_extent: f32) -> (Slab, Axis) {
    let next_axis = used_axis.perpendicular();
    let mut position = Vec3::new(
        placed.position.x,
        placed.height * stack_len as f32,
        placed.position.z,
    );
    next_axis.set_component(&mut position, -travel_extent);
    (Slab::new(position, placed.width, placed.depth, placed.height), next_axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab_at(x: f32, z: f32, y: f32) -> Slab {
        Slab::new(Vec3::new(x, y, z), 5.0, 5.0, 1.0)
    }

    #[test]
    fn partial_overlap_splits_along_x() {
        let previous = slab_at(0.0, 0.0, 1.0);
        let top = slab_at(3.0, 0.0, 2.0);

        let DropOutcome::Partial(cut) = resolve(&top, &previous, Axis::X) else {
            panic!("expected a partial drop");
        };
        assert_eq!(cut.delta, 3.0);
        assert_eq!(cut.overhang_size, 3.0);
        assert_eq!(cut.overlap, 2.0);

        assert_eq!(cut.retained.width, 2.0);
        assert_eq!(cut.retained.depth, 5.0);
        assert_eq!(cut.retained.position, Vec3::new(1.5, 2.0, 0.0));

        assert_eq!(cut.overhang.width, 3.0);
        assert_eq!(cut.overhang.depth, 5.0);
        assert_eq!(cut.overhang.position, Vec3::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn partial_overlap_on_negative_side_along_z() {
        let previous = slab_at(0.0, 0.0, 1.0);
        let top = slab_at(0.0, -1.0, 2.0);

        let DropOutcome::Partial(cut) = resolve(&top, &previous, Axis::Z) else {
            panic!("expected a partial drop");
        };
        assert_eq!(cut.retained.depth, 4.0);
        assert_eq!(cut.retained.width, 5.0);
        assert_eq!(cut.retained.position.z, -0.5);
        assert_eq!(cut.overhang.depth, 1.0);
        // -0.5 + (2.0 + 0.5) * -1
        assert_eq!(cut.overhang.position.z, -3.0);
        assert!(cut.retained.footprint_area() < top.footprint_area());
    }

    #[test]
    fn tiny_offset_snaps_as_perfect() {
        let previous = slab_at(0.0, 0.0, 1.0);
        let top = slab_at(0.04, 0.0, 2.0);

        let DropOutcome::Perfect { snapped } = resolve(&top, &previous, Axis::X) else {
            panic!("expected a perfect drop");
        };
        assert_eq!(snapped.position.x, 0.0);
        assert_eq!(snapped.width, 5.0);
        assert_eq!(snapped.depth, 5.0);
    }

    #[test]
    fn offset_of_a_tenth_is_not_perfect() {
        assert!(is_perfect(0.0));
        assert!(is_perfect(0.049));
        assert!(is_perfect(-0.049));
        // Halves round away from zero: 0.05 already counts as a tenth.
        assert!(!is_perfect(0.05));
        assert!(!is_perfect(0.051));
        assert!(!is_perfect(0.1));
    }

    #[test]
    fn full_miss_is_reported() {
        let previous = slab_at(0.0, 0.0, 1.0);
        assert!(matches!(
            resolve(&slab_at(5.0, 0.0, 2.0), &previous, Axis::X),
            DropOutcome::Miss { .. }
        ));
        assert!(matches!(
            resolve(&slab_at(0.0, -7.5, 2.0), &previous, Axis::Z),
            DropOutcome::Miss { .. }
        ));
    }

    #[test]
    fn next_layer_enters_on_the_other_axis() {
        let placed = Slab::new(Vec3::new(1.5, 2.0, 0.0), 2.0, 5.0, 1.0);
        let (next, axis) = next_layer(&placed, Axis::X, 3, 10.0);
        assert_eq!(axis, Axis::Z);
        assert_eq!(next.position, Vec3::new(1.5, 3.0, -10.0));
        assert_eq!(next.width, 2.0);
        assert_eq!(next.depth, 5.0);

        let (next, axis) = next_layer(&next, Axis::Z, 4, 10.0);
        assert_eq!(axis, Axis::X);
        assert_eq!(next.position, Vec3::new(-10.0, 4.0, -10.0));
    }
}
