use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half: Vec3) -> Self {
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Penetration of one box into another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Contact {
    /// Unit axis pushing the first box out of the second
    pub normal: Vec3,
    pub depth: f32,
    /// Overlap of the two boxes projected on the XZ plane (min, max)
    pub patch_min: Vec3,
    pub patch_max: Vec3,
}

/// Separating-axis test restricted to the world axes.
pub(super) fn box_contact(a: &Aabb, b: &Aabb) -> Option<Contact> {
    let lo = a.min.max(b.min);
    let hi = a.max.min(b.max);
    let overlap = hi - lo;
    if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
        return None;
    }

    let d = a.center() - b.center();
    let (normal, depth) = if overlap.y <= overlap.x && overlap.y <= overlap.z {
        (Vec3::new(0.0, d.y.signum(), 0.0), overlap.y)
    } else if overlap.x <= overlap.z {
        (Vec3::new(d.x.signum(), 0.0, 0.0), overlap.x)
    } else {
        (Vec3::new(0.0, 0.0, d.z.signum()), overlap.z)
    };

    Some(Contact { normal, depth, patch_min: lo, patch_max: hi })
}
