//! Movement domain: avian-backed collision probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{CollisionProbes, WallHit};

/// `CollisionProbes` implemented on avian's spatial query pipeline.
pub(crate) struct SpatialProbes<'a, 'w, 's> {
    pub query: &'a SpatialQuery<'w, 's>,
}

impl CollisionProbes for SpatialProbes<'_, '_, '_> {
    fn cast_ground(
        &self,
        origin: Vec2,
        half_extents: Vec2,
        distance: f32,
        mask: LayerMask,
    ) -> bool {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let config = ShapeCastConfig::from_max_distance(distance);
        let filter = SpatialQueryFilter::from_mask(mask);

        self.query
            .cast_shape(&shape, origin, 0.0, Dir2::NEG_Y, &config, &filter)
            .is_some()
    }

    fn cast_wall(
        &self,
        origin: Vec2,
        toward: f32,
        distance: f32,
        mask: LayerMask,
    ) -> Option<WallHit> {
        let direction = if toward > 0.0 { Dir2::X } else { Dir2::NEG_X };
        let filter = SpatialQueryFilter::from_mask(mask);

        self.query
            .cast_ray(origin, direction, distance, true, &filter)
            .map(|hit| WallHit {
                normal_sign: hit.normal.x.signum(),
            })
    }
}
