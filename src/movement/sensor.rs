//! Movement domain: overlap-based ground sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Shape-overlap queries against the collision world.
pub trait OverlapQuery {
    /// Append every collider on `layers` overlapping `shape` at `position`.
    fn collect_overlaps(
        &self,
        shape: &Collider,
        position: Vec2,
        layers: LayerMask,
        out: &mut Vec<Entity>,
    );
}

impl OverlapQuery for SpatialQuery<'_, '_> {
    fn collect_overlaps(
        &self,
        shape: &Collider,
        position: Vec2,
        layers: LayerMask,
        out: &mut Vec<Entity>,
    ) {
        let filter = SpatialQueryFilter::from_mask(layers);
        out.extend(self.shape_intersections(shape, position, 0.0, &filter));
    }
}

/// Which layers count as standing ground and as attack-dash ground.
#[derive(Debug, Clone, Copy)]
pub struct SensorLayers {
    pub ground: LayerMask,
    pub dash_ground: LayerMask,
}

impl Default for SensorLayers {
    fn default() -> Self {
        Self {
            ground: LayerMask::from([
                GameLayer::Ground,
                GameLayer::DashGround,
                GameLayer::Platform,
            ]),
            dash_ground: LayerMask::from([GameLayer::DashGround]),
        }
    }
}

/// Ground-check shape at the character's feet.
///
/// Queries are stateless: the scratch buffer is cleared before every query
/// so one query never sees another's results.
#[derive(Component)]
pub struct GroundSensor {
    shape: Collider,
    size: Vec2,
    offset: Vec2,
    layers: SensorLayers,
    scratch: Vec<Entity>,
}

impl GroundSensor {
    pub fn new(size: Vec2, offset: Vec2, layers: SensorLayers) -> Self {
        Self {
            shape: Collider::rectangle(size.x, size.y),
            size,
            offset,
            layers,
            scratch: Vec::with_capacity(4),
        }
    }

    /// Standing on anything in the ground layers. Coyote time is not
    /// factored in.
    pub fn is_grounded(&mut self, query: &impl OverlapQuery, origin: Vec2) -> bool {
        let layers = self.layers.ground;
        self.overlaps(query, origin, layers)
    }

    pub fn is_on_dash_surface(&mut self, query: &impl OverlapQuery, origin: Vec2) -> bool {
        let layers = self.layers.dash_ground;
        self.overlaps(query, origin, layers)
    }

    /// World-space center of the check shape for a character at `origin`.
    pub fn center(&self, origin: Vec2) -> Vec2 {
        origin + self.offset
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    fn overlaps(&mut self, query: &impl OverlapQuery, origin: Vec2, layers: LayerMask) -> bool {
        self.scratch.clear();
        query.collect_overlaps(&self.shape, self.center(origin), layers, &mut self.scratch);
        !self.scratch.is_empty()
    }
}
