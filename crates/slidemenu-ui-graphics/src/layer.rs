use crate::Point;

/// Per-panel draw transform: a uniform or non-uniform scale around a pivot.
///
/// The pivot is expressed in the panel's own coordinates, so `(0, h / 2)`
/// scales towards the middle of the left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub scale_x: f32,
    pub scale_y: f32,
    pub pivot: Point,
}

impl GraphicsLayer {
    pub const IDENTITY: GraphicsLayer = GraphicsLayer {
        scale_x: 1.0,
        scale_y: 1.0,
        pivot: Point::ZERO,
    };

    pub fn uniform_scale(scale: f32, pivot: Point) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            pivot,
        }
    }

    /// Map a point from panel coordinates to where it is drawn.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.pivot.x + (point.x - self.pivot.x) * self.scale_x,
            self.pivot.y + (point.y - self.pivot.y) * self.scale_y,
        )
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_stays_fixed_under_scale() {
        let pivot = Point::new(0.0, 300.0);
        let layer = GraphicsLayer::uniform_scale(0.9, pivot);

        assert_eq!(layer.apply(pivot), pivot);
        let corner = layer.apply(Point::new(800.0, 600.0));
        assert!((corner.x - 720.0).abs() < 1e-3);
        assert!((corner.y - 570.0).abs() < 1e-3);
    }
}
