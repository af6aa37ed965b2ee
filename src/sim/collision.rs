//! Collision tests between the player circle and rectangles

use glam::Vec2;

use super::shape::{Body, Rect};

/// Check overlap between a circle and an axis-aligned rectangle
///
/// True iff the distance from the circle center to the nearest point of the
/// rectangle is at most `radius`. Touching counts as a hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) <= radius * radius
}

/// Check overlap between two bodies, using the circle of `circle` and the
/// bounding rectangle of `rect`
pub fn body_overlap(circle: &Body, rect: &Body) -> bool {
    circle_rect_overlap(circle.center(), circle.radius() as f32, &rect.rect())
}

/// Check whether a screen point lies inside a rectangle (edges included)
#[inline]
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    rect.contains_point(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Color;
    use proptest::prelude::*;

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_rect_overlap(Vec2::new(50.0, 50.0), 5.0, &rect));
    }

    #[test]
    fn test_circle_touching_edge() {
        let rect = Rect::new(100.0, 100.0, 60.0, 90.0);

        // Exactly radius away from the left edge
        assert!(circle_rect_overlap(Vec2::new(90.0, 150.0), 10.0, &rect));
        // Just past it
        assert!(!circle_rect_overlap(Vec2::new(89.9, 150.0), 10.0, &rect));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Rect::new(100.0, 100.0, 60.0, 90.0);

        // Diagonal from the top-left corner: both axis gaps are 8, distance ~11.3
        assert!(!circle_rect_overlap(Vec2::new(92.0, 92.0), 10.0, &rect));
        // Axis gaps 6 and 8, distance exactly 10
        assert!(circle_rect_overlap(Vec2::new(94.0, 92.0), 10.0, &rect));
    }

    #[test]
    fn test_body_overlap() {
        let player = Body::circle(400, 225, 10, Color::GREEN);
        let far = Body::rectangle(300, 0, 60, 90, Color::RED);
        assert!(!body_overlap(&player, &far));

        let near = Body::rectangle(405, 230, 60, 90, Color::RED);
        assert!(body_overlap(&player, &near));
    }

    #[test]
    fn test_point_in_rect() {
        let button = Rect::new(340.0, 195.0, 120.0, 60.0);
        assert!(point_in_rect(Vec2::new(400.0, 225.0), &button));
        assert!(!point_in_rect(Vec2::new(10.0, 10.0), &button));
    }

    proptest! {
        #[test]
        fn prop_overlap_matches_nearest_point_distance(
            cx in -100.0f32..300.0,
            cy in -100.0f32..300.0,
            radius in 0.0f32..50.0,
            x in 0.0f32..200.0,
            y in 0.0f32..200.0,
            w in 0.0f32..100.0,
            h in 0.0f32..100.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            let center = Vec2::new(cx, cy);

            // Nearest point computed per axis, independent of Rect::nearest_point
            let nx = cx.max(x).min(x + w);
            let ny = cy.max(y).min(y + h);
            let dist = ((cx - nx).powi(2) + (cy - ny).powi(2)).sqrt();

            let hit = circle_rect_overlap(center, radius, &rect);
            // Skip the razor-thin band where float rounding decides
            if (dist - radius).abs() > 1e-3 {
                prop_assert_eq!(hit, dist <= radius);
            }
        }
    }
}
