//! Bounding regions over route geometry.
//!
//! Used to frame a map around every route of a collection. The result is
//! recomputed from scratch for each collection and does not depend on route
//! or point order.

use geo::{BoundingRect, Coord, MultiPoint, Point, Rect};

use crate::{LatLng, Route};

/// Axis-aligned latitude/longitude rectangle.
///
/// Routes crossing the antimeridian are not special-cased.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    /// Minimum latitude.
    pub south: f64,
    /// Minimum longitude.
    pub west: f64,
    /// Maximum latitude.
    pub north: f64,
    /// Maximum longitude.
    pub east: f64,
}

impl BoundingBox {
    /// South-west corner.
    #[must_use]
    pub const fn south_west(&self) -> LatLng {
        LatLng {
            lat: self.south,
            lng: self.west,
        }
    }

    /// North-east corner.
    #[must_use]
    pub const fn north_east(&self) -> LatLng {
        LatLng {
            lat: self.north,
            lng: self.east,
        }
    }

    /// Midpoint of the rectangle.
    #[must_use]
    pub fn centre(&self) -> LatLng {
        LatLng {
            lat: f64::midpoint(self.south, self.north),
            lng: f64::midpoint(self.west, self.east),
        }
    }

    /// Whether `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }

    /// Convert into a `geo` rectangle (`x = lng`, `y = lat`).
    #[must_use]
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(self.south_west().to_coord(), self.north_east().to_coord())
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        let Coord { x: west, y: south } = rect.min();
        let Coord { x: east, y: north } = rect.max();
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

/// Smallest rectangle containing every path point of every route.
///
/// Returns `None` when there are no points at all, meaning there is
/// nothing to frame.
///
/// # Examples
/// ```
/// use restwalk_core::{LatLng, Route, compute_bounds};
///
/// assert_eq!(compute_bounds(&[]), None);
///
/// let route = Route::new(
///     "Harbourfront",
///     2.0,
///     vec![LatLng { lat: 22.28, lng: 114.15 }, LatLng { lat: 22.29, lng: 114.19 }],
///     Vec::new(),
/// );
/// let bounds = compute_bounds(&[route]).expect("route has points");
/// assert_eq!(bounds.north, 22.29);
/// assert_eq!(bounds.west, 114.15);
/// ```
#[must_use]
pub fn compute_bounds(routes: &[Route]) -> Option<BoundingBox> {
    let points: MultiPoint<f64> = routes
        .iter()
        .flat_map(|route| route.path.iter())
        .map(|point| Point::from(point.to_coord()))
        .collect();
    points.bounding_rect().map(BoundingBox::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::route_through;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn no_routes_have_no_bounds() {
        assert_eq!(compute_bounds(&[]), None);
    }

    #[rstest]
    fn empty_paths_have_no_bounds() {
        let routes = [route_through("A", &[]), route_through("B", &[])];
        assert_eq!(compute_bounds(&routes), None);
    }

    #[rstest]
    fn single_point_is_degenerate_box() {
        let bounds = compute_bounds(&[route_through("A", &[(22.3, 114.2)])]).expect("one point");
        assert_eq!(bounds.south_west(), bounds.north_east());
        assert_eq!(bounds.centre(), LatLng { lat: 22.3, lng: 114.2 });
    }

    #[rstest]
    fn disjoint_routes_are_unioned() {
        let routes = [
            route_through("West", &[(22.30, 114.10), (22.31, 114.12)]),
            route_through("East", &[(22.25, 114.20), (22.27, 114.25)]),
        ];
        let bounds = compute_bounds(&routes).expect("points present");
        assert_eq!(
            bounds,
            BoundingBox {
                south: 22.25,
                west: 114.10,
                north: 22.31,
                east: 114.25,
            }
        );
    }

    #[rstest]
    fn rect_round_trip_preserves_corners() {
        let bounds = BoundingBox {
            south: -1.0,
            west: -2.0,
            north: 3.0,
            east: 4.0,
        };
        assert_eq!(BoundingBox::from(bounds.to_rect()), bounds);
    }

    fn lat_lng() -> impl Strategy<Value = (f64, f64)> {
        (-90.0..=90.0_f64, -180.0..=180.0_f64)
    }

    proptest! {
        #[test]
        fn bounds_contain_every_point_in_any_order(
            first in prop::collection::vec(lat_lng(), 0..12),
            second in prop::collection::vec(lat_lng(), 0..12),
        ) {
            let routes = [route_through("A", &first), route_through("B", &second)];
            let reversed = [route_through("B", &second), route_through("A", &first)];
            let bounds = compute_bounds(&routes);
            prop_assert_eq!(bounds, compute_bounds(&reversed));
            match bounds {
                None => prop_assert!(first.is_empty() && second.is_empty()),
                Some(rect) => {
                    for &(lat, lng) in first.iter().chain(second.iter()) {
                        let point = LatLng { lat, lng };
                        prop_assert!(rect.contains(point), "{point:?} outside {rect:?}");
                    }
                }
            }
        }
    }
}
