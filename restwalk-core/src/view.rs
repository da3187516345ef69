//! Plain-data view state for a map rendering surface.
//!
//! Given validated routes, derive what to draw (polylines, markers, deep
//! links) and where to frame the map. Nothing here holds state or mutates
//! the routes.

use url::Url;

use crate::{BoundingBox, LatLng, Route, compute_bounds};

/// Google Maps directions endpoint used for deep links.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Cyan then indigo.
pub const DEFAULT_PALETTE: [&str; 2] = ["#0891b2", "#6366f1"];

/// Map centre used when there is nothing to frame (Hong Kong).
pub const DEFAULT_CENTRE: LatLng = LatLng {
    lat: 22.3193,
    lng: 114.1694,
};

/// Zoom level paired with [`DEFAULT_CENTRE`].
pub const DEFAULT_ZOOM: u8 = 11;

/// Padding around fitted bounds, in pixels.
pub const DEFAULT_FIT_PADDING_PX: u16 = 50;

const POLYLINE_WEIGHT: u8 = 6;
const POLYLINE_OPACITY: f32 = 0.8;

/// Fixed list of polyline colours, assigned by route position.
///
/// # Examples
/// ```
/// use restwalk_core::RoutePalette;
///
/// let palette = RoutePalette::default();
/// assert_eq!(palette.color_for(0), palette.color_for(2));
/// assert_ne!(palette.color_for(0), palette.color_for(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePalette {
    colors: Vec<String>,
}

impl Default for RoutePalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|&c| c.to_owned()).collect(),
        }
    }
}

impl RoutePalette {
    /// Build a palette; returns `None` when `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<String>) -> Option<Self> {
        (!colors.is_empty()).then_some(Self { colors })
    }

    /// Colour for the route at `index`, cycling through the palette.
    #[must_use]
    pub fn color_for(&self, index: usize) -> &str {
        index
            .checked_rem(self.colors.len())
            .and_then(|slot| self.colors.get(slot))
            .map_or(DEFAULT_PALETTE[0], String::as_str)
    }

    /// Number of colours before the cycle repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes hold at least one colour.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// What a marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MarkerKind {
    /// Route origin.
    Start,
    /// Route destination.
    End,
}

/// Start or end marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndpointMarker {
    /// Origin or destination.
    pub kind: MarkerKind,
    /// Marker position.
    pub position: LatLng,
    /// Popup text.
    pub label: String,
}

/// Intermediate marker for one rest stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RestStopMarker {
    /// Stop name.
    pub name: String,
    /// Marker position.
    pub position: LatLng,
    /// Incremental distance from the previous point, as received.
    pub distance_from_previous_km: f64,
    /// Running total of incremental distances up to this stop.
    pub cumulative_distance_km: f64,
}

/// How a route's line is stroked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PolylineStyle {
    /// CSS colour.
    pub color: String,
    /// Stroke width in pixels.
    pub weight: u8,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Everything a renderer needs to draw one route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteView {
    /// Position of the route in its collection.
    pub index: usize,
    /// Route name.
    pub name: String,
    /// Total walking distance in km.
    pub total_distance_km: f64,
    /// Line stroke.
    pub style: PolylineStyle,
    /// Points of the polyline.
    pub polyline: Vec<LatLng>,
    /// Marker on the first path point, if any.
    pub start: Option<EndpointMarker>,
    /// Marker on the last path point, when the path has two or more points.
    pub end: Option<EndpointMarker>,
    /// Rest stops in travel order.
    pub rest_stops: Vec<RestStopMarker>,
    /// External directions link, when origin and destination are known.
    pub directions_url: Option<String>,
}

/// Derive per-route view descriptors, preserving route order.
///
/// # Examples
/// ```
/// use restwalk_core::{LatLng, Route, RoutePalette, render_metadata};
///
/// let stub = Route::new("Stub", 0.0, vec![LatLng { lat: 22.0, lng: 114.0 }], Vec::new());
/// let views = render_metadata(&[stub], &RoutePalette::default());
/// assert!(views[0].start.is_some());
/// assert!(views[0].end.is_none());
/// assert!(views[0].directions_url.is_none());
/// ```
#[must_use]
pub fn render_metadata(routes: &[Route], palette: &RoutePalette) -> Vec<RouteView> {
    routes
        .iter()
        .enumerate()
        .map(|(index, route)| route_view(index, route, palette))
        .collect()
}

fn route_view(index: usize, route: &Route, palette: &RoutePalette) -> RouteView {
    RouteView {
        index,
        name: route.route_name.clone(),
        total_distance_km: route.total_distance_km,
        style: PolylineStyle {
            color: palette.color_for(index).to_owned(),
            weight: POLYLINE_WEIGHT,
            opacity: POLYLINE_OPACITY,
        },
        polyline: route.path.clone(),
        start: route.origin().map(|position| EndpointMarker {
            kind: MarkerKind::Start,
            position,
            label: "Start".to_owned(),
        }),
        end: route.destination().map(|position| EndpointMarker {
            kind: MarkerKind::End,
            position,
            label: format!("End: {}", route.route_name),
        }),
        rest_stops: rest_stop_markers(route),
        directions_url: directions_url(route),
    }
}

fn rest_stop_markers(route: &Route) -> Vec<RestStopMarker> {
    route
        .rest_stops
        .iter()
        .scan(0.0_f64, |walked, stop| {
            *walked += stop.distance_from_previous_km;
            Some(RestStopMarker {
                name: stop.name.clone(),
                position: stop.location,
                distance_from_previous_km: stop.distance_from_previous_km,
                cumulative_distance_km: *walked,
            })
        })
        .collect()
}

/// Walking directions link through the route's rest stops.
///
/// Returns `None` when the path has fewer than two points, since origin
/// and destination are then unknown.
///
/// # Examples
/// ```
/// use restwalk_core::{LatLng, Route, directions_url};
///
/// let route = Route::new(
///     "Harbourfront",
///     2.0,
///     vec![LatLng { lat: 22.28, lng: 114.15 }, LatLng { lat: 22.29, lng: 114.19 }],
///     Vec::new(),
/// );
/// let link = directions_url(&route).expect("two points");
/// assert!(link.starts_with("https://www.google.com/maps/dir/?api=1&origin=22.28%2C114.15"));
/// assert!(link.contains("travelmode=walking"));
/// ```
#[must_use]
pub fn directions_url(route: &Route) -> Option<String> {
    let origin = route.origin()?;
    let destination = route.destination()?;
    let mut url = Url::parse(DIRECTIONS_BASE_URL).ok()?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("api", "1")
            .append_pair("origin", &origin.to_query_value())
            .append_pair("destination", &destination.to_query_value())
            .append_pair("travelmode", "walking");
        if !route.rest_stops.is_empty() {
            let waypoints = route
                .rest_stops
                .iter()
                .map(|stop| stop.location.to_query_value())
                .collect::<Vec<_>>()
                .join("|");
            query.append_pair("waypoints", &waypoints);
        }
    }
    Some(url.into())
}

/// How the map viewport should be positioned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum MapFrame {
    /// Fit the viewport to `bounds` with padding.
    FitBounds {
        /// Region to show.
        bounds: BoundingBox,
        /// Padding around the region in pixels.
        padding_px: u16,
    },
    /// Nothing to frame; show the default view.
    Centre {
        /// Map centre.
        centre: LatLng,
        /// Zoom level.
        zoom: u8,
    },
}

/// Options controlling view derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Polyline colours.
    pub palette: RoutePalette,
    /// Centre used when there is nothing to frame.
    pub default_centre: LatLng,
    /// Zoom used with `default_centre`.
    pub default_zoom: u8,
    /// Padding around fitted bounds.
    pub fit_padding_px: u16,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            palette: RoutePalette::default(),
            default_centre: DEFAULT_CENTRE,
            default_zoom: DEFAULT_ZOOM,
            fit_padding_px: DEFAULT_FIT_PADDING_PX,
        }
    }
}

/// Choose how to frame `routes`.
#[must_use]
pub fn frame_view(routes: &[Route], options: &ViewOptions) -> MapFrame {
    compute_bounds(routes).map_or(
        MapFrame::Centre {
            centre: options.default_centre,
            zoom: options.default_zoom,
        },
        |bounds| MapFrame::FitBounds {
            bounds,
            padding_px: options.fit_padding_px,
        },
    )
}

/// Complete view state handed to a rendering surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapView {
    /// Viewport framing.
    pub frame: MapFrame,
    /// One descriptor per route, in collection order.
    pub routes: Vec<RouteView>,
}

/// Derive the framing and per-route descriptors for `routes`.
#[must_use]
pub fn build_map_view(routes: &[Route], options: &ViewOptions) -> MapView {
    MapView {
        frame: frame_view(routes, options),
        routes: render_metadata(routes, &options.palette),
    }
}
