//! Behavioural tests for map view derivation.

use restwalk_core::test_support::{rest_stop, route_through};
use restwalk_core::view::{DEFAULT_CENTRE, DEFAULT_ZOOM};
use restwalk_core::{LatLng, MapFrame, MapView, Route, ViewOptions, build_map_view};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn routes() -> RefCell<Vec<Route>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn view() -> RefCell<Option<MapView>> {
    RefCell::new(None)
}

fn built(view: &RefCell<Option<MapView>>) -> MapView {
    view.borrow().clone().expect("view should have been built")
}

// --- Given steps ---

#[given("two routes on opposite sides of the harbour")]
fn harbour_routes(#[from(routes)] routes: &RefCell<Vec<Route>>) {
    *routes.borrow_mut() = vec![
        route_through("Kowloon", &[(22.2950, 114.1680), (22.3020, 114.1720)]),
        route_through("Island", &[(22.2790, 114.1580), (22.2810, 114.1880)]),
    ];
}

#[given("three planned routes")]
fn three_routes(#[from(routes)] routes: &RefCell<Vec<Route>>) {
    let path = [(22.28, 114.15), (22.29, 114.19)];
    *routes.borrow_mut() = vec![
        route_through("First", &path),
        route_through("Second", &path),
        route_through("Third", &path),
    ];
}

#[given("a route whose path has one point")]
fn single_point_route(#[from(routes)] routes: &RefCell<Vec<Route>>) {
    *routes.borrow_mut() = vec![route_through("Stub", &[(22.28, 114.15)])];
}

#[given("a route with rest stops 1.2 km and 0.8 km apart")]
fn route_with_stops(#[from(routes)] routes: &RefCell<Vec<Route>>) {
    let mut route = route_through("Harbourfront", &[(22.287, 114.159), (22.282, 114.184)]);
    route.rest_stops = vec![
        rest_stop("Ferry pier bench", 1.2, 22.285, 114.170),
        rest_stop("Park kiosk", 0.8, 22.283, 114.180),
    ];
    *routes.borrow_mut() = vec![route];
}

#[given("a route with an empty path")]
fn empty_route(#[from(routes)] routes: &RefCell<Vec<Route>>) {
    *routes.borrow_mut() = vec![route_through("Nowhere", &[])];
}

// --- When steps ---

#[when("I build the map view")]
fn build_view(
    #[from(routes)] routes: &RefCell<Vec<Route>>,
    #[from(view)] view: &RefCell<Option<MapView>>,
) {
    *view.borrow_mut() = Some(build_map_view(&routes.borrow(), &ViewOptions::default()));
}

// --- Then steps ---

#[then("the map is fitted to a box containing every path point")]
fn fitted_to_all_points(
    #[from(routes)] routes: &RefCell<Vec<Route>>,
    #[from(view)] view: &RefCell<Option<MapView>>,
) {
    let MapFrame::FitBounds { bounds, .. } = built(view).frame else {
        panic!("expected a fitted frame");
    };
    for point in routes.borrow().iter().flat_map(|r| r.path.iter()) {
        assert!(bounds.contains(*point), "{point:?} outside {bounds:?}");
    }
    assert_eq!(bounds.south, 22.2790);
    assert_eq!(bounds.north, 22.3020);
    assert_eq!(bounds.west, 114.1580);
    assert_eq!(bounds.east, 114.1880);
}

#[then("the first and third routes share a colour that differs from the second")]
fn colours_cycle(#[from(view)] view: &RefCell<Option<MapView>>) {
    let colours: Vec<String> = built(view)
        .routes
        .into_iter()
        .map(|route| route.style.color)
        .collect();
    assert_eq!(colours.len(), 3);
    assert_eq!(colours.first(), colours.get(2));
    assert_ne!(colours.first(), colours.get(1));
}

#[then("the route has a start marker but no end marker or directions link")]
fn start_only(#[from(view)] view: &RefCell<Option<MapView>>) {
    let route = built(view).routes.pop().expect("one route");
    let start = route.start.expect("start marker");
    assert_eq!(start.position, LatLng { lat: 22.28, lng: 114.15 });
    assert!(route.end.is_none());
    assert!(route.directions_url.is_none());
}

#[then("the rest stop markers keep their order and incremental distances")]
fn stops_unchanged(#[from(view)] view: &RefCell<Option<MapView>>) {
    let route = built(view).routes.pop().expect("one route");
    let stops: Vec<_> = route
        .rest_stops
        .iter()
        .map(|stop| (stop.name.as_str(), stop.distance_from_previous_km))
        .collect();
    assert_eq!(stops, [("Ferry pier bench", 1.2), ("Park kiosk", 0.8)]);
}

#[then("the map is centred on the default location")]
fn default_centre(#[from(view)] view: &RefCell<Option<MapView>>) {
    assert_eq!(
        built(view).frame,
        MapFrame::Centre {
            centre: DEFAULT_CENTRE,
            zoom: DEFAULT_ZOOM,
        }
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/render_routes.feature", name = $title)]
        fn $fn_name(routes: RefCell<Vec<Route>>, view: RefCell<Option<MapView>>) {
            let _ = (routes, view);
        }
    };
}

register_scenario!(frames_disjoint_routes, "framing two disjoint routes");
register_scenario!(cycles_colours, "cycling colours across three routes");
register_scenario!(renders_single_point_route, "rendering a route with a single path point");
register_scenario!(keeps_incremental_distances, "keeping incremental rest stop distances");
register_scenario!(falls_back_to_default_centre, "falling back to the default centre");
