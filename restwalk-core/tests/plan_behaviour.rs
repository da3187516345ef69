//! Behavioural tests for `RoutePlanner`.

use restwalk_core::test_support::{StubRouteGenerator, route_json};
use restwalk_core::{
    GenerationError, PlanRequest, RouteCollection, RoutePlanner, RoutingError, RoutingErrorKind,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;

/// Result cell holding the outcome of a plan call.
type ResultCell = RefCell<Option<Result<RouteCollection, RoutingError>>>;

#[fixture]
fn generator() -> RefCell<Option<StubRouteGenerator>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn install(cell: &RefCell<Option<StubRouteGenerator>>, stub: StubRouteGenerator) {
    *cell.borrow_mut() = Some(stub);
}

fn expect_kind(result: &ResultCell, kind: RoutingErrorKind) {
    let borrowed = result.borrow();
    match borrowed.as_ref().expect("plan should have run") {
        Err(err) => assert_eq!(err.kind(), kind, "unexpected error {err:?}"),
        Ok(routes) => panic!("expected {kind:?}, got {} routes", routes.len()),
    }
}

// --- Given steps ---

#[given("a route service returning two well-formed routes")]
fn service_ok(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    let payload = json!([route_json("Harbourfront", 2), route_json("Inland", 1)]);
    install(generator, StubRouteGenerator::with_text(payload.to_string()));
}

#[given("a route service returning only whitespace")]
fn service_blank(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    install(generator, StubRouteGenerator::with_text(" \n "));
}

#[given("a route service returning Markdown instead of JSON")]
fn service_markdown(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    install(
        generator,
        StubRouteGenerator::with_text("```json\n[{\"routeName\": \"A\"}]\n```"),
    );
}

#[given("a route service returning an empty array")]
fn service_empty_array(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    install(generator, StubRouteGenerator::with_text("[]"));
}

#[given("a route service whose second route has no rest stops")]
fn service_incomplete(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    let mut second = route_json("Inland", 0);
    second
        .as_object_mut()
        .expect("route fixture is an object")
        .remove("restStops");
    let payload = json!([route_json("Harbourfront", 1), second]);
    install(generator, StubRouteGenerator::with_text(payload.to_string()));
}

#[given("a route service that cannot be reached")]
fn service_unreachable(#[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>) {
    install(
        generator,
        StubRouteGenerator::with_error(GenerationError::Network {
            url: "https://generativelanguage.googleapis.com".to_owned(),
            message: "connection refused".to_owned(),
        }),
    );
}

// --- When steps ---

#[when("I plan a walk from Central Pier to Victoria Park")]
fn plan_walk(
    #[from(generator)] generator: &RefCell<Option<StubRouteGenerator>>,
    #[from(result)] result: &ResultCell,
) {
    let guard = generator.borrow();
    let stub = guard.as_ref().expect("generator must be initialised");
    let request =
        PlanRequest::new("Central Pier", "Victoria Park", 1.5).expect("request should build");
    *result.borrow_mut() = Some(RoutePlanner::new(stub).plan(&request));
}

// --- Then steps ---

#[then("two routes are returned in service order")]
fn then_two_routes(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let routes = borrowed
        .as_ref()
        .expect("plan should have run")
        .as_ref()
        .expect("expected routes");
    let names: Vec<_> = routes.iter().map(|r| r.route_name.as_str()).collect();
    assert_eq!(names, ["Harbourfront", "Inland"]);
}

#[then("the plan fails because the response was empty")]
fn then_empty(#[from(result)] result: &ResultCell) {
    expect_kind(result, RoutingErrorKind::EmptyResponse);
}

#[then("the plan fails because the response was malformed")]
fn then_malformed(#[from(result)] result: &ResultCell) {
    expect_kind(result, RoutingErrorKind::MalformedResponse);
}

#[then("the plan fails because no routes were found")]
fn then_no_routes(#[from(result)] result: &ResultCell) {
    expect_kind(result, RoutingErrorKind::NoRoutesFound);
}

#[then("the plan fails naming route 1 and the restStops field")]
fn then_incomplete(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    match borrowed.as_ref().expect("plan should have run") {
        Err(RoutingError::IncompleteRouteData { index, defect }) => {
            assert_eq!(*index, 1);
            assert_eq!(defect.field, "restStops");
        }
        other => panic!("expected IncompleteRouteData, got {other:?}"),
    }
}

#[then("the plan fails with a transport failure")]
fn then_transport(#[from(result)] result: &ResultCell) {
    expect_kind(result, RoutingErrorKind::TransportFailure);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/plan_routes.feature", name = $title)]
        fn $fn_name(generator: RefCell<Option<StubRouteGenerator>>, result: ResultCell) {
            let _ = (generator, result);
        }
    };
}

register_scenario!(returns_validated_routes, "returning validated routes in service order");
register_scenario!(rejects_whitespace, "rejecting a whitespace-only response");
register_scenario!(rejects_non_json, "rejecting a response that is not JSON");
register_scenario!(rejects_empty_array, "rejecting an empty route list");
register_scenario!(rejects_missing_rest_stops, "rejecting a route without rest stops");
register_scenario!(surfaces_transport_failure, "surfacing a transport failure");
