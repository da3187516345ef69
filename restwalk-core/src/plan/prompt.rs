//! Natural-language instruction sent to the route generation service.

use super::PlanRequest;

/// Region the planner persona specialises in unless configured otherwise.
pub const DEFAULT_REGION: &str = "Hong Kong";

/// Number of distinct routes requested from the generator.
pub const REQUESTED_ROUTES: usize = 2;

/// Compose the instruction for `request`.
///
/// # Examples
/// ```
/// use restwalk_core::PlanRequest;
/// use restwalk_core::plan::compose_instruction;
///
/// let request = PlanRequest::new("Central Pier", "Victoria Park", 1.5)?;
/// let text = compose_instruction(&request, "Hong Kong");
/// assert!(text.contains("\"Central Pier\""));
/// assert!(text.contains("every 1.5 km"));
/// # Ok::<(), restwalk_core::PlanRequestError>(())
/// ```
#[must_use]
pub fn compose_instruction(request: &PlanRequest, region: &str) -> String {
    format!(
        "You are an expert walking-route planner for {region}. Plan walking routes for a user.\n\
         \n\
         Find {count} distinct walking routes in {region} from \"{origin}\" to \"{destination}\", \
         following these requirements:\n\
         \n\
         1. Route count: provide exactly {count} different walking routes.\n\
         2. Rest stops: on each route, place a sensible rest stop (for example a park, \
         cafe, or public bench) roughly every {interval} km. For every rest stop give the \
         exact distance in kilometres from the previous point (the origin or the previous \
         rest stop), not the distance from the origin.\n\
         3. Output format: reply with strict JSON only, conforming to the supplied JSON \
         schema. Do not include Markdown syntax such as ```json fences. The JSON array must \
         contain {count} route objects.\n\
         4. Accuracy: give precise latitude and longitude coordinates so the path and rest \
         stops can be drawn on a map. The first path point must be the origin and the last \
         the destination. Routes should follow walkable ways such as pavements and park \
         trails.\n\
         \n\
         Generate the JSON output now.",
        count = REQUESTED_ROUTES,
        origin = request.origin(),
        destination = request.destination(),
        interval = request.rest_interval_km(),
    )
}
