use fleetpick_structs::{Load, Robot};
use log::debug;
use ordered_float::OrderedFloat;

/// Radius within which battery level outranks the remaining distance
/// difference. Inclusive boundary.
pub const DISTANCE_WINDOW: f32 = 10.0;

/// One scored robot out of a selection run. The distance lives here, not on
/// the robot, so a shared fleet snapshot is never mutated and the same
/// `Robot` value can be scored by concurrent selections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub robot: Robot,
    pub distance_to_load: f32,
}

/// Pick the robot to dispatch for `load`, or `None` when no robot has a
/// positive battery level.
///
/// Robots are ranked by distance to the load (stable, so exact ties keep
/// input order). Within `DISTANCE_WINDOW` of the load the highest battery
/// level wins instead, ties going to the nearer robot; outside the window
/// the globally nearest eligible robot is the fallback.
pub fn select_closest_robot(robots: &[Robot], load: &Load) -> Option<Selection> {
    // The load must come out of the validation layer. A malformed load is a
    // caller bug, not a "no robot found" outcome.
    assert!(
        load.loc.x.is_finite() && load.loc.y.is_finite(),
        "select_closest_robot called with unvalidated load {:?}",
        load
    );

    let mut ranked: Vec<Selection> = robots
        .iter()
        .map(|r| Selection {
            robot: *r,
            distance_to_load: r.loc.dist(&load.loc),
        })
        .filter(|s| s.robot.battery_level > 0.0)
        .collect();
    ranked.sort_by_key(|s| OrderedFloat(s.distance_to_load));

    if ranked.is_empty() {
        return None;
    }

    let window_len = ranked
        .iter()
        .take_while(|s| s.distance_to_load <= DISTANCE_WINDOW)
        .count();

    // Head of the ranked list is both the fallback when the window is empty
    // and the initial best when it is not. Only a strictly greater battery
    // level displaces it.
    let mut best = 0;
    for i in 1..window_len {
        if ranked[i].robot.battery_level > ranked[best].robot.battery_level {
            best = i;
        }
    }

    debug!(
        "selected robot {} for load {} (d={:.2}, batt={:.1}, window={}/{})",
        ranked[best].robot.id,
        load.id,
        ranked[best].distance_to_load,
        ranked[best].robot.battery_level,
        window_len,
        ranked.len()
    );

    Some(ranked.swap_remove(best))
}
