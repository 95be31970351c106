use fleetpick_structs::{Load, Point, Robot};

use crate::closest::{select_closest_robot, DISTANCE_WINDOW};

fn robot(id: u64, battery_level: f32, x: f32, y: f32) -> Robot {
    Robot {
        id,
        battery_level,
        loc: Point { x, y },
    }
}

fn load(id: u64, x: f32, y: f32) -> Load {
    Load {
        id,
        loc: Point { x, y },
    }
}

#[test]
pub fn distance_is_symmetric_and_zero_on_self() {
    let a = Point { x: 1.0, y: 2.0 };
    let b = Point { x: 4.0, y: 6.0 };
    assert_eq!(a.dist(&b), 5.0);
    assert_eq!(b.dist(&a), 5.0);
    assert_eq!(a.dist(&a), 0.0);
}

#[test]
pub fn battery_overrides_distance_inside_window() {
    let _ = env_logger::try_init();
    // Load at (0,10). A at the load (batt 20), B 5 away (batt 50), C 12
    // away (batt 100). C is outside the window, so B wins on battery.
    let l = load(7, 0.0, 10.0);
    let fleet = [
        robot(1, 20.0, 0.0, 10.0),
        robot(2, 50.0, 0.0, 5.0),
        robot(3, 100.0, 0.0, -2.0),
    ];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.robot.id, 2);
    assert_eq!(sel.distance_to_load, 5.0);
}

#[test]
pub fn nearest_wins_outside_window() {
    let _ = env_logger::try_init();
    // Everybody is farther than the window; pure distance ranking applies
    // no matter the battery levels.
    let l = load(0, 0.0, 0.0);
    let fleet = [
        robot(10, 100.0, 30.0, 0.0),
        robot(11, 20.0, 20.0, 0.0),
        robot(12, 100.0, 40.0, 0.0),
    ];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.robot.id, 11);
    assert_eq!(sel.distance_to_load, 20.0);
}

#[test]
pub fn empty_fleet_selects_nothing() {
    let _ = env_logger::try_init();
    assert!(select_closest_robot(&[], &load(1, 0.0, 0.0)).is_none());
}

#[test]
pub fn drained_fleet_selects_nothing() {
    let _ = env_logger::try_init();
    // Both robots are right next to the load, but neither can move.
    let l = load(1, 0.0, 0.0);
    let fleet = [robot(1, 0.0, 0.1, 0.0), robot(2, 0.0, 0.0, 0.1)];
    assert!(select_closest_robot(&fleet, &l).is_none());
}

#[test]
pub fn single_eligible_robot_always_selected() {
    let _ = env_logger::try_init();
    let l = load(1, 0.0, 0.0);
    let fleet = [robot(9, 1.0, 1000.0, 0.0)];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.robot.id, 9);
    assert_eq!(sel.distance_to_load, 1000.0);
}

#[test]
pub fn window_boundary_is_inclusive() {
    let _ = env_logger::try_init();
    // A robot exactly DISTANCE_WINDOW away is a window member, so its
    // bigger battery displaces the nearer one.
    let l = load(1, 0.0, 0.0);
    let fleet = [
        robot(1, 10.0, 1.0, 0.0),
        robot(2, 100.0, DISTANCE_WINDOW, 0.0),
    ];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.robot.id, 2);
    assert_eq!(sel.distance_to_load, DISTANCE_WINDOW);
}

#[test]
pub fn battery_tie_keeps_nearer_robot() {
    let _ = env_logger::try_init();
    let l = load(1, 0.0, 0.0);
    let fleet = [robot(2, 50.0, 8.0, 0.0), robot(1, 50.0, 2.0, 0.0)];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.robot.id, 1);
}

#[test]
pub fn exact_distance_tie_keeps_input_order() {
    let _ = env_logger::try_init();
    // Same spot, same battery: the earlier robot in the input wins, both
    // inside and outside the window.
    let l = load(1, 0.0, 0.0);
    let far = [robot(4, 30.0, 20.0, 0.0), robot(5, 30.0, -20.0, 0.0)];
    assert_eq!(select_closest_robot(&far, &l).unwrap().robot.id, 4);

    let near = [robot(6, 30.0, 3.0, 0.0), robot(7, 30.0, -3.0, 0.0)];
    assert_eq!(select_closest_robot(&near, &l).unwrap().robot.id, 6);
}

#[test]
pub fn robot_at_load_location_has_distance_zero() {
    let _ = env_logger::try_init();
    let l = load(1, 3.0, 4.0);
    let fleet = [robot(1, 40.0, 3.0, 4.0)];
    let sel = select_closest_robot(&fleet, &l).unwrap();
    assert_eq!(sel.distance_to_load, 0.0);
}

#[test]
pub fn duplicate_robots_are_allowed() {
    let _ = env_logger::try_init();
    let l = load(1, 0.0, 0.0);
    let r = robot(1, 50.0, 2.0, 0.0);
    let sel = select_closest_robot(&[r, r], &l).unwrap();
    assert_eq!(sel.robot.id, 1);
}

#[test]
#[should_panic(expected = "unvalidated load")]
pub fn non_finite_load_is_a_caller_bug() {
    let l = load(1, f32::NAN, 0.0);
    let _ = select_closest_robot(&[robot(1, 50.0, 0.0, 0.0)], &l);
}
