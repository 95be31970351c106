use fleetpick_structs::Point;
use serde_json::{json, Value};

/// One simulated fleet unit. Robots drift toward their patrol goal while
/// draining battery, and recharge while parked at the dock.
pub struct RobotState {
    pub id: u64,
    pub curr_loc: Point,
    pub dock: Point,
    pub goal: Option<Point>,
    pub velocity: f32,
    pub battery_level: f32,
    pub drain_moving: f32,
    pub charge_idle: f32,
}

pub struct World {
    pub curr_time: f32,
    pub robots: Vec<RobotState>,
}

impl World {
    pub fn tiny() -> World {
        // Default hard-coded scenario setup

        let dock = Point { x: 0.0, y: 0.0 };

        let robots = vec![
            RobotState {
                id: 0,
                curr_loc: dock,
                dock,
                goal: Some(Point { x: 40.0, y: 30.0 }),
                velocity: 1.3,
                battery_level: 100.0,
                drain_moving: 0.11, // ~15 minutes of travel on full battery
                charge_idle: 0.5,
            },
            RobotState {
                id: 1,
                curr_loc: Point { x: 25.0, y: -10.0 },
                dock,
                goal: None,
                velocity: 1.3,
                battery_level: 60.0,
                drain_moving: 0.11,
                charge_idle: 0.5,
            },
        ];

        World {
            curr_time: 0.0,
            robots,
        }
    }

    pub fn warehouse() -> World {
        // Default hard-coded scenario setup

        let dock = Point { x: 180.0, y: 60.0 };

        let patrol = [
            Some(Point { x: 66.0, y: 300.0 }),
            Some(Point { x: 312.0, y: 260.0 }),
            Some(Point { x: 543.0, y: 350.0 }),
            None, // stays on the dock charging
            Some(Point { x: 118.0, y: 350.0 }),
        ];

        let robots = patrol
            .iter()
            .enumerate()
            .map(|(i, goal)| RobotState {
                id: i as u64,
                curr_loc: dock,
                dock,
                goal: *goal,
                velocity: 1.3,
                battery_level: 100.0 - 15.0 * i as f32,
                drain_moving: 0.11,
                charge_idle: 0.5,
            })
            .collect();

        World {
            curr_time: 0.0,
            robots,
        }
    }

    pub fn simulate(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.curr_time += dt;

        for robot in self.robots.iter_mut() {
            let target = match robot.goal {
                Some(goal) if robot.battery_level > 0.0 => goal,
                _ => robot.dock,
            };

            let dist = robot.curr_loc.dist(&target);
            let step = robot.velocity * dt;
            if dist <= step {
                robot.curr_loc = target;
            } else {
                robot.curr_loc.x += (target.x - robot.curr_loc.x) / dist * step;
                robot.curr_loc.y += (target.y - robot.curr_loc.y) / dist * step;
            }

            let parked = robot.curr_loc == robot.dock;
            if parked {
                robot.battery_level += robot.charge_idle * dt;
            } else {
                robot.battery_level -= robot.drain_moving * dt;
            }
            robot.battery_level = robot.battery_level.clamp(0.0, 100.0);
        }
    }

    /// Raw registry snapshot in the wire shape the dispatch service
    /// validates record by record.
    pub fn registry_records(&self) -> Vec<Value> {
        self.robots
            .iter()
            .map(|r| {
                json!({
                    "robotId": r.id,
                    "batteryLevel": r.battery_level,
                    "x": r.curr_loc.x,
                    "y": r.curr_loc.y,
                })
            })
            .collect()
    }
}
