use fleetpick_structs::{Load, Point, Robot};
use log::debug;
use serde_json::Value;

use crate::schema::ROBOT_RECORD;

/// Direct field copy of a validated load record. Calling this on a record
/// that did not pass `LOAD_RECORD` validation is a contract violation and
/// panics.
pub fn load_from_record(record: &Value) -> Load {
    Load {
        id: record["loadId"].as_u64().expect("load record not validated"),
        loc: point_from_record(record),
    }
}

/// Direct field copy of a validated robot record. Same precondition as
/// `load_from_record`, against `ROBOT_RECORD`.
pub fn robot_from_record(record: &Value) -> Robot {
    Robot {
        id: record["robotId"].as_u64().expect("robot record not validated"),
        battery_level: record["batteryLevel"]
            .as_f64()
            .expect("robot record not validated") as f32,
        loc: point_from_record(record),
    }
}

fn point_from_record(record: &Value) -> Point {
    Point {
        x: record["x"].as_f64().expect("record not validated") as f32,
        y: record["y"].as_f64().expect("record not validated") as f32,
    }
}

/// Validate each raw registry record independently and map the survivors,
/// preserving input order. A malformed record only removes itself from the
/// candidate set; the caller never sees the failure.
pub fn collect_fleet(records: &[Value]) -> Vec<Robot> {
    let mut fleet = Vec::with_capacity(records.len());
    for record in records {
        if ROBOT_RECORD.validate(record) {
            fleet.push(robot_from_record(record));
        } else {
            debug!("dropping malformed robot record {}", record);
        }
    }
    fleet
}
