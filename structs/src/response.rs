use serde::{Deserialize, Serialize};

/// Wire shape of a dispatch answer. All three fields are null both when no
/// eligible robot exists and on every failure path; the status code is what
/// distinguishes the failure classes.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct ClosestRobotResponse {
    #[serde(rename = "robotId")]
    pub robot_id: Option<u64>,
    #[serde(rename = "distanceToGoal")]
    pub distance_to_goal: Option<f32>,
    #[serde(rename = "batteryLevel")]
    pub battery_level: Option<f32>,
}

impl ClosestRobotResponse {
    pub fn new(robot_id: u64, distance_to_goal: f32, battery_level: f32) -> Self {
        ClosestRobotResponse {
            robot_id: Some(robot_id),
            distance_to_goal: Some(distance_to_goal),
            battery_level: Some(battery_level),
        }
    }

    pub fn empty() -> Self {
        ClosestRobotResponse {
            robot_id: None,
            distance_to_goal: None,
            battery_level: None,
        }
    }
}

/// Reply as published on the message transport. The status field carries
/// the HTTP-compatible code (200/400/415/500) since the transport has no
/// status line of its own.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct ReplyEnvelope {
    pub status: u16,
    pub response: ClosestRobotResponse,
}
