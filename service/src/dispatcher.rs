use fleetpick_selector::select_closest_robot;
use fleetpick_structs::response::{ClosestRobotResponse, ReplyEnvelope};
use log::{info, warn};
use serde_json::Value;

use crate::parse_records::{collect_fleet, load_from_record};
use crate::registry::FleetRegistry;
use crate::schema::LOAD_RECORD;

/// Outcome classes of one dispatch request, mapped onto HTTP-compatible
/// status codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchStatus {
    /// Well-formed request, including the no-eligible-robot sub-case.
    Ok,
    /// Valid JSON that fails load-record validation.
    InvalidRequest,
    /// Request body is not parseable as JSON.
    UnsupportedMedia,
    /// The registry fetch failed.
    RegistryUnavailable,
}

impl DispatchStatus {
    pub fn code(&self) -> u16 {
        match self {
            DispatchStatus::Ok => 200,
            DispatchStatus::InvalidRequest => 400,
            DispatchStatus::UnsupportedMedia => 415,
            DispatchStatus::RegistryUnavailable => 500,
        }
    }
}

pub struct Reply {
    pub status: DispatchStatus,
    pub response: ClosestRobotResponse,
}

impl Reply {
    fn failed(status: DispatchStatus) -> Self {
        Reply {
            status,
            response: ClosestRobotResponse::empty(),
        }
    }

    pub fn envelope(&self) -> ReplyEnvelope {
        ReplyEnvelope {
            status: self.status.code(),
            response: self.response,
        }
    }
}

pub struct ClosestRobotService<R> {
    registry: R,
}

impl<R: FleetRegistry> ClosestRobotService<R> {
    pub fn new(registry: R) -> Self {
        ClosestRobotService { registry }
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Answer one closest-robot request. The registry is consulted only
    /// after the request itself has been validated, so a bad request gets
    /// the same answer no matter what state the registry is in.
    pub fn handle_request(&mut self, payload: &[u8]) -> Reply {
        let request: Value = match serde_json::from_slice(payload) {
            Ok(v) => v,
            Err(e) => {
                warn!("request body is not json: {}", e);
                return Reply::failed(DispatchStatus::UnsupportedMedia);
            }
        };

        if !LOAD_RECORD.validate(&request) {
            warn!("unsupported data supplied in request: {}", request);
            return Reply::failed(DispatchStatus::InvalidRequest);
        }

        let records = match self.registry.fetch() {
            Ok(records) => records,
            Err(e) => {
                warn!("{}", e);
                return Reply::failed(DispatchStatus::RegistryUnavailable);
            }
        };

        let load = load_from_record(&request);
        let fleet = collect_fleet(&records);

        match select_closest_robot(&fleet, &load) {
            Some(sel) => {
                info!(
                    "load {} -> robot {} (d={:.2}, batt={:.1})",
                    load.id, sel.robot.id, sel.distance_to_load, sel.robot.battery_level
                );
                Reply {
                    status: DispatchStatus::Ok,
                    response: ClosestRobotResponse::new(
                        sel.robot.id,
                        sel.distance_to_load,
                        sel.robot.battery_level,
                    ),
                }
            }
            None => {
                info!("load {}: no eligible robot in a fleet of {}", load.id, fleet.len());
                Reply {
                    status: DispatchStatus::Ok,
                    response: ClosestRobotResponse::empty(),
                }
            }
        }
    }
}
