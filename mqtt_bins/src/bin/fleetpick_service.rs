use fleetpick_service::dispatcher::ClosestRobotService;
use fleetpick_service::registry::{FleetRegistry, RegistryError};
use paho_mqtt::Message;
use serde_json::Value;

const FLEET_TOPIC: &str = "/fleetpick/fleet";
const REQUEST_TOPIC: &str = "/fleetpick/closest/request";
const REPLY_TOPIC: &str = "/fleetpick/closest/reply";

/// Serves the most recent fleet snapshot seen on the fleet topic. Until the
/// first snapshot arrives every fetch reports the registry as unavailable.
struct SnapshotRegistry {
    latest: Option<Vec<Value>>,
}

impl FleetRegistry for SnapshotRegistry {
    fn fetch(&mut self) -> Result<Vec<Value>, RegistryError> {
        match &self.latest {
            Some(records) => Ok(records.clone()),
            None => Err(RegistryError::Unavailable(
                "no fleet snapshot received yet".to_string(),
            )),
        }
    }
}

fn main() {
    env_logger::init();
    let uri =
        std::env::var("MQTT_URI").unwrap_or_else(|_| "mqtt://localhost:1883".to_string());

    println!("connecting");
    let mqtt_opts = paho_mqtt::CreateOptionsBuilder::new()
        .server_uri(uri.as_str())
        .finalize();
    let mqtt_cli = paho_mqtt::Client::new(mqtt_opts).unwrap();
    let conn_opts = paho_mqtt::ConnectOptionsBuilder::new()
        .keep_alive_interval(std::time::Duration::from_secs(20))
        .finalize();
    mqtt_cli.connect(conn_opts).unwrap();
    mqtt_cli.subscribe(FLEET_TOPIC, 1).unwrap();
    mqtt_cli.subscribe(REQUEST_TOPIC, 1).unwrap();
    let mqtt_rx = mqtt_cli.start_consuming();

    let mut service = ClosestRobotService::new(SnapshotRegistry { latest: None });

    println!("fleetpick_service main loop starting.");
    for msg in mqtt_rx.iter().flatten() {
        if msg.topic() == FLEET_TOPIC {
            match serde_json::from_slice::<Vec<Value>>(msg.payload()) {
                Ok(records) => {
                    service.registry_mut().latest = Some(records);
                }
                Err(e) => {
                    println!("WARNING: received malformed fleet snapshot {:?}", e);
                }
            }
        } else if msg.topic() == REQUEST_TOPIC {
            let reply = service.handle_request(msg.payload());
            println!("request -> {:?} {:?}", reply.status, reply.response);
            mqtt_cli
                .publish(Message::new(
                    REPLY_TOPIC,
                    serde_json::to_string(&reply.envelope()).unwrap(),
                    1,
                ))
                .unwrap();
        } else {
            panic!("unknown topic {}", msg.topic());
        }
    }
}
