use fleetpick_sim::World;
use paho_mqtt::Message;

fn main() {
    env_logger::init();
    let uri =
        std::env::var("MQTT_URI").unwrap_or_else(|_| "mqtt://localhost:1883".to_string());

    let mqtt_opts = paho_mqtt::CreateOptionsBuilder::new()
        .server_uri(uri.as_str())
        .finalize();
    let mqtt_cli = paho_mqtt::Client::new(mqtt_opts).unwrap();
    let conn_opts = paho_mqtt::ConnectOptionsBuilder::new()
        .keep_alive_interval(std::time::Duration::from_secs(20))
        .finalize();
    mqtt_cli.connect(conn_opts).unwrap();

    let mut world = World::warehouse();
    let mut last_updated = std::time::Instant::now();
    let publish_interval = std::time::Duration::from_millis(500);

    println!("fleetpick_sim main loop starting.");
    loop {
        let dt = last_updated.elapsed().as_secs_f32();
        last_updated = std::time::Instant::now();
        world.simulate(dt);

        let records = world.registry_records();
        mqtt_cli
            .publish(Message::new(
                "/fleetpick/fleet",
                serde_json::to_string(&records).unwrap(),
                1,
            ))
            .unwrap();

        std::thread::sleep(publish_interval);
    }
}
