use clap::{Arg, Command};
use ld06_driver::{run_driver, DEFAULT_FLUSH_CYCLES};
use serde::Serialize;

#[derive(Serialize)]
struct ScanFrame {
    /// Rotational speed in degrees per second.
    speed: f64,
    /// Cartesian scan points, sensor-centered.
    points: Vec<(f64, f64)>,
}

fn get_port_name() -> String {
    let matches = Command::new("LiDAR data receiver.")
        .about("Reads data from an LD06 LiDAR.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false)
                .required(true),
        )
        .get_matches();

    let port_name: &String = matches.get_one("port").unwrap();
    port_name.to_string()
}

fn main() {
    let port_name = get_port_name();

    let (driver_threads, batch_rx) = run_driver(&port_name, DEFAULT_FLUSH_CYCLES).unwrap();

    loop {
        let batch = match batch_rx.recv() {
            Ok(batch) => batch,
            Err(_) => break,
        };
        let points: Vec<(f64, f64)> = batch
            .angles_radian
            .iter()
            .zip(batch.distances.iter())
            .map(|(w, d)| {
                let x = d * f64::cos(*w - std::f64::consts::PI / 2.0);
                let y = d * f64::sin(*w - std::f64::consts::PI / 2.0);
                (x, y)
            })
            .collect();
        let frame = ScanFrame {
            speed: batch.speed,
            points,
        };
        println!("{}", serde_json::to_string(&frame).unwrap());
    }

    drop(driver_threads);
}
