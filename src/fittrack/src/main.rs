#[macro_use]
extern crate log;

use fittrack_algos::Session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let packages: [(&str, Vec<f64>); 3] = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, readings) in packages {
        debug!("decoding `{}` package with {} readings", code, readings.len());
        let session = Session::decode(code, &readings)?;
        println!("{}", session.summary());
    }

    Ok(())
}
