mod device;
mod error;
mod glyph;
mod grid;
mod renderer;
mod weather;

use std::sync::mpsc;

use anyhow::Context;
use log::{error, info};
use structopt::StructOpt;

use device::{LaunchpadOutput, MatchPolicy, NamePattern};
use grid::Launchpad;
use renderer::DigitRenderer;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "launchpad-thermometer",
    about = "Shows the current temperature of a city on a Launchpad."
)]
struct Opt {
    /// City to look up
    #[structopt(default_value = "Paris")]
    city: String,

    /// MIDI output port name to look for
    #[structopt(long, default_value = "Launchpad")]
    device: String,

    /// How the port name is compared: exact or substring
    #[structopt(long = "match", default_value = "substring", possible_values = &["exact", "substring"])]
    policy: MatchPolicy,

    /// Weather URL, `{city}` is replaced by the city name [default: http://wttr.in/{city}?format=%t]
    #[structopt(long)]
    url: Option<String>,

    /// Exit right after drawing instead of waiting for Ctrl-C
    #[structopt(long)]
    no_wait: bool,

    /// List MIDI output ports and exit
    #[structopt(long)]
    list_devices: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    if opt.list_devices {
        for name in device::output_names()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let pattern = NamePattern {
        pattern: opt.device.clone(),
        policy: opt.policy,
    };
    let mut launchpad = LaunchpadOutput::open(&pattern).context("could not open the Launchpad")?;

    let url = opt.url.as_deref().unwrap_or(weather::DEFAULT_URL);
    let temperature = weather::fetch_temperature(url, &opt.city).unwrap_or_else(|e| {
        error!("could not read temperature for {}: {}", opt.city, e);
        String::new()
    });
    println!("{}", temperature);

    Launchpad::clear(&mut launchpad);
    DigitRenderer.draw(&temperature, &mut launchpad);
    info!("drew {:?} on {}", temperature, launchpad.name());

    if opt.no_wait {
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("failed to install signal handler")?;

    rx.recv().context("signal channel closed")?;
    info!("shutting down");
    Launchpad::clear(&mut launchpad);

    Ok(())
}
