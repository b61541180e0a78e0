//! Shows the engagement invitation in the terminal.

use anyhow::Context;
use clap::Parser;
use invitation::color::Color;
use invitation::error::InvitationError;
use invitation::hearts::{HeartField, Viewport};
use invitation::location::{DeniedLocation, FixedLocation, LocationProvider, NoLocation};
use invitation::{InvitationConfig, InvitationFlow};
use invitation_types::geo::impls::GeoPoint2d;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invitation")]
#[command(about = "Shows the engagement invitation card.")]
struct CommandLine {
    /// Latitude of the guest in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude of the guest in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Act as if the guest refused to share the location
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    deny_location: bool,
    /// Guest name. Asked interactively if omitted
    #[arg(long)]
    name: Option<String>,
    /// JSON file with the invitation texts
    #[arg(long)]
    config: Option<PathBuf>,
    /// Draw the hearts as they are the given number of seconds into the animation
    #[arg(long)]
    hearts: Option<f64>,
    /// Seed for the hearts layout
    #[arg(long)]
    seed: Option<u64>,
    /// Width of the hearts frame in characters
    #[arg(long, default_value_t = 60)]
    cols: usize,
    /// Height of the hearts frame in characters
    #[arg(long, default_value_t = 16)]
    rows: usize,
    /// Print without colors
    #[arg(long)]
    plain: bool,
}

impl CommandLine {
    fn location_provider(&self) -> anyhow::Result<Box<dyn LocationProvider>> {
        if self.deny_location {
            return Ok(Box::new(DeniedLocation));
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                let position = GeoPoint2d::try_latlon(lat, lon)?;
                Ok(Box::new(FixedLocation(position)))
            }
            _ => Ok(Box::new(NoLocation)),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = CommandLine::parse();
    let config = match &args.config {
        Some(path) => InvitationConfig::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => InvitationConfig::default(),
    };

    let mut flow = InvitationFlow::new();

    println!("{}", config.title);
    println!("Requesting location permission...");
    let provider = args.location_provider()?;
    flow.locate(provider.as_ref()).await?;

    match &args.name {
        Some(name) => flow.submit_name(name)?,
        None => ask_name(&mut flow)?,
    }

    let card = flow.invitation(&config)?;
    println!();
    println!("{card}");

    if let Some(t) = args.hearts {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let viewport = Viewport::new(args.cols as f64 * 16.0, args.rows as f64 * 32.0);
        let field = HeartField::generate(
            config.hearts.count,
            viewport,
            &config.hearts.palette,
            &mut rng,
        );

        println!();
        println!(
            "{}",
            field.render(t, args.cols, args.rows, Color::LAVENDER, !args.plain)
        );
    }

    Ok(())
}

fn ask_name(flow: &mut InvitationFlow) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter your name: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("no name was entered");
        };

        match flow.submit_name(&line?) {
            Ok(()) => return Ok(()),
            Err(InvitationError::EmptyName) => continue,
            Err(err) => return Err(err.into()),
        }
    }
}
