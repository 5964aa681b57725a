use anyhow::Result;
use clap::Parser;
use mixtape::{LogSink, Playable, Playlist, Track};

#[derive(Parser, Debug)]
#[command(name = "mixtape")]
#[command(about = "Build and play a sample nested playlist", long_about = None)]
struct Args {
    /// Playback speed applied to the whole tree
    #[arg(short = 's', long, default_value = "0.25")]
    speed: f32,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut rock = Playlist::new("Rock")?;
    rock.add(Track::new("Nothing else matters")?.into_handle())?;
    rock.add(Track::new("Sultans of swing")?.into_handle())?;

    let mut study = Playlist::new("Study")?;
    study.add(Track::new("Design Patterns")?.into_handle())?;
    study.add(Track::new("Software Architecture")?.into_handle())?;
    study.add(rock.into_handle())?;

    study.set_playback_speed(args.speed)?;

    log::info!(
        "Playing playlist '{}' ({} entries) at {}x",
        study.name(),
        study.len(),
        args.speed
    );

    let mut sink = LogSink::new();
    study.play(&mut sink);

    Ok(())
}
