use cubelog::prelude::*;
use cubelog::{scan, scramble};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cubelog", version, about = "Scrambles, cube states and face scans for a speedcubing log")]
struct Cli {
    /// JSON file overriding scanner and classifier settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random scramble.
    Scramble {
        #[arg(short, long, default_value_t = scramble::DEFAULT_LENGTH)]
        length: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a scramble to a solved cube and show the result.
    Show {
        scramble: String,
        /// Also write the net as an image.
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long, default_value_t = 24)]
        cell: u32,
    },
    /// Scan one image per face, in U R F B L D order, and derive a scramble.
    Scan {
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Derive a scramble from six 9-letter faces (w r g b o y).
    Derive {
        #[arg(num_args = 6, required = true)]
        faces: Vec<String>,
    },
    /// Check that a scramble uses strict notation.
    Check { scramble: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).env().init()?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Scramble {
            length,
            seed: Some(seed),
        } => {
            use rand::SeedableRng;
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            println!("{}", Scramble::generate(length, &mut rng));
        }

        Command::Scramble { length, seed: None } => {
            println!("{}", scramble::generate(length));
        }

        Command::Show { scramble, png, cell } => {
            let cube = Cube::solved().apply_scramble(&scramble);
            print!("{}", cube);
            if let Some(path) = png {
                render_net(&cube, cell.max(2)).save(&path)?;
                log::info!("Wrote net to {}", path.display());
            }
        }

        Command::Scan { images } => {
            let colors = scan_images(images, config.scan)?;
            report_derived(&colors)?;
        }

        Command::Derive { faces } => {
            let colors = to_color_state(&parse_color_state(&faces)?)?;
            report_derived(&colors)?;
        }

        Command::Check { scramble } => {
            let moves = Move::parse_sequence(&scramble)?;
            println!("ok: {} moves", moves.len());
        }
    }

    Ok(())
}

/// Feeds still images to the scanner until every face is accepted. A
/// rejected face is retried with the next image.
fn scan_images(images: Vec<PathBuf>, config: ScanConfig) -> anyhow::Result<ColorState> {
    use scan::{ScanCommand, ScanEvent, Scanner, StillCamera};

    let frames = images.len();
    let mut scanner = Scanner::new(StillCamera::new(images), config);

    match scanner.handle(ScanCommand::Start) {
        ScanEvent::Started { next } => log::info!("Show face {}", next),
        ScanEvent::Failed(e) => return Err(e.into()),
        other => anyhow::bail!("Unexpected scanner event {:?}", other),
    }

    for _ in 0..frames {
        match scanner.handle(ScanCommand::Sample) {
            ScanEvent::Accepted { face, next } => {
                log::info!("Face {} done, show face {}", face, next)
            }
            ScanEvent::Rejected { face, reason } => {
                log::warn!("Scan invalid for face {} ({}), retrying", face, reason)
            }
            ScanEvent::Completed(colors) => {
                return match validate(&colors) {
                    Ok(()) => Ok(colors),
                    Err(e) => {
                        scanner.handle(ScanCommand::Stop);
                        Err(anyhow::anyhow!("{}, rescan from face {}", e, Face::Up))
                    }
                };
            }
            ScanEvent::Failed(e) => return Err(e.into()),
            other => anyhow::bail!("Unexpected scanner event {:?}", other),
        }
    }

    let missing = scanner.expected_face();
    scanner.handle(ScanCommand::Stop);
    anyhow::bail!(
        "Ran out of images, face {} not scanned",
        missing.map(|f| f.to_string()).unwrap_or_default()
    )
}

fn report_derived(colors: &ColorState) -> anyhow::Result<()> {
    let scramble = derive(colors)?;
    println!("{}", scramble);

    if scramble != NO_SCRAMBLE {
        print!("{}", Cube::solved().apply_scramble(&scramble));
    }
    Ok(())
}
