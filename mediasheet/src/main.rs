use clap::Parser;
use log::info;
use mediasheet_lib::config::MediaConfig;
use mediasheet_lib::host::{MemorySurface, Size};
use mediasheet_lib::reactor::{Emission, MediaQueryReactor, TickOutcome};
use mediasheet_lib::style::compiler::{LightningCompiler, RawCompiler, StylesheetCompiler};
use std::path::PathBuf;

const MEDIASHEET_INTRO: &str = "mediasheet - live @media width evaluation";

#[derive(Parser)]
#[command(name = "mediasheet")]
#[command(about = "Replay container widths over stylesheets and print the generated media sheet")]
struct Args {
    /// Stylesheet files, in attachment order. The first is the base sheet.
    #[arg(required = true)]
    stylesheets: Vec<PathBuf>,

    /// Container width for each tick, e.g. `800,600,600`.
    #[arg(short, long, value_delimiter = ',', default_values_t = [1024.0])]
    widths: Vec<f32>,

    /// Container height, held constant.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Pixels per rem.
    #[arg(long, default_value_t = mediasheet_lib::config::DEFAULT_REM_PX)]
    rem_px: f32,

    /// Leading stylesheets that are not scanned for @media blocks.
    #[arg(long, default_value_t = 1)]
    base_sheets: usize,

    /// Attach the concatenated rule bodies without running them through LightningCSS.
    #[arg(long, conflicts_with = "minify")]
    raw: bool,

    /// Minify the generated sheet.
    #[arg(long)]
    minify: bool,
}

fn main() {
    env_logger::init();
    println!("{}", MEDIASHEET_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();

    for path in &args.stylesheets {
        if !path.is_file() {
            eprintln!("Error reading stylesheet: {} is not a file", path.display());
            std::process::exit(1);
        }
    }

    let config = MediaConfig::new()
        .with_rem_px(args.rem_px)
        .with_base_sheets(args.base_sheets);
    let generated_name = config.generated_name.clone();

    let compiler: Box<dyn StylesheetCompiler> = if args.raw {
        Box::new(RawCompiler)
    } else if args.minify {
        Box::new(LightningCompiler::minified())
    } else {
        Box::new(LightningCompiler::new())
    };

    let first_width = args.widths.first().copied().unwrap_or(1024.0);
    let mut surface = MemorySurface::new(Size::new(first_width, args.height));
    for path in &args.stylesheets {
        surface.add_file(path.clone());
    }

    let mut reactor = MediaQueryReactor::with_config(compiler, config);
    info!("replaying {} ticks", args.widths.len());

    let mut had_failure = false;
    for (tick, width) in args.widths.iter().enumerate() {
        surface.set_width(*width);
        let outcome = reactor.on_tick(&mut surface);

        let emission = match &outcome {
            TickOutcome::Initialized(emission) | TickOutcome::Applied(emission) => emission,
            TickOutcome::Resizing => {
                println!("tick {} @ {}px: resizing", tick, width);
                continue;
            }
            TickOutcome::Idle => {
                println!("tick {} @ {}px: unchanged", tick, width);
                continue;
            }
        };

        match emission {
            Emission::Cleared => println!("tick {} @ {}px: no active rules", tick, width),
            Emission::Attached { rules } => {
                println!("tick {} @ {}px: {} active rules", tick, width, rules);
                if let Some(artifact) = surface.generated(&generated_name) {
                    println!("{}", artifact.css.trim_end());
                }
            }
            Emission::Skipped { reason, .. } => {
                eprintln!("tick {} @ {}px: skipped: {}", tick, width, reason);
                had_failure = true;
            }
        }
    }

    if had_failure {
        std::process::exit(1);
    }
}
