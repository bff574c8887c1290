use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchboard::Config;
use sketchboard::draw::ImageFormat;
use sketchboard::export;
use sketchboard::input::BoardState;
use sketchboard::script::{self, Script};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, about = "Raster drawing board driven by replayable gesture scripts")]
struct Cli {
    /// Gesture script (JSON) to replay onto a fresh board
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the PNG (defaults to the configured save directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Board width in pixels (overrides config)
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(i32).range(1..))]
    width: Option<i32>,

    /// Board height in pixels (overrides config)
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(i32).range(1..))]
    height: Option<i32>,

    /// Config file to use instead of ~/.config/sketchboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also print the result as a data:image/png URL
    #[arg(long, action = ArgAction::SetTrue)]
    data_url: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        // No script: show usage
        println!("sketchboard: Raster drawing board driven by replayable gesture scripts");
        println!();
        println!("Usage:");
        println!("  sketchboard --script <FILE> [--output <FILE>] [--width PX --height PX]");
        println!("  sketchboard --help      Show help");
        println!();
        println!("Script steps: select, down, move, up, leave, text, undo, redo, reset,");
        println!("              resize, load");
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let width = cli.width.unwrap_or(config.surface.width);
    let height = cli.height.unwrap_or(config.surface.height);
    let bytes = render(&config, script_path, width, height)?;

    let written = match cli.output {
        Some(path) => {
            fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        None => export::save_image(&bytes, &config.file_save_config())?,
    };
    log::info!("Wrote {}", written.display());

    if cli.data_url {
        println!("{}", export::to_data_url(&bytes, ImageFormat::Png));
    } else {
        println!("{}", written.display());
    }

    Ok(())
}

/// Replays the script onto a new board and returns the encoded PNG.
fn render(config: &Config, script_path: &Path, width: i32, height: i32) -> anyhow::Result<Vec<u8>> {
    let script = Script::load(script_path)?;
    let mut board = BoardState::with_font(width, height, config.font())?;
    let mut selection = config.tool_selection();

    let base_dir = script_path.parent().unwrap_or_else(|| Path::new("."));
    script::run(&mut board, &mut selection, &script, base_dir)?;

    if !board.is_idle() {
        log::warn!("Script ended mid-gesture; discarding the unfinished gesture");
        board.cancel_gesture();
    }

    Ok(board.encode(ImageFormat::Png)?)
}
