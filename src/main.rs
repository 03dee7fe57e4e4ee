//! RoomTint native driver
//!
//! Uploads a room photo, segments it, applies the requested segment colors
//! and writes the recolored preview to disk.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;
    use roomtint::api::{HttpCollaborator, UploadFile};
    use roomtint::config::{AppConfig, LogLevel};
    use roomtint::model::{Color, DisplayedImage, SegmentIndex};
    use roomtint::{Message, Session};

    #[derive(Parser, Debug)]
    #[command(
        name = "roomtint",
        version,
        about = "Recolor the walls, floor and other segments of a room photo"
    )]
    pub struct Cli {
        /// Room photo to upload
        image: PathBuf,
        /// Segmentation service base URL (overrides the config file)
        #[arg(long)]
        server: Option<String>,
        /// Segment color as INDEX=HEX, zero-based index (repeatable)
        #[arg(long = "color", value_name = "INDEX=HEX", value_parser = parse_color_arg)]
        colors: Vec<ColorArg>,
        /// Where to write the recolored preview (overrides the config file)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Configuration file (default: platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Log level: error, warn, info, debug or trace
        #[arg(long, value_parser = parse_log_level)]
        log_level: Option<LogLevel>,
        /// Only list the segments, do not recolor
        #[arg(long)]
        list: bool,
    }

    /// One `--color INDEX=HEX` argument.
    #[derive(Debug, Clone, Copy)]
    pub struct ColorArg {
        index: SegmentIndex,
        color: Color,
    }

    fn parse_color_arg(arg: &str) -> Result<ColorArg, String> {
        let (index, hex) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected INDEX=HEX, got {arg:?}"))?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| format!("invalid segment index {index:?}"))?;
        let color = Color::from_hex(hex.trim()).map_err(|e| e.to_string())?;
        Ok(ColorArg { index, color })
    }

    fn parse_log_level(name: &str) -> Result<LogLevel, String> {
        LogLevel::from_name(name).ok_or_else(|| format!("unknown log level {name:?}"))
    }

    fn init_logging(level: LogLevel) {
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .init();
    }

    pub fn run(cli: Cli) -> Result<()> {
        let config = match &cli.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AppConfig::load_from_default_path().unwrap_or_default(),
        };
        init_logging(cli.log_level.unwrap_or(config.preferences.log_level));

        let base_url = cli.server.as_deref().unwrap_or(config.service.base_url.as_str());
        let api = HttpCollaborator::new(base_url, config.service.timeout())?;
        log::info!("Using segmentation service at {}", api.base_url());

        let mut session = Session::new();

        let file = UploadFile::from_path(&cli.image)
            .with_context(|| format!("reading {}", cli.image.display()))?;
        session.run(Message::UploadRequested(file), &api)?;
        session.run(Message::ProcessRequested, &api)?;

        for row in session.segment_rows() {
            println!("{:>3}  {}", row.index, row.label);
        }
        if cli.list {
            return Ok(());
        }

        // Reject bad indices before touching the session
        let count = session.registry().len();
        if let Some(bad) = cli.colors.iter().find(|arg| arg.index >= count) {
            bail!(
                "segment index {} is out of range, the photo has {} segments",
                bad.index,
                count
            );
        }

        for arg in &cli.colors {
            session.update(Message::SegmentSelected(arg.index))?;
            session.update(Message::HexEdited(arg.color.to_hex()))?;
            session.update(Message::ApplyToSegment)?;
            println!("Segment {} -> {}", arg.index + 1, arg.color);
        }

        session.run(Message::ApplyAllRequested, &api)?;

        let DisplayedImage::Composite(png) = session.displayed_image() else {
            bail!("service did not return a recolored image");
        };
        let out = cli
            .out
            .unwrap_or_else(|| PathBuf::from(&config.preferences.output_path));
        let bytes = png.decode().context("decoding recolored image")?;
        std::fs::write(&out, bytes).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
        Ok(())
    }

}

// WASM builds embed the library in a web adapter instead
#[cfg(target_arch = "wasm32")]
fn main() {}
