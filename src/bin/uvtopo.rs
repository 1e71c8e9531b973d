use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use uvtopo::{ColorDef, Settings};

/// Render the UV layout of an FBX mesh to a PNG.
#[derive(Parser, Debug)]
#[command(name = "uvtopo", version)]
struct Cli {
    /// Settings JSON; explicit flags override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output image side length in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Input FBX (binary or ASCII).
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Background colour (#RRGGBB, #RRGGBBAA or a CSS name).
    #[arg(long)]
    bg: Option<ColorDef>,

    /// Interior edge colour.
    #[arg(long)]
    edge_color: Option<ColorDef>,

    /// Border edge colour.
    #[arg(long)]
    border_color: Option<ColorDef>,

    /// Vertex marker colour (with --draw-vertices).
    #[arg(long)]
    vertex_color: Option<ColorDef>,

    /// Fill colour for counter-clockwise faces.
    #[arg(long)]
    front_face_color: Option<ColorDef>,

    /// Fill colour for clockwise and degenerate faces.
    #[arg(long)]
    back_face_color: Option<ColorDef>,

    /// Draw a dot at every UV coordinate.
    #[arg(long)]
    draw_vertices: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_settings(&self) -> anyhow::Result<Settings> {
        let mut s = match &self.settings {
            Some(path) => Settings::from_json_path(path)?,
            None => Settings::default(),
        };

        if let Some(v) = self.size {
            s.size = v;
        }
        if let Some(v) = &self.file {
            s.file = v.clone();
        }
        if let Some(v) = &self.output {
            s.output = v.clone();
        }
        let colours = [
            (self.bg, &mut s.background_color),
            (self.edge_color, &mut s.edge_color),
            (self.border_color, &mut s.border_color),
            (self.vertex_color, &mut s.vertex_color),
            (self.front_face_color, &mut s.front_face_color),
            (self.back_face_color, &mut s.back_face_color),
        ];
        for (flag, slot) in colours {
            if let Some(c) = flag {
                *slot = c;
            }
        }
        if self.draw_vertices {
            s.draw_vertices = true;
        }
        Ok(s)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli.resolve_settings()?;
    let stats = uvtopo::render_file(&settings)
        .with_context(|| format!("render uv layout of '{}'", settings.file.display()))?;

    eprintln!(
        "wrote {} ({} faces, {} edges, {} border)",
        settings.output.display(),
        stats.faces,
        stats.edges,
        stats.border_edges
    );
    Ok(())
}
