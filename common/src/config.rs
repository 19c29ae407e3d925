use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Image format handed to the external renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    Png,
    Svg,
}

impl RenderFormat {
    /// The `-T` argument the renderer expects.
    pub fn renderer_flag(&self) -> &'static str {
        match self {
            RenderFormat::Png => "-Tpng",
            RenderFormat::Svg => "-Tsvg",
        }
    }

    /// File extension of the rendered image.
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RenderFormat::Png),
            "svg" => Ok(RenderFormat::Svg),
            other => Err(format!("unsupported render format: {other}")),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Per-run options threaded through the pipeline.
#[derive(Clone, Debug)]
pub struct Config {
    /// Suppression level for decorative output.
    ///
    /// 0 prints everything, 1 drops headers and summaries, 2 keeps only
    /// warnings and errors.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Stops the run after the graph description is written.
    pub no_render: bool,
    /// Format the external renderer is asked to produce.
    pub format: RenderFormat,
    /// Directory receiving the run's output files.
    pub out_dir: PathBuf,
}
