use crate::error::{Error, Result};
use std::str::FromStr;

/// Layout orientation handed to the engine as `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    TopBottom,
    BottomTop,
    #[default]
    LeftRight,
    RightLeft,
}

impl Direction {
    pub fn as_rankdir(self) -> &'static str {
        match self {
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

/// Image formats the layout engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Jpg,
    Pdf,
}

impl OutputFormat {
    /// File extension, which doubles as the engine's `-T` renderer name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::Configuration {
                message: format!("the output format [{other}] is not supported by the layout engine"),
            }),
        }
    }
}

/// Edge routing mode (`splines`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineMode {
    #[default]
    Ortho,
    Spline,
    Polyline,
    Line,
    Curved,
}

impl SplineMode {
    pub fn as_dot(self) -> &'static str {
        match self {
            SplineMode::Ortho => "ortho",
            SplineMode::Spline => "spline",
            SplineMode::Polyline => "polyline",
            SplineMode::Line => "line",
            SplineMode::Curved => "curved",
        }
    }
}

/// Font, color, and spacing attributes applied to the whole diagram.
///
/// Sizes are in points and inches, matching what the engine expects. The
/// defaults are the upstream diagram-tooling house values; scripts override
/// individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub font_name: String,
    pub font_color: String,
    pub background: String,
    /// Font size of the diagram title (the graph label).
    pub title_font_size: u32,
    pub node_font_size: u32,
    pub edge_font_size: u32,
    pub pad: f64,
    pub node_sep: f64,
    pub rank_sep: f64,
    pub splines: SplineMode,
    pub node_width: f64,
    pub node_height: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_name: "Sans-Serif".to_string(),
            font_color: "#2D3436".to_string(),
            background: "white".to_string(),
            title_font_size: 15,
            node_font_size: 13,
            edge_font_size: 13,
            pad: 2.0,
            node_sep: 0.60,
            rank_sep: 0.75,
            splines: SplineMode::Ortho,
            node_width: 1.4,
            node_height: 1.4,
        }
    }
}

/// Options fixed at session open time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramOptions {
    pub direction: Direction,
    pub format: OutputFormat,
    /// Output file stem. When unset, the slugged title is used.
    pub filename: Option<String>,
    pub theme: Theme,
}

impl DiagramOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub(crate) fn validate(&self, title: &str) -> Result<()> {
        if self.theme.title_font_size == 0
            || self.theme.node_font_size == 0
            || self.theme.edge_font_size == 0
        {
            return Err(Error::Configuration {
                message: "font sizes must be positive".to_string(),
            });
        }
        if !(self.theme.node_width > 0.0 && self.theme.node_height > 0.0) {
            return Err(Error::Configuration {
                message: "node dimensions must be positive".to_string(),
            });
        }
        match &self.filename {
            Some(name) if name.trim().is_empty() => Err(Error::Configuration {
                message: "the output filename must not be empty".to_string(),
            }),
            Some(_) => Ok(()),
            None if crate::diagram::slugify(title).is_empty() => Err(Error::Configuration {
                message: "an untitled session needs an explicit output filename".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_engine_renderers() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("JPEG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert_eq!(" svg ".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
    }

    #[test]
    fn unsupported_output_format_is_a_configuration_error() {
        let err = "webp".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("webp"));
    }

    #[test]
    fn zero_font_size_is_rejected_at_open() {
        let options = DiagramOptions::default().with_theme(Theme {
            node_font_size: 0,
            ..Theme::default()
        });
        assert!(matches!(
            options.validate("Some Diagram"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn blank_filename_is_rejected_at_open() {
        let options = DiagramOptions::default().with_filename("   ");
        assert!(matches!(
            options.validate("Some Diagram"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn untitled_session_without_filename_is_rejected() {
        let options = DiagramOptions::default();
        assert!(matches!(
            options.validate("   "),
            Err(Error::Configuration { .. })
        ));
        assert!(options.with_filename("out").validate("   ").is_ok());
    }
}
