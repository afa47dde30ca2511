// ABOUTME: Configuration module for the md2pptx builder
// ABOUTME: Provides font selection, delimiter validation and environment variable handling

use crate::errors::{DeckError, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGEBREAK: &str = "---";
pub const PAGEBREAK_ALIAS: &str = "<!-- pagebreak -->";
pub const MONOSPACE_FONT: &str = "Consolas";

const SERIF_FALLBACK: &str = "Times New Roman";
const SANS_FALLBACK: &str = "Arial";

/// Font families offered for slide text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Meiryo,
    YuGothic,
    YuMincho,
    MsPGothic,
    MsPMincho,
    BizUdGothic,
    BizUdMincho,
    UdDigiKyokasho,
    Mplus1p,
    NotoSansJp,
    NotoSerifJp,
    KosugiMaru,
    SawarabiGothic,
    SawarabiMincho,
}

impl FontFamily {
    pub const ALL: [FontFamily; 14] = [
        FontFamily::Meiryo,
        FontFamily::YuGothic,
        FontFamily::YuMincho,
        FontFamily::MsPGothic,
        FontFamily::MsPMincho,
        FontFamily::BizUdGothic,
        FontFamily::BizUdMincho,
        FontFamily::UdDigiKyokasho,
        FontFamily::Mplus1p,
        FontFamily::NotoSansJp,
        FontFamily::NotoSerifJp,
        FontFamily::KosugiMaru,
        FontFamily::SawarabiGothic,
        FontFamily::SawarabiMincho,
    ];

    /// The face name written into the deck.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Meiryo => "メイリオ",
            FontFamily::YuGothic => "游ゴシック",
            FontFamily::YuMincho => "游明朝",
            FontFamily::MsPGothic => "MS Pゴシック",
            FontFamily::MsPMincho => "MS P明朝",
            FontFamily::BizUdGothic => "BIZ UDゴシック",
            FontFamily::BizUdMincho => "BIZ UD明朝",
            FontFamily::UdDigiKyokasho => "UD デジタル 教科書体",
            FontFamily::Mplus1p => "Mplus 1p",
            FontFamily::NotoSansJp => "Noto Sans JP",
            FontFamily::NotoSerifJp => "Noto Serif JP",
            FontFamily::KosugiMaru => "Kosugi Maru",
            FontFamily::SawarabiGothic => "Sawarabi Gothic",
            FontFamily::SawarabiMincho => "Sawarabi Mincho",
        }
    }

    /// Latin alias accepted on the command line.
    pub fn latin_name(&self) -> &'static str {
        match self {
            FontFamily::Meiryo => "Meiryo",
            FontFamily::YuGothic => "Yu Gothic",
            FontFamily::YuMincho => "Yu Mincho",
            FontFamily::MsPGothic => "MS PGothic",
            FontFamily::MsPMincho => "MS PMincho",
            FontFamily::BizUdGothic => "BIZ UDGothic",
            FontFamily::BizUdMincho => "BIZ UDMincho",
            FontFamily::UdDigiKyokasho => "UD Digi Kyokasho",
            other => other.name(),
        }
    }

    /// Mincho and serif faces pair with a serif Latin fallback.
    pub fn is_serif(&self) -> bool {
        let name = self.name();
        name.contains("明朝") || name.contains("Serif") || name.contains("Mincho")
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        FontFamily::ALL
            .iter()
            .copied()
            .find(|f| f.name() == wanted || f.latin_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DeckError::ConfigError(format!("Unsupported font family: {}", s)))
    }
}

/// Fonts used for one render pass. The fallback is always derived from the
/// primary family and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    primary: FontFamily,
}

impl StyleConfig {
    pub fn new(primary: FontFamily) -> Self {
        Self { primary }
    }

    pub fn primary_font_family(&self) -> &'static str {
        self.primary.name()
    }

    pub fn fallback_font_family(&self) -> &'static str {
        if self.primary.is_serif() {
            SERIF_FALLBACK
        } else {
            SANS_FALLBACK
        }
    }

    pub fn monospace_font_family(&self) -> &'static str {
        MONOSPACE_FONT
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(FontFamily::Meiryo)
    }
}

/// Slide dimensions in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSize {
    pub cx: i64,
    pub cy: i64,
}

impl SlideSize {
    /// 12in x 6.75in
    pub const WIDE: SlideSize = SlideSize {
        cx: 10_972_800,
        cy: 6_172_200,
    };
    /// 10in x 7.5in
    pub const STANDARD: SlideSize = SlideSize {
        cx: 9_144_000,
        cy: 6_858_000,
    };

    pub fn from_aspect_ratio(ratio: &str) -> Result<Self> {
        match ratio.trim() {
            "16:9" => Ok(SlideSize::WIDE),
            "4:3" => Ok(SlideSize::STANDARD),
            other => Err(DeckError::ConfigError(format!(
                "Unsupported aspect ratio: {}. Use 16:9 or 4:3",
                other
            ))),
        }
    }
}

/// Reject delimiters that could never match a standalone line.
pub fn validate_delimiter(delimiter: &str) -> Result<()> {
    if delimiter.trim().is_empty() {
        return Err(DeckError::ConfigError(
            "Slide delimiter must not be empty".to_string(),
        ));
    }
    if delimiter.contains('\n') || delimiter.contains('\r') {
        return Err(DeckError::ConfigError(format!(
            "Slide delimiter must be a single line: {:?}",
            delimiter
        )));
    }
    if delimiter != delimiter.trim() {
        return Err(DeckError::ConfigError(format!(
            "Slide delimiter must not have surrounding whitespace: {:?}",
            delimiter
        )));
    }
    Ok(())
}

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub font: String,
    pub pagebreak: String,
    pub aspect_ratio: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: FontFamily::Meiryo.name().to_string(),
            pagebreak: DEFAULT_PAGEBREAK.to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            font: env::var("MD2PPTX_FONT").unwrap_or(defaults.font),
            pagebreak: env::var("MD2PPTX_PAGEBREAK").unwrap_or(defaults.pagebreak),
            aspect_ratio: env::var("MD2PPTX_ASPECT_RATIO").unwrap_or(defaults.aspect_ratio),
        }
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        font: Option<String>,
        pagebreak: Option<String>,
        aspect_ratio: Option<String>,
    ) -> Self {
        if let Some(font) = font {
            self.font = font;
        }
        if let Some(pagebreak) = pagebreak {
            self.pagebreak = pagebreak;
        }
        if let Some(aspect_ratio) = aspect_ratio {
            self.aspect_ratio = aspect_ratio;
        }
        self
    }

    /// Check every setting up front so nothing is written on bad input.
    pub fn validate(&self) -> Result<()> {
        validate_delimiter(&self.pagebreak)?;
        self.font.parse::<FontFamily>()?;
        SlideSize::from_aspect_ratio(&self.aspect_ratio)?;
        Ok(())
    }

    pub fn style_config(&self) -> Result<StyleConfig> {
        Ok(StyleConfig::new(self.font.parse()?))
    }

    pub fn slide_size(&self) -> Result<SlideSize> {
        SlideSize::from_aspect_ratio(&self.aspect_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_follows_primary_family() {
        assert_eq!(
            StyleConfig::new(FontFamily::Meiryo).fallback_font_family(),
            "Arial"
        );
        assert_eq!(
            StyleConfig::new(FontFamily::YuMincho).fallback_font_family(),
            "Times New Roman"
        );
        assert_eq!(
            StyleConfig::new(FontFamily::NotoSerifJp).fallback_font_family(),
            "Times New Roman"
        );
        assert_eq!(
            StyleConfig::new(FontFamily::SawarabiMincho).fallback_font_family(),
            "Times New Roman"
        );
        assert_eq!(
            StyleConfig::new(FontFamily::NotoSansJp).fallback_font_family(),
            "Arial"
        );
    }

    #[test]
    fn test_font_family_parses_native_and_latin_names() {
        assert_eq!("游明朝".parse::<FontFamily>().unwrap(), FontFamily::YuMincho);
        assert_eq!("yu mincho".parse::<FontFamily>().unwrap(), FontFamily::YuMincho);
        assert_eq!("Noto Sans JP".parse::<FontFamily>().unwrap(), FontFamily::NotoSansJp);
        assert!("Comic Sans".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert!(validate_delimiter("---").is_ok());
        assert!(validate_delimiter("***").is_ok());
        assert!(matches!(validate_delimiter(""), Err(DeckError::ConfigError(_))));
        assert!(matches!(validate_delimiter("  "), Err(DeckError::ConfigError(_))));
        assert!(matches!(validate_delimiter("a\nb"), Err(DeckError::ConfigError(_))));
        assert!(matches!(validate_delimiter(" --- "), Err(DeckError::ConfigError(_))));
    }

    #[test]
    fn test_config_validate_fails_fast() {
        let config = Config::default().with_overrides(Some("Papyrus".to_string()), None, None);
        assert!(config.validate().is_err());

        let config = Config::default().with_overrides(None, None, Some("21:9".to_string()));
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }
}
