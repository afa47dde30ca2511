// ABOUTME: Resource handling for the md2pptx builder
// ABOUTME: Loads and validates the background, logo and optional template deck

use crate::config::SlideSize;
use crate::errors::{DeckError, Result};
use crate::utils::validate_file_exists;
use image::io::Reader as ImageReader;
use image::{GenericImageView, ImageFormat};
use log::{debug, info};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// An image file that decoded successfully and can be embedded in a deck.
#[derive(Debug, Clone)]
pub struct ImageResource {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ImageResource {
    /// Read and fully decode an image so broken files are caught before rendering.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading image resource: {:?}", path);
        validate_file_exists(path)?;
        let data = fs::read(path).map_err(DeckError::FileReadError)?;

        let reader = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .map_err(DeckError::FileReadError)?;
        let format = reader.format().ok_or_else(|| {
            DeckError::ValidationError(format!("Unrecognized image format: {:?}", path))
        })?;
        if !matches!(
            format,
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::Bmp
        ) {
            return Err(DeckError::ValidationError(format!(
                "Unsupported image format {:?} for {:?}",
                format, path
            )));
        }

        let image = reader.decode().map_err(|e| {
            DeckError::ValidationError(format!("Invalid image {:?}: {}", path, e))
        })?;
        let (width, height) = image.dimensions();
        debug!("Image {:?} is {}x{}", path, width, height);

        Ok(Self {
            path: path.to_path_buf(),
            data,
            format,
            width,
            height,
        })
    }

    pub fn extension(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            _ => "png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            _ => "image/png",
        }
    }

    /// Height for a given width, keeping the image's proportions.
    pub fn scaled_height(&self, width: i64) -> i64 {
        if self.width == 0 {
            return width;
        }
        (width as f64 * self.height as f64 / self.width as f64).round() as i64
    }
}

/// A presentation used as a layout reference.
#[derive(Debug, Clone)]
pub struct TemplateDeck {
    pub path: PathBuf,
    pub slide_size: SlideSize,
}

impl TemplateDeck {
    /// Open a template package and read its slide size.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Reading template: {:?}", path);
        validate_file_exists(path)?;
        let file = fs::File::open(path).map_err(DeckError::FileReadError)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut xml = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .map_err(|e| {
                DeckError::ValidationError(format!(
                    "Template {:?} is not a presentation: {}",
                    path, e
                ))
            })?
            .read_to_string(&mut xml)
            .map_err(DeckError::FileReadError)?;

        let slide_size = read_slide_size(&xml)?.ok_or_else(|| {
            DeckError::ValidationError(format!("Template {:?} has no slide size", path))
        })?;
        info!("Template slide size: {}x{} EMU", slide_size.cx, slide_size.cy);

        Ok(Self {
            path: path.to_path_buf(),
            slide_size,
        })
    }
}

fn read_slide_size(xml: &str) -> Result<Option<SlideSize>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"p:sldSz" => {
                let mut cx = None;
                let mut cy = None;
                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|e| DeckError::ValidationError(e.to_string()))?;
                    match attr.key.as_ref() {
                        b"cx" => cx = value.parse::<i64>().ok(),
                        b"cy" => cy = value.parse::<i64>().ok(),
                        _ => {}
                    }
                }
                return Ok(match (cx, cy) {
                    (Some(cx), Some(cy)) if cx > 0 && cy > 0 => Some(SlideSize { cx, cy }),
                    _ => None,
                });
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => {
                return Err(DeckError::ValidationError(format!(
                    "Malformed presentation.xml: {}",
                    e
                )))
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_slide_size() {
        let xml = r#"<?xml version="1.0"?>
<p:presentation xmlns:p="x"><p:sldSz cx="12192000" cy="6858000"/></p:presentation>"#;
        assert_eq!(
            read_slide_size(xml).unwrap(),
            Some(SlideSize {
                cx: 12_192_000,
                cy: 6_858_000
            })
        );
    }

    #[test]
    fn test_read_slide_size_missing() {
        let xml = r#"<p:presentation xmlns:p="x"></p:presentation>"#;
        assert_eq!(read_slide_size(xml).unwrap(), None);
    }
}
