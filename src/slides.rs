// ABOUTME: Slide assembly for the md2pptx builder
// ABOUTME: Splits, parses and titles every slide unit of a markdown document

use crate::ast::{BlockNode, InlineNode};
use crate::config::validate_delimiter;
use crate::errors::{DeckError, Result};
use crate::markdown::{parse_slide, ComrakEngine, GrammarEngine};
use crate::split::split_slides;
use crate::utils::validate_file_exists;
use log::info;
use std::fs;
use std::path::Path;

/// One slide worth of parsed markdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRecord {
    pub title: String,
    pub body_blocks: Vec<BlockNode>,
    /// 0-based position in the split sequence.
    pub index: usize,
    pub raw_text: String,
}

impl SlideRecord {
    /// 1-based slide number as shown on the page.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Title used when a slide has no level-1 heading.
pub fn default_title(index: usize) -> String {
    format!("Slide {}", index + 1)
}

/// Remove the first level-1 heading and return its text with the remaining blocks.
///
/// Only `Text` children contribute to the title. Later level-1 headings stay
/// in the body untouched. Returns an empty title when there is no level-1 heading.
pub fn extract_title(blocks: Vec<BlockNode>) -> (String, Vec<BlockNode>) {
    let mut title: Option<String> = None;
    let mut remaining = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            BlockNode::Heading { level: 1, inline } if title.is_none() => {
                title = Some(
                    inline
                        .iter()
                        .filter_map(|node| match node {
                            InlineNode::Text(raw) => Some(raw.as_str()),
                            _ => None,
                        })
                        .collect(),
                );
            }
            other => remaining.push(other),
        }
    }

    (title.unwrap_or_default(), remaining)
}

/// Turns a markdown document into slide records.
pub struct SlideAssembler {
    delimiter: String,
    engine: Box<dyn GrammarEngine>,
}

impl SlideAssembler {
    pub fn new(delimiter: &str) -> Result<Self> {
        Self::with_engine(delimiter, Box::new(ComrakEngine))
    }

    pub fn with_engine(delimiter: &str, engine: Box<dyn GrammarEngine>) -> Result<Self> {
        validate_delimiter(delimiter)?;
        Ok(Self {
            delimiter: delimiter.to_string(),
            engine,
        })
    }

    /// Parse a whole document. Never fails; unparseable units degrade to plain text.
    pub fn assemble(&self, markdown: &str) -> Vec<SlideRecord> {
        let slides: Vec<SlideRecord> = split_slides(markdown, &self.delimiter)
            .into_iter()
            .enumerate()
            .map(|(index, raw_text)| {
                let blocks = parse_slide(self.engine.as_ref(), &raw_text);
                let (title, body_blocks) = extract_title(blocks);
                let title = if title.is_empty() {
                    default_title(index)
                } else {
                    title
                };
                SlideRecord {
                    title,
                    body_blocks,
                    index,
                    raw_text,
                }
            })
            .collect();

        info!("Assembled {} slides", slides.len());
        slides
    }

    /// Read and assemble a markdown file.
    pub fn assemble_file(&self, markdown_path: &Path) -> Result<Vec<SlideRecord>> {
        info!("Reading markdown: {:?}", markdown_path);
        validate_file_exists(markdown_path)?;
        let content = fs::read_to_string(markdown_path).map_err(DeckError::FileReadError)?;
        Ok(self.assemble(&content))
    }
}

impl Default for SlideAssembler {
    fn default() -> Self {
        Self {
            delimiter: crate::config::DEFAULT_PAGEBREAK.to_string(),
            engine: Box::new(ComrakEngine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> BlockNode {
        BlockNode::Heading {
            level,
            inline: vec![InlineNode::text(text)],
        }
    }

    #[test]
    fn test_extract_first_level_one_heading_only() {
        let blocks = vec![
            BlockNode::paragraph_text("intro"),
            heading(1, "First"),
            heading(1, "Second"),
            heading(2, "Sub"),
        ];
        let (title, remaining) = extract_title(blocks);
        assert_eq!(title, "First");
        assert_eq!(
            remaining,
            vec![
                BlockNode::paragraph_text("intro"),
                heading(1, "Second"),
                heading(2, "Sub"),
            ]
        );
    }

    #[test]
    fn test_extract_title_without_level_one_heading() {
        let blocks = vec![heading(2, "Sub"), BlockNode::paragraph_text("x")];
        let (title, remaining) = extract_title(blocks.clone());
        assert_eq!(title, "");
        assert_eq!(remaining, blocks);
    }

    #[test]
    fn test_extract_title_removes_at_most_one_block() {
        let blocks: Vec<BlockNode> = (0..5).map(|i| heading(1, &i.to_string())).collect();
        let (_, remaining) = extract_title(blocks);
        assert_eq!(remaining.len(), 4);
    }

    #[test]
    fn test_title_ignores_non_text_children() {
        let blocks = vec![BlockNode::Heading {
            level: 1,
            inline: vec![
                InlineNode::text("Plain "),
                InlineNode::Strong(vec![InlineNode::text("loud")]),
                InlineNode::text("end"),
            ],
        }];
        let (title, _) = extract_title(blocks);
        assert_eq!(title, "Plain end");
    }

    #[test]
    fn test_assemble_two_slides() {
        let assembler = SlideAssembler::new("---").unwrap();
        let slides = assembler.assemble("# A\n\ntext\n\n---\n\n# B\n\nmore");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "A");
        assert_eq!(slides[1].title, "B");
        assert_eq!(slides[0].index, 0);
        assert_eq!(slides[1].index, 1);
        assert_eq!(slides[0].raw_text, "# A\n\ntext");
        assert_eq!(slides[1].body_blocks, vec![BlockNode::paragraph_text("more")]);
    }

    #[test]
    fn test_assemble_defaults_title_by_position() {
        let assembler = SlideAssembler::default();
        let slides = assembler.assemble("just text\n\n---\n\n## sub only");
        assert_eq!(slides[0].title, "Slide 1");
        assert_eq!(slides[1].title, "Slide 2");
    }

    #[test]
    fn test_assembler_rejects_bad_delimiter() {
        assert!(matches!(
            SlideAssembler::new(""),
            Err(DeckError::ConfigError(_))
        ));
    }

    #[test]
    fn test_assemble_blank_document() {
        assert!(SlideAssembler::default().assemble("\n  \n").is_empty());
    }
}
