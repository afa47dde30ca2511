// ABOUTME: Content rendering for the md2pptx builder
// ABOUTME: Maps block and inline markdown nodes onto styled paragraphs and runs

use crate::ast::{BlockNode, InlineNode, ListItem, ListNode};
use crate::config::StyleConfig;
use crate::errors::{DeckError, Result};
use crate::slides::SlideRecord;
use log::{debug, info};
use rayon::prelude::*;

/// Fixed typography table. Sizes never grow as heading level or list depth grows.
pub mod design {
    use super::Rgb;

    pub const TITLE_SIZE: f32 = 36.0;
    pub const TITLE_SPACE_AFTER: f32 = 6.0;

    pub const BODY_SIZE: f32 = 18.0;
    pub const PARAGRAPH_SPACE_AFTER: f32 = 12.0;
    pub const BLANK_LINE_SPACE_AFTER: f32 = 8.0;

    /// Indexed by heading level 2..=6.
    pub const HEADING_SIZES: [f32; 5] = [28.0, 24.0, 20.0, 18.0, 16.0];
    pub const HEADING_SPACE_BEFORE: f32 = 16.0;
    pub const HEADING_SPACE_AFTER: f32 = 8.0;

    pub const CODE_BLOCK_SIZE: f32 = 14.0;
    pub const CODE_LANGUAGE_SIZE: f32 = 14.0;
    pub const CODE_BLOCK_SPACE_BEFORE: f32 = 12.0;
    pub const CODE_BLOCK_SPACE_AFTER: f32 = 12.0;

    pub const CODE_SPAN_SIZE: f32 = 16.0;
    pub const CODE_SPAN_COLOR: Rgb = Rgb(60, 60, 60);

    pub const LIST_ITEM_SPACE_AFTER: f32 = 5.0;
    pub const LIST_SPACE_BEFORE: f32 = 4.0;
    pub const LIST_SPACE_AFTER: f32 = 8.0;
    pub const LIST_MIN_SIZE: f32 = 12.0;

    pub const PAGE_NUMBER_SIZE: f32 = 12.0;
    pub const PAGE_NUMBER_COLOR: Rgb = Rgb(80, 80, 80);

    pub const TEXT_COLOR: Rgb = Rgb(0, 0, 0);

    pub const BULLET: &str = "• ";
    pub const NESTED_BULLET: &str = "◦ ";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Rgb,
    pub font_family: String,
    pub font_fallback: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledParagraph {
    pub runs: Vec<StyledRun>,
    pub indent_level: usize,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub alignment: Alignment,
}

impl StyledParagraph {
    fn spacer(space_after_pt: f32) -> Self {
        Self {
            space_after_pt,
            ..Self::default()
        }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// Font size for a heading level. Levels below 2 share the level 2 size.
pub fn heading_size(level: u8) -> f32 {
    let idx = (level.clamp(2, 6) - 2) as usize;
    design::HEADING_SIZES[idx]
}

/// Font size for a list item at `depth`.
pub fn list_size(depth: usize) -> f32 {
    (design::BODY_SIZE - depth as f32).max(design::LIST_MIN_SIZE)
}

fn list_marker(ordered: bool, position: usize, depth: usize) -> String {
    if ordered {
        format!("{}. ", position)
    } else if depth == 0 {
        design::BULLET.to_string()
    } else {
        design::NESTED_BULLET.to_string()
    }
}

/// Flatten a list item's own text. Nested lists are not included.
///
/// Fails when the item has no visible text, which the renderer treats as
/// "skip this item".
pub fn extract_item_text(item: &ListItem) -> Result<String> {
    let text = crate::ast::inline_text(&item.content);
    if text.trim().is_empty() {
        return Err(DeckError::ItemExtractionError(format!(
            "list item has no text ({} inline nodes, {} nested lists)",
            item.content.len(),
            item.nested.len()
        )));
    }
    Ok(text)
}

/// Renders parsed slide bodies into styled paragraphs.
///
/// Holds no state between calls; list depth travels as an argument.
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    style: StyleConfig,
}

impl ContentRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    fn run(&self, text: impl Into<String>, size_pt: f32) -> StyledRun {
        StyledRun {
            text: text.into(),
            size_pt,
            bold: false,
            italic: false,
            underline: false,
            color: design::TEXT_COLOR,
            font_family: self.style.primary_font_family().to_string(),
            font_fallback: self.style.fallback_font_family().to_string(),
        }
    }

    fn monospace_run(&self, text: impl Into<String>, size_pt: f32) -> StyledRun {
        let mono = self.style.monospace_font_family().to_string();
        StyledRun {
            font_family: mono.clone(),
            font_fallback: mono,
            ..self.run(text, size_pt)
        }
    }

    pub fn render_title(&self, title: &str) -> StyledParagraph {
        StyledParagraph {
            runs: vec![StyledRun {
                bold: true,
                ..self.run(title, design::TITLE_SIZE)
            }],
            space_after_pt: design::TITLE_SPACE_AFTER,
            ..StyledParagraph::default()
        }
    }

    pub fn render_page_number(&self, current: usize, total: usize) -> StyledParagraph {
        StyledParagraph {
            runs: vec![StyledRun {
                color: design::PAGE_NUMBER_COLOR,
                ..self.run(format!("{}/{}", current, total), design::PAGE_NUMBER_SIZE)
            }],
            alignment: Alignment::Right,
            ..StyledParagraph::default()
        }
    }

    /// Render a block sequence in document order.
    pub fn render(&self, blocks: &[BlockNode]) -> Vec<StyledParagraph> {
        let mut out = Vec::new();
        for block in blocks {
            self.render_block(block, &mut out);
        }
        out
    }

    pub fn render_block(&self, block: &BlockNode, out: &mut Vec<StyledParagraph>) {
        match block {
            BlockNode::BlankLine => {
                out.push(StyledParagraph::spacer(design::BLANK_LINE_SPACE_AFTER));
            }
            BlockNode::Paragraph { inline } => {
                let mut paragraph = StyledParagraph::spacer(design::PARAGRAPH_SPACE_AFTER);
                for node in inline {
                    self.render_inline(node, &mut paragraph);
                }
                out.push(paragraph);
            }
            BlockNode::Heading { level, inline } => {
                let size = heading_size(*level);
                let runs = inline
                    .iter()
                    .map(|child| StyledRun {
                        bold: true,
                        ..self.run(child.flatten_text(), size)
                    })
                    .collect();
                out.push(StyledParagraph {
                    runs,
                    space_before_pt: design::HEADING_SPACE_BEFORE,
                    space_after_pt: design::HEADING_SPACE_AFTER,
                    ..StyledParagraph::default()
                });
            }
            BlockNode::CodeBlock { raw, info } => {
                let mut runs = Vec::with_capacity(2);
                if let Some(lang) = info {
                    runs.push(StyledRun {
                        bold: true,
                        ..self.run(format!("{}:\n", lang), design::CODE_LANGUAGE_SIZE)
                    });
                }
                runs.push(self.monospace_run(raw.as_str(), design::CODE_BLOCK_SIZE));
                out.push(StyledParagraph {
                    runs,
                    space_before_pt: design::CODE_BLOCK_SPACE_BEFORE,
                    space_after_pt: design::CODE_BLOCK_SPACE_AFTER,
                    ..StyledParagraph::default()
                });
            }
            BlockNode::List(list) => {
                let mut items = Vec::new();
                self.render_list(list, 0, &mut items);
                if !items.is_empty() {
                    out.push(StyledParagraph::spacer(design::LIST_SPACE_BEFORE));
                    out.extend(items);
                    out.push(StyledParagraph::spacer(design::LIST_SPACE_AFTER));
                }
            }
        }
    }

    /// Append the runs for one inline node to `paragraph`.
    pub fn render_inline(&self, node: &InlineNode, paragraph: &mut StyledParagraph) {
        match node {
            InlineNode::Text(raw) => paragraph.runs.push(self.run(raw.as_str(), design::BODY_SIZE)),
            InlineNode::Strong(children) => {
                paragraph.runs.extend(children.iter().map(|child| StyledRun {
                    bold: true,
                    ..self.run(child.flatten_text(), design::BODY_SIZE)
                }))
            }
            InlineNode::Emphasis(children) => {
                paragraph.runs.extend(children.iter().map(|child| StyledRun {
                    italic: true,
                    ..self.run(child.flatten_text(), design::BODY_SIZE)
                }))
            }
            InlineNode::CodeSpan(raw) => paragraph.runs.push(StyledRun {
                color: design::CODE_SPAN_COLOR,
                ..self.monospace_run(raw.as_str(), design::CODE_SPAN_SIZE)
            }),
            InlineNode::Link { display_text } => paragraph.runs.push(StyledRun {
                underline: true,
                ..self.run(display_text.as_str(), design::BODY_SIZE)
            }),
            InlineNode::Image { display_text } => {
                paragraph.runs.push(self.run(display_text.as_str(), design::BODY_SIZE))
            }
        }
    }

    /// Render `list` at `depth`, each item followed directly by its nested lists.
    pub fn render_list(&self, list: &ListNode, depth: usize, out: &mut Vec<StyledParagraph>) {
        let mut position = 0;
        for item in &list.items {
            let text = match extract_item_text(item) {
                Ok(text) => text,
                Err(e) => {
                    debug!("Skipping list item at depth {}: {}", depth, e);
                    continue;
                }
            };
            position += 1;

            let marker = list_marker(list.ordered, position, depth);
            out.push(StyledParagraph {
                runs: vec![self.run(format!("{}{}", marker, text), list_size(depth))],
                indent_level: depth,
                space_after_pt: design::LIST_ITEM_SPACE_AFTER,
                ..StyledParagraph::default()
            });

            for nested in &item.nested {
                self.render_list(nested, depth + 1, out);
            }
        }
    }
}

/// A slide ready for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub index: usize,
    pub title: StyledParagraph,
    pub body: Vec<StyledParagraph>,
    pub page_number: StyledParagraph,
}

/// Render every slide, in parallel, keeping slide order.
pub fn render_slides(slides: &[SlideRecord], style: &StyleConfig) -> Vec<RenderedSlide> {
    let renderer = ContentRenderer::new(style.clone());
    let total = slides.len();
    let rendered: Vec<RenderedSlide> = slides
        .par_iter()
        .map(|slide| RenderedSlide {
            index: slide.index,
            title: renderer.render_title(&slide.title),
            body: renderer.render(&slide.body_blocks),
            page_number: renderer.render_page_number(slide.number(), total),
        })
        .collect();
    info!("Rendered {} slides", rendered.len());
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontFamily;

    fn renderer() -> ContentRenderer {
        ContentRenderer::new(StyleConfig::default())
    }

    fn item(text: &str) -> ListItem {
        ListItem::new(vec![InlineNode::text(text)])
    }

    #[test]
    fn test_extract_item_text() {
        let rich = ListItem::new(vec![
            InlineNode::text("run "),
            InlineNode::CodeSpan("cargo".to_string()),
            InlineNode::text(" "),
            InlineNode::Strong(vec![InlineNode::text("now")]),
        ]);
        assert_eq!(extract_item_text(&rich).unwrap(), "run cargo now");
        assert!(matches!(
            extract_item_text(&item("  ")),
            Err(DeckError::ItemExtractionError(_))
        ));
    }

    #[test]
    fn test_item_text_keeps_link_and_image_text() {
        let linked = ListItem::new(vec![InlineNode::Link {
            display_text: "docs".to_string(),
        }]);
        assert_eq!(extract_item_text(&linked).unwrap(), "docs");

        let list = ListNode {
            ordered: false,
            items: vec![
                linked,
                ListItem::new(vec![InlineNode::Image {
                    display_text: "diagram".to_string(),
                }]),
            ],
        };
        let mut out = Vec::new();
        renderer().render_list(&list, 0, &mut out);
        let texts: Vec<String> = out.iter().map(StyledParagraph::text).collect();
        assert_eq!(texts, vec!["• docs", "• diagram"]);
    }

    #[test]
    fn test_blank_line_renders_one_empty_spacer() {
        let out = renderer().render(&[BlockNode::BlankLine]);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty());
        assert!(out[0].runs.is_empty());
        assert!(out[0].space_after_pt > 0.0);
        assert_eq!(out[0].space_after_pt, design::BLANK_LINE_SPACE_AFTER);
    }

    #[test]
    fn test_ordered_list_markers() {
        let list = ListNode {
            ordered: true,
            items: vec![item("x"), item("y")],
        };
        let mut out = Vec::new();
        renderer().render_list(&list, 0, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text(), "1. x");
        assert_eq!(out[1].text(), "2. y");
        assert!(out.iter().all(|p| p.indent_level == 0));
    }

    #[test]
    fn test_nested_list_follows_parent_item() {
        let list = ListNode {
            ordered: false,
            items: vec![
                item("root").with_nested(ListNode {
                    ordered: false,
                    items: vec![item("child")],
                }),
                item("sibling"),
            ],
        };
        let mut out = Vec::new();
        renderer().render_list(&list, 0, &mut out);
        let texts: Vec<String> = out.iter().map(StyledParagraph::text).collect();
        assert_eq!(texts, vec!["• root", "◦ child", "• sibling"]);
        assert_eq!(out[0].indent_level, 0);
        assert_eq!(out[1].indent_level, 1);
        assert!(out[1].runs[0].size_pt <= out[0].runs[0].size_pt);
    }

    #[test]
    fn test_empty_items_are_skipped_and_not_numbered() {
        let list = ListNode {
            ordered: true,
            items: vec![item("a"), item("   "), ListItem::default(), item("b")],
        };
        let mut out = Vec::new();
        renderer().render_list(&list, 0, &mut out);
        let texts: Vec<String> = out.iter().map(StyledParagraph::text).collect();
        assert_eq!(texts, vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_list_without_text_renders_nothing() {
        let list = ListNode {
            ordered: false,
            items: vec![item(""), item(" \t")],
        };
        let out = renderer().render(&[BlockNode::List(list)]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_top_level_list_is_bracketed_by_spacers() {
        let list = ListNode {
            ordered: false,
            items: vec![item("one")],
        };
        let out = renderer().render(&[BlockNode::List(list)]);
        assert_eq!(out.len(), 3);
        assert!(out[0].is_empty());
        assert_eq!(out[1].text(), "• one");
        assert!(out[2].is_empty());
    }

    #[test]
    fn test_rendering_twice_gives_same_depths() {
        let list = ListNode {
            ordered: false,
            items: vec![item("a").with_nested(ListNode {
                ordered: true,
                items: vec![item("b")],
            })],
        };
        let blocks = vec![BlockNode::List(list)];
        let r = renderer();
        assert_eq!(r.render(&blocks), r.render(&blocks));
    }

    #[test]
    fn test_heading_sizes_never_increase() {
        let sizes: Vec<f32> = (2..=6).map(heading_size).collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
        assert!(heading_size(2) > heading_size(6));
        assert!(list_size(0) >= list_size(1));
        assert!(list_size(1) >= list_size(20));
    }

    #[test]
    fn test_heading_paragraph() {
        let out = renderer().render(&[BlockNode::Heading {
            level: 3,
            inline: vec![InlineNode::text("Section")],
        }]);
        assert_eq!(out.len(), 1);
        let run = &out[0].runs[0];
        assert!(run.bold);
        assert_eq!(run.size_pt, 24.0);
        assert!(out[0].space_before_pt > 0.0);
        assert!(out[0].space_after_pt > 0.0);
    }

    #[test]
    fn test_inline_styles_map_to_run_flags() {
        let paragraph = BlockNode::Paragraph {
            inline: vec![
                InlineNode::text("plain"),
                InlineNode::Strong(vec![InlineNode::text("b1"), InlineNode::text("b2")]),
                InlineNode::Emphasis(vec![InlineNode::text("i")]),
                InlineNode::CodeSpan("c".to_string()),
                InlineNode::Link {
                    display_text: "l".to_string(),
                },
                InlineNode::Image {
                    display_text: "alt".to_string(),
                },
            ],
        };
        let out = renderer().render(&[paragraph]);
        let runs = &out[0].runs;
        assert_eq!(runs.len(), 7);
        assert!(!runs[0].bold && !runs[0].italic && !runs[0].underline);
        assert!(runs[1].bold && runs[2].bold);
        assert!(runs[3].italic);
        assert_eq!(runs[4].font_family, "Consolas");
        assert!(runs[4].size_pt < design::BODY_SIZE);
        assert_eq!(runs[4].color, design::CODE_SPAN_COLOR);
        assert!(runs[5].underline);
        assert_eq!(runs[6].text, "alt");
        assert!(out[0].space_after_pt > 0.0);
    }

    #[test]
    fn test_code_block_with_language() {
        let out = renderer().render(&[BlockNode::CodeBlock {
            raw: "fn main() {}\n".to_string(),
            info: Some("rust".to_string()),
        }]);
        let runs = &out[0].runs;
        assert_eq!(runs[0].text, "rust:\n");
        assert!(runs[0].bold);
        assert!(runs[0].size_pt < design::BODY_SIZE);
        assert_eq!(runs[1].text, "fn main() {}\n");
        assert_eq!(runs[1].font_family, "Consolas");
    }

    #[test]
    fn test_code_block_without_language_has_one_run() {
        let out = renderer().render(&[BlockNode::CodeBlock {
            raw: "x".to_string(),
            info: None,
        }]);
        assert_eq!(out[0].runs.len(), 1);
    }

    #[test]
    fn test_runs_carry_font_pair() {
        let r = ContentRenderer::new(StyleConfig::new(FontFamily::YuMincho));
        let out = r.render(&[BlockNode::paragraph_text("x")]);
        assert_eq!(out[0].runs[0].font_family, "游明朝");
        assert_eq!(out[0].runs[0].font_fallback, "Times New Roman");
    }

    #[test]
    fn test_page_number_is_right_aligned() {
        let p = renderer().render_page_number(2, 5);
        assert_eq!(p.text(), "2/5");
        assert_eq!(p.alignment, Alignment::Right);
    }
}
