// ABOUTME: Markdown parsing for the md2pptx builder
// ABOUTME: Decodes a comrak AST into typed block nodes, degrading to plain text on failure

use crate::ast::{BlockNode, InlineNode, ListItem, ListNode};
use crate::errors::{DeckError, Result};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use log::{debug, warn};
use std::panic::{self, AssertUnwindSafe};

/// Grammar recognition backend. Implementations return the block sequence
/// for one slide unit or an error; they never need to recover themselves.
pub trait GrammarEngine: Sync {
    fn parse(&self, unit: &str) -> Result<Vec<BlockNode>>;
}

/// CommonMark parsing through comrak.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakEngine;

impl GrammarEngine for ComrakEngine {
    fn parse(&self, unit: &str) -> Result<Vec<BlockNode>> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let arena = Arena::new();
            let options = Options::default();
            let root = parse_document(&arena, unit, &options);
            decode_document(root, unit)
        }))
        .map_err(|_| DeckError::ParseError("comrak panicked while parsing slide".to_string()))
    }
}

/// Parse one slide unit. Never fails: if the engine errors, the whole unit
/// becomes a single plain-text paragraph.
pub fn parse_slide(engine: &dyn GrammarEngine, unit: &str) -> Vec<BlockNode> {
    match engine.parse(unit) {
        Ok(blocks) => {
            debug!(
                "Parsed slide into {} blocks: {:?}",
                blocks.len(),
                blocks.iter().map(BlockNode::kind).collect::<Vec<_>>()
            );
            blocks
        }
        Err(e) => {
            warn!("Falling back to plain text for slide: {}", e);
            vec![BlockNode::paragraph_text(unit)]
        }
    }
}

fn decode_document<'a>(root: &'a AstNode<'a>, unit: &str) -> Vec<BlockNode> {
    let lines: Vec<&str> = unit.lines().collect();
    let mut blocks = Vec::new();

    for (position, child) in root.children().enumerate() {
        let start = child.data.borrow().sourcepos.start.line;
        // Two or more empty lines between blocks are kept as explicit spacing.
        if position > 0 && blank_lines_before(&lines, start) >= 2 {
            blocks.push(BlockNode::BlankLine);
        }
        decode_block(child, &mut blocks);
    }

    blocks
}

/// Empty source lines directly above the 1-based line `start`.
///
/// Counted from the text because comrak stretches a list's end line over
/// the blank lines that follow it.
fn blank_lines_before(lines: &[&str], start: usize) -> usize {
    let above = start.saturating_sub(1).min(lines.len());
    lines[..above]
        .iter()
        .rev()
        .take_while(|line| line.trim().is_empty())
        .count()
}

fn decode_block<'a>(node: &'a AstNode<'a>, out: &mut Vec<BlockNode>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Heading(heading) => out.push(BlockNode::Heading {
            level: heading.level,
            inline: decode_inlines(node),
        }),
        NodeValue::Paragraph => out.push(BlockNode::Paragraph {
            inline: decode_inlines(node),
        }),
        NodeValue::List(_) => out.push(BlockNode::List(decode_list(node))),
        NodeValue::CodeBlock(code_block) => {
            let info = code_block.info.trim();
            out.push(BlockNode::CodeBlock {
                raw: code_block.literal.clone(),
                info: (!info.is_empty()).then(|| info.to_string()),
            });
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                decode_block(child, out);
            }
        }
        other => debug!("Dropping unsupported block node: {:?}", other),
    }
}

fn decode_list<'a>(node: &'a AstNode<'a>) -> ListNode {
    let ordered = match &node.data.borrow().value {
        NodeValue::List(list) => matches!(list.list_type, ListType::Ordered),
        _ => false,
    };

    let items = node
        .children()
        .filter(|child| matches!(child.data.borrow().value, NodeValue::Item(_)))
        .map(decode_item)
        .collect();

    ListNode { ordered, items }
}

/// Unwrap the paragraph around item text and separate out nested lists.
fn decode_item<'a>(item: &'a AstNode<'a>) -> ListItem {
    let mut content: Vec<InlineNode> = Vec::new();
    let mut nested = Vec::new();

    for child in item.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Paragraph | NodeValue::Heading(_) => {
                if !content.is_empty() {
                    content.push(InlineNode::text(" "));
                }
                content.extend(decode_inlines(child));
            }
            NodeValue::List(_) => nested.push(decode_list(child)),
            NodeValue::CodeBlock(code_block) => {
                content.push(InlineNode::CodeSpan(code_block.literal.trim_end().to_string()))
            }
            other => debug!("Dropping unsupported list item child: {:?}", other),
        }
    }

    ListItem { content, nested }
}

fn decode_inlines<'a>(node: &'a AstNode<'a>) -> Vec<InlineNode> {
    let mut out = Vec::new();
    for child in node.children() {
        decode_inline(child, &mut out);
    }
    merge_text(out)
}

fn decode_inline<'a>(node: &'a AstNode<'a>, out: &mut Vec<InlineNode>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Text(text) => out.push(InlineNode::Text(text.clone())),
        NodeValue::SoftBreak => out.push(InlineNode::text(" ")),
        NodeValue::LineBreak => out.push(InlineNode::text("\n")),
        NodeValue::Code(code) => out.push(InlineNode::CodeSpan(code.literal.clone())),
        NodeValue::Strong => out.push(InlineNode::Strong(decode_inlines(node))),
        NodeValue::Emph => out.push(InlineNode::Emphasis(decode_inlines(node))),
        NodeValue::Link(_) => out.push(InlineNode::Link {
            display_text: crate::ast::inline_text(&decode_inlines(node)),
        }),
        NodeValue::Image(_) => out.push(InlineNode::Image {
            display_text: crate::ast::inline_text(&decode_inlines(node)),
        }),
        NodeValue::HtmlInline(_) => {}
        _ => {
            for child in node.children() {
                decode_inline(child, out);
            }
        }
    }
}

/// comrak can split one text span into several nodes; join neighbours.
fn merge_text(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut merged: Vec<InlineNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match (merged.last_mut(), node) {
            (Some(InlineNode::Text(prev)), InlineNode::Text(next)) => prev.push_str(&next),
            (_, node) => merged.push(node),
        }
    }
    merged
}
