// ABOUTME: Typed markdown tree shared by the parser, title extraction and renderer
// ABOUTME: Block and inline nodes with the text-flattening helpers used downstream

/// Text-level markdown element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Strong(Vec<InlineNode>),
    Emphasis(Vec<InlineNode>),
    CodeSpan(String),
    /// Link target is discarded; only the visible text is kept.
    Link { display_text: String },
    /// Images are rendered as their alt text.
    Image { display_text: String },
}

impl InlineNode {
    pub fn text(raw: impl Into<String>) -> Self {
        InlineNode::Text(raw.into())
    }

    /// Concatenate all visible text under this node.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(raw) | InlineNode::CodeSpan(raw) => out.push_str(raw),
            InlineNode::Strong(children) | InlineNode::Emphasis(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            InlineNode::Link { display_text } | InlineNode::Image { display_text } => {
                out.push_str(display_text)
            }
        }
    }
}

/// Flatten a run of inline nodes into plain text.
pub fn inline_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::flatten_text).collect()
}

/// Structural markdown element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Heading { level: u8, inline: Vec<InlineNode> },
    Paragraph { inline: Vec<InlineNode> },
    List(ListNode),
    CodeBlock { raw: String, info: Option<String> },
    BlankLine,
}

impl BlockNode {
    pub fn paragraph_text(raw: impl Into<String>) -> Self {
        BlockNode::Paragraph {
            inline: vec![InlineNode::text(raw)],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BlockNode::Heading { .. } => "heading",
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::List(_) => "list",
            BlockNode::CodeBlock { .. } => "code_block",
            BlockNode::BlankLine => "blank_line",
        }
    }
}

/// A list carries no depth of its own; depth is a property of where the
/// renderer meets it, not of the node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListNode {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    /// Inline content of the item with any paragraph wrapper already removed.
    pub content: Vec<InlineNode>,
    pub nested: Vec<ListNode>,
}

impl ListItem {
    pub fn new(content: Vec<InlineNode>) -> Self {
        Self {
            content,
            nested: Vec::new(),
        }
    }

    pub fn with_nested(mut self, list: ListNode) -> Self {
        self.nested.push(list);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_inline_text() {
        let node = InlineNode::Strong(vec![
            InlineNode::text("bold "),
            InlineNode::Emphasis(vec![InlineNode::text("and italic")]),
            InlineNode::CodeSpan(" `x`".to_string()),
        ]);
        assert_eq!(node.flatten_text(), "bold and italic `x`");
    }

    #[test]
    fn test_inline_text_includes_link_and_image_text() {
        let nodes = vec![
            InlineNode::text("see "),
            InlineNode::Link {
                display_text: "docs".to_string(),
            },
            InlineNode::text(" "),
            InlineNode::Image {
                display_text: "logo".to_string(),
            },
        ];
        assert_eq!(inline_text(&nodes), "see docs logo");
    }
}
