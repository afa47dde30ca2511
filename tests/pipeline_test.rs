use md2pptx::{
    extract_title, split_slides, BlockNode, ContentRenderer, FontFamily, SlideAssembler,
    StyleConfig, StyledParagraph,
};

const SAMPLE: &str = r#"# テストスライド1

テスト段落です。
**太字**と*斜体*をサポートします。

- リスト項目1
- リスト項目2
  - サブリスト項目

---

# テストスライド2

## 見出し2

```python
def hello_world():
    print("Hello, World!")
```
"#;

fn non_empty(paragraphs: &[StyledParagraph]) -> Vec<&StyledParagraph> {
    paragraphs.iter().filter(|p| !p.is_empty()).collect()
}

#[test]
fn test_sample_document_structure() {
    let slides = SlideAssembler::default().assemble(SAMPLE);
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title, "テストスライド1");
    assert_eq!(slides[1].title, "テストスライド2");

    let renderer = ContentRenderer::new(StyleConfig::new(FontFamily::YuGothic));
    let first = renderer.render(&slides[0].body_blocks);
    let items: Vec<String> = non_empty(&first)
        .into_iter()
        .filter(|p| p.runs.len() == 1 && p.space_after_pt == 5.0)
        .map(StyledParagraph::text)
        .collect();
    assert_eq!(
        items,
        vec!["• リスト項目1", "• リスト項目2", "◦ サブリスト項目"]
    );

    let body = &first[0];
    assert!(body.runs.iter().any(|r| r.bold && r.text == "太字"));
    assert!(body.runs.iter().any(|r| r.italic && r.text == "斜体"));

    let second = renderer.render(&slides[1].body_blocks);
    assert_eq!(second[0].text(), "見出し2");
    assert!(second[0].runs[0].bold);
    let code = &second[1];
    assert_eq!(code.runs[0].text, "python:\n");
    assert!(code.runs[1].text.contains("    print(\"Hello, World!\")"));
}

#[test]
fn test_split_count_matches_delimiters() {
    let docs = [
        "a\n---\nb",
        "a\n---\nb\n---\nc",
        "only one",
        "x\n<!-- pagebreak -->\ny\n---\nz",
    ];
    for doc in docs {
        let normalized = doc.replace("<!-- pagebreak -->", "---");
        let delimiters = normalized.lines().filter(|l| *l == "---").count();
        assert_eq!(split_slides(doc, "---").len(), delimiters + 1, "doc: {:?}", doc);
        assert_eq!(split_slides(doc, "---"), split_slides(&normalized, "---"));
    }
}

#[test]
fn test_later_level_one_headings_stay_in_body() {
    let slides = SlideAssembler::default().assemble("# First\n\n# Second\n\ntext");
    assert_eq!(slides[0].title, "First");
    assert!(matches!(
        slides[0].body_blocks[0],
        BlockNode::Heading { level: 1, .. }
    ));

    let (title, remaining) = extract_title(slides[0].body_blocks.clone());
    assert_eq!(title, "Second");
    assert_eq!(remaining.len(), slides[0].body_blocks.len() - 1);
}

#[test]
fn test_same_tree_renders_identically_twice() {
    let slides = SlideAssembler::default().assemble("- a\n  - b\n    - c\n- d");
    let renderer = ContentRenderer::new(StyleConfig::default());
    let preview = renderer.render(&slides[0].body_blocks);
    let convert = renderer.render(&slides[0].body_blocks);
    assert_eq!(preview, convert);

    let depths: Vec<usize> = non_empty(&convert).iter().map(|p| p.indent_level).collect();
    assert_eq!(depths, vec![0, 1, 2, 0]);
}

#[test]
fn test_ordered_numbering_restarts_per_level() {
    let slides = SlideAssembler::default().assemble("1. one\n   1. inner\n   2. inner two\n2. two");
    let renderer = ContentRenderer::new(StyleConfig::default());
    let texts: Vec<String> = non_empty(&renderer.render(&slides[0].body_blocks))
        .into_iter()
        .map(StyledParagraph::text)
        .collect();
    assert_eq!(texts, vec!["1. one", "1. inner", "2. inner two", "2. two"]);
}
