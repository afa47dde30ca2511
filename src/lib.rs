// ABOUTME: Library module for the md2pptx builder.
// ABOUTME: Turns markdown documents into styled slides and writes them as PPTX decks.

// Reexport modules
pub mod ast;
pub mod config;
pub mod content;
pub mod errors;
pub mod markdown;
pub mod pptx;
pub mod resources;
pub mod slides;
pub mod split;
pub mod utils;

// Reexport common types and functions
pub use ast::{BlockNode, InlineNode, ListItem, ListNode};
pub use config::{Config, FontFamily, SlideSize, StyleConfig};
pub use content::{
    render_slides, Alignment, ContentRenderer, RenderedSlide, Rgb, StyledParagraph, StyledRun,
};
pub use errors::{DeckError, Result};
pub use markdown::{parse_slide, ComrakEngine, GrammarEngine};
pub use pptx::{build_presentation, DeckAssembler, SlideGeometry};
pub use resources::{ImageResource, TemplateDeck};
pub use slides::{default_title, extract_title, SlideAssembler, SlideRecord};
pub use split::split_slides;
