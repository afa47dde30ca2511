// ABOUTME: PPTX generation module for the md2pptx builder
// ABOUTME: Places background, logo, title, body text and page numbers into a presentation package

use crate::config::{SlideSize, StyleConfig};
use crate::content::{render_slides, Alignment, RenderedSlide, StyledParagraph, StyledRun};
use crate::errors::{DeckError, Result};
use crate::resources::{ImageResource, TemplateDeck};
use crate::slides::SlideRecord;
use crate::utils::ensure_parent_directory_exists;
use log::{info, warn};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

const EMU_PER_INCH: f64 = 914_400.0;
const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH).round() as i64
}

/// Position and size of a shape in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Where each element sits on a slide of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideGeometry {
    pub size: SlideSize,
    pub background: Rect,
    pub logo_width: i64,
    pub logo_margin: i64,
    pub title: Rect,
    pub body: Rect,
    pub page_number: Rect,
}

impl SlideGeometry {
    pub fn for_size(size: SlideSize) -> Self {
        let (w, h) = (size.cx, size.cy);
        Self {
            size,
            background: Rect {
                x: 0,
                y: 0,
                cx: w,
                cy: h,
            },
            logo_width: inches(1.2),
            logo_margin: inches(0.3),
            title: Rect {
                x: inches(0.6),
                y: inches(0.6),
                cx: w - inches(2.2),
                cy: inches(1.2),
            },
            body: Rect {
                x: inches(1.0),
                y: inches(2.0),
                cx: w - inches(2.0),
                cy: h - inches(2.5),
            },
            page_number: Rect {
                x: w - inches(1.5),
                y: h - inches(0.6),
                cx: inches(1.0),
                cy: inches(0.3),
            },
        }
    }

    /// Top-right corner placement for a logo of the given height.
    pub fn logo(&self, height: i64) -> Rect {
        Rect {
            x: self.size.cx - self.logo_width - self.logo_margin,
            y: self.logo_margin,
            cx: self.logo_width,
            cy: height,
        }
    }
}

/// Writes rendered slides into a `.pptx` package.
pub struct DeckAssembler {
    background: ImageResource,
    logo: ImageResource,
    geometry: SlideGeometry,
    title: String,
}

impl DeckAssembler {
    /// Load and validate every asset before any slide is written.
    ///
    /// A template, when given, only contributes its slide size.
    pub fn new(
        background: &Path,
        logo: &Path,
        template: Option<&Path>,
        default_size: SlideSize,
    ) -> Result<Self> {
        let background = ImageResource::load(background)?;
        let logo = ImageResource::load(logo)?;
        let size = match template {
            Some(path) => TemplateDeck::load(path)?.slide_size,
            None => default_size,
        };
        Ok(Self::from_resources(background, logo, size))
    }

    pub fn from_resources(
        background: ImageResource,
        logo: ImageResource,
        size: SlideSize,
    ) -> Self {
        Self {
            background,
            logo,
            geometry: SlideGeometry::for_size(size),
            title: "Presentation".to_string(),
        }
    }

    /// Title recorded in the document properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn geometry(&self) -> &SlideGeometry {
        &self.geometry
    }

    /// Write the deck to `output_file`. The file only appears once the whole
    /// package has been built.
    pub fn write(&self, slides: &[RenderedSlide], output_file: &Path) -> Result<()> {
        info!("Writing {} slides to {:?}", slides.len(), output_file);
        let buffer = self.write_to(slides, Cursor::new(Vec::new()))?;
        ensure_parent_directory_exists(output_file)?;
        fs::write(output_file, buffer.into_inner()).map_err(DeckError::FileReadError)?;
        info!("PPTX file created at {:?}", output_file);
        Ok(())
    }

    /// Write the package into any seekable writer and hand it back.
    pub fn write_to<W: Write + Seek>(&self, slides: &[RenderedSlide], writer: W) -> Result<W> {
        if slides.is_empty() {
            return Err(DeckError::PptxError("No slides to write".to_string()));
        }
        let mut ordered: Vec<&RenderedSlide> = slides.iter().collect();
        ordered.sort_by_key(|s| s.index);
        let count = ordered.len();

        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default();

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types_xml(count).as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS.as_bytes())?;

        zip.start_file("docProps/app.xml", options)?;
        zip.write_all(app_xml(count).as_bytes())?;

        zip.start_file("docProps/core.xml", options)?;
        zip.write_all(core_xml(&self.title).as_bytes())?;

        zip.start_file("ppt/presentation.xml", options)?;
        zip.write_all(self.presentation_xml(count).as_bytes())?;

        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
        zip.write_all(presentation_rels(count).as_bytes())?;

        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
        zip.write_all(SLIDE_MASTER.as_bytes())?;
        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
        zip.write_all(SLIDE_MASTER_RELS.as_bytes())?;

        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
        zip.write_all(SLIDE_LAYOUT.as_bytes())?;
        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        zip.write_all(SLIDE_LAYOUT_RELS.as_bytes())?;

        zip.start_file("ppt/theme/theme1.xml", options)?;
        zip.write_all(THEME.as_bytes())?;

        zip.start_file(
            format!("ppt/media/background.{}", self.background.extension()),
            options,
        )?;
        zip.write_all(&self.background.data)?;
        zip.start_file(format!("ppt/media/logo.{}", self.logo.extension()), options)?;
        zip.write_all(&self.logo.data)?;

        for (i, slide) in ordered.iter().enumerate() {
            let slide_num = i + 1;
            info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);
            zip.start_file(
                format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                options,
            )?;
            zip.write_all(self.slide_rels().as_bytes())?;

            zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;
            zip.write_all(self.slide_xml(slide).as_bytes())?;
        }

        info!("Finalizing PPTX file");
        Ok(zip.finish()?)
    }

    fn content_types_xml(&self, count: usize) -> String {
        let mut defaults = vec![
            ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
            ("xml", "application/xml"),
        ];
        for image in [&self.background, &self.logo] {
            let entry = (image.extension(), image.content_type());
            if !defaults.contains(&entry) {
                defaults.push(entry);
            }
        }

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
"#,
        );
        for (ext, content_type) in defaults {
            xml.push_str(&format!(
                "<Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                ext, content_type
            ));
        }
        xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#);
        for i in 1..=count {
            xml.push_str(&format!(
                "<Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n",
                i
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    fn presentation_xml(&self, count: usize) -> String {
        let slide_ids = (0..count)
            .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2))
            .collect::<Vec<String>>()
            .join("");
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {ns} saveSubsetFonts="1">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{slide_ids}</p:sldIdLst>
<p:sldSz cx="{cx}" cy="{cy}"/>
<p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
            ns = NAMESPACES,
            slide_ids = slide_ids,
            cx = self.geometry.size.cx,
            cy = self.geometry.size.cy
        )
    }

    fn slide_rels(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="{ns}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="{ns}/image" Target="../media/background.{bg}"/>
<Relationship Id="rId3" Type="{ns}/image" Target="../media/logo.{logo}"/>
</Relationships>"#,
            ns = REL_NS,
            bg = self.background.extension(),
            logo = self.logo.extension()
        )
    }

    /// Slide XML with the fixed layout. A picture that cannot be placed is
    /// logged and left out; the text boxes are always written.
    pub fn slide_xml(&self, slide: &RenderedSlide) -> String {
        let g = &self.geometry;
        let mut shapes = String::new();

        let background = picture_xml(2, "Background", "rId2", &self.background, g.background);
        let logo = picture_xml(
            3,
            "Logo",
            "rId3",
            &self.logo,
            g.logo(self.logo.scaled_height(g.logo_width)),
        );
        for placed in [background, logo] {
            match placed {
                Ok(xml) => shapes.push_str(&xml),
                Err(e) => warn!("Slide {}: {}", slide.index + 1, e),
            }
        }

        shapes.push_str(&text_box_xml(
            4,
            "Title",
            g.title,
            std::slice::from_ref(&slide.title),
            false,
        ));
        shapes.push_str(&text_box_xml(5, "Content", g.body, &slide.body, true));
        shapes.push_str(&text_box_xml(
            6,
            "Slide Number",
            g.page_number,
            std::slice::from_ref(&slide.page_number),
            false,
        ));

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {ns}>
<p:cSld>
<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
{shapes}</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            ns = NAMESPACES,
            shapes = shapes
        )
    }
}

/// Render and write a full deck in slide order.
pub fn build_presentation(
    slides: &[SlideRecord],
    style: &StyleConfig,
    assembler: &DeckAssembler,
    output_file: &Path,
) -> Result<()> {
    info!("Building presentation with {} slides", slides.len());
    let rendered = render_slides(slides, style);
    assembler.write(&rendered, output_file)
}

fn picture_xml(
    id: u32,
    name: &str,
    rel_id: &str,
    image: &ImageResource,
    rect: Rect,
) -> Result<String> {
    if image.width == 0 || image.height == 0 || rect.cx <= 0 || rect.cy <= 0 {
        return Err(DeckError::AssemblyError {
            element: name.to_lowercase(),
            message: format!(
                "{:?} has no usable size ({}x{} px, {}x{} EMU)",
                image.path, image.width, image.height, rect.cx, rect.cy
            ),
        });
    }
    Ok(format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="{name}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>
"#,
        id = id,
        name = name,
        rel_id = rel_id,
        x = rect.x,
        y = rect.y,
        cx = rect.cx,
        cy = rect.cy
    ))
}

fn text_box_xml(
    id: u32,
    name: &str,
    rect: Rect,
    paragraphs: &[StyledParagraph],
    autofit: bool,
) -> String {
    let body: String = if paragraphs.is_empty() {
        "<a:p/>".to_string()
    } else {
        paragraphs.iter().map(paragraph_xml).collect()
    };
    let fit = if autofit { "<a:spAutoFit/>" } else { "" };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0">{fit}</a:bodyPr><a:lstStyle/>{body}</p:txBody></p:sp>
"#,
        id = id,
        name = name,
        x = rect.x,
        y = rect.y,
        cx = rect.cx,
        cy = rect.cy,
        fit = fit,
        body = body
    )
}

fn hundredths(pt: f32) -> i64 {
    (pt * 100.0).round() as i64
}

fn paragraph_xml(paragraph: &StyledParagraph) -> String {
    let algn = match paragraph.alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    };
    let mut xml = format!(
        r#"<a:p><a:pPr lvl="{lvl}" marL="{mar}" indent="0" algn="{algn}">"#,
        lvl = paragraph.indent_level.min(8),
        mar = paragraph.indent_level as i64 * inches(0.5),
        algn = algn
    );
    if paragraph.space_before_pt > 0.0 {
        xml.push_str(&format!(
            r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
            hundredths(paragraph.space_before_pt)
        ));
    }
    if paragraph.space_after_pt > 0.0 {
        xml.push_str(&format!(
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            hundredths(paragraph.space_after_pt)
        ));
    }
    xml.push_str("<a:buNone/></a:pPr>");

    for run in &paragraph.runs {
        xml.push_str(&run_xml(run));
    }

    let end_size = paragraph
        .runs
        .last()
        .map(|r| r.size_pt)
        .unwrap_or(crate::content::design::BODY_SIZE);
    xml.push_str(&format!(
        r#"<a:endParaRPr lang="ja-JP" altLang="en-US" sz="{}" dirty="0"/></a:p>"#,
        hundredths(end_size)
    ));
    xml
}

fn run_properties(run: &StyledRun) -> String {
    let mut attrs = format!(
        r#"lang="ja-JP" altLang="en-US" sz="{}""#,
        hundredths(run.size_pt)
    );
    if run.bold {
        attrs.push_str(r#" b="1""#);
    }
    if run.italic {
        attrs.push_str(r#" i="1""#);
    }
    if run.underline {
        attrs.push_str(r#" u="sng""#);
    }
    format!(
        r#"<a:rPr {attrs} dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{latin}"/><a:ea typeface="{ea}"/><a:cs typeface="{ea}"/></a:rPr>"#,
        attrs = attrs,
        color = run.color.hex(),
        latin = escape(run.font_fallback.as_str()),
        ea = escape(run.font_family.as_str())
    )
}

/// Newlines inside a run become `<a:br/>` elements.
fn run_xml(run: &StyledRun) -> String {
    let props = run_properties(run);
    let mut xml = String::new();
    for (i, segment) in run.text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str(&format!("<a:br>{}</a:br>", props));
        }
        if !segment.is_empty() {
            xml.push_str(&format!(
                "<a:r>{}<a:t>{}</a:t></a:r>",
                props,
                escape(xml_safe(segment).as_str())
            ));
        }
    }
    xml
}

/// Drop control characters XML 1.0 cannot carry.
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\t')
        .collect()
}

fn app_xml(count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
<Application>md2pptx-builder</Application>
<Slides>{}</Slides>
</Properties>"#,
        count
    )
}

fn core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:title>{}</dc:title>
<dc:creator>md2pptx-builder</dc:creator>
<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
<cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(xml_safe(title).as_str()),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

fn presentation_rels(count: usize) -> String {
    let mut rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="{ns}/slideMaster" Target="slideMasters/slideMaster1.xml"/>
"#,
        ns = REL_NS
    );
    for i in 0..count {
        rels.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"{}/slide\" Target=\"slides/slide{}.xml\"/>\n",
            i + 2,
            REL_NS,
            i + 1
        ));
    }
    rels.push_str(&format!(
        "<Relationship Id=\"rId{}\" Type=\"{}/theme\" Target=\"theme/theme1.xml\"/>\n",
        count + 2,
        REL_NS
    ));
    rels.push_str("</Relationships>");
    rels
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>"#;

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">
<p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="md2pptx">
<a:themeElements>
<a:clrScheme name="md2pptx"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme>
<a:fontScheme name="md2pptx"><a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme>
<a:fmtScheme name="md2pptx"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme>
</a:themeElements>
</a:theme>"#;
