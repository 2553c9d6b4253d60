//! Fixed package parts and builders for the parts that depend on the deck.
//!
//! The master, layout and theme are the smallest set PowerPoint and
//! LibreOffice both open without a repair prompt.

use std::fmt::Write;

use super::xml::escape_xml;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_BASE: &str = "application/vnd.openxmlformats-officedocument";

/// Slide size, 10in x 7.5in (4:3).
pub const SLIDE_CX: i64 = 9_144_000;
pub const SLIDE_CY: i64 = 6_858_000;

/// First id assigned in `p:sldIdLst`; PowerPoint requires ids >= 256.
pub const FIRST_SLIDE_ID: u32 = 256;
const MASTER_ID: u32 = 2_147_483_648;
const LAYOUT_ID: u32 = 2_147_483_649;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub fn content_types(slide_count: usize) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    let overrides = [
        ("/ppt/presentation.xml", "presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "theme+xml"),
        ("/ppt/presProps.xml", "presentationml.presProps+xml"),
        ("/ppt/viewProps.xml", "presentationml.viewProps+xml"),
        ("/ppt/tableStyles.xml", "presentationml.tableStyles+xml"),
        ("/docProps/app.xml", "extended-properties+xml"),
    ];
    for (part, kind) in overrides {
        let _ = write!(xml, r#"<Override PartName="{}" ContentType="{}.{}"/>"#, part, CT_BASE, kind);
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    for n in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}.presentationml.slide+xml"/>"#,
            n, CT_BASE
        );
    }
    xml.push_str("</Types>");
    xml
}

pub fn root_rels() -> String {
    format!(
        r#"{decl}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{base}/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="{base}/extended-properties" Target="docProps/app.xml"/></Relationships>"#,
        decl = XML_DECL,
        base = REL_BASE
    )
}

/// Relationship id of slide `n` (1-based) in `presentation.xml.rels`.
pub fn slide_rel_id(n: usize) -> String {
    format!("rId{}", n + 2)
}

pub fn presentation_rels(slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    let _ = write!(
        xml,
        r#"<Relationship Id="rId1" Type="{0}/slideMaster" Target="slideMasters/slideMaster1.xml"/><Relationship Id="rId2" Type="{0}/theme" Target="theme/theme1.xml"/>"#,
        REL_BASE
    );
    for n in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            slide_rel_id(n),
            REL_BASE,
            n
        );
    }
    let next = slide_count + 3;
    let _ = write!(
        xml,
        r#"<Relationship Id="rId{}" Type="{base}/presProps" Target="presProps.xml"/><Relationship Id="rId{}" Type="{base}/viewProps" Target="viewProps.xml"/><Relationship Id="rId{}" Type="{base}/tableStyles" Target="tableStyles.xml"/>"#,
        next,
        next + 1,
        next + 2,
        base = REL_BASE
    );
    xml.push_str("</Relationships>");
    xml
}

pub fn presentation(slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    let _ = write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    );
    let _ = write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>"#,
        MASTER_ID
    );
    for n in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<p:sldId id="{}" r:id="{}"/>"#,
            FIRST_SLIDE_ID + (n as u32 - 1),
            slide_rel_id(n)
        );
    }
    let _ = write!(
        xml,
        r#"</p:sldIdLst><p:sldSz cx="{}" cy="{}" type="screen4x3"/><p:notesSz cx="6858000" cy="9144000"/><p:defaultTextStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:defaultTextStyle></p:presentation>"#,
        SLIDE_CX, SLIDE_CY
    );
    xml
}

pub fn slide_rels() -> String {
    format!(
        r#"{}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/></Relationships>"#,
        XML_DECL, REL_BASE
    )
}

pub fn slide_master() -> String {
    format!(
        r#"{decl}<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}"><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{title}{body}</p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="{layout}" r:id="rId1"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="3200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle><p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="1800"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle><p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:otherStyle></p:txStyles></p:sldMaster>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        title = placeholder_sp(2, "Title Placeholder 1", r#"<p:ph type="title"/>"#, 457_200, 274_638, 8_229_600, 1_143_000),
        body = placeholder_sp(3, "Text Placeholder 2", r#"<p:ph type="body" idx="1"/>"#, 457_200, 1_600_200, 8_229_600, 4_525_963),
        layout = LAYOUT_ID
    )
}

pub fn slide_master_rels() -> String {
    format!(
        r#"{0}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{1}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="{1}/theme" Target="../theme/theme1.xml"/></Relationships>"#,
        XML_DECL, REL_BASE
    )
}

pub fn slide_layout() -> String {
    format!(
        r#"{decl}<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="obj" preserve="1"><p:cSld name="Title and Content"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{title}{body}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        title = placeholder_ref(2, "Title 1", r#"<p:ph type="title"/>"#),
        body = placeholder_ref(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#)
    )
}

pub fn slide_layout_rels() -> String {
    format!(
        r#"{}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#,
        XML_DECL, REL_BASE
    )
}

fn placeholder_sp(id: u32, name: &str, ph: &str, x: i64, y: i64, cx: i64, cy: i64) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#
    )
}

fn placeholder_ref(id: u32, name: &str, ph: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#
    )
}

pub fn theme() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    let _ = write!(xml, r#"<a:theme xmlns:a="{}" name="Office Theme"><a:themeElements>"#, NS_A);
    xml.push_str(r#"<a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1F497D"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2><a:accent1><a:srgbClr val="4F81BD"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2><a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4><a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6><a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink></a:clrScheme>"#);
    xml.push_str(r#"<a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme>"#);
    xml.push_str(r#"<a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme>"#);
    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

pub fn pres_props() -> String {
    format!(r#"{}<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#, XML_DECL, NS_A, NS_R, NS_P)
}

pub fn view_props() -> String {
    format!(
        r#"{}<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr><p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        XML_DECL, NS_A, NS_R, NS_P
    )
}

pub fn table_styles() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL, NS_A
    )
}

/// `docProps/core.xml`; `created` is an RFC 3339 UTC timestamp.
pub fn core_props(title: &str, created: &str) -> String {
    format!(
        r#"{decl}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:creator>SlideFlow</dc:creator><cp:lastModifiedBy>SlideFlow</cp:lastModifiedBy><cp:revision>1</cp:revision><dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified></cp:coreProperties>"#,
        decl = XML_DECL,
        title = escape_xml(title),
        created = created
    )
}

pub fn app_props(slide_count: usize) -> String {
    format!(
        r#"{}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>SlideFlow</Application><Slides>{}</Slides><PresentationFormat>On-screen Show (4:3)</PresentationFormat></Properties>"#,
        XML_DECL, slide_count
    )
}
