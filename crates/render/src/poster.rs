//! The render unit: draw one guest name onto a copy of the template.
//!
//! Text is rasterized by building a poster-sized SVG document containing a
//! single `<text>` element and rendering it with `resvg` on top of the
//! template pixels. The name is horizontally centered and vertically fixed
//! at a constant anchor, filled white.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use resvg::tiny_skia;
use usvg::fontdb;

use crate::error::RenderError;
use crate::template::Template;

/// Fill color for the guest name.
const TEXT_FILL: &str = "#ffffff";

/// Text placement and font selection for a batch.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Path to the font file loaded fresh on every render invocation.
    pub font_path: PathBuf,
    /// Font size in SVG user units (pixels).
    pub font_size: f32,
    /// Vertical anchor: the name is centered on this y coordinate.
    pub anchor_y: f32,
}

/// Render one personalized poster into a new image.
///
/// Builds an independent drawing surface from the shared template, so
/// concurrent invocations never contend on shared mutable state.
pub fn render_poster(
    template: &Template,
    style: &TextStyle,
    name: &str,
) -> Result<RgbaImage, RenderError> {
    let (db, family) = load_font(&style.font_path)?;

    let width = template.width();
    let height = template.height();

    let svg = text_overlay_svg(width, height, &family, style, name);
    let mut options = usvg::Options::default();
    options.fontdb = Arc::new(db);
    let tree = usvg::Tree::from_str(&svg, &options)?;

    let mut surface = surface_from_template(template)?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut surface.as_mut());

    Ok(image_from_surface(&surface))
}

/// Render one personalized poster and write it to `out_path` as PNG.
pub fn render_poster_to_file(
    template: &Template,
    style: &TextStyle,
    name: &str,
    out_path: &Path,
) -> Result<(), RenderError> {
    let poster = render_poster(template, style, name)?;
    poster.save_with_format(out_path, image::ImageFormat::Png)?;
    Ok(())
}

/// Load the font file into a fresh database and report its family name.
///
/// Loaded per invocation rather than per batch so a font failure stays
/// scoped to one name.
fn load_font(path: &Path) -> Result<(fontdb::Database, String), RenderError> {
    let mut db = fontdb::Database::new();
    db.load_font_file(path)
        .map_err(|source| RenderError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let family = db
        .faces()
        .next()
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
        .ok_or_else(|| RenderError::EmptyFontFamily {
            path: path.to_path_buf(),
        })?;

    Ok((db, family))
}

/// Build the SVG overlay document for one name.
fn text_overlay_svg(
    width: u32,
    height: u32,
    family: &str,
    style: &TextStyle,
    name: &str,
) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="central" "#,
            r#"font-family="{family}" font-size="{size}" fill="{fill}">{name}</text>"#,
            "</svg>"
        ),
        w = width,
        h = height,
        x = width as f32 / 2.0,
        y = style.anchor_y,
        family = xml_escape(family),
        size = style.font_size,
        fill = TEXT_FILL,
        name = xml_escape(name),
    )
}

/// Escape a string for inclusion in SVG text content or attribute values.
fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Copy the template pixels into a new premultiplied drawing surface.
fn surface_from_template(template: &Template) -> Result<tiny_skia::Pixmap, RenderError> {
    let width = template.width();
    let height = template.height();
    let mut surface =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;

    let src = template.pixels().as_raw();
    for (dst, px) in surface.data_mut().chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        dst.copy_from_slice(&premul_rgba8(px[0], px[1], px[2], px[3]));
    }
    Ok(surface)
}

/// Convert a rendered surface back to straight-alpha RGBA.
fn image_from_surface(surface: &tiny_skia::Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(surface.width(), surface.height());
    for (dst, px) in out.pixels_mut().zip(surface.pixels()) {
        let c = px.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn style(font_path: &Path) -> TextStyle {
        TextStyle {
            font_path: font_path.to_path_buf(),
            font_size: 70.0,
            anchor_y: 640.0,
        }
    }

    #[test]
    fn missing_font_is_a_font_load_error() {
        let template = Template::from_image(RgbaImage::from_pixel(
            8,
            8,
            image::Rgba([0, 0, 0, 255]),
        ));
        let err = render_poster(
            &template,
            &style(Path::new("/no/such/font.ttf")),
            "Alice",
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::FontLoad { .. }));
    }

    #[test]
    fn font_file_without_faces_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let err = load_font(&path).unwrap_err();
        // fontdb either refuses the file outright or yields no faces.
        assert!(matches!(
            err,
            RenderError::FontLoad { .. } | RenderError::EmptyFontFamily { .. }
        ));
    }

    #[test]
    fn overlay_svg_centers_text_and_escapes_name() {
        let svg = text_overlay_svg(
            200,
            100,
            "Ananda",
            &TextStyle {
                font_path: PathBuf::from("Ananda.ttf"),
                font_size: 70.0,
                anchor_y: 64.0,
            },
            "Tom & Jerry",
        );
        assert!(svg.contains(r#"x="100""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("Tom &amp; Jerry"));
        assert!(!svg.contains("Tom & Jerry"));
    }

    #[test]
    fn xml_escape_handles_markup_characters() {
        assert_eq!(xml_escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn opaque_template_survives_surface_round_trip() {
        let template = Template::from_image(RgbaImage::from_pixel(
            4,
            3,
            image::Rgba([12, 200, 7, 255]),
        ));
        let surface = surface_from_template(&template).unwrap();
        let restored = image_from_surface(&surface);
        assert_eq!(restored.as_raw(), template.pixels().as_raw());
    }

    #[test]
    fn premultiply_is_identity_for_opaque_pixels() {
        assert_eq!(premul_rgba8(12, 200, 7, 255), [12, 200, 7, 255]);
        assert_eq!(premul_rgba8(50, 50, 50, 0), [0, 0, 0, 0]);
    }
}
