//! Rendering backend: consumes a [`RenderedDocument`] and emits PDF bytes
//! via lopdf.
//!
//! The backend is deliberately dumb — all layout decisions were made by
//! the planner; this module only translates draw commands into content
//! stream operators, flipping the y axis into PDF's bottom-up space.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use tracing::{debug, warn};

use crate::core::{BijakError, Invoice};

use super::assets::{self, AssetStore};
use super::command::{DrawCmd, Font, PAGE_HEIGHT, PAGE_WIDTH, Page, RenderedDocument};
use super::layout;
use super::profile::CompanyProfile;

/// The finished artifact: PDF bytes plus the deterministically derived
/// download file name.
#[derive(Debug, Clone)]
pub struct PdfArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl PdfArtifact {
    /// Best-effort "download" side effect: write the artifact into a
    /// directory under its suggested name. Failure here never invalidates
    /// the bytes already produced.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Suggested download name: `Invoice-<number>-<timestamp>.pdf`.
pub fn suggested_file_name(invoice_number: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "Invoice-{}-{}.pdf",
        invoice_number,
        generated_at.format("%Y%m%d%H%M%S")
    )
}

/// Plan and render an invoice to a PDF artifact.
///
/// The generation timestamp only influences the file name — the page
/// content is a pure function of the invoice and profile.
pub fn render_invoice(
    invoice: &Invoice,
    profile: &CompanyProfile,
    generated_at: DateTime<Utc>,
) -> Result<PdfArtifact, BijakError> {
    let store = assets::store()?;
    let plan = layout::plan_invoice(invoice, profile)?;
    debug!(pages = plan.page_count(), "layout planned");

    let bytes = emit_with_fallback(&plan, store)?;
    Ok(PdfArtifact {
        bytes,
        file_name: suggested_file_name(&invoice.header.number, generated_at),
    })
}

/// [`render_invoice`] stamped with the current time.
pub fn render_invoice_now(
    invoice: &Invoice,
    profile: &CompanyProfile,
) -> Result<PdfArtifact, BijakError> {
    render_invoice(invoice, profile, Utc::now())
}

/// Primary emission compresses content streams. If it fails for any
/// reason, exactly one fallback attempt re-emits uncompressed before
/// the failure is reported with both causes attached.
fn emit_with_fallback(
    plan: &RenderedDocument,
    store: &AssetStore,
) -> Result<Vec<u8>, BijakError> {
    match emit(plan, store, true) {
        Ok(bytes) => Ok(bytes),
        Err(primary) => {
            warn!(%primary, "primary emission failed, attempting uncompressed fallback");
            emit(plan, store, false).map_err(|fallback| {
                BijakError::Render(format!("primary: {primary}; fallback: {fallback}"))
            })
        }
    }
}

fn emit(plan: &RenderedDocument, store: &AssetStore, compress: bool) -> Result<Vec<u8>, String> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold, Font::Oblique] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), Object::Reference(font_id));
    }

    let mut xobjects = Dictionary::new();
    for asset in plan.used_assets() {
        let bitmap = store.get(asset);
        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => bitmap.width as i64,
                "Height" => bitmap.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            bitmap.rgb.clone(),
        );
        let image_id = doc.add_object(image);
        xobjects.set(asset.resource_name(), Object::Reference(image_id));
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(fonts),
        "XObject" => Object::Dictionary(xobjects),
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in &plan.pages {
        let content = Content {
            operations: page_operations(page),
        };
        let data = content.encode().map_err(|e| e.to_string())?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => Object::Reference(resources_id),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    if compress {
        doc.compress();
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(|e| e.to_string())?;
    Ok(bytes)
}

/// Translate one page's draw commands into content stream operators.
fn page_operations(page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();
    for cmd in &page.commands {
        match cmd {
            DrawCmd::Text {
                x,
                y,
                text,
                font,
                size,
                color,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "rg",
                    vec![color.r.into(), color.g.into(), color.b.into()],
                ));
                ops.push(Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), (*size).into()],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![(*x).into(), (PAGE_HEIGHT - *y).into()],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_winansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawCmd::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                ops.push(Operation::new("q", vec![]));
                if let Some(color) = fill {
                    ops.push(Operation::new(
                        "rg",
                        vec![color.r.into(), color.g.into(), color.b.into()],
                    ));
                }
                if let Some(stroke) = stroke {
                    ops.push(Operation::new(
                        "RG",
                        vec![
                            stroke.color.r.into(),
                            stroke.color.g.into(),
                            stroke.color.b.into(),
                        ],
                    ));
                    ops.push(Operation::new("w", vec![stroke.width.into()]));
                }
                ops.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (PAGE_HEIGHT - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                let paint = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    _ => "S",
                };
                ops.push(Operation::new(paint, vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawCmd::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new(
                    "RG",
                    vec![color.r.into(), color.g.into(), color.b.into()],
                ));
                ops.push(Operation::new("w", vec![(*width).into()]));
                ops.push(Operation::new(
                    "m",
                    vec![(*x1).into(), (PAGE_HEIGHT - *y1).into()],
                ));
                ops.push(Operation::new(
                    "l",
                    vec![(*x2).into(), (PAGE_HEIGHT - *y2).into()],
                ));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawCmd::Image {
                x,
                y,
                width,
                height,
                asset,
            } => {
                ops.push(Operation::new("q", vec![]));
                // cm maps the unit square onto the placement rect.
                ops.push(Operation::new(
                    "cm",
                    vec![
                        (*width).into(),
                        0.into(),
                        0.into(),
                        (*height).into(),
                        (*x).into(),
                        (PAGE_HEIGHT - y - height).into(),
                    ],
                ));
                ops.push(Operation::new("Do", vec![asset.resource_name().into()]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

/// Map text to WinAnsi bytes. ASCII passes through; the handful of
/// typographic characters that matter get their WinAnsi code points,
/// anything else degrades to '?'.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..=0x7e).contains(&code) {
                code as u8
            } else {
                match c {
                    '\u{2018}' => 0x91,
                    '\u{2019}' => 0x92,
                    '\u{201C}' => 0x93,
                    '\u{201D}' => 0x94,
                    '\u{2013}' => 0x96,
                    '\u{2014}' => 0x97,
                    _ => b'?',
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winansi_passthrough_and_degrade() {
        assert_eq!(encode_winansi("Invoice No: 42"), b"Invoice No: 42".to_vec());
        assert_eq!(encode_winansi("\u{2013}"), vec![0x96]);
        assert_eq!(encode_winansi("\u{20B9}"), vec![b'?']);
    }

    #[test]
    fn file_name_is_deterministic() {
        let ts = DateTime::parse_from_rfc3339("2026-04-12T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            suggested_file_name("INV-2026-00042", ts),
            "Invoice-INV-2026-00042-20260412103000.pdf"
        );
    }
}
