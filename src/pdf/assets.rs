//! Bundled image assets: logo, contact icons, signature overlays.
//!
//! PNGs ship inside the binary via `include_bytes!` and decode exactly
//! once into immutable RGB bitmaps shared by all render calls. A decode
//! failure is fatal — the header cannot be drawn without its assets.

use std::sync::OnceLock;

use crate::core::{BijakError, Signatory};

use super::command::AssetId;

const LOGO_PNG: &[u8] = include_bytes!("../../assets/logo.png");
const PHONE_PNG: &[u8] = include_bytes!("../../assets/phone.png");
const EMAIL_PNG: &[u8] = include_bytes!("../../assets/email.png");
const SIGN_PROPRIETOR_PNG: &[u8] = include_bytes!("../../assets/sign_proprietor.png");
const SIGN_ACCOUNTANT_PNG: &[u8] = include_bytes!("../../assets/sign_accountant.png");

/// A decoded, render-ready image: 8-bit RGB rows, no alpha.
#[derive(Debug, Clone)]
pub(crate) struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

#[derive(Debug)]
pub(crate) struct AssetStore {
    logo: Bitmap,
    phone: Bitmap,
    email: Bitmap,
    sign_proprietor: Bitmap,
    sign_accountant: Bitmap,
}

impl AssetStore {
    pub(crate) fn get(&self, id: AssetId) -> &Bitmap {
        match id {
            AssetId::Logo => &self.logo,
            AssetId::PhoneIcon => &self.phone,
            AssetId::EmailIcon => &self.email,
            AssetId::SignatureProprietor => &self.sign_proprietor,
            AssetId::SignatureAccountant => &self.sign_accountant,
        }
    }
}

impl AssetId {
    pub(crate) fn for_signatory(signatory: Signatory) -> AssetId {
        match signatory {
            Signatory::Proprietor => AssetId::SignatureProprietor,
            Signatory::Accountant => AssetId::SignatureAccountant,
        }
    }

    /// XObject resource name in content streams.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            AssetId::Logo => "Im1",
            AssetId::PhoneIcon => "Im2",
            AssetId::EmailIcon => "Im3",
            AssetId::SignatureProprietor => "Im4",
            AssetId::SignatureAccountant => "Im5",
        }
    }
}

static STORE: OnceLock<Result<AssetStore, String>> = OnceLock::new();

/// The process-wide asset store. First call decodes; later calls are
/// lock-free reads of the same immutable data.
pub(crate) fn store() -> Result<&'static AssetStore, BijakError> {
    STORE
        .get_or_init(load_all)
        .as_ref()
        .map_err(|e| BijakError::AssetLoad(e.clone()))
}

fn load_all() -> Result<AssetStore, String> {
    Ok(AssetStore {
        logo: decode_png(LOGO_PNG).map_err(|e| format!("logo.png: {e}"))?,
        phone: decode_png(PHONE_PNG).map_err(|e| format!("phone.png: {e}"))?,
        email: decode_png(EMAIL_PNG).map_err(|e| format!("email.png: {e}"))?,
        sign_proprietor: decode_png(SIGN_PROPRIETOR_PNG)
            .map_err(|e| format!("sign_proprietor.png: {e}"))?,
        sign_accountant: decode_png(SIGN_ACCOUNTANT_PNG)
            .map_err(|e| format!("sign_accountant.png: {e}"))?,
    })
}

fn decode_png(bytes: &[u8]) -> Result<Bitmap, String> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().map_err(|e| e.to_string())?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(format!("unsupported bit depth {:?}", info.bit_depth));
    }
    buf.truncate(info.buffer_size());

    let rgb = match info.color_type {
        png::ColorType::Rgb => buf,
        // Drop the alpha channel; assets are authored on opaque white.
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
        other => return Err(format!("unsupported color type {other:?}")),
    };

    Ok(Bitmap {
        width: info.width,
        height: info.height,
        rgb,
    })
}
