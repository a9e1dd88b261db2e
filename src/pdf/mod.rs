//! PDF generation: layout planning and rendering.
//!
//! Split per the builder-pipeline design: [`plan_invoice`] lays the
//! invoice out into abstract draw commands with absolute coordinates,
//! and [`render_invoice`] feeds that plan to the lopdf backend. The plan
//! is a pure function of its inputs, so pagination is deterministic and
//! testable without parsing PDF bytes.

mod assets;
pub mod command;
mod layout;
mod metrics;
mod profile;
mod render;

pub use command::{
    AssetId, Color, DrawCmd, Font, PAGE_HEIGHT, PAGE_WIDTH, Page, RenderedDocument, Stroke,
};
pub use layout::plan_invoice;
pub use profile::CompanyProfile;
pub use render::{
    PdfArtifact, render_invoice, render_invoice_now, suggested_file_name,
};
