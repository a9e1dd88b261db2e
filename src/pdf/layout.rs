//! Layout planner: turns one invoice into a deterministic page sequence
//! of draw commands.
//!
//! The planner walks a fixed block order — header, party boxes, line-item
//! table, totals, amount-in-words, footer — threading an explicit
//! [`LayoutCursor`] through each block. Whenever a block (or a table row)
//! would cross its page-break threshold, the planner opens a fresh page
//! and redraws the full company header so every printed page is
//! self-identifying.

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{
    BijakError, Invoice, InvoiceTotals, amount_in_words, format_amount, format_signed,
};

use super::command::{
    AssetId, Color, DrawCmd, Font, PAGE_HEIGHT, PAGE_WIDTH, Page, RenderedDocument, Stroke,
};
use super::metrics;
use super::profile::CompanyProfile;

// Page geometry. The decorative frame sits inside the physical edge;
// content keeps a wider margin inside the frame.
const FRAME_INSET: f64 = 14.0;
const MARGIN: f64 = 30.0;
const CONTENT_RIGHT: f64 = PAGE_WIDTH - MARGIN;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const ROW_HEIGHT: f64 = 18.0;
const TABLE_HEADER_HEIGHT: f64 = 20.0;
/// Bottom band reserved while placing table rows so the totals section is
/// never squeezed against the page edge.
const TABLE_BOTTOM_RESERVE: f64 = 170.0;
/// Minimum room the totals block (plus words and footer) needs; less than
/// this and the whole block moves to a fresh page.
const TOTALS_MIN_SPACE: f64 = 280.0;
const TOTALS_PANEL_WIDTH: f64 = 230.0;
const FOOTER_GAP: f64 = 24.0;
const FOOTER_FROM_BOTTOM: f64 = 130.0;

const PARTY_GUTTER: f64 = 12.0;
const BOX_PAD: f64 = 6.0;

const DARK: Color = Color::rgb(0.13, 0.15, 0.19);
const SHADE: Color = Color::rgb(0.92, 0.93, 0.95);
const FAINT: Color = Color::rgb(0.965, 0.97, 0.975);
const RULE: Color = Color::rgb(0.78, 0.78, 0.78);
const GRAY: Color = Color::rgb(0.35, 0.35, 0.35);

/// Currency marker drawn immediately left of amounts. The builtin Type1
/// faces carry no rupee glyph, so the conventional "Rs." marker is used.
const CURRENCY: &str = "Rs.";
const CURRENCY_SIZE: f64 = 6.5;

/// Explicit vertical cursor threaded through every block function.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutCursor {
    pub y: f64,
}

/// Plan the full page sequence for an invoice.
///
/// Pure function of its inputs: the same invoice and profile always
/// produce identical pages.
pub fn plan_invoice(
    invoice: &Invoice,
    profile: &CompanyProfile,
) -> Result<RenderedDocument, BijakError> {
    // Totals are computed fresh per render; invalid amounts fail here,
    // before any page exists.
    let totals = invoice.totals()?;

    let mut planner = Planner {
        invoice,
        totals,
        profile,
        pages: Vec::new(),
        current: Vec::new(),
    };

    let mut cursor = planner.start_page();
    planner.party_boxes(&mut cursor);
    planner.line_table(&mut cursor)?;
    planner.totals_block(&mut cursor);
    planner.words_and_lorry(&mut cursor);
    planner.footer(&mut cursor);

    Ok(planner.finish())
}

struct Planner<'a> {
    invoice: &'a Invoice,
    totals: InvoiceTotals,
    profile: &'a CompanyProfile,
    pages: Vec<Page>,
    current: Vec<DrawCmd>,
}

impl Planner<'_> {
    // ── page management ─────────────────────────────────────────────

    /// Open a fresh page with frame and full header; returns the cursor
    /// positioned below the header.
    fn start_page(&mut self) -> LayoutCursor {
        if !self.current.is_empty() {
            let commands = std::mem::take(&mut self.current);
            self.pages.push(Page { commands });
            debug!(page = self.pages.len() + 1, "page break");
        }
        self.frame();
        let y = self.header();
        LayoutCursor { y }
    }

    fn finish(mut self) -> RenderedDocument {
        if !self.current.is_empty() {
            let commands = std::mem::take(&mut self.current);
            self.pages.push(Page { commands });
        }
        RenderedDocument { pages: self.pages }
    }

    // ── drawing helpers ─────────────────────────────────────────────

    fn text(&mut self, x: f64, y: f64, text: impl Into<String>, font: Font, size: f64) {
        self.text_colored(x, y, text, font, size, Color::BLACK);
    }

    fn text_colored(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<String>,
        font: Font,
        size: f64,
        color: Color,
    ) {
        self.current.push(DrawCmd::Text {
            x,
            y,
            text: text.into(),
            font,
            size,
            color,
        });
    }

    /// Text centered on `cx`.
    fn text_centered(&mut self, cx: f64, y: f64, text: &str, font: Font, size: f64, color: Color) {
        let w = metrics::text_width(text, font, size);
        self.text_colored(cx - w / 2.0, y, text, font, size, color);
    }

    /// Text with its right edge at `rx`. Returns the left edge.
    fn text_right(&mut self, rx: f64, y: f64, text: &str, font: Font, size: f64, color: Color) -> f64 {
        let w = metrics::text_width(text, font, size);
        self.text_colored(rx - w, y, text, font, size, color);
        rx - w
    }

    /// Right-aligned currency value with the small marker immediately to
    /// its left.
    fn currency_right(&mut self, rx: f64, y: f64, value: &str, font: Font, size: f64, color: Color) {
        let left = self.text_right(rx, y, value, font, size, color);
        self.text_right(left - 2.0, y, CURRENCY, font, CURRENCY_SIZE, color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.current.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            fill: Some(color),
            stroke: None,
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color, line: f64) {
        self.current.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(Stroke { color, width: line }),
        });
    }

    fn hline(&mut self, x1: f64, x2: f64, y: f64, color: Color, width: f64) {
        self.current.push(DrawCmd::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            width,
            color,
        });
    }

    fn image(&mut self, x: f64, y: f64, width: f64, height: f64, asset: AssetId) {
        self.current.push(DrawCmd::Image {
            x,
            y,
            width,
            height,
            asset,
        });
    }

    // ── blocks ──────────────────────────────────────────────────────

    /// Decorative outer border inset from the physical page edge.
    fn frame(&mut self) {
        self.stroke_rect(
            FRAME_INSET,
            FRAME_INSET,
            PAGE_WIDTH - 2.0 * FRAME_INSET,
            PAGE_HEIGHT - 2.0 * FRAME_INSET,
            DARK,
            1.2,
        );
    }

    /// Company header: logo, centered identity block, contact line,
    /// document-type box. Drawn on every page. Returns the content y
    /// below the header.
    fn header(&mut self) -> f64 {
        let invoice = self.invoice;
        let profile = self.profile;
        let cx = PAGE_WIDTH / 2.0;

        self.image(MARGIN, 26.0, 46.0, 46.0, AssetId::Logo);

        // Document-type box anchored top-right.
        let label = if invoice.gst_enabled {
            "TAX INVOICE"
        } else {
            "INVOICE"
        };
        let box_w = 104.0;
        self.stroke_rect(CONTENT_RIGHT - box_w, 26.0, box_w, 24.0, DARK, 1.0);
        self.text_centered(
            CONTENT_RIGHT - box_w / 2.0,
            42.0,
            label,
            Font::Bold,
            10.5,
            DARK,
        );

        self.text_centered(cx, 46.0, &profile.name, Font::Bold, 19.0, Color::BLACK);
        let mut line_y = 60.0;
        for line in profile.address_lines.iter().take(2) {
            self.text_centered(cx, line_y, line, Font::Regular, 8.5, GRAY);
            line_y += 11.0;
        }
        if let Some(gstin) = &profile.gstin {
            self.text_centered(cx, line_y, &format!("GSTIN: {gstin}"), Font::Bold, 8.5, Color::BLACK);
            line_y += 11.0;
        }

        // Phone left of center, email right of center, one shared baseline.
        let contact_y = line_y + 5.0;
        let phone_w = metrics::text_width(&profile.phone, Font::Regular, 8.5);
        self.image(cx - 40.0 - phone_w - 12.0, contact_y - 7.5, 9.0, 9.0, AssetId::PhoneIcon);
        self.text_colored(cx - 40.0 - phone_w, contact_y, profile.phone.as_str(), Font::Regular, 8.5, GRAY);
        self.image(cx + 40.0, contact_y - 7.5, 9.0, 9.0, AssetId::EmailIcon);
        self.text_colored(cx + 52.0, contact_y, profile.email.as_str(), Font::Regular, 8.5, GRAY);

        let rule_y = contact_y + 9.0;
        self.hline(MARGIN, CONTENT_RIGHT, rule_y, DARK, 1.0);

        // Invoice number and bill date, either side below the rule.
        let meta_y = rule_y + 14.0;
        self.text(
            MARGIN,
            meta_y,
            format!("Invoice No: {}", invoice.header.number),
            Font::Bold,
            9.0,
        );
        self.text_right(
            CONTENT_RIGHT,
            meta_y,
            &format!("Date: {}", invoice.header.bill_date.format("%d-%m-%Y")),
            Font::Bold,
            9.0,
            Color::BLACK,
        );

        meta_y + 12.0
    }

    /// Bill To / Ship To boxes, side by side with a small gutter.
    fn party_boxes(&mut self, cursor: &mut LayoutCursor) {
        let invoice = self.invoice;
        let box_w = (CONTENT_WIDTH - PARTY_GUTTER) / 2.0;
        let left_x = MARGIN;
        let right_x = MARGIN + box_w + PARTY_GUTTER;

        let bill_lines = party_lines(&invoice.billing, box_w);
        let ship_lines = party_lines(&invoice.shipping, box_w);

        let strip_h = 16.0;
        let content_h = |lines: &[PartyLine]| -> f64 {
            lines.iter().map(|l| l.size + 4.0).sum::<f64>()
        };
        let box_h = strip_h
            + BOX_PAD
            + content_h(&bill_lines).max(content_h(&ship_lines))
            + BOX_PAD;

        for (x, title, lines) in [
            (left_x, "Bill To", &bill_lines),
            (right_x, "Ship To", &ship_lines),
        ] {
            self.stroke_rect(x, cursor.y, box_w, box_h, RULE, 0.8);
            self.fill_rect(x, cursor.y, box_w, strip_h, SHADE);
            self.text(x + BOX_PAD, cursor.y + 11.5, title, Font::Bold, 9.0);

            let mut y = cursor.y + strip_h + BOX_PAD;
            for line in lines {
                y += line.size + 4.0;
                let mut text_x = x + BOX_PAD;
                if let Some(icon) = line.icon {
                    self.image(text_x, y - line.size + 0.5, 8.0, 8.0, icon);
                    text_x += 11.0;
                }
                self.text_colored(text_x, y, line.text.clone(), line.font, line.size, line.color);
            }
        }

        cursor.y += box_h + 14.0;
    }

    /// Line-item table with header repetition across page breaks.
    fn line_table(&mut self, cursor: &mut LayoutCursor) -> Result<(), BijakError> {
        self.table_header(cursor);

        let invoice = self.invoice;
        let cols = columns();
        for (i, line) in invoice.lines.iter().enumerate() {
            // Break BEFORE the row that would cross into the reserved
            // bottom band, then repeat the table header.
            if cursor.y + ROW_HEIGHT > PAGE_HEIGHT - TABLE_BOTTOM_RESERVE {
                debug!(row = i + 1, "line table overflow, continuing on new page");
                *cursor = self.start_page();
                self.table_header(cursor);
            }

            if i % 2 == 1 {
                self.fill_rect(MARGIN, cursor.y, CONTENT_WIDTH, ROW_HEIGHT, FAINT);
            }

            let base = cursor.y + 12.5;
            self.text_centered(
                cols.sl_center,
                base,
                &(i + 1).to_string(),
                Font::Regular,
                8.5,
                Color::BLACK,
            );
            let desc = metrics::truncate_to_width(
                &line.product_name,
                Font::Regular,
                8.5,
                cols.desc_width - 8.0,
            );
            self.text(cols.desc_x, base, desc, Font::Regular, 8.5);
            if let Some(hsn) = &line.hsn_code {
                self.text(cols.hsn_x, base, hsn.clone(), Font::Regular, 8.5);
            }
            self.text_centered(
                cols.qty_center,
                base,
                &line.quantity.normalize().to_string(),
                Font::Regular,
                8.5,
                Color::BLACK,
            );
            self.text_right(
                cols.rate_right,
                base,
                &format_amount(line.unit_price),
                Font::Regular,
                8.5,
                Color::BLACK,
            );
            self.text_right(
                cols.amount_right,
                base,
                &format_amount(line.line_total()?),
                Font::Regular,
                8.5,
                Color::BLACK,
            );

            cursor.y += ROW_HEIGHT;
            self.hline(MARGIN, CONTENT_RIGHT, cursor.y, RULE, 0.4);
        }

        Ok(())
    }

    /// Dark table header row; white bold labels, currency markers on the
    /// two money columns.
    fn table_header(&mut self, cursor: &mut LayoutCursor) {
        let cols = columns();
        self.fill_rect(MARGIN, cursor.y, CONTENT_WIDTH, TABLE_HEADER_HEIGHT, DARK);
        let base = cursor.y + 13.5;

        self.text_centered(cols.sl_center, base, "SL", Font::Bold, 8.5, Color::WHITE);
        self.text_colored(cols.desc_x, base, "DESCRIPTION", Font::Bold, 8.5, Color::WHITE);
        self.text_colored(cols.hsn_x, base, "HSN", Font::Bold, 8.5, Color::WHITE);
        self.text_centered(cols.qty_center, base, "QTY", Font::Bold, 8.5, Color::WHITE);
        let left = self.text_right(cols.rate_right, base, "RATE", Font::Bold, 8.5, Color::WHITE);
        self.text_right(left - 2.0, base, CURRENCY, Font::Bold, CURRENCY_SIZE, Color::WHITE);
        let left = self.text_right(cols.amount_right, base, "AMOUNT", Font::Bold, 8.5, Color::WHITE);
        self.text_right(left - 2.0, base, CURRENCY, Font::Bold, CURRENCY_SIZE, Color::WHITE);

        cursor.y += TABLE_HEADER_HEIGHT;
    }

    /// Right-aligned totals panel. Moves to a fresh page (with header)
    /// when the remaining space is below the fixed heuristic.
    fn totals_block(&mut self, cursor: &mut LayoutCursor) {
        if PAGE_HEIGHT - FRAME_INSET - cursor.y < TOTALS_MIN_SPACE {
            debug!("totals block moved to a new page");
            *cursor = self.start_page();
        }
        cursor.y += 8.0;

        let x0 = CONTENT_RIGHT - TOTALS_PANEL_WIDTH;
        let row_h = 16.0;
        let value_rx = CONTENT_RIGHT - BOX_PAD;

        let row =
            |planner: &mut Self, y: &mut f64, label: String, value: String, shaded: bool| {
                if shaded {
                    planner.fill_rect(x0, *y, TOTALS_PANEL_WIDTH, row_h, SHADE);
                }
                planner.text(x0 + BOX_PAD, *y + 11.5, label, Font::Regular, 8.5);
                planner.currency_right(
                    value_rx,
                    *y + 11.5,
                    &value,
                    Font::Regular,
                    8.5,
                    Color::BLACK,
                );
                *y += row_h;
            };

        let totals = self.totals.clone();
        let charges = self.invoice.charges.clone();
        let mut y = cursor.y;

        row(
            self,
            &mut y,
            "Subtotal".into(),
            format_amount(totals.subtotal),
            true,
        );
        for (label, value) in [
            ("Transport", charges.transport),
            ("Packaging", charges.packaging),
            ("Other Charges", charges.other),
        ] {
            // A zero charge contributes no row at all.
            if value > Decimal::ZERO {
                row(self, &mut y, label.into(), format_amount(value), false);
            }
        }
        if self.invoice.gst_enabled {
            let split = &totals.gst_split;
            row(
                self,
                &mut y,
                format!("SGST ({})", split.rate_label()),
                format_amount(split.half_amount),
                false,
            );
            row(
                self,
                &mut y,
                format!("CGST ({})", split.rate_label()),
                format_amount(split.half_amount),
                false,
            );
        }
        row(
            self,
            &mut y,
            "Round Off".into(),
            format_signed(totals.round_off),
            false,
        );

        // Grand total: dark band, bold, larger, on the ROUNDED total.
        let grand_h = 20.0;
        self.fill_rect(x0, y, TOTALS_PANEL_WIDTH, grand_h, DARK);
        self.text_colored(x0 + BOX_PAD, y + 14.0, "Grand Total", Font::Bold, 10.5, Color::WHITE);
        self.currency_right(
            value_rx,
            y + 14.0,
            &format_amount(totals.rounded_total),
            Font::Bold,
            10.5,
            Color::WHITE,
        );
        y += grand_h;

        cursor.y = y + 10.0;
    }

    /// Italic amount-in-words line, then the lorry line when present.
    /// An absent lorry number leaves no gap — the footer moves up.
    fn words_and_lorry(&mut self, cursor: &mut LayoutCursor) {
        let words = format!(
            "Amount in words: {} only",
            amount_in_words(self.totals.rounded_total)
        );
        for line in metrics::wrap(&words, Font::Oblique, 8.5, CONTENT_WIDTH) {
            cursor.y += 11.0;
            self.text_colored(MARGIN, cursor.y, line, Font::Oblique, 8.5, Color::BLACK);
        }

        if let Some(lorry) = &self.invoice.header.lorry_number {
            cursor.y += 13.0;
            self.text(MARGIN, cursor.y, format!("Lorry No: {lorry}"), Font::Regular, 8.5);
        }
    }

    /// Terms, "For {company}", signature rule and signatory line. Pinned
    /// near the bottom on short documents, pushed down past the cursor on
    /// full ones.
    fn footer(&mut self, cursor: &mut LayoutCursor) {
        let profile = self.profile;
        let signature = self.invoice.signature;
        let top = (cursor.y + FOOTER_GAP).max(PAGE_HEIGHT - FOOTER_FROM_BOTTOM);

        let mut terms_y = top;
        for term in &profile.terms {
            terms_y += 10.0;
            self.text_colored(MARGIN, terms_y, term.as_str(), Font::Regular, 7.5, GRAY);
        }

        self.text_right(
            CONTENT_RIGHT,
            top + 10.0,
            &format!("For {}", profile.name),
            Font::Bold,
            9.0,
            Color::BLACK,
        );

        let rule_y = top + 52.0;
        if let Some(signatory) = signature {
            self.image(
                CONTENT_RIGHT - 130.0,
                rule_y - 40.0,
                100.0,
                38.0,
                AssetId::for_signatory(signatory),
            );
        }
        self.hline(CONTENT_RIGHT - 150.0, CONTENT_RIGHT, rule_y, Color::BLACK, 0.8);
        self.text_right(
            CONTENT_RIGHT,
            rule_y + 10.0,
            "Authorized Signatory",
            Font::Regular,
            8.5,
            Color::BLACK,
        );

        cursor.y = rule_y + 10.0;
    }
}

// ── table column geometry ───────────────────────────────────────────

struct Columns {
    sl_center: f64,
    desc_x: f64,
    desc_width: f64,
    hsn_x: f64,
    qty_center: f64,
    rate_right: f64,
    amount_right: f64,
}

fn columns() -> Columns {
    let sl_w = 28.0;
    let hsn_w = 62.0;
    let qty_w = 52.0;
    let rate_w = 76.0;
    let amount_w = 88.0;
    let desc_w = CONTENT_WIDTH - sl_w - hsn_w - qty_w - rate_w - amount_w;

    let desc_x = MARGIN + sl_w;
    let hsn_x = desc_x + desc_w;
    let qty_x = hsn_x + hsn_w;
    let rate_x = qty_x + qty_w;
    let amount_x = rate_x + rate_w;

    Columns {
        sl_center: MARGIN + sl_w / 2.0,
        desc_x: desc_x + 4.0,
        desc_width: desc_w,
        hsn_x: hsn_x + 4.0,
        qty_center: qty_x + qty_w / 2.0,
        rate_right: rate_x + rate_w - 6.0,
        amount_right: amount_x + amount_w - 6.0,
    }
}

// ── party box content ───────────────────────────────────────────────

struct PartyLine {
    text: String,
    font: Font,
    size: f64,
    color: Color,
    icon: Option<AssetId>,
}

impl PartyLine {
    fn plain(text: String, font: Font, size: f64) -> Self {
        Self {
            text,
            font,
            size,
            color: Color::BLACK,
            icon: None,
        }
    }
}

/// Stacked field list for one party box. Empty fields are omitted
/// outright — no blank line is reserved.
fn party_lines(party: &crate::core::Party, box_w: f64) -> Vec<PartyLine> {
    let wrap_w = box_w - 2.0 * BOX_PAD;
    let mut lines = Vec::new();

    if let Some(shop) = non_empty(party.shop_name.as_deref()) {
        lines.push(PartyLine::plain(shop.to_string(), Font::Bold, 10.5));
    }
    if !party.name.trim().is_empty() {
        lines.push(PartyLine::plain(party.name.clone(), Font::Bold, 8.5));
    }
    if let Some(address) = non_empty(party.address.as_deref()) {
        for piece in metrics::wrap(address, Font::Regular, 8.5, wrap_w) {
            lines.push(PartyLine::plain(piece, Font::Regular, 8.5));
        }
    }
    let locality: Vec<&str> = [
        party.city.as_deref(),
        party.state.as_deref(),
        party.postal_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.trim().is_empty())
    .collect();
    if !locality.is_empty() {
        lines.push(PartyLine::plain(locality.join(", "), Font::Regular, 8.5));
    }
    if let Some(phone) = non_empty(party.phone.as_deref()) {
        lines.push(PartyLine {
            text: phone.to_string(),
            font: Font::Regular,
            size: 8.5,
            color: GRAY,
            icon: Some(AssetId::PhoneIcon),
        });
    }
    if let Some(email) = non_empty(party.email.as_deref()) {
        lines.push(PartyLine {
            text: email.to_string(),
            font: Font::Regular,
            size: 8.5,
            color: GRAY,
            icon: Some(AssetId::EmailIcon),
        });
    }
    if let Some(gstin) = non_empty(party.gstin.as_deref()) {
        for piece in metrics::wrap(&format!("GSTIN: {gstin}"), Font::Regular, 8.5, wrap_w) {
            lines.push(PartyLine::plain(piece, Font::Regular, 8.5));
        }
    }

    lines
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
