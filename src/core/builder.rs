use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new(
///     "INV-2026-00042",
///     NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
/// )
/// .billing(
///     PartyBuilder::new("Ramesh Kumar")
///         .shop_name("Kumar Traders")
///         .gstin("27AAPFU0939F1ZV")
///         .city("Nagpur")
///         .build(),
/// )
/// .add_line(LineItemBuilder::new("Steel Rods", dec!(20), dec!(450)).gst_rate(dec!(18)).build())
/// .gst(true)
/// .build()
/// .unwrap();
///
/// assert_eq!(invoice.totals().unwrap().subtotal, dec!(9000));
/// ```
pub struct InvoiceBuilder {
    number: String,
    bill_date: NaiveDate,
    lorry_number: Option<String>,
    billing: Option<Party>,
    shipping: Option<Party>,
    lines: Vec<LineItem>,
    charges: ChargeSet,
    gst_enabled: bool,
    signature: Option<Signatory>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, bill_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            bill_date,
            lorry_number: None,
            billing: None,
            shipping: None,
            lines: Vec::new(),
            charges: ChargeSet::default(),
            gst_enabled: true,
            signature: None,
        }
    }

    pub fn lorry_number(mut self, lorry: impl Into<String>) -> Self {
        self.lorry_number = Some(lorry.into());
        self
    }

    pub fn billing(mut self, party: Party) -> Self {
        self.billing = Some(party);
        self
    }

    /// Set a separate ship-to party. When absent, shipping mirrors billing.
    pub fn shipping(mut self, party: Party) -> Self {
        self.shipping = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn transport(mut self, amount: Decimal) -> Self {
        self.charges.transport = amount;
        self
    }

    pub fn packaging(mut self, amount: Decimal) -> Self {
        self.charges.packaging = amount;
        self
    }

    pub fn other_charge(mut self, amount: Decimal) -> Self {
        self.charges.other = amount;
        self
    }

    pub fn charges(mut self, charges: ChargeSet) -> Self {
        self.charges = charges;
        self
    }

    pub fn gst(mut self, enabled: bool) -> Self {
        self.gst_enabled = enabled;
        self
    }

    pub fn signature(mut self, signatory: Signatory) -> Self {
        self.signature = Some(signatory);
        self
    }

    /// Build the invoice, running validation and proving the totals
    /// computable. Returns all validation errors, not just the first.
    pub fn build(self) -> Result<Invoice, BijakError> {
        let invoice = self.assemble()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        // Totals are derived per render, but a build must fail fast if the
        // amounts can never be computed.
        invoice.totals()?;

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing
    /// external data.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        self.assemble()
    }

    fn assemble(self) -> Result<Invoice, BijakError> {
        let billing = self
            .billing
            .ok_or_else(|| BijakError::Builder("billing party is required".into()))?;
        let shipping = self.shipping.unwrap_or_else(|| billing.clone());

        if self.lines.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }

        Ok(Invoice {
            header: InvoiceHeader {
                number: self.number,
                bill_date: self.bill_date,
                lorry_number: self.lorry_number,
            },
            billing,
            shipping,
            lines: self.lines,
            charges: self.charges,
            gst_enabled: self.gst_enabled,
            signature: self.signature,
        })
    }
}

/// Builder for a billing or shipping party.
pub struct PartyBuilder {
    party: Party,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            party: Party {
                name: name.into(),
                ..Party::default()
            },
        }
    }

    pub fn shop_name(mut self, shop: impl Into<String>) -> Self {
        self.party.shop_name = Some(shop.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.party.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.party.email = Some(email.into());
        self
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.party.gstin = Some(gstin.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.party.address = Some(address.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.party.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.party.state = Some(state.into());
        self
    }

    pub fn postal_code(mut self, code: impl Into<String>) -> Self {
        self.party.postal_code = Some(code.into());
        self
    }

    pub fn build(self) -> Party {
        self.party
    }
}

/// Builder for a line item.
pub struct LineItemBuilder {
    line: LineItem,
}

impl LineItemBuilder {
    pub fn new(product_name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            line: LineItem {
                product_name: product_name.into(),
                hsn_code: None,
                quantity,
                unit_price,
                gst_rate: Decimal::ZERO,
            },
        }
    }

    pub fn hsn(mut self, code: impl Into<String>) -> Self {
        self.line.hsn_code = Some(code.into());
        self
    }

    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.line.gst_rate = rate;
        self
    }

    pub fn build(self) -> LineItem {
        self.line
    }
}
