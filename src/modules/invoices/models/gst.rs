use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::money::lenient;

/// Which GST regime applies to an invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstType {
    /// Intrastate supply: central and state tax at mirrored rates
    #[default]
    #[serde(rename = "CGST")]
    Cgst,
    /// Interstate supply: integrated tax
    #[serde(rename = "IGST")]
    Igst,
    /// No tax
    #[serde(rename = "None")]
    None,
}

impl fmt::Display for GstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GstType::Cgst => write!(f, "CGST"),
            GstType::Igst => write!(f, "IGST"),
            GstType::None => write!(f, "None"),
        }
    }
}

impl std::str::FromStr for GstType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CGST" => Ok(GstType::Cgst),
            "IGST" => Ok(GstType::Igst),
            "NONE" => Ok(GstType::None),
            _ => Err(format!("Invalid GST type: {}", s)),
        }
    }
}

/// GST settings of an invoice, rates in percent
///
/// Rates that are missing or unparseable on the wire read as zero. Rates for
/// the inactive regime are carried but ignored by the calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstConfiguration {
    #[serde(rename = "type", default)]
    pub gst_type: GstType,

    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cgst_rate: Decimal,

    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sgst_rate: Decimal,

    #[serde(default, deserialize_with = "lenient::decimal")]
    pub igst_rate: Decimal,

    /// Applied whatever the GST type
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub fuel_surcharge_rate: Decimal,
}

/// Rates the calculator actually applies after selecting by GST type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRates {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl GstConfiguration {
    /// Intrastate configuration; SGST mirrors the given CGST rate
    pub fn cgst(rate: Decimal) -> Self {
        Self {
            gst_type: GstType::Cgst,
            cgst_rate: rate,
            sgst_rate: rate,
            ..Self::default()
        }
    }

    pub fn igst(rate: Decimal) -> Self {
        Self {
            gst_type: GstType::Igst,
            igst_rate: rate,
            ..Self::default()
        }
    }

    pub fn untaxed() -> Self {
        Self {
            gst_type: GstType::None,
            ..Self::default()
        }
    }

    pub fn with_fuel_surcharge_rate(mut self, rate: Decimal) -> Self {
        self.fuel_surcharge_rate = rate;
        self
    }

    /// Set the CGST rate; SGST follows
    pub fn with_cgst_rate(mut self, rate: Decimal) -> Self {
        self.cgst_rate = rate;
        self.sgst_rate = rate;
        self
    }

    /// Set the SGST rate; CGST follows
    pub fn with_sgst_rate(self, rate: Decimal) -> Self {
        self.with_cgst_rate(rate)
    }

    pub fn is_mirrored(&self) -> bool {
        self.cgst_rate == self.sgst_rate
    }

    pub fn active_rates(&self) -> ActiveRates {
        match self.gst_type {
            GstType::Cgst => ActiveRates {
                cgst: self.cgst_rate,
                sgst: self.sgst_rate,
                igst: Decimal::ZERO,
            },
            GstType::Igst => ActiveRates {
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: self.igst_rate,
            },
            GstType::None => ActiveRates {
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: Decimal::ZERO,
            },
        }
    }
}
