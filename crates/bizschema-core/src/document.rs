//! Typed schema.org document tree for the `LocalBusiness` output.
//!
//! ## Key order and omission
//!
//! The embed contract fixes both the key order and which keys may appear, so
//! the document is a struct tree rather than a `serde_json::Map`: declaration
//! order is serialization order, and `skip_serializing_if` implements the
//! omit-when-empty policy. Every nested object carries its own `@type`, set by
//! the constructors below and never mutated afterwards.
//!
//! The tree also derives `Deserialize` so that a rendered document can be
//! parsed back and re-serialized byte-identically (the serializer is
//! idempotent; tests rely on this).

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";
pub const LOCAL_BUSINESS_TYPE: &str = "LocalBusiness";
pub const POSTAL_ADDRESS_TYPE: &str = "PostalAddress";
pub const OPENING_HOURS_TYPE: &str = "OpeningHoursSpecification";
pub const OFFER_CATALOG_TYPE: &str = "OfferCatalog";
pub const OFFER_TYPE: &str = "Offer";
pub const SERVICE_TYPE: &str = "Service";

/// Fixed display name of the generated service catalog.
pub const CATALOG_NAME: &str = "Our Services";

/// The root `LocalBusiness` document.
///
/// Built fresh by [`crate::build`] on every generate action; immutable once
/// built as far as callers are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(rename = "sameAs", default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(rename = "areaServed", default, skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<String>,
    #[serde(
        rename = "openingHoursSpecification",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub opening_hours: Vec<OpeningHoursSpecification>,
    #[serde(
        rename = "hasOfferCatalog",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub offer_catalog: Option<OfferCatalog>,
}

impl SchemaDocument {
    /// Start a document with the fixed `@context`/`@type` pair and the two
    /// required fields. Everything else defaults to absent.
    #[must_use]
    pub(crate) fn new(name: String, url: String) -> Self {
        SchemaDocument {
            context: SCHEMA_ORG_CONTEXT.to_string(),
            schema_type: LOCAL_BUSINESS_TYPE.to_string(),
            name,
            url,
            logo: None,
            description: None,
            telephone: None,
            address: None,
            same_as: Vec::new(),
            area_served: Vec::new(),
            opening_hours: Vec::new(),
            offer_catalog: None,
        }
    }

    /// Serialize to the human-readable form embedded in the page: 2-space
    /// indentation, keys in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Serialize`] if `serde_json` fails, which does not
    /// happen for this tree in practice.
    pub fn to_pretty_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `PostalAddress` sub-object. Only attached to the document when at least
/// one field survives the omit-empty normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "streetAddress", default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(
        rename = "addressLocality",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address_locality: Option<String>,
    #[serde(
        rename = "addressRegion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address_region: Option<String>,
    #[serde(rename = "postalCode", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(
        rename = "addressCountry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address_country: Option<String>,
}

impl Default for PostalAddress {
    fn default() -> Self {
        PostalAddress {
            schema_type: POSTAL_ADDRESS_TYPE.to_string(),
            street_address: None,
            address_locality: None,
            address_region: None,
            postal_code: None,
            address_country: None,
        }
    }
}

impl PostalAddress {
    /// `true` when every address field is absent, i.e. the sub-object would
    /// carry nothing but its `@type`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street_address.is_none()
            && self.address_locality.is_none()
            && self.address_region.is_none()
            && self.postal_code.is_none()
            && self.address_country.is_none()
    }
}

/// One weekday's opening window. `opens`/`closes` are zero-padded 24-hour
/// `HH:MM` strings; `day_of_week` is the URI form, e.g.
/// `https://schema.org/Monday`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: String,
    pub opens: String,
    pub closes: String,
}

/// The `hasOfferCatalog` wrapper around all service offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCatalog {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<Offer>,
}

impl OfferCatalog {
    #[must_use]
    pub(crate) fn new(offers: Vec<Offer>) -> Self {
        OfferCatalog {
            schema_type: OFFER_CATALOG_TYPE.to_string(),
            name: CATALOG_NAME.to_string(),
            item_list_element: offers,
        }
    }
}

/// An `Offer` wrapping exactly one [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "itemOffered")]
    pub item_offered: Service,
}

impl Offer {
    #[must_use]
    pub(crate) fn new(service: Service) -> Self {
        Offer {
            schema_type: OFFER_TYPE.to_string(),
            item_offered: service,
        }
    }
}

/// A single offered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "sameAs", default, skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
}
