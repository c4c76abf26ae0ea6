//! Schema document construction: the generate action.
//!
//! [`build`] is a pure function of a form snapshot. Inclusion follows the
//! omit-empty policy: a key appears in the output iff its data survives
//! trimming. Entries that cannot be emitted (blank service names, half-set
//! opening hours) are skipped silently rather than erroring; generation only
//! fails when a required field is missing.

use std::collections::BTreeSet;

use crate::document::{
    Offer, OfferCatalog, OpeningHoursSpecification, PostalAddress, SchemaDocument, Service,
    OPENING_HOURS_TYPE, SERVICE_TYPE,
};
use crate::error::BuildError;
use crate::form::{SchemaForm, ServiceEntry, Weekday};
use crate::lines::{non_empty, split_lines};

/// Build a [`SchemaDocument`] from the current form state.
///
/// # Errors
///
/// Returns [`BuildError::MissingField`] when `name` or `url` is empty after
/// trimming. The caller blocks generation and surfaces the message inline;
/// the user corrects the field and retries.
pub fn build(form: &SchemaForm) -> Result<SchemaDocument, BuildError> {
    let name = non_empty(&form.name).ok_or(BuildError::MissingField("name"))?;
    let url = non_empty(&form.url).ok_or(BuildError::MissingField("url"))?;

    let mut doc = SchemaDocument::new(name, url);
    doc.logo = non_empty(&form.logo);
    doc.description = non_empty(&form.description);
    doc.telephone = non_empty(&form.telephone);
    doc.address = build_address(form);
    doc.same_as = build_same_as(form);
    doc.area_served = split_lines(&form.areas);
    doc.opening_hours = build_opening_hours(form);
    doc.offer_catalog = build_offer_catalog(&form.services);

    tracing::debug!(
        has_address = doc.address.is_some(),
        same_as = doc.same_as.len(),
        areas = doc.area_served.len(),
        opening_hours = doc.opening_hours.len(),
        offers = doc
            .offer_catalog
            .as_ref()
            .map_or(0, |c| c.item_list_element.len()),
        "built schema document"
    );
    Ok(doc)
}

/// Assemble the `PostalAddress` sub-object; `None` when every field is blank
/// so the `address` key is left out entirely.
fn build_address(form: &SchemaForm) -> Option<PostalAddress> {
    let address = PostalAddress {
        street_address: non_empty(&form.street_address),
        address_locality: non_empty(&form.locality),
        address_region: non_empty(&form.region),
        postal_code: non_empty(&form.postal_code),
        address_country: non_empty(&form.country),
        ..PostalAddress::default()
    };
    if address.is_empty() {
        None
    } else {
        Some(address)
    }
}

/// Merge the socials block with the Google Business Profile URL and
/// deduplicate with set semantics. The contract leaves the resulting order
/// unspecified; collecting through a `BTreeSet` makes it deterministic.
fn build_same_as(form: &SchemaForm) -> Vec<String> {
    let mut urls = split_lines(&form.socials);
    if let Some(profile_url) = non_empty(&form.google_business_url) {
        urls.push(profile_url);
    }
    let unique: BTreeSet<String> = urls.into_iter().collect();
    unique.into_iter().collect()
}

/// Emit one `OpeningHoursSpecification` per enabled day, Monday→Sunday.
/// A day needs both time fields to qualify.
fn build_opening_hours(form: &SchemaForm) -> Vec<OpeningHoursSpecification> {
    let mut specs = Vec::new();
    for day in Weekday::ALL {
        let hours = form.hours.day(day);
        if !hours.enabled {
            continue;
        }
        if let (Some(opens), Some(closes)) = (hours.opens, hours.closes) {
            specs.push(OpeningHoursSpecification {
                schema_type: OPENING_HOURS_TYPE.to_string(),
                day_of_week: day.schema_org_uri(),
                opens: opens.format("%H:%M").to_string(),
                closes: closes.format("%H:%M").to_string(),
            });
        } else {
            tracing::debug!(day = %day, "enabled day is missing opens or closes, skipped");
        }
    }
    specs
}

/// Wrap every valid service entry in an `Offer`; `None` when nothing
/// qualifies so the `hasOfferCatalog` key is left out.
fn build_offer_catalog(entries: &[ServiceEntry]) -> Option<OfferCatalog> {
    let offers: Vec<Offer> = entries.iter().filter_map(offer_for_entry).collect();
    if offers.is_empty() {
        None
    } else {
        Some(OfferCatalog::new(offers))
    }
}

/// A service needs a non-blank name to be included; blank optional fields are
/// dropped from the `Service` object rather than emitted empty.
fn offer_for_entry(entry: &ServiceEntry) -> Option<Offer> {
    let name = match non_empty(&entry.name) {
        Some(name) => name,
        None => {
            tracing::debug!("service entry with blank name dropped");
            return None;
        }
    };
    Some(Offer::new(Service {
        schema_type: SERVICE_TYPE.to_string(),
        name,
        description: non_empty(&entry.description),
        same_as: non_empty(&entry.same_as),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
