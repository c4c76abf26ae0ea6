//! End-to-end output contract for the schema builder: exact text, key order,
//! and serializer idempotence.

use bizschema_core::{build, SchemaDocument, SchemaForm, ServiceEntry, Weekday};

fn full_form() -> SchemaForm {
    let mut form = SchemaForm {
        name: "Acme Corp".to_string(),
        url: "https://acme.example".to_string(),
        logo: "https://acme.example/logo.png".to_string(),
        description: "Acme Corp provides top-notch solutions.".to_string(),
        telephone: "+1-555-123-4567".to_string(),
        street_address: "123 Main St".to_string(),
        locality: "Anytown".to_string(),
        region: "CA".to_string(),
        postal_code: "12345".to_string(),
        country: "US".to_string(),
        socials: "https://facebook.com/acme\nhttps://x.com/acme".to_string(),
        google_business_url: "https://g.page/acme".to_string(),
        areas: "Roanoke VA\nSalem VA".to_string(),
        ..SchemaForm::default()
    };
    form.services = vec![ServiceEntry {
        name: "Cleaning".to_string(),
        description: "Weekly office cleaning".to_string(),
        same_as: String::new(),
    }];
    form.hours.enable(Weekday::Monday);
    form
}

#[test]
fn full_form_produces_the_expected_block() {
    let doc = build(&full_form()).expect("builds");
    let expected = r#"{
  "@context": "https://schema.org",
  "@type": "LocalBusiness",
  "name": "Acme Corp",
  "url": "https://acme.example",
  "logo": "https://acme.example/logo.png",
  "description": "Acme Corp provides top-notch solutions.",
  "telephone": "+1-555-123-4567",
  "address": {
    "@type": "PostalAddress",
    "streetAddress": "123 Main St",
    "addressLocality": "Anytown",
    "addressRegion": "CA",
    "postalCode": "12345",
    "addressCountry": "US"
  },
  "sameAs": [
    "https://facebook.com/acme",
    "https://g.page/acme",
    "https://x.com/acme"
  ],
  "areaServed": [
    "Roanoke VA",
    "Salem VA"
  ],
  "openingHoursSpecification": [
    {
      "@type": "OpeningHoursSpecification",
      "dayOfWeek": "https://schema.org/Monday",
      "opens": "09:00",
      "closes": "17:00"
    }
  ],
  "hasOfferCatalog": {
    "@type": "OfferCatalog",
    "name": "Our Services",
    "itemListElement": [
      {
        "@type": "Offer",
        "itemOffered": {
          "@type": "Service",
          "name": "Cleaning",
          "description": "Weekly office cleaning"
        }
      }
    ]
  }
}"#;
    assert_eq!(doc.to_pretty_json().expect("serializes"), expected);
}

#[test]
fn top_level_keys_appear_in_contract_order() {
    let json = build(&full_form())
        .expect("builds")
        .to_pretty_json()
        .expect("serializes");
    let keys = [
        "\"@context\"",
        "\"@type\"",
        "\"name\"",
        "\"url\"",
        "\"logo\"",
        "\"description\"",
        "\"telephone\"",
        "\"address\"",
        "\"sameAs\"",
        "\"areaServed\"",
        "\"openingHoursSpecification\"",
        "\"hasOfferCatalog\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing key {key}")))
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "keys out of order: {positions:?}"
    );
}

#[test]
fn reserialization_is_byte_identical() {
    let json = build(&full_form())
        .expect("builds")
        .to_pretty_json()
        .expect("serializes");
    let reparsed: SchemaDocument = serde_json::from_str(&json).expect("parses back");
    assert_eq!(reparsed.to_pretty_json().expect("serializes"), json);
}

#[test]
fn output_is_valid_json_for_awkward_input() {
    let form = SchemaForm {
        name: "Bob's \"Best\" Bagels".to_string(),
        url: "https://bagels.example/?a=1&b=2".to_string(),
        description: "Line one\nLine two — naïve & <bold>".to_string(),
        ..SchemaForm::default()
    };
    let json = build(&form)
        .expect("builds")
        .to_pretty_json()
        .expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["name"], "Bob's \"Best\" Bagels");
    assert_eq!(value["description"], "Line one\nLine two — naïve & <bold>");
}
