//! In-memory form state for one editing session.
//!
//! The UI collaborator owns a [`SchemaForm`], mutates it as the user types,
//! and passes a snapshot to [`crate::build`] on each generate action. Nothing
//! here is validated or parsed: multi-line blocks stay raw text until build
//! time, and the name/url requirement is enforced by the builder, not the
//! form. State lives for the session only and is dropped with it.

use chrono::NaiveTime;

/// Days of the week in the fixed Monday→Sunday output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in output order. Iteration over this array is what fixes
    /// the ordering of `openingHoursSpecification` regardless of the order
    /// days were toggled in the UI.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Fully qualified schema.org form, e.g. `https://schema.org/Monday`.
    #[must_use]
    pub fn schema_org_uri(self) -> String {
        format!("https://schema.org/{}", self.name())
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-day opening hours toggle and time range.
///
/// `opens`/`closes` survive the day being toggled off, so re-enabling a day
/// within the same session restores whatever the user had entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayHours {
    pub enabled: bool,
    pub opens: Option<NaiveTime>,
    pub closes: Option<NaiveTime>,
}

/// Opening hours for the full week, indexed by [`Weekday`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [DayHours; 7],
}

impl WeekSchedule {
    #[must_use]
    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }

    #[must_use]
    pub fn day_mut(&mut self, day: Weekday) -> &mut DayHours {
        &mut self.days[day.index()]
    }

    /// Toggle a day on. A day enabled for the first time is seeded with the
    /// 09:00–17:00 reference window so both time fields are always populated
    /// while the toggle is on; previously entered times are kept as-is.
    pub fn enable(&mut self, day: Weekday) {
        let hours = self.day_mut(day);
        hours.enabled = true;
        if hours.opens.is_none() {
            hours.opens = Some(default_opens());
        }
        if hours.closes.is_none() {
            hours.closes = Some(default_closes());
        }
    }

    /// Toggle a day off without discarding its time range.
    pub fn disable(&mut self, day: Weekday) {
        self.day_mut(day).enabled = false;
    }

    /// Set both times for a day in one call (time-picker change handler).
    pub fn set_hours(&mut self, day: Weekday, opens: NaiveTime, closes: NaiveTime) {
        let hours = self.day_mut(day);
        hours.opens = Some(opens);
        hours.closes = Some(closes);
    }
}

fn default_opens() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid time")
}

fn default_closes() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid time")
}

/// One repeatable service block.
///
/// Empty strings mean the field was left blank; the builder treats a blank
/// name as "drop this entry" and blank optional fields as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
    /// Optional canonical URL for the service (emitted as `sameAs`).
    pub same_as: String,
}

/// Everything the form collects, exactly as the user entered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaForm {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub telephone: String,

    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,

    /// Social profile URLs, one per line, raw text.
    pub socials: String,
    /// Single Google Business Profile URL, merged into `sameAs` at build time.
    pub google_business_url: String,
    /// Place names served, one per line, raw text.
    pub areas: String,

    pub services: Vec<ServiceEntry>,
    pub hours: WeekSchedule,
}

impl Default for SchemaForm {
    /// A fresh form starts with a single blank service block so the UI has
    /// one to render immediately.
    fn default() -> Self {
        SchemaForm {
            name: String::new(),
            url: String::new(),
            logo: String::new(),
            description: String::new(),
            telephone: String::new(),
            street_address: String::new(),
            locality: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country: String::new(),
            socials: String::new(),
            google_business_url: String::new(),
            areas: String::new(),
            services: vec![ServiceEntry::default()],
            hours: WeekSchedule::default(),
        }
    }
}

impl SchemaForm {
    /// Append a blank service block.
    pub fn add_service(&mut self) {
        self.services.push(ServiceEntry::default());
    }

    /// Remove the service block at `index`, shifting later blocks down.
    /// Out-of-range indices are a no-op.
    pub fn remove_service(&mut self, index: usize) -> Option<ServiceEntry> {
        if index < self.services.len() {
            Some(self.services.remove(index))
        } else {
            None
        }
    }

    /// In-place access to the service block at `index` for field updates.
    pub fn service_mut(&mut self, index: usize) -> Option<&mut ServiceEntry> {
        self.services.get_mut(index)
    }
}
