// crates/trialsites-core/src/model/site.rs
use super::non_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    #[serde(rename = "long", alias = "lon")]
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Enrollment state of a single site.
///
/// Statuses outside the three the trial page labels, and records without a
/// status, deserialize as `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitmentStatus {
    Active,
    ClosedToAccrual,
    TemporarilyClosedToAccrual,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecruitmentStatus {
    /// Human readable label, e.g. `"Closed to accrual"`.
    pub fn label(&self) -> &'static str {
        match self {
            RecruitmentStatus::Active => "Active",
            RecruitmentStatus::ClosedToAccrual => "Closed to accrual",
            RecruitmentStatus::TemporarilyClosedToAccrual => "Temporarily closed to accrual",
            RecruitmentStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RecruitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One participating site of a trial, as delivered by the trials API.
///
/// Geographic fields are optional: a record missing the field a grouping or
/// filter needs is simply left out of that result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    #[serde(default)]
    pub name: String,
    pub country: Option<String>,
    pub state_or_province_abbreviation: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "isVA", default)]
    pub is_va: bool,
    #[serde(default)]
    pub recruitment_status: RecruitmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Contact details of a site, only available when a contact name is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Contact<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl SiteRecord {
    /// A site with only a name and status; the rest is filled in with the
    /// `in_*`/`with_*` helpers.
    pub fn new(name: impl Into<String>, recruitment_status: RecruitmentStatus) -> Self {
        Self {
            name: name.into(),
            country: None,
            state_or_province_abbreviation: None,
            city: None,
            postal_code: None,
            coordinates: None,
            is_va: false,
            recruitment_status,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
        }
    }

    pub fn in_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn in_state(mut self, abbr: impl Into<String>) -> Self {
        self.state_or_province_abbreviation = Some(abbr.into());
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lon));
        self
    }

    pub fn va(mut self, is_va: bool) -> Self {
        self.is_va = is_va;
        self
    }

    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        self.contact_name = Some(name.into());
        self.contact_phone = phone.map(str::to_owned);
        self.contact_email = email.map(str::to_owned);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Option<&str> {
        non_blank(&self.country)
    }

    /// State (US) or province (Canada) abbreviation.
    pub fn region_code(&self) -> Option<&str> {
        non_blank(&self.state_or_province_abbreviation)
    }

    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn postal_code(&self) -> Option<&str> {
        non_blank(&self.postal_code)
    }

    pub fn is_in_country(&self, country: &str) -> bool {
        self.country() == Some(country)
    }

    pub fn contact(&self) -> Option<Contact<'_>> {
        non_blank(&self.contact_name).map(|name| Contact {
            name,
            phone: non_blank(&self.contact_phone),
            email: non_blank(&self.contact_email),
        })
    }
}
