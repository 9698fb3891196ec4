//! Store Model
//!
//! A store is a leasable retail unit in the mall catalog. Identifiers follow
//! the `ST###` sequence and are assigned by the server.

use super::catalog;
use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::ValidateEmail;

/// Identifier prefix of every store
pub const STORE_ID_PREFIX: &str = "ST";

/// Sentinel accepted by list filters meaning "no filter"
pub const FILTER_ALL: &str = "all";

// =============================================================================
// Enumerations
// =============================================================================

/// Store category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreCategory {
    Electronics,
    Fashion,
    Food,
    Home,
    Beauty,
    Sports,
    Entertainment,
    Books,
    Jewelry,
    Other,
}

impl StoreCategory {
    pub const ALL: [StoreCategory; 10] = [
        StoreCategory::Electronics,
        StoreCategory::Fashion,
        StoreCategory::Food,
        StoreCategory::Home,
        StoreCategory::Beauty,
        StoreCategory::Sports,
        StoreCategory::Entertainment,
        StoreCategory::Books,
        StoreCategory::Jewelry,
        StoreCategory::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::Electronics => "electronics",
            StoreCategory::Fashion => "fashion",
            StoreCategory::Food => "food",
            StoreCategory::Home => "home",
            StoreCategory::Beauty => "beauty",
            StoreCategory::Sports => "sports",
            StoreCategory::Entertainment => "entertainment",
            StoreCategory::Books => "books",
            StoreCategory::Jewelry => "jewelry",
            StoreCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        catalog::category_label(*self)
    }
}

impl fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreCategory {
    type Err = StoreFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| StoreFieldError::InvalidCategory(value.to_string()))
    }
}

/// Floor × wing location code (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoreLocation {
    #[serde(rename = "GF-N", alias = "GF-North")]
    GroundNorth,
    #[serde(rename = "GF-S", alias = "GF-South")]
    GroundSouth,
    #[serde(rename = "GF-E", alias = "GF-East")]
    GroundEast,
    #[serde(rename = "GF-W", alias = "GF-West")]
    GroundWest,
    #[serde(rename = "1F-N", alias = "1F-North")]
    FirstNorth,
    #[serde(rename = "1F-S", alias = "1F-South")]
    FirstSouth,
    #[serde(rename = "1F-E", alias = "1F-East")]
    FirstEast,
    #[serde(rename = "1F-W", alias = "1F-West")]
    FirstWest,
    #[serde(rename = "2F-N", alias = "2F-North")]
    SecondNorth,
    #[serde(rename = "2F-S", alias = "2F-South")]
    SecondSouth,
    #[serde(rename = "2F-E", alias = "2F-East")]
    SecondEast,
    #[serde(rename = "2F-W", alias = "2F-West")]
    SecondWest,
}

impl StoreLocation {
    pub const ALL: [StoreLocation; 12] = [
        StoreLocation::GroundNorth,
        StoreLocation::GroundSouth,
        StoreLocation::GroundEast,
        StoreLocation::GroundWest,
        StoreLocation::FirstNorth,
        StoreLocation::FirstSouth,
        StoreLocation::FirstEast,
        StoreLocation::FirstWest,
        StoreLocation::SecondNorth,
        StoreLocation::SecondSouth,
        StoreLocation::SecondEast,
        StoreLocation::SecondWest,
    ];

    /// Short code as persisted (`GF-N`)
    pub const fn code(&self) -> &'static str {
        match self {
            StoreLocation::GroundNorth => "GF-N",
            StoreLocation::GroundSouth => "GF-S",
            StoreLocation::GroundEast => "GF-E",
            StoreLocation::GroundWest => "GF-W",
            StoreLocation::FirstNorth => "1F-N",
            StoreLocation::FirstSouth => "1F-S",
            StoreLocation::FirstEast => "1F-E",
            StoreLocation::FirstWest => "1F-W",
            StoreLocation::SecondNorth => "2F-N",
            StoreLocation::SecondSouth => "2F-S",
            StoreLocation::SecondEast => "2F-E",
            StoreLocation::SecondWest => "2F-W",
        }
    }

    /// Long dashboard spelling (`GF-North`)
    pub const fn long_code(&self) -> &'static str {
        match self {
            StoreLocation::GroundNorth => "GF-North",
            StoreLocation::GroundSouth => "GF-South",
            StoreLocation::GroundEast => "GF-East",
            StoreLocation::GroundWest => "GF-West",
            StoreLocation::FirstNorth => "1F-North",
            StoreLocation::FirstSouth => "1F-South",
            StoreLocation::FirstEast => "1F-East",
            StoreLocation::FirstWest => "1F-West",
            StoreLocation::SecondNorth => "2F-North",
            StoreLocation::SecondSouth => "2F-South",
            StoreLocation::SecondEast => "2F-East",
            StoreLocation::SecondWest => "2F-West",
        }
    }

    pub fn label(&self) -> &'static str {
        catalog::location_label(*self)
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StoreLocation {
    type Err = StoreFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(value) || l.long_code().eq_ignore_ascii_case(value))
            .ok_or_else(|| StoreFieldError::InvalidLocation(value.to_string()))
    }
}

/// Store status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl StoreStatus {
    pub const ALL: [StoreStatus; 3] = [
        StoreStatus::Active,
        StoreStatus::Inactive,
        StoreStatus::Maintenance,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
            StoreStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        catalog::status_label(*self)
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreStatus {
    type Err = StoreFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| StoreFieldError::InvalidStatus(value.to_string()))
    }
}

// =============================================================================
// Opening hours
// =============================================================================

/// Weekly opening hours, one optional free-text range per weekday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
}

impl OpeningHours {
    /// Same range on every day of the week
    pub fn uniform(hours: &str) -> Self {
        let h = || Some(hours.to_string());
        Self {
            monday: h(),
            tuesday: h(),
            wednesday: h(),
            thursday: h(),
            friday: h(),
            saturday: h(),
            sunday: h(),
        }
    }

    /// Days that have an entry, in weekday order
    pub fn days(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Monday", &self.monday),
            ("Tuesday", &self.tuesday),
            ("Wednesday", &self.wednesday),
            ("Thursday", &self.thursday),
            ("Friday", &self.friday),
            ("Saturday", &self.saturday),
            ("Sunday", &self.sunday),
        ]
        .into_iter()
        .filter_map(|(day, hours)| hours.as_deref().map(|h| (day, h)))
    }

    pub fn is_empty(&self) -> bool {
        self.days().next().is_none()
    }
}

/// Hours as accepted from clients: a single range or a weekday map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoursInput {
    Uniform(String),
    Weekly(OpeningHours),
}

impl HoursInput {
    fn into_hours(self) -> Result<OpeningHours, StoreFieldError> {
        match self {
            HoursInput::Uniform(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(StoreFieldError::Empty("hours"));
                }
                Ok(OpeningHours::uniform(s))
            }
            HoursInput::Weekly(hours) if hours.is_empty() => Err(StoreFieldError::Empty("hours")),
            HoursInput::Weekly(hours) => Ok(hours),
        }
    }
}

// =============================================================================
// Entity
// =============================================================================

/// Store entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// `ST###` identifier, immutable
    pub store_id: String,
    pub name: String,
    pub category: StoreCategory,
    pub location: StoreLocation,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    pub description: Option<String>,
    /// Floor area in square feet
    pub size: Option<u32>,
    pub monthly_rent: Option<u64>,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub status: StoreStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Store {
    /// Description, or the generated fallback
    pub fn description_or_default(&self) -> String {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => format!("{} - {} store", self.name, self.category.as_str()),
        }
    }

    /// Numeric suffix of the identifier
    pub fn sequence(&self) -> Option<u32> {
        parse_store_sequence(&self.store_id)
    }
}

/// `ST042` -> 42
pub fn parse_store_sequence(store_id: &str) -> Option<u32> {
    let digits = store_id.strip_prefix(STORE_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// 42 -> `ST042` (at least three digits)
pub fn format_store_id(sequence: u32) -> String {
    format!("{}{:03}", STORE_ID_PREFIX, sequence)
}

/// Next identifier after the highest existing one
pub fn next_store_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(parse_store_sequence)
        .max()
        .unwrap_or(0);
    format_store_id(max + 1)
}

// =============================================================================
// Validation
// =============================================================================

/// Field-level validation failure of a store payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreFieldError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

impl StoreFieldError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreFieldError::Missing(_) => ErrorCode::RequiredField,
            StoreFieldError::Empty(_) => ErrorCode::ValidationFailed,
            StoreFieldError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            StoreFieldError::InvalidLocation(_) => ErrorCode::InvalidLocation,
            StoreFieldError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            StoreFieldError::InvalidEmail(_) | StoreFieldError::InvalidPhone(_) => {
                ErrorCode::ValidationFailed
            }
            StoreFieldError::NotPositive(_) => ErrorCode::ValueOutOfRange,
        }
    }

    fn field(&self) -> &'static str {
        match self {
            StoreFieldError::Missing(f)
            | StoreFieldError::Empty(f)
            | StoreFieldError::NotPositive(f) => f,
            StoreFieldError::InvalidCategory(_) => "category",
            StoreFieldError::InvalidLocation(_) => "location",
            StoreFieldError::InvalidStatus(_) => "status",
            StoreFieldError::InvalidEmail(_) => "contact",
            StoreFieldError::InvalidPhone(_) => "phone",
        }
    }
}

impl From<StoreFieldError> for AppError {
    fn from(err: StoreFieldError) -> Self {
        AppError::with_message(err.code(), err.to_string()).with_detail("field", err.field())
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, StoreFieldError> {
    let value = value.ok_or(StoreFieldError::Missing(field))?;
    non_empty_text(value, field)
}

fn non_empty_text(value: String, field: &'static str) -> Result<String, StoreFieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreFieldError::Empty(field));
    }
    Ok(trimmed.to_string())
}

fn check_email(value: String) -> Result<String, StoreFieldError> {
    let value = value.trim().to_string();
    if !value.is_empty() && !value.validate_email() {
        return Err(StoreFieldError::InvalidEmail(value));
    }
    Ok(value)
}

fn check_phone(value: String) -> Result<String, StoreFieldError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Ok(value);
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    if !allowed || !(7..=20).contains(&value.chars().count()) {
        return Err(StoreFieldError::InvalidPhone(value));
    }
    Ok(value)
}

fn positive<T: PartialEq + Default>(value: T, field: &'static str) -> Result<T, StoreFieldError> {
    if value == T::default() {
        return Err(StoreFieldError::NotPositive(field));
    }
    Ok(value)
}

fn optional_description(value: Option<String>) -> Option<String> {
    value
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

// =============================================================================
// Payloads
// =============================================================================

/// Create store payload, as sent by the dashboard
///
/// Enumerations arrive as raw strings so an unknown value is reported as a
/// validation failure instead of a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "owner")]
    pub manager: Option<String>,
    #[serde(alias = "contact_email")]
    pub contact: Option<String>,
    #[serde(alias = "contact_phone")]
    pub phone: Option<String>,
    #[serde(alias = "opening_hours")]
    pub hours: Option<HoursInput>,
    pub description: Option<String>,
    pub size: Option<u32>,
    #[serde(alias = "monthlyRent")]
    pub monthly_rent: Option<u64>,
    pub status: Option<String>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewStore {
    pub name: String,
    pub category: StoreCategory,
    pub location: StoreLocation,
    pub owner: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub description: Option<String>,
    pub size: Option<u32>,
    pub monthly_rent: Option<u64>,
    pub opening_hours: OpeningHours,
    pub status: StoreStatus,
}

impl StoreCreate {
    pub fn validate(self) -> Result<NewStore, StoreFieldError> {
        let name = required_text(self.name, "name")?;
        let category = required_text(self.category, "category")?.parse::<StoreCategory>()?;
        let location = required_text(self.location, "location")?.parse::<StoreLocation>()?;
        let status = match self.status {
            Some(s) if !s.trim().is_empty() => s.parse::<StoreStatus>()?,
            _ => StoreStatus::default(),
        };
        let opening_hours = match self.hours {
            Some(h) => h.into_hours()?,
            None => catalog::standard_hours(),
        };

        Ok(NewStore {
            name,
            category,
            location,
            owner: self.manager.map(|m| m.trim().to_string()).unwrap_or_default(),
            contact_email: check_email(self.contact.unwrap_or_default())?,
            contact_phone: check_phone(self.phone.unwrap_or_default())?,
            description: optional_description(self.description),
            size: self.size.map(|s| positive(s, "size")).transpose()?,
            monthly_rent: self
                .monthly_rent
                .map(|r| positive(r, "monthly_rent"))
                .transpose()?,
            opening_hours,
            status,
        })
    }
}

impl NewStore {
    /// Materialize the entity under an assigned identifier
    pub fn into_store(self, store_id: String, now: i64) -> Store {
        Store {
            store_id,
            name: self.name,
            category: self.category,
            location: self.location,
            owner: self.owner,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            description: self.description,
            size: self.size,
            monthly_rent: self.monthly_rent,
            opening_hours: self.opening_hours,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update store payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "owner")]
    pub manager: Option<String>,
    #[serde(alias = "contact_email")]
    pub contact: Option<String>,
    #[serde(alias = "contact_phone")]
    pub phone: Option<String>,
    #[serde(alias = "opening_hours")]
    pub hours: Option<HoursInput>,
    pub description: Option<String>,
    pub size: Option<u32>,
    #[serde(alias = "monthlyRent")]
    pub monthly_rent: Option<u64>,
    pub status: Option<String>,
}

/// Validated partial update, serialized with persisted field names
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<StoreCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<StoreLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreStatus>,
}

impl StoreUpdate {
    pub fn validate(self) -> Result<StoreChanges, StoreFieldError> {
        Ok(StoreChanges {
            name: self.name.map(|n| non_empty_text(n, "name")).transpose()?,
            category: self.category.map(|c| c.parse::<StoreCategory>()).transpose()?,
            location: self.location.map(|l| l.parse::<StoreLocation>()).transpose()?,
            owner: self.manager.map(|m| m.trim().to_string()),
            contact_email: self.contact.map(check_email).transpose()?,
            contact_phone: self.phone.map(check_phone).transpose()?,
            description: self.description.map(|d| d.trim().to_string()),
            size: self.size.map(|s| positive(s, "size")).transpose()?,
            monthly_rent: self
                .monthly_rent
                .map(|r| positive(r, "monthly_rent"))
                .transpose()?,
            opening_hours: self.hours.map(HoursInput::into_hours).transpose()?,
            status: self.status.map(|s| s.parse::<StoreStatus>()).transpose()?,
        })
    }
}

impl StoreChanges {
    pub fn is_empty(&self) -> bool {
        *self == StoreChanges::default()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// List query parameters as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Parsed list filter; `None` means unfiltered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilter {
    pub category: Option<StoreCategory>,
    pub status: Option<StoreStatus>,
    /// Lowercased, trimmed search needle
    pub search: Option<String>,
}

fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(FILTER_ALL))
}

impl StoreFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.status.is_none() && self.search.is_none()
    }
}

impl TryFrom<StoreQuery> for StoreFilter {
    type Error = StoreFieldError;

    fn try_from(query: StoreQuery) -> Result<Self, Self::Error> {
        Ok(StoreFilter {
            category: filter_value(query.category.as_deref())
                .map(str::parse::<StoreCategory>)
                .transpose()?,
            status: filter_value(query.status.as_deref())
                .map(str::parse::<StoreStatus>)
                .transpose()?,
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        })
    }
}
