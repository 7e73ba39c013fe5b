//! Dashboard Models
//!
//! Records behind each list page. Every model knows its own id and which of
//! its fields the list view may search or sort.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::record::{FieldType, FieldValue, ListConfig, Record};

fn number(n: u32) -> FieldValue<'static> {
    FieldValue::Number(f64::from(n))
}

// ========================
// Donations
// ========================

/// Donor category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonorType {
    Corporate,
    Individual,
    Collaboration,
}

impl DonorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorType::Corporate => "Corporate",
            DonorType::Individual => "Individual",
            DonorType::Collaboration => "Collaboration",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DonorType::Corporate => "badge badge-primary",
            DonorType::Individual => "badge badge-success",
            DonorType::Collaboration => "badge badge-accent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: u32,
    pub name: String,
    /// Whole dollars
    pub amount: u32,
    pub invoice_ref: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub donor_type: DonorType,
}

impl Donor {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .searchable("invoice_ref")
            .sortable("name", FieldType::Text)
            .sortable("amount", FieldType::Number)
            .sortable("date", FieldType::Date)
    }
}

/// Sum of donation amounts, widened so large collections cannot overflow
pub fn total_donated<'a>(donors: impl IntoIterator<Item = &'a Donor>) -> u64 {
    donors.into_iter().map(|d| u64::from(d.amount)).sum()
}

impl Entity for Donor {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Donor {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "amount" => Some(number(self.amount)),
            "invoice_ref" => Some(FieldValue::Text(&self.invoice_ref)),
            "date" => Some(FieldValue::Date(self.date)),
            "type" => Some(FieldValue::Text(self.donor_type.as_str())),
            _ => None,
        }
    }
}

// ========================
// Relationships
// ========================

/// Connection request state between two chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Sent,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub sr_no: u32,
    pub name: String,
    pub location: String,
    pub active_members: u32,
    pub events: u32,
    pub active_sponsors: u32,
    pub contact_name: String,
    pub contact_number: String,
    #[serde(default)]
    pub request_status: Option<RequestStatus>,
}

impl Chapter {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .searchable("location")
            .searchable("contact_name")
            .sortable("sr_no", FieldType::Number)
            .sortable("name", FieldType::Text)
            .sortable("active_members", FieldType::Number)
            .sortable("events", FieldType::Number)
            .sortable("active_sponsors", FieldType::Number)
    }

    /// A request can only be sent once
    pub fn can_send_request(&self) -> bool {
        self.request_status.is_none()
    }
}

impl Entity for Chapter {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Chapter {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "sr_no" => Some(number(self.sr_no)),
            "name" => Some(FieldValue::Text(&self.name)),
            "location" => Some(FieldValue::Text(&self.location)),
            "active_members" => Some(number(self.active_members)),
            "events" => Some(number(self.events)),
            "active_sponsors" => Some(number(self.active_sponsors)),
            "contact_name" => Some(FieldValue::Text(&self.contact_name)),
            "contact_number" => Some(FieldValue::Text(&self.contact_number)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationStatus {
    Ongoing,
    Completed,
    Pending,
}

impl CollaborationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollaborationStatus::Ongoing => "ongoing",
            CollaborationStatus::Completed => "completed",
            CollaborationStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: u32,
    pub chapter_a: String,
    pub chapter_b: String,
    #[serde(rename = "type")]
    pub collab_type: String,
    pub status: CollaborationStatus,
    pub start_date: NaiveDate,
    pub events: u32,
}

impl Collaboration {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("chapter_a")
            .searchable("chapter_b")
            .searchable("type")
            .sortable("start_date", FieldType::Date)
            .sortable("events", FieldType::Number)
    }
}

impl Entity for Collaboration {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Collaboration {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "chapter_a" => Some(FieldValue::Text(&self.chapter_a)),
            "chapter_b" => Some(FieldValue::Text(&self.chapter_b)),
            "type" => Some(FieldValue::Text(&self.collab_type)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "start_date" => Some(FieldValue::Date(self.start_date)),
            "events" => Some(number(self.events)),
            _ => None,
        }
    }
}

/// Count of collaborations in one status
pub fn count_by_status<'a>(
    collaborations: impl IntoIterator<Item = &'a Collaboration>,
    status: CollaborationStatus,
) -> usize {
    collaborations
        .into_iter()
        .filter(|c| c.status == status)
        .count()
}

// ========================
// Volunteering
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: u32,
    pub name: String,
    pub slot: String,
    pub contact: String,
}

impl Volunteer {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .sortable("name", FieldType::Text)
            .sortable("slot", FieldType::Text)
    }
}

impl Entity for Volunteer {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Volunteer {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "slot" => Some(FieldValue::Text(&self.slot)),
            "contact" => Some(FieldValue::Text(&self.contact)),
            _ => None,
        }
    }
}

// ========================
// Sponsorships
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: u32,
    pub name: String,
    /// Whole dollars
    pub price: u32,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub delivered_on: Option<NaiveDate>,
    pub quantity: u32,
    pub benefits: String,
}

impl Package {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .sortable("name", FieldType::Text)
            .sortable("price", FieldType::Number)
            .sortable("due_date", FieldType::Date)
            .sortable("quantity", FieldType::Number)
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_on.is_some()
    }

    /// Price times quantity
    pub fn value(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

impl Entity for Package {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Package {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "price" => Some(number(self.price)),
            "due_date" => Some(FieldValue::Date(self.due_date)),
            "delivered_on" => self.delivered_on.map(FieldValue::Date),
            "quantity" => Some(number(self.quantity)),
            "benefits" => Some(FieldValue::Text(&self.benefits)),
            _ => None,
        }
    }
}

// ========================
// Organizations
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    Active,
    Inactive,
}

impl OrganizationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationStatus::Active => "active",
            OrganizationStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub members: u32,
    pub events: u32,
    pub status: OrganizationStatus,
    pub contact: String,
}

impl Organization {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .searchable("type")
            .searchable("contact")
            .sortable("name", FieldType::Text)
            .sortable("members", FieldType::Number)
            .sortable("events", FieldType::Number)
    }
}

impl Entity for Organization {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Organization {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "type" => Some(FieldValue::Text(&self.org_type)),
            "members" => Some(number(self.members)),
            "events" => Some(number(self.events)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "contact" => Some(FieldValue::Text(&self.contact)),
            _ => None,
        }
    }
}

// ========================
// Members
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub organization: String,
    pub role: String,
    pub status: MemberStatus,
    pub join_date: NaiveDate,
}

impl Member {
    pub fn list_config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .searchable("name")
            .searchable("email")
            .searchable("organization")
            .sortable("name", FieldType::Text)
            .sortable("join_date", FieldType::Date)
    }

    /// Avatar initials, e.g. "JD" for "John Doe"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Entity for Member {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Record for Member {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "organization" => Some(FieldValue::Text(&self.organization)),
            "role" => Some(FieldValue::Text(&self.role)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "join_date" => Some(FieldValue::Date(self.join_date)),
            _ => None,
        }
    }
}

// ========================
// Events
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }

    /// Upcoming and ongoing events count as active
    pub fn is_active(&self) -> bool {
        !matches!(self, EventStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub organization: String,
    pub attendees: u32,
    pub status: EventStatus,
}

impl Entity for Event {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
