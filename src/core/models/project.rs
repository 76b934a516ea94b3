use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_DUE_IN_DAYS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Normal,
}

/// Visual variant shown on a card for a given priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityBadge {
    pub class: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Normal => "normal",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            "normal" => Some(Priority::Normal),
            _ => None,
        }
    }

    pub fn badge(&self) -> PriorityBadge {
        match self {
            Priority::High => PriorityBadge { class: "priority-high", label: "High Priority", icon: "🔴" },
            Priority::Medium => PriorityBadge { class: "priority-medium", label: "Medium", icon: "🟡" },
            Priority::Low => PriorityBadge { class: "priority-low", label: "Low", icon: "🟢" },
            Priority::Normal => PriorityBadge { class: "priority-normal", label: "Normal", icon: "⚪" },
        }
    }

    /// Label used in the priority picker
    pub fn option_label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Normal => "Normal",
        }
    }

    // Picker order, not severity order
    pub fn all() -> Vec<Priority> {
        vec![Priority::High, Priority::Medium, Priority::Normal, Priority::Low]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Session-scoped object URL. Dangling once the page is reloaded.
    pub url: String,
}

impl ProjectFile {
    pub fn new(name: String, mime_type: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            mime_type,
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub cost: f64,
}

impl LineItem {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            cost: 0.0,
        }
    }
}

/// Parse a cost typed into the billing form. Anything that is not a
/// finite, non-negative number becomes zero.
pub fn parse_cost(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a due date as typed into the date input or found in storage.
/// Full timestamps are accepted and cut to their calendar date.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|at| at.date_naive()))
}

/// `dueDate` is stored as `YYYY-MM-DD`, and a cleared date as `""`.
mod due_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_str(""),
        }
    }

    // An unreadable date loads as no date instead of failing the whole board
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_due_date))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub priority: Priority,
    /// `None` once the date field has been cleared.
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDate>,
    pub client_name: String,
    pub client_mobile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Project {
    /// Unsaved project handed to the modal by "New Project".
    pub fn draft(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: "New Project".to_string(),
            company: String::new(),
            description: String::new(),
            priority: Priority::Normal,
            due_date: Some((now + Duration::days(DEFAULT_DUE_IN_DAYS)).date_naive()),
            client_name: String::new(),
            client_mobile: String::new(),
            created_at: now,
            updated_at: now,
            files: Vec::new(),
            line_items: Vec::new(),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Overdue once midnight UTC of the due date has passed. A project
    /// without a due date is never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|due| due.and_utc() < now)
            .unwrap_or(false)
    }

    pub fn add_file(&mut self, file: ProjectFile) {
        self.files.push(file);
    }

    pub fn remove_file(&mut self, file_id: &str) {
        self.files.retain(|f| f.id != file_id);
    }

    pub fn add_line_item(&mut self) -> String {
        let item = LineItem::blank();
        let id = item.id.clone();
        self.line_items.push(item);
        id
    }

    pub fn set_line_item_description(&mut self, item_id: &str, description: String) {
        if let Some(item) = self.line_items.iter_mut().find(|i| i.id == item_id) {
            item.description = description;
        }
    }

    pub fn set_line_item_cost(&mut self, item_id: &str, cost: f64) {
        if let Some(item) = self.line_items.iter_mut().find(|i| i.id == item_id) {
            item.cost = cost;
        }
    }

    pub fn remove_line_item(&mut self, item_id: &str) {
        self.line_items.retain(|i| i.id != item_id);
    }

    pub fn invoice_total(&self) -> f64 {
        self.line_items.iter().map(|i| i.cost).sum()
    }
}
