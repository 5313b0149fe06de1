//! Admin Schema
//!
//! Table columns and form fields are plain data over a record type: a header
//! or label plus function pointers that read and write the record. The UI
//! renders them without knowing which entity it is showing.

use chrono::NaiveDate;

use super::EntityId;

/// Wire and `<input type="date">` format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Colour of a badge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Yellow,
    Pink,
    Gray,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Neutral => "badge",
            Tone::Blue => "badge badge-blue",
            Tone::Green => "badge badge-green",
            Tone::Orange => "badge badge-orange",
            Tone::Purple => "badge badge-purple",
            Tone::Red => "badge badge-red",
            Tone::Yellow => "badge badge-yellow",
            Tone::Pink => "badge badge-pink",
            Tone::Gray => "badge badge-gray",
        }
    }
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    Badge { text: String, tone: Tone },
    /// First few tags plus how many more were left out
    Tags { shown: Vec<String>, more: usize },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn badge(value: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge { text: value.into(), tone }
    }

    /// Up to `limit` tags; the rest are only counted
    pub fn tags(values: impl IntoIterator<Item = String>, limit: usize) -> Self {
        let mut shown: Vec<String> = values.into_iter().collect();
        let more = shown.len().saturating_sub(limit);
        shown.truncate(limit);
        Cell::Tags { shown, more }
    }

    /// "Sì" / "No" badge for boolean flags
    pub fn yes_no(flag: bool) -> Self {
        if flag {
            Cell::badge("Sì", Tone::Green)
        } else {
            Cell::badge("No", Tone::Gray)
        }
    }
}

/// One table column
pub struct Column<T> {
    pub header: &'static str,
    pub render: fn(&T) -> Cell,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, render: fn(&T) -> Cell) -> Self {
        Self { header, render }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Input widget for a form field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea,
    Integer,
    Decimal,
    Date,
    /// `(code, label)` options
    Select(fn() -> Vec<(&'static str, &'static str)>),
    /// Checkbox; values are `"true"` / `"false"`
    Toggle,
}

impl FieldKind {
    /// `type` attribute for `<input>` based kinds
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Integer | FieldKind::Decimal => "number",
            FieldKind::Date => "date",
            FieldKind::Toggle => "checkbox",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            FieldKind::Integer => Some("1"),
            FieldKind::Decimal => Some("0.01"),
            _ => None,
        }
    }
}

/// One editable field of a draft record
pub struct FormField<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub read: fn(&T) -> String,
    pub write: fn(&mut T, &str),
}

impl<T> FormField<T> {
    pub fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        read: fn(&T) -> String,
        write: fn(&mut T, &str),
    ) -> Self {
        Self { name, label, kind, required: false, read, write }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl<T> Clone for FormField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FormField<T> {}

// ========================
// Value helpers
// ========================

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// Unparseable ids become 0 so the backend rejects them rather than the form
pub fn parse_id(value: &str) -> EntityId {
    value.trim().parse().unwrap_or_default()
}

pub fn parse_optional_id(value: &str) -> Option<EntityId> {
    value.trim().parse().ok()
}

pub fn format_optional_id(id: Option<EntityId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

pub fn parse_decimal(value: &str) -> f64 {
    value.trim().replace(',', ".").parse().unwrap_or_default()
}

pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

pub fn format_flag(flag: bool) -> String {
    flag.to_string()
}

pub fn blank_to_none(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn format_euro(amount: f64) -> String {
    format!("€{:.2}", amount)
}

pub fn id_cell(id: Option<EntityId>) -> Cell {
    Cell::Text(format_optional_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_round_trips_input_value() {
        let date = parse_date("2024-03-01").unwrap();
        assert_eq!(format_date(Some(date)), "2024-03-01");
        assert!(parse_date("").is_none());
        assert!(parse_date("01/03/2024").is_none());
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("12,50"), 12.5);
        assert_eq!(parse_decimal(" 3.2 "), 3.2);
        assert_eq!(parse_decimal("abc"), 0.0);
    }

    #[test]
    fn test_ids() {
        assert_eq!(parse_id("42"), 42);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(format_optional_id(Some(7)), "7");
    }

    #[test]
    fn test_tags_beyond_limit_are_counted() {
        let titles = ["Tex", "Zagor", "Dylan Dog", "Martin Mystère", "Nathan Never"];
        let cell = Cell::tags(titles.iter().map(|t| t.to_string()), 3);
        assert_eq!(
            cell,
            Cell::Tags { shown: vec!["Tex".into(), "Zagor".into(), "Dylan Dog".into()], more: 2 }
        );
        let single = Cell::tags(vec!["Tex".to_string()], 3);
        assert_eq!(single, Cell::Tags { shown: vec!["Tex".into()], more: 0 });
    }

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(10.0), "€10.00");
        assert_eq!(format_euro(3.456), "€3.46");
    }
}
