//! User Entity
//!
//! Store accounts: customers and administrators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    blank_to_none, format_date, format_optional_id, id_cell, parse_date, parse_optional_id, today,
    Cell, Column, FieldKind, FormField, Tone,
};

choice_enum! {
    /// Account role
    UserRole {
        Admin => "ADMIN", "Admin",
        Customer => "CLIENTE", "Cliente",
    }
}

impl UserRole {
    pub fn tone(self) -> Tone {
        match self {
            UserRole::Admin => Tone::Red,
            UserRole::Customer => Tone::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "utenteId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "nome", default)]
    pub first_name: String,
    #[serde(rename = "cognome", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "indirizzo", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "dataInizioAbbonamento", default, skip_serializing_if = "Option::is_none")]
    pub subscription_starts: Option<NaiveDate>,
    #[serde(rename = "dataFineAbbonamento", default, skip_serializing_if = "Option::is_none")]
    pub subscription_ends: Option<NaiveDate>,
    #[serde(rename = "dataRegistrazione")]
    pub registered_on: NaiveDate,
    #[serde(rename = "ruoloUtente")]
    pub role: UserRole,
    #[serde(rename = "abbonamentoId", default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<EntityId>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Resource for User {
    const KIND: EntityKind = EntityKind::Users;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            address: None,
            subscription_starts: None,
            subscription_ends: None,
            registered_on: today(),
            role: UserRole::Customer,
            subscription_id: None,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |u| id_cell(u.id)),
            Column::<Self>::new("Nome", |u| Cell::Strong(u.full_name())),
            Column::<Self>::new("Email", |u| Cell::text(&u.email)),
            Column::<Self>::new("Ruolo", |u| Cell::badge(u.role.code(), u.role.tone())),
            Column::<Self>::new("Data Registrazione", |u| Cell::text(format_date(Some(u.registered_on)))),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new("nome", "Nome", FieldKind::Text, |u| u.first_name.clone(), |u, v| {
                u.first_name = v.to_string()
            })
            .required(),
            FormField::<Self>::new("cognome", "Cognome", FieldKind::Text, |u| u.last_name.clone(), |u, v| {
                u.last_name = v.to_string()
            })
            .required(),
            FormField::<Self>::new("email", "Email", FieldKind::Email, |u| u.email.clone(), |u, v| {
                u.email = v.to_string()
            })
            .required(),
            FormField::<Self>::new("password", "Password", FieldKind::Password, |u| u.password.clone(), |u, v| {
                u.password = v.to_string()
            })
            .required(),
            FormField::<Self>::new(
                "indirizzo",
                "Indirizzo",
                FieldKind::Text,
                |u| u.address.clone().unwrap_or_default(),
                |u, v| u.address = blank_to_none(v),
            ),
            FormField::<Self>::new(
                "ruoloUtente",
                "Ruolo",
                FieldKind::Select(UserRole::options),
                |u| u.role.code().to_string(),
                |u, v| {
                    if let Some(role) = UserRole::from_code(v) {
                        u.role = role;
                    }
                },
            ),
            FormField::<Self>::new(
                "dataRegistrazione",
                "Data Registrazione",
                FieldKind::Date,
                |u| format_date(Some(u.registered_on)),
                |u, v| {
                    if let Some(date) = parse_date(v) {
                        u.registered_on = date;
                    }
                },
            )
            .required(),
            FormField::<Self>::new(
                "abbonamentoId",
                "ID Abbonamento",
                FieldKind::Integer,
                |u| format_optional_id(u.subscription_id),
                |u, v| u.subscription_id = parse_optional_id(v),
            ),
        ]
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}
