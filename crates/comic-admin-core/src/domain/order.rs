//! Order Entity
//!
//! Purchase header for a user. Line items are `OrderDetail`s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    format_date, format_euro, id_cell, parse_date, parse_decimal, parse_id, today, Cell, Column,
    FieldKind, FormField, Tone,
};
use super::user::User;

choice_enum! {
    OrderStatus {
        Shipping => "IN_CONSEGNA", "In Consegna",
        Delivered => "CONSEGNATO", "Consegnato",
        Cancelled => "ANNULLATO", "Annullato",
    }
}

impl OrderStatus {
    pub fn tone(self) -> Tone {
        match self {
            OrderStatus::Shipping => Tone::Yellow,
            OrderStatus::Delivered => Tone::Green,
            OrderStatus::Cancelled => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ordineId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "prezzoFinale", default)]
    pub total: f64,
    #[serde(rename = "dataOrdine")]
    pub ordered_on: NaiveDate,
    #[serde(rename = "statoOrdine")]
    pub status: OrderStatus,
    #[serde(rename = "utenteId", default)]
    pub user_id: EntityId,
    #[serde(rename = "utente", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Order {
    pub fn customer_label(&self) -> String {
        match &self.user {
            Some(user) => user.full_name(),
            None => format!("Utente #{}", self.user_id),
        }
    }
}

impl Resource for Order {
    const KIND: EntityKind = EntityKind::Orders;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            total: 0.0,
            ordered_on: today(),
            status: OrderStatus::Shipping,
            user_id: 1,
            user: None,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |o| id_cell(o.id)),
            Column::<Self>::new("Cliente", |o| Cell::Strong(o.customer_label())),
            Column::<Self>::new("Prezzo Finale", |o| Cell::text(format_euro(o.total))),
            Column::<Self>::new("Data Ordine", |o| Cell::text(format_date(Some(o.ordered_on)))),
            Column::<Self>::new("Stato", |o| Cell::badge(o.status.code(), o.status.tone())),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new(
                "utenteId",
                "ID Utente",
                FieldKind::Integer,
                |o| o.user_id.to_string(),
                |o, v| o.user_id = parse_id(v),
            )
            .required(),
            FormField::<Self>::new(
                "prezzoFinale",
                "Prezzo Finale (€)",
                FieldKind::Decimal,
                |o| o.total.to_string(),
                |o, v| o.total = parse_decimal(v),
            )
            .required(),
            FormField::<Self>::new(
                "dataOrdine",
                "Data Ordine",
                FieldKind::Date,
                |o| format_date(Some(o.ordered_on)),
                |o, v| {
                    if let Some(date) = parse_date(v) {
                        o.ordered_on = date;
                    }
                },
            )
            .required(),
            FormField::<Self>::new(
                "statoOrdine",
                "Stato",
                FieldKind::Select(OrderStatus::options),
                |o| o.status.code().to_string(),
                |o, v| {
                    if let Some(status) = OrderStatus::from_code(v) {
                        o.status = status;
                    }
                },
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_label_from_embedded_user() {
        let json = r#"{
            "ordineId": 5,
            "prezzoFinale": 42.0,
            "dataOrdine": "2024-05-02",
            "statoOrdine": "CONSEGNATO",
            "utenteId": 2,
            "utente": {
                "utenteId": 2, "nome": "Anna", "cognome": "Bianchi",
                "dataRegistrazione": "2023-01-01", "ruoloUtente": "CLIENTE"
            }
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_label(), "Anna Bianchi");
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_customer_label_without_user() {
        assert_eq!(Order::draft().customer_label(), "Utente #1");
    }
}
