//! Order Detail Entity
//!
//! Line item linking an `Order` to a `ComicCopy` with a quantity.

use serde::{Deserialize, Serialize};

use super::copy::ComicCopy;
use super::entity::{EntityId, EntityKind, Resource};
use super::order::Order;
use super::schema::{format_euro, id_cell, parse_id, Cell, Column, FieldKind, FormField};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "dettagliOrdineId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "quantitaFumetti", default)]
    pub quantity: i32,
    #[serde(rename = "copiaFumettoId", default)]
    pub copy_id: EntityId,
    #[serde(rename = "ordineId", default)]
    pub order_id: EntityId,
    #[serde(rename = "copiaFumetto", default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<ComicCopy>,
    #[serde(rename = "ordine", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl OrderDetail {
    pub fn unit_price(&self) -> Option<f64> {
        self.copy.as_ref().map(|c| c.price)
    }

    /// Copy price times quantity, when the copy is embedded
    pub fn line_total(&self) -> Option<f64> {
        self.unit_price().map(|price| price * f64::from(self.quantity))
    }

    pub fn order_ref(&self) -> EntityId {
        self.order.as_ref().and_then(|o| o.id).unwrap_or(self.order_id)
    }
}

fn price_cell(amount: Option<f64>) -> Cell {
    Cell::text(amount.map(format_euro).unwrap_or_else(|| "N/A".to_string()))
}

impl Resource for OrderDetail {
    const KIND: EntityKind = EntityKind::OrderDetails;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            quantity: 1,
            copy_id: 1,
            order_id: 1,
            copy: None,
            order: None,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |d| id_cell(d.id)),
            Column::<Self>::new("Ordine ID", |d| Cell::text(d.order_ref().to_string())),
            Column::<Self>::new("Fumetto", |d| {
                Cell::Strong(match &d.copy {
                    Some(copy) => copy.comic_label(),
                    None => format!("Copia #{}", d.copy_id),
                })
            }),
            Column::<Self>::new("Quantità", |d| Cell::text(d.quantity.to_string())),
            Column::<Self>::new("Prezzo Unitario", |d| price_cell(d.unit_price())),
            Column::<Self>::new("Totale", |d| price_cell(d.line_total())),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new(
                "ordineId",
                "ID Ordine",
                FieldKind::Integer,
                |d| d.order_id.to_string(),
                |d, v| d.order_id = parse_id(v),
            )
            .required(),
            FormField::<Self>::new(
                "copiaFumettoId",
                "ID Copia Fumetto",
                FieldKind::Integer,
                |d| d.copy_id.to_string(),
                |d, v| d.copy_id = parse_id(v),
            )
            .required(),
            FormField::<Self>::new(
                "quantitaFumetti",
                "Quantità",
                FieldKind::Integer,
                |d| d.quantity.to_string(),
                |d, v| d.quantity = v.trim().parse().unwrap_or_default(),
            )
            .required(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_needs_embedded_copy() {
        let mut detail = OrderDetail::draft();
        detail.quantity = 3;
        assert_eq!(detail.line_total(), None);

        let mut copy = ComicCopy::draft();
        copy.price = 4.5;
        detail.copy = Some(copy);
        assert_eq!(detail.line_total(), Some(13.5));
        assert_eq!(price_cell(detail.line_total()), Cell::text("€13.50"));
    }
}
