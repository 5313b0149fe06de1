//! Auction Entity
//!
//! Time-boxed bidding over a comic copy. Bidding rules live on the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::copy::ComicCopy;
use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    format_date, format_euro, format_optional_id, id_cell, parse_date, parse_decimal, parse_id,
    parse_optional_id, Cell, Column, FieldKind, FormField, Tone,
};

choice_enum! {
    AuctionStatus {
        InProgress => "IN_CORSO", "In Corso",
        Closed => "CONCLUSA", "Conclusa",
        Cancelled => "ANNULLATA", "Annullata",
    }
}

impl AuctionStatus {
    pub fn tone(self) -> Tone {
        match self {
            AuctionStatus::InProgress => Tone::Green,
            AuctionStatus::Closed => Tone::Gray,
            AuctionStatus::Cancelled => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "astaId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "dataInizio", default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(rename = "dataFine", default)]
    pub ends_on: Option<NaiveDate>,
    #[serde(rename = "offertaCorrente", default)]
    pub current_bid: f64,
    #[serde(rename = "statoAsta")]
    pub status: AuctionStatus,
    #[serde(rename = "copiaFumettoId", default)]
    pub copy_id: EntityId,
    #[serde(rename = "utenteMiglioreOffertaId", default, skip_serializing_if = "Option::is_none")]
    pub best_bidder_id: Option<EntityId>,
    #[serde(rename = "copiaFumetto", default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<ComicCopy>,
}

impl Auction {
    pub fn item_label(&self) -> String {
        match &self.copy {
            Some(copy) => copy.comic_label(),
            None => format!("Copia #{}", self.copy_id),
        }
    }
}

impl Resource for Auction {
    const KIND: EntityKind = EntityKind::Auctions;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            starts_on: None,
            ends_on: None,
            current_bid: 0.0,
            status: AuctionStatus::InProgress,
            copy_id: 1,
            best_bidder_id: None,
            copy: None,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |a| id_cell(a.id)),
            Column::<Self>::new("Fumetto", |a| Cell::Strong(a.item_label())),
            Column::<Self>::new("Data Inizio", |a| Cell::text(format_date(a.starts_on))),
            Column::<Self>::new("Data Fine", |a| Cell::text(format_date(a.ends_on))),
            Column::<Self>::new("Offerta Corrente", |a| Cell::text(format_euro(a.current_bid))),
            Column::<Self>::new("Stato", |a| Cell::badge(a.status.code(), a.status.tone())),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new(
                "copiaFumettoId",
                "ID Copia Fumetto",
                FieldKind::Integer,
                |a| a.copy_id.to_string(),
                |a, v| a.copy_id = parse_id(v),
            )
            .required(),
            FormField::<Self>::new(
                "dataInizio",
                "Data Inizio",
                FieldKind::Date,
                |a| format_date(a.starts_on),
                |a, v| a.starts_on = parse_date(v),
            )
            .required(),
            FormField::<Self>::new(
                "dataFine",
                "Data Fine",
                FieldKind::Date,
                |a| format_date(a.ends_on),
                |a, v| a.ends_on = parse_date(v),
            )
            .required(),
            FormField::<Self>::new(
                "offertaCorrente",
                "Offerta Corrente (€)",
                FieldKind::Decimal,
                |a| a.current_bid.to_string(),
                |a, v| a.current_bid = parse_decimal(v),
            ),
            FormField::<Self>::new(
                "statoAsta",
                "Stato",
                FieldKind::Select(AuctionStatus::options),
                |a| a.status.code().to_string(),
                |a, v| {
                    if let Some(status) = AuctionStatus::from_code(v) {
                        a.status = status;
                    }
                },
            ),
            FormField::<Self>::new(
                "utenteMiglioreOffertaId",
                "ID Utente Miglior Offerta",
                FieldKind::Integer,
                |a| format_optional_id(a.best_bidder_id),
                |a, v| a.best_bidder_id = parse_optional_id(v),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label_uses_embedded_copy() {
        let mut auction = Auction::draft();
        assert_eq!(auction.item_label(), "Copia #1");

        let mut copy = ComicCopy::draft();
        copy.comic = Some(crate::domain::Comic {
            title: "Tex".to_string(),
            ..crate::domain::Comic::draft()
        });
        auction.copy = Some(copy);
        assert_eq!(auction.item_label(), "Tex");
    }
}
