//! Wishlist Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::comic::Comic;
use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    format_date, format_optional_id, id_cell, parse_date, parse_optional_id, today, Cell, Column,
    FieldKind, FormField,
};

/// Comic titles listed in the table before collapsing into "+N altri"
const VISIBLE_COMICS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(rename = "wishlistId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "dataCreazione")]
    pub created_on: NaiveDate,
    #[serde(rename = "utenteId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<EntityId>,
    #[serde(rename = "fumetti", default)]
    pub comics: Vec<Comic>,
}

impl Resource for Wishlist {
    const KIND: EntityKind = EntityKind::Wishlists;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            created_on: today(),
            user_id: Some(1),
            comics: Vec::new(),
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |w| id_cell(w.id)),
            Column::<Self>::new("Utente ID", |w| Cell::text(format_optional_id(w.user_id))),
            Column::<Self>::new("Data Creazione", |w| Cell::text(format_date(Some(w.created_on)))),
            Column::<Self>::new("Fumetti", |w| {
                Cell::tags(w.comics.iter().map(|c| c.title.clone()), VISIBLE_COMICS)
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new(
                "utenteId",
                "ID Utente",
                FieldKind::Integer,
                |w| format_optional_id(w.user_id),
                |w, v| w.user_id = parse_optional_id(v),
            ),
            FormField::<Self>::new(
                "dataCreazione",
                "Data Creazione",
                FieldKind::Date,
                |w| format_date(Some(w.created_on)),
                |w, v| {
                    if let Some(date) = parse_date(v) {
                        w.created_on = date;
                    }
                },
            )
            .required(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(title: &str) -> Comic {
        Comic { title: title.into(), ..Comic::draft() }
    }

    #[test]
    fn test_comics_column_collapses_after_three() {
        let wishlist = Wishlist {
            comics: vec![comic("Tex"), comic("Zagor"), comic("Diabolik"), comic("Dylan Dog")],
            ..Wishlist::draft()
        };
        let column = Wishlist::columns().into_iter().find(|c| c.header == "Fumetti").unwrap();

        match (column.render)(&wishlist) {
            Cell::Tags { shown, more } => {
                assert_eq!(shown, vec!["Tex", "Zagor", "Diabolik"]);
                assert_eq!(more, 1);
            }
            other => panic!("unexpected cell {:?}", other),
        }
    }
}
