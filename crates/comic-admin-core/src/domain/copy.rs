//! Comic Copy Entity
//!
//! A priced, condition-tagged physical copy of a `Comic`.

use serde::{Deserialize, Serialize};

use super::comic::Comic;
use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    format_euro, format_flag, id_cell, parse_decimal, parse_flag, parse_id, Cell, Column,
    FieldKind, FormField, Tone,
};

choice_enum! {
    /// Physical condition of a copy
    CopyCondition {
        New => "NUOVO", "Nuovo",
        Used => "USATO", "Usato",
    }
}

impl CopyCondition {
    pub fn tone(self) -> Tone {
        match self {
            CopyCondition::New => Tone::Green,
            CopyCondition::Used => Tone::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicCopy {
    #[serde(rename = "copiaFumettoId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "statoCopiaFumetto")]
    pub condition: CopyCondition,
    #[serde(rename = "prezzo", default)]
    pub price: f64,
    #[serde(rename = "disponibile", default)]
    pub available: bool,
    #[serde(rename = "fumettoId", default)]
    pub comic_id: EntityId,
    #[serde(rename = "fumetto", default, skip_serializing_if = "Option::is_none")]
    pub comic: Option<Comic>,
}

impl ComicCopy {
    /// Comic this copy belongs to, preferring the embedded record
    pub fn comic_ref(&self) -> Option<EntityId> {
        self.comic
            .as_ref()
            .and_then(|c| c.id)
            .or(Some(self.comic_id).filter(|id| *id != 0))
    }

    /// Embedded comic title, or a reference by id
    pub fn comic_label(&self) -> String {
        match &self.comic {
            Some(comic) => comic.title.clone(),
            None => format!("Fumetto #{}", self.comic_id),
        }
    }
}

impl Resource for ComicCopy {
    const KIND: EntityKind = EntityKind::Copies;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            condition: CopyCondition::New,
            price: 0.0,
            available: true,
            comic_id: 1,
            comic: None,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |c| id_cell(c.id)),
            Column::<Self>::new("Fumetto", |c| Cell::Strong(c.comic_label())),
            Column::<Self>::new("Stato", |c| Cell::badge(c.condition.code(), c.condition.tone())),
            Column::<Self>::new("Prezzo", |c| Cell::text(format_euro(c.price))),
            Column::<Self>::new("Disponibile", |c| Cell::yes_no(c.available)),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new(
                "fumettoId",
                "ID Fumetto",
                FieldKind::Integer,
                |c| c.comic_id.to_string(),
                |c, v| c.comic_id = parse_id(v),
            )
            .required(),
            FormField::<Self>::new(
                "statoCopiaFumetto",
                "Stato",
                FieldKind::Select(CopyCondition::options),
                |c| c.condition.code().to_string(),
                |c, v| {
                    if let Some(condition) = CopyCondition::from_code(v) {
                        c.condition = condition;
                    }
                },
            ),
            FormField::<Self>::new(
                "prezzo",
                "Prezzo (€)",
                FieldKind::Decimal,
                |c| c.price.to_string(),
                |c, v| c.price = parse_decimal(v),
            )
            .required(),
            FormField::<Self>::new(
                "disponibile",
                "Disponibile",
                FieldKind::Toggle,
                |c| format_flag(c.available),
                |c, v| c.available = parse_flag(v),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comic_ref_prefers_embedded_comic() {
        let json = r#"{
            "copiaFumettoId": 9,
            "statoCopiaFumetto": "USATO",
            "prezzo": 12.5,
            "disponibile": false,
            "fumetto": {"fumettoId": 4, "titolo": "Dylan Dog", "categoriaFumetto": "HORROR"}
        }"#;
        let copy: ComicCopy = serde_json::from_str(json).unwrap();
        assert_eq!(copy.comic_id, 0);
        assert_eq!(copy.comic_ref(), Some(4));
        assert_eq!(copy.comic_label(), "Dylan Dog");
    }

    #[test]
    fn test_comic_ref_falls_back_to_foreign_key() {
        let mut copy = ComicCopy::draft();
        copy.comic_id = 7;
        assert_eq!(copy.comic_ref(), Some(7));
        copy.comic_id = 0;
        assert_eq!(copy.comic_ref(), None);
    }
}
