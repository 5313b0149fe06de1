//! Comic Entity
//!
//! Catalog item. Physical stock lives in `ComicCopy`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{
    blank_to_none, format_date, format_flag, id_cell, parse_date, parse_flag, Cell, Column,
    FieldKind, FormField, Tone,
};

choice_enum! {
    /// Catalog category
    ComicCategory {
        Fantasy => "FANTASY", "Fantasy",
        ScienceFiction => "FANTASCIENZA", "Fantascienza",
        Horror => "HORROR", "Horror",
        Superheroes => "SUPEREROI", "Supereroi",
        Sports => "SPORTIVO", "Sportivo",
        School => "SCOLASTICO", "Scolastico",
        Romance => "ROMANTICO", "Romantico",
        Action => "AZIONE", "Azione",
    }
}

impl ComicCategory {
    pub fn tone(self) -> Tone {
        match self {
            ComicCategory::Fantasy => Tone::Purple,
            ComicCategory::ScienceFiction => Tone::Blue,
            ComicCategory::Horror => Tone::Red,
            ComicCategory::Superheroes => Tone::Yellow,
            ComicCategory::Sports => Tone::Green,
            ComicCategory::School => Tone::Gray,
            ComicCategory::Romance => Tone::Pink,
            ComicCategory::Action => Tone::Orange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    #[serde(rename = "fumettoId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "titolo", default)]
    pub title: String,
    #[serde(rename = "autore", default)]
    pub author: String,
    #[serde(rename = "editore", default)]
    pub publisher: String,
    #[serde(rename = "descrizione", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "dataPubblicazione", default)]
    pub published_on: Option<NaiveDate>,
    #[serde(rename = "disponibilePerAsta", default)]
    pub auctionable: bool,
    #[serde(rename = "categoriaFumetto")]
    pub category: ComicCategory,
}

impl Resource for Comic {
    const KIND: EntityKind = EntityKind::Comics;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self {
            id: None,
            title: String::new(),
            author: String::new(),
            publisher: String::new(),
            description: None,
            published_on: None,
            auctionable: false,
            category: ComicCategory::Fantasy,
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |c| id_cell(c.id)),
            Column::<Self>::new("Titolo", |c| Cell::Strong(c.title.clone())),
            Column::<Self>::new("Autore", |c| Cell::text(&c.author)),
            Column::<Self>::new("Categoria", |c| Cell::badge(c.category.code(), c.category.tone())),
            Column::<Self>::new("Data Pubblicazione", |c| Cell::text(format_date(c.published_on))),
            Column::<Self>::new("Asta", |c| Cell::yes_no(c.auctionable)),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![
            FormField::<Self>::new("titolo", "Titolo", FieldKind::Text, |c| c.title.clone(), |c, v| {
                c.title = v.to_string()
            })
            .required(),
            FormField::<Self>::new("autore", "Autore", FieldKind::Text, |c| c.author.clone(), |c, v| {
                c.author = v.to_string()
            })
            .required(),
            FormField::<Self>::new("editore", "Editore", FieldKind::Text, |c| c.publisher.clone(), |c, v| {
                c.publisher = v.to_string()
            })
            .required(),
            FormField::<Self>::new(
                "descrizione",
                "Descrizione",
                FieldKind::TextArea,
                |c| c.description.clone().unwrap_or_default(),
                |c, v| c.description = blank_to_none(v),
            ),
            FormField::<Self>::new(
                "dataPubblicazione",
                "Data Pubblicazione",
                FieldKind::Date,
                |c| format_date(c.published_on),
                |c, v| c.published_on = parse_date(v),
            )
            .required(),
            FormField::<Self>::new(
                "categoriaFumetto",
                "Categoria",
                FieldKind::Select(ComicCategory::options),
                |c| c.category.code().to_string(),
                |c, v| {
                    if let Some(category) = ComicCategory::from_code(v) {
                        c.category = category;
                    }
                },
            ),
            FormField::<Self>::new(
                "disponibilePerAsta",
                "Disponibile per Asta",
                FieldKind::Toggle,
                |c| format_flag(c.auctionable),
                |c, v| c.auctionable = parse_flag(v),
            ),
        ]
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comic_decodes_backend_payload() {
        let json = r#"{
            "fumettoId": 1,
            "titolo": "Spider-Man #1",
            "autore": "Stan Lee",
            "editore": "Marvel Comics",
            "descrizione": "The amazing Spider-Man first issue",
            "dataPubblicazione": "1963-03-01",
            "disponibilePerAsta": true,
            "categoriaFumetto": "SUPEREROI"
        }"#;
        let comic: Comic = serde_json::from_str(json).unwrap();
        assert_eq!(comic.id(), Some(1));
        assert_eq!(comic.category, ComicCategory::Superheroes);
        assert_eq!(comic.published_on, NaiveDate::from_ymd_opt(1963, 3, 1));
        assert!(comic.auctionable);
    }

    #[test]
    fn test_unknown_category_is_a_decode_error() {
        let json = r#"{"fumettoId": 1, "titolo": "X", "categoriaFumetto": "WESTERN"}"#;
        assert!(serde_json::from_str::<Comic>(json).is_err());
    }

    #[test]
    fn test_form_fields_edit_draft() {
        let mut comic = Comic::draft();
        for field in Comic::form_fields() {
            match field.name {
                "titolo" => (field.write)(&mut comic, "Watchmen"),
                "categoriaFumetto" => (field.write)(&mut comic, "AZIONE"),
                "disponibilePerAsta" => (field.write)(&mut comic, "true"),
                "dataPubblicazione" => (field.write)(&mut comic, "1986-09-01"),
                _ => {}
            }
        }
        assert_eq!(comic.title, "Watchmen");
        assert_eq!(comic.category, ComicCategory::Action);
        assert!(comic.auctionable);
        assert_eq!(format_date(comic.published_on), "1986-09-01");
    }

    #[test]
    fn test_select_ignores_unknown_code() {
        let mut comic = Comic::draft();
        let field = Comic::form_fields().into_iter().find(|f| f.name == "categoriaFumetto").unwrap();
        (field.write)(&mut comic, "NOPE");
        assert_eq!(comic.category, ComicCategory::Fantasy);
    }
}
