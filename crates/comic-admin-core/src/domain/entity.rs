//! Domain Layer - Core Resource Trait
//!
//! Every backend entity the admin UI manages implements `Resource`. The trait
//! carries what the generic manager needs: where the entity lives on the
//! backend, how an empty draft looks, and how to show and edit it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use super::schema::{Column, FormField};

/// Backend identifiers are Java `Long`s
pub type EntityId = i64;

/// Core trait for all managed entities
pub trait Resource:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Which backend entity family this is
    const KIND: EntityKind;

    /// Backend id; `None` for drafts that were never saved
    fn id(&self) -> Option<EntityId>;

    /// Type-specific defaults for the "new" form
    fn draft() -> Self;

    /// Table columns, in display order
    fn columns() -> Vec<Column<Self>>;

    /// Form inputs, in display order
    fn form_fields() -> Vec<FormField<Self>>;

    /// Short human name used in notifications
    fn display_name(&self) -> String {
        match self.id() {
            Some(id) => format!("#{}", id),
            None => Self::KIND.labels().singular.to_string(),
        }
    }
}

/// The eight entity families exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Users,
    Comics,
    Copies,
    Auctions,
    Orders,
    OrderDetails,
    Wishlists,
    Subscriptions,
}

/// UI strings for one entity family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLabels {
    pub tab: &'static str,
    pub singular: &'static str,
    pub title: &'static str,
    pub new_action: &'static str,
    pub edit_action: &'static str,
    pub load_error: &'static str,
    pub save_error: &'static str,
    pub delete_error: &'static str,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Users,
        EntityKind::Comics,
        EntityKind::Copies,
        EntityKind::Auctions,
        EntityKind::Orders,
        EntityKind::OrderDetails,
        EntityKind::Wishlists,
        EntityKind::Subscriptions,
    ];

    pub fn labels(self) -> EntityLabels {
        match self {
            EntityKind::Users => EntityLabels {
                tab: "Utenti",
                singular: "Utente",
                title: "Gestione Utenti",
                new_action: "Nuovo Utente",
                edit_action: "Modifica Utente",
                load_error: "Errore nel caricamento degli utenti",
                save_error: "Errore nel salvare l'utente",
                delete_error: "Errore nell'eliminare l'utente",
            },
            EntityKind::Comics => EntityLabels {
                tab: "Fumetti",
                singular: "Fumetto",
                title: "Gestione Fumetti",
                new_action: "Nuovo Fumetto",
                edit_action: "Modifica Fumetto",
                load_error: "Errore nel caricamento dei fumetti",
                save_error: "Errore nel salvare il fumetto",
                delete_error: "Errore nell'eliminare il fumetto",
            },
            EntityKind::Copies => EntityLabels {
                tab: "Copie Fumetti",
                singular: "Copia",
                title: "Gestione Copie Fumetti",
                new_action: "Nuova Copia",
                edit_action: "Modifica Copia",
                load_error: "Errore nel caricamento delle copie fumetto",
                save_error: "Errore nel salvare la copia fumetto",
                delete_error: "Errore nell'eliminare la copia fumetto",
            },
            EntityKind::Auctions => EntityLabels {
                tab: "Aste",
                singular: "Asta",
                title: "Gestione Aste",
                new_action: "Nuova Asta",
                edit_action: "Modifica Asta",
                load_error: "Errore nel caricamento delle aste",
                save_error: "Errore nel salvare l'asta",
                delete_error: "Errore nell'eliminare l'asta",
            },
            EntityKind::Orders => EntityLabels {
                tab: "Ordini",
                singular: "Ordine",
                title: "Gestione Ordini",
                new_action: "Nuovo Ordine",
                edit_action: "Modifica Ordine",
                load_error: "Errore nel caricamento degli ordini",
                save_error: "Errore nel salvare l'ordine",
                delete_error: "Errore nell'eliminare l'ordine",
            },
            EntityKind::OrderDetails => EntityLabels {
                tab: "Dettagli Ordine",
                singular: "Dettaglio",
                title: "Gestione Dettagli Ordine",
                new_action: "Nuovo Dettaglio",
                edit_action: "Modifica Dettaglio",
                load_error: "Errore nel caricamento dei dettagli ordine",
                save_error: "Errore nel salvare il dettaglio ordine",
                delete_error: "Errore nell'eliminare il dettaglio ordine",
            },
            EntityKind::Wishlists => EntityLabels {
                tab: "Wishlist",
                singular: "Wishlist",
                title: "Gestione Wishlist",
                new_action: "Nuova Wishlist",
                edit_action: "Modifica Wishlist",
                load_error: "Errore nel caricamento delle wishlist",
                save_error: "Errore nel salvare la wishlist",
                delete_error: "Errore nell'eliminare la wishlist",
            },
            EntityKind::Subscriptions => EntityLabels {
                tab: "Abbonamenti",
                singular: "Abbonamento",
                title: "Gestione Abbonamenti",
                new_action: "Nuovo Abbonamento",
                edit_action: "Modifica Abbonamento",
                load_error: "Errore nel caricamento degli abbonamenti",
                save_error: "Errore nel salvare l'abbonamento",
                delete_error: "Errore nell'eliminare l'abbonamento",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_distinct_tab() {
        let tabs: HashSet<_> = EntityKind::ALL.iter().map(|k| k.labels().tab).collect();
        assert_eq!(tabs.len(), EntityKind::ALL.len());
    }
}
