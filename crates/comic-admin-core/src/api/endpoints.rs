//! Per-entity path families
//!
//! The backend is not uniform: newer controllers use `get-all` / `create`,
//! older ones carry the entity name in every path.

use crate::domain::{EntityId, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

impl Endpoints {
    pub fn update_path(&self, id: EntityId) -> String {
        format!("{}/{}", self.update, id)
    }

    pub fn delete_path(&self, id: EntityId) -> String {
        format!("{}/{}", self.delete, id)
    }
}

const fn family(
    list: &'static str,
    create: &'static str,
    update: &'static str,
    delete: &'static str,
) -> Endpoints {
    Endpoints { list, create, update, delete }
}

impl EntityKind {
    pub fn endpoints(self) -> Endpoints {
        match self {
            EntityKind::Subscriptions => family(
                "/abbonamenti/get-all",
                "/abbonamenti/create",
                "/abbonamenti/update",
                "/abbonamenti/delete",
            ),
            EntityKind::Auctions => {
                family("/aste/get-all", "/aste/create", "/aste/update", "/aste/delete")
            }
            EntityKind::Copies => family(
                "/copieFumetto/get-all",
                "/copieFumetto/create",
                "/copieFumetto/update",
                "/copieFumetto/delete",
            ),
            EntityKind::OrderDetails => family(
                "/dettagliOrdini/get-all",
                "/dettagliOrdini/create",
                "/dettagliOrdini/update",
                "/dettagliOrdini/delete",
            ),
            EntityKind::Comics => family(
                "/fumetti/get-fumetti",
                "/fumetti/create-fumetto",
                "/fumetti/update-fumetto",
                "/fumetti/delete-fumetto",
            ),
            EntityKind::Orders => family(
                "/ordini/get-ordini",
                "/ordini/create-ordine",
                "/ordini/update-ordine",
                "/ordini/delete-ordine",
            ),
            EntityKind::Users => family(
                "/utenti/get-utenti",
                "/utenti/create-utente",
                "/utenti/update-utente",
                "/utenti/delete-utente",
            ),
            EntityKind::Wishlists => family(
                "/wishlists/get-wishlists",
                "/wishlists/create-wishlist",
                "/wishlists/update-wishlist",
                "/wishlists/delete-wishlist",
            ),
        }
    }
}
