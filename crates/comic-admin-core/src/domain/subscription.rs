//! Subscription Entity
//!
//! A billing plan. Price, duration and discount are fixed per plan.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Resource};
use super::schema::{format_euro, id_cell, Cell, Column, FieldKind, FormField, Tone};

choice_enum! {
    SubscriptionPlan {
        Monthly => "MENSILE", "Mensile",
        Quarterly => "TRIMESTRALE", "Trimestrale",
        HalfYearly => "SEMESTRALE", "Semestrale",
        Yearly => "ANNUALE", "Annuale",
    }
}

/// Commercial terms of a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanDetails {
    pub price: f64,
    pub duration_days: u32,
    pub discount_percent: u32,
}

impl SubscriptionPlan {
    pub fn details(self) -> PlanDetails {
        let (price, duration_days, discount_percent) = match self {
            SubscriptionPlan::Monthly => (10.0, 30, 0),
            SubscriptionPlan::Quarterly => (30.0, 90, 10),
            SubscriptionPlan::HalfYearly => (60.0, 180, 15),
            SubscriptionPlan::Yearly => (120.0, 365, 20),
        };
        PlanDetails { price, duration_days, discount_percent }
    }

    pub fn tone(self) -> Tone {
        match self {
            SubscriptionPlan::Monthly => Tone::Blue,
            SubscriptionPlan::Quarterly => Tone::Green,
            SubscriptionPlan::HalfYearly => Tone::Orange,
            SubscriptionPlan::Yearly => Tone::Purple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "abbonamentoId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "pianoAbbonamento")]
    pub plan: SubscriptionPlan,
}

impl Resource for Subscription {
    const KIND: EntityKind = EntityKind::Subscriptions;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn draft() -> Self {
        Self { id: None, plan: SubscriptionPlan::Monthly }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::<Self>::new("ID", |s| id_cell(s.id)),
            Column::<Self>::new("Piano", |s| Cell::badge(s.plan.code(), s.plan.tone())),
            Column::<Self>::new("Prezzo", |s| Cell::Strong(format_euro(s.plan.details().price))),
            Column::<Self>::new("Durata", |s| {
                Cell::text(format!("{} giorni", s.plan.details().duration_days))
            }),
            Column::<Self>::new("Sconto", |s| {
                let discount = s.plan.details().discount_percent;
                let tone = if discount == 0 { Tone::Gray } else { Tone::Green };
                Cell::badge(format!("{}%", discount), tone)
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<Self>> {
        vec![FormField::<Self>::new(
            "pianoAbbonamento",
            "Piano Abbonamento",
            FieldKind::Select(SubscriptionPlan::options),
            |s| s.plan.code().to_string(),
            |s, v| {
                if let Some(plan) = SubscriptionPlan::from_code(v) {
                    s.plan = plan;
                }
            },
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_details() {
        let yearly = SubscriptionPlan::Yearly.details();
        assert_eq!(yearly.price, 120.0);
        assert_eq!(yearly.duration_days, 365);
        assert_eq!(yearly.discount_percent, 20);
    }

    #[test]
    fn test_discount_column() {
        let sub = Subscription { id: Some(1), plan: SubscriptionPlan::Monthly };
        let sconto = Subscription::columns().into_iter().find(|c| c.header == "Sconto").unwrap();
        assert_eq!((sconto.render)(&sub), Cell::badge("0%", Tone::Gray));
    }

    #[test]
    fn test_plan_codes_round_trip() {
        for plan in SubscriptionPlan::ALL {
            assert_eq!(SubscriptionPlan::from_code(plan.code()), Some(*plan));
        }
    }
}
