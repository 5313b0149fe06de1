//! Domain Layer
//!
//! Backend-owned records mirrored one-to-one from the store's JSON, plus the
//! table/form schema each of them exposes to the generic manager.

#[macro_use]
mod choice;
mod entity;
pub mod schema;
mod user;
mod comic;
mod copy;
mod auction;
mod order;
mod order_detail;
mod wishlist;
mod subscription;

pub use entity::{EntityId, EntityKind, EntityLabels, Resource};
pub use user::{User, UserRole};
pub use comic::{Comic, ComicCategory};
pub use copy::{ComicCopy, CopyCondition};
pub use auction::{Auction, AuctionStatus};
pub use order::{Order, OrderStatus};
pub use order_detail::OrderDetail;
pub use wishlist::Wishlist;
pub use subscription::{PlanDetails, Subscription, SubscriptionPlan};
