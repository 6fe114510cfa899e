//! Domain models for Stockroom.
//!
//! # Core Concepts
//!
//! - [`Item`]: A single inventory entry, identified solely by its raw label.
//!   Duplicates are allowed and indistinguishable.
//! - [`Variant`]: Which flavour of the demo is served. The decorated variant
//!   attaches an emoji marker to every item; markers are display-only.
//! - [`Notice`]: The user-facing outcome of an interaction. Nothing a user does
//!   is an error at the HTTP level; outcomes are reported as notices.
//! - [`InventoryView`]: Everything the page shows for one session, rebuilt from
//!   scratch after every interaction.

mod item;
mod notice;
mod view;

pub use item::*;
pub use notice::*;
pub use view::*;
