//! `lb-agent`: Structure-of-Arrays ladybug storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`store`]     | `LadybugStore` (SoA arrays: position, direction, active)     |
//! | [`builder`]   | `LadybugStoreBuilder` (fluent construction, from spawns)     |
//! | [`actions`]   | Primitive actions and front-cell queries on `LadybugStore`   |
//!
//! Behavior trees are kept outside the store (by the simulation driver) so a
//! tree can be ticked while holding `&mut LadybugStore` and `&mut Grid`.

pub mod actions;
pub mod builder;
pub mod store;


pub use builder::LadybugStoreBuilder;
pub use store::LadybugStore;
