//! Core domain entities representing the CMS data model.
//!
//! Every persisted entity carries the same audit metadata ([`Audit`]) and
//! implements [`BaseEntity`], which is what the storage mapping layer
//! (see [`crate::mapping`]) keys its uniform constraints on.
//!
//! # Entity Types
//!
//! - [`AppUser`] - A back-office user that can sign in and edit content
//! - [`Category`] - A product category
//! - [`Page`] - A static content page addressed by slug
//! - [`Product`] - A catalogue item belonging to a category
//!
//! # Design Pattern
//!
//! Each entity has companion structs:
//! - `NewX` - For creating new records
//! - `XPatch` - For partial updates (`None` leaves a field unchanged)

pub mod app_user;
pub mod audit;
pub mod category;
pub mod page;
pub mod product;

pub use app_user::{AppUser, AppUserPatch, NewAppUser};
pub use audit::{Audit, BaseEntity, Status};
pub use category::{Category, CategoryPatch, NewCategory};
pub use page::{NewPage, Page, PagePatch};
pub use product::{NewProduct, Product, ProductPatch};
