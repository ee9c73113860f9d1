//! Concrete resource families of the Relay API.
//!
//! Every family here is a mechanical instantiation of the generic navigation
//! core in [`crate::rest`]: a typed record struct, its capability trait
//! impls naming the URL templates and supported verbs, parameter structs,
//! and aliases for the list/context/page/instance shapes. No navigation
//! logic lives here.
//!
//! Families are grouped by API host:
//!
//! - [`account`] — account-scoped resources on the stable host (`v1`)
//! - [`proxy`] — the messaging-proxy hierarchy on the preview host

pub mod account;
pub mod proxy;
