//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, forms, and chrome for the library views. They
//! read `Session` from context for identity. Pages own every data request
//! and hand results down as props; the header's logout is the one call a
//! component makes itself.

pub mod book_card;
pub mod book_form;
pub mod borrowing_card;
pub mod header;
pub mod invitation_card;
pub mod modal;
pub mod nav_bar;
pub mod pagination;
pub mod protected_route;
pub mod retry_panel;
pub mod toast;
