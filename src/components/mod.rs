//! UI Components for Folio.
//!
//! One component per page section.

mod contact_form;
mod footer;
mod hero;
mod mobile_nav;
mod nav_header;
mod project_grid;
mod project_modal;

pub use contact_form::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use mobile_nav::MobileMenu;
pub use nav_header::NavHeader;
pub use project_grid::ProjectGrid;
pub use project_modal::ProjectModal;
