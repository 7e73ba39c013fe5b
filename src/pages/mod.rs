//! Pages
//!
//! One component per sidebar destination.

mod dashboard;
mod donations;
mod events;
mod members;
mod organizations;
mod placeholder;
mod relationships;
mod sponsorships;
mod volunteering;

pub use dashboard::DashboardPage;
pub use donations::DonationsPage;
pub use events::EventsPage;
pub use members::MembersPage;
pub use organizations::OrganizationsPage;
pub use placeholder::ComingSoonPage;
pub use relationships::RelationshipsPage;
pub use sponsorships::SponsorshipsPage;
pub use volunteering::VolunteeringPage;
