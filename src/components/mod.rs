//! UI Components
//!
//! Reusable Leptos components.

mod add_volunteer_form;
mod chapters_table;
mod collaborations_table;
mod delete_confirm_button;
mod donor_table;
mod hierarchy_tree;
mod list_controls;
mod members_table;
mod organizations_table;
mod packages_table;
mod pagination_bar;
mod search_input;
mod sidebar;
mod sort_header;
mod toast;
mod tree_node_row;
mod volunteer_list_table;

pub use add_volunteer_form::AddVolunteerForm;
pub use chapters_table::ChaptersTable;
pub use collaborations_table::CollaborationsTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use donor_table::DonorTable;
pub use hierarchy_tree::HierarchyTreeView;
pub use list_controls::{sync_source, use_list_view, ListControls, ListUnavailable};
pub use members_table::MembersTable;
pub use organizations_table::OrganizationsTable;
pub use packages_table::PackagesTable;
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use sidebar::Sidebar;
pub use sort_header::SortHeader;
pub use toast::ToastStack;
pub use tree_node_row::{TreeNodeRow, TreeRow};
pub use volunteer_list_table::VolunteerListTable;
