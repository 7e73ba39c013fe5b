//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Collections are
//! replaced wholesale: every mutation builds a new `IndexedCollection`.

use community_admin_core::models::{
    Chapter, Collaboration, Donor, Event, Member, Organization, Package, RequestStatus,
    Volunteer,
};
use community_admin_core::{DataProvider, Entity, HierarchyTree, IndexedCollection, Result};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, error};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Organizational hierarchy (None when the provider failed)
    pub hierarchy: Option<HierarchyTree>,
    pub donors: IndexedCollection<Donor>,
    pub chapters: IndexedCollection<Chapter>,
    pub collaborations: IndexedCollection<Collaboration>,
    pub volunteers: IndexedCollection<Volunteer>,
    pub packages: IndexedCollection<Package>,
    pub organizations: IndexedCollection<Organization>,
    pub members: IndexedCollection<Member>,
    pub events: IndexedCollection<Event>,
}

impl AppState {
    /// Load every collection from a provider. A failing source is logged
    /// and left empty so the other pages still render.
    pub fn load(provider: &impl DataProvider) -> Self {
        let hierarchy = match provider.hierarchy().and_then(HierarchyTree::new) {
            Ok(tree) => {
                debug!(nodes = tree.len(), "hierarchy loaded");
                Some(tree)
            }
            Err(err) => {
                error!(%err, "failed to load hierarchy");
                None
            }
        };

        Self {
            hierarchy,
            donors: load_collection("donors", provider.donors()),
            chapters: load_collection("chapters", provider.chapters()),
            collaborations: load_collection("collaborations", provider.collaborations()),
            volunteers: load_collection("volunteers", provider.volunteers()),
            packages: load_collection("packages", provider.packages()),
            organizations: load_collection("organizations", provider.organizations()),
            members: load_collection("members", provider.members()),
            events: load_collection("events", provider.events()),
        }
    }
}

fn load_collection<T: Entity>(name: &'static str, records: Result<Vec<T>>) -> IndexedCollection<T> {
    match records.and_then(|records| IndexedCollection::from_records(records)) {
        Ok(collection) => {
            debug!(collection = name, count = collection.len(), "collection loaded");
            collection
        }
        Err(err) => {
            error!(collection = name, %err, "failed to load collection");
            IndexedCollection::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark a chapter's connection request as sent. Already-requested chapters
/// are left untouched.
pub fn store_send_chapter_request(store: &AppStore, chapter_id: u32) -> Result<()> {
    let chapters = store.chapters().get_untracked();
    let next = chapters.update(&chapter_id, |chapter| {
        if chapter.can_send_request() {
            chapter.request_status = Some(RequestStatus::Sent);
        }
    })?;
    *store.chapters().write() = next;
    Ok(())
}

/// Remove a donation record by ID
pub fn store_remove_donor(store: &AppStore, donor_id: u32) -> Result<()> {
    let next = store.donors().get_untracked().remove(&donor_id)?;
    *store.donors().write() = next;
    Ok(())
}

/// Fields captured by the add-volunteer form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolunteer {
    pub name: String,
    pub slot: String,
    pub contact: String,
}

/// Append a volunteer with the next free ID
pub fn store_add_volunteer(store: &AppStore, new: NewVolunteer) -> Result<Volunteer> {
    let volunteers = store.volunteers().get_untracked();
    let id = volunteers.iter().map(|v| v.id).max().unwrap_or(0) + 1;
    let volunteer = Volunteer {
        id,
        name: new.name,
        slot: new.slot,
        contact: new.contact,
    };
    let next = volunteers.insert(volunteer.clone())?;
    *store.volunteers().write() = next;
    Ok(volunteer)
}
