//! Data Providers
//!
//! Pages receive their records through a [`DataProvider`] rather than
//! reading constants directly, so a real backend can replace the bundled
//! sample data without touching the views.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::hierarchy::HierarchyNode;
use crate::models::{
    Chapter, Collaboration, Donor, Event, Member, Organization, Package, Volunteer,
};

/// Source of every collection the dashboard displays
pub trait DataProvider {
    fn hierarchy(&self) -> Result<HierarchyNode>;
    fn donors(&self) -> Result<Vec<Donor>>;
    fn chapters(&self) -> Result<Vec<Chapter>>;
    fn collaborations(&self) -> Result<Vec<Collaboration>>;
    fn volunteers(&self) -> Result<Vec<Volunteer>>;
    fn packages(&self) -> Result<Vec<Package>>;
    fn organizations(&self) -> Result<Vec<Organization>>;
    fn members(&self) -> Result<Vec<Member>>;
    fn events(&self) -> Result<Vec<Event>>;
}

const HIERARCHY_JSON: &str = include_str!("../data/hierarchy.json");
const DONORS_JSON: &str = include_str!("../data/donors.json");
const CHAPTERS_JSON: &str = include_str!("../data/chapters.json");
const COLLABORATIONS_JSON: &str = include_str!("../data/collaborations.json");
const VOLUNTEERS_JSON: &str = include_str!("../data/volunteers.json");
const PACKAGES_JSON: &str = include_str!("../data/packages.json");
const ORGANIZATIONS_JSON: &str = include_str!("../data/organizations.json");
const MEMBERS_JSON: &str = include_str!("../data/members.json");
const EVENTS_JSON: &str = include_str!("../data/events.json");

/// Decode a JSON array of records
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json)?;
    debug!(count = records.len(), "records decoded");
    Ok(records)
}

/// Sample data bundled with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl DataProvider for SampleData {
    fn hierarchy(&self) -> Result<HierarchyNode> {
        Ok(serde_json::from_str(HIERARCHY_JSON)?)
    }

    fn donors(&self) -> Result<Vec<Donor>> {
        parse_records(DONORS_JSON)
    }

    fn chapters(&self) -> Result<Vec<Chapter>> {
        parse_records(CHAPTERS_JSON)
    }

    fn collaborations(&self) -> Result<Vec<Collaboration>> {
        parse_records(COLLABORATIONS_JSON)
    }

    fn volunteers(&self) -> Result<Vec<Volunteer>> {
        parse_records(VOLUNTEERS_JSON)
    }

    fn packages(&self) -> Result<Vec<Package>> {
        parse_records(PACKAGES_JSON)
    }

    fn organizations(&self) -> Result<Vec<Organization>> {
        parse_records(ORGANIZATIONS_JSON)
    }

    fn members(&self) -> Result<Vec<Member>> {
        parse_records(MEMBERS_JSON)
    }

    fn events(&self) -> Result<Vec<Event>> {
        parse_records(EVENTS_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::IndexedCollection;
    use crate::hierarchy::{ExpandState, HierarchyTree, NodeKind, DEFAULT_EXPAND_DEPTH};
    use crate::list_view::ListView;

    #[test]
    fn test_sample_hierarchy_default_expansion() {
        let tree = HierarchyTree::new(SampleData.hierarchy().unwrap()).unwrap();
        let state = ExpandState::with_default_depth(&tree, DEFAULT_EXPAND_DEPTH);

        for node in tree.nodes().filter(|n| n.has_children()) {
            let expected = matches!(node.kind, NodeKind::Country | NodeKind::State);
            assert_eq!(state.is_expanded(&node.id), expected, "node {}", node.id);
        }
        assert_eq!(tree.chapter_count(), 7);
        assert_eq!(tree.total_members(), 877);
    }

    #[test]
    fn test_sample_collections_have_unique_ids() {
        let data = SampleData;
        assert!(IndexedCollection::from_records(data.donors().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.chapters().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.collaborations().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.volunteers().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.packages().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.organizations().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.members().unwrap()).is_ok());
        assert!(IndexedCollection::from_records(data.events().unwrap()).is_ok());
    }

    #[test]
    fn test_sample_collections_fit_their_list_configs() {
        let data = SampleData;
        let size = 10;
        assert!(ListView::new(data.donors().unwrap(), Donor::list_config(size)).is_ok());
        assert!(ListView::new(data.chapters().unwrap(), Chapter::list_config(size)).is_ok());
        let collaborations = data.collaborations().unwrap();
        assert!(ListView::new(collaborations, Collaboration::list_config(size)).is_ok());
        assert!(ListView::new(data.volunteers().unwrap(), Volunteer::list_config(size)).is_ok());
        assert!(ListView::new(data.packages().unwrap(), Package::list_config(size)).is_ok());
        let organizations = data.organizations().unwrap();
        assert!(ListView::new(organizations, Organization::list_config(size)).is_ok());

        let members = ListView::new(data.members().unwrap(), Member::list_config(size)).unwrap();
        assert_eq!(members.total_len(), 12);
        assert_eq!(members.page_count(), 2);
    }

    #[test]
    fn test_parse_records_error() {
        assert!(parse_records::<Donor>("[{\"id\": 1}]").is_err());
    }
}
