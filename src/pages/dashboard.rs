//! Dashboard Page
//!
//! Platform totals and a recent-activity feed, both derived from the store.

use chrono::NaiveDate;
use community_admin_core::models::{total_donated, Donor, Event, Member};
use leptos::prelude::*;

use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

const RECENT_ACTIVITY_LIMIT: usize = 5;

/// One line in the activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub icon: &'static str,
    pub description: String,
    pub date: NaiveDate,
}

/// Newest member joins, donations and events, most recent first
pub fn recent_activity<'a>(
    members: impl IntoIterator<Item = &'a Member>,
    donors: impl IntoIterator<Item = &'a Donor>,
    events: impl IntoIterator<Item = &'a Event>,
    limit: usize,
) -> Vec<Activity> {
    let joins = members.into_iter().map(|m| Activity {
        icon: "👤",
        description: format!("{} joined {}", m.name, m.organization),
        date: m.join_date,
    });
    let gifts = donors.into_iter().map(|d| Activity {
        icon: "💰",
        description: format!(
            "Received {} from {}",
            format::currency(u64::from(d.amount)),
            d.name
        ),
        date: d.date,
    });
    let events = events.into_iter().map(|e| Activity {
        icon: "📅",
        description: format!("{} at {}", e.title, e.location),
        date: e.date,
    });

    let mut feed: Vec<Activity> = joins.chain(gifts).chain(events).collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <strong class="stat-value">{move || value.get()}</strong>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    let organizations = Signal::derive(move || store.organizations().with(|o| o.len()).to_string());
    let members = Signal::derive(move || store.members().with(|m| m.len()).to_string());
    let active_events = Signal::derive(move || {
        store
            .events()
            .with(|e| e.iter().filter(|e| e.status.is_active()).count())
            .to_string()
    });
    let donations = Signal::derive(move || {
        store
            .donors()
            .with(|d| format::currency(total_donated(d.iter())))
    });
    let sponsorships = Signal::derive(move || {
        store
            .packages()
            .with(|p| p.iter().filter(|p| !p.is_delivered()).count())
            .to_string()
    });
    let volunteers = Signal::derive(move || store.volunteers().with(|v| v.len()).to_string());

    let activity = move || {
        store.members().with(|members| {
            store.donors().with(|donors| {
                store.events().with(|events| {
                    recent_activity(
                        members.iter(),
                        donors.iter(),
                        events.iter(),
                        RECENT_ACTIVITY_LIMIT,
                    )
                })
            })
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-subtitle">"Platform overview"</p>
            </div>
            <div class="stat-grid">
                <StatCard label="Total Organizations" value=organizations />
                <StatCard label="Total Members" value=members />
                <StatCard label="Active Events" value=active_events />
                <StatCard label="Donations Received" value=donations />
                <StatCard label="Active Sponsorships" value=sponsorships />
                <StatCard label="Volunteers" value=volunteers />
            </div>
            <div class="card">
                <div class="card-header">
                    <h3>"Recent Activity"</h3>
                </div>
                <ul class="activity-list">
                    {move || {
                        activity()
                            .into_iter()
                            .map(|item| view! {
                                <li class="activity-item">
                                    <span class="activity-icon">{item.icon}</span>
                                    <span>{item.description}</span>
                                    <span class="cell-muted">{format::date(item.date)}</span>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use community_admin_core::models::{DonorType, EventStatus, MemberStatus};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn member(id: u32, join: u32) -> Member {
        Member {
            id,
            name: format!("Member {}", id),
            email: format!("m{}@example.org", id),
            organization: "Tech for Good".to_string(),
            role: "Volunteer".to_string(),
            status: MemberStatus::Active,
            join_date: day(join),
        }
    }

    fn donor(id: u32, on: u32) -> Donor {
        Donor {
            id,
            name: format!("Donor {}", id),
            amount: 5000,
            invoice_ref: format!("INV-{}", id),
            date: day(on),
            donor_type: DonorType::Individual,
        }
    }

    fn event(id: u32, on: u32) -> Event {
        Event {
            id,
            title: "Cleanup Drive".to_string(),
            date: day(on),
            location: "Central Park".to_string(),
            organization: "Green Earth Initiative".to_string(),
            attendees: 40,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn test_recent_activity_is_newest_first_and_limited() {
        let members = vec![member(1, 2), member(2, 9)];
        let donors = vec![donor(1, 5)];
        let events = vec![event(1, 7)];

        let feed = recent_activity(&members, &donors, &events, 3);
        let dates: Vec<NaiveDate> = feed.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![day(9), day(7), day(5)]);
        assert_eq!(feed[0].description, "Member 2 joined Tech for Good");
        assert_eq!(feed[1].description, "Cleanup Drive at Central Park");
        assert_eq!(feed[2].description, "Received $5,000 from Donor 1");
    }

    #[test]
    fn test_recent_activity_empty_sources() {
        assert!(recent_activity(&[], &[], &[], RECENT_ACTIVITY_LIMIT).is_empty());
    }
}
