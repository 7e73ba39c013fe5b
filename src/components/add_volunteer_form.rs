//! Add Volunteer Form Component
//!
//! Form for registering a volunteer with a slot selector.

use leptos::prelude::*;

use crate::store::NewVolunteer;

/// Slot options
pub const VOLUNTEER_SLOTS: &[&str] = &[
    "Morning (8 AM - 12 PM)",
    "Afternoon (12 PM - 4 PM)",
    "Evening (4 PM - 8 PM)",
    "Full Day",
];

/// Trim the raw inputs, returning a message for the first missing field
pub fn validate_volunteer(
    name: &str,
    slot: &str,
    contact: &str,
) -> Result<NewVolunteer, &'static str> {
    let name = name.trim();
    let contact = contact.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if contact.is_empty() {
        return Err("Contact number is required");
    }
    if !VOLUNTEER_SLOTS.contains(&slot) {
        return Err("Pick a slot");
    }
    Ok(NewVolunteer {
        name: name.to_string(),
        slot: slot.to_string(),
        contact: contact.to_string(),
    })
}

#[component]
pub fn AddVolunteerForm(
    on_submit: Callback<NewVolunteer>,
    /// True while a submission is in flight
    submitting: Signal<bool>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (slot, set_slot) = signal(VOLUNTEER_SLOTS[0].to_string());
    let (problem, set_problem) = signal::<Option<&'static str>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_volunteer(&name.get(), &slot.get(), &contact.get()) {
            Ok(volunteer) => {
                set_problem.set(None);
                on_submit.run(volunteer);
                set_name.set(String::new());
                set_contact.set(String::new());
            }
            Err(message) => set_problem.set(Some(message)),
        }
    };

    view! {
        <form class="card add-volunteer-form" on:submit=submit>
            <h3>"Add Volunteer"</h3>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="Contact number"
                    prop:value=move || contact.get()
                    on:input=move |ev| set_contact.set(event_target_value(&ev))
                />
            </div>

            <div class="slot-selector-row">
                {VOLUNTEER_SLOTS.iter().map(|label| {
                    let value = label.to_string();
                    let is_selected = move || slot.get() == *label;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() {
                                    "slot-btn small active"
                                } else {
                                    "slot-btn small"
                                }
                            }
                            on:click=move |_| set_slot.set(value.clone())
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || problem.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                {move || if submitting.get() { "Adding..." } else { "Add Volunteer" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_volunteer_trims_input() {
        let v = validate_volunteer("  Asha Iyer ", "Full Day", " +91 90000 10099").unwrap();
        assert_eq!(v.name, "Asha Iyer");
        assert_eq!(v.contact, "+91 90000 10099");
        assert_eq!(v.slot, "Full Day");
    }

    #[test]
    fn test_validate_volunteer_rejects_missing_fields() {
        assert_eq!(validate_volunteer(" ", "Full Day", "123"), Err("Name is required"));
        assert_eq!(validate_volunteer("Asha", "Full Day", ""), Err("Contact number is required"));
        assert_eq!(validate_volunteer("Asha", "Midnight", "123"), Err("Pick a slot"));
    }
}
