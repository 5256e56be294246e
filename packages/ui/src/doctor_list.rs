//! The doctor directory shared by the admin and patient dashboards.

use api::{Doctor, DoctorFilter, HttpClient, Patient};
use dioxus::prelude::*;

use crate::controllers::admin::{filter_doctors, load_doctors, DoctorListView};
use crate::{use_api, use_config, BrowserDialogs, DoctorCard, RequestSequence, RequestTicket};

/// Doctor list state with request sequencing. Every reload or filter
/// supersedes the previous one.
#[derive(Clone)]
pub struct DoctorDirectory {
    pub view: Signal<DoctorListView>,
    api: HttpClient,
    sequence: RequestSequence,
}

/// Create the directory and load every doctor once.
pub fn use_doctor_directory() -> DoctorDirectory {
    let api = use_api();
    let view = use_signal(|| DoctorListView::Loading);
    let sequence = use_hook(RequestSequence::new);
    let directory = DoctorDirectory {
        view,
        api,
        sequence,
    };

    let initial = directory.clone();
    use_hook(move || initial.reload());

    directory
}

impl DoctorDirectory {
    pub fn reload(&self) {
        let ticket = self.sequence.begin();
        let api = self.api.clone();
        let view = self.view;
        spawn(async move {
            let next = load_doctors(&api).await;
            apply(ticket, view, next);
        });
    }

    pub fn filter(&self, filter: DoctorFilter) {
        let ticket = self.sequence.begin();
        let api = self.api.clone();
        let view = self.view;
        spawn(async move {
            if let Some(next) = filter_doctors(&api, &filter, &BrowserDialogs).await {
                apply(ticket, view, next);
            }
        });
    }

    pub fn remove(&self, id: i64) {
        let mut view = self.view;
        view.write().remove(id);
    }
}

fn apply(ticket: RequestTicket, mut view: Signal<DoctorListView>, next: DoctorListView) {
    if ticket.is_current() {
        view.set(next);
    } else {
        tracing::debug!("Dropping stale doctor list response");
    }
}

#[component]
pub fn DoctorList(
    view: DoctorListView,
    on_deleted: EventHandler<i64>,
    on_book: EventHandler<(Doctor, Patient)>,
) -> Element {
    rsx! {
        div {
            id: "content",
            class: "doctor-list",
            {match view {
                DoctorListView::Loading => rsx! {
                    p { "Loading doctors..." }
                },
                DoctorListView::Empty(message) => rsx! {
                    p { class: "noPatientRecord", "{message}" }
                },
                DoctorListView::Cards(doctors) => rsx! {
                    for doctor in doctors {
                        DoctorCard {
                            key: "{doctor.id.unwrap_or_default()}-{doctor.email}",
                            doctor: doctor.clone(),
                            on_deleted,
                            on_book,
                        }
                    }
                },
            }}
        }
    }
}

/// Search box plus time and specialty selects. Any change reports the full
/// filter.
#[component]
pub fn DoctorFilters(on_change: EventHandler<DoctorFilter>) -> Element {
    let config = use_config();
    let mut name = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut specialty = use_signal(String::new);

    let emit = move || on_change.call(DoctorFilter::new(&name(), &time(), &specialty()));

    rsx! {
        div {
            class: "searchBar-container",
            input {
                id: "searchBar",
                class: "searchBar",
                r#type: "text",
                placeholder: "Search By Doctor Name",
                value: name(),
                oninput: move |evt: FormEvent| {
                    name.set(evt.value());
                    emit();
                },
            }
            select {
                id: "filterTime",
                class: "filter-select",
                value: time(),
                onchange: move |evt: FormEvent| {
                    time.set(evt.value());
                    emit();
                },
                option { value: "", "Sort by Time" }
                option { value: "AM", "AM" }
                option { value: "PM", "PM" }
            }
            select {
                id: "filterSpecialty",
                class: "filter-select",
                value: specialty(),
                onchange: move |evt: FormEvent| {
                    specialty.set(evt.value());
                    emit();
                },
                option { value: "", "Filter by Specialty" }
                for s in config.directory.specialties.iter() {
                    option { key: "{s}", value: "{s}", "{s}" }
                }
            }
        }
    }
}
