use dioxus::prelude::*;
use ui::controllers::doctor::{
    change_query, load_appointments, AppointmentQuery, AppointmentTableView, QueryChange,
};
use ui::icons::FaCalendarDay;
use ui::{today, use_api, use_session, AppointmentTable, Footer, Header, Icon, RequestSequence};

/// The logged-in doctor's appointments for one day.
#[component]
pub fn DoctorDashboard() -> Element {
    let api = use_api();
    let session = use_session();
    let mut query = use_signal(|| AppointmentQuery::new(today()));
    let table = use_signal(|| AppointmentTableView::Loading);
    let sequence = use_hook(RequestSequence::new);

    // One fetch per call; a newer fetch discards older responses.
    let fetch = move |current: AppointmentQuery| {
        let ticket = sequence.begin();
        let api = api.clone();
        let mut table = table;
        if *table.peek() != AppointmentTableView::Loading {
            table.set(AppointmentTableView::Loading);
        }
        spawn(async move {
            let token = session.peek().token().map(str::to_string);
            let view = load_appointments(&api, token.as_deref(), &current).await;
            if ticket.is_current() {
                table.set(view);
            } else {
                tracing::debug!("Dropping stale appointments for {}", current.date);
            }
        });
    };

    let initial = fetch.clone();
    use_hook(move || initial(query.peek().clone()));

    let on_change = move |change: QueryChange| {
        change_query(&mut query.write(), change, &fetch);
    };
    let on_search = {
        let mut on_change = on_change.clone();
        move |evt: FormEvent| on_change(QueryChange::Search(evt.value()))
    };
    let on_today = {
        let mut on_change = on_change.clone();
        move |_| on_change(QueryChange::Today(today()))
    };
    let on_date = {
        let mut on_change = on_change;
        move |evt: FormEvent| on_change(QueryChange::Date(evt.value()))
    };

    rsx! {
        Header {}

        main {
            class: "main-content",
            h2 { "Patient Appointments" }
            input {
                id: "searchBar",
                class: "searchBar",
                r#type: "text",
                placeholder: "Search by Patient Name",
                oninput: on_search,
            }
            div {
                class: "filter-wrapper",
                button {
                    id: "todayButton",
                    class: "today-btn",
                    onclick: on_today,
                    Icon { icon: FaCalendarDay, width: 14, height: 14 }
                    " Today's Appointments"
                }
                input {
                    id: "datePicker",
                    class: "date-picker",
                    r#type: "date",
                    value: query.read().date_value(),
                    onchange: on_date,
                }
            }
            AppointmentTable { view: table() }
        }

        Footer {}
    }
}
