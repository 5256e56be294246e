use dioxus::prelude::*;
use ui::{use_doctor_directory, AddDoctorForm, DoctorFilters, DoctorList, Footer, Header, ModalOverlay};

/// Doctor directory with add and delete.
#[component]
pub fn AdminDashboard() -> Element {
    let directory = use_doctor_directory();
    let mut adding = use_signal(|| false);

    let on_filter = {
        let directory = directory.clone();
        move |filter| directory.filter(filter)
    };
    let on_deleted = {
        let directory = directory.clone();
        move |id| directory.remove(id)
    };
    let on_saved = {
        let directory = directory.clone();
        move |_: ()| {
            adding.set(false);
            directory.reload();
        }
    };

    rsx! {
        Header { on_add_doctor: move |_| adding.set(true) }

        main {
            class: "main-content",
            DoctorFilters { on_change: on_filter }
            DoctorList {
                view: directory.view.cloned(),
                on_deleted,
                on_book: |_| {},
            }
        }

        if adding() {
            ModalOverlay {
                on_close: move |_| adding.set(false),
                AddDoctorForm { on_saved }
            }
        }

        Footer {}
    }
}
