use dioxus::prelude::*;

use crate::controllers::doctor::{AppointmentTableView, PatientRecord, NO_APPOINTMENTS};

const COLUMNS: [&str; 5] = ["Patient ID", "Name", "Phone No.", "Email", "Prescription"];

/// The doctor's appointment table. An empty day renders one message row.
#[component]
pub fn AppointmentTable(view: AppointmentTableView) -> Element {
    rsx! {
        table {
            id: "patientTable",
            class: "patient-table",
            thead {
                tr {
                    for column in COLUMNS {
                        th { key: "{column}", "{column}" }
                    }
                }
            }
            tbody {
                id: "patientTableBody",
                {match &view {
                    AppointmentTableView::Loading => rsx! {
                        tr { td { colspan: "5", "Loading appointments..." } }
                    },
                    AppointmentTableView::Empty => rsx! {
                        tr { td { class: "noPatientRecord", colspan: "5", "{NO_APPOINTMENTS}" } }
                    },
                    AppointmentTableView::Rows(_) => rsx! {
                        for (row, record) in view.keyed_rows() {
                            PatientRow { key: "{row}", record }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
pub fn PatientRow(record: PatientRecord) -> Element {
    rsx! {
        tr {
            td { class: "patient-id", "{record.id}" }
            td { "{record.name}" }
            td { "{record.phone}" }
            td { "{record.email}" }
            td { class: "prescription", "{record.prescription}" }
        }
    }
}
