use backend::CalendarService;
use shared::{Appointment, AppointmentFormState, DayView};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    pub day: DayView,
    pub form: AppointmentFormState,
    pub patients: Vec<String>,
    pub doctors: Vec<String>,
    pub on_change: Callback<AppointmentFormState>,
    pub on_submit: Callback<()>,
    pub on_edit: Callback<Appointment>,
    pub on_delete: Callback<Appointment>,
    pub on_close: Callback<()>,
}

/// Add, edit and delete the appointments of one day
#[function_component(AppointmentModal)]
pub fn appointment_modal(props: &AppointmentModalProps) -> Html {
    let on_patient_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(AppointmentFormState {
                patient_name: select.value(),
                error_message: None,
                ..form.clone()
            });
        })
    };

    let on_doctor_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(AppointmentFormState {
                doctor_name: select.value(),
                error_message: None,
                ..form.clone()
            });
        })
    };

    let on_time_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(AppointmentFormState {
                time: input.value(),
                error_message: None,
                ..form.clone()
            });
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let is_editing = props.form.editing.is_some();
    let title = CalendarService::new().format_date_for_display(&props.day.iso_date());

    html! {
        <div class="appointment-modal-backdrop" onclick={on_backdrop_click}>
            <div class="appointment-modal" onclick={on_modal_click}>
                <h3 class="appointment-modal-title">{title}</h3>

                <ul class="appointment-list">
                    if props.day.appointments.is_empty() {
                        <li class="empty-state">{"No appointments"}</li>
                    }
                    {for props.day.appointments.iter().map(|appointment| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let appointment = appointment.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(appointment.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let appointment = appointment.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(appointment.clone()))
                        };
                        let editing_this = props.form.editing.as_ref() == Some(appointment);

                        html! {
                            <li class={classes!("appointment-list-item", editing_this.then_some("editing"))}>
                                <span>{format!("{} - {} with {}", appointment.time, appointment.patient_name, appointment.doctor_name)}</span>
                                <button type="button" class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>

                if let Some(error) = props.form.error_message.clone() {
                    <div class="appointment-error">{error}</div>
                }

                <form class="appointment-form" onsubmit={on_submit}>
                    <h4>{if is_editing { "Edit Appointment" } else { "Add Appointment" }}</h4>

                    <div class="form-group">
                        <label for="appointment-patient">{"Patient"}</label>
                        <select id="appointment-patient" onchange={on_patient_change}>
                            <option value="" selected={props.form.patient_name.is_empty()}>{"Select patient"}</option>
                            {for props.patients.iter().map(|patient| html! {
                                <option value={patient.clone()} selected={props.form.patient_name == *patient}>{patient}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="appointment-doctor">{"Doctor"}</label>
                        <select id="appointment-doctor" onchange={on_doctor_change}>
                            <option value="" selected={props.form.doctor_name.is_empty()}>{"Select doctor"}</option>
                            {for props.doctors.iter().map(|doctor| html! {
                                <option value={doctor.clone()} selected={props.form.doctor_name == *doctor}>{doctor}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="appointment-time">{"Time"}</label>
                        <input
                            id="appointment-time"
                            type="time"
                            value={props.form.time.clone()}
                            onchange={on_time_change}
                        />
                    </div>

                    <div class="appointment-modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
