use chrono::NaiveDate;
use shared::DayView;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils::parse_date_input;

#[derive(Properties, PartialEq)]
pub struct DayViewPanelProps {
    pub day: DayView,
    pub on_change_date: Callback<NaiveDate>,
    pub on_open_day: Callback<NaiveDate>,
}

/// Mobile layout: one day's appointments in time order
#[function_component(DayViewPanel)]
pub fn day_view_panel(props: &DayViewPanelProps) -> Html {
    let on_date_change = {
        let on_change_date = props.on_change_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(date) = parse_date_input(&input.value()) {
                on_change_date.emit(date);
            }
        })
    };

    let on_add = {
        let on_open_day = props.on_open_day.clone();
        let date = props.day.date;
        Callback::from(move |_: MouseEvent| on_open_day.emit(date))
    };

    html! {
        <div class="day-view">
            <div class="form-group">
                <label for="day-view-date">{"Select Date"}</label>
                <input
                    id="day-view-date"
                    type="date"
                    value={props.day.iso_date()}
                    onchange={on_date_change}
                />
            </div>

            <div class="day-view-list">
                if props.day.appointments.is_empty() {
                    <div class="empty-state">{"No appointments"}</div>
                } else {
                    {for props.day.appointments.iter().map(|appointment| html! {
                        <div class="day-view-item">
                            <div class="day-view-patient">{&appointment.patient_name}</div>
                            <div class="day-view-meta">
                                {format!("{} · {}", appointment.time, appointment.doctor_name)}
                            </div>
                        </div>
                    })}
                }
            </div>

            <button class="btn btn-primary btn-block" onclick={on_add}>
                {"+ Add Appointment"}
            </button>
        </div>
    }
}
