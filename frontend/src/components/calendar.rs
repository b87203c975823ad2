use chrono::NaiveDate;
use shared::{DayCell, MonthGrid};
use yew::prelude::*;

use crate::services::date_utils::WEEKDAY_LABELS;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month_title: String,
    pub grid: MonthGrid,
    pub max_visible: usize,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_select_day: Callback<NaiveDate>,
}

/// Desktop month grid
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    html! {
        <div class="calendar-card">
            <div class="calendar-header">
                <button class="month-nav-btn" onclick={props.on_prev_month.clone()}>{"‹"}</button>
                <h2 class="calendar-title">{&props.month_title}</h2>
                <button class="month-nav-btn" onclick={props.on_next_month.clone()}>{"›"}</button>
            </div>

            <div class="calendar-grid">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-day-header">{*label}</div>
                })}

                {for props.grid.cells().map(|cell| day_cell(cell, props.max_visible, &props.on_select_day))}
            </div>
        </div>
    }
}

fn day_cell(cell: &DayCell, max_visible: usize, on_select_day: &Callback<NaiveDate>) -> Html {
    if !cell.belongs_to_displayed_month() {
        return html! {
            <div class="calendar-day other-month">
                <div class="day-number">{cell.day}</div>
            </div>
        };
    }

    let class = classes!(
        "calendar-day",
        cell.is_today.then_some("today"),
        cell.is_past.then_some("past"),
        cell.is_selectable().then_some("selectable"),
    );

    let onclick = {
        let on_select_day = on_select_day.clone();
        let date = cell.date;
        Callback::from(move |_: MouseEvent| on_select_day.emit(date))
    };

    let hidden = cell.hidden_count(max_visible);

    html! {
        <div {class} {onclick} title={cell.iso_date()}>
            <div class="day-header">
                <div class="day-number">{cell.day}</div>
            </div>
            <div class="day-appointments">
                {for cell.visible_appointments(max_visible).iter().map(|appointment| html! {
                    <div class="appointment-chip" title={appointment.to_string()}>
                        <span class="appointment-time">{&appointment.time}</span>
                        {" "}
                        <span class="appointment-patient">{&appointment.patient_name}</span>
                    </div>
                })}
                if hidden > 0 {
                    <div class="appointment-more">{format!("+{} more", hidden)}</div>
                }
            </div>
        </div>
    }
}
