use backend::AppointmentFormService;
use shared::{SchedulerConfig, ThemePreference, ViewVariant};
use yew::prelude::*;

use super::appointment_modal::AppointmentModal;
use super::calendar::Calendar;
use super::day_view::DayViewPanel;
use super::header::Header;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_viewport_width::use_viewport_width;

#[derive(Properties, PartialEq)]
pub struct CalendarPageProps {
    pub config: SchedulerConfig,
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(CalendarPage)]
pub fn calendar_page(props: &CalendarPageProps) -> Html {
    let viewport_width = use_viewport_width();
    let calendar = use_calendar(&props.config, viewport_width);
    let form_service = AppointmentFormService::with_config(props.config.clone());
    let state = calendar.state;
    let actions = calendar.actions;

    let on_dismiss_notice = {
        let dismiss_notice = actions.dismiss_notice.clone();
        Callback::from(move |_: MouseEvent| dismiss_notice.emit(()))
    };

    html! {
        <div class="calendar-page">
            <Header
                theme={props.theme}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_logout={props.on_logout.clone()}
            />

            if let Some(notice) = state.notice.clone() {
                <div class="notice" role="status" onclick={on_dismiss_notice}>{notice}</div>
            }

            <main class="container">
                {match state.variant {
                    ViewVariant::Grid => html! {
                        <Calendar
                            month_title={state.month_title.clone()}
                            grid={state.grid.clone()}
                            max_visible={props.config.max_visible_appointments}
                            on_prev_month={actions.prev_month.clone()}
                            on_next_month={actions.next_month.clone()}
                            on_select_day={actions.open_day.clone()}
                        />
                    },
                    ViewVariant::Day => html! {
                        <DayViewPanel
                            day={state.focused_day.clone()}
                            on_change_date={actions.focus_date.clone()}
                            on_open_day={actions.open_day.clone()}
                        />
                    },
                }}
            </main>

            if let Some(day) = state.open_day.clone() {
                <AppointmentModal
                    {day}
                    form={state.form.clone()}
                    patients={form_service.patient_options().to_vec()}
                    doctors={form_service.doctor_options().to_vec()}
                    on_change={actions.update_form.clone()}
                    on_submit={actions.submit_form.clone()}
                    on_edit={actions.edit_appointment.clone()}
                    on_delete={actions.delete_appointment.clone()}
                    on_close={actions.close_day.clone()}
                />
            }
        </div>
    }
}
