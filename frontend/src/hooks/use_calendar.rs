use backend::{AppointmentFormService, CalendarViewController, ReconcileError};
use chrono::NaiveDate;
use gloo::timers::callback::Timeout;
use shared::{
    Appointment, AppointmentFormState, AppointmentIntent, DayView, MonthGrid, SchedulerConfig, ViewVariant,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::browser_storage::BrowserStore;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// How long the past-date notice stays on screen
const NOTICE_DURATION_MS: u32 = 3_000;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub variant: ViewVariant,
    pub month_title: String,
    pub grid: MonthGrid,
    /// The day shown by the mobile day list
    pub focused_day: DayView,
    /// The day whose appointment modal is open
    pub open_day: Option<DayView>,
    pub form: AppointmentFormState,
    pub notice: Option<String>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub focus_date: Callback<NaiveDate>,
    pub open_day: Callback<NaiveDate>,
    pub close_day: Callback<()>,
    pub update_form: Callback<AppointmentFormState>,
    pub edit_appointment: Callback<Appointment>,
    pub delete_appointment: Callback<Appointment>,
    pub submit_form: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

#[hook]
pub fn use_calendar(config: &SchedulerConfig, viewport_width: u32) -> UseCalendarResult {
    let controller = {
        let config = config.clone();
        use_state(move || CalendarViewController::load_with_config(BrowserStore::new(), today(), config))
    };
    let focused_date = use_state(today);
    let selected_date = use_state(|| Option::<NaiveDate>::None);
    let form = use_state(AppointmentFormService::create_form_state);
    let notice = use_state(|| Option::<String>::None);

    // Past-date notices disappear on their own
    use_effect_with((*notice).clone(), {
        let notice = notice.clone();
        move |current: &Option<String>| {
            let timeout = current
                .as_ref()
                .map(|_| Timeout::new(NOTICE_DURATION_MS, move || notice.set(None)));
            move || drop(timeout)
        }
    });

    let prev_month = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*controller).clone();
            next.set_today(today());
            next.show_previous_month();
            controller.set(next);
        })
    };

    let next_month = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*controller).clone();
            next.set_today(today());
            next.show_next_month();
            controller.set(next);
        })
    };

    let focus_date = {
        let controller = controller.clone();
        let focused_date = focused_date.clone();
        Callback::from(move |date: NaiveDate| {
            Logger::debug_with_component("use_calendar", &format!("Day view moved to {}", date));
            let mut next = (*controller).clone();
            next.set_today(today());
            next.show_month_of(date);
            controller.set(next);
            focused_date.set(date);
        })
    };

    let open_day = {
        let controller = controller.clone();
        let selected_date = selected_date.clone();
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |date: NaiveDate| {
            let mut current = (*controller).clone();
            current.set_today(today());

            match current.open_day(date) {
                Ok(_) => {
                    form.set(AppointmentFormService::create_form_state());
                    selected_date.set(Some(date));
                }
                Err(e) => {
                    Logger::warn_with_component("use_calendar", &e.to_string());
                    notice.set(Some(current.config().past_date_notice.clone()));
                }
            }
            controller.set(current);
        })
    };

    let close_day = {
        let selected_date = selected_date.clone();
        let form = form.clone();
        Callback::from(move |_| {
            selected_date.set(None);
            form.set(AppointmentFormService::create_form_state());
        })
    };

    let update_form = {
        let form = form.clone();
        Callback::from(move |next: AppointmentFormState| form.set(next))
    };

    let edit_appointment = {
        let form = form.clone();
        Callback::from(move |appointment: Appointment| {
            form.set(AppointmentFormState::for_edit(&appointment));
        })
    };

    let delete_appointment = {
        let controller = controller.clone();
        let selected_date = selected_date.clone();
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |appointment: Appointment| {
            let Some(date) = *selected_date else {
                return;
            };
            let mut current = (*controller).clone();
            current.set_today(today());

            match current.submit(date, AppointmentIntent::Delete(appointment)) {
                Ok(()) => {
                    controller.set(current);
                    form.set(AppointmentFormService::create_form_state());
                }
                Err(ReconcileError::PastDate(_)) => {
                    notice.set(Some(current.config().past_date_notice.clone()));
                    selected_date.set(None);
                }
                Err(e) => {
                    Logger::error_with_component("use_calendar", &format!("Delete failed: {}", e));
                    form.set(AppointmentFormState {
                        error_message: Some(e.to_string()),
                        ..(*form).clone()
                    });
                }
            }
        })
    };

    let submit_form = {
        let controller = controller.clone();
        let selected_date = selected_date.clone();
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            let Some(date) = *selected_date else {
                return;
            };
            let mut current = (*controller).clone();
            current.set_today(today());

            match current.submit(date, form.to_intent()) {
                Ok(()) => {
                    Logger::info_with_component("use_calendar", &format!("Saved appointment on {}", date));
                    controller.set(current);
                    form.set(AppointmentFormService::create_form_state());
                    selected_date.set(None);
                }
                Err(ReconcileError::PastDate(_)) => {
                    notice.set(Some(current.config().past_date_notice.clone()));
                    selected_date.set(None);
                }
                Err(e) => {
                    form.set(AppointmentFormState {
                        error_message: Some(e.to_string()),
                        ..(*form).clone()
                    });
                }
            }
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let state = CalendarState {
        variant: controller.view_variant(viewport_width),
        month_title: controller.month_title(),
        grid: controller.month_grid(),
        focused_day: controller.day_view(*focused_date),
        open_day: (*selected_date).map(|date| controller.day_view(date)),
        form: (*form).clone(),
        notice: (*notice).clone(),
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        focus_date,
        open_day,
        close_day,
        update_form,
        edit_appointment,
        delete_appointment,
        submit_form,
        dismiss_notice,
    };

    UseCalendarResult { state, actions }
}
