//! Calendar domain logic for the clinic calendar.
//!
//! This module contains the month grid generation, month navigation and date
//! formatting. The UI only handles presentation; every date computation and
//! rule about which cells are filler, today or in the past lives here.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use shared::{Appointment, CalendarDayType, CalendarWeek, DayCell, MonthGrid};

use super::day_grouping::group_by_date;

const DAYS_PER_WEEK: u32 = 7;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone, Debug, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate the week-aligned grid for the month containing `reference_date`.
    ///
    /// Rows run Sunday to Saturday. Cells before day 1 come from the previous
    /// month, cells after the last day from the next month, and only as many
    /// rows are produced as the month needs.
    pub fn generate_month_grid(
        &self,
        reference_date: NaiveDate,
        today: NaiveDate,
        appointments: &[Appointment],
    ) -> MonthGrid {
        let month = reference_date.month();
        let year = reference_date.year();
        let month_start = first_of_month(reference_date);
        let next_month_start = self.next_month(month_start);
        let lead_offset = self.first_day_of_month(month, year);
        let days_in_month = self.days_in_month(month, year);
        let total_weeks = (lead_offset + days_in_month).div_ceil(DAYS_PER_WEEK);

        debug!(
            "🗓️ Generating grid for {}/{}: {} days, lead offset {}, {} weeks",
            month, year, days_in_month, lead_offset, total_weeks
        );

        let appointments_by_day = group_by_date(appointments);

        let mut day_counter = 1;
        let mut next_month_offset = 0;
        let mut weeks = Vec::with_capacity(total_weeks as usize);

        for week in 0..total_weeks {
            let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);

            for weekday in 0..DAYS_PER_WEEK {
                let cell_index = week * DAYS_PER_WEEK + weekday;

                let cell = if cell_index < lead_offset {
                    let date = month_start - Duration::days(i64::from(lead_offset - weekday));
                    DayCell::filler(date, CalendarDayType::PreviousMonth)
                } else if day_counter > days_in_month {
                    let date = next_month_start + Duration::days(next_month_offset);
                    next_month_offset += 1;
                    DayCell::filler(date, CalendarDayType::NextMonth)
                } else {
                    let date = month_start + Duration::days(i64::from(day_counter - 1));
                    let iso_date = date.format("%Y-%m-%d").to_string();
                    day_counter += 1;

                    DayCell {
                        date,
                        day: date.day(),
                        day_type: CalendarDayType::CurrentMonth,
                        is_today: date == today,
                        is_past: date < today,
                        appointments: appointments_by_day
                            .get(&iso_date)
                            .cloned()
                            .unwrap_or_default(),
                    }
                };

                days.push(cell);
            }

            weeks.push(CalendarWeek { days });
        }

        MonthGrid {
            month,
            year,
            lead_offset,
            days_in_month,
            weeks,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Day 1 of the month containing `date`
    pub fn month_start(&self, date: NaiveDate) -> NaiveDate {
        first_of_month(date)
    }

    /// Day 1 of the month before the one containing `date`
    pub fn previous_month(&self, date: NaiveDate) -> NaiveDate {
        first_of_month(first_of_month(date) - Duration::days(1))
    }

    /// Day 1 of the month after the one containing `date`
    pub fn next_month(&self, date: NaiveDate) -> NaiveDate {
        let month_start = first_of_month(date);
        let days = self.days_in_month(month_start.month(), month_start.year());
        month_start + Duration::days(i64::from(days))
    }

    /// Header title for a month, e.g. "July 2025"
    pub fn format_month_title(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name(date.month()), date.year())
    }

    /// Parse a stored `yyyy-MM-dd` date
    pub fn parse_appointment_date(&self, date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
    }

    /// Format a stored date for display, e.g. "July 5, 2025"
    pub fn format_date_for_display(&self, date_str: &str) -> String {
        match self.parse_appointment_date(date_str) {
            Some(date) => format!("{} {}, {}", self.month_name(date.month()), date.day(), date.year()),
            None => date_str.to_string(),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn current_days(grid: &MonthGrid) -> Vec<u32> {
        grid.current_month_cells().map(|cell| cell.day).collect()
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(1, 2025), 31);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900));
        assert!(service.is_leap_year(2000));
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        assert_eq!(service.first_day_of_month(6, 2025), 0); // Sunday
        assert_eq!(service.first_day_of_month(7, 2025), 2); // Tuesday
        assert_eq!(service.first_day_of_month(13, 2025), 0);
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.month_start(date(2025, 7, 19)), date(2025, 7, 1));
        assert_eq!(service.previous_month(date(2025, 7, 19)), date(2025, 6, 1));
        assert_eq!(service.previous_month(date(2025, 1, 31)), date(2024, 12, 1));
        assert_eq!(service.next_month(date(2025, 7, 19)), date(2025, 8, 1));
        assert_eq!(service.next_month(date(2025, 12, 31)), date(2026, 1, 1));
        assert_eq!(service.next_month(date(2024, 1, 31)), date(2024, 2, 1));
    }

    #[test]
    fn test_format_helpers() {
        let service = CalendarService::new();

        assert_eq!(service.format_month_title(date(2025, 7, 5)), "July 2025");
        assert_eq!(service.format_date_for_display("2025-07-05"), "July 5, 2025");
        assert_eq!(service.format_date_for_display("not-a-date"), "not-a-date");
        assert_eq!(service.parse_appointment_date("2025-07-05"), Some(date(2025, 7, 5)));
        assert_eq!(service.parse_appointment_date("05/07/2025"), None);
    }

    #[test]
    fn test_sunday_start_thirty_day_month() {
        // June 2025 starts on a Sunday and has 30 days
        let service = CalendarService::new();
        let grid = service.generate_month_grid(date(2025, 6, 15), date(2025, 6, 10), &[]);

        assert_eq!(grid.lead_offset, 0);
        assert_eq!(grid.week_count(), 5);
        assert_eq!(grid.weeks[0].days[0].date, date(2025, 6, 1));
        assert!(grid.weeks[0].days[0].belongs_to_displayed_month());

        let last_week = &grid.weeks[4].days;
        assert_eq!(last_week[0].date, date(2025, 6, 29));
        assert_eq!(last_week[1].date, date(2025, 6, 30));
        let trailing: Vec<NaiveDate> = last_week[2..].iter().map(|c| c.date).collect();
        assert_eq!(
            trailing,
            (1..=5).map(|d| date(2025, 7, d)).collect::<Vec<_>>()
        );
        assert!(last_week[2..]
            .iter()
            .all(|c| c.day_type == CalendarDayType::NextMonth));
    }

    #[test]
    fn test_leading_filler_from_previous_month() {
        // July 2025 starts on a Tuesday
        let service = CalendarService::new();
        let grid = service.generate_month_grid(date(2025, 7, 1), date(2025, 7, 1), &[]);

        assert_eq!(grid.lead_offset, 2);
        assert_eq!(grid.week_count(), 5);

        let first_week = &grid.weeks[0].days;
        assert_eq!(first_week[0].date, date(2025, 6, 29));
        assert_eq!(first_week[1].date, date(2025, 6, 30));
        assert_eq!(first_week[0].day_type, CalendarDayType::PreviousMonth);
        assert_eq!(first_week[2].date, date(2025, 7, 1));
        assert!(first_week[2].is_today);

        let last_week = &grid.weeks[4].days;
        assert_eq!(last_week[5].date, date(2025, 8, 1));
        assert_eq!(last_week[6].date, date(2025, 8, 2));
    }

    #[test]
    fn test_six_week_month() {
        // August 2025 starts on a Friday and needs six rows
        let service = CalendarService::new();
        let grid = service.generate_month_grid(date(2025, 8, 20), date(2025, 8, 20), &[]);

        assert_eq!(grid.lead_offset, 5);
        assert_eq!(grid.week_count(), 6);
        assert_eq!(grid.weeks[5].days[0].date, date(2025, 8, 31));
        assert_eq!(grid.weeks[5].days[1].date, date(2025, 9, 1));
    }

    #[test]
    fn test_four_week_february() {
        // February 2026 starts on a Sunday and fits in exactly four rows
        let service = CalendarService::new();
        let grid = service.generate_month_grid(date(2026, 2, 1), date(2026, 2, 1), &[]);

        assert_eq!(grid.lead_offset, 0);
        assert_eq!(grid.week_count(), 4);
        assert!(grid.cells().all(|c| c.belongs_to_displayed_month()));
    }

    #[test]
    fn test_grid_invariants_for_many_months() {
        let service = CalendarService::new();
        let today = date(2025, 7, 15);

        for year in 2020..=2030 {
            for month in 1..=12 {
                let grid = service.generate_month_grid(date(year, month, 1), today, &[]);
                let days_in_month = service.days_in_month(month, year);

                assert_eq!(grid.cells().count(), grid.week_count() * 7);
                assert!((4..=6).contains(&grid.week_count()), "{}/{}", month, year);
                assert_eq!(
                    grid.week_count() as u32,
                    (grid.lead_offset + days_in_month).div_ceil(7)
                );
                assert_eq!(current_days(&grid), (1..=days_in_month).collect::<Vec<_>>());
                assert_eq!(grid.lead_offset, service.first_day_of_month(month, year));
                assert_eq!(grid.weeks[0].days[grid.lead_offset as usize].day, 1);

                for week in &grid.weeks {
                    assert_eq!(week.days.len(), 7);
                    for (column, cell) in week.days.iter().enumerate() {
                        assert_eq!(cell.date.weekday().num_days_from_sunday() as usize, column);
                    }
                }

                let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date).collect();
                for pair in dates.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
            }
        }
    }

    #[test]
    fn test_today_and_past_flags() {
        let service = CalendarService::new();
        let today = date(2025, 7, 15);
        let grid = service.generate_month_grid(today, today, &[]);

        let today_cells: Vec<&DayCell> = grid.cells().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, today);
        assert!(!today_cells[0].is_past);

        assert!(grid.find_cell(date(2025, 7, 14)).unwrap().is_past);
        assert!(!grid.find_cell(date(2025, 7, 16)).unwrap().is_past);

        // Filler cells are never flagged
        assert!(grid
            .cells()
            .filter(|c| !c.belongs_to_displayed_month())
            .all(|c| !c.is_today && !c.is_past));
    }

    #[test]
    fn test_today_in_other_month_is_not_highlighted() {
        let service = CalendarService::new();
        let grid = service.generate_month_grid(date(2025, 9, 1), date(2025, 7, 15), &[]);

        assert!(grid.cells().all(|c| !c.is_today));
        assert!(grid.current_month_cells().all(|c| !c.is_past));
    }

    #[test]
    fn test_appointments_attached_to_current_month_cells() {
        let service = CalendarService::new();
        let appointments = vec![
            Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith"),
            Appointment::new("2025-07-05", "09:00", "Jane Smith", "Dr. Kavya"),
            Appointment::new("2025-06-30", "11:00", "Alice Roy", "Dr. Raj"),
            Appointment::new("2025-07-20", "14:00", "David Paul", "Dr. Emily"),
        ];

        let grid = service.generate_month_grid(date(2025, 7, 1), date(2025, 7, 1), &appointments);

        let fifth = grid.find_cell(date(2025, 7, 5)).unwrap();
        let names: Vec<&str> = fifth.appointments.iter().map(|a| a.patient_name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith"]);

        assert_eq!(grid.find_cell(date(2025, 7, 20)).unwrap().appointments.len(), 1);

        // June 30 is shown as filler and carries nothing
        let filler = grid.cells().find(|c| c.date == date(2025, 6, 30)).unwrap();
        assert!(filler.appointments.is_empty());
    }

    #[test]
    fn test_grids_are_independent() {
        let service = CalendarService::new();
        let today = date(2025, 7, 15);
        let july = service.generate_month_grid(today, today, &[]);
        let august = service.generate_month_grid(service.next_month(today), today, &[]);
        let july_again = service.generate_month_grid(service.previous_month(service.next_month(today)), today, &[]);

        assert_eq!(august.month, 8);
        assert_eq!(july, july_again);
    }
}
