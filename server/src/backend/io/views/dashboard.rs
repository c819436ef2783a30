//! The booking dashboard: floor list, month calendar and day schedule.
//!
//! `GET /dashboard` is read-only. `date`, `year` and `month` only choose what
//! the response shows; the stored selection and focus stay as they are.

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use log::{error, info, warn};
use serde::Deserialize;
use shared::{
    CalendarCell, CalendarFocusDate, CalendarGridResponse, CellHighlight, FloorListResponse,
    PositionedBlockDto, ScheduleLayoutResponse,
};
use yew::prelude::*;

use super::{error_page, render_page};
use crate::backend::domain::models::errors::ValidationError;
use crate::backend::domain::CalendarService;
use crate::backend::io::rest::mappers::{CalendarMapper, FloorMapper, ScheduleMapper};
use crate::backend::AppState;

/// Width of one lane in the schedule column
const LANE_WIDTH_PX: usize = 160;
const RULER_WIDTH_PX: usize = 56;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct FloorForm {
    pub floor: String,
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub floors: FloorListResponse,
    pub calendar: CalendarGridResponse,
    pub schedule: ScheduleLayoutResponse,
    pub selected: NaiveDate,
    /// Neighbouring months, `None` past either end of the calendar
    pub previous: Option<CalendarFocusDate>,
    pub next: Option<CalendarFocusDate>,
}

fn month_link(
    target: Option<&CalendarFocusDate>,
    selected: NaiveDate,
    label: &'static str,
    glyph: &'static str,
) -> Html {
    let Some(focus) = target else {
        return html! {};
    };
    let href = format!(
        "/dashboard?year={}&month={}&date={}",
        focus.year,
        focus.month,
        selected.format("%Y-%m-%d")
    );

    html! { <a href={href} aria-label={label}>{ glyph }</a> }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let selected = props.selected;

    html! {
        <>
            <header>
                <strong>{ "MEETING ROOM BOOKING SYSTEM" }</strong>
                <a href="/login" style="color: #fff">{ "Sign in" }</a>
            </header>
            <main class="layout">
                <section class="floors">
                    <h2>{ "Floors" }</h2>
                    <FloorList floors={props.floors.clone()} />
                </section>
                <section>
                    <h2>
                        { month_link(props.previous.as_ref(), selected, "Previous month", "\u{2039}") }
                        { format!(" {} ", props.calendar.name) }
                        { month_link(props.next.as_ref(), selected, "Next month", "\u{203a}") }
                    </h2>
                    <MonthCalendar calendar={props.calendar.clone()} />
                    <form method="get" action="/dashboard">
                        <label>
                            { "Go to " }
                            <input type="date" name="date" value={selected.format("%Y-%m-%d").to_string()} />
                        </label>
                        <button class="button" type="submit">{ "Show" }</button>
                    </form>
                </section>
                <section>
                    <h2>{ format!("Schedule for {}", selected.format("%A, %B %-d, %Y")) }</h2>
                    <DaySchedule layout={props.schedule.clone()} />
                </section>
            </main>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloorListProps {
    pub floors: FloorListResponse,
}

#[function_component(FloorList)]
pub fn floor_list(props: &FloorListProps) -> Html {
    html! {
        <ul>
            { for props.floors.floors.iter().map(|floor| html! {
                <li class={classes!(floor.is_selected.then_some("selected"))}>
                    <form method="post" action="/dashboard/floor">
                        <button name="floor" value={floor.id.clone()}>{ floor.name.clone() }</button>
                    </form>
                    <small>{ floor.rooms.join(", ") }</small>
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthCalendarProps {
    pub calendar: CalendarGridResponse,
}

#[function_component(MonthCalendar)]
pub fn month_calendar(props: &MonthCalendarProps) -> Html {
    let calendar = &props.calendar;

    html! {
        <table class="calendar">
            <tr>
                { for calendar.weekday_labels.iter().map(|label| html! { <th>{ label.clone() }</th> }) }
            </tr>
            { for calendar.weeks.iter().map(|week| html! {
                <tr>{ for week.iter().map(|cell| day_cell(calendar, cell)) }</tr>
            }) }
        </table>
    }
}

fn day_cell(calendar: &CalendarGridResponse, cell: &CalendarCell) -> Html {
    let Some(day) = cell.day else {
        return html! { <td></td> };
    };
    let class = match cell.highlight {
        CellHighlight::Selected => Some("selected"),
        CellHighlight::Today => Some("today"),
        CellHighlight::None => None,
    };

    match NaiveDate::from_ymd_opt(calendar.year, calendar.month, day) {
        Some(date) => html! {
            <td class={classes!(class)}>
                <a href={format!("/dashboard?date={}", date.format("%Y-%m-%d"))}>{ day }</a>
            </td>
        },
        None => html! { <td class={classes!(class)}>{ day }</td> },
    }
}

#[derive(Properties, PartialEq)]
pub struct DayScheduleProps {
    pub layout: ScheduleLayoutResponse,
}

/// Ruler rows plus absolutely positioned blocks. Blocks double-booking a
/// room carry the `conflict` class.
#[function_component(DaySchedule)]
pub fn day_schedule(props: &DayScheduleProps) -> Html {
    let layout = &props.layout;
    let width = RULER_WIDTH_PX + layout.lane_count.max(1) * LANE_WIDTH_PX;
    let empty = if layout.blocks.is_empty() {
        html! { <p>{ "No meetings booked." }</p> }
    } else {
        html! {}
    };

    html! {
        <div class="schedule" style={format!("height: {}px; width: {}px", layout.height_px, width)}>
            { for layout.rows.iter().map(|row| html! {
                <div class="slot" style={format!("top: {}px; height: {}px", row.top_px, row.height_px)}>
                    { row.label.clone() }
                </div>
            }) }
            { for layout.blocks.iter().map(schedule_block) }
            { empty }
        </div>
    }
}

fn schedule_block(block: &PositionedBlockDto) -> Html {
    let conflict = (!block.conflicts_with.is_empty()).then_some("conflict");
    let style = format!(
        "top: {}px; height: {}px; left: {}px; width: {}px",
        block.top_px,
        block.height_px,
        RULER_WIDTH_PX + block.lane * LANE_WIDTH_PX,
        LANE_WIDTH_PX - 4
    );
    let room = block
        .room
        .as_ref()
        .map(|room| format!(" \u{b7} {}", room))
        .unwrap_or_default();
    let summary = format!(
        "{}\u{2013}{} ({} min){}",
        block.start.format("%H:%M"),
        block.end.format("%H:%M"),
        (block.end - block.start).num_minutes(),
        room
    );

    html! {
        <div class={classes!("block", conflict)} style={style}>
            { summary }
            <br />
            { block.title.clone() }
        </div>
    }
}

fn neighbour(step: Result<(u32, i32), ValidationError>) -> Option<CalendarFocusDate> {
    step.ok().map(|(month, year)| CalendarFocusDate { month, year })
}

/// Render the dashboard for the requested day and month
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    info!("GET /dashboard - query: {:?}", query);

    let calendar = &state.calendar_service;
    let selected = query.date.unwrap_or_else(|| calendar.get_selected_date());
    let focus = match (query.year, query.month, query.date) {
        (Some(year), Some(month), _) => CalendarFocusDate { month, year },
        (_, _, Some(date)) => CalendarFocusDate::from_date(date),
        _ => calendar.get_focus_date(),
    };

    let grid = match calendar.generate_month_view(focus.month, focus.year, selected) {
        Ok(grid) => grid,
        Err(e) => {
            warn!("Rejected dashboard month {}/{}: {}", focus.month, focus.year, e);
            return error_page(StatusCode::BAD_REQUEST, e).await;
        }
    };

    let layout = match state.schedule_service.day_layout(selected).await {
        Ok(layout) => layout,
        Err(e) => {
            error!("Failed to lay out schedule for {}: {:#}", selected, e);
            return error_page(StatusCode::INTERNAL_SERVER_ERROR, "Schedule unavailable").await;
        }
    };

    let props = DashboardProps {
        floors: FloorMapper::selection_to_dto(state.floor_service.list_floors()),
        calendar: CalendarMapper::grid_to_dto(grid),
        schedule: ScheduleMapper::layout_to_dto(layout, Some(selected)),
        selected,
        previous: neighbour(CalendarService::previous_month(focus.month, focus.year)),
        next: neighbour(CalendarService::next_month(focus.month, focus.year)),
    };

    render_page::<Dashboard>(StatusCode::OK, "Dashboard", props).await
}

/// Select a floor from the dashboard form and return to the dashboard
pub async fn select_floor(
    State(state): State<AppState>,
    Form(form): Form<FloorForm>,
) -> Response {
    info!("POST /dashboard/floor - floor: {}", form.floor);

    match state.floor_service.select_floor(&form.floor) {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(e) => {
            warn!("Rejected floor selection: {}", e);
            error_page(StatusCode::BAD_REQUEST, e).await
        }
    }
}
