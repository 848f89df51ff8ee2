//! Week-at-a-glance availability widget backed by fixed mock data.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumn {
    pub label: &'static str,
    pub date: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Green,
    Red,
    Yellow,
}

impl SlotStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            SlotStatus::Green => "bg-emerald-400",
            SlotStatus::Red => "bg-red-500",
            SlotStatus::Yellow => "bg-amber-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSlots {
    pub name: &'static str,
    pub status: [SlotStatus; 6],
}

const fn day(label: &'static str, date: &'static str) -> DayColumn {
    DayColumn {
        label,
        date,
        active: false,
    }
}

pub const DAYS: [DayColumn; 7] = [
    day("DOM", "10"),
    day("SEG", "11"),
    day("TER", "12"),
    day("QUA", "13"),
    DayColumn {
        label: "QUI",
        date: "14",
        active: true,
    },
    day("SEX", "15"),
    day("SÁB", "16"),
];

use SlotStatus::{Green, Red, Yellow};

pub const MOCK_SLOTS: [PeriodSlots; 3] = [
    PeriodSlots {
        name: "Manhã",
        status: [Green, Green, Green, Green, Green, Green],
    },
    PeriodSlots {
        name: "Tarde",
        status: [Green, Green, Red, Yellow, Green, Green],
    },
    PeriodSlots {
        name: "Noite",
        status: [Green, Green, Green, Green, Red, Green],
    },
];

/// Label colour by row: the first two periods are green shades, the rest orange.
pub fn period_label_class(index: usize) -> &'static str {
    match index {
        0 => "text-emerald-600",
        1 => "text-emerald-500",
        _ => "text-orange-400",
    }
}

fn day_badge_class(active: bool) -> &'static str {
    if active {
        "w-8 h-8 rounded-full flex items-center justify-center text-sm font-semibold transition-colors bg-blue-500 text-white shadow-md shadow-blue-200"
    } else {
        "w-8 h-8 rounded-full flex items-center justify-center text-sm font-semibold transition-colors text-gray-700 hover:bg-gray-100"
    }
}

#[component]
pub fn CourtStatusGrid() -> impl IntoView {
    view! {
        <div class="bg-white rounded-3xl p-4 shadow-sm mb-6">
            <div class="grid grid-cols-7 gap-2 mb-4 text-center">
                {DAYS
                    .iter()
                    .map(|day| {
                        view! {
                            <div class="flex flex-col items-center gap-1">
                                <span class="text-[10px] font-bold text-gray-400 uppercase">{day.label}</span>
                                <div class=day_badge_class(day.active)>{day.date}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="space-y-2">
                {MOCK_SLOTS
                    .iter()
                    .enumerate()
                    .map(|(idx, period)| {
                        view! {
                            <div class="flex gap-2 items-center">
                                <span class=format!("text-[10px] font-medium w-12 text-left {}", period_label_class(idx))>
                                    {period.name}
                                </span>
                                <div class="grid grid-cols-7 gap-2 flex-1">
                                    {period
                                        .status
                                        .iter()
                                        .map(|status| {
                                            view! { <div class=format!("h-8 rounded-lg w-full {}", status.css_class())></div> }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
