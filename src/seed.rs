//! Default seed dataset.
//!
//! When the server starts without a snapshot to restore, it begins
//! from this small, fixed organisation.  The records are created
//! through the directory's own mutation API so the id counters end up
//! exactly where a live system would have left them: the next
//! employee added to the seeded directory receives `EMP004`.

use chrono::NaiveDate;

use crate::directory::Directory;
use crate::models::{
    Company, EmployeeStatus, EmploymentType, HolidayKind, NewDepartment, NewDesignation,
    NewEmployee, NewHoliday, NewLocation, NewPolicy, NewTeam, PolicyCategory, TeamStats,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Builds the seeded directory.
pub fn default_directory() -> Directory {
    let mut dir = Directory::new(Company {
        name: "Meridian Labs".into(),
        legal_name: "Meridian Labs Private Limited".into(),
        industry: "Software Services".into(),
        website: "https://meridianlabs.example".into(),
        headquarters: "Pune, India".into(),
        founded_year: 2014,
    });

    // DEPT001..DEPT004
    dir.add_department(NewDepartment {
        name: "Engineering".into(),
        head_id: Some("EMP001".into()),
    });
    dir.add_department(NewDepartment {
        name: "People Operations".into(),
        head_id: Some("EMP002".into()),
    });
    dir.add_department(NewDepartment {
        name: "Sales".into(),
        head_id: None,
    });
    dir.add_department(NewDepartment {
        name: "Finance".into(),
        head_id: None,
    });

    // DES001..DES003
    dir.add_designation(NewDesignation {
        name: "Software Engineer".into(),
        grade: Some("L3".into()),
    });
    dir.add_designation(NewDesignation {
        name: "HR Manager".into(),
        grade: Some("M1".into()),
    });
    dir.add_designation(NewDesignation {
        name: "Senior Software Engineer".into(),
        grade: Some("L4".into()),
    });

    // LOC001..LOC002
    dir.add_location(NewLocation {
        name: "Pune HQ".into(),
        city: "Pune".into(),
        country: "India".into(),
    });
    dir.add_location(NewLocation {
        name: "Bengaluru Office".into(),
        city: "Bengaluru".into(),
        country: "India".into(),
    });

    // EMP001..EMP003, oldest first.
    dir.bulk_import_employees(vec![
        NewEmployee {
            name: "Asha Iyer".into(),
            email: "asha.iyer@meridianlabs.example".into(),
            phone: "+91 98220 10001".into(),
            status: EmployeeStatus::Active,
            employment_type: EmploymentType::FullTime,
            department_id: "DEPT001".into(),
            designation_id: "DES003".into(),
            location_id: "LOC001".into(),
            reporting_manager_id: None,
            date_of_joining: date(2021, 6, 14),
            exit_date: None,
            exit_reason: None,
        },
        NewEmployee {
            name: "Bilal Khan".into(),
            email: "bilal.khan@meridianlabs.example".into(),
            phone: "+91 98220 10002".into(),
            status: EmployeeStatus::Active,
            employment_type: EmploymentType::FullTime,
            department_id: "DEPT002".into(),
            designation_id: "DES002".into(),
            location_id: "LOC002".into(),
            reporting_manager_id: Some("EMP001".into()),
            date_of_joining: date(2022, 11, 1),
            exit_date: None,
            exit_reason: None,
        },
        NewEmployee {
            name: "Chitra Nair".into(),
            email: "chitra.nair@meridianlabs.example".into(),
            phone: "+91 98220 10003".into(),
            status: EmployeeStatus::Active,
            employment_type: EmploymentType::Contract,
            department_id: "DEPT001".into(),
            designation_id: "DES001".into(),
            location_id: "LOC001".into(),
            reporting_manager_id: Some("EMP001".into()),
            date_of_joining: date(2024, 3, 18),
            exit_date: None,
            exit_reason: None,
        },
    ]);

    // TEAM001
    dir.add_team(NewTeam {
        name: "Platform".into(),
        lead_id: "EMP001".into(),
        member_ids: vec!["EMP001".into(), "EMP003".into()],
        stats: Some(TeamStats {
            velocity: 24.0,
            tasks_completed: 87,
            uptime_pct: 99.2,
        }),
    });

    // HOL001..HOL003
    dir.add_holiday(NewHoliday {
        name: "Republic Day".into(),
        date: date(2026, 1, 26),
        kind: HolidayKind::Public,
        location_id: None,
    });
    dir.add_holiday(NewHoliday {
        name: "Diwali".into(),
        date: date(2026, 11, 8),
        kind: HolidayKind::Public,
        location_id: None,
    });
    dir.add_holiday(NewHoliday {
        name: "Karnataka Rajyotsava".into(),
        date: date(2026, 11, 1),
        kind: HolidayKind::Optional,
        location_id: Some("LOC002".into()),
    });

    // POL001..POL003
    dir.add_policy(NewPolicy {
        name: "Leave Policy".into(),
        category: PolicyCategory::Leave,
        description: "Annual, casual and sick leave entitlements.".into(),
        effective_from: date(2025, 4, 1),
    });
    dir.add_policy(NewPolicy {
        name: "Code of Conduct".into(),
        category: PolicyCategory::Conduct,
        description: "Workplace behaviour and escalation channels.".into(),
        effective_from: date(2024, 1, 1),
    });
    dir.add_policy(NewPolicy {
        name: "Acceptable Use Policy".into(),
        category: PolicyCategory::It,
        description: "Company devices, accounts and network usage.".into(),
        effective_from: date(2024, 7, 1),
    });

    dir
}
