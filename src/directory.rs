//! The organisation directory.
//!
//! The `directory` module owns the seven entity collections plus the
//! singleton company record, and provides every mutation the
//! directory supports.  A [`Directory`] is an explicit value owned by
//! the hosting application and passed to whoever needs it; nothing
//! here is a global.  All operations are synchronous and run to
//! completion, so a single writer observes strict sequential
//! consistency: the Nth mutation is fully visible to the (N+1)th
//! read.
//!
//! Mutations are infallible.  An update or delete against an unknown
//! identifier is a silent no-op rather than an error; callers that
//! care can inspect the collections afterwards.  Deletes never
//! cascade, so references held by other records may dangle.

use serde::{Deserialize, Serialize};

use crate::models::{
    Company, CompanyPatch, Department, DepartmentPatch, Designation, DesignationPatch, Employee,
    EmployeePatch, Holiday, HolidayPatch, Location, LocationPatch, NewDepartment, NewDesignation,
    NewEmployee, NewHoliday, NewLocation, NewPolicy, NewTeam, Policy, PolicyPatch, Team, TeamPatch,
};

/// One monotonic counter per collection.  Counters only ever grow, so
/// an identifier is never reissued no matter how many records are
/// deleted in between.  They are serialized with the rest of the
/// directory and therefore survive snapshot reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCounters {
    pub employees: u32,
    pub departments: u32,
    pub designations: u32,
    pub locations: u32,
    pub teams: u32,
    pub holidays: u32,
    pub policies: u32,
}

fn format_id(prefix: &str, n: u32) -> String {
    format!("{prefix}{n:03}")
}

/// Normalized collections of organisational entities and the company
/// record.  Collections are kept newest-first: `add_*` prepends, only
/// bulk import appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub designations: Vec<Designation>,
    pub locations: Vec<Location>,
    pub teams: Vec<Team>,
    pub holidays: Vec<Holiday>,
    pub policies: Vec<Policy>,
    pub company: Company,
    #[serde(default)]
    counters: IdCounters,
}

impl Directory {
    /// Creates an empty directory with all counters at zero.
    pub fn new(company: Company) -> Self {
        Directory {
            employees: Vec::new(),
            departments: Vec::new(),
            designations: Vec::new(),
            locations: Vec::new(),
            teams: Vec::new(),
            holidays: Vec::new(),
            policies: Vec::new(),
            company,
            counters: IdCounters::default(),
        }
    }

    // --- employees ---

    /// Adds an employee and returns the assigned id, e.g. `"EMP004"`.
    pub fn add_employee(&mut self, new: NewEmployee) -> String {
        self.counters.employees += 1;
        let id = format_id("EMP", self.counters.employees);
        self.employees.insert(0, new.into_employee(id.clone()));
        id
    }

    /// Appends many employees in one call, assigning consecutive ids
    /// in input order.  Unlike [`add_employee`](Self::add_employee),
    /// imported records land at the end of the collection.
    pub fn bulk_import_employees(&mut self, batch: Vec<NewEmployee>) -> Vec<String> {
        let mut ids = Vec::with_capacity(batch.len());
        for new in batch {
            self.counters.employees += 1;
            let id = format_id("EMP", self.counters.employees);
            self.employees.push(new.into_employee(id.clone()));
            ids.push(id);
        }
        ids
    }

    pub fn update_employee(&mut self, id: &str, patch: &EmployeePatch) {
        if let Some(employee) = self.employees.iter_mut().find(|e| e.id == id) {
            patch.apply_to(employee);
        }
    }

    pub fn delete_employee(&mut self, id: &str) {
        self.employees.retain(|e| e.id != id);
    }

    // --- departments ---

    pub fn add_department(&mut self, new: NewDepartment) -> String {
        self.counters.departments += 1;
        let id = format_id("DEPT", self.counters.departments);
        self.departments.insert(
            0,
            Department {
                id: id.clone(),
                name: new.name,
                head_id: new.head_id,
                is_active: true,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    pub fn update_department(&mut self, id: &str, patch: &DepartmentPatch) {
        if let Some(department) = self.departments.iter_mut().find(|d| d.id == id) {
            patch.apply_to(department);
        }
    }

    pub fn delete_department(&mut self, id: &str) {
        self.departments.retain(|d| d.id != id);
    }

    // --- designations ---

    pub fn add_designation(&mut self, new: NewDesignation) -> String {
        self.counters.designations += 1;
        let id = format_id("DES", self.counters.designations);
        self.designations.insert(
            0,
            Designation {
                id: id.clone(),
                name: new.name,
                grade: new.grade,
                is_active: true,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    pub fn update_designation(&mut self, id: &str, patch: &DesignationPatch) {
        if let Some(designation) = self.designations.iter_mut().find(|d| d.id == id) {
            patch.apply_to(designation);
        }
    }

    pub fn delete_designation(&mut self, id: &str) {
        self.designations.retain(|d| d.id != id);
    }

    // --- locations ---

    pub fn add_location(&mut self, new: NewLocation) -> String {
        self.counters.locations += 1;
        let id = format_id("LOC", self.counters.locations);
        self.locations.insert(
            0,
            Location {
                id: id.clone(),
                name: new.name,
                city: new.city,
                country: new.country,
                is_active: true,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    pub fn update_location(&mut self, id: &str, patch: &LocationPatch) {
        if let Some(location) = self.locations.iter_mut().find(|l| l.id == id) {
            patch.apply_to(location);
        }
    }

    pub fn delete_location(&mut self, id: &str) {
        self.locations.retain(|l| l.id != id);
    }

    // --- teams ---

    pub fn add_team(&mut self, new: NewTeam) -> String {
        self.counters.teams += 1;
        let id = format_id("TEAM", self.counters.teams);
        self.teams.insert(
            0,
            Team {
                id: id.clone(),
                name: new.name,
                lead_id: new.lead_id,
                // Passed through as given; only add_team_member dedupes.
                member_ids: new.member_ids,
                stats: new.stats.unwrap_or_default(),
            },
        );
        id
    }

    pub fn update_team(&mut self, id: &str, patch: &TeamPatch) {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == id) {
            patch.apply_to(team);
        }
    }

    pub fn delete_team(&mut self, id: &str) {
        self.teams.retain(|t| t.id != id);
    }

    /// Adds `employee_id` to the team's member list.  Idempotent: a
    /// member already present is not added again, and an unknown team
    /// id is a no-op.
    pub fn add_team_member(&mut self, team_id: &str, employee_id: &str) {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
            if !team.member_ids.iter().any(|m| m == employee_id) {
                team.member_ids.push(employee_id.to_string());
            }
        }
    }

    /// Removes `employee_id` from the team's member list.  Idempotent.
    pub fn remove_team_member(&mut self, team_id: &str, employee_id: &str) {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
            team.member_ids.retain(|m| m != employee_id);
        }
    }

    // --- holidays ---

    pub fn add_holiday(&mut self, new: NewHoliday) -> String {
        self.counters.holidays += 1;
        let id = format_id("HOL", self.counters.holidays);
        self.holidays.insert(
            0,
            Holiday {
                id: id.clone(),
                name: new.name,
                date: new.date,
                kind: new.kind,
                location_id: new.location_id,
            },
        );
        id
    }

    pub fn update_holiday(&mut self, id: &str, patch: &HolidayPatch) {
        if let Some(holiday) = self.holidays.iter_mut().find(|h| h.id == id) {
            patch.apply_to(holiday);
        }
    }

    pub fn delete_holiday(&mut self, id: &str) {
        self.holidays.retain(|h| h.id != id);
    }

    // --- policies ---

    pub fn add_policy(&mut self, new: NewPolicy) -> String {
        self.counters.policies += 1;
        let id = format_id("POL", self.counters.policies);
        self.policies.insert(
            0,
            Policy {
                id: id.clone(),
                name: new.name,
                category: new.category,
                description: new.description,
                effective_from: new.effective_from,
            },
        );
        id
    }

    pub fn update_policy(&mut self, id: &str, patch: &PolicyPatch) {
        if let Some(policy) = self.policies.iter_mut().find(|p| p.id == id) {
            patch.apply_to(policy);
        }
    }

    pub fn delete_policy(&mut self, id: &str) {
        self.policies.retain(|p| p.id != id);
    }

    // --- company ---

    /// Shallow-merges the patch into the singleton company record.
    pub fn update_company(&mut self, patch: &CompanyPatch) {
        patch.apply_to(&mut self.company);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus, EmploymentType, TeamStats};
    use chrono::NaiveDate;

    fn company() -> Company {
        Company {
            name: "Acme".into(),
            legal_name: "Acme Pvt Ltd".into(),
            industry: "Software".into(),
            website: "https://acme.example".into(),
            headquarters: "Pune".into(),
            founded_year: 2012,
        }
    }

    fn new_employee(name: &str, department_id: &str) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            email: format!("{}@acme.example", name.to_lowercase()),
            phone: "+91 98000 00000".into(),
            status: EmployeeStatus::Active,
            employment_type: EmploymentType::FullTime,
            department_id: department_id.into(),
            designation_id: "DES001".into(),
            location_id: "LOC001".into(),
            reporting_manager_id: None,
            date_of_joining: NaiveDate::from_ymd_opt(2023, 4, 10).unwrap(),
            exit_date: None,
            exit_reason: None,
        }
    }

    #[test]
    fn add_assigns_id_and_prepends() {
        let mut dir = Directory::new(company());
        let first = dir.add_employee(new_employee("Asha", "DEPT001"));
        let second = dir.add_employee(new_employee("Bilal", "DEPT001"));
        assert_eq!(first, "EMP001");
        assert_eq!(second, "EMP002");
        // Newest-first ordering.
        assert_eq!(dir.employees[0].id, "EMP002");
        assert_eq!(dir.employees[1].id, "EMP001");
        assert_eq!(dir.employees[0].name, "Bilal");
    }

    #[test]
    fn add_preserves_input_fields() {
        let mut dir = Directory::new(company());
        let input = new_employee("Asha", "DEPT002");
        let id = dir.add_employee(input.clone());
        let stored = &dir.employees[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, input.name);
        assert_eq!(stored.email, input.email);
        assert_eq!(stored.department_id, input.department_id);
        assert_eq!(stored.date_of_joining, input.date_of_joining);
        assert_eq!(stored.exit_date, None);
    }

    #[test]
    fn update_touches_only_named_fields_on_matching_record() {
        let mut dir = Directory::new(company());
        dir.add_employee(new_employee("Asha", "DEPT001"));
        dir.add_employee(new_employee("Bilal", "DEPT002"));
        let untouched_before = dir.employees[0].clone();

        dir.update_employee(
            "EMP001",
            &EmployeePatch {
                status: Some(EmployeeStatus::OnNotice),
                ..Default::default()
            },
        );

        let updated = dir.employees.iter().find(|e| e.id == "EMP001").unwrap();
        assert_eq!(updated.status, EmployeeStatus::OnNotice);
        assert_eq!(updated.name, "Asha");
        assert_eq!(updated.department_id, "DEPT001");
        assert_eq!(dir.employees[0], untouched_before);
    }

    #[test]
    fn update_clears_nested_optional_with_explicit_null() {
        let mut dir = Directory::new(company());
        let mut hire = new_employee("Asha", "DEPT001");
        hire.exit_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        hire.exit_reason = Some("Relocation".into());
        dir.add_employee(hire);

        dir.update_employee(
            "EMP001",
            &EmployeePatch {
                exit_date: Some(None),
                exit_reason: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(dir.employees[0].exit_date, None);
        assert_eq!(dir.employees[0].exit_reason, None);
    }

    #[test]
    fn update_unknown_id_is_a_silent_noop() {
        let mut dir = Directory::new(company());
        dir.add_employee(new_employee("Asha", "DEPT001"));
        let before = dir.employees.clone();
        dir.update_employee(
            "EMP999",
            &EmployeePatch {
                name: Some("Ghost".into()),
                ..Default::default()
            },
        );
        assert_eq!(dir.employees, before);
    }

    #[test]
    fn delete_removes_exactly_one_and_unknown_id_removes_none() {
        let mut dir = Directory::new(company());
        dir.add_employee(new_employee("Asha", "DEPT001"));
        dir.add_employee(new_employee("Bilal", "DEPT001"));
        dir.delete_employee("EMP001");
        assert_eq!(dir.employees.len(), 1);
        assert_eq!(dir.employees[0].id, "EMP002");

        let before = dir.employees.clone();
        dir.delete_employee("EMP001");
        assert_eq!(dir.employees, before);
    }

    #[test]
    fn ids_are_never_reused_across_delete_add_cycles() {
        let mut dir = Directory::new(company());
        dir.add_employee(new_employee("Asha", "DEPT001"));
        dir.add_employee(new_employee("Bilal", "DEPT001"));
        dir.add_employee(new_employee("Chitra", "DEPT001"));

        // Two separate delete+add cycles; a length-derived scheme
        // would hand back an id that is still live.
        dir.delete_employee("EMP002");
        let fourth = dir.add_employee(new_employee("Dev", "DEPT001"));
        assert_eq!(fourth, "EMP004");

        dir.delete_employee("EMP003");
        let fifth = dir.add_employee(new_employee("Esha", "DEPT001"));
        assert_eq!(fifth, "EMP005");

        let mut ids: Vec<&str> = dir.employees.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), dir.employees.len());
    }

    #[test]
    fn bulk_import_appends_in_input_order_with_consecutive_ids() {
        let mut dir = Directory::new(company());
        dir.add_employee(new_employee("Asha", "DEPT001"));
        dir.add_employee(new_employee("Bilal", "DEPT001"));

        let ids = dir.bulk_import_employees(vec![
            new_employee("Chitra", "DEPT002"),
            new_employee("Dev", "DEPT002"),
        ]);
        assert_eq!(ids, vec!["EMP003".to_string(), "EMP004".to_string()]);
        // Imports land at the end, in input order.
        assert_eq!(dir.employees[dir.employees.len() - 2].id, "EMP003");
        assert_eq!(dir.employees[dir.employees.len() - 1].id, "EMP004");
        assert_eq!(dir.employees[dir.employees.len() - 2].name, "Chitra");
    }

    #[test]
    fn department_creation_defaults_are_directory_assigned() {
        let mut dir = Directory::new(company());
        let id = dir.add_department(NewDepartment {
            name: "Engineering".into(),
            head_id: None,
        });
        assert_eq!(id, "DEPT001");
        let department = &dir.departments[0];
        assert!(department.is_active);
        assert!(department.head_id.is_none());
    }

    #[test]
    fn deleting_a_department_leaves_employee_references_in_place() {
        let mut dir = Directory::new(company());
        dir.add_department(NewDepartment {
            name: "Engineering".into(),
            head_id: None,
        });
        dir.add_employee(new_employee("Asha", "DEPT001"));

        dir.delete_department("DEPT001");
        assert!(dir.departments.is_empty());
        // No cascade: the foreign key dangles.
        assert_eq!(dir.employees[0].department_id, "DEPT001");
    }

    #[test]
    fn add_team_member_is_idempotent() {
        let mut dir = Directory::new(company());
        dir.add_team(NewTeam {
            name: "Platform".into(),
            lead_id: "EMP001".into(),
            member_ids: vec!["EMP001".into()],
            stats: None,
        });

        dir.add_team_member("TEAM001", "EMP002");
        dir.add_team_member("TEAM001", "EMP002");
        let team = &dir.teams[0];
        let occurrences = team.member_ids.iter().filter(|m| *m == "EMP002").count();
        assert_eq!(occurrences, 1);
        assert_eq!(team.member_ids, vec!["EMP001", "EMP002"]);
    }

    #[test]
    fn remove_team_member_is_idempotent() {
        let mut dir = Directory::new(company());
        dir.add_team(NewTeam {
            name: "Platform".into(),
            lead_id: "EMP001".into(),
            member_ids: vec!["EMP001".into(), "EMP002".into()],
            stats: None,
        });

        dir.remove_team_member("TEAM001", "EMP002");
        dir.remove_team_member("TEAM001", "EMP002");
        assert_eq!(dir.teams[0].member_ids, vec!["EMP001"]);
        // Unknown team id is a no-op.
        dir.remove_team_member("TEAM999", "EMP001");
    }

    #[test]
    fn team_construction_keeps_supplied_member_list_verbatim() {
        let mut dir = Directory::new(company());
        dir.add_team(NewTeam {
            name: "Platform".into(),
            lead_id: "EMP001".into(),
            member_ids: vec!["EMP001".into(), "EMP001".into()],
            stats: None,
        });
        // Dedup only happens on add_team_member, not at construction.
        assert_eq!(dir.teams[0].member_ids.len(), 2);
        assert_eq!(dir.teams[0].stats, TeamStats::default());
    }

    #[test]
    fn update_company_is_a_shallow_merge() {
        let mut dir = Directory::new(company());
        dir.update_company(&CompanyPatch {
            headquarters: Some("Bengaluru".into()),
            ..Default::default()
        });
        assert_eq!(dir.company.headquarters, "Bengaluru");
        assert_eq!(dir.company.name, "Acme");
        assert_eq!(dir.company.founded_year, 2012);
    }

    #[test]
    fn every_collection_generates_its_own_prefix() {
        let mut dir = Directory::new(company());
        assert_eq!(
            dir.add_designation(NewDesignation {
                name: "Engineer".into(),
                grade: Some("L3".into()),
            }),
            "DES001"
        );
        assert_eq!(
            dir.add_location(NewLocation {
                name: "HQ".into(),
                city: "Pune".into(),
                country: "India".into(),
            }),
            "LOC001"
        );
        assert_eq!(
            dir.add_holiday(NewHoliday {
                name: "Republic Day".into(),
                date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
                kind: crate::models::HolidayKind::Public,
                location_id: None,
            }),
            "HOL001"
        );
        assert_eq!(
            dir.add_policy(NewPolicy {
                name: "Leave Policy".into(),
                category: crate::models::PolicyCategory::Leave,
                description: "Annual and casual leave entitlements.".into(),
                effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            }),
            "POL001"
        );
    }
}
