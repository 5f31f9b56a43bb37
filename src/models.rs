//! Data models for the Org Engine.
//!
//! The `models` module defines the serialisable structs and enums
//! representing the organisation directory: employees, departments,
//! designations, locations, teams, holidays, policies and the company
//! record.  These data types derive `Serialize` and `Deserialize` so
//! that they can be persisted as snapshots or transmitted over a
//! network.  JSON field names are camelCase to match the directory's
//! consumers.
//!
//! Alongside each entity there is a `New*` input type (everything the
//! caller supplies at creation time; the directory assigns the rest)
//! and a `*Patch` type (typed partial update, one `Option` per
//! patchable field).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an employee.  Transitions are unconstrained:
/// any status may be set at any time through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On Notice")]
    OnNotice,
    Exited,
    #[serde(rename = "On Leave")]
    OnLeave,
}

/// Contractual employment arrangement of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Contract,
    Intern,
}

/// Represents an employee in the organisation directory.
///
/// Foreign keys (`department_id`, `designation_id`, `location_id`,
/// `reporting_manager_id`) are plain identifiers; the directory does
/// not enforce that they resolve, and deleting the referenced entity
/// leaves them dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Directory-assigned identifier, e.g. `"EMP004"`.  Doubles as the
    /// employee code shown on badges and payroll exports.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: EmployeeStatus,
    pub employment_type: EmploymentType,
    /// Identifier of the department this employee belongs to.
    pub department_id: String,
    pub designation_id: String,
    pub location_id: String,
    /// Identifier of the employee this one reports to, if any.  A
    /// self-reference into the employee collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<String>,
    pub date_of_joining: NaiveDate,
    /// Exit metadata, present once an exit has been recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<String>,
}

/// Caller-supplied fields for creating an employee.  The directory
/// assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: EmployeeStatus,
    pub employment_type: EmploymentType,
    pub department_id: String,
    pub designation_id: String,
    pub location_id: String,
    #[serde(default)]
    pub reporting_manager_id: Option<String>,
    pub date_of_joining: NaiveDate,
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    #[serde(default)]
    pub exit_reason: Option<String>,
}

impl NewEmployee {
    pub(crate) fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            employment_type: self.employment_type,
            department_id: self.department_id,
            designation_id: self.designation_id,
            location_id: self.location_id,
            reporting_manager_id: self.reporting_manager_id,
            date_of_joining: self.date_of_joining,
            exit_date: self.exit_date,
            exit_reason: self.exit_reason,
        }
    }
}

/// Typed partial update for an employee.  `None` leaves the field
/// unchanged.  Fields that are themselves optional on [`Employee`] use
/// a nested `Option`, so JSON `null` clears the value while an absent
/// key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<Option<String>>,
}

impl EmployeePatch {
    /// Shallow-merges the patch into `target`.
    pub fn apply_to(&self, target: &mut Employee) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.email {
            target.email = v.clone();
        }
        if let Some(v) = &self.phone {
            target.phone = v.clone();
        }
        if let Some(v) = self.status {
            target.status = v;
        }
        if let Some(v) = self.employment_type {
            target.employment_type = v;
        }
        if let Some(v) = &self.department_id {
            target.department_id = v.clone();
        }
        if let Some(v) = &self.designation_id {
            target.designation_id = v.clone();
        }
        if let Some(v) = &self.location_id {
            target.location_id = v.clone();
        }
        if let Some(v) = &self.reporting_manager_id {
            target.reporting_manager_id = v.clone();
        }
        if let Some(v) = self.date_of_joining {
            target.date_of_joining = v;
        }
        if let Some(v) = self.exit_date {
            target.exit_date = v;
        }
        if let Some(v) = &self.exit_reason {
            target.exit_reason = v.clone();
        }
    }
}

/// A department within the organisation.
///
/// Membership counts are never stored on the record; they are derived
/// live from the employee collection by the metrics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    /// Employee id of the department head, if one is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_id: Option<String>,
    /// Assigned by the directory at creation time.
    pub is_active: bool,
    /// Assigned by the directory at creation time.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub name: String,
    #[serde(default)]
    pub head_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DepartmentPatch {
    pub fn apply_to(&self, target: &mut Department) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.head_id {
            target.head_id = v.clone();
        }
        if let Some(v) = self.is_active {
            target.is_active = v;
        }
    }
}

/// A job designation (title) employees hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub id: String,
    pub name: String,
    /// Optional seniority grade, e.g. `"L4"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDesignation {
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DesignationPatch {
    pub fn apply_to(&self, target: &mut Designation) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.grade {
            target.grade = v.clone();
        }
        if let Some(v) = self.is_active {
            target.is_active = v;
        }
    }
}

/// An office location employees can be based at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl LocationPatch {
    pub fn apply_to(&self, target: &mut Location) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.city {
            target.city = v.clone();
        }
        if let Some(v) = &self.country {
            target.country = v.clone();
        }
        if let Some(v) = self.is_active {
            target.is_active = v;
        }
    }
}

/// Display-only activity figures attached to a team.  The directory
/// stores whatever it is given and never derives these from other
/// collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub velocity: f64,
    pub tasks_completed: u32,
    pub uptime_pct: f64,
}

/// A working team led by one employee.
///
/// `member_ids` keeps insertion order.  Duplicates are prevented when
/// members are added through [`add_team_member`], but a team may be
/// constructed with whatever list the caller supplies.
///
/// [`add_team_member`]: crate::directory::Directory::add_team_member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Employee id of the team lead.
    pub lead_id: String,
    pub member_ids: Vec<String>,
    pub stats: TeamStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub lead_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    /// Defaults to zeroed stats when omitted.
    #[serde(default)]
    pub stats: Option<TeamStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TeamStats>,
}

impl TeamPatch {
    pub fn apply_to(&self, target: &mut Team) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.lead_id {
            target.lead_id = v.clone();
        }
        if let Some(v) = &self.member_ids {
            target.member_ids = v.clone();
        }
        if let Some(v) = &self.stats {
            target.stats = v.clone();
        }
    }
}

/// Classification of a holiday in the company calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayKind {
    Public,
    Optional,
    Company,
}

/// A calendar holiday, optionally scoped to a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub kind: HolidayKind,
    /// When set, the holiday applies only to employees at this
    /// location; otherwise it is company-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHoliday {
    pub name: String,
    pub date: NaiveDate,
    pub kind: HolidayKind,
    #[serde(default)]
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<HolidayKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Option<String>>,
}

impl HolidayPatch {
    pub fn apply_to(&self, target: &mut Holiday) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = self.date {
            target.date = v;
        }
        if let Some(v) = self.kind {
            target.kind = v;
        }
        if let Some(v) = &self.location_id {
            target.location_id = v.clone();
        }
    }
}

/// Subject area a policy document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyCategory {
    Leave,
    Conduct,
    Payroll,
    #[serde(rename = "IT")]
    It,
}

/// A company policy reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub category: PolicyCategory,
    pub description: String,
    pub effective_from: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    pub name: String,
    pub category: PolicyCategory,
    pub description: String,
    pub effective_from: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PolicyCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<NaiveDate>,
}

impl PolicyPatch {
    pub fn apply_to(&self, target: &mut Policy) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = self.category {
            target.category = v;
        }
        if let Some(v) = &self.description {
            target.description = v.clone();
        }
        if let Some(v) = self.effective_from {
            target.effective_from = v;
        }
    }
}

/// The company record.  A singleton: the directory holds exactly one
/// and updates merge into it rather than replacing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub legal_name: String,
    pub industry: String,
    pub website: String,
    pub headquarters: String,
    pub founded_year: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
}

impl CompanyPatch {
    pub fn apply_to(&self, target: &mut Company) {
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.legal_name {
            target.legal_name = v.clone();
        }
        if let Some(v) = &self.industry {
            target.industry = v.clone();
        }
        if let Some(v) = &self.website {
            target.website = v.clone();
        }
        if let Some(v) = &self.headquarters {
            target.headquarters = v.clone();
        }
        if let Some(v) = self.founded_year {
            target.founded_year = v;
        }
    }
}
