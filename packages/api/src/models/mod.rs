//! # Backend data models
//!
//! Request and response bodies of the dashboard backend, with its camelCase
//! field names. The signed-in user ([`store::UserIdentity`]) lives in the
//! `store` crate because it is persisted with the session.
//!
//! | Module | Types |
//! |--------|-------|
//! | `agent` | [`Agent`], [`NewAgent`] |
//! | `manager` | [`Manager`], [`NewManager`] |
//! | `report` | [`AgentReport`], [`ReportPeriod`] |
//! | `dashboard` | [`DashboardSummary`] and its chart series |
//! | `profile` | [`Profile`] |
//! | `notification` | [`Notification`], [`NotificationFeed`] |

mod agent;
mod dashboard;
mod manager;
mod notification;
mod profile;
mod report;

pub use agent::{Agent, NewAgent};
pub(crate) use agent::AgentList;
pub use dashboard::{DashboardSummary, PerformanceMetrics, PerformanceSlice, WeeklyPoint};
pub use manager::{Manager, NewManager};
pub use notification::{Notification, NotificationFeed};
pub use profile::{Profile, ProfileRole};
pub(crate) use report::ReportList;
pub use report::{AgentReport, ReportPeriod};
