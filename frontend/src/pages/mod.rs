pub mod activity;
pub mod audit;
pub mod documents;
pub mod kpi;
pub mod upload;
pub mod users;
