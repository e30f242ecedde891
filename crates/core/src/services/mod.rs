pub mod analytics_service;
pub mod format_service;
pub mod goal_service;
pub mod insight_service;
pub mod metrics_service;
pub mod period_service;
pub mod record_service;
pub mod scenario_service;
