pub mod dashboard;

pub mod results;

pub mod students;

pub mod system;

pub use dashboard::configure_dashboard_routes;
pub use results::configure_results_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_students_routes)
        .configure(configure_results_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_system_routes);
}
