//! 宠物医院前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫落点（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod alert;
    pub mod animal_form;
    pub mod animals;
    pub mod appointments;
    mod form_state;
    pub mod home;
    pub mod login;
    pub mod medical_records;
    pub mod navbar;
    pub mod profile;
    pub mod register;
    pub mod reports;
    pub mod staff;
}
pub mod logging;

use crate::auth::AuthContext;
use crate::components::animal_form::AddAnimalPage;
use crate::components::animals::AnimalsPage;
use crate::components::appointments::AppointmentsPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::medical_records::MedicalRecordsPage;
use crate::components::navbar::Navbar;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::reports::ReportsPage;
use crate::components::staff::StaffPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 浏览器侧的传输、存储与跳转实现，注入到核心库的 trait 中。
pub(crate) mod web {
    mod http;
    mod navigator;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use navigator::BrowserNavigator;
    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Animals => view! { <AnimalsPage /> }.into_any(),
        AppRoute::AddAnimal => view! { <AddAnimalPage /> }.into_any(),
        AppRoute::Appointments => view! { <AppointmentsPage /> }.into_any(),
        AppRoute::MedicalRecords => view! { <MedicalRecordsPage /> }.into_any(),
        AppRoute::Staff => view! { <StaffPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 localStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 用户信号注入路由服务，由路由执行守卫
    let user = auth_ctx.user();

    view! {
        <Router user=user>
            <Navbar />
            <main class="min-h-screen bg-base-200 p-4 md:p-8">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
