//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、访问要求以及导航时的最终落点。

use std::fmt::Display;

use vetclinic::{GuardDecision, check};
use vetclinic_shared::{Role, UserInfo};

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页统计 (需要登录)
    #[default]
    Home,
    Login,
    Register,
    Animals,
    AddAnimal,
    Appointments,
    MedicalRecords,
    /// 员工管理 (仅管理员)
    Staff,
    /// 报表 (仅管理员)
    Reports,
    Profile,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/animals" => Self::Animals,
            "/animals/new" => Self::AddAnimal,
            "/appointments" => Self::Appointments,
            "/medical-records" => Self::MedicalRecords,
            "/staff" => Self::Staff,
            "/reports" => Self::Reports,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Animals => "/animals",
            Self::AddAnimal => "/animals/new",
            Self::Appointments => "/appointments",
            Self::MedicalRecords => "/medical-records",
            Self::Staff => "/staff",
            Self::Reports => "/reports",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// 无需登录即可访问
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 访问所需角色，None 表示登录即可
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Staff | Self::Reports => Some(Role::Admin),
            _ => None,
        }
    }

    /// 已登录用户是否应该离开此路由
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// **核心守卫逻辑：计算导航的最终落点**
    ///
    /// 未通过守卫的目标转到登录页；已登录用户访问登录/注册页时转到首页，
    /// 因此已登录但角色不符的用户最终落在首页。
    pub fn resolve(self, user: Option<&UserInfo>) -> Self {
        let signed_in = check(user, None) == GuardDecision::Render;

        let target = if self.is_public() {
            self
        } else {
            match check(user, self.required_role().as_ref()) {
                GuardDecision::Render => self,
                GuardDecision::RedirectToLogin => Self::Login,
            }
        };

        if signed_in && target.should_redirect_when_authenticated() {
            Self::Home
        } else {
            target
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 1,
            username: "vet1".into(),
            email: None,
            full_name: None,
            role,
        }
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Animals,
            AppRoute::AddAnimal,
            AppRoute::MedicalRecords,
            AppRoute::Reports,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/staff/"), AppRoute::Staff);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        assert_eq!(AppRoute::Animals.resolve(None), AppRoute::Login);
        assert_eq!(AppRoute::Reports.resolve(None), AppRoute::Login);
        assert_eq!(AppRoute::Register.resolve(None), AppRoute::Register);
    }

    #[test]
    fn test_signed_in_users_leave_login() {
        let staff = user(Role::User);
        assert_eq!(AppRoute::Login.resolve(Some(&staff)), AppRoute::Home);
        assert_eq!(AppRoute::Animals.resolve(Some(&staff)), AppRoute::Animals);
    }

    #[test]
    fn test_admin_only_pages() {
        let staff = user(Role::User);
        let admin = user(Role::Admin);
        assert_eq!(AppRoute::Staff.resolve(Some(&staff)), AppRoute::Home);
        assert_eq!(AppRoute::Staff.resolve(Some(&admin)), AppRoute::Staff);
        assert_eq!(AppRoute::Reports.resolve(Some(&admin)), AppRoute::Reports);
    }
}
