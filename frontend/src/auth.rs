//! 认证模块
//!
//! 把核心库的 `AuthSession` 映射为响应式信号。
//! 会话存储的每次变更（包括刷新失败导致的清除）都会同步到信号，
//! 路由服务通过注入的用户信号执行守卫。

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic::config::{BASE_URL_VAR, LOGIN_ROUTE_VAR};
use vetclinic::{ApiClient, ApiResult, AuthSession, ClientConfig, SessionStore};
use vetclinic_shared::UserInfo;
use vetclinic_shared::protocol::{LoginRequest, RegisterRequest};

use crate::web::{BrowserNavigator, BrowserStorage, FetchHttpClient};

pub type Client = ApiClient<FetchHttpClient, BrowserStorage, BrowserNavigator>;
type Session = AuthSession<FetchHttpClient, BrowserStorage, BrowserNavigator>;

/// 构建期注入的部署配置
fn client_config() -> ClientConfig {
    ClientConfig::from_vars(|name| match name {
        BASE_URL_VAR => option_env!("VETCLINIC_API_BASE_URL").map(String::from),
        LOGIN_ROUTE_VAR => option_env!("VETCLINIC_LOGIN_ROUTE").map(String::from),
        _ => None,
    })
}

/// 认证上下文
///
/// 全部字段都是 `Copy` 的句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Rc<Session>, LocalStorage>,
    user: RwSignal<Option<UserInfo>>,
    authenticated: RwSignal<bool>,
    loading: RwSignal<bool>,
}

impl AuthContext {
    /// 从 localStorage 恢复会话并创建上下文
    pub fn new() -> Self {
        let store = Rc::new(SessionStore::load(BrowserStorage));
        let snapshot = store.snapshot();

        let user = RwSignal::new(snapshot.user.clone());
        let authenticated = RwSignal::new(snapshot.is_authenticated());
        store.subscribe(move |s| {
            user.set(s.user.clone());
            authenticated.set(s.is_authenticated());
        });

        let client = ApiClient::new(FetchHttpClient, store, BrowserNavigator, client_config());
        let auth = AuthSession::new(Rc::new(client));

        let loading = RwSignal::new(auth.is_loading());
        auth.subscribe_loading(move |l| loading.set(l));

        Self {
            session: StoredValue::new_local(Rc::new(auth)),
            user,
            authenticated,
            loading,
        }
    }

    /// 共享的 API 客户端
    pub fn client(&self) -> Rc<Client> {
        self.session.with_value(|s| Rc::clone(s.client()))
    }

    pub fn user(&self) -> Signal<Option<UserInfo>> {
        self.user.into()
    }

    /// 以令牌是否存在判断
    pub fn is_authenticated(&self) -> Signal<bool> {
        self.authenticated.into()
    }

    /// 由核心会话的进行中标记驱动
    pub fn is_loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    pub async fn login(self, credentials: LoginRequest) -> ApiResult<UserInfo> {
        let session = self.session.get_value();
        session.login(&credentials).await
    }

    pub async fn register(self, user: RegisterRequest) -> ApiResult<UserInfo> {
        let session = self.session.get_value();
        session.register(&user).await
    }

    /// 本地状态立即清除，服务端通知在后台完成
    pub fn logout(&self) {
        let notify = self.session.with_value(|s| s.logout());
        spawn_local(notify);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
