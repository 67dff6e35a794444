use vetclinic::Navigator;

/// 整页跳转：应用重新加载并从已清空的存储恢复
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::warn!(path, error = ?e, "Redirect failed");
            }
        }
    }
}
