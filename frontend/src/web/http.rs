//! fetch 传输层
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient`，非 2xx 响应原样交回客户端处理。

use vetclinic::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse, MultipartFile, RequestBody};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestCredentials, RequestInit, Response};

fn build_error(context: &str, e: JsValue) -> ApiError {
    ApiError::RequestBuild(format!("{}: {:?}", context, e))
}

fn network_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    /// 构造 multipart 表单，Content-Type 与边界由浏览器生成
    fn multipart_form(file: &MultipartFile) -> ApiResult<FormData> {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&bytes);

        let bag = BlobPropertyBag::new();
        bag.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)
            .map_err(|e| build_error("创建 Blob 失败", e))?;

        let form = FormData::new().map_err(|e| build_error("创建 FormData 失败", e))?;
        form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(|e| build_error("添加文件失败", e))?;
        Ok(form)
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| build_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| build_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if req.with_credentials {
            opts.set_credentials(RequestCredentials::Include);
        }
        match &req.body {
            Some(RequestBody::Json(text)) => opts.set_body(&JsValue::from_str(text)),
            Some(RequestBody::Multipart(file)) => opts.set_body(&Self::multipart_form(file)?.into()),
            None => {}
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| build_error("创建请求失败", e))?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        let status = resp.status();
        let text = resp.text().map_err(network_error)?;
        let body = JsFuture::from(text)
            .await
            .map_err(network_error)?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
