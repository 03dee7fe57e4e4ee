//! The service boundary: upload, segmentation and recomposition.

use super::{
    ApiError, ApplyColorsRequest, ApplyColorsResponse, ProcessResponse, UploadFile,
    UploadResponse,
};

/// The external service the workflow talks to.
///
/// The session never calls this directly; it emits a request, the adapter
/// runs it against a `Collaborator` and feeds the reply back in. Tests use
/// an in-memory implementation.
pub trait Collaborator {
    /// Upload a room photo.
    fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ApiError>;

    /// Segment the last uploaded photo.
    fn process_image(&self) -> Result<ProcessResponse, ApiError>;

    /// Recolor the photo with the committed segment colors.
    fn apply_colors(&self, request: &ApplyColorsRequest)
    -> Result<ApplyColorsResponse, ApiError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpCollaborator;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use reqwest::blocking::multipart::{Form, Part};
    use reqwest::blocking::{Client, RequestBuilder};
    use serde::de::DeserializeOwned;
    use web_time::Instant;

    use super::Collaborator;
    use crate::api::{
        ApiError, ApplyColorsRequest, ApplyColorsResponse, ProcessResponse, UploadFile,
        UploadResponse, decode_reply,
    };
    use crate::constants::{UPLOAD_FIELD, endpoint};

    /// Blocking HTTP client for the segmentation service.
    #[derive(Debug, Clone)]
    pub struct HttpCollaborator {
        client: Client,
        base_url: String,
    }

    impl HttpCollaborator {
        /// Create a client for the service at `base_url`.
        pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
            let client = Client::builder().timeout(timeout).build()?;
            Ok(Self {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            })
        }

        /// Service base URL, without a trailing slash.
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        fn send<T: DeserializeOwned>(
            &self,
            path: &str,
            request: RequestBuilder,
        ) -> Result<T, ApiError> {
            let started = Instant::now();
            let response = request.send()?;
            let status = response.status();
            let body = response.text()?;
            log::debug!(
                "🌐 POST {} -> {} in {:.1?} ({} bytes)",
                path,
                status,
                started.elapsed(),
                body.len()
            );

            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            decode_reply(&body)
        }
    }

    impl Collaborator for HttpCollaborator {
        fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            let form = Form::new().part(UPLOAD_FIELD, part);
            let request = self.client.post(self.url(endpoint::UPLOAD)).multipart(form);
            self.send(endpoint::UPLOAD, request)
        }

        fn process_image(&self) -> Result<ProcessResponse, ApiError> {
            let request = self.client.post(self.url(endpoint::PROCESS_IMAGE));
            self.send(endpoint::PROCESS_IMAGE, request)
        }

        fn apply_colors(
            &self,
            request: &ApplyColorsRequest,
        ) -> Result<ApplyColorsResponse, ApiError> {
            let request = self
                .client
                .post(self.url(endpoint::APPLY_COLORS))
                .json(request);
            self.send(endpoint::APPLY_COLORS, request)
        }
    }

}
