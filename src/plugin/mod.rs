//! Host-runtime adapter for the image description plugin.
//!
//! The core VLM client returns a typed [`Result`](crate::error::Result); this
//! module is the single boundary where failures are rendered to text. The
//! agent sandbox that invokes the plugin consumes a textual result channel
//! only, so [`ViewImagePlugin::describe_image`] never fails — every error
//! kind becomes a descriptive string. Registration into a concrete host
//! plugin registry is left to a thin shim around [`PluginInfo`] and the
//! methods here.

use crate::config::{AppConfig, VlmConfig};
use crate::error::Result;
use crate::vlm::VlmClient;
use tracing::{error, info};

/// Static metadata a host shim can register with its plugin registry.
#[derive(Debug, Clone, Copy)]
pub struct PluginInfo {
    pub name: &'static str,
    pub module_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Image description tool",
    module_name: "img2text",
    description: "Gives models without multimodal vision the ability to understand images.",
    version: env!("CARGO_PKG_VERSION"),
};

/// The mounted plugin: one inbound operation plus a shutdown hook.
pub struct ViewImagePlugin {
    client: VlmClient,
}

impl ViewImagePlugin {
    pub fn new(config: VlmConfig) -> Self {
        Self {
            client: VlmClient::new(config),
        }
    }

    /// Construct the plugin from layered configuration (defaults, config
    /// file, `IMG2TEXT_*` environment variables).
    pub fn from_default_config() -> Result<Self> {
        let config = AppConfig::load()?;
        Ok(Self::new(config.vlm))
    }

    /// Describe an inline image.
    ///
    /// `image_data` must be a `data:image/<fmt>;base64,` string; only
    /// `jpeg`, `jpg` and `png` are supported. Returns the model's generated
    /// description, or a human-readable error text — this method never
    /// returns an error past the boundary.
    pub async fn describe_image(&self, image_data: &str) -> String {
        match self.client.describe(image_data).await {
            Ok(description) => description,
            Err(err) => {
                error!("describe_image failed: {}", err);
                err.to_user_text()
            }
        }
    }

    /// Resource-teardown hook invoked by the host runtime at shutdown.
    ///
    /// The network client is scoped per call, so there is nothing to
    /// release here.
    pub fn cleanup(&self) {
        info!("img2text plugin resources released");
    }
}
