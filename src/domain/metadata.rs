//! Gradle module metadata (`*.module`) as far as target detection needs it.
//!
//! Only the attributes below are read; every other key in the document is
//! ignored so newer metadata revisions keep parsing.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    pub format_version: String,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub name: String,
    pub attributes: VariantAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantAttributes {
    #[serde(rename = "org.gradle.docstype", default)]
    pub docs_type: Option<String>,
    #[serde(rename = "org.gradle.usage", default)]
    pub usage: Option<String>,
    #[serde(rename = "org.jetbrains.kotlin.platform.type", default)]
    pub platform_type: Option<String>,
    #[serde(rename = "org.jetbrains.kotlin.native.target", default)]
    pub native_target: Option<String>,
    #[serde(rename = "org.jetbrains.kotlin.wasm.target", default)]
    pub wasm_target: Option<String>,
}

impl ModuleDescriptor {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether this document uses a metadata format this tool understands.
    pub fn is_supported_format(&self) -> bool {
        self.format_version.split('.').next() == Some("1")
    }
}
