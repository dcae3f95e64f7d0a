use crate::domain::constants::{API_USAGES, FOUNDATIONAL_ARTIFACT, FOUNDATIONAL_GROUP};
use crate::domain::coordinate::{LibraryCoordinate, TargetId};
use crate::domain::metadata::{ModuleDescriptor, Variant};
use crate::error::CheckError;
use crate::services::catalog::NativeCatalog;
use std::collections::BTreeSet;

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a konan target name to its Gradle target name:
/// `ios_simulator_arm64` becomes `iosSimulatorArm64`.
pub fn native_target_id(konan_name: &str) -> TargetId {
    let mut out = String::with_capacity(konan_name.len());
    for (i, part) in konan_name.split('_').enumerate() {
        if i == 0 {
            out.push_str(part);
        } else {
            out.push_str(&capitalize_first(part));
        }
    }
    TargetId(out)
}

pub fn is_foundational(coordinate: &LibraryCoordinate) -> bool {
    coordinate.is(FOUNDATIONAL_GROUP, FOUNDATIONAL_ARTIFACT)
}

fn variant_target(
    coordinate: &LibraryCoordinate,
    variant: &Variant,
) -> Result<Option<TargetId>, CheckError> {
    let attrs = &variant.attributes;
    if attrs.docs_type.is_some() {
        return Ok(None);
    }
    match attrs.usage.as_deref() {
        Some(usage) if API_USAGES.contains(&usage) => {}
        _ => return Ok(None),
    }

    let target = match attrs.platform_type.as_deref() {
        None | Some("common") => return Ok(None),
        Some("wasm") => {
            let suffix = attrs
                .wasm_target
                .as_deref()
                .map(capitalize_first)
                .unwrap_or_default();
            TargetId(format!("wasm{}", suffix))
        }
        Some("native") => {
            let konan = attrs.native_target.as_deref().ok_or_else(|| {
                CheckError::TargetExtraction {
                    coordinate: coordinate.clone(),
                    variant: variant.name.clone(),
                    reason: "has no Kotlin native target despite native platform type".to_string(),
                }
            })?;
            native_target_id(konan)
        }
        Some(other) => TargetId::from(other),
    };
    Ok(Some(target))
}

/// Computes the set of targets a library is published for.
///
/// Documentation variants, non-API variants and `common` metadata variants
/// carry no target. For `kotlin-stdlib` the native variants are replaced by
/// the native catalog because its metadata does not list them all.
pub fn extract_targets(
    coordinate: &LibraryCoordinate,
    descriptor: &ModuleDescriptor,
    catalog: &NativeCatalog,
) -> Result<BTreeSet<TargetId>, CheckError> {
    let foundational = is_foundational(coordinate);
    let mut targets = BTreeSet::new();

    for variant in &descriptor.variants {
        if foundational && variant.attributes.platform_type.as_deref() == Some("native") {
            continue;
        }
        if let Some(target) = variant_target(coordinate, variant)? {
            targets.insert(target);
        }
    }

    if foundational {
        targets.extend(catalog.substitute_targets());
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::{extract_targets, native_target_id};
    use crate::domain::coordinate::{LibraryCoordinate, TargetId};
    use crate::domain::metadata::ModuleDescriptor;
    use crate::error::CheckError;
    use crate::services::catalog::NativeCatalog;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn descriptor(variants: serde_json::Value) -> ModuleDescriptor {
        serde_json::from_value(json!({"formatVersion": "1.1", "variants": variants})).unwrap()
    }

    fn api(name: &str, platform: &str) -> serde_json::Value {
        json!({"name": name, "attributes": {
            "org.gradle.usage": "kotlin-api",
            "org.jetbrains.kotlin.platform.type": platform
        }})
    }

    fn ids(names: &[&str]) -> BTreeSet<TargetId> {
        names.iter().map(|n| TargetId::from(*n)).collect()
    }

    fn lib() -> LibraryCoordinate {
        LibraryCoordinate::new("org.example", "lib", "1.0")
    }

    #[test]
    fn one_variant_per_platform_family() {
        let d = descriptor(json!([
            {"name": "jvmApiElements", "attributes": {
                "org.gradle.usage": "java-api",
                "org.jetbrains.kotlin.platform.type": "jvm"}},
            api("jsApiElements", "js"),
            {"name": "wasmJsApiElements", "attributes": {
                "org.gradle.usage": "kotlin-api",
                "org.jetbrains.kotlin.platform.type": "wasm",
                "org.jetbrains.kotlin.wasm.target": "js"}},
            {"name": "linuxX64ApiElements", "attributes": {
                "org.gradle.usage": "kotlin-api",
                "org.jetbrains.kotlin.platform.type": "native",
                "org.jetbrains.kotlin.native.target": "linux_x64"}},
        ]));
        let targets = extract_targets(&lib(), &d, &NativeCatalog::builtin()).unwrap();
        assert_eq!(targets, ids(&["js", "jvm", "linuxX64", "wasmJs"]));
    }

    #[test]
    fn skips_docs_runtime_and_common_variants() {
        let d = descriptor(json!([
            api("metadataApiElements", "common"),
            {"name": "noPlatform", "attributes": {"org.gradle.usage": "kotlin-api"}},
            {"name": "jvmRuntimeElements", "attributes": {
                "org.gradle.usage": "java-runtime",
                "org.jetbrains.kotlin.platform.type": "jvm"}},
            {"name": "jvmSourcesElements", "attributes": {
                "org.gradle.docstype": "sources",
                "org.gradle.usage": "kotlin-api",
                "org.jetbrains.kotlin.platform.type": "jvm"}},
        ]));
        let targets = extract_targets(&lib(), &d, &NativeCatalog::builtin()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn wasm_without_kind_is_plain_wasm() {
        let d = descriptor(json!([api("wasmApiElements", "wasm")]));
        let targets = extract_targets(&lib(), &d, &NativeCatalog::builtin()).unwrap();
        assert_eq!(targets, ids(&["wasm"]));
    }

    #[test]
    fn native_variant_without_target_names_coordinate_and_variant() {
        let d = descriptor(json!([api("iosArm64ApiElements", "native")]));
        let err = extract_targets(&lib(), &d, &NativeCatalog::builtin()).unwrap_err();
        match &err {
            CheckError::TargetExtraction {
                coordinate,
                variant,
                ..
            } => {
                assert_eq!(coordinate, &lib());
                assert_eq!(variant, "iosArm64ApiElements");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("org.example:lib:1.0"));
    }

    #[test]
    fn duplicate_targets_collapse() {
        let d = descriptor(json!([api("jvmApi", "jvm"), api("jvmApi2", "jvm")]));
        let targets = extract_targets(&lib(), &d, &NativeCatalog::builtin()).unwrap();
        assert_eq!(targets, ids(&["jvm"]));
    }

    #[test]
    fn stdlib_gets_native_catalog_regardless_of_metadata() {
        let stdlib = LibraryCoordinate::new("org.jetbrains.kotlin", "kotlin-stdlib", "2.0.0");
        let d = descriptor(json!([
            api("jvmApiElements", "jvm"),
            api("jsApiElements", "js"),
            {"name": "bogusNative", "attributes": {
                "org.gradle.usage": "kotlin-api",
                "org.jetbrains.kotlin.platform.type": "native"}},
        ]));
        let catalog = NativeCatalog::builtin();
        let targets = extract_targets(&stdlib, &d, &catalog).unwrap();

        let mut expected = ids(&["js", "jvm"]);
        expected.extend(catalog.substitute_targets());
        assert_eq!(targets, expected);
        assert!(targets.contains(&TargetId::from("macosArm64")));
        assert!(!targets.contains(&TargetId::from("linuxMips32")));
    }

    #[test]
    fn naming_rule() {
        assert_eq!(native_target_id("linux_x64"), TargetId::from("linuxX64"));
        assert_eq!(
            native_target_id("watchos_device_arm64"),
            TargetId::from("watchosDeviceArm64")
        );
        assert_eq!(native_target_id("wasm32"), TargetId::from("wasm32"));
    }
}
