/// The Kotlin standard library. Its metadata omits most native targets even
/// though it is published for all of them.
pub const FOUNDATIONAL_GROUP: &str = "org.jetbrains.kotlin";
pub const FOUNDATIONAL_ARTIFACT: &str = "kotlin-stdlib";

pub const DEFAULT_SOURCE_SET: &str = "commonMain";
pub const DEFAULT_OUTPUT_DIR: &str = "build/reports/kmp-missing-targets";
pub const DEFAULT_CONFIG_FILE: &str = "kmpmt.toml";
pub const CONFIG_ENV: &str = "KMPMT_CONFIG";

pub const API_USAGES: [&str; 2] = ["kotlin-api", "java-api"];

/// Kotlin/Native targets as `(konan name, deprecated)`.
pub const NATIVE_TARGETS: &[(&str, bool)] = &[
    ("android_arm32", false),
    ("android_arm64", false),
    ("android_x64", false),
    ("android_x86", false),
    ("ios_arm32", true),
    ("ios_arm64", false),
    ("ios_simulator_arm64", false),
    ("ios_x64", false),
    ("linux_arm32_hfp", true),
    ("linux_arm64", false),
    ("linux_mips32", true),
    ("linux_mipsel32", true),
    ("linux_x64", false),
    ("macos_arm64", false),
    ("macos_x64", false),
    ("mingw_x64", false),
    ("mingw_x86", true),
    ("tvos_arm64", false),
    ("tvos_simulator_arm64", false),
    ("tvos_x64", false),
    ("wasm32", true),
    ("watchos_arm32", false),
    ("watchos_arm64", false),
    ("watchos_device_arm64", false),
    ("watchos_simulator_arm64", false),
    ("watchos_x64", false),
    ("watchos_x86", true),
];
