use std::sync::LazyLock;

use crate::StaticRegistry;

/// The registry data compiled into the binary.
pub const EMBEDDED_REGISTRY_TOML: &str = include_str!("../data/superchain.toml");

static EMBEDDED_REGISTRY: LazyLock<StaticRegistry> = LazyLock::new(|| {
    StaticRegistry::from_toml_str(EMBEDDED_REGISTRY_TOML)
        .expect("embedded registry data is validated by tests")
});

/// Returns the registry compiled into the binary.
///
/// The data is parsed on first access and immutable afterwards.
pub fn embedded_registry() -> &'static StaticRegistry {
    &EMBEDDED_REGISTRY
}
