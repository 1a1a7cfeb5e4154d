// Method resolution: which installation methods a tool can use on this machine,
// best first.
//
// Candidates are the tool's base methods plus those its override block for the
// current OS adds. Methods whose driver is unavailable are dropped. The remaining
// list is ordered by the priority table, except that the tool's preferred method
// for this OS (the best available method from its override block) always leads.

use crate::installers::DriverTable;
use crate::libs::utilities::platform::PlatformSnapshot;
use crate::log_debug;
use crate::schemas::tools::{InstallConfig, InstallMethod, ToolRecord};

/// Available methods for `tool`, preferred override first, then by priority.
///
/// Ties keep declaration order: base methods in enum order, then override-only methods.
pub fn available_methods(
    tool: &ToolRecord,
    platform: &PlatformSnapshot,
    drivers: &DriverTable,
) -> Vec<InstallMethod> {
    let mut methods: Vec<InstallMethod> = tool
        .declared_methods(platform.os)
        .into_iter()
        .filter(|m| drivers.is_available(*m, platform))
        .collect();

    let preferred = preferred_override(tool, platform, drivers);
    // Stable: equal keys keep their declared relative order.
    methods.sort_by_key(|m| (Some(*m) != preferred, m.priority()));

    log_debug!(
        "[Resolver] {} on {}: declared={:?} available={:?} preferred={:?}",
        tool.name,
        platform.os,
        tool.declared_methods(platform.os),
        methods,
        preferred
    );
    methods
}

/// The override method that leads the list, if any override is available.
///
/// An override block naming several methods picks by priority, then enum order.
pub fn preferred_override(
    tool: &ToolRecord,
    platform: &PlatformSnapshot,
    drivers: &DriverTable,
) -> Option<InstallMethod> {
    tool.override_methods(platform.os)
        .into_iter()
        .filter(|m| drivers.is_available(*m, platform))
        .min_by_key(|m| (m.priority(), *m))
}

/// Configuration the driver receives for `method` on the snapshot's OS.
pub fn effective_config<'a>(
    tool: &'a ToolRecord,
    method: InstallMethod,
    platform: &PlatformSnapshot,
) -> Option<&'a InstallConfig> {
    tool.config_for(method, platform.os)
}

/// Declared methods that currently have no usable driver.
pub fn unavailable_methods(
    tool: &ToolRecord,
    platform: &PlatformSnapshot,
    drivers: &DriverTable,
) -> Vec<InstallMethod> {
    tool.declared_methods(platform.os)
        .into_iter()
        .filter(|m| !drivers.is_available(*m, platform))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::libs::utilities::platform::{ComposeFlavor, DockerStatus, HostTool};
    use crate::schemas::tools::{Category, Os};
    use InstallMethod::*;

    fn mac_with_brew() -> PlatformSnapshot {
        PlatformSnapshot::new(Os::Darwin).with_tool(HostTool::Brew)
    }

    fn platforms() -> Vec<PlatformSnapshot> {
        vec![
            PlatformSnapshot::new(Os::Darwin),
            mac_with_brew()
                .with_tool(HostTool::Npm)
                .with_tool(HostTool::Curl)
                .with_docker(DockerStatus::Running, ComposeFlavor::V2),
            PlatformSnapshot::new(Os::Linux)
                .with_tool(HostTool::AptGet)
                .with_tool(HostTool::Pip3)
                .with_tool(HostTool::Go)
                .with_docker(
                    DockerStatus::NotRunning {
                        detail: "Cannot connect to the Docker daemon".into(),
                    },
                    ComposeFlavor::Missing,
                ),
            PlatformSnapshot::new(Os::Windows)
                .with_tool(HostTool::Choco)
                .with_tool(HostTool::Scoop),
        ]
    }

    #[test]
    fn result_is_an_available_subsequence_of_declared_methods() {
        let catalog = Catalog::builtin();
        let drivers = DriverTable::new();
        for platform in platforms() {
            for tool in catalog.list() {
                let declared = tool.declared_methods(platform.os);
                let available = available_methods(tool, &platform, &drivers);
                for method in &available {
                    assert!(declared.contains(method), "{} {:?}", tool.name, method);
                    assert!(drivers.is_available(*method, &platform));
                }
                let mut deduped = available.clone();
                deduped.dedup();
                assert_eq!(deduped.len(), available.len());
            }
        }
    }

    #[test]
    fn available_override_always_leads() {
        let catalog = Catalog::builtin();
        let drivers = DriverTable::new();
        for platform in platforms() {
            for tool in catalog.list() {
                let available = available_methods(tool, &platform, &drivers);
                if let Some(preferred) = preferred_override(tool, &platform, &drivers) {
                    assert_eq!(available.first(), Some(&preferred), "{}", tool.name);
                }
            }
        }
    }

    #[test]
    fn ollama_on_macos_prefers_the_download_override() {
        let catalog = Catalog::builtin();
        let ollama = catalog.get("ollama").expect("ollama");
        let platform = mac_with_brew().with_tool(HostTool::Curl);
        assert_eq!(
            available_methods(ollama, &platform, &DriverTable::new()),
            vec![Download, Brew, Script]
        );
    }

    #[test]
    fn unavailable_override_falls_back_to_priority_order() {
        let catalog = Catalog::builtin();
        let docker = catalog.get("docker").expect("docker");
        // Linux override is `script`, which needs curl or wget.
        let platform = PlatformSnapshot::new(Os::Linux).with_tool(HostTool::Brew);
        assert_eq!(preferred_override(docker, &platform, &DriverTable::new()), None);
        assert_eq!(
            available_methods(docker, &platform, &DriverTable::new()),
            vec![Brew]
        );
    }

    #[test]
    fn priority_table_orders_the_rest() {
        let catalog = Catalog::builtin();
        let opencode = catalog.get("opencode").expect("opencode");
        let platform = mac_with_brew()
            .with_tool(HostTool::Npm)
            .with_tool(HostTool::Curl);
        assert_eq!(
            available_methods(opencode, &platform, &DriverTable::new()),
            vec![Brew, Npm, Script]
        );
    }

    #[test]
    fn override_only_methods_join_the_candidates() {
        let catalog = Catalog::builtin();
        let node = catalog.get("node").expect("node");
        let platform = PlatformSnapshot::new(Os::Linux).with_tool(HostTool::AptGet);
        assert_eq!(
            available_methods(node, &platform, &DriverTable::new()),
            vec![Apt]
        );
        assert_eq!(
            effective_config(node, Apt, &platform).map(|c| c.package.as_str()),
            Some("nodejs")
        );
    }

    #[test]
    fn several_overrides_pick_deterministically() {
        let tool = ToolRecord::new("multi", "two overrides", Category::Utility, "https://example.com")
            .method(Brew, InstallConfig::package("multi"))
            .override_for(Os::Linux, Download, InstallConfig::package("https://example.com/dl"))
            .override_for(Os::Linux, Pip, InstallConfig::package("multi"));
        let platform = PlatformSnapshot::new(Os::Linux)
            .with_tool(HostTool::Brew)
            .with_tool(HostTool::Pip);
        let drivers = DriverTable::new();
        assert_eq!(preferred_override(&tool, &platform, &drivers), Some(Pip));
        assert_eq!(
            available_methods(&tool, &platform, &drivers),
            vec![Pip, Brew, Download]
        );
    }

    #[test]
    fn nothing_available_gives_an_empty_list() {
        let catalog = Catalog::builtin();
        let claude = catalog.get("claude-code").expect("claude-code");
        let platform = PlatformSnapshot::new(Os::Darwin);
        assert!(available_methods(claude, &platform, &DriverTable::new()).is_empty());
        assert_eq!(
            unavailable_methods(claude, &platform, &DriverTable::new()),
            vec![Npm]
        );
    }

    #[test]
    fn docker_method_needs_a_running_daemon() {
        let catalog = Catalog::builtin();
        let lobechat = catalog.get("lobechat").expect("lobechat");
        let stopped = PlatformSnapshot::new(Os::Linux).with_docker(
            DockerStatus::NotRunning { detail: String::new() },
            ComposeFlavor::V2,
        );
        assert!(available_methods(lobechat, &stopped, &DriverTable::new()).is_empty());
        let running = PlatformSnapshot::new(Os::Linux)
            .with_docker(DockerStatus::Running, ComposeFlavor::V2);
        assert_eq!(
            available_methods(lobechat, &running, &DriverTable::new()),
            vec![Docker]
        );
    }
}
