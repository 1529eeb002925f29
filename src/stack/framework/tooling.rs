//! Build tool and platform version probes

use super::{FrameworkProbe, ProbeContext, ProbeMatch};
use crate::stack::LanguageId;
use anyhow::{Context, Result};
use tracing::debug;

/// Reports `tool` when any of `manifests` sits in the component root
///
/// With `content_token` set, a manifest only counts if its text contains
/// the token (pyproject.toml is Poetry only with a `[tool.poetry]` table).
pub struct BuildToolProbe {
    pub tool: &'static str,
    pub languages: &'static [LanguageId],
    pub manifests: &'static [&'static str],
    pub content_token: Option<&'static str>,
}

impl FrameworkProbe for BuildToolProbe {
    fn id(&self) -> &str {
        self.tool
    }

    fn languages(&self) -> &[LanguageId] {
        self.languages
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        for pattern in self.manifests {
            for manifest in ctx.direct_matches(pattern) {
                let matched = match self.content_token {
                    Some(token) => ctx.read(manifest)?.contains(token),
                    None => true,
                };
                if matched {
                    return Ok(Some(ProbeMatch::tool(self.tool)));
                }
            }
        }
        Ok(None)
    }
}

/// npm, Yarn, pnpm or Bun, from `packageManager` or the lockfile
pub struct NodePackageManagerProbe;

impl NodePackageManagerProbe {
    const LOCKFILES: &'static [(&'static str, &'static str)] = &[
        ("pnpm-lock.yaml", "pnpm"),
        ("yarn.lock", "yarn"),
        ("bun.lockb", "bun"),
        ("bun.lock", "bun"),
        ("package-lock.json", "npm"),
        ("npm-shrinkwrap.json", "npm"),
    ];
}

impl FrameworkProbe for NodePackageManagerProbe {
    fn id(&self) -> &str {
        "node-package-manager"
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::JavaScript, LanguageId::TypeScript]
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        let Some(manifest) = ctx.direct_matches("package.json").into_iter().next() else {
            return Ok(None);
        };

        let json: serde_json::Value = serde_json::from_str(&ctx.read(manifest)?)
            .context("Failed to parse package.json")?;
        if let Some(declared) = json.get("packageManager").and_then(|v| v.as_str()) {
            let tool = declared.split('@').next().unwrap_or(declared);
            if !tool.is_empty() {
                return Ok(Some(ProbeMatch::tool(tool)));
            }
        }

        let tool = Self::LOCKFILES
            .iter()
            .find(|(lockfile, _)| ctx.has(lockfile))
            .map(|(_, tool)| *tool)
            .unwrap_or("npm");
        Ok(Some(ProbeMatch::tool(tool)))
    }
}

/// `go 1.15` directive of go.mod, reported as the `Go 1.15` tool
pub struct GoVersionProbe;

impl FrameworkProbe for GoVersionProbe {
    fn id(&self) -> &str {
        "go-version"
    }

    fn languages(&self) -> &[LanguageId] {
        &[LanguageId::Go]
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        let Some(manifest) = ctx.direct_matches("go.mod").into_iter().next() else {
            return Ok(None);
        };
        let content = ctx.read(manifest)?;
        let version = content
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("go "))
            .map(str::trim)
            .find(|v| !v.is_empty());
        Ok(version.map(|v| ProbeMatch::tool(format!("Go {}", v))))
    }
}

/// Each `TargetFramework(s)` entry of a .NET project file becomes a framework
pub struct DotNetTargetFrameworkProbe;

impl FrameworkProbe for DotNetTargetFrameworkProbe {
    fn id(&self) -> &str {
        "dotnet-target-framework"
    }

    fn languages(&self) -> &[LanguageId] {
        &[
            LanguageId::CSharp,
            LanguageId::FSharp,
            LanguageId::VisualBasic,
        ]
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        let mut frameworks = Vec::new();
        for pattern in ["*.csproj", "*.fsproj", "*.vbproj"] {
            for project in ctx.direct_matches(pattern) {
                let content = ctx.read(project)?;
                let doc = roxmltree::Document::parse(&content)
                    .with_context(|| format!("Failed to parse {:?}", project))?;
                for node in doc.descendants().filter(|n| {
                    n.is_element()
                        && matches!(n.tag_name().name(), "TargetFramework" | "TargetFrameworks")
                }) {
                    for target in node.text().unwrap_or_default().split(';') {
                        let target = target.trim();
                        if !target.is_empty() && !frameworks.iter().any(|f| f == target) {
                            frameworks.push(target.to_string());
                        }
                    }
                }
            }
        }

        if frameworks.is_empty() {
            return Ok(None);
        }
        debug!(targets = ?frameworks, "Resolved .NET target frameworks");
        Ok(Some(ProbeMatch {
            frameworks,
            ..ProbeMatch::default()
        }))
    }
}

const JVM: &[LanguageId] = &[LanguageId::Java, LanguageId::Kotlin];
const DOTNET: &[LanguageId] = &[
    LanguageId::CSharp,
    LanguageId::FSharp,
    LanguageId::VisualBasic,
];

fn tool(
    tool: &'static str,
    languages: &'static [LanguageId],
    manifests: &'static [&'static str],
) -> BuildToolProbe {
    BuildToolProbe {
        tool,
        languages,
        manifests,
        content_token: None,
    }
}

pub fn default_tool_probes() -> Vec<Box<dyn FrameworkProbe>> {
    vec![
        Box::new(tool("maven", JVM, &["pom.xml"])),
        Box::new(tool(
            "gradle",
            JVM,
            &[
                "build.gradle",
                "build.gradle.kts",
                "settings.gradle",
                "settings.gradle.kts",
            ],
        )),
        Box::new(tool("ant", &[LanguageId::Java], &["build.xml"])),
        Box::new(NodePackageManagerProbe),
        Box::new(BuildToolProbe {
            tool: "poetry",
            languages: &[LanguageId::Python],
            manifests: &["pyproject.toml"],
            content_token: Some("[tool.poetry]"),
        }),
        Box::new(tool("pipenv", &[LanguageId::Python], &["Pipfile"])),
        Box::new(tool(
            "pip",
            &[LanguageId::Python],
            &["requirements.txt", "setup.py"],
        )),
        Box::new(GoVersionProbe),
        Box::new(tool("dotnet", DOTNET, &["*.csproj", "*.fsproj", "*.vbproj"])),
        Box::new(DotNetTargetFrameworkProbe),
        Box::new(tool("cargo", &[LanguageId::Rust], &["Cargo.toml"])),
        Box::new(tool("bundler", &[LanguageId::Ruby], &["Gemfile"])),
        Box::new(tool("composer", &[LanguageId::Php], &["composer.json"])),
        Box::new(tool("mix", &[LanguageId::Elixir], &["mix.exs"])),
        Box::new(tool("cmake", &[LanguageId::Cpp], &["CMakeLists.txt"])),
        Box::new(tool("meson", &[LanguageId::Cpp], &["meson.build"])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    fn run(probe: &dyn FrameworkProbe, files: &[(&str, &str)]) -> Option<ProbeMatch> {
        let fs = MockFileSystem::new();
        let dir = PathBuf::from("/mock/app");
        let mut paths = Vec::new();
        for (name, content) in files {
            let path = dir.join(name);
            fs.add_file(&path, content);
            paths.push(path);
        }
        let ctx = ProbeContext::new(&dir, &paths, &fs);
        probe.evaluate(&ctx).unwrap()
    }

    #[test]
    fn test_go_version() {
        let found = run(
            &GoVersionProbe,
            &[("go.mod", "module example.com/app\n\ngo 1.15\n")],
        );
        assert_eq!(found, Some(ProbeMatch::tool("Go 1.15")));
    }

    #[test]
    fn test_go_version_missing_directive() {
        assert_eq!(run(&GoVersionProbe, &[("go.mod", "module app\n")]), None);
    }

    #[test]
    fn test_multi_target_frameworks() {
        let project = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFrameworks>net6.0;net5.0;netcoreapp3.1</TargetFrameworks>
  </PropertyGroup>
</Project>"#;
        let found = run(&DotNetTargetFrameworkProbe, &[("app.csproj", project)]).unwrap();
        assert_eq!(found.frameworks, vec!["net6.0", "net5.0", "netcoreapp3.1"]);
    }

    #[test]
    fn test_package_manager_field_wins_over_lockfile() {
        let found = run(
            &NodePackageManagerProbe,
            &[
                ("package.json", r#"{"packageManager": "pnpm@8.6.0"}"#),
                ("yarn.lock", ""),
            ],
        );
        assert_eq!(found, Some(ProbeMatch::tool("pnpm")));
    }

    #[test]
    fn test_package_manager_from_lockfile() {
        let found = run(
            &NodePackageManagerProbe,
            &[("package.json", "{}"), ("yarn.lock", "")],
        );
        assert_eq!(found, Some(ProbeMatch::tool("yarn")));

        let found = run(&NodePackageManagerProbe, &[("package.json", "{}")]);
        assert_eq!(found, Some(ProbeMatch::tool("npm")));
    }

    #[test]
    fn test_poetry_requires_tool_table() {
        let poetry = BuildToolProbe {
            tool: "poetry",
            languages: &[LanguageId::Python],
            manifests: &["pyproject.toml"],
            content_token: Some("[tool.poetry]"),
        };
        assert!(run(&poetry, &[("pyproject.toml", "[project]\nname = \"x\"\n")]).is_none());
        assert_eq!(
            run(&poetry, &[("pyproject.toml", "[tool.poetry]\nname = \"x\"\n")]),
            Some(ProbeMatch::tool("poetry"))
        );
    }
}
