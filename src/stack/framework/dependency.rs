//! Framework detection by dependency tokens in manifests

use super::{FrameworkProbe, ProbeContext, ProbeMatch};
use crate::stack::{FrameworkId, LanguageId};
use anyhow::Result;

/// Matches a framework when any manifest mentions one of its tokens
///
/// Matching is a case-insensitive substring search over the raw manifest
/// text. `markers` are files whose mere presence identifies the framework.
pub struct DependencyTokenProbe {
    pub framework: FrameworkId,
    pub languages: &'static [LanguageId],
    pub manifests: &'static [&'static str],
    pub tokens: &'static [&'static str],
    pub markers: &'static [&'static str],
}

impl FrameworkProbe for DependencyTokenProbe {
    fn id(&self) -> &str {
        self.framework.key()
    }

    fn languages(&self) -> &[LanguageId] {
        self.languages
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        if self.markers.iter().any(|m| ctx.has(m)) {
            return Ok(Some(ProbeMatch::framework(self.framework.name())));
        }

        for pattern in self.manifests {
            for manifest in ctx.direct_matches(pattern) {
                let content = ctx.read(manifest)?.to_lowercase();
                if self.tokens.iter().any(|t| content.contains(t)) {
                    return Ok(Some(ProbeMatch::framework(self.framework.name())));
                }
            }
        }
        Ok(None)
    }
}

const JVM: &[LanguageId] = &[LanguageId::Java, LanguageId::Kotlin];
const JVM_MANIFESTS: &[&str] = &["pom.xml", "build.gradle", "build.gradle.kts"];
const NODE: &[LanguageId] = &[LanguageId::JavaScript, LanguageId::TypeScript];
const PYTHON_MANIFESTS: &[&str] = &[
    "requirements.txt",
    "pyproject.toml",
    "Pipfile",
    "setup.py",
    "setup.cfg",
];
const DOTNET: &[LanguageId] = &[
    LanguageId::CSharp,
    LanguageId::FSharp,
    LanguageId::VisualBasic,
];

macro_rules! token_probe {
    ($framework:ident, $languages:expr, $manifests:expr, [$($token:literal),+ $(,)?]) => {
        token_probe!($framework, $languages, $manifests, [$($token),+], [])
    };
    ($framework:ident, $languages:expr, $manifests:expr, [$($token:literal),+ $(,)?], [$($marker:literal),*]) => {
        DependencyTokenProbe {
            framework: FrameworkId::$framework,
            languages: $languages,
            manifests: $manifests,
            tokens: &[$($token),+],
            markers: &[$($marker),*],
        }
    };
}

pub fn default_dependency_probes() -> Vec<DependencyTokenProbe> {
    vec![
        token_probe!(Quarkus, JVM, JVM_MANIFESTS, ["io.quarkus"]),
        token_probe!(Spring, JVM, JVM_MANIFESTS, ["org.springframework"]),
        token_probe!(Micronaut, JVM, JVM_MANIFESTS, ["io.micronaut"]),
        token_probe!(
            OpenLiberty,
            JVM,
            JVM_MANIFESTS,
            ["io.openliberty", "liberty-maven-plugin", "liberty-gradle-plugin"]
        ),
        token_probe!(Vertx, JVM, JVM_MANIFESTS, ["io.vertx"]),
        token_probe!(Express, NODE, &["package.json"], ["\"express\""]),
        token_probe!(React, NODE, &["package.json"], ["\"react\""]),
        token_probe!(NextJs, NODE, &["package.json"], ["\"next\""]),
        token_probe!(Angular, NODE, &["package.json"], ["\"@angular/core\""]),
        token_probe!(Vue, NODE, &["package.json"], ["\"vue\""]),
        token_probe!(
            Django,
            &[LanguageId::Python],
            PYTHON_MANIFESTS,
            ["django"],
            ["manage.py"]
        ),
        token_probe!(Flask, &[LanguageId::Python], PYTHON_MANIFESTS, ["flask"]),
        token_probe!(FastApi, &[LanguageId::Python], PYTHON_MANIFESTS, ["fastapi"]),
        token_probe!(Gin, &[LanguageId::Go], &["go.mod"], ["github.com/gin-gonic/gin"]),
        token_probe!(Echo, &[LanguageId::Go], &["go.mod"], ["github.com/labstack/echo"]),
        token_probe!(FastHttp, &[LanguageId::Go], &["go.mod"], ["github.com/valyala/fasthttp"]),
        token_probe!(
            Beego,
            &[LanguageId::Go],
            &["go.mod"],
            ["github.com/beego/beego", "github.com/astaxie/beego"]
        ),
        token_probe!(GoFiber, &[LanguageId::Go], &["go.mod"], ["github.com/gofiber/fiber"]),
        token_probe!(Mux, &[LanguageId::Go], &["go.mod"], ["github.com/gorilla/mux"]),
        token_probe!(
            AspNetCore,
            DOTNET,
            &["*.csproj", "*.fsproj", "*.vbproj"],
            ["microsoft.net.sdk.web", "microsoft.aspnetcore"]
        ),
        token_probe!(Rails, &[LanguageId::Ruby], &["Gemfile"], ["'rails'", "\"rails\""]),
        token_probe!(Sinatra, &[LanguageId::Ruby], &["Gemfile"], ["sinatra"]),
        token_probe!(Laravel, &[LanguageId::Php], &["composer.json"], ["laravel/framework"]),
        token_probe!(
            Symfony,
            &[LanguageId::Php],
            &["composer.json"],
            ["symfony/framework-bundle", "symfony/symfony"]
        ),
        token_probe!(ActixWeb, &[LanguageId::Rust], &["Cargo.toml"], ["actix-web"]),
        token_probe!(Axum, &[LanguageId::Rust], &["Cargo.toml"], ["axum"]),
        token_probe!(Phoenix, &[LanguageId::Elixir], &["mix.exs"], [":phoenix"]),
    ]
}
