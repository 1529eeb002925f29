use super::boundary::ComponentRoot;
use super::cancel::CancellationToken;
use super::recognizer::FrameworkRecognizer;
use super::types::Component;
use crate::error::DetectError;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Turns accepted roots into [`Component`]s, keeping their order
pub struct ComponentAssembler<'a> {
    recognizer: &'a FrameworkRecognizer<'a>,
    pool: &'a ThreadPool,
    cancel: &'a CancellationToken,
}

impl<'a> ComponentAssembler<'a> {
    pub fn new(
        recognizer: &'a FrameworkRecognizer<'a>,
        pool: &'a ThreadPool,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            recognizer,
            pool,
            cancel,
        }
    }

    pub fn assemble(&self, roots: Vec<ComponentRoot>) -> Result<Vec<Component>, DetectError> {
        self.pool.install(|| {
            roots
                .into_par_iter()
                .filter(|root| !root.languages.is_empty())
                .map(|root| self.assemble_one(root))
                .collect()
        })
    }

    fn assemble_one(&self, root: ComponentRoot) -> Result<Component, DetectError> {
        self.cancel.check()?;
        let primary = &root.languages[0].id;
        let recognition = self.recognizer.recognize(&root.root, primary, &root.files);

        Ok(Component {
            name: recognition.name,
            root_path: root.root,
            languages: root.languages,
            frameworks: recognition.frameworks,
            tools: recognition.tools,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::LanguageMatch;
    use crate::fs::MockFileSystem;
    use crate::stack::{LanguageId, StackRegistry};
    use rayon::ThreadPoolBuilder;
    use std::path::PathBuf;

    fn go_root(name: &str) -> ComponentRoot {
        let root = PathBuf::from("/mock").join(name);
        ComponentRoot {
            files: vec![root.join("go.mod"), root.join("main.go")],
            root,
            languages: vec![LanguageMatch {
                id: LanguageId::Go,
                name: "Go".to_string(),
                confidence: 1001.0,
                aliases: vec!["golang".to_string()],
                has_manifest: true,
            }],
        }
    }

    #[test]
    fn test_order_preserved() {
        let fs = MockFileSystem::new();
        for name in ["a", "b", "c"] {
            fs.add_file(format!("/mock/{}/go.mod", name), &format!("module example.com/{}-svc\n\ngo 1.21\n", name));
        }
        let registry = StackRegistry::with_defaults();
        let recognizer = FrameworkRecognizer::new(&registry, &fs);
        let pool = ThreadPoolBuilder::new().num_threads(3).build().unwrap();
        let cancel = CancellationToken::new();

        let components = ComponentAssembler::new(&recognizer, &pool, &cancel)
            .assemble(vec![go_root("a"), go_root("b"), go_root("c")])
            .unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a-svc", "b-svc", "c-svc"]);
        assert_eq!(components[1].tools, vec!["Go 1.21"]);
        assert_eq!(components[2].root_path, PathBuf::from("/mock/c"));
    }
}
