use super::framework::{
    default_dependency_probes, default_name_probes, default_tool_probes, FrameworkProbe,
};
use super::language::*;
use super::LanguageId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Ordered collection of language descriptors and framework probes
///
/// Registration order is significant: it is the tie-break priority between
/// equally scored languages and the evaluation order of probes.
pub struct StackRegistry {
    languages: Vec<Arc<dyn LanguageDefinition>>,
    extensions: HashMap<String, Vec<usize>>,
    probes: Vec<Arc<dyn FrameworkProbe>>,
}

impl StackRegistry {
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extensions: HashMap::new(),
            probes: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let languages: [Arc<dyn LanguageDefinition>; 14] = [
            Arc::new(JavaLanguage),
            Arc::new(KotlinLanguage),
            Arc::new(JavaScriptLanguage),
            Arc::new(TypeScriptLanguage),
            Arc::new(PythonLanguage),
            Arc::new(CSharpLanguage),
            Arc::new(FSharpLanguage),
            Arc::new(VisualBasicLanguage),
            Arc::new(GoLanguage),
            Arc::new(RustLanguage),
            Arc::new(RubyLanguage),
            Arc::new(PhpLanguage),
            Arc::new(CppLanguage),
            Arc::new(ElixirLanguage),
        ];
        for language in languages {
            registry.register_language(language);
        }

        for probe in default_name_probes() {
            registry.register_probe(Arc::new(probe));
        }
        for probe in default_dependency_probes() {
            registry.register_probe(Arc::new(probe));
        }
        for probe in default_tool_probes() {
            registry.register_probe(Arc::from(probe));
        }

        registry
    }

    /// Process-wide default registry, built on first use
    pub fn shared() -> Arc<StackRegistry> {
        static SHARED: OnceLock<Arc<StackRegistry>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(StackRegistry::with_defaults()))
            .clone()
    }

    /// Adds a descriptor, replacing one with the same id in place
    pub fn register_language(&mut self, language: Arc<dyn LanguageDefinition>) {
        let id = language.id();
        match self.languages.iter().position(|l| l.id() == id) {
            Some(index) => self.languages[index] = language,
            None => self.languages.push(language),
        }
        self.rebuild_extension_index();
    }

    pub fn register_probe(&mut self, probe: Arc<dyn FrameworkProbe>) {
        self.probes.push(probe);
    }

    fn rebuild_extension_index(&mut self) {
        self.extensions.clear();
        for (index, language) in self.languages.iter().enumerate() {
            for ext in language.extensions() {
                self.extensions
                    .entry(ext.to_ascii_lowercase())
                    .or_default()
                    .push(index);
            }
        }
    }

    pub fn languages(&self) -> &[Arc<dyn LanguageDefinition>] {
        &self.languages
    }

    pub fn get_language(&self, id: &LanguageId) -> Option<&Arc<dyn LanguageDefinition>> {
        self.languages.iter().find(|l| &l.id() == id)
    }

    /// Descriptors claiming `ext` (without dot, case-insensitive), in priority order
    pub fn languages_for_extension(&self, ext: &str) -> Vec<&Arc<dyn LanguageDefinition>> {
        self.extensions
            .get(&ext.to_ascii_lowercase())
            .map(|indices| indices.iter().map(|&i| &self.languages[i]).collect())
            .unwrap_or_default()
    }

    pub fn languages_for_interpreter(&self, interpreter: &str) -> Vec<&Arc<dyn LanguageDefinition>> {
        self.languages
            .iter()
            .filter(|l| l.interpreters().contains(&interpreter))
            .collect()
    }

    /// True if any descriptor lists `file_name` as a manifest
    pub fn is_manifest(&self, file_name: &str) -> bool {
        self.languages.iter().any(|l| l.is_manifest(file_name))
    }

    /// Probes applicable to `language`, in registration order
    pub fn probes_for<'a>(
        &'a self,
        language: &'a LanguageId,
    ) -> impl Iterator<Item = &'a Arc<dyn FrameworkProbe>> + 'a {
        self.probes.iter().filter(move |p| p.applies_to(language))
    }

    /// Registration index; unknown languages sort last
    pub fn priority_of(&self, id: &LanguageId) -> usize {
        self.languages
            .iter()
            .position(|l| &l.id() == id)
            .unwrap_or(usize::MAX)
    }
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
