crate::define_id_enum_with_display! {
    /// Programming language identifier
    LanguageId {
        Java => "java" : "Java",
        Kotlin => "kotlin" : "Kotlin" | "kt",
        JavaScript => "javascript" : "JavaScript" | "js" | "node" | "nodejs",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Python => "python" : "Python" | "py" | "python3",
        CSharp => "csharp" : "C#" | "csharp" | "cs",
        FSharp => "fsharp" : "F#" | "fsharp",
        VisualBasic => "vbnet" : "Visual Basic .NET" | "vb.net" | "vbnet" | "visual basic",
        Go => "go" : "Go" | "golang",
        Rust => "rust" : "Rust" | "rs",
        Ruby => "ruby" : "Ruby" | "rb",
        Php => "php" : "PHP",
        Cpp => "cpp" : "C++" | "cpp" | "c",
        Elixir => "elixir" : "Elixir" | "ex",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(LanguageId::CSharp.name(), "C#");
        assert_eq!(LanguageId::VisualBasic.to_string(), "Visual Basic .NET");
        assert_eq!(LanguageId::Custom("Zig".to_string()).name(), "Zig");
    }

    #[test]
    fn test_from_name_accepts_aliases() {
        assert_eq!(LanguageId::from_name("node"), Some(LanguageId::JavaScript));
        assert_eq!(LanguageId::from_name("JAVA"), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_name("golang"), Some(LanguageId::Go));
        assert_eq!(LanguageId::from_name("cobol"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&LanguageId::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");

        let parsed: LanguageId = serde_json::from_str("\"zig\"").unwrap();
        assert_eq!(parsed, LanguageId::Custom("zig".to_string()));
    }
}
