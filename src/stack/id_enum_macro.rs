#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $serde_name:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(match s.as_str() {
                    $(
                        $serde_name => Self::$variant,
                    )*
                    _ => Self::Custom(s),
                })
            }
        }

        impl $enum_name {
            /// Identifier as serialized
            pub fn key(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $serde_name,
                    )*
                    Self::Custom(name) => name,
                }
            }

            pub fn name(&self) -> String {
                match self {
                    $(
                        Self::$variant => $display_name.to_string(),
                    )*
                    Self::Custom(name) => name.clone(),
                }
            }

            /// Case-insensitive synonyms accepted by `from_name`
            pub fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(
                        Self::$variant => &[$($alias),*],
                    )*
                    Self::Custom(_) => &[],
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::all_variants()
                    .iter()
                    .find(|id| {
                        id.name().eq_ignore_ascii_case(name)
                            || id.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
                    })
                    .cloned()
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }
    };
}

#[macro_export]
macro_rules! define_id_enum_with_display {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $serde_name:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $crate::define_id_enum! {
            $(#[$enum_meta])*
            $enum_name {
                $(
                    $(#[$variant_meta])*
                    $variant => $serde_name : $display_name
                    $( | $alias )*
                ),*
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}
