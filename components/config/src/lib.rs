use std::path::Path;

pub extern crate paste;
pub extern crate serde;
pub extern crate tracing;

pub mod util;

/// Declares a configuration section with per-field defaults and optional environment overrides.
///
/// ```ignore
/// config::section! {
///     #[serde(default)]
///     pub struct Output {
///         /// Where to write the documents
///         pub dir: PathBuf = "./dist/emoji".into() => "EMOJI_OUTPUT_DIR",
///     }
/// }
/// ```
#[macro_export]
macro_rules! section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {$(
            $(#[$field_meta:meta])*
            $field_vis:vis $field_name:ident : $field_ty:ty = $field_default:expr
                $(=> $field_env:literal
                    $(| $func:path
                        $([  $($param:expr),* ])?
                    )?
                )?
        ),*$(,)?}
    ) => { $crate::paste::paste! {
        #[derive(Debug, Clone, $crate::serde::Deserialize)]
        $(#[$meta])*
        #[serde(deny_unknown_fields)]
        $vis struct $name {$(
            $(#[$field_meta])*
            $(
                #[doc = ""]
                #[doc = "**Overridden by the `" $field_env "` environment variable.**"]
            )?
            $field_vis $field_name: $field_ty,
        )*}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                $name {$(
                    $field_name: $field_default,
                )*}
            }
        }

        impl $crate::Configuration for $name {
            fn configure(&mut self) {
                $($(
                    if let Ok(value) = std::env::var($field_env) {
                        $crate::tracing::debug!("Applying environment overwrite for {}.{}=>{}", stringify!($name), stringify!($field_name), $field_env);
                        self.$field_name = ($($func(&value $( $(,$param)* )? ),)? value , ).0.into();
                    }
                )?)*
            }
        }
    }};
}

/// Composes sections into a root configuration
#[macro_export]
macro_rules! config {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {$(
            $(#[$field_meta:meta])*
            $field:ident: $field_ty:ty
        ),*$(,)?}
    ) => {
        $(#[$meta])*
        #[derive(Default, Debug, Clone, $crate::serde::Deserialize)]
        #[serde(deny_unknown_fields, default)]
        $vis struct $name {
            $($(#[$field_meta])* pub $field: $field_ty,)*
        }

        impl $crate::Configuration for $name {
            fn configure(&mut self) {
                $($crate::Configuration::configure(&mut self.$field);)*
            }
        }
    };
}

pub trait Configuration: serde::de::DeserializeOwned {
    /// Applies any environmental overrides and adjustments
    fn configure(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("TOML Parse Error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),
}

enum Format {
    TOML,
    JSON,
}

fn get_format(path: &Path) -> Format {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::JSON,
        _ => Format::TOML,
    }
}

/// Reads a configuration file, TOML unless the extension says JSON.
///
/// Environment overrides are not applied here, call [`Configuration::configure`] afterwards.
pub fn load<C: Configuration>(path: impl AsRef<Path>) -> Result<C, ConfigError> {
    let path = path.as_ref();

    let file = std::fs::read_to_string(path)?;

    Ok(match get_format(path) {
        Format::TOML => toml::from_str(&file)?,
        Format::JSON => serde_json::from_str(&file)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::section! {
        #[serde(default)]
        pub struct Sample {
            pub name: String = "default".to_owned() => "CONFIG_TEST_SAMPLE_NAME",
            pub width: usize = 4 => "CONFIG_TEST_SAMPLE_WIDTH" | crate::util::parse[4usize],
            pub untouched: bool = true,
        }
    }

    crate::config! {
        pub struct Root {
            sample: Sample,
        }
    }

    #[test]
    fn test_defaults() {
        let root = Root::default();

        assert_eq!(root.sample.name, "default");
        assert_eq!(root.sample.width, 4);
        assert!(root.sample.untouched);
    }

    #[test]
    fn test_partial_toml() {
        let root: Root = toml::from_str("[sample]\nwidth = 2\n").unwrap();

        assert_eq!(root.sample.width, 2);
        assert_eq!(root.sample.name, "default");

        assert!(toml::from_str::<Root>("[sample]\nheight = 2\n").is_err());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("CONFIG_TEST_SAMPLE_NAME", "overridden");
        std::env::set_var("CONFIG_TEST_SAMPLE_WIDTH", "not a number");

        let mut root = Root::default();
        root.configure();

        assert_eq!(root.sample.name, "overridden");
        // unparsable values fall back to the given default
        assert_eq!(root.sample.width, 4);

        std::env::remove_var("CONFIG_TEST_SAMPLE_NAME");
        std::env::remove_var("CONFIG_TEST_SAMPLE_WIDTH");
    }

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join(format!("config_test_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "sample": { "name": "from json" } }"#).unwrap();

        let root: Root = load(&path).unwrap();
        assert_eq!(root.sample.name, "from json");

        std::fs::remove_file(&path).unwrap();

        assert!(matches!(load::<Root>(&path), Err(ConfigError::IOError(_))));
    }
}
