//! Types shared by several v1 resources.

/// Declares a string-valued enum that maps the values it knows to variants
/// and keeps any other value verbatim in an `Unknown(String)` variant.
///
/// The generated type serializes back to exactly the string it was read
/// from, so records survive a decode and re-encode unchanged.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value added after this crate was released, kept as sent.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value,
                }
            }

            /// Returns `true` for values this crate has no variant for.
            #[must_use]
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unknown(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// The platform a review submission or app store version targets.
    ///
    /// Values this crate does not know yet decode as [`Platform::Unknown`]
    /// and are sent back unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_store_connect::rest::resources::v1::Platform;
    ///
    /// let platform: Platform = serde_json::from_str("\"MAC_OS\"").unwrap();
    /// assert_eq!(platform, Platform::MacOs);
    /// assert_eq!(platform.as_str(), "MAC_OS");
    ///
    /// let future: Platform = serde_json::from_str("\"WATCH_OS\"").unwrap();
    /// assert_eq!(future, Platform::Unknown("WATCH_OS".to_string()));
    /// assert_eq!(serde_json::to_string(&future).unwrap(), "\"WATCH_OS\"");
    /// ```
    pub enum Platform {
        /// iOS and iPadOS.
        Ios => "IOS",
        /// macOS.
        MacOs => "MAC_OS",
        /// tvOS.
        TvOs => "TV_OS",
        /// visionOS.
        VisionOs => "VISION_OS",
    }
}
