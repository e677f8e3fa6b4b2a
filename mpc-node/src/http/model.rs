pub mod api {
    use rocket::serde::{Deserialize, Serialize};

    /// The document returned by the application root.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(crate = "rocket::serde")]
    pub struct Index {
        pub metadata: Metadata,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(crate = "rocket::serde")]
    pub struct Metadata {
        pub name: String,
        pub version: String,
        pub description: String,
    }

    impl Index {
        pub fn new(app_name: &str) -> Self {
            Self {
                metadata: Metadata {
                    name: app_name.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    description: env!("CARGO_PKG_DESCRIPTION").to_string(),
                },
            }
        }
    }
}
