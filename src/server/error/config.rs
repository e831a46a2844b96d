use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined and
    /// non-empty. Check the `.env` file or the hosting platform's variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The service-account key is not a valid JSON key document.
    #[error("GCP_SA_KEY is not a valid service account key: {source}")]
    InvalidServiceAccountKey {
        #[source]
        source: serde_json::Error,
    },
}
