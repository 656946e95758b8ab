use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to read host config")]
    ConfigIo(#[source] std::io::Error),
    #[error("failed to parse host config")]
    ConfigParse(#[source] serde_json::Error),
}
