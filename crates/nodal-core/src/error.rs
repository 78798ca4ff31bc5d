use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodalError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
