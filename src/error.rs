use thiserror::Error;

/// Validation failures raised before any pixel is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("icon size for entry '{label}' must be greater than zero")]
    ZeroSize { label: String },

    #[error("icon size {size} for entry '{label}' exceeds the {max}px limit")]
    TooLarge { label: String, size: u32, max: u32 },

    #[error("size table is empty, nothing to generate")]
    EmptyTable,
}
