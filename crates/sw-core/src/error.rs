use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum CoreReason {
    #[error("window configuration error")]
    WindowConfig,
    #[error("window lowering error")]
    Lowering,
    #[error("unsupported materialization")]
    Materialization,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for CoreReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::WindowConfig => 1001,
            Self::Lowering => 1002,
            Self::Materialization => 1003,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type CoreError = StructError<CoreReason>;
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(CoreReason::WindowConfig.error_code(), 1001);
        assert_eq!(CoreReason::Lowering.error_code(), 1002);
        assert_eq!(CoreReason::Materialization.error_code(), 1003);
    }
}
