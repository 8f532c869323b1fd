use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of the on-chain state of a Safe.
///
/// Fetched per request and never cached, the nonce may move between two reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeInfo {
    pub address: Address,
    pub nonce: U256,
    pub threshold: U256,
    pub owners: Vec<Address>,
    pub master_copy: Address,
}

/// Operation type of a Safe transaction (`Enum.Operation` in the contracts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SafeOperation {
    #[default]
    Call,
    DelegateCall,
    Create,
}

impl From<SafeOperation> for u8 {
    fn from(operation: SafeOperation) -> Self {
        match operation {
            SafeOperation::Call => 0,
            SafeOperation::DelegateCall => 1,
            SafeOperation::Create => 2,
        }
    }
}

impl TryFrom<u8> for SafeOperation {
    type Error = InvalidSafeOperation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SafeOperation::Call),
            1 => Ok(SafeOperation::DelegateCall),
            2 => Ok(SafeOperation::Create),
            other => Err(InvalidSafeOperation(other)),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid Safe operation: {0}")]
pub struct InvalidSafeOperation(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_operation_from_u8() {
        assert_eq!(SafeOperation::try_from(0u8), Ok(SafeOperation::Call));
        assert_eq!(SafeOperation::try_from(1u8), Ok(SafeOperation::DelegateCall));
        assert_eq!(SafeOperation::try_from(2u8), Ok(SafeOperation::Create));
        assert_eq!(SafeOperation::try_from(3u8), Err(InvalidSafeOperation(3)));
    }

    #[test]
    fn test_safe_operation_into_u8() {
        assert_eq!(u8::from(SafeOperation::Call), 0);
        assert_eq!(u8::from(SafeOperation::DelegateCall), 1);
        assert_eq!(u8::from(SafeOperation::Create), 2);
    }
}
