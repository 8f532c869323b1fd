use serde::{Deserialize, Serialize};

/// Gas prices in wei per gas unit as reported by the gas station.
///
/// `fast >= standard` is expected from the gas station and not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPrices {
    pub fast: u128,
    pub standard: u128,
}
