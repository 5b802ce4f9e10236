use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::Balance;

pub const BALANCE_PATH: &str = "/sms/balance";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    success: bool,
    #[serde(default)]
    balance: Option<TransportScalar>,
    #[serde(default)]
    description: Option<String>,
}

pub fn decode_balance_json_response(body: &[u8]) -> Result<Balance, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_slice(body)?;
    Ok(Balance {
        success: parsed.success,
        balance: parsed.balance.map(TransportScalar::into_string),
        description: parsed.description.unwrap_or_default(),
    })
}
