//! # Lottery Contract ABI
//!
//! The lottery contract exposes three functions:
//!
//! | Function            | Mutability   | Returns     |
//! |---------------------|--------------|-------------|
//! | `enter()`           | payable      | -           |
//! | `pickWinner()`      | nonpayable   | -           |
//! | `getParticipants()` | view         | `address[]` |
//!
//! [`ContractInterface`] is parsed from the standard JSON ABI format so the
//! description stays byte-for-byte what the contract's compiler emitted.
//! Call data is encoded from the function selector (first four bytes of the
//! keccak256 hash of the canonical signature). Only argument-less calls are
//! encoded and only `address[]` return values are decoded, which covers the
//! whole lottery interface.

use alloy_primitives::{keccak256, Address};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON ABI of the deployed lottery contract.
pub const LOTTERY_ABI: &str = r#"[
  { "inputs": [], "name": "enter", "outputs": [], "stateMutability": "payable", "type": "function" },
  { "inputs": [], "name": "pickWinner", "outputs": [], "stateMutability": "nonpayable", "type": "function" },
  {
    "inputs": [],
    "name": "getParticipants",
    "outputs": [{ "internalType": "address[]", "name": "", "type": "address[]" }],
    "stateMutability": "view",
    "type": "function"
  }
]"#;

const WORD: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("malformed ABI JSON: {0}")]
    Json(String),

    #[error("function `{0}` not found in contract interface")]
    UnknownFunction(String),

    #[error("function `{0}` takes arguments, which cannot be encoded")]
    UnsupportedArguments(String),

    #[error("function `{name}` returns ({found}), expected address[]")]
    UnexpectedOutput { name: String, found: String },

    #[error("return data truncated ({0} bytes)")]
    Truncated(usize),

    #[error("invalid dynamic offset {0}")]
    InvalidOffset(usize),
}

impl From<serde_json::Error> for AbiError {
    fn from(err: serde_json::Error) -> Self {
        AbiError::Json(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

/// A single input or output parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    pub state_mutability: StateMutability,
}

impl AbiFunction {
    /// Canonical signature, e.g. `getParticipants()`.
    pub fn signature(&self) -> String {
        let inputs: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        selector
    }

    pub fn is_payable(&self) -> bool {
        self.state_mutability == StateMutability::Payable
    }

    pub fn is_view(&self) -> bool {
        matches!(self.state_mutability, StateMutability::View | StateMutability::Pure)
    }

    /// Encode call data for an argument-less invocation.
    pub fn encode_call(&self) -> Result<Vec<u8>, AbiError> {
        if !self.inputs.is_empty() {
            return Err(AbiError::UnsupportedArguments(self.name.clone()));
        }
        Ok(self.selector().to_vec())
    }

    /// Decode the return data of a function declared as returning `address[]`.
    pub fn decode_addresses(&self, data: &[u8]) -> Result<Vec<Address>, AbiError> {
        match self.outputs.as_slice() {
            [output] if output.kind == "address[]" => decode_address_array(data),
            outputs => Err(AbiError::UnexpectedOutput {
                name: self.name.clone(),
                found: outputs
                    .iter()
                    .map(|p| p.kind.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            }),
        }
    }
}

/// The callable surface of a contract: its functions, by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractInterface {
    functions: Vec<AbiFunction>,
}

impl ContractInterface {
    /// Parse a JSON ABI. Entries other than functions (events, errors,
    /// constructors) are ignored.
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let functions = entries
            .into_iter()
            .filter(|entry| entry.get("type").and_then(|t| t.as_str()) == Some("function"))
            .map(serde_json::from_value::<AbiFunction>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { functions })
    }

    /// The lottery contract's interface.
    pub fn lottery() -> Self {
        // LOTTERY_ABI is a compile-time constant covered by tests
        Self::from_json(LOTTERY_ABI).unwrap_or_else(|_| Self { functions: Vec::new() })
    }

    pub fn function(&self, name: &str) -> Result<&AbiFunction, AbiError> {
        self.functions
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))
    }

    pub fn functions(&self) -> &[AbiFunction] {
        &self.functions
    }
}

/// Decode a single dynamic `address[]` return value.
///
/// Layout: head word holding the offset of the array, then at that offset a
/// length word followed by one left-padded word per address.
pub fn decode_address_array(data: &[u8]) -> Result<Vec<Address>, AbiError> {
    let offset = read_usize(data, 0)?;
    let length = read_usize(data, offset).map_err(|_| AbiError::InvalidOffset(offset))?;

    let start = offset + WORD;
    let end = length
        .checked_mul(WORD)
        .and_then(|n| n.checked_add(start))
        .filter(|end| *end <= data.len())
        .ok_or(AbiError::Truncated(data.len()))?;

    Ok(data[start..end]
        .chunks_exact(WORD)
        .map(|word| Address::from_slice(&word[WORD - 20..]))
        .collect())
}

/// Read the word at `at` as a `usize`; values that do not fit are rejected.
fn read_usize(data: &[u8], at: usize) -> Result<usize, AbiError> {
    let word = at
        .checked_add(WORD)
        .and_then(|end| data.get(at..end))
        .ok_or(AbiError::Truncated(data.len()))?;

    if word[..WORD - 8].iter().any(|b| *b != 0) {
        return Err(AbiError::InvalidOffset(at));
    }

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD - 8..]);
    usize::try_from(u64::from_be_bytes(tail)).map_err(|_| AbiError::InvalidOffset(at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: u64) -> Vec<u8> {
        let mut w = vec![0u8; 32];
        w[24..].copy_from_slice(&value.to_be_bytes());
        w
    }

    fn address_word(address: Address) -> Vec<u8> {
        let mut w = vec![0u8; 12];
        w.extend_from_slice(address.as_slice());
        w
    }

    fn encode_addresses(addresses: &[Address]) -> Vec<u8> {
        let mut data = word(32);
        data.extend(word(addresses.len() as u64));
        for address in addresses {
            data.extend(address_word(*address));
        }
        data
    }

    #[test]
    fn test_lottery_interface_has_three_functions() {
        let lottery = ContractInterface::lottery();
        assert_eq!(lottery.functions().len(), 3);

        let enter = lottery.function("enter").unwrap();
        assert!(enter.is_payable());
        assert!(!enter.is_view());

        let pick = lottery.function("pickWinner").unwrap();
        assert_eq!(pick.state_mutability, StateMutability::Nonpayable);

        let participants = lottery.function("getParticipants").unwrap();
        assert!(participants.is_view());
        assert_eq!(participants.outputs[0].kind, "address[]");
    }

    #[test]
    fn test_unknown_function() {
        let lottery = ContractInterface::lottery();
        assert_eq!(
            lottery.function("withdraw"),
            Err(AbiError::UnknownFunction("withdraw".to_string()))
        );
    }

    #[test]
    fn test_selectors() {
        let lottery = ContractInterface::lottery();
        assert_eq!(lottery.function("enter").unwrap().selector(), [0xe9, 0x7d, 0xcb, 0x62]);
        assert_eq!(lottery.function("pickWinner").unwrap().selector(), [0x5d, 0x49, 0x5a, 0xea]);
        assert_eq!(lottery.function("enter").unwrap().encode_call().unwrap(), vec![0xe9, 0x7d, 0xcb, 0x62]);
    }

    #[test]
    fn test_signature_with_inputs() {
        let abi = r#"[
            { "type": "event", "name": "Transfer", "inputs": [] },
            {
                "type": "function",
                "name": "transfer",
                "inputs": [{ "name": "to", "type": "address" }, { "name": "amount", "type": "uint256" }],
                "outputs": [{ "name": "", "type": "bool" }],
                "stateMutability": "nonpayable"
            }
        ]"#;
        let erc20 = ContractInterface::from_json(abi).unwrap();
        assert_eq!(erc20.functions().len(), 1);

        let transfer = erc20.function("transfer").unwrap();
        assert_eq!(transfer.signature(), "transfer(address,uint256)");
        assert_eq!(transfer.selector(), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(
            transfer.encode_call(),
            Err(AbiError::UnsupportedArguments("transfer".to_string()))
        );
        assert!(matches!(
            transfer.decode_addresses(&[]),
            Err(AbiError::UnexpectedOutput { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(ContractInterface::from_json("{"), Err(AbiError::Json(_))));
    }

    #[test]
    fn test_decode_address_array() {
        let a = Address::repeat_byte(0xaa);
        let b = Address::repeat_byte(0xbb);
        let c = Address::repeat_byte(0xcc);

        let data = encode_addresses(&[a, b, c]);
        let lottery = ContractInterface::lottery();
        let decoded = lottery
            .function("getParticipants")
            .unwrap()
            .decode_addresses(&data)
            .unwrap();

        assert_eq!(decoded, vec![a, b, c]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_address_array(&encode_addresses(&[])).unwrap(), Vec::<Address>::new());
    }

    #[test]
    fn test_decode_truncated() {
        let mut data = encode_addresses(&[Address::repeat_byte(1), Address::repeat_byte(2)]);
        data.truncate(data.len() - 1);
        assert!(matches!(decode_address_array(&data), Err(AbiError::Truncated(_))));
        assert!(matches!(decode_address_array(&[0u8; 10]), Err(AbiError::Truncated(10))));
    }

    #[test]
    fn test_decode_bad_offset() {
        let mut data = word(4096);
        data.extend(word(0));
        assert!(matches!(decode_address_array(&data), Err(AbiError::InvalidOffset(4096))));
    }
}
