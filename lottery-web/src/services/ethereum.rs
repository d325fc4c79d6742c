//! Browser Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider injected at `window.ethereum`
//! (MetaMask and compatible extensions). Every request goes through a single
//! `ethereum.request({ method, params })` binding; rejections are normalized to
//! `{ code, message }` so they deserialize into [`RpcErrorPayload`].

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::{hex, Address, U256};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::rpc::{CallRequest, RpcErrorPayload, TransactionReceipt, TransactionRequest};
use shared::units::parse_quantity;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::LotteryError;
use crate::services::provider::{AccountsHandler, Eip1193Provider, ProviderEvent};

// ============================================================================
// EIP-1193 BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(method, params) {
    try {
        return await window.ethereum.request({ method: method, params: params });
    } catch (error) {
        // Providers reject with Error subclasses carrying `code`; flatten them
        throw {
            code: (error && typeof error.code === 'number') ? error.code : 0,
            message: (error && error.message) ? error.message : String(error)
        };
    }
}

export function ethereumOn(event, handler) {
    window.ethereum.on(event, handler);
}

export function ethereumRemoveListener(event, handler) {
    window.ethereum.removeListener(event, handler);
}
")]
extern "C" {
    /// Whether a wallet extension injected `window.ethereum`
    pub fn hasEthereum() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(catch)]
    pub async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    /// `window.ethereum.on(event, handler)`
    pub fn ethereumOn(event: &str, handler: &js_sys::Function);

    /// `window.ethereum.removeListener(event, handler)`
    pub fn ethereumRemoveListener(event: &str, handler: &js_sys::Function);
}

// ============================================================================
// BROWSER PROVIDER
// ============================================================================

struct Listener {
    event: ProviderEvent,
    handler: AccountsHandler,
    closure: Closure<dyn Fn(JsValue)>,
}

/// [`Eip1193Provider`] backed by `window.ethereum`.
///
/// Registered listeners keep their JS closure alive here, keyed by the Rust
/// handler's allocation, so `unsubscribe` hands `removeListener` the exact JS
/// function that `on` received.
pub struct BrowserProvider {
    listeners: RefCell<Vec<Listener>>,
}

impl BrowserProvider {
    /// `None` when no wallet extension is installed.
    pub fn detect() -> Option<Self> {
        if !hasEthereum() {
            log::warn!("[WALLET] window.ethereum not found");
            return None;
        }
        Some(Self {
            listeners: RefCell::new(Vec::new()),
        })
    }

    async fn request<T, A>(&self, method: &str, params: A) -> Result<T, LotteryError>
    where
        T: DeserializeOwned,
        A: Serialize,
    {
        let params = serde_wasm_bindgen::to_value(&params)
            .map_err(|e| LotteryError::Decode(format!("{}: {}", method, e)))?;

        let result = ethereumRequest(method, params).await.map_err(rpc_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| LotteryError::Decode(format!("{}: {}", method, e)))
    }
}

fn rpc_error(err: JsValue) -> LotteryError {
    match serde_wasm_bindgen::from_value::<RpcErrorPayload>(err.clone()) {
        Ok(payload) => payload.into(),
        Err(_) => LotteryError::Decode(format!("provider error: {:?}", err)),
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for BrowserProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, LotteryError> {
        self.request("eth_requestAccounts", Vec::<String>::new()).await
    }

    fn subscribe(&self, event: ProviderEvent, handler: &AccountsHandler) {
        let callback = Rc::clone(handler);
        let closure = Closure::<dyn Fn(JsValue)>::new(move |accounts: JsValue| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_else(|e| {
                log::error!("[WALLET] Unreadable {} payload: {}", event.name(), e);
                Vec::new()
            });
            callback(accounts);
        });

        ethereumOn(event.name(), closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(Listener {
            event,
            handler: Rc::clone(handler),
            closure,
        });
    }

    fn unsubscribe(&self, event: ProviderEvent, handler: &AccountsHandler) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(index) = listeners
            .iter()
            .position(|l| l.event == event && Rc::ptr_eq(&l.handler, handler))
        else {
            log::warn!("[WALLET] No {} listener registered for this handler", event.name());
            return;
        };

        let listener = listeners.remove(index);
        ethereumRemoveListener(event.name(), listener.closure.as_ref().unchecked_ref());
    }

    async fn get_balance(&self, address: Address) -> Result<U256, LotteryError> {
        let quantity: String = self
            .request("eth_getBalance", (address.to_string(), "latest"))
            .await?;
        Ok(parse_quantity(&quantity)?)
    }

    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, LotteryError> {
        let output: String = self.request("eth_call", (request, "latest")).await?;
        hex::decode(&output).map_err(|e| LotteryError::Decode(format!("eth_call output: {}", e)))
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, LotteryError> {
        self.request("eth_sendTransaction", [request]).await
    }

    async fn transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>, LotteryError> {
        self.request("eth_getTransactionReceipt", [hash]).await
    }
}
