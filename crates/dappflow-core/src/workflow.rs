use alloy::primitives::aliases::{I24, U24};
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::contracts::{self, Erc20, PositionManager};
use crate::domain::{ChainTarget, Session, SubmissionResult, TransferRequest};
use crate::ports::{BalanceFallbackPort, ClockPort, PortError, WalletProviderPort};
use crate::position::PositionPlan;
use crate::state_machine::{submit_transition, SubmitAction, SubmitPhase};
use crate::units::{self, ZERO_BALANCE};

/// Seconds a mint stays valid after submission.
const MINT_DEADLINE_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no wallet provider detected; install a browser wallet")]
    ProviderUnavailable,
    #[error("request declined in the wallet")]
    UserRejected,
    #[error("chain switch failed: {0}")]
    ChainSwitchFailed(String),
    #[error("recipient is not a valid 20-byte hex address")]
    InvalidAddress,
    #[error("amount must be a positive decimal number")]
    InvalidAmount,
    #[error("amount exceeds the last known balance")]
    InsufficientBalance,
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(String),
    #[error("no active account; connect the wallet first")]
    NotConnected,
    #[error("wallet request failed: {0}")]
    Provider(String),
}

/// The action submitted after the chain check: a plain native transfer or the
/// approve-then-mint liquidity sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Transfer(TransferRequest),
    Position(PositionPlan),
}

/// One parameterized workflow over an injected provider bridge, a direct-RPC
/// balance fallback, and a clock. All state is in-memory for the lifetime of
/// the page session; nothing is persisted.
pub struct WalletWorkflow<P, F, C>
where
    P: WalletProviderPort,
    F: BalanceFallbackPort,
    C: ClockPort,
{
    pub provider: P,
    pub fallback: F,
    pub clock: C,
    target: ChainTarget,
    session: Session,
    phase: SubmitPhase,
    last_balance: Option<U256>,
}

impl<P, F, C> WalletWorkflow<P, F, C>
where
    P: WalletProviderPort,
    F: BalanceFallbackPort,
    C: ClockPort,
{
    pub fn new(provider: P, fallback: F, clock: C, target: ChainTarget) -> Self {
        Self {
            provider,
            fallback,
            clock,
            target,
            session: Session::default(),
            phase: SubmitPhase::Idle,
            last_balance: None,
        }
    }

    pub fn target(&self) -> &ChainTarget {
        &self.target
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn last_balance(&self) -> Option<U256> {
        self.last_balance
    }

    /// Page-load path: queries already-authorized accounts without prompting.
    /// On success the chain guard and a balance read run as a continuation,
    /// mirroring an authorized return visit. Provider errors are swallowed;
    /// an absent or unauthorized provider is a normal outcome.
    pub fn restore_session(&mut self) -> Option<Address> {
        let accounts = match self.provider.authorized_accounts() {
            Ok(accounts) => accounts,
            Err(e) => {
                debug!(error = %e, "session restore skipped");
                return None;
            }
        };
        let account = *accounts.first()?;
        self.session.active_account = Some(account);
        info!(%account, "session restored");
        if let Err(e) = self.ensure_chain() {
            warn!(error = %e, "chain guard failed during session restore");
        }
        self.read_balance(account);
        Some(account)
    }

    /// Prompts the user for authorization. `is_connecting` is set for the
    /// duration and reset regardless of outcome.
    pub fn request_connection(&mut self) -> Result<Address, WorkflowError> {
        self.session.is_connecting = true;
        let result = self.connect_inner();
        self.session.is_connecting = false;
        result
    }

    fn connect_inner(&mut self) -> Result<Address, WorkflowError> {
        let accounts = self.provider.request_accounts().map_err(connect_error)?;
        let account = *accounts
            .first()
            .ok_or_else(|| WorkflowError::Provider("provider returned no accounts".to_owned()))?;
        self.session.active_account = Some(account);
        info!(%account, "wallet connected");
        self.ensure_chain()?;
        self.read_balance(account);
        Ok(account)
    }

    /// Local state reset only; the provider keeps its authorization grant.
    pub fn disconnect(&mut self) {
        self.session.clear();
        self.last_balance = None;
        info!("wallet disconnected");
    }

    /// Puts the provider on the target chain. Idempotent: a matching chain id
    /// is a no-op. An unrecognized-chain failure on switch falls back to
    /// registering the chain definition, which implies the switch.
    pub fn ensure_chain(&self) -> Result<(), WorkflowError> {
        let current = self
            .provider
            .chain_id()
            .map_err(|e| WorkflowError::ChainSwitchFailed(e.to_string()))?;
        if current == self.target.chain_id {
            return Ok(());
        }
        match self.provider.switch_chain(self.target.chain_id) {
            Ok(()) => Ok(()),
            Err(e) if e.unrecognized_chain() => {
                debug!(chain_id = self.target.chain_id, "registering chain with provider");
                self.provider
                    .add_chain(&self.target)
                    .map_err(|add| WorkflowError::ChainSwitchFailed(add.to_string()))
            }
            Err(e) => Err(WorkflowError::ChainSwitchFailed(e.to_string())),
        }
    }

    /// Balance in display units, six fractional digits. Never fails: a broken
    /// provider path falls back to the public RPC endpoint, and a broken
    /// fallback degrades to a zero balance so the rest of the page stays
    /// usable.
    pub fn read_balance(&mut self, account: Address) -> String {
        if let Err(e) = self.ensure_chain() {
            warn!(error = %e, "provider balance path failed, using RPC fallback");
            return self.fallback_balance(account);
        }
        match self.provider.balance_of(account) {
            Ok(minimal) => {
                self.last_balance = Some(minimal);
                units::format_native(minimal, self.target.native_currency.decimals)
            }
            Err(e) => {
                warn!(error = %e, "provider balance path failed, using RPC fallback");
                self.fallback_balance(account)
            }
        }
    }

    fn fallback_balance(&mut self, account: Address) -> String {
        match self.fallback.balance_of(account) {
            Ok(minimal) => {
                self.last_balance = Some(minimal);
                units::format_native(minimal, self.target.native_currency.decimals)
            }
            Err(e) => {
                warn!(error = %e, "RPC balance fallback failed, degrading to zero");
                self.last_balance = None;
                ZERO_BALANCE.to_owned()
            }
        }
    }

    /// Advisory pre-flight check; the authoritative validation is whatever the
    /// network enforces at broadcast time.
    pub fn validate_request(&self, req: &TransferRequest) -> Result<(), WorkflowError> {
        req.recipient_address()
            .map_err(|_| WorkflowError::InvalidAddress)?;
        let amount = units::to_minimal_units(
            &req.amount_native,
            self.target.native_currency.decimals,
        )
        .map_err(|_| WorkflowError::InvalidAmount)?;
        if let Some(known) = self.last_balance {
            if amount > known {
                return Err(WorkflowError::InsufficientBalance);
            }
        }
        Ok(())
    }

    /// Runs one submission through the state machine. Only accepted from
    /// `Idle`; the workflow is back in `Idle` when this returns, whatever the
    /// outcome.
    pub fn submit(&mut self, req: &SubmitRequest) -> Result<SubmissionResult, WorkflowError> {
        if self.phase != SubmitPhase::Idle {
            return Err(WorkflowError::SubmissionFailed(
                "a submission is already in progress".to_owned(),
            ));
        }
        self.advance(SubmitAction::Begin)?;
        let outcome = self.submit_inner(req);
        let closing = match &outcome {
            Ok(_) => SubmitAction::Confirm,
            Err(WorkflowError::UserRejected) => SubmitAction::Reject,
            Err(_) => SubmitAction::Fail,
        };
        self.advance(closing)?;
        self.advance(SubmitAction::Reset)?;
        outcome
    }

    fn submit_inner(&mut self, req: &SubmitRequest) -> Result<SubmissionResult, WorkflowError> {
        if !self.session.is_connected() {
            return Err(WorkflowError::NotConnected);
        }
        match req {
            SubmitRequest::Transfer(transfer) => self.validate_request(transfer)?,
            SubmitRequest::Position(plan) => validate_position(plan)?,
        }
        self.advance(SubmitAction::ChainCheck)?;
        self.ensure_chain()?;
        self.advance(SubmitAction::Dispatch)?;
        let result = match req {
            SubmitRequest::Transfer(transfer) => self.dispatch_transfer(transfer)?,
            SubmitRequest::Position(plan) => self.dispatch_position(plan)?,
        };
        info!(transaction_id = %result.transaction_id, "transaction submitted");
        Ok(result)
    }

    fn dispatch_transfer(
        &mut self,
        req: &TransferRequest,
    ) -> Result<SubmissionResult, WorkflowError> {
        let recipient = req
            .recipient_address()
            .map_err(|_| WorkflowError::InvalidAddress)?;
        let value = units::to_minimal_units(
            &req.amount_native,
            self.target.native_currency.decimals,
        )
        .map_err(|_| WorkflowError::InvalidAmount)?;
        let mut payload = tx_payload(req.sender, recipient, value, None);
        self.finalize_gas(&mut payload, req.gas_limit)?;
        let transaction_id = self
            .provider
            .send_transaction(&payload)
            .map_err(send_error)?;
        self.read_balance(req.sender);
        Ok(SubmissionResult { transaction_id })
    }

    /// Approve each token to the position manager, awaiting confirmation of
    /// every step before the next; the approvals and the mint share a sender
    /// nonce sequence and must not overlap.
    fn dispatch_position(&mut self, plan: &PositionPlan) -> Result<SubmissionResult, WorkflowError> {
        let ordered = plan.ordered().map_err(|_| WorkflowError::InvalidAmount)?;
        let ticks = plan.tick_range().map_err(|_| WorkflowError::InvalidAmount)?;

        for (token, amount) in [
            (ordered.token0, ordered.amount0),
            (ordered.token1, ordered.amount1),
        ] {
            let call = Erc20::approveCall {
                spender: contracts::POSITION_MANAGER,
                amount,
            };
            let data = Bytes::from(call.abi_encode());
            let mut payload = tx_payload(plan.sender, token.address, U256::ZERO, Some(&data));
            self.finalize_gas(&mut payload, None)?;
            let approval_id = self
                .provider
                .send_transaction(&payload)
                .map_err(send_error)?;
            debug!(token = token.symbol, transaction_id = %approval_id, "approval submitted");
            self.provider
                .await_confirmation(approval_id)
                .map_err(send_error)?;
        }

        let deadline = self
            .clock
            .now_ms()
            .map_err(|e| WorkflowError::SubmissionFailed(e.to_string()))?
            / 1000
            + MINT_DEADLINE_SECS;
        let call = PositionManager::mintCall {
            params: PositionManager::MintParams {
                token0: ordered.token0.address,
                token1: ordered.token1.address,
                fee: U24::try_from(plan.fee)
                    .map_err(|_| WorkflowError::InvalidAmount)?,
                tickLower: I24::try_from(ticks.lower)
                    .map_err(|_| WorkflowError::InvalidAmount)?,
                tickUpper: I24::try_from(ticks.upper)
                    .map_err(|_| WorkflowError::InvalidAmount)?,
                amount0Desired: ordered.amount0,
                amount1Desired: ordered.amount1,
                amount0Min: U256::ZERO,
                amount1Min: U256::ZERO,
                recipient: plan.sender,
                deadline: U256::from(deadline),
            },
        };
        let data = Bytes::from(call.abi_encode());
        let mut payload = tx_payload(plan.sender, contracts::POSITION_MANAGER, U256::ZERO, Some(&data));
        self.finalize_gas(&mut payload, None)?;
        let transaction_id = self
            .provider
            .send_transaction(&payload)
            .map_err(send_error)?;
        self.provider
            .await_confirmation(transaction_id)
            .map_err(send_error)?;
        self.read_balance(plan.sender);
        Ok(SubmissionResult { transaction_id })
    }

    fn finalize_gas(
        &self,
        payload: &mut Value,
        gas_limit: Option<u64>,
    ) -> Result<(), WorkflowError> {
        let gas = match gas_limit {
            Some(limit) => U256::from(limit),
            None => self.provider.estimate_gas(payload).map_err(send_error)?,
        };
        let gas_price = self.provider.gas_price().map_err(send_error)?;
        payload["gas"] = json!(format!("{gas:#x}"));
        payload["gasPrice"] = json!(format!("{gas_price:#x}"));
        Ok(())
    }

    fn advance(&mut self, action: SubmitAction) -> Result<(), WorkflowError> {
        let (next, transition) = submit_transition(self.phase, action)
            .map_err(|e| WorkflowError::SubmissionFailed(e.to_string()))?;
        debug!(from = ?transition.from, to = ?transition.to, reason = transition.reason, "submission phase");
        self.phase = next;
        Ok(())
    }
}

fn validate_position(plan: &PositionPlan) -> Result<(), WorkflowError> {
    plan.ordered().map_err(|_| WorkflowError::InvalidAmount)?;
    plan.tick_range().map_err(|_| WorkflowError::InvalidAmount)?;
    Ok(())
}

fn tx_payload(from: Address, to: Address, value: U256, data: Option<&Bytes>) -> Value {
    let mut payload = json!({
        "from": from.to_string(),
        "to": to.to_string(),
        "value": format!("{value:#x}"),
    });
    if let Some(data) = data {
        payload["data"] = json!(data.to_string());
    }
    payload
}

fn connect_error(e: PortError) -> WorkflowError {
    if e.user_rejected() {
        WorkflowError::UserRejected
    } else if matches!(e, PortError::Unavailable(_)) {
        WorkflowError::ProviderUnavailable
    } else {
        WorkflowError::Provider(e.to_string())
    }
}

fn send_error(e: PortError) -> WorkflowError {
    if e.user_rejected() {
        WorkflowError::UserRejected
    } else {
        WorkflowError::SubmissionFailed(e.to_string())
    }
}
