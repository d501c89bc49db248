pub mod contracts;
pub mod domain;
pub mod ports;
pub mod position;
pub mod state_machine;
pub mod units;
pub mod workflow;

pub use domain::{ChainTarget, NativeCurrency, Session, SubmissionResult, TokenInfo, TransferRequest};
pub use ports::{
    BalanceFallbackPort, ClockPort, PortError, WalletProviderPort, CODE_UNRECOGNIZED_CHAIN,
    CODE_USER_REJECTED,
};
pub use position::{PositionPlan, TickRange};
pub use state_machine::{submit_transition, PhaseTransition, SubmitAction, SubmitPhase};
pub use workflow::{SubmitRequest, WalletWorkflow, WorkflowError};
