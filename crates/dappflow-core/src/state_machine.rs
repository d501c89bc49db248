use crate::ports::PortError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    ChainChecking,
    Submitting,
    Confirmed,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Begin,
    ChainCheck,
    Dispatch,
    Confirm,
    Reject,
    Fail,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: SubmitPhase,
    pub to: SubmitPhase,
    pub reason: &'static str,
}

/// Transition table for one submission. `Idle` is both the initial state and
/// the terminal-reentry state; a new submission is only accepted from `Idle`.
pub fn submit_transition(
    phase: SubmitPhase,
    action: SubmitAction,
) -> Result<(SubmitPhase, PhaseTransition), PortError> {
    use SubmitAction as A;
    use SubmitPhase as P;

    let to = match (phase, action) {
        (P::Idle, A::Begin) => P::Validating,
        (P::Validating, A::ChainCheck) => P::ChainChecking,
        (P::ChainChecking, A::Dispatch) => P::Submitting,
        (P::Submitting, A::Confirm) => P::Confirmed,
        (P::Submitting, A::Reject) => P::Rejected,
        (P::Validating | P::ChainChecking | P::Submitting, A::Fail) => P::Failed,
        (P::Confirmed | P::Rejected | P::Failed, A::Reset) => P::Idle,
        _ => {
            return Err(PortError::Validation(format!(
                "illegal submission transition: {phase:?} via {action:?}"
            )))
        }
    };
    Ok((
        to,
        PhaseTransition {
            from: phase,
            to,
            reason: action_reason(action),
        },
    ))
}

fn action_reason(action: SubmitAction) -> &'static str {
    match action {
        SubmitAction::Begin => "begin",
        SubmitAction::ChainCheck => "chain_check",
        SubmitAction::Dispatch => "dispatch",
        SubmitAction::Confirm => "confirmed",
        SubmitAction::Reject => "user_rejected",
        SubmitAction::Fail => "failed",
        SubmitAction::Reset => "reset",
    }
}
