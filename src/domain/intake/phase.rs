//! Intake dialogue phases.
//!
//! Defines the named steps of the scripted intake conversation and the
//! valid transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current phase of the scripted intake dialogue for one call.
///
/// Phases move forward along one of two branches:
/// - Standard: `CollectName` → `CollectPhone` → `CollectIssue` → `Completed`
/// - Emergency: `EmergencyConfirmation` → `EmergencyCollectAddress` →
///   `EmergencyCompleted`
///
/// Any standard phase can move sideways into `EmergencyConfirmation` when
/// emergency language is detected. The emergency branch never returns to the
/// standard branch, and no phase regresses within its branch. The only
/// loops are the invalid-input retry loops (`CollectName`, `CollectPhone`)
/// and the fixed closing acknowledgments (`Completed`, `EmergencyCompleted`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CallPhase {
    /// Asking for the caller's name.
    #[default]
    CollectName,

    /// Asking for a 10-digit callback number.
    CollectPhone,

    /// Asking for the nature of the service issue.
    CollectIssue,

    /// Standard intake finished; lead has been emitted.
    Completed,

    /// Emergency detected; confirming the caller is safe.
    EmergencyConfirmation,

    /// Asking for the exact dispatch address.
    EmergencyCollectAddress,

    /// Emergency intake finished; alert has been emitted.
    EmergencyCompleted,
}

impl CallPhase {
    /// Returns true if this phase belongs to the standard intake branch.
    pub fn is_standard(&self) -> bool {
        matches!(
            self,
            Self::CollectName | Self::CollectPhone | Self::CollectIssue | Self::Completed
        )
    }

    /// Returns true if this phase belongs to the emergency branch.
    pub fn is_emergency(&self) -> bool {
        !self.is_standard()
    }

    /// Returns true if the scripted flow has nothing more to collect.
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Completed | Self::EmergencyCompleted)
    }
}

impl StateMachine for CallPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CallPhase::*;
        // Sideways into the emergency branch from any standard phase.
        if self.is_standard() && *target == EmergencyConfirmation {
            return true;
        }
        matches!(
            (self, target),
            // Standard branch, including invalid-input retry loops
            (CollectName, CollectName)
                | (CollectName, CollectPhone)
                | (CollectPhone, CollectPhone)
                | (CollectPhone, CollectIssue)
                | (CollectIssue, Completed)
                | (Completed, Completed)
                // Emergency branch
                | (EmergencyConfirmation, EmergencyCollectAddress)
                | (EmergencyCollectAddress, EmergencyCompleted)
                | (EmergencyCompleted, EmergencyCompleted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CallPhase::*;
        match self {
            CollectName => vec![CollectName, CollectPhone, EmergencyConfirmation],
            CollectPhone => vec![CollectPhone, CollectIssue, EmergencyConfirmation],
            CollectIssue => vec![Completed, EmergencyConfirmation],
            Completed => vec![Completed, EmergencyConfirmation],
            EmergencyConfirmation => vec![EmergencyCollectAddress],
            EmergencyCollectAddress => vec![EmergencyCompleted],
            EmergencyCompleted => vec![EmergencyCompleted],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PHASES: [CallPhase; 7] = [
        CallPhase::CollectName,
        CallPhase::CollectPhone,
        CallPhase::CollectIssue,
        CallPhase::Completed,
        CallPhase::EmergencyConfirmation,
        CallPhase::EmergencyCollectAddress,
        CallPhase::EmergencyCompleted,
    ];

    mod phase_basics {
        use super::*;

        #[test]
        fn default_phase_is_collect_name() {
            assert_eq!(CallPhase::default(), CallPhase::CollectName);
        }

        #[test]
        fn serializes_to_snake_case() {
            let phase = CallPhase::EmergencyCollectAddress;
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, "\"emergency_collect_address\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let phase: CallPhase = serde_json::from_str("\"collect_phone\"").unwrap();
            assert_eq!(phase, CallPhase::CollectPhone);
        }

        #[test]
        fn branch_membership_is_a_partition() {
            for phase in ALL_PHASES {
                assert_ne!(phase.is_standard(), phase.is_emergency());
            }
        }

        #[test]
        fn closing_phases_are_completed_and_emergency_completed() {
            assert!(CallPhase::Completed.is_closing());
            assert!(CallPhase::EmergencyCompleted.is_closing());
            assert!(!CallPhase::CollectIssue.is_closing());
            assert!(!CallPhase::EmergencyCollectAddress.is_closing());
        }
    }

    mod standard_branch {
        use super::*;

        #[test]
        fn standard_phases_advance_forward() {
            assert!(CallPhase::CollectName.can_transition_to(&CallPhase::CollectPhone));
            assert!(CallPhase::CollectPhone.can_transition_to(&CallPhase::CollectIssue));
            assert!(CallPhase::CollectIssue.can_transition_to(&CallPhase::Completed));
        }

        #[test]
        fn retry_loops_allowed_for_name_and_phone() {
            assert!(CallPhase::CollectName.can_transition_to(&CallPhase::CollectName));
            assert!(CallPhase::CollectPhone.can_transition_to(&CallPhase::CollectPhone));
        }

        #[test]
        fn no_regression_within_standard_branch() {
            assert!(!CallPhase::CollectPhone.can_transition_to(&CallPhase::CollectName));
            assert!(!CallPhase::CollectIssue.can_transition_to(&CallPhase::CollectPhone));
            assert!(!CallPhase::Completed.can_transition_to(&CallPhase::CollectIssue));
        }

        #[test]
        fn no_phase_skipping() {
            assert!(!CallPhase::CollectName.can_transition_to(&CallPhase::CollectIssue));
            assert!(!CallPhase::CollectPhone.can_transition_to(&CallPhase::Completed));
        }
    }

    mod emergency_branch {
        use super::*;

        #[test]
        fn every_standard_phase_can_enter_emergency_confirmation() {
            for phase in ALL_PHASES.iter().filter(|p| p.is_standard()) {
                assert!(
                    phase.can_transition_to(&CallPhase::EmergencyConfirmation),
                    "{:?} should allow emergency pre-emption",
                    phase
                );
            }
        }

        #[test]
        fn emergency_branch_advances_forward_only() {
            assert!(CallPhase::EmergencyConfirmation
                .can_transition_to(&CallPhase::EmergencyCollectAddress));
            assert!(CallPhase::EmergencyCollectAddress
                .can_transition_to(&CallPhase::EmergencyCompleted));
            assert!(!CallPhase::EmergencyCollectAddress
                .can_transition_to(&CallPhase::EmergencyConfirmation));
        }

        #[test]
        fn emergency_branch_never_returns_to_standard() {
            let emergency = [
                CallPhase::EmergencyConfirmation,
                CallPhase::EmergencyCollectAddress,
                CallPhase::EmergencyCompleted,
            ];
            for phase in emergency {
                for target in ALL_PHASES.iter().filter(|p| p.is_standard()) {
                    assert!(
                        !phase.can_transition_to(target),
                        "{:?} must not return to {:?}",
                        phase,
                        target
                    );
                }
            }
        }

        #[test]
        fn emergency_phases_cannot_reenter_confirmation() {
            assert!(!CallPhase::EmergencyConfirmation
                .can_transition_to(&CallPhase::EmergencyConfirmation));
            assert!(!CallPhase::EmergencyCompleted
                .can_transition_to(&CallPhase::EmergencyConfirmation));
        }
    }

    mod state_machine_trait {
        use super::*;

        #[test]
        fn transition_to_succeeds_for_valid_transition() {
            let result = CallPhase::CollectName.transition_to(CallPhase::CollectPhone);
            assert_eq!(result, Ok(CallPhase::CollectPhone));
        }

        #[test]
        fn transition_to_fails_for_invalid_transition() {
            let result = CallPhase::EmergencyCompleted.transition_to(CallPhase::CollectName);
            assert!(result.is_err());
        }

        #[test]
        fn no_phase_is_terminal() {
            // Closing phases still answer further turns with an acknowledgment.
            for phase in ALL_PHASES {
                assert!(!phase.is_terminal());
            }
        }

        #[test]
        fn valid_transitions_matches_can_transition_to() {
            for phase in ALL_PHASES {
                for target in phase.valid_transitions() {
                    assert!(
                        phase.can_transition_to(&target),
                        "can_transition_to should return true for {:?} -> {:?}",
                        phase,
                        target
                    );
                }
            }
        }
    }
}
