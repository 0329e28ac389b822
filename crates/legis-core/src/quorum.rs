use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuorumKind {
    SimpleMajorityOfPresent,
    AbsoluteMajorityOfTotal,
    TwoThirdsOfTotal,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuorumResult {
    pub total_members: u32,
    pub present: u32,
    pub required: u32,
    pub met: bool,
}

/// Quorum arithmetic shared by installation and voting checks.
///
/// Caller contract: `present <= total_members`. The calculator does not
/// validate that precondition.
///
/// `required` is always a whole vote count:
/// - simple majority of present: floor(present / 2) + 1
/// - absolute majority of total: floor(total / 2) + 1
/// - two thirds of total: ceil(total * 2 / 3)
pub fn compute_quorum(total_members: u32, present: u32, kind: QuorumKind) -> QuorumResult {
    let required = match kind {
        QuorumKind::SimpleMajorityOfPresent => present / 2 + 1,
        QuorumKind::AbsoluteMajorityOfTotal => total_members / 2 + 1,
        QuorumKind::TwoThirdsOfTotal => (total_members * 2).div_ceil(3),
    };
    QuorumResult {
        total_members,
        present,
        required,
        met: present >= required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_example_nine_members_seven_present() {
        let abs = compute_quorum(9, 7, QuorumKind::AbsoluteMajorityOfTotal);
        assert_eq!(abs.required, 5);
        assert!(abs.met);

        let two_thirds = compute_quorum(9, 7, QuorumKind::TwoThirdsOfTotal);
        assert_eq!(two_thirds.required, 6);
        assert!(two_thirds.met);

        let simple = compute_quorum(9, 7, QuorumKind::SimpleMajorityOfPresent);
        assert_eq!(simple.required, 4);
        assert!(simple.met);
    }

    #[test]
    fn nobody_present_never_meets_quorum() {
        let q = compute_quorum(9, 0, QuorumKind::SimpleMajorityOfPresent);
        assert_eq!(q.required, 1);
        assert!(!q.met);
    }

    #[test]
    fn absolute_majority_even_chamber() {
        let q = compute_quorum(10, 5, QuorumKind::AbsoluteMajorityOfTotal);
        assert_eq!(q.required, 6);
        assert!(!q.met);
    }

    #[test]
    fn two_thirds_rounds_up() {
        assert_eq!(compute_quorum(10, 10, QuorumKind::TwoThirdsOfTotal).required, 7);
        assert_eq!(compute_quorum(12, 12, QuorumKind::TwoThirdsOfTotal).required, 8);
        assert_eq!(compute_quorum(0, 0, QuorumKind::TwoThirdsOfTotal).required, 0);
    }

    #[test]
    fn met_tracks_required_boundary() {
        for total in 0u32..=15 {
            for present in 0..=total {
                for kind in [
                    QuorumKind::SimpleMajorityOfPresent,
                    QuorumKind::AbsoluteMajorityOfTotal,
                    QuorumKind::TwoThirdsOfTotal,
                ] {
                    let q = compute_quorum(total, present, kind);
                    assert_eq!(q.met, present >= q.required);
                }
            }
        }
    }
}
